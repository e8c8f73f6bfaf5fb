mod app;
mod cli;
mod config;
mod error;
mod output;
mod policy;
mod sweeper;
mod utils;

use clap::Parser;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() {
    init_tracing();

    let cli = cli::Cli::parse();
    let plan = app::Plan::hardcoded();
    app::run(
        cli.command(),
        &plan,
        &sweeper::RetentionSweeper::new(),
        &mut std::io::stdout().lock(),
    );
}

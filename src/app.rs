use std::io::Write;

use tracing::info;

use crate::cli::Command;
use crate::output;
use crate::policy::RetentionPolicy;
use crate::sweeper::{RetentionSweeper, RunReport};

/// Policies a run may sweep. The temp-file policy is only used by the
/// timed variant.
pub struct Plan {
    pub data: RetentionPolicy,
    pub tmp: RetentionPolicy,
}

impl Plan {
    pub fn hardcoded() -> Self {
        Self {
            data: crate::config::data_policy(),
            tmp: crate::config::tmp_policy(),
        }
    }
}

/// Execute one variant, writing progress to `out`. Always completes; the
/// report is printed by the timed variant and otherwise dropped.
pub fn run<W: Write>(
    command: Command,
    plan: &Plan,
    sweeper: &RetentionSweeper,
    out: &mut W,
) -> RunReport {
    info!(?command, "starting sweep");

    let report = match command {
        Command::Data => {
            let report = sweeper.sweep(&plan.data, out);
            output::print_complete(out);
            report
        }
        Command::Timed => {
            let started = chrono::Local::now();
            output::print_start_time(out, &started);

            let data = sweeper.sweep(&plan.data, out);
            let tmp = sweeper.sweep(&plan.tmp, out);
            let report = RunReport {
                start_time: started,
                ..data.through(tmp)
            };

            output::print_complete(out);
            output::print_end_time(out, &report.end_time);
            output::print_elapsed(out, report.elapsed_seconds());
            report
        }
    };

    info!(elapsed_secs = report.elapsed_seconds(), "sweep finished");
    report
}

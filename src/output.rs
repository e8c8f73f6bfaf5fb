use std::fmt;
use std::io::Write;
use std::path::Path;

use chrono::{DateTime, Local};
use colored::Colorize;
use tracing::debug;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn format_timestamp(ts: &DateTime<Local>) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// Progress output is best-effort like the rest of the sweep: a closed
/// stdout must not stop pruning.
fn emit<W: Write>(out: &mut W, line: fmt::Arguments<'_>) {
    if let Err(err) = writeln!(out, "{line}") {
        debug!(error = %err, "cannot write progress line");
    }
}

pub fn print_start_time<W: Write>(out: &mut W, ts: &DateTime<Local>) {
    emit(out, format_args!("{} {}", "Start time:".bold(), format_timestamp(ts)));
}

/// `Pruning <subject> in <path>...`
pub fn print_pruning<W: Write>(out: &mut W, subject: &str, path: &Path) {
    emit(
        out,
        format_args!(
            "{} {}{}",
            format!("Pruning {subject} in").cyan(),
            path.display().to_string().dimmed(),
            "...".cyan()
        ),
    );
}

pub fn print_complete<W: Write>(out: &mut W) {
    emit(out, format_args!("{}", "Pruning completed.".green().bold()));
}

pub fn print_end_time<W: Write>(out: &mut W, ts: &DateTime<Local>) {
    emit(out, format_args!("{} {}", "End time:".bold(), format_timestamp(ts)));
}

pub fn print_elapsed<W: Write>(out: &mut W, seconds: i64) {
    emit(
        out,
        format_args!(
            "{} {}",
            "Elapsed time:".bold(),
            format!("{seconds} seconds").yellow()
        ),
    );
}

#[cfg(test)]
pub(crate) fn plain_lines(buf: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(buf).lines().map(str::to_owned).collect()
}

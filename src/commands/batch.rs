use clap::Args;

use slugkit::io::read_source;
use slugkit::{log_status, slugify_batch, BatchOutcome};

use super::{slugifier_for, CmdResult, SlugFlags};

#[derive(Args)]
pub struct BatchArgs {
    /// Input source: @file or - for stdin (default: stdin)
    #[arg(default_value = "-")]
    pub source: String,

    #[command(flatten)]
    pub flags: SlugFlags,
}

pub fn run(args: BatchArgs, _global: &crate::commands::GlobalArgs) -> CmdResult<BatchOutcome> {
    let content = read_source(&args.source)?;
    let slugifier = slugifier_for(&args.flags)?;

    let outcome = slugify_batch(&slugifier, input_lines(&content));

    if !outcome.all_succeeded() {
        log_status!(
            "batch",
            "{} of {} inputs failed",
            outcome.summary.failed,
            outcome.summary.total
        );
    }

    let exit_code = if outcome.all_succeeded() { 0 } else { 1 };
    Ok((outcome, exit_code))
}

/// One input per line; blank lines are skipped.
fn input_lines(content: &str) -> impl Iterator<Item = &str> {
    content.lines().filter(|line| !line.trim().is_empty())
}

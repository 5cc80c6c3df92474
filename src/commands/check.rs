use clap::Args;
use serde::Serialize;

use slugkit::slug;

use super::CmdResult;

#[derive(Args)]
pub struct CheckArgs {
    /// String to validate as a slug (not transformed)
    #[arg(allow_hyphen_values = true)]
    pub value: String,
}

#[derive(Debug, Serialize)]
pub struct CheckOutput {
    command: String,
    value: String,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    problem: Option<String>,
}

pub fn run(args: CheckArgs, _global: &crate::commands::GlobalArgs) -> CmdResult<CheckOutput> {
    let problem = slug::problem(&args.value).map(str::to_string);

    Ok((
        CheckOutput {
            command: "check".to_string(),
            valid: problem.is_none(),
            value: args.value,
            problem,
        },
        0,
    ))
}

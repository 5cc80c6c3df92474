use clap::Args;
use serde::Serialize;

use slugkit::validation::require_non_empty_vec;
use slugkit::{Slug, UnicodePolicy};

use super::{slugifier_for, CmdResult, SlugFlags};

#[derive(Args)]
pub struct MakeArgs {
    /// Text to slugify (multiple words are joined with a space; flags go before the text)
    #[arg(num_args = 1.., allow_hyphen_values = true, trailing_var_arg = true)]
    pub text: Vec<String>,

    #[command(flatten)]
    pub flags: SlugFlags,
}

#[derive(Debug, Serialize)]
pub struct MakeOutput {
    command: String,
    input: String,
    slug: Slug,
    unicode: UnicodePolicy,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_length: Option<usize>,
}

pub fn run(args: MakeArgs, _global: &crate::commands::GlobalArgs) -> CmdResult<MakeOutput> {
    let words = require_non_empty_vec(&args.text, "text", "Provide text to slugify")?;
    let input = words.join(" ");

    let slugifier = slugifier_for(&args.flags)?;
    let slug = slugifier.slugify(&input)?;
    let options = slugifier.options();

    Ok((
        MakeOutput {
            command: "make".to_string(),
            input,
            slug,
            unicode: options.unicode,
            max_length: options.max_length,
        },
        0,
    ))
}

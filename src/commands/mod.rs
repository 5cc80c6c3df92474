use clap::Args;
use std::path::{Path, PathBuf};

use slugkit::{defaults, log_status, paths, SlugOptions, Slugifier, UnicodePolicy};

pub mod batch;
pub mod check;
pub mod config;
pub mod make;

pub type CmdResult<T> = slugkit::Result<(T, i32)>;

pub(crate) struct GlobalArgs {}

/// Slug options shared by `make` and `batch`. Flags override slugkit.json.
#[derive(Args, Default, Debug)]
pub struct SlugFlags {
    /// Transliterate non-ASCII letters instead of treating them as separators
    #[arg(long)]
    pub transliterate: bool,

    /// Cap the slug length, cutting at a hyphen when possible
    #[arg(long, value_name = "N")]
    pub max_length: Option<usize>,
}

impl SlugFlags {
    pub fn apply(&self, mut options: SlugOptions) -> SlugOptions {
        if self.transliterate {
            options.unicode = UnicodePolicy::Transliterate;
        }
        if self.max_length.is_some() {
            options.max_length = self.max_length;
        }
        options
    }
}

/// Where the default slug options came from.
#[derive(Debug, PartialEq)]
pub(crate) enum DefaultsSource {
    Builtin,
    File(PathBuf),
    Ignored { path: PathBuf, problem: String },
}

/// Read defaults from `path`; a missing or broken file yields built-in defaults.
pub(crate) fn resolve_defaults(path: Option<&Path>) -> (SlugOptions, DefaultsSource) {
    let Some(path) = path.filter(|p| p.exists()) else {
        return (defaults::builtin_defaults(), DefaultsSource::Builtin);
    };

    match defaults::load_config_from(path) {
        Ok(config) => (config.defaults, DefaultsSource::File(path.to_path_buf())),
        Err(err) => (
            defaults::builtin_defaults(),
            DefaultsSource::Ignored {
                path: path.to_path_buf(),
                problem: err.message,
            },
        ),
    }
}

/// Build a slugifier from config defaults plus command-line flags.
pub(crate) fn slugifier_for(flags: &SlugFlags) -> slugkit::Result<Slugifier> {
    let path = paths::slugkit_json().ok();
    let (options, source) = resolve_defaults(path.as_deref());

    match &source {
        DefaultsSource::File(path) => {
            log_status!("config", "Using defaults from {}", path.display());
        }
        DefaultsSource::Ignored { path, problem } => {
            log_status!(
                "config",
                "Ignoring {} ({}), using built-in defaults",
                path.display(),
                problem
            );
        }
        DefaultsSource::Builtin => {}
    }

    Slugifier::new(flags.apply(options))
}

/// Dispatch a command to its handler and map result to JSON.
macro_rules! dispatch {
    ($args:expr, $global:expr, $module:ident) => {
        crate::output::map_cmd_result_to_json($module::run($args, $global))
    };
}

pub(crate) fn run_json(
    command: crate::Commands,
    global: &GlobalArgs,
) -> (slugkit::Result<serde_json::Value>, i32) {
    match command {
        crate::Commands::Make(args) => dispatch!(args, global, make),
        crate::Commands::Check(args) => dispatch!(args, global, check),
        crate::Commands::Batch(args) => dispatch!(args, global, batch),
        crate::Commands::Config(args) => dispatch!(args, global, config),
    }
}

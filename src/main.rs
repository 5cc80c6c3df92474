use clap::{Parser, Subcommand};

use commands::GlobalArgs;

mod commands;
mod output;
mod tty;

use commands::{batch, check, config, make};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "slugkit")]
#[command(version = VERSION)]
#[command(about = "Turn free text into URL-safe slugs")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Slugify text
    Make(make::MakeArgs),
    /// Check whether a string is already a valid slug
    Check(check::CheckArgs),
    /// Slugify one input per line from a file or stdin
    Batch(batch::BatchArgs),
    /// Manage slugkit configuration
    Config(config::ConfigArgs),
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    let global = GlobalArgs {};

    tty::status("slugkit is working...");

    let (json_result, exit_code) = commands::run_json(cli.command, &global);

    if let Err(err) = output::print_json_result(json_result) {
        eprintln!("{}", err);
        return std::process::ExitCode::from(1);
    }

    std::process::ExitCode::from(exit_code_to_u8(exit_code))
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn make_joins_words() {
        let cli = Cli::try_parse_from(["slugkit", "make", "Hello,", "World!"]).unwrap();
        let Commands::Make(args) = cli.command else {
            panic!("expected make");
        };
        assert_eq!(args.text, vec!["Hello,", "World!"]);
        assert!(!args.flags.transliterate);
    }

    #[test]
    fn make_parses_flags() {
        let cli = Cli::try_parse_from([
            "slugkit",
            "make",
            "--transliterate",
            "--max-length",
            "8",
            "Crème",
        ])
        .unwrap();
        let Commands::Make(args) = cli.command else {
            panic!("expected make");
        };
        assert!(args.flags.transliterate);
        assert_eq!(args.flags.max_length, Some(8));
    }

    #[test]
    fn make_accepts_hyphen_leading_text() {
        for text in ["--Leading and trailing--", "-5 degrees"] {
            let cli = Cli::try_parse_from(["slugkit", "make", text]).unwrap();
            let Commands::Make(args) = cli.command else {
                panic!("expected make");
            };
            assert_eq!(args.text, vec![text]);
        }
    }

    #[test]
    fn make_flags_before_text_still_parse() {
        let cli =
            Cli::try_parse_from(["slugkit", "make", "--max-length", "4", "-x", "y"]).unwrap();
        let Commands::Make(args) = cli.command else {
            panic!("expected make");
        };
        assert_eq!(args.flags.max_length, Some(4));
        assert_eq!(args.text, vec!["-x", "y"]);
    }

    #[test]
    fn batch_defaults_to_stdin() {
        let cli = Cli::try_parse_from(["slugkit", "batch"]).unwrap();
        let Commands::Batch(args) = cli.command else {
            panic!("expected batch");
        };
        assert_eq!(args.source, "-");
    }

    #[test]
    fn exit_codes_clamp() {
        assert_eq!(exit_code_to_u8(-1), 0);
        assert_eq!(exit_code_to_u8(2), 2);
        assert_eq!(exit_code_to_u8(999), 255);
    }
}

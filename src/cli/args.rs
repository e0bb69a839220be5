//! `quire` command line.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Quire documentation site configuration tool
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// When to colour output
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path, searched upward from the current directory
    #[arg(short = 'C', long, global = true, default_value = "quire.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Also print `debug!` lines
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Validate the config and check every link for dead targets
    #[command(visible_alias = "c")]
    Check {
        #[command(flatten)]
        args: CheckArgs,
    },

    /// Print the rendered <head> fragment
    Head {
        /// Page title to render into <title>
        #[arg(short, long)]
        title: Option<String>,
    },

    /// Print an outline of the nav bar and sidebar
    #[command(visible_alias = "n")]
    Nav,

    /// Print the config as JSON for the site runtime
    Dump {
        /// Pretty-print the JSON
        #[arg(short, long)]
        pretty: bool,
    },
}

/// Check command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct CheckArgs {
    /// Abort on unknown config fields
    #[arg(long)]
    pub strict: bool,

    /// Treat broken links as warnings instead of errors
    #[arg(long, short = 'w')]
    pub warn_only: bool,

    /// Extra links to check, as if written on the home page
    #[arg(long = "link", value_name = "URL")]
    pub links: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_check() {
        let cli = Cli::parse_from([
            "quire",
            "-C",
            "docs/quire.toml",
            "check",
            "--strict",
            "--link",
            "http://localhost:4771/ping",
        ]);
        assert_eq!(cli.config, PathBuf::from("docs/quire.toml"));
        match cli.command {
            Commands::Check { args } => {
                assert!(args.strict);
                assert!(!args.warn_only);
                assert_eq!(args.links, ["http://localhost:4771/ping"]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_dump_defaults() {
        let cli = Cli::parse_from(["quire", "dump", "--pretty"]);
        assert_eq!(cli.config, PathBuf::from("quire.toml"));
        assert!(matches!(cli.command, Commands::Dump { pretty: true }));
    }
}

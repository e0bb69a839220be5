//! Quire - configuration tool for documentation sites.

mod cli;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use quire::config::{SiteConfig, init_config};
use quire::logger;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let strict = matches!(&cli.command, Commands::Check { args } if args.strict);
    let config = init_config(SiteConfig::discover(&cli.config, strict)?)?;

    match &cli.command {
        Commands::Check { args } => cli::check::check_site(&config, args),
        Commands::Head { title } => cli::show::print_head(&config, title.as_deref()),
        Commands::Nav => cli::show::print_nav(&config),
        Commands::Dump { pretty } => cli::show::print_json(&config, *pretty),
    }
}

//! MathSheet - printable long-multiplication worksheets
//!
//! Command-line entry point: generate worksheets, inspect the steps of a
//! single multiplication, list categories and manage configuration.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mathsheet::cli::{CategoriesArgs, ConfigArgs, DecomposeArgs, GenerateArgs};

/// MathSheet - printable long-multiplication worksheets
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a worksheet
    Generate(GenerateArgs),
    /// Show the long multiplication steps of two numbers
    Decompose(DecomposeArgs),
    /// List exercise categories
    Categories(CategoriesArgs),
    /// Manage configuration
    Config(ConfigArgs),
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so worksheet output on stdout stays clean
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let result = match &cli.command {
        Command::Generate(args) => args.execute(),
        Command::Decompose(args) => args.execute(),
        Command::Categories(args) => args.execute(),
        Command::Config(args) => args.execute(),
    };

    if let Err(err) = result {
        eprintln!("Error: {err}");
        if let Some(hint) = &err.hint {
            eprintln!();
            eprintln!("{hint}");
        }
        std::process::exit(err.exit_code());
    }
}

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::needless_pass_by_value)]

mod commands;
mod logging;

use clap::Parser;
use miette::Result;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "modpath")]
#[command(author, version, about = "Resolve import specifiers through aliases and root directories", long_about = None)]
struct Cli {
    /// Increase logging verbosity (-v for DEBUG, -vv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Emit JSON formatted output (stable, machine-readable)
    #[arg(long, global = true)]
    json: bool,

    /// Override the working directory
    #[arg(long, global = true, value_name = "PATH")]
    cwd: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Print version information
    Version,

    /// Show how a specifier resolves from a given file
    Resolve {
        /// The import specifier as written in source
        specifier: String,

        /// The file containing the import
        #[arg(long, value_name = "FILE")]
        file: PathBuf,

        /// Settings file (JSON)
        #[arg(long, short = 'c', value_name = "FILE")]
        config: Option<PathBuf>,

        /// Skip alias existence checks, as in a production build
        #[arg(long, env = "MODPATH_PRODUCTION")]
        production: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let cwd = cli
        .cwd
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."));

    logging::init(cli.verbose, cli.json);

    match cli.command {
        Commands::Version => commands::version::run(),
        Commands::Resolve {
            specifier,
            file,
            config,
            production,
        } => {
            let code = commands::resolve::run(&commands::resolve::ResolveArgs {
                cwd: &cwd,
                specifier: &specifier,
                file: &file,
                config: config.as_deref(),
                production,
                json: cli.json,
            })?;
            std::process::exit(code);
        }
    }
}

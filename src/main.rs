//! Dynvar CLI.
//!
//! Reads JSON from a file or stdin and formats, checks, sanitizes or queries
//! it. Exit codes: 0 on success, 1 on a parse error or missing path, 2 on an
//! I/O error.

use clap::{Args, Parser, Subcommand};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use dynvar::json::{self, Limits, Style};
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "dynvar")]
#[command(about = "Parse, format and query JSON with dynvar", long_about = None)]
#[command(version, propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Parse and print the document as JSON
    Fmt {
        #[command(flatten)]
        input: Input,

        /// Print without insignificant whitespace
        #[arg(long)]
        compact: bool,
    },

    /// Exit with 0 if the document parses, 1 otherwise
    Check {
        #[command(flatten)]
        input: Input,
    },

    /// Print the document with insignificant whitespace removed
    Sanitize {
        #[command(flatten)]
        input: Input,
    },

    /// Print the value addressed by a `/`-separated path
    Get {
        /// Path such as /items/0/name
        pointer: String,

        #[command(flatten)]
        input: Input,
    },
}

#[derive(Args, Debug)]
struct Input {
    /// Input file, stdin when omitted
    path: Option<PathBuf>,

    /// Use the relaxed parse limits for large documents
    #[arg(long)]
    relaxed: bool,
}

impl Input {
    fn limits(&self) -> Limits {
        if self.relaxed {
            Limits::relaxed()
        } else {
            Limits::compact()
        }
    }

    fn read(&self) -> std::io::Result<String> {
        match &self.path {
            Some(path) => {
                log::debug!("reading {}", path.display());
                std::fs::read_to_string(path)
            }
            None => {
                let mut text = String::new();
                std::io::stdin().read_to_string(&mut text)?;
                Ok(text)
            }
        }
    }

    /// Read and parse, reporting failures on stderr.
    fn load(&self) -> Result<dynvar::Value, ExitCode> {
        let text = self.read().map_err(|e| {
            eprintln!("error: {e}");
            ExitCode::from(2)
        })?;
        json::parse_with_limits(&text, self.limits()).map_err(|e| {
            eprintln!("{e}");
            ExitCode::from(1)
        })
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .format_timestamp(None)
        .init();

    match run(&cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(code) => code,
    }
}

fn run(command: &Commands) -> Result<(), ExitCode> {
    match command {
        Commands::Fmt { input, compact } => {
            let value = input.load()?;
            let style = if *compact {
                Style::Compact
            } else {
                Style::Pretty
            };
            println!("{}", json::to_json_with_style(&value, style));
        }
        Commands::Check { input } => {
            let value = input.load()?;
            log::info!("valid {} with {} entries", value.type_name(), value.size());
        }
        Commands::Sanitize { input } => {
            let text = input.read().map_err(|e| {
                eprintln!("error: {e}");
                ExitCode::from(2)
            })?;
            let clean = json::sanitize(&text, &input.limits()).map_err(|e| {
                eprintln!("{e}");
                ExitCode::from(1)
            })?;
            println!("{clean}");
        }
        Commands::Get { pointer, input } => {
            let value = input.load()?;
            match value.pointer(pointer) {
                Some(found) => println!("{found}"),
                None => {
                    eprintln!("error: nothing at {pointer}");
                    return Err(ExitCode::from(1));
                }
            }
        }
    }
    Ok(())
}

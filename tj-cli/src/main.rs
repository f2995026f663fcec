//! Command line front end for the `tj` codec.

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tj::{ParseConfig, Value};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tj")]
#[command(about = "Parse and re-serialize JSON", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    limits: Limits,
}

#[derive(Args)]
struct Limits {
    /// Maximum nesting depth of arrays and objects
    #[arg(long, global = true, default_value_t = tj::ParseConfig::new().max_depth)]
    max_depth: usize,

    /// Fail on repeated object keys instead of keeping the last one
    #[arg(long, global = true)]
    reject_duplicate_keys: bool,
}

impl Limits {
    fn config(&self) -> ParseConfig {
        ParseConfig::new()
            .max_depth(self.max_depth)
            .reject_duplicate_keys(self.reject_duplicate_keys)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print the parsed value tree
    Parse {
        /// Input file; reads stdin when omitted
        file: Option<PathBuf>,
    },
    /// Print the input as compact JSON
    Stringify { file: Option<PathBuf> },
    /// Only validate; prints the type of the root value
    Check { file: Option<PathBuf> },
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

fn read_input(file: Option<&PathBuf>) -> io::Result<Vec<u8>> {
    match file {
        Some(path) => fs::read(path),
        None => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf)?;
            Ok(buf)
        }
    }
}

fn run(cli: &Cli) -> Result<String, String> {
    let file = match &cli.command {
        Commands::Parse { file } | Commands::Stringify { file } | Commands::Check { file } => {
            file.as_ref()
        }
    };
    let input = read_input(file).map_err(|e| format!("cannot read input: {e}"))?;
    debug!(bytes = input.len(), "read input");

    let value: Value = tj::parse_with(&input, &cli.limits.config()).map_err(|e| e.to_string())?;

    match cli.command {
        Commands::Parse { .. } => Ok(format!("{value:#?}")),
        Commands::Stringify { .. } => tj::stringify(&value).map_err(|e| e.to_string()),
        Commands::Check { .. } => Ok(value.kind().to_string()),
    }
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(out) => {
            let mut stdout = io::stdout().lock();
            if writeln!(stdout, "{out}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(msg) => {
            eprintln!("error: {msg}");
            ExitCode::FAILURE
        }
    }
}

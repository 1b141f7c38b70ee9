//! `cassettewright` command-line front end.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::error;

use cassettewright::{run_read_mode, run_write_mode, DecodeOptions};

/// Encode and decode arbitrary byte streams as cassette-tape PCM audio.
#[derive(Debug, Parser)]
#[command(name = "cassettewright", version, about)]
struct Cli {
    /// Encode stdin (or --input) as PCM, writing it to stdout (or --output).
    #[arg(short = 'w', long, conflicts_with = "read")]
    write: bool,

    /// Decode PCM from stdin (or --input), writing recovered bytes to
    /// stdout (or --output).
    #[arg(short = 'r', long, conflicts_with = "write")]
    read: bool,

    /// Print a description of the wire format and exit.
    #[arg(short = 'd', long)]
    documentation: bool,

    /// Enable verbose (debug-level) logging.
    #[arg(short = 'v', long)]
    verbose: bool,

    /// While decoding, write one '0'/'1' character per demodulated bit to
    /// this file, regardless of framing outcome.
    #[arg(short = 'x', long, value_name = "PATH")]
    examine_bitstream: Option<PathBuf>,

    /// While decoding, clear header lock on any bit-sync loss instead of
    /// letting it survive a transient dropout.
    #[arg(long)]
    strict: bool,

    /// Input file; defaults to stdin.
    #[arg(short = 'i', long, value_name = "PATH")]
    input: Option<PathBuf>,

    /// Output file; defaults to stdout.
    #[arg(short = 'o', long, value_name = "PATH")]
    output: Option<PathBuf>,
}

fn open_input(path: &Option<PathBuf>) -> io::Result<Box<dyn io::Read>> {
    match path {
        Some(path) => Ok(Box::new(File::open(path)?)),
        None => Ok(Box::new(io::stdin())),
    }
}

fn open_output(path: &Option<PathBuf>) -> io::Result<Box<dyn io::Write>> {
    match path {
        Some(path) => Ok(Box::new(File::create(path)?)),
        None => Ok(Box::new(io::stdout())),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if cli.documentation {
        let stdout = io::stdout();
        if let Err(err) = cassettewright::print_documentation(stdout.lock()) {
            error!("failed to print documentation: {err}");
            return ExitCode::FAILURE;
        }
        return ExitCode::SUCCESS;
    }

    if !cli.write && !cli.read {
        error!("one of --write or --read is required (see --help)");
        return ExitCode::from(2);
    }

    let result = if cli.write {
        run(&cli, |input, output| run_write_mode(input, output))
    } else {
        run(&cli, |input, output| {
            let mut examine = match &cli.examine_bitstream {
                Some(path) => Some(Box::new(File::create(path)?) as Box<dyn Write>),
                None => None,
            };
            run_read_mode(
                input,
                output,
                DecodeOptions { strict: cli.strict },
                examine.as_deref_mut(),
            )
            .map_err(|err| io::Error::new(io::ErrorKind::Other, err))
        })
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(
    cli: &Cli,
    body: impl FnOnce(Box<dyn io::Read>, Box<dyn io::Write>) -> io::Result<()>,
) -> io::Result<()> {
    let input = open_input(&cli.input)?;
    let output = open_output(&cli.output)?;
    body(input, output)
}

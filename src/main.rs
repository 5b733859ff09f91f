use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use vless2xray::{ConvertError, convert_to_json};

#[derive(Parser, Debug)]
#[command(version, about = "Convert a vless:// share link into an Xray client config", long_about = None)]
struct Args {
    /// Share link; read from stdin when omitted
    link: Option<String>,

    /// Write the config to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Emit single-line JSON
    #[arg(long)]
    compact: bool,

    /// Log level set to DEBUG
    #[arg(short, long, help = "Emit debug log")]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_writer(io::stderr)
        .init();
}

fn run(args: &Args) -> Result<(), ConvertError> {
    let raw = match &args.link {
        Some(link) => link.clone(),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    let link = raw.trim();
    if link.is_empty() {
        return Err(ConvertError::EmptyInput);
    }

    let json = convert_to_json(link, !args.compact)?;

    match &args.output {
        Some(path) => {
            fs::write(path, format!("{}\n", json))?;
            tracing::info!(path = %path.display(), "config written");
        }
        None => println!("{}", json),
    }
    Ok(())
}

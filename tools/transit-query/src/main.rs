use anyhow::{bail, Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;

use transit_api_types::RequestDocument;

mod loader;
mod stats;

#[derive(Parser, Debug)]
#[command(
    name = "transit-query",
    author,
    version,
    about = "Answer transit catalogue queries from a JSON request document",
    long_about = "Reads a JSON document with base_requests (stops and buses), optional \
                  routing_settings and render_settings, and stat_requests.\n\n\
                  Builds the catalogue, the itinerary graph and the map renderer, then \
                  writes one JSON response per stat request, in request order."
)]
struct Args {
    /// Input JSON document (defaults to stdin)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output JSON file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Verbose output (show debug messages)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if args.verbose { "debug" } else { "info" }),
    )
    .format_timestamp(None)
    .init();

    let raw = read_input(&args.input)?;
    let document: RequestDocument =
        serde_json::from_str(&raw).context("Failed to parse request document")?;
    log::info!(
        "Loaded {} base requests and {} stat requests",
        document.base_requests.len(),
        document.stat_requests.len()
    );

    let responses = stats::answer_all(&document)?;

    let mut writer: Box<dyn Write> = match &args.output {
        Some(path) => {
            log::info!("Output: {}", path.display());
            Box::new(BufWriter::new(
                File::create(path).with_context(|| format!("Failed to create {}", path.display()))?,
            ))
        }
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    if args.pretty {
        serde_json::to_writer_pretty(&mut writer, &responses)
    } else {
        serde_json::to_writer(&mut writer, &responses)
    }
    .context("Failed to write responses")?;
    writeln!(writer)?;
    writer.flush()?;

    log::info!("Answered {} requests", responses.len());
    Ok(())
}

fn read_input(input: &Option<PathBuf>) -> Result<String> {
    let mut raw = String::new();
    match input {
        Some(path) => {
            log::info!("Input: {}", path.display());
            if !path.exists() {
                bail!("Input file does not exist: {}", path.display());
            }
            File::open(path)
                .and_then(|mut file| file.read_to_string(&mut raw))
                .with_context(|| format!("Failed to read {}", path.display()))?;
        }
        None => {
            io::stdin()
                .read_to_string(&mut raw)
                .context("Failed to read stdin")?;
        }
    }
    Ok(raw)
}

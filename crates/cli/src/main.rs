use clap::{Parser, ValueEnum};
use std::{
    fs::{self, File},
    io::{self, BufReader, Write},
    path::PathBuf,
    process::ExitCode,
    time::Instant,
};
use tracing::{Level, error, info};
use transit_catalogue::{
    catalogue::TransportCatalogue,
    report,
    requests::{self, json, text},
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Text,
}

/// Loads a transit catalogue and answers the queries found in the same input.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Request document. Reads stdin when omitted.
    input: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = Format::Json)]
    format: Format,
    #[arg(long, default_value_t = Level::INFO)]
    log_level: Level,
}

fn main() -> ExitCode {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .with_writer(io::stderr)
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), requests::Error> {
    let stdout = io::stdout();
    match args.format {
        Format::Json => {
            let reader = json::JsonReader::new(requests::Config::default());
            let document = match &args.input {
                Some(path) => reader.read(BufReader::new(File::open(path)?))?,
                None => reader.read(io::stdin().lock())?,
            };
            let catalogue = load(&document.base_requests);
            let responses = catalogue.respond_all(&document.stat_requests);
            json::write_responses(stdout.lock(), &responses)?;
            writeln!(stdout.lock())?;
        }
        Format::Text => {
            let input = match &args.input {
                Some(path) => fs::read_to_string(path)?,
                None => io::read_to_string(io::stdin())?,
            };
            let input = text::parse(&input)?;
            let catalogue = load(&input.base_requests);
            let lines = report::text_report(&catalogue, &input.queries, &report::Config::default());
            let mut out = stdout.lock();
            for line in lines {
                writeln!(out, "{line}")?;
            }
        }
    }
    Ok(())
}

fn load(base_requests: &[requests::BaseRequest]) -> TransportCatalogue {
    info!("Loading data...");
    let now = Instant::now();
    let catalogue = TransportCatalogue::new().load_requests(base_requests);
    info!(
        stops = catalogue.stop_count(),
        buses = catalogue.bus_count(),
        distances = catalogue.distance_count(),
        "Loading data took {:?}",
        now.elapsed()
    );
    catalogue
}

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use dataset::{DatasetProvider, ProviderConfig};
use pipeline::{Console, MapOpener, SessionController};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::info;

/// dine-scout - interactive restaurant finder
#[derive(Parser)]
#[command(name = "dine-scout")]
#[command(about = "Find restaurants in a city and narrow them down by type, rating, and price", long_about = None)]
struct Cli {
    /// Directory holding cached city datasets (e.g. Detroit.json)
    #[arg(short, long, default_value = ".")]
    cache_dir: PathBuf,

    /// Search API key; falls back to the YELP_API_KEY environment variable
    #[arg(long)]
    api_key: Option<String>,
}

/// Console over a line reader and stdout.
struct StdConsole<R: BufRead> {
    reader: R,
}

impl StdConsole<io::StdinLock<'static>> {
    fn stdin() -> Self {
        Self {
            reader: io::stdin().lock(),
        }
    }
}

impl<R: BufRead> Console for StdConsole<R> {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        print!("{prompt}");
        io::stdout().flush()?;
        let mut line = String::new();
        // A zero-byte read means the input stream is closed (Ctrl-D, or a
        // pipe that ran dry). Surfacing it as an error ends the session;
        // returning an empty answer would spin every retry-prompt loop.
        if self.reader.read_line(&mut line)? == 0 {
            anyhow::bail!("input stream closed");
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        println!("{line}");
        Ok(())
    }
}

/// Opens Google Maps in the system browser for a coordinate pair.
struct GoogleMapsOpener;

impl MapOpener for GoogleMapsOpener {
    fn open(&self, latitude: f64, longitude: f64) -> Result<()> {
        let url =
            format!("https://www.google.com/maps/search/?api=1&query={latitude},{longitude}");
        info!(url, "opening map link");
        open::that(url)?;
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let api_key = cli
        .api_key
        .or_else(|| std::env::var("YELP_API_KEY").ok());
    let has_key = api_key.is_some();

    let provider = DatasetProvider::new(ProviderConfig {
        api_key,
        cache_dir: cli.cache_dir,
        ..ProviderConfig::default()
    });

    println!("{}", "dine-scout".bold().blue());
    if has_key {
        println!("Cities without a cached dataset will be fetched from the search API.");
    } else {
        println!(
            "{} no API key configured; only cached cities are available.",
            "note:".yellow()
        );
    }
    println!("Type {} at the city prompt to quit.", "exit".bold());
    println!();

    let opener = GoogleMapsOpener;
    let mut console = StdConsole::stdin();
    SessionController::new(&provider, &opener)
        .run(&mut console)
        .await
}

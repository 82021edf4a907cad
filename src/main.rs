use anyhow::{Context, Result};
use artworks::{
    catalog::{HttpFetcher, PageKeyGenerator},
    config::{self, BrowseOptions},
    interactive_ratatui::InteractiveBrowser,
    logging::{self, LogTarget},
    print::{self, OutputFormat},
};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

#[derive(Parser)]
#[command(
    name = "artworks",
    version,
    about = "Browse and search a public artwork collection from the terminal",
    long_about = None
)]
struct Cli {
    /// Base URL of the collection API
    #[arg(long, env = "ARTWORKS_API_BASE", default_value = config::DEFAULT_API_BASE)]
    api_base: String,

    /// Base URL of the IIIF image server used for previews
    #[arg(long, env = "ARTWORKS_IIIF_BASE", default_value = config::DEFAULT_IIIF_BASE)]
    iiif_base: String,

    /// Quiet period after the last keystroke before a search is sent
    #[arg(long, env = "ARTWORKS_DEBOUNCE_MS", default_value_t = config::DEFAULT_DEBOUNCE_MS)]
    debounce_ms: u64,

    /// Per-request timeout
    #[arg(long, env = "ARTWORKS_TIMEOUT_SECS", default_value_t = config::DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,

    /// Write logs to this file (interactive mode never logs to the terminal)
    #[arg(long, env = "ARTWORKS_LOG_FILE")]
    log_file: Option<PathBuf>,

    /// Initial search query (empty browses the whole collection)
    #[arg(short, long, default_value = "")]
    query: String,

    /// Print results instead of starting the interactive browser
    #[arg(long)]
    print: bool,

    /// Number of pages to load in print mode
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    pages: u64,

    /// Output format for print mode
    #[arg(short = 'f', long, value_enum, default_value = "text")]
    format: OutputFormat,
}

impl Cli {
    fn browse_options(&self) -> BrowseOptions {
        BrowseOptions {
            api_base: self.api_base.clone(),
            iiif_base: self.iiif_base.clone(),
            debounce: Duration::from_millis(self.debounce_ms),
            request_timeout: Duration::from_secs(self.timeout_secs),
            ..BrowseOptions::default()
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let options = cli.browse_options();

    let log_target = match (&cli.log_file, cli.print) {
        (Some(path), _) => LogTarget::File(path),
        (None, true) => LogTarget::Stderr,
        (None, false) => LogTarget::Off,
    };
    logging::init_tracing(log_target)?;

    let fetcher = HttpFetcher::new(&options)?;

    if cli.print {
        return run_print(&cli, &options, &fetcher);
    }

    let mut browser = InteractiveBrowser::new(&options, Arc::new(fetcher), &cli.query)?;
    browser.run()
}

fn run_print(cli: &Cli, options: &BrowseOptions, fetcher: &HttpFetcher) -> Result<()> {
    let keys = PageKeyGenerator::new(&options.api_base)?;
    let pages = usize::try_from(cli.pages).context("--pages is too large")?;

    let collected = print::collect_pages(fetcher, keys, &cli.query, pages)
        .with_context(|| format!("Failed to load artworks for query {:?}", cli.query))?;

    tracing::info!(
        query = %cli.query,
        shown = collected.items.len(),
        fetched = collected.fetched_count,
        pages = collected.pages,
        "print mode finished"
    );

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    print::write_results(&mut handle, &collected, cli.format, &options.iiif_base)?;
    handle.flush()?;
    Ok(())
}

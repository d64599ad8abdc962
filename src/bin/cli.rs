//! hn-scraper CLI
//!
//! Scrapes Hacker News listing pages and prints the posts to stdout.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use hn_scraper::{
    error::Result,
    models::{Config, OutputConfig, OutputFormat, Page},
    services::PageScraper,
};

/// hn-scraper - Hacker News listing scraper
#[derive(Parser, Debug)]
#[command(
    name = "hn-scraper",
    version,
    about = "Scrape Hacker News listing pages into structured posts"
)]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "hn-scraper.toml")]
    config: PathBuf,

    /// Output format (overrides the configuration file)
    #[arg(short, long, value_enum)]
    format: Option<FormatArg>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Scrape a single listing page (1 is the front page)
    Page {
        #[arg(value_parser = clap::value_parser!(u32).range(1..))]
        number: u32,
    },

    /// Scrape a range of listing pages, inclusive
    Pages {
        #[arg(value_parser = clap::value_parser!(u32).range(1..))]
        start: u32,
        #[arg(value_parser = clap::value_parser!(u32).range(1..))]
        end: u32,
    },

    /// Validate the configuration file
    Validate,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum FormatArg {
    Json,
    Text,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Text => OutputFormat::Text,
        }
    }
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Print pages in the configured format.
fn print_pages(pages: &[Page], output: &OutputConfig) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match output.format {
        OutputFormat::Json => {
            if output.pretty {
                serde_json::to_writer_pretty(&mut out, pages)?;
            } else {
                serde_json::to_writer(&mut out, pages)?;
            }
            writeln!(out)?;
        }
        OutputFormat::Text => {
            for page in pages {
                writeln!(
                    out,
                    "# Page {} (retrieved {})",
                    page.number,
                    page.retrieved_at.to_rfc3339()
                )?;
                for post in &page.posts {
                    writeln!(out, "{}", post.format(&output.template))?;
                }
            }
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = Config::load_or_default(&cli.config);
    if let Some(format) = cli.format {
        config.output.format = format.into();
    }

    match cli.command {
        Command::Page { number } => {
            config.validate()?;
            let scraper = PageScraper::from_config(&config.http)?;
            let page = scraper.scrape_page(number)?;
            log::info!("Scraped {} posts from page {}", page.len(), page.number);
            print_pages(std::slice::from_ref(&page), &config.output)?;
        }

        Command::Pages { start, end } => {
            config.validate()?;
            let scraper = PageScraper::from_config(&config.http)?;
            match scraper.scrape_pages(start, end) {
                Ok(pages) => {
                    let posts: usize = pages.iter().map(Page::len).sum();
                    log::info!("Scraped {} posts from {} pages", posts, pages.len());
                    print_pages(&pages, &config.output)?;
                }
                Err(partial) => {
                    let (pages, error) = partial.into_parts();
                    log::error!("Stopped after {} page(s): {}", pages.len(), error);
                    print_pages(&pages, &config.output)?;
                    return Err(error);
                }
            }
        }

        Command::Validate => {
            log::info!("Validating configuration...");
            if let Err(e) = config.validate() {
                log::error!("Config validation failed: {}", e);
                return Err(e);
            }
            log::info!("✓ Config OK");
            log::info!("  user_agent: {}", config.http.user_agent);
            log::info!("  timeout_secs: {}", config.http.timeout_secs);
        }
    }

    Ok(())
}

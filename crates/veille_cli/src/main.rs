use chrono::Utc;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use veille_core::{FeedAggregator, KeywordMatcher, Result, WatchConfig};
use veille_feeds::{init_logging, HttpFeedFetcher};
use veille_report::markdown::DEFAULT_LINK_LIMIT;
use veille_report::{ReportConfig, ReportPaths, ReportWriter};

/// Technology watch: filters RSS feeds against a keyword watchlist and writes a dated CSV and Markdown digest.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Feed URL to poll; repeat to poll several. Replaces the built-in feed list.
    #[arg(long = "feed", value_name = "URL")]
    feeds: Vec<String>,
    /// Keyword to watch for; repeat for several. Replaces the built-in watchlist.
    #[arg(long = "keyword", value_name = "KEYWORD")]
    keywords: Vec<String>,
    /// Directory the reports are written to
    #[arg(long, default_value = "output")]
    output_dir: PathBuf,
    /// Maximum number of links listed in the Markdown report
    #[arg(long, default_value_t = DEFAULT_LINK_LIMIT)]
    max_links: usize,
    /// HTTP timeout per feed (e.g. 30s, 1m)
    #[arg(long, default_value = "30s", value_parser = humantime::parse_duration)]
    timeout: Duration,
    /// Run in periodic mode with the specified interval (e.g. 1h, 30m, 1d, "1h 15m")
    #[arg(long, value_parser = humantime::parse_duration)]
    interval: Option<Duration>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Commands {
    /// Fetch, filter and write today's reports (default)
    Run,
    /// Print the feeds and keywords in effect
    List,
}

async fn run_once(
    aggregator: &FeedAggregator,
    writer: &ReportWriter,
    config: &WatchConfig,
) -> Result<ReportPaths> {
    let rows = aggregator.collect(&config.feeds).await?;
    let today = Utc::now().date_naive();
    let paths = writer.write(&rows, &config.keywords, today)?;

    println!("OK → {} et {}", paths.csv.display(), paths.markdown.display());
    Ok(paths)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let config = WatchConfig::default().with_overrides(cli.feeds, cli.keywords);
    config.validate()?;

    match cli.command.unwrap_or(Commands::Run) {
        Commands::List => {
            println!("Feeds:");
            for feed in &config.feeds {
                println!("  {}", feed);
            }
            println!("Keywords: {}", config.keywords.join(", "));
        }
        Commands::Run => {
            let fetcher = Arc::new(HttpFeedFetcher::with_timeout(cli.timeout)?);
            let aggregator = FeedAggregator::new(fetcher, KeywordMatcher::new(&config.keywords));
            let writer = ReportWriter::new(ReportConfig {
                output_dir: cli.output_dir,
                link_limit: cli.max_links,
            });

            info!("🔎 Watching {} feeds for {} keywords", config.feeds.len(), config.keywords.len());

            if let Some(interval) = cli.interval {
                info!("Running in periodic mode with {}s interval", interval.as_secs());
                loop {
                    if let Err(e) = run_once(&aggregator, &writer, &config).await {
                        warn!("Run failed: {}", e);
                    }
                    info!("Waiting {}s before next run", interval.as_secs());
                    tokio::time::sleep(interval).await;
                }
            } else {
                run_once(&aggregator, &writer, &config).await?;
            }
        }
    }

    Ok(())
}

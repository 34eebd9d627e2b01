use std::error::Error;
use std::path::PathBuf;
use std::process;
use std::time::Duration;

use clap::{Parser, Subcommand};
use serde::Serialize;

use tube_client::config::{YouTubeConfig, HTTP_TIMEOUT_SECS};
use tube_client::youtube::client::{DEFAULT_REGION_CODE, DEFAULT_VIDEO_CATEGORY_ID};
use tube_client::youtube::{ApiResponse, ListKind, OrEmpty, TrendingParams, YouTubeClient, YouTubeError};

/// YouTube Data API client for the video app.
#[derive(Parser)]
#[command(name = "tube")]
struct Cli {
    /// Read the API key from this .env file instead of the environment.
    #[arg(long, global = true)]
    env_file: Option<PathBuf>,

    /// Override the API base URL.
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Request timeout in seconds.
    #[arg(long, global = true, default_value_t = HTTP_TIMEOUT_SECS)]
    timeout: u64,

    /// Print an empty list instead of failing when a list request fails.
    #[arg(long, global = true)]
    or_empty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search videos by keyword.
    Search { query: String },

    /// Show snippet, content details and statistics of one video.
    Video { id: String },

    /// List videos related to a video.
    Related { id: String },

    /// List the most popular videos of a region.
    Trending {
        /// ISO 3166-1 alpha-2 region code.
        #[arg(long, default_value = DEFAULT_REGION_CODE)]
        region: String,

        /// Video category ID (0 = all categories).
        #[arg(long, default_value = DEFAULT_VIDEO_CATEGORY_ID)]
        category: String,
    },

    /// List short videos.
    Shorts,
}

#[tokio::main]
async fn main() {
    env_logger::init();

    if let Err(e) = run().await {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.env_file {
        Some(path) => YouTubeConfig::from_env_file(path)?,
        None => YouTubeConfig::from_env(),
    };
    if let Some(base_url) = cli.base_url {
        config = config.with_base_url(base_url);
    }
    let config = config.with_timeout(Duration::from_secs(cli.timeout));

    let client = YouTubeClient::new(config)?;
    let or_empty = cli.or_empty;

    match cli.command {
        Command::Search { query } => print_list(
            client.search_videos(&query).await,
            ListKind::Search,
            or_empty,
        ),
        Command::Video { id } => print_json(&client.video_details(&id).await?),
        Command::Related { id } => {
            print_list(client.related_videos(&id).await, ListKind::Search, or_empty)
        }
        Command::Trending { region, category } => {
            let params = TrendingParams::new(region, category);
            print_list(
                client.trending_videos(&params).await,
                ListKind::Videos,
                or_empty,
            )
        }
        Command::Shorts => print_list(client.shorts().await, ListKind::Search, or_empty),
    }
}

fn print_list(
    result: Result<ApiResponse, YouTubeError>,
    kind: ListKind,
    or_empty: bool,
) -> Result<(), Box<dyn Error>> {
    let response = if or_empty {
        result.or_empty(kind)
    } else {
        result?
    };
    print_json(&response)
}

fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

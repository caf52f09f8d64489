use std::io::IsTerminal;

use clap::{Parser, Subcommand};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use yt_browse::commands;
use yt_browse::config::{Settings, load_env};
use yt_browse::source::DataSource;

#[derive(Parser)]
#[command(name = "yt-browse")]
#[command(about = "Browse popular videos, search, and channel pages from YouTube")]
#[command(version)]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the home feed: categories and popular videos
    Home,

    /// Search for videos
    Search {
        /// Search query
        query: String,
    },

    /// Show a video with suggested videos
    Watch {
        /// Video ID (e.g., dQw4w9WgXcQ)
        video_id: String,
    },

    /// Show a channel and its videos
    Channel {
        /// Channel ID (e.g., UC...)
        channel_id: String,
    },

    /// List browsing categories
    Categories,

    /// Save a YouTube Data API key
    Init {
        /// YouTube Data API key
        #[arg(short = 'k', long)]
        api_key: Option<String>,

        /// Overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();

    // Load environment variables
    load_env();

    let cli = Cli::parse();
    let source = DataSource::from_settings(&Settings::from_env());
    let json = cli.json;

    let result = match cli.command {
        Commands::Home => commands::home::run(&source, json).await,
        Commands::Search { query } => commands::search::run(&source, &query, json).await,
        Commands::Watch { video_id } => commands::watch::run(&source, &video_id, json).await,
        Commands::Channel { channel_id } => {
            commands::channel::run(&source, &channel_id, json).await
        }
        Commands::Categories => commands::categories::run(&source, json).await,
        Commands::Init { api_key, force } => commands::init::run(api_key, force),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

//! Command-line client for the fortune-teller service.
//!
//! Uploads a photo and prints the fortune the server returns.
//!
//! # Usage
//!
//! ```bash
//! # Upload a photo to a local server
//! cargo run --bin fortune -- upload ./selfie.jpg
//!
//! # Point at another deployment
//! cargo run --bin fortune -- --server https://fortune.example.com/api upload ./selfie.jpg
//!
//! # Check the server is up
//! cargo run --bin fortune -- health
//! ```
//!
//! # Environment Variables
//!
//! - `FORTUNE_API_URL` - Default for `--server`
//! - `FORTUNE_MAX_SIZE_MB` - Default for `--max-size-mb`

use fortune_teller::client::render::{DISCLAIMER, RESULT_TITLE};
use fortune_teller::client::{FortuneClient, FortuneView};

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;
use std::process::ExitCode;

/// Photo fortune-telling client.
#[derive(Parser)]
#[command(name = "fortune")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// API base URL
    #[arg(
        long,
        global = true,
        env = "FORTUNE_API_URL",
        default_value = "http://localhost:3001/api"
    )]
    server: String,

    /// Largest photo accepted before uploading, in MB
    #[arg(long, global = true, env = "FORTUNE_MAX_SIZE_MB", default_value_t = 20)]
    max_size_mb: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Upload a photo and show its fortune
    Upload {
        /// Path to an image file
        photo: PathBuf,
    },

    /// Check that the server is healthy
    Health,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "✗".red().bold(), e.to_string().red());
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let client = FortuneClient::new(cli.server, cli.max_size_mb)?;

    match cli.command {
        Commands::Upload { photo } => upload(&client, photo).await,
        Commands::Health => health(&client).await,
    }
}

/// Uploads `photo` and prints the rendered result.
async fn upload(client: &FortuneClient, photo: PathBuf) -> Result<()> {
    println!("{} {}", "🔮 正在分析".bright_blue().bold(), photo.display());

    let outcome = client.upload(&photo).await?;
    let view = FortuneView::from_result(Some(&outcome.result));

    println!();
    println!("{}", RESULT_TITLE.bright_magenta().bold());
    println!("{}", "─".repeat(32).dimmed());
    for (label, value) in view.sections() {
        println!("{} {}", format!("{label}:").cyan().bold(), value);
    }
    println!();
    println!("{}", DISCLAIMER.dimmed());

    if let Some(filename) = outcome.filename {
        println!("{}", format!("(stored as {filename})").dimmed());
    }

    Ok(())
}

/// Prints server health.
async fn health(client: &FortuneClient) -> Result<()> {
    let reply = client.health().await?;

    println!(
        "{} {} at {}",
        "✓".green().bold(),
        reply.status.green(),
        reply.timestamp
    );

    Ok(())
}

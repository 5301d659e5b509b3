use std::path::PathBuf;

use clap::{Parser, Subcommand};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "placement-cli")]
#[command(about = "Management CLI for the ad placement service", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    /// Admin API key, needed for `status` and `dump`.
    #[arg(short, long, default_value = "")]
    key: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Upload a feed file, replacing all placements
    Load {
        file: PathBuf,
    },
    /// List placements active at a location
    Search {
        location: String,
    },
    /// Show service status and the last load report
    Status,
    /// Dump the full current placement snapshot
    Dump,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    let mut admin_headers = HeaderMap::new();
    admin_headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", cli.key))?,
    );

    match cli.command {
        Commands::Load { file } => {
            let feed = std::fs::read_to_string(&file)?;
            let res = client
                .post(format!("{}/api/v1.0/AdPlacements/LoadFromFile", cli.url))
                .header(CONTENT_TYPE, "text/plain; charset=utf-8")
                .body(feed)
                .send()
                .await?;
            print_text(res).await?;
        }
        Commands::Search { location } => {
            let res = client
                .get(format!("{}/api/v1.0/AdPlacements/Search", cli.url))
                .query(&[("location", location)])
                .send()
                .await?;
            print_json(res).await?;
        }
        Commands::Status => {
            let res = client
                .get(format!("{}/admin/status", cli.url))
                .headers(admin_headers)
                .send()
                .await?;
            print_json(res).await?;
        }
        Commands::Dump => {
            let res = client
                .get(format!("{}/admin/placements", cli.url))
                .headers(admin_headers)
                .send()
                .await?;
            print_json(res).await?;
        }
    }

    Ok(())
}

async fn print_text(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let text = res.text().await?;
    if status.is_success() {
        println!("{}", text);
    } else {
        eprintln!("Error: service returned status {}", status);
        eprintln!("Response: {}", text);
    }
    Ok(())
}

async fn print_json(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: service returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}

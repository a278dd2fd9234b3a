use clap::{Parser, Subcommand};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "healthcheck-cli")]
#[command(about = "Query a running healthcheck-api instance", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Aggregate health across all dependencies
    Status,
    /// Process liveness only
    Ping,
    /// Run one probe by name (mysql, redis, grafana, or a configured API)
    Probe { name: String },
    /// Raw Prometheus metrics
    Metrics,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::Status => {
            let res = client.get(format!("{}/", cli.url)).send().await?;
            print_json(res).await?;
        }
        Commands::Ping => {
            let res = client.get(format!("{}/ping", cli.url)).send().await?;
            print_json(res).await?;
        }
        Commands::Probe { name } => {
            let res = client
                .get(format!("{}/ping/{}", cli.url, name))
                .send()
                .await?;
            print_json(res).await?;
        }
        Commands::Metrics => {
            let res = client.get(format!("{}/metrics", cli.url)).send().await?;
            if !res.status().is_success() {
                eprintln!("Error: server returned status {}", res.status());
                return Ok(());
            }
            println!("{}", res.text().await?);
        }
    }

    Ok(())
}

async fn print_json(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: server returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}

use clap::{Parser, Subcommand};
use serde_json::json;
use tracing_subscriber::EnvFilter;

mod call_cmd;

#[derive(Parser)]
#[command(name = "nytimes", about = "Query a running NYTimes MCP server")]
struct Cli {
    /// NYTimes MCP server URL (HTTP transport)
    #[arg(long, env = "NYTIMES_URL", default_value = "http://localhost:3000")]
    server_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the latest articles, optionally filtered by a search term
    Latest {
        /// Search term
        #[arg(long, short)]
        query: Option<String>,
    },

    /// Show a single article by its NY Times ID
    Article {
        /// Article ID
        id: String,
    },

    /// List the tools the server exposes
    Tools,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Latest { query } => {
            let arguments = match query {
                Some(q) => json!({ "query": q }),
                None => json!({}),
            };
            let text = call_cmd::call_tool(&cli.server_url, "getLatestNews", arguments).await?;
            println!("{text}");
        }
        Commands::Article { id } => {
            let text =
                call_cmd::call_tool(&cli.server_url, "getArticleById", json!({ "id": id })).await?;
            println!("{text}");
        }
        Commands::Tools => {
            let result = call_cmd::rpc(&cli.server_url, "tools/list", json!({})).await?;
            for tool in result["tools"].as_array().into_iter().flatten() {
                println!(
                    "{}\t{}",
                    tool["name"].as_str().unwrap_or_default(),
                    tool["description"].as_str().unwrap_or_default()
                );
            }
        }
    }

    Ok(())
}

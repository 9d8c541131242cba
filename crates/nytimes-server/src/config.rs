use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};

use nytimes_core::config::DEFAULT_BASE_URL;
use nytimes_core::UpstreamConfig;

/// How the server talks to the MCP host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Transport {
    /// Line-delimited JSON-RPC on stdin/stdout
    Stdio,
    /// JSON-RPC over `POST /mcp`
    Http,
}

#[derive(Parser)]
#[command(name = "nytimes-server", about = "MCP server exposing NY Times news tools", version)]
pub struct ServerConfig {
    /// NY Times API key
    #[arg(long, env = "NYTIMES_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Root URL of the NY Times API
    #[arg(long, env = "NYTIMES_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Transport used to talk to the MCP host
    #[arg(long, env = "NYTIMES_TRANSPORT", value_enum, default_value_t = Transport::Stdio)]
    pub transport: Transport,

    /// Bind address for the HTTP transport
    #[arg(long, env = "NYTIMES_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port for the HTTP transport
    #[arg(long, env = "NYTIMES_PORT", default_value_t = 3000)]
    pub port: u16,
}

impl ServerConfig {
    /// Load a `.env` file from the working directory or one of its parents.
    ///
    /// Must run before [`Parser::parse`] so its variables feed the `env`
    /// lookups. Variables already set in the process win over the file.
    pub fn load_env_file() -> Option<PathBuf> {
        dotenvy::dotenv().ok()
    }

    /// Load variables from an explicit env file. Returns whether it was read.
    pub fn load_env_file_from(path: &Path) -> bool {
        dotenvy::from_path(path).is_ok()
    }

    /// Upstream settings, failing if the API key is blank.
    pub fn upstream(&self) -> anyhow::Result<UpstreamConfig> {
        let api_key = self.api_key.trim();
        anyhow::ensure!(!api_key.is_empty(), "NYTIMES_API_KEY is not set");
        Ok(UpstreamConfig::new(api_key).with_base_url(self.base_url.clone()))
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

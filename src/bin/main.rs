use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;

use linear_mcp::{HandlerFactory, LinearAuth, LinearConfig, LinearMcpServer, start_mcp_http};

// rmcp imports for MCP stdio server mode
use rmcp::service::ServiceExt;
use rmcp::transport::stdio;

#[derive(Parser)]
#[command(name = "linear-mcp")]
#[command(about = "MCP server for the Linear issue tracker")]
struct Cli {
    /// Linear personal API key
    #[arg(long, global = true, env = "LINEAR_API_KEY", hide_env_values = true)]
    api_key: Option<String>,
    /// Linear GraphQL endpoint
    #[arg(long, global = true, env = "LINEAR_API_URL")]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run as an MCP stdio server (for use in mcp.json)
    McpStdio,
    /// Run as an MCP HTTP server
    McpHttp {
        /// Bind address, e.g. 0.0.0.0:3943
        #[arg(long, default_value = "127.0.0.1:3943")]
        bind: String,
    },
    /// Print the available tools and exit
    ListTools,
}

impl Cli {
    fn config(&self) -> LinearConfig {
        let mut config = LinearConfig::from_env();
        if let Some(key) = &self.api_key {
            config = config.with_api_key(key.clone());
        }
        if let Some(url) = &self.api_url {
            config = config.with_api_url(url.clone());
        }
        config
    }
}

fn build_factory(config: LinearConfig) -> Result<Arc<HandlerFactory>> {
    let authenticated = config.api_key.is_some();
    let auth = LinearAuth::new(config)?;
    info!(authenticated, "linear session initialized");
    Ok(Arc::new(HandlerFactory::new(Arc::new(auth), None)))
}

#[tokio::main]
async fn main() -> Result<()> {
    // stdout carries the MCP stdio transport, so logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("linear_mcp=info".parse()?)
                .add_directive("rmcp=warn".parse()?),
        )
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.config();

    match cli.command {
        Commands::McpStdio => {
            info!("Starting MCP stdio server against {}", config.api_url);
            let factory = build_factory(config)?;

            let service = LinearMcpServer::new(factory)
                .serve(stdio())
                .await
                .inspect_err(|e| tracing::error!("serving error: {:?}", e))?;

            // Block until the MCP session ends.
            service.waiting().await?;
            info!("MCP stdio server session ended");
        }
        Commands::McpHttp { bind } => {
            info!("Starting MCP HTTP server on {} against {}", bind, config.api_url);
            let factory = build_factory(config)?;
            start_mcp_http(factory, &bind).await?;
        }
        Commands::ListTools => {
            let factory = build_factory(config)?;
            for tool in factory.list_tools() {
                println!("{}", tool.name);
                if let Some(description) = &tool.description {
                    println!("    {}", description);
                }
            }
        }
    }

    Ok(())
}

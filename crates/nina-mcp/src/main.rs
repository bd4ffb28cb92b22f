use clap::Parser;

use nina_mcp::{GatewayConfig, NinaGateway, NinaMcpServer};

#[derive(Parser, Debug)]
#[command(name = "nina-mcp", version)]
#[command(about = "MCP server exposing the NINA Advanced API as assistant tools")]
struct Cli {
    /// Host where the NINA Advanced API listens
    #[arg(long, default_value = "localhost")]
    host: String,
    /// Port of the NINA Advanced API
    #[arg(long, default_value_t = 1888)]
    port: u16,
    /// Timeout in seconds for outbound API calls
    #[arg(long, default_value_t = 30)]
    timeout: u64,
}

#[tokio::main]
async fn main() -> std::process::ExitCode {
    // stdout carries the MCP protocol; all logging goes to stderr.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env();
    let env_filter = match "info".parse() {
        Ok(directive) => env_filter.add_directive(directive),
        Err(_) => env_filter, // fallback to default if parsing fails
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init();

    let cli = Cli::parse();
    let config = GatewayConfig {
        host: cli.host,
        port: cli.port,
        timeout_secs: cli.timeout,
    };

    let gateway = match NinaGateway::new(&config) {
        Ok(gateway) => gateway,
        Err(e) => {
            tracing::error!(error = %e, "Failed to build HTTP client");
            return std::process::ExitCode::FAILURE;
        }
    };

    tracing::info!(base_url = %config.base_url(), "Starting NINA Advanced API MCP server");
    if let Err(e) = NinaMcpServer::new(gateway).serve_stdio().await {
        tracing::error!(error = %e, "MCP server terminated");
        return std::process::ExitCode::FAILURE;
    }
    std::process::ExitCode::SUCCESS
}

use {
    clap::Parser,
    flowgate_gateway::AppState,
    tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt},
};

#[derive(Parser)]
#[command(name = "flowgate", about = "Flowgate — server-side Dialogflow detectIntent proxy")]
struct Cli {
    /// Address to bind to.
    #[arg(long, default_value = "0.0.0.0")]
    bind: String,

    /// Port to listen on.
    #[arg(long, env = "FLOWGATE_PORT", default_value_t = 8080)]
    port: u16,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Output logs as JSON instead of human-readable.
    #[arg(long, default_value_t = false)]
    json_logs: bool,
}

/// Initialise tracing. `RUST_LOG` takes precedence over `--log-level`.
fn init_telemetry(cli: &Cli) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));

    let registry = tracing_subscriber::registry().with(filter);

    if cli.json_logs {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present; production deployments set real env vars.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_telemetry(&cli);

    flowgate_gateway::serve(&cli.bind, cli.port, AppState::live()).await
}

//! Searchgate: unified search gateway
//!
//! This is the main entry point for the application.

use anyhow::Result;
use searchgate::{
    config::{self, Secrets},
    web::{create_router, AppState},
};
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> Result<()> {
    let Some(config_path) = parse_args()? else {
        return Ok(());
    };

    // Initialize logging
    FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    info!("Starting searchgate v{}", searchgate::VERSION);

    let settings = config::load_settings(config_path)?;
    let secrets = Secrets::load(&settings.secrets)?;

    let state = AppState::new(settings, secrets)?;
    info!("Loaded {} silos", state.registry.len());

    let server = &state.settings.server;
    let addr = SocketAddr::new(server.bind_address.parse()?, server.port);

    let app = create_router(state);

    info!("Starting server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Returns the settings path to use, or `None` when the process should exit
fn parse_args() -> Result<Option<Option<PathBuf>>> {
    let mut config_path = None;
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-c" | "--config" => {
                let path = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("{} requires a file path", arg))?;
                config_path = Some(PathBuf::from(path));
            }
            "-h" | "--help" => {
                print_usage();
                return Ok(None);
            }
            "-V" | "--version" => {
                println!("searchgate {}", searchgate::VERSION);
                return Ok(None);
            }
            other => anyhow::bail!("unknown argument: {}", other),
        }
    }

    Ok(Some(config_path))
}

/// Print usage information
fn print_usage() {
    println!(
        r#"
searchgate v{}
A unified search gateway for library search backends

USAGE:
    searchgate [OPTIONS]

OPTIONS:
    -c, --config <FILE>    Path to configuration file
    -h, --help             Print help information
    -V, --version          Print version information

ENVIRONMENT VARIABLES:
    SEARCHGATE_SETTINGS_PATH     Path to settings.yml
    SEARCHGATE_PORT              Server port
    SEARCHGATE_BIND_ADDRESS      Bind address
    SEARCHGATE_REQUEST_TIMEOUT   Upstream request timeout in seconds
    SEARCHGATE_SECRETS_FILE      YAML file of secrets
    SEARCHGATE_LIBGUIDES_KEY     (and the other secret names, uppercased)
    RUST_LOG                     Log filter (default: info)
"#,
        searchgate::VERSION
    );
}

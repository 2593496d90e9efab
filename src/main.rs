//! Gridmatch Game Server
//!
//! Serves a single turn-based board game match over HTTP.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use gridmatch::game::session::{GameSession, SessionConfig};
use gridmatch::network::server::{build_router, AppState};
use gridmatch::VERSION;

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "gridmatch-server")]
#[command(about = "Turn-based two-team board game server")]
struct Args {
    /// Hostname to bind.
    #[arg(long, env = "HOSTNAME", default_value = "127.0.0.1")]
    hostname: String,

    /// Port to bind.
    #[arg(long, env = "PORT", default_value_t = 8080)]
    port: u16,

    /// Log level filter, e.g. "debug" or "gridmatch=trace".
    /// Falls back to RUST_LOG, then "info".
    #[arg(long, env = "LOG_LEVEL")]
    log_level: Option<String>,

    /// Maximum number of players allowed to join the match.
    #[arg(long, env = "PLAYERS_LIMIT", default_value_t = 10)]
    players_limit: usize,
}

fn init_tracing(log_level: Option<&str>) {
    let filter = match log_level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.log_level.as_deref());

    info!("Gridmatch Server v{}", VERSION);
    info!("Players limit: {}", args.players_limit);

    let state = Arc::new(AppState {
        game: GameSession::new(SessionConfig {
            players_limit: args.players_limit,
            ..Default::default()
        }),
    });
    let app = build_router(state);

    let addr = format!("{}:{}", args.hostname, args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}

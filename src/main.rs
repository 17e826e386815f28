//! Ghalibify · Couplet Backend
//!
//! - Axum HTTP API: scenario in, Ghalib couplet out
//! - Remote generation through a Groq (OpenAI-compatible) chat endpoint, trying
//!   candidate models in order
//! - Local keyword matcher over a built-in couplet table when the remote path fails
//! - Static front-end fallback (./static/index.html)
//!
//! Important env variables:
//!   PORT                  : u16 (default 3000)
//!   GROQ_API_KEY          : enables remote generation if present
//!   GROQ_BASE_URL         : default "https://api.groq.com/openai/v1"
//!   GROQ_MODELS           : comma-separated candidate models, preference order
//!   GROQ_TIMEOUT_SECS     : per-attempt timeout (default 20)
//!   GHALIBIFY_CONFIG_PATH : path to TOML config (prompt, models, couplet bank)
//!   LOG_LEVEL             : tracing filter, e.g. "debug" or full directives
//!   LOG_FORMAT            : "pretty" (default) or "json"

mod telemetry;
mod util;
mod domain;
mod error;
mod config;
mod seeds;
mod matcher;
mod decode;
mod remote;
mod chat;
mod state;
mod protocol;
mod logic;
mod routes;

use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tracing::info;

use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  telemetry::init_tracing();

  // Shared, read-only application state (couplet table, chat client, prompt).
  let state = Arc::new(AppState::new()?);

  let app = build_router(state);

  let addr: SocketAddr = std::env::var("PORT")
    .ok()
    .and_then(|p| p.parse::<u16>().ok())
    .map(|port| SocketAddr::from(([0, 0, 0, 0], port)))
    .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 3000)));

  let listener = TcpListener::bind(addr).await?;
  info!(target: "ghalibify", %addr, "HTTP server listening");
  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await?;
  info!(target: "ghalibify", "HTTP server stopped");
  Ok(())
}

async fn shutdown_signal() {
  if let Err(e) = tokio::signal::ctrl_c().await {
    tracing::error!(target: "ghalibify", error = %e, "Failed to listen for shutdown signal");
    std::future::pending::<()>().await;
  }
}

//! HTTP endpoint handlers. These are thin wrappers that forward to core logic.
//! Each handler is instrumented and logs basic request/result info.

use std::sync::Arc;
use axum::{extract::State, http::StatusCode, response::{IntoResponse, Response}, Json};
use tracing::{info, instrument, warn};

use crate::logic::find_couplet;
use crate::protocol::*;
use crate::state::AppState;

#[instrument(level = "info", skip(state))]
pub async fn http_health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
  Json(HealthOut { ok: true, remote_enabled: state.remote_enabled() })
}

#[instrument(level = "info", skip(state, body), fields(has_scenario = body.scenario.is_some()))]
pub async fn http_post_couplet(
  State(state): State<Arc<AppState>>,
  Json(body): Json<CoupletIn>,
) -> Response {
  let scenario = match body.scenario {
    Some(s) if !s.trim().is_empty() => s,
    _ => {
      warn!(target: "ghalibify", "Rejected couplet request without scenario");
      return (StatusCode::BAD_REQUEST, Json(ErrorOut { error: "Missing scenario".into() })).into_response();
    }
  };

  let (couplet, source) = find_couplet(&state, &scenario).await;
  info!(target: "couplet", source = source.as_str(), theme = %couplet.theme, "HTTP couplet served");
  Json(to_out(couplet, source)).into_response()
}

#[instrument(level = "info", skip(state))]
pub async fn http_get_samples(State(state): State<Arc<AppState>>) -> impl IntoResponse {
  Json(SamplesOut { scenarios: state.samples.clone() })
}

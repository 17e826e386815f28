//! Core couplet lookup: remote model first, local matcher as the fallback that cannot fail.

use tracing::{error, info, instrument, warn};
use uuid::Uuid;

use crate::domain::{CoupletRecord, CoupletSource};
use crate::error::CoupletError;
use crate::state::AppState;

/// Find a couplet for `scenario`. Remote errors are logged and absorbed;
/// the caller always receives a displayable record.
#[instrument(level = "info", skip(state, scenario), fields(lookup_id = %Uuid::new_v4(), scenario_len = scenario.len()))]
pub async fn find_couplet(state: &AppState, scenario: &str) -> (CoupletRecord, CoupletSource) {
  match request_remote(state, scenario).await {
    Ok(record) if record.is_displayable() => {
      info!(target: "couplet", source = "remote", theme = %record.theme, "Couplet served");
      return (record, CoupletSource::Remote);
    }
    Ok(_) => warn!(target: "couplet", "Remote couplet not displayable; using local matcher"),
    Err(CoupletError::Configuration(reason)) => {
      warn!(target: "couplet", %reason, "Remote path unavailable; using local matcher")
    }
    Err(e) => error!(target: "couplet", error = %e, "Remote couplet lookup failed; using local matcher"),
  }

  let (record, source) = state.matcher.find_best(scenario);
  info!(target: "couplet", source = source.as_str(), theme = %record.theme, "Couplet served");
  (record.clone(), source)
}

async fn request_remote(state: &AppState, scenario: &str) -> Result<CoupletRecord, CoupletError> {
  match &state.remote {
    Some(requester) => requester.request(scenario).await,
    None => Err(CoupletError::config(
      state
        .remote_disabled_reason
        .clone()
        .unwrap_or_else(|| "remote couplet generation is disabled".into()),
    )),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::chat::GroqClient;
  use crate::config::RemoteSettings;
  use crate::matcher::CoupletMatcher;
  use crate::remote::CoupletRequester;
  use crate::seeds::seed_couplets;
  use std::time::Duration;
  use wiremock::matchers::{body_partial_json, method};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  fn state_with_remote(base_url: &str, models: &[&str]) -> AppState {
    let settings = RemoteSettings {
      api_key: Some("gsk_test".into()),
      base_url: base_url.into(),
      models: models.iter().map(|m| m.to_string()).collect(),
      temperature: 0.7,
      timeout: Duration::from_secs(5),
    };
    let client = GroqClient::new(&settings).unwrap();
    let requester = CoupletRequester::new(client, settings.models.clone(), "persona");
    AppState::from_parts(CoupletMatcher::new(seed_couplets()).unwrap(), Some(requester), None)
  }

  fn completion(content: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({
      "choices": [{ "message": { "content": content } }]
    }))
  }

  #[tokio::test]
  async fn without_remote_uses_local_match() {
    let state = AppState::from_parts(CoupletMatcher::new(seed_couplets()).unwrap(), None, Some("GROQ_API_KEY environment variable is not set".into()));
    let (c, source) = find_couplet(&state, "I'm dealing with heartbreak").await;
    assert_eq!(source, CoupletSource::LocalMatch);
    assert_eq!(c.theme, "Love's Pain");
  }

  #[tokio::test]
  async fn remote_success_after_retired_model() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
      .and(body_partial_json(serde_json::json!({ "model": "retired" })))
      .respond_with(ResponseTemplate::new(400).set_body_string(
        r#"{"error":{"message":"The model `retired` has been decommissioned"}}"#,
      ))
      .expect(1)
      .mount(&server)
      .await;
    Mock::given(method("POST"))
      .and(body_partial_json(serde_json::json!({ "model": "current" })))
      .respond_with(completion(
        r#"{"hindi":"दिल-ए-नादाँ तुझे हुआ क्या है","transliteration":"Dil-e-nadaan tujhe hua kya hai","translation":"O naive heart, what has become of you?","theme":"Longing"}"#,
      ))
      .expect(1)
      .mount(&server)
      .await;

    let state = state_with_remote(&server.uri(), &["retired", "current"]);
    let (c, source) = find_couplet(&state, "I miss someone special").await;
    assert_eq!(source, CoupletSource::Remote);
    assert_eq!(c.transliteration, "Dil-e-nadaan tujhe hua kya hai");
    assert_eq!(c.script_text.as_deref(), Some("दिल-ए-नादाँ तुझे हुआ क्या है"));
  }

  #[tokio::test]
  async fn hard_upstream_error_falls_back_locally_without_second_candidate() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
      .and(body_partial_json(serde_json::json!({ "model": "first" })))
      .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
      .expect(1)
      .mount(&server)
      .await;
    Mock::given(method("POST"))
      .and(body_partial_json(serde_json::json!({ "model": "second" })))
      .respond_with(completion(r#"{"transliteration":"x","translation":"y"}"#))
      .expect(0)
      .mount(&server)
      .await;

    let state = state_with_remote(&server.uri(), &["first", "second"]);
    let (c, source) = find_couplet(&state, "I'm dealing with heartbreak").await;
    assert_eq!(source, CoupletSource::LocalMatch);
    assert_eq!(c.theme, "Love's Pain");
  }

  #[tokio::test]
  async fn pretty_printed_reply_with_null_theme_is_served_remotely() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
      .and(body_partial_json(serde_json::json!({
        "messages": [{ "role": "system" }, { "role": "user", "content": "  I miss someone special\n" }]
      })))
      .respond_with(completion(
        "{\n  \"hindi\": null,\n  \"transliteration\": [\"Dil-e-nadaan tujhe hua kya hai\", \"aakhir is dard ki dava kya hai\"],\n  \"translation\": \"O naive heart\",\n  \"theme\": null\n}",
      ))
      .expect(1)
      .mount(&server)
      .await;

    let state = state_with_remote(&server.uri(), &["only"]);
    let (c, source) = find_couplet(&state, "  I miss someone special\n").await;
    assert_eq!(source, CoupletSource::Remote);
    assert_eq!(c.script_text, None);
    assert_eq!(c.transliteration, "Dil-e-nadaan tujhe hua kya hai\naakhir is dard ki dava kya hai");
    assert_eq!(c.theme, "");
  }

  #[tokio::test]
  async fn unreachable_upstream_falls_back_locally() {
    // Port 1 on loopback refuses connections: every candidate hits a transport error.
    let state = state_with_remote("http://127.0.0.1:1", &["a", "b"]);
    let (c, source) = find_couplet(&state, "xyzzy").await;
    assert_eq!(source, CoupletSource::LocalRandom);
    assert!(c.is_authentic());
  }
}

//! Remote couplet requester: walks an ordered list of candidate models and
//! returns the first usable couplet.
//!
//! Per candidate:
//!   - transport failure / timeout                 -> record, next candidate
//!   - non-2xx whose body says the model is gone   -> record, next candidate
//!   - any other non-2xx                           -> stop, hard failure
//!   - 2xx without usable content                  -> record, next candidate
//!   - 2xx with a displayable couplet              -> return it
//!
//! Attempts are strictly sequential: preference order is part of the contract.

use std::future::Future;
use std::time::Instant;

use tracing::{error, info, instrument, warn};

use crate::decode::decode_couplet;
use crate::domain::CoupletRecord;
use crate::error::CoupletError;
use crate::util::trunc_for_log;

/// Body fragments that mark a model as retired, unsupported or unknown.
const UNAVAILABLE_MARKERS: [&str; 4] = ["decommissioned", "not supported", "does not exist", "model_not_found"];

/// Failure of a single chat-completion attempt, before classification.
#[derive(Debug, Clone, PartialEq)]
pub enum AttemptError {
  /// Network error or timeout.
  Transport(String),
  /// Non-success HTTP status with the raw error body.
  Status { status: u16, body: String },
  /// Success status but the completion envelope could not be decoded.
  Malformed(String),
}

/// One chat-completion call against one named model.
/// `Ok(None)` means the call succeeded but carried no message content.
pub trait ChatBackend {
  fn attempt(
    &self,
    model: &str,
    system: &str,
    scenario: &str,
  ) -> impl Future<Output = Result<Option<String>, AttemptError>> + Send;
}

/// True when an error body says the named model cannot be used.
pub fn is_model_unavailable(body: &str) -> bool {
  let lower = body.to_lowercase();
  UNAVAILABLE_MARKERS.iter().any(|m| lower.contains(m))
}

#[derive(Clone, Debug)]
pub struct CoupletRequester<B> {
  backend: B,
  models: Vec<String>,
  system_prompt: String,
}

impl<B: ChatBackend> CoupletRequester<B> {
  pub fn new(backend: B, models: Vec<String>, system_prompt: impl Into<String>) -> Self {
    Self { backend, models, system_prompt: system_prompt.into() }
  }

  pub fn models(&self) -> &[String] {
    &self.models
  }

  pub fn backend(&self) -> &B {
    &self.backend
  }

  /// Ask the candidate models, in order, for a couplet matching `scenario`.
  #[instrument(level = "info", skip(self, scenario), fields(scenario_len = scenario.len(), candidates = self.models.len()))]
  pub async fn request(&self, scenario: &str) -> Result<CoupletRecord, CoupletError> {
    if scenario.trim().is_empty() {
      return Err(CoupletError::config("Missing scenario"));
    }
    if self.models.is_empty() {
      return Err(CoupletError::config("no candidate models configured"));
    }

    let mut last_error: Option<CoupletError> = None;
    for model in &self.models {
      let start = Instant::now();
      let outcome = self.backend.attempt(model, &self.system_prompt, scenario).await;
      let elapsed = start.elapsed();

      let err = match outcome {
        Ok(Some(content)) if !content.trim().is_empty() => match decode_couplet(&content) {
          Some(record) => {
            info!(target: "couplet", %model, ?elapsed, theme = %record.theme, "Candidate model produced a couplet");
            return Ok(record);
          }
          None => CoupletError::ResponseShape {
            model: model.clone(),
            reason: format!("content is not a usable couplet: {}", trunc_for_log(&content, 200)),
          },
        },
        Ok(_) => CoupletError::ResponseShape { model: model.clone(), reason: "empty message content".into() },
        Err(AttemptError::Transport(message)) => CoupletError::Transport { model: model.clone(), message },
        Err(AttemptError::Malformed(reason)) => CoupletError::ResponseShape { model: model.clone(), reason },
        Err(AttemptError::Status { status, body }) => {
          if is_model_unavailable(&body) {
            CoupletError::ModelUnavailable { model: model.clone(), message: trunc_for_log(&body, 500) }
          } else {
            error!(target: "couplet", %model, status, ?elapsed, body = %trunc_for_log(&body, 500), "Upstream rejected request; not trying further candidates");
            return Err(CoupletError::UpstreamHard { model: model.clone(), status, message: body });
          }
        }
      };

      warn!(target: "couplet", %model, ?elapsed, retryable = err.is_retryable(), error = %err, "Candidate model failed; trying next");
      last_error = Some(err);
    }

    let last = last_error.map(|e| e.to_string()).unwrap_or_else(|| "Unknown error".into());
    error!(target: "couplet", %last, "All candidate models failed");
    Err(CoupletError::Exhausted { last })
  }
}

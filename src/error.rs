//! Error taxonomy for couplet lookups.
//!
//! Only the remote path produces errors; the local matcher cannot fail once built.

/// Errors produced while obtaining a couplet.
#[derive(Debug, thiserror::Error)]
pub enum CoupletError {
  /// Missing credential, missing scenario, empty model list or empty couplet table.
  #[error("Configuration error: {0}")]
  Configuration(String),

  /// The named model is retired, unsupported or unknown upstream.
  #[error("Model {model} is not available: {message}")]
  ModelUnavailable { model: String, message: String },

  /// Network failure or per-attempt timeout.
  #[error("Transport error with model {model}: {message}")]
  Transport { model: String, message: String },

  /// Success status but no usable couplet in the response.
  #[error("Unusable response from model {model}: {reason}")]
  ResponseShape { model: String, reason: String },

  /// Non-success status that does not indicate model unavailability.
  #[error("Upstream HTTP {status} from model {model}: {message}")]
  UpstreamHard { model: String, status: u16, message: String },

  /// Every candidate model failed with a retryable error.
  #[error("All candidate models are currently unavailable: {last}")]
  Exhausted { last: String },
}

impl CoupletError {
  pub fn config(msg: impl Into<String>) -> Self {
    CoupletError::Configuration(msg.into())
  }

  /// Retryable errors advance the requester to the next candidate model.
  pub fn is_retryable(&self) -> bool {
    matches!(
      self,
      CoupletError::ModelUnavailable { .. }
        | CoupletError::Transport { .. }
        | CoupletError::ResponseShape { .. }
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn only_availability_transport_and_shape_errors_are_retryable() {
    assert!(CoupletError::Transport { model: "a".into(), message: "timeout".into() }.is_retryable());
    assert!(CoupletError::ModelUnavailable { model: "a".into(), message: "gone".into() }.is_retryable());
    assert!(CoupletError::ResponseShape { model: "a".into(), reason: "empty".into() }.is_retryable());
    assert!(!CoupletError::UpstreamHard { model: "a".into(), status: 401, message: "bad key".into() }.is_retryable());
    assert!(!CoupletError::config("missing scenario").is_retryable());
  }
}

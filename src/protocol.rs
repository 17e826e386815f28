//! Public protocol structs for the HTTP endpoints (serde ready).
//! Keep this small and stable to evolve backend and frontend independently.

use serde::{Deserialize, Serialize};

use crate::domain::{CoupletRecord, CoupletSource};

#[derive(Debug, Deserialize)]
pub struct CoupletIn {
  #[serde(default)]
  pub scenario: Option<String>,
}

/// DTO for couplet delivery. Keywords and authenticity stay internal.
#[derive(Debug, Serialize)]
pub struct CoupletOut {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub hindi: Option<String>,
  pub transliteration: String,
  pub translation: String,
  pub theme: String,
  pub source: CoupletSource,
}

/// Convert a `CoupletRecord` (internal) to the public DTO.
pub fn to_out(c: CoupletRecord, source: CoupletSource) -> CoupletOut {
  CoupletOut {
    hindi: c.script_text,
    transliteration: c.transliteration,
    translation: c.translation,
    theme: c.theme,
    source,
  }
}

#[derive(Serialize)]
pub struct ErrorOut {
  pub error: String,
}

#[derive(Serialize)]
pub struct SamplesOut {
  pub scenarios: Vec<&'static str>,
}

#[derive(Serialize)]
pub struct HealthOut {
  pub ok: bool,
  pub remote_enabled: bool,
}

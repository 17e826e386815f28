//! Configuration: the optional TOML file (prompt, candidate models, couplet bank)
//! and the environment settings for the remote chat-completion endpoint.
//!
//! See `AgentConfig` and `RemoteSettings` for the expected schema.

use std::time::Duration;

use serde::Deserialize;
use tracing::{error, info, warn};

use crate::domain::{normalize_keywords, Authenticity, CoupletRecord};

pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_MODELS: [&str; 2] = ["llama-3.1-8b-instant", "llama-3.1-70b-versatile"];
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
const DEFAULT_TIMEOUT_SECS: u64 = 20;

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AgentConfig {
  #[serde(default)]
  pub prompts: Prompts,
  /// Candidate models in preference order (cheaper/faster first).
  #[serde(default)]
  pub models: Vec<String>,
  #[serde(default)]
  pub temperature: Option<f32>,
  /// Replaces the built-in couplet table when it yields at least one valid entry.
  #[serde(default)]
  pub couplets: Vec<CoupletCfg>,
}

/// Couplet entry accepted in TOML configuration.
#[derive(Clone, Debug, Deserialize)]
pub struct CoupletCfg {
  #[serde(default, alias = "urdu")] pub hindi: Option<String>,
  #[serde(default)] pub transliteration: String,
  #[serde(default)] pub translation: String,
  #[serde(default)] pub theme: String,
  #[serde(default)] pub keywords: Vec<String>,
  #[serde(default)] pub authentic: bool,
}

impl CoupletCfg {
  /// Convert to a table record; None when transliteration or translation is missing.
  pub fn to_record(&self) -> Option<CoupletRecord> {
    let rec = CoupletRecord {
      script_text: self.hindi.clone().filter(|s| !s.trim().is_empty()),
      transliteration: self.transliteration.clone(),
      translation: self.translation.clone(),
      theme: self.theme.clone(),
      keywords: normalize_keywords(&self.keywords),
      authenticity: if self.authentic { Authenticity::Authentic } else { Authenticity::Unverified },
    };
    rec.is_displayable().then_some(rec)
  }
}

impl AgentConfig {
  /// Valid configured couplets, in file order. Invalid entries are logged and skipped.
  pub fn couplet_table(&self) -> Vec<CoupletRecord> {
    let mut out = Vec::with_capacity(self.couplets.len());
    for (idx, cc) in self.couplets.iter().enumerate() {
      match cc.to_record() {
        Some(rec) => out.push(rec),
        None => {
          error!(target: "couplet", index = idx, theme = %cc.theme, "Skipping bank couplet: missing transliteration or translation.");
        }
      }
    }
    out
  }
}

/// Prompts used by the chat client. The default asks for a Ghalib couplet as strict JSON.
/// Override in TOML to tune persona or output shape.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Prompts {
  pub couplet_system: String,
}

impl Default for Prompts {
  fn default() -> Self {
    Self {
      couplet_system: DEFAULT_COUPLET_SYSTEM.trim().into(),
    }
  }
}

const DEFAULT_COUPLET_SYSTEM: &str = r#"
You are an expert on Mirza Ghalib's poetry and classical Urdu literature. When given a scenario, respond with a JSON object containing "hindi", "transliteration", "translation", and "theme".

PRIORITY ORDER:
1. FIRST: Use an authentic, well-known couplet by Mirza Ghalib that matches the emotional context
2. SECOND: If no authentic Ghalib couplet fits perfectly, use a lesser-known but genuine Ghalib couplet
3. THIRD: Only if no authentic Ghalib couplet exists for the scenario, create a couplet in Ghalib's distinctive style and language

REQUIREMENTS:
- "hindi": the original couplet in Devanagari script, one line per misra, separated by "\n"
- "transliteration": a Latin transcription, same line layout
- "translation": a poetic English translation, same line layout
- "theme": a concise theme description
- Keep Ghalib's Persian vocabulary, philosophical depth and emotional nuance
- If composing, follow Ghalib's poetic conventions and linguistic style

AUTHENTICITY NOTE: Always prefer genuine Ghalib couplets over composed ones. Only compose when absolutely necessary.
"#;

/// Attempt to load `AgentConfig` from GHALIBIFY_CONFIG_PATH. On any parsing/IO error, returns None.
pub fn load_agent_config_from_env() -> Option<AgentConfig> {
  let path = std::env::var("GHALIBIFY_CONFIG_PATH").ok()?;
  match std::fs::read_to_string(&path) {
    Ok(s) => match toml::from_str::<AgentConfig>(&s) {
      Ok(cfg) => {
        info!(target: "ghalibify", %path, models = cfg.models.len(), couplets = cfg.couplets.len(), "Loaded agent config (TOML)");
        Some(cfg)
      }
      Err(e) => {
        error!(target: "ghalibify", %path, error = %e, "Failed to parse TOML config");
        None
      }
    },
    Err(e) => {
      error!(target: "ghalibify", %path, error = %e, "Failed to read TOML config file");
      None
    }
  }
}

/// Settings for the remote chat-completion endpoint.
#[derive(Clone, Debug)]
pub struct RemoteSettings {
  pub api_key: Option<String>,
  pub base_url: String,
  pub models: Vec<String>,
  pub temperature: f32,
  pub timeout: Duration,
}

impl RemoteSettings {
  /// Read from the process environment, with TOML `models`/`temperature` as the middle layer.
  pub fn from_env(cfg: Option<&AgentConfig>) -> Self {
    Self::from_lookup(|key| std::env::var(key).ok(), cfg)
  }

  /// Precedence: env var, then TOML, then built-in default.
  pub fn from_lookup<F>(lookup: F, cfg: Option<&AgentConfig>) -> Self
  where
    F: Fn(&str) -> Option<String>,
  {
    let api_key = lookup("GROQ_API_KEY")
      .map(|k| k.trim().to_string())
      .filter(|k| !k.is_empty());

    let base_url = lookup("GROQ_BASE_URL")
      .map(|u| u.trim().trim_end_matches('/').to_string())
      .filter(|u| !u.is_empty())
      .unwrap_or_else(|| DEFAULT_BASE_URL.into());

    let env_models = lookup("GROQ_MODELS").map(|list| parse_model_list(&list)).unwrap_or_default();
    let cfg_models = cfg.map(|c| parse_model_list(&c.models.join(","))).unwrap_or_default();
    let models = if !env_models.is_empty() {
      env_models
    } else if !cfg_models.is_empty() {
      cfg_models
    } else {
      DEFAULT_MODELS.iter().map(|m| m.to_string()).collect()
    };

    let timeout_secs = match lookup("GROQ_TIMEOUT_SECS") {
      Some(raw) => match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => secs,
        _ => {
          warn!(target: "ghalibify", value = %raw, "Ignoring invalid GROQ_TIMEOUT_SECS");
          DEFAULT_TIMEOUT_SECS
        }
      },
      None => DEFAULT_TIMEOUT_SECS,
    };

    let temperature = cfg.and_then(|c| c.temperature).unwrap_or(DEFAULT_TEMPERATURE);

    Self {
      api_key,
      base_url,
      models,
      temperature,
      timeout: Duration::from_secs(timeout_secs),
    }
  }
}

/// Split a comma-separated model list, dropping blanks and duplicates while keeping order.
fn parse_model_list(list: &str) -> Vec<String> {
  let mut out: Vec<String> = Vec::new();
  for m in list.split(',').map(str::trim).filter(|m| !m.is_empty()) {
    if !out.iter().any(|seen| seen == m) {
      out.push(m.to_string());
    }
  }
  out
}

//! Application state: the local couplet matcher, the optional remote requester
//! and the sample scenarios.
//!
//! Built once at startup. Everything here is read-only afterwards, so handlers
//! share it through an `Arc` without locking.

use tracing::{info, instrument, warn};

use crate::chat::GroqClient;
use crate::config::{load_agent_config_from_env, RemoteSettings};
use crate::error::CoupletError;
use crate::matcher::CoupletMatcher;
use crate::remote::CoupletRequester;
use crate::seeds::{sample_scenarios, seed_couplets};

pub struct AppState {
  pub matcher: CoupletMatcher,
  /// None when the remote path is disabled (no credential); the reason is kept for logs.
  pub remote: Option<CoupletRequester<GroqClient>>,
  pub remote_disabled_reason: Option<String>,
  pub samples: Vec<&'static str>,
}

impl AppState {
  /// Build state from env: load config, build the couplet table, init the chat client.
  #[instrument(level = "info", skip_all)]
  pub fn new() -> Result<Self, CoupletError> {
    let cfg = load_agent_config_from_env();
    let prompts = cfg.as_ref().map(|c| c.prompts.clone()).unwrap_or_default();

    // Configured bank replaces the seeds only when it has usable entries.
    let bank = cfg.as_ref().map(|c| c.couplet_table()).unwrap_or_default();
    let (table, origin) = if bank.is_empty() {
      (seed_couplets(), "seed")
    } else {
      (bank, "config_bank")
    };
    let matcher = CoupletMatcher::new(table)?;
    info!(target: "couplet", %origin, total = matcher.len(), authentic = matcher.authentic_count(), "Startup couplet inventory");

    let settings = RemoteSettings::from_env(cfg.as_ref());
    let (remote, remote_disabled_reason) = match GroqClient::new(&settings) {
      Ok(client) => {
        let requester = CoupletRequester::new(client, settings.models.clone(), prompts.couplet_system);
        info!(target: "ghalibify", base_url = %requester.backend().base_url, models = ?requester.models(), timeout = ?settings.timeout, "Remote couplet generation enabled.");
        (Some(requester), None)
      }
      Err(e) => {
        warn!(target: "ghalibify", error = %e, "Remote couplet generation disabled. Using local matcher only.");
        (None, Some(e.to_string()))
      }
    };

    Ok(Self::from_parts(matcher, remote, remote_disabled_reason))
  }

  pub fn from_parts(
    matcher: CoupletMatcher,
    remote: Option<CoupletRequester<GroqClient>>,
    remote_disabled_reason: Option<String>,
  ) -> Self {
    Self {
      matcher,
      remote,
      remote_disabled_reason,
      samples: sample_scenarios(),
    }
  }

  pub fn remote_enabled(&self) -> bool {
    self.remote.is_some()
  }
}

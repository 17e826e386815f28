//! Local couplet matcher: ranks the static couplet table against a scenario.
//!
//! Scoring per entry (scenario lowercased, all matches are substring matches):
//!   - +2 for every keyword found
//!   - +1 for every theme token (split on whitespace / '&', longer than 2 chars) found
//!   - +0.5 for every generic emotion word found
//!   - +3 authenticity bonus for `authentic` entries, once any of the above matched
//!
//! The strictly highest score wins; ties keep table order. When nothing scores
//! above zero a random entry is chosen, preferring authentic ones.

use std::sync::Arc;

use rand::{seq::SliceRandom, Rng};
use tracing::{debug, instrument, warn};

use crate::domain::{normalize_keywords, CoupletRecord, CoupletSource};
use crate::error::CoupletError;

const KEYWORD_WEIGHT: f64 = 2.0;
const THEME_WORD_WEIGHT: f64 = 1.0;
const EMOTION_WORD_WEIGHT: f64 = 0.5;
const AUTHENTICITY_BONUS: f64 = 3.0;

/// Common emotion terms; a hit counts for every entry alike.
pub const EMOTION_WORDS: [&str; 10] = [
  "happy", "sad", "love", "heart", "pain", "joy", "sorrow", "hope", "fear", "anger",
];

/// Immutable, shareable couplet table plus the scoring policy.
#[derive(Clone, Debug)]
pub struct CoupletMatcher {
  table: Arc<[CoupletRecord]>,
}

impl CoupletMatcher {
  /// Build a matcher over `table`. Entries that are not displayable are dropped;
  /// keywords are normalized. Fails only if no usable entry remains.
  pub fn new(table: Vec<CoupletRecord>) -> Result<Self, CoupletError> {
    let mut usable = Vec::with_capacity(table.len());
    for mut c in table {
      if !c.is_displayable() {
        warn!(target: "couplet", theme = %c.theme, "Dropping couplet without transliteration/translation");
        continue;
      }
      c.keywords = normalize_keywords(&c.keywords);
      usable.push(c);
    }
    if usable.is_empty() {
      return Err(CoupletError::config("local couplet table is empty"));
    }
    Ok(Self { table: usable.into() })
  }

  pub fn len(&self) -> usize {
    self.table.len()
  }

  #[cfg(test)]
  pub fn entries(&self) -> &[CoupletRecord] {
    &self.table
  }

  pub fn authentic_count(&self) -> usize {
    self.table.iter().filter(|c| c.is_authentic()).count()
  }

  /// Best match for `scenario`, using the thread-local RNG for the zero-score branch.
  pub fn find_best(&self, scenario: &str) -> (&CoupletRecord, CoupletSource) {
    self.find_best_with(scenario, &mut rand::thread_rng())
  }

  /// Best match for `scenario` with an injected random source.
  #[instrument(level = "debug", skip(self, scenario, rng), fields(scenario_len = scenario.len()))]
  pub fn find_best_with<R: Rng + ?Sized>(
    &self,
    scenario: &str,
    rng: &mut R,
  ) -> (&CoupletRecord, CoupletSource) {
    let lower = scenario.to_lowercase();

    let mut best: Option<usize> = None;
    let mut best_score = 0.0_f64;
    for (idx, entry) in self.table.iter().enumerate() {
      let score = score_entry(entry, &lower);
      if score > best_score {
        best_score = score;
        best = Some(idx);
      }
    }

    if let Some(idx) = best {
      debug!(target: "couplet", index = idx, score = best_score, theme = %self.table[idx].theme, "Local match selected");
      return (&self.table[idx], CoupletSource::LocalMatch);
    }

    let authentic: Vec<&CoupletRecord> = self.table.iter().filter(|c| c.is_authentic()).collect();
    let picked = match authentic.choose(&mut *rng) {
      Some(c) => *c,
      None => self.table.choose(&mut *rng).unwrap_or(&self.table[0]),
    };
    debug!(target: "couplet", theme = %picked.theme, authentic = picked.is_authentic(), "No positive score; random pick");
    (picked, CoupletSource::LocalRandom)
  }
}

/// Score one entry against an already-lowercased scenario.
pub fn score_entry(entry: &CoupletRecord, scenario_lower: &str) -> f64 {
  let mut relevance = 0.0;

  for kw in &entry.keywords {
    if !kw.is_empty() && scenario_lower.contains(kw.as_str()) {
      relevance += KEYWORD_WEIGHT;
    }
  }

  let theme = entry.theme.to_lowercase();
  for token in theme.split(|c: char| c.is_whitespace() || c == '&') {
    if token.chars().count() > 2 && scenario_lower.contains(token) {
      relevance += THEME_WORD_WEIGHT;
    }
  }

  for emotion in EMOTION_WORDS {
    if scenario_lower.contains(emotion) {
      relevance += EMOTION_WORD_WEIGHT;
    }
  }

  if relevance > 0.0 && entry.is_authentic() {
    relevance + AUTHENTICITY_BONUS
  } else {
    relevance
  }
}

//! Domain models used by the backend: couplet records, authenticity tags and sources.

use serde::{Deserialize, Serialize};

/// Is the couplet a verified historical quotation?
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Authenticity {
  Authentic,
  #[default]
  Unverified,
}

/// Where did the served couplet come from?
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CoupletSource {
  Remote,       // returned by a candidate chat model
  LocalMatch,   // best positive score in the local table
  LocalRandom,  // zero-score random pick from the local table
}

impl CoupletSource {
  pub fn as_str(&self) -> &'static str {
    match self {
      CoupletSource::Remote => "remote",
      CoupletSource::LocalMatch => "local_match",
      CoupletSource::LocalRandom => "local_random",
    }
  }
}

/// Unit of exchange between the remote requester, the local matcher and the HTTP layer.
/// Multi-line fields carry literal `\n` separators.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CoupletRecord {
  #[serde(default, rename = "hindi", alias = "urdu")]
  pub script_text: Option<String>,
  pub transliteration: String,
  pub translation: String,
  #[serde(default)] pub theme: String,
  #[serde(default, skip_serializing)] pub keywords: Vec<String>,
  #[serde(default)] pub authenticity: Authenticity,
}

impl CoupletRecord {
  /// A record is only shown when both the transliteration and translation carry text.
  pub fn is_displayable(&self) -> bool {
    !self.transliteration.trim().is_empty() && !self.translation.trim().is_empty()
  }

  pub fn is_authentic(&self) -> bool {
    self.authenticity == Authenticity::Authentic
  }
}

/// Lowercase, trim and deduplicate keywords, keeping first-seen order.
pub fn normalize_keywords<I, S>(keywords: I) -> Vec<String>
where
  I: IntoIterator<Item = S>,
  S: AsRef<str>,
{
  let mut out: Vec<String> = Vec::new();
  for k in keywords {
    let k = k.as_ref().trim().to_lowercase();
    if !k.is_empty() && !out.contains(&k) {
      out.push(k);
    }
  }
  out
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn displayable_requires_transliteration_and_translation() {
    let mut rec = CoupletRecord {
      script_text: None,
      transliteration: "Ishq ne Ghalib nikamma kar diya".into(),
      translation: "Love has made Ghalib worthless".into(),
      theme: String::new(),
      keywords: vec![],
      authenticity: Authenticity::Unverified,
    };
    assert!(rec.is_displayable());
    rec.translation = "   ".into();
    assert!(!rec.is_displayable());
  }

  #[test]
  fn keywords_are_lowercased_and_deduplicated() {
    let kws = normalize_keywords(["Love", "love ", "", "PAIN", "pain"]);
    assert_eq!(kws, vec!["love".to_string(), "pain".to_string()]);
  }

  #[test]
  fn record_accepts_urdu_alias_and_hides_keywords() {
    let rec: CoupletRecord = serde_json::from_str(
      r#"{"urdu":"عشق","transliteration":"Ishq","translation":"Love","keywords":["love"]}"#,
    ).unwrap();
    assert_eq!(rec.script_text.as_deref(), Some("عشق"));
    assert_eq!(rec.authenticity, Authenticity::Unverified);

    let json = serde_json::to_value(&rec).unwrap();
    assert_eq!(json["hindi"], "عشق");
    assert!(json.get("keywords").is_none());
  }
}

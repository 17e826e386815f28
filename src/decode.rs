//! Turning model output into a `CoupletRecord`.
//!
//! Primary path: a JSON object with `hindi` (or `urdu`), `transliteration`,
//! `translation` and `theme`. Models sometimes wrap the object in prose or a
//! code fence, so the outermost `{...}` slice is tried too. Field values are
//! read loosely: null counts as empty and arrays of lines are joined with "\n".
//!
//! Degraded path: positional line recovery, only for content that is not a
//! JSON object. A broken object is never split into lines.

use serde_json::{Map, Value};

use crate::domain::{Authenticity, CoupletRecord};
use crate::util::has_native_script;

/// Decode model content into a displayable couplet, or None if nothing usable is there.
pub fn decode_couplet(content: &str) -> Option<CoupletRecord> {
  let record = match parse_structured(content) {
    Some(record) => record,
    None if starts_as_json_object(content) => return None,
    None => recover_from_lines(content),
  };
  record.is_displayable().then_some(record)
}

/// Parse a JSON object, first from the whole content, then from its outermost braces.
pub fn parse_structured(content: &str) -> Option<CoupletRecord> {
  if let Ok(Value::Object(obj)) = serde_json::from_str::<Value>(content.trim()) {
    return Some(record_from_object(&obj));
  }
  let start = content.find('{')?;
  let end = content.rfind('}')?;
  if end <= start {
    return None;
  }
  match serde_json::from_str::<Value>(&content[start..=end]) {
    Ok(Value::Object(obj)) => Some(record_from_object(&obj)),
    _ => None,
  }
}

fn record_from_object(obj: &Map<String, Value>) -> CoupletRecord {
  let script = text_field(obj, &["hindi", "urdu"]);
  CoupletRecord {
    script_text: (!script.is_empty()).then_some(script),
    transliteration: text_field(obj, &["transliteration"]),
    translation: text_field(obj, &["translation"]),
    theme: text_field(obj, &["theme"]),
    keywords: Vec::new(),
    authenticity: Authenticity::Unverified,
  }
}

/// First non-null value among `keys`, flattened to trimmed text.
fn text_field(obj: &Map<String, Value>, keys: &[&str]) -> String {
  keys
    .iter()
    .filter_map(|k| obj.get(*k))
    .find(|v| !v.is_null())
    .map(flatten_text)
    .unwrap_or_default()
}

fn flatten_text(value: &Value) -> String {
  match value {
    Value::String(s) => s.trim().to_string(),
    Value::Array(items) => items
      .iter()
      .map(flatten_text)
      .filter(|s| !s.is_empty())
      .collect::<Vec<_>>()
      .join("\n"),
    Value::Number(n) => n.to_string(),
    _ => String::new(),
  }
}

/// True when the first meaningful line (fence markers skipped) opens a JSON object.
fn starts_as_json_object(content: &str) -> bool {
  content
    .lines()
    .map(str::trim)
    .find(|l| !l.is_empty() && !l.starts_with("```"))
    .map_or(false, |l| l.starts_with('{'))
}

/// Assign non-empty lines positionally. When the first line carries original
/// script the order is script, transliteration, translation, theme; otherwise
/// the script slot is skipped. Missing positions stay empty.
pub fn recover_from_lines(content: &str) -> CoupletRecord {
  let mut lines = content
    .lines()
    .map(str::trim)
    .filter(|l| !l.is_empty() && !l.starts_with("```"))
    .peekable();

  let leads_with_script = lines.peek().map_or(false, |first| has_native_script(first));
  let script_text = if leads_with_script { lines.next().map(str::to_string) } else { None };
  let mut next = || lines.next().unwrap_or_default().to_string();
  let transliteration = next();
  let translation = next();
  let theme = next();

  CoupletRecord {
    script_text,
    transliteration,
    translation,
    theme,
    keywords: Vec::new(),
    authenticity: Authenticity::Unverified,
  }
}

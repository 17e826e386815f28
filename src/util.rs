//! Small utility helpers used across modules.

/// True if the character is alphabetic but outside the Latin blocks
/// (Devanagari, Arabic/Nastaliq, ...). Used to spot original-script lines.
/// Diacritic Latin used in scholarly transliteration (ā, ḥ, ṭ, ġ) is not native script.
pub fn is_native_script(ch: char) -> bool {
  ch.is_alphabetic() && !is_latin(ch)
}

fn is_latin(ch: char) -> bool {
  matches!(ch,
    '\u{0000}'..='\u{036F}'      // Basic Latin through Combining Diacritical Marks
    | '\u{1D00}'..='\u{1DBF}'    // Phonetic Extensions
    | '\u{1E00}'..='\u{1EFF}'    // Latin Extended Additional
    | '\u{2C60}'..='\u{2C7F}'    // Latin Extended-C
    | '\u{A720}'..='\u{A7FF}'    // Latin Extended-D
    | '\u{AB30}'..='\u{AB6F}'    // Latin Extended-E
    | '\u{FF21}'..='\u{FF5A}'    // Fullwidth Latin letters
  )
}

/// True when a line contains any non-Latin alphabetic character.
pub fn has_native_script(line: &str) -> bool {
  line.chars().any(is_native_script)
}

/// Log-safe truncation for large strings.
/// Avoids spamming logs with huge upstream bodies. Cuts on a char boundary.
pub fn trunc_for_log(s: &str, max: usize) -> String {
  if s.len() <= max {
    return s.to_string();
  }
  let mut end = max;
  while !s.is_char_boundary(end) {
    end -= 1;
  }
  format!("{}… ({} bytes total)", &s[..end], s.len())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn detects_devanagari_and_arabic_but_not_latin() {
    assert!(has_native_script("हज़ारों ख़्वाहिशें ऐसी"));
    assert!(has_native_script("ہزاروں خواہشیں"));
    assert!(!has_native_script("Hazaaron khwahishen aisi"));
    assert!(!has_native_script("Café déjà vu"));
  }

  #[test]
  fn scholarly_diacritics_stay_latin() {
    assert!(!has_native_script("ḳhvāhish hazāroñ"));
    assert!(!has_native_script("ḥasrat ṭūfān ġam"));
    assert!(!is_native_script('ḍ'));
    assert!(!has_native_script("ha\u{0304}sil"));
    assert!(is_native_script('ख'));
    assert!(is_native_script('ع'));
  }

  #[test]
  fn truncation_respects_char_boundaries() {
    let s = "दिल-ए-नादाँ";
    let t = trunc_for_log(s, 4);
    assert!(t.starts_with('द'));
    assert!(t.ends_with("bytes total)"));
    assert_eq!(trunc_for_log("short", 10), "short");
  }
}

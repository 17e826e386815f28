//! Seed data: the built-in couplet table and sample scenarios.
//!
//! The table guarantees the service is useful even without external config or
//! a model credential. Contents are replaceable via the TOML `[[couplets]]` bank.

use crate::domain::{normalize_keywords, Authenticity, CoupletRecord};

fn couplet(
  hindi: &str,
  transliteration: &str,
  translation: &str,
  theme: &str,
  keywords: &[&str],
  authenticity: Authenticity,
) -> CoupletRecord {
  CoupletRecord {
    script_text: Some(hindi.to_string()),
    transliteration: transliteration.to_string(),
    translation: translation.to_string(),
    theme: theme.to_string(),
    keywords: normalize_keywords(keywords),
    authenticity,
  }
}

/// Built-in Ghalib couplets, in table order (order matters for tie-breaks).
pub fn seed_couplets() -> Vec<CoupletRecord> {
  use Authenticity::{Authentic, Unverified};
  vec![
    couplet(
      "हज़ारों ख़्वाहिशें ऐसी कि हर ख़्वाहिश पे दम निकले\nबहुत निकले मिरे अरमान लेकिन फिर भी कम निकले",
      "Hazaaron khwahishen aisi ke har khwahish pe dam nikle\nBahut nikle mere armaan lekin phir bhi kam nikle",
      "Thousands of desires, each one so intense that I could die for it\nMany of my wishes were fulfilled, yet still they seem few",
      "Desire & Longing",
      &["desire", "wish", "longing", "want", "hope", "dream", "aspiration", "yearning", "craving"],
      Authentic,
    ),
    couplet(
      "दिल से निकलेगी न मर कर भी वफ़ा की उम्मीद\nनहीं है जिस में कुछ भी तो क्या है",
      "Dil se niklegi na mar kar bhi wafa ki ummeed\nNahi hai jis mein kuch bhi to kya hai",
      "Even after death, the hope of faithfulness won't leave my heart\nWhat is it that has nothing in it?",
      "Love & Faithfulness",
      &["love", "faithfulness", "loyalty", "devotion", "heart", "romance", "relationship", "commitment", "trust"],
      Unverified,
    ),
    couplet(
      "इश्क़ ने 'ग़ालिब' निकम्मा कर दिया\nवर्ना हम भी आदमी थे काम के",
      "Ishq ne Ghalib nikamma kar diya\nWarna hum bhi aadmi the kaam ke",
      "Love has made Ghalib worthless\nOtherwise I too was a capable person",
      "Love's Impact",
      &["love", "worthless", "capable", "transformation", "change", "impact", "effect", "influence"],
      Authentic,
    ),
    couplet(
      "हम को मालूम है जन्नत की हक़ीक़त लेकिन\nदिल के ख़ुश रखने को 'ग़ालिब' ये ख़याल अच्छा है",
      "Hum ko maloom hai jannat ki haqeeqat lekin\nDil ke khush rakhne ko Ghalib yeh khayal achha hai",
      "We know the reality of paradise\nBut Ghalib, this thought is good to keep the heart happy",
      "Hope & Optimism",
      &["hope", "optimism", "happiness", "paradise", "heaven", "joy", "cheer", "positivity", "comfort"],
      Authentic,
    ),
    couplet(
      "न था कुछ तो ख़ुदा था कुछ न होता तो ख़ुदा होता\nडुबोया मुझ को होने ने न होता मैं तो क्या होता",
      "Na tha kuch to khuda tha, kuch na hota to khuda hota\nDuboya mujh ko hone ne, na hota main to kya hota",
      "When there was nothing, God was there; if nothing existed, God would exist\nMy existence has drowned me; if I didn't exist, what would I be?",
      "Existence & Philosophy",
      &["existence", "philosophy", "god", "being", "nothingness", "reality", "meaning", "purpose", "life"],
      Authentic,
    ),
    couplet(
      "बस-कि दुश्वार है हर काम का आसाँ होना\nआदमी को भी मयस्सर नहीं इंसाँ होना",
      "Baske dushwar hai har kaam ka aasan hona\nAadmi ko bhi mayassar nahi insaan hona",
      "It is difficult for every task to become easy\nEven becoming human is not easy for a person",
      "Life's Challenges",
      &["difficult", "challenge", "struggle", "hard", "easy", "human", "life", "effort", "perseverance"],
      Authentic,
    ),
    couplet(
      "इश्क़ से तबीअत ने ज़ीस्त का मज़ा पाया\nदर्द की दवा पाई दर्द-ए-बे-दवा पाया",
      "Ishq se tabiyat ne zeest ka maza paya\nDard ki dawa payi dard-e-be-dawa paya",
      "Through love my nature found the taste of life\nI found a cure for pain, and a pain that has no cure",
      "Love's Pain",
      &["love", "pain", "poison", "medicine", "hurt", "suffering", "heartbreak", "agony", "torment"],
      Authentic,
    ),
    couplet(
      "हम को मालूम है जन्नत की हक़ीक़त लेकिन\nदिल के ख़ुश रखने को 'ग़ालिब' ये ख़याल अच्छा है",
      "Hum ko maloom hai jannat ki haqeeqat lekin\nDil ke khush rakhne ko Ghalib yeh khayal achha hai",
      "We know the reality of paradise\nBut Ghalib, this thought is good to keep the heart happy",
      "Contentment",
      &["contentment", "satisfaction", "peace", "happiness", "paradise", "bliss", "serenity", "tranquility", "grateful", "content"],
      Authentic,
    ),
    couplet(
      "दिल-ए-नादाँ तुझे हुआ क्या है\nआख़िर इस दर्द की दवा क्या है",
      "Dil-e-nadaan tujhe hua kya hai\nAakhir is dard ki dawa kya hai",
      "O naive heart, what has become of you?\nAfter all, what is the cure for this ache?",
      "Love's Sorrow",
      &["love", "sorrow", "grief", "sadness", "melancholy", "heartache", "despair", "woe", "anguish", "miss"],
      Authentic,
    ),
    couplet(
      "रंज से ख़ूगर हुआ इंसाँ तो मिट जाता है रंज\nमुश्किलें मुझ पर पड़ीं इतनी कि आसाँ हो गईं",
      "Ranj se khugar hua insaan to mit jaata hai ranj\nMushkilen mujh par padin itni ki aasaan ho gayin",
      "When one grows used to sorrow, the sorrow fades away\nSo many hardships fell on me that they became easy",
      "Wisdom & Acceptance",
      &["wisdom", "acceptance", "reality", "truth", "knowledge", "understanding", "insight", "enlightenment"],
      Authentic,
    ),
  ]
}

/// Inspiration prompts rotated through the front-end input placeholder.
pub fn sample_scenarios() -> Vec<&'static str> {
  vec![
    "I'm feeling lost in love",
    "I just achieved something great",
    "I'm dealing with heartbreak",
    "I miss someone special",
    "I'm questioning my purpose in life",
    "I'm feeling grateful and content",
    "I'm struggling with life's challenges",
    "I'm experiencing deep sorrow",
  ]
}

//! Text canonicalization for comparison

/// Contractions expanded before punctuation is stripped. Literal substring
/// replacement; none of these overlap, so order is irrelevant.
const CONTRACTIONS: &[(&str, &str)] = &[
    ("what's", "what is"),
    ("it's", "it is"),
    ("i'm", "i am"),
];

/// Canonicalize text for matching: lowercase, expand common contractions,
/// keep only `[a-z0-9 ]`, collapse whitespace. Idempotent.
pub fn normalize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut s = text.trim().to_lowercase();
    for (contraction, expansion) in CONTRACTIONS {
        s = s.replace(contraction, expansion);
    }

    let filtered: String = s
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == ' ')
        .collect();

    filtered.split_whitespace().collect::<Vec<_>>().join(" ")
}

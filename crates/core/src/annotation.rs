//! Entity annotation parsing
//!
//! Corpus rows carry a `|`-delimited annotation of `KEY:VALUE` pairs, e.g.
//! `ACCOUNT_NUMBER:949254126395|MONEY:500`. Segments without a `:` are
//! skipped rather than rejected; a malformed annotation is never fatal.

/// Recognized annotation keys. Unknown keys are carried through parsing
/// but ignored by the extractor.
pub mod keys {
    pub const ACCOUNT_NUMBER: &str = "ACCOUNT_NUMBER";
    pub const MONEY: &str = "MONEY";
    pub const PERSON: &str = "PERSON";
}

/// Split an annotation into `(key, value)` pairs.
///
/// Keys are uppercased and trimmed, values trimmed. Only the first `:` in a
/// segment delimits key from value, so values may themselves contain colons.
pub fn annotation_pairs(annotation: &str) -> Vec<(String, String)> {
    annotation
        .split('|')
        .filter_map(|segment| {
            let (key, value) = segment.split_once(':')?;
            Some((key.trim().to_uppercase(), value.trim().to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pairs() {
        let pairs = annotation_pairs("ACCOUNT_NUMBER:123456|MONEY:500");
        assert_eq!(
            pairs,
            vec![
                ("ACCOUNT_NUMBER".to_string(), "123456".to_string()),
                ("MONEY".to_string(), "500".to_string()),
            ]
        );
    }

    #[test]
    fn test_segment_without_colon_is_skipped() {
        let pairs = annotation_pairs("ACCOUNT_NUMBER|MONEY:500|garbage");
        assert_eq!(pairs, vec![("MONEY".to_string(), "500".to_string())]);
    }

    #[test]
    fn test_key_is_uppercased_and_value_trimmed() {
        let pairs = annotation_pairs("person: Ravi ");
        assert_eq!(pairs, vec![("PERSON".to_string(), "Ravi".to_string())]);
    }

    #[test]
    fn test_value_keeps_extra_colons() {
        let pairs = annotation_pairs("NOTE:a:b");
        assert_eq!(pairs, vec![("NOTE".to_string(), "a:b".to_string())]);
    }

    #[test]
    fn test_empty_annotation() {
        assert!(annotation_pairs("").is_empty());
    }
}

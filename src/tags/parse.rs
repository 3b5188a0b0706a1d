// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Parsing structured tags into key-value pairs.

use std::fmt;

use crate::tags::DEFAULT_DELIMITER;

/// A key-value pair parsed from a structured tag.
///
/// This is a transient view: pairs are derived from tags on each parse call
/// and never stored by the library.
///
/// # Examples
///
/// ```
/// use metaltags::KvPair;
///
/// let pair = KvPair::new("env", "prod");
/// assert_eq!(pair.to_tag("="), "env=prod");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KvPair {
    /// Text before the first delimiter occurrence.
    pub key: String,
    /// Text after the first delimiter occurrence, including any further
    /// embedded delimiters.
    pub value: String,
}

impl KvPair {
    /// Creates a pair from a key and a value.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Reconstructs the tag string this pair was parsed from.
    ///
    /// An empty `delimiter` defaults to `"="`, matching [`parse_kv_pairs`].
    #[must_use]
    pub fn to_tag(&self, delimiter: &str) -> String {
        let delimiter = effective_delimiter(delimiter);
        format!("{}{delimiter}{}", self.key, self.value)
    }
}

impl fmt::Display for KvPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

fn effective_delimiter(delimiter: &str) -> &str {
    if delimiter.is_empty() {
        DEFAULT_DELIMITER
    } else {
        delimiter
    }
}

/// Parses a device's tags, extracting every tag of the form
/// `key<delimiter>value`.
///
/// The delimiter is matched as a literal substring; an empty delimiter
/// defaults to `"="`. A tag is structured when splitting it at the *first*
/// delimiter occurrence leaves text on both sides: the text before becomes
/// the key, everything after (further delimiter occurrences included)
/// becomes the value. Tags without that shape are skipped.
///
/// Output order follows input order. Duplicate keys are preserved as
/// separate pairs.
///
/// # Examples
///
/// ```
/// use metaltags::tags::parse_kv_pairs;
///
/// let tags = vec![
///     "a=b".to_string(),
///     "a=b=c".to_string(),
///     "novalue".to_string(),
/// ];
/// let pairs = parse_kv_pairs(&tags, "=");
///
/// assert_eq!(pairs.len(), 2);
/// assert_eq!(pairs[1].value, "b=c");
/// ```
#[must_use]
pub fn parse_kv_pairs(tags: &[String], delimiter: &str) -> Vec<KvPair> {
    let delimiter = effective_delimiter(delimiter);

    tags.iter()
        .filter_map(|tag| split_structured(tag, delimiter))
        .collect()
}

/// Splits a single tag at the first delimiter occurrence, requiring a
/// non-empty key and value.
fn split_structured(tag: &str, delimiter: &str) -> Option<KvPair> {
    let (key, value) = tag.split_once(delimiter)?;
    if key.is_empty() || value.is_empty() {
        return None;
    }
    Some(KvPair::new(key, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn parses_simple_pair() {
        let pairs = parse_kv_pairs(&tags(&["a=b"]), "=");
        assert_eq!(pairs, vec![KvPair::new("a", "b")]);
    }

    #[test]
    fn splits_on_first_occurrence_only() {
        let pairs = parse_kv_pairs(&tags(&["a=b=c"]), "=");
        assert_eq!(pairs, vec![KvPair::new("a", "b=c")]);
    }

    #[test]
    fn skips_unstructured_tags() {
        let pairs = parse_kv_pairs(&tags(&["novalue", "a=b", "standalone"]), "=");
        assert_eq!(pairs, vec![KvPair::new("a", "b")]);
    }

    #[test]
    fn skips_empty_key_or_value() {
        assert!(parse_kv_pairs(&tags(&["=b"]), "=").is_empty());
        assert!(parse_kv_pairs(&tags(&["a="]), "=").is_empty());
        assert!(parse_kv_pairs(&tags(&["="]), "=").is_empty());
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(parse_kv_pairs(&[], "").is_empty());
    }

    #[test]
    fn empty_delimiter_defaults_to_equals() {
        let pairs = parse_kv_pairs(&tags(&["a=b", "a:b"]), "");
        assert_eq!(pairs, vec![KvPair::new("a", "b")]);
    }

    #[test]
    fn custom_delimiter() {
        let pairs = parse_kv_pairs(&tags(&["a:b", "a=b"]), ":");
        assert_eq!(pairs, vec![KvPair::new("a", "b")]);
    }

    #[test]
    fn multi_character_delimiter() {
        let pairs = parse_kv_pairs(&tags(&["key::value::more", "key:value"]), "::");
        assert_eq!(pairs, vec![KvPair::new("key", "value::more")]);
    }

    #[test]
    fn metacharacter_delimiter_matches_literally() {
        // "." must not act as a wildcard
        let pairs = parse_kv_pairs(&tags(&["a.b", "axb"]), ".");
        assert_eq!(pairs, vec![KvPair::new("a", "b")]);

        let pairs = parse_kv_pairs(&tags(&["a+b", "ab"]), "+");
        assert_eq!(pairs, vec![KvPair::new("a", "b")]);
    }

    #[test]
    fn duplicate_keys_preserved_in_order() {
        let pairs = parse_kv_pairs(&tags(&["k=1", "other", "k=2"]), "=");
        assert_eq!(pairs, vec![KvPair::new("k", "1"), KvPair::new("k", "2")]);
    }

    #[test]
    fn never_returns_more_pairs_than_tags() {
        let input = tags(&["a=b", "c=d", "x", "==", "e=f=g"]);
        assert!(parse_kv_pairs(&input, "=").len() <= input.len());
    }

    #[test]
    fn reparse_is_idempotent() {
        let input = tags(&["a=b", "a=b=c", "x:y"]);
        for delimiter in ["=", ":"] {
            let pairs = parse_kv_pairs(&input, delimiter);
            let rebuilt: Vec<String> =
                pairs.iter().map(|p| p.to_tag(delimiter)).collect();
            assert_eq!(parse_kv_pairs(&rebuilt, delimiter), pairs);
        }
    }

    #[test]
    fn to_tag_defaults_empty_delimiter() {
        assert_eq!(KvPair::new("a", "b").to_tag(""), "a=b");
    }
}

// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Pure replacement-list builders.
//!
//! Each function takes a device's current tag list and returns the full
//! replacement list a mutation would submit. Keeping these separate from
//! the API calls makes the compute step testable without a live provider.

/// Returns the tag list with `tag` appended at the end.
///
/// No existence check is made: appending a tag that is already present
/// yields a duplicate.
#[must_use]
pub fn appended(tags: &[String], tag: &str) -> Vec<String> {
    let mut out = tags.to_vec();
    out.push(tag.to_string());
    out
}

/// Returns the tag list with every element exactly equal to `tag` removed.
///
/// If `tag` is absent the result equals the input.
#[must_use]
pub fn removed(tags: &[String], tag: &str) -> Vec<String> {
    tags.iter().filter(|t| *t != tag).cloned().collect()
}

/// Returns the tag list with every element exactly equal to `old_tag`
/// replaced by `new_tag`, order preserved.
///
/// If `old_tag` is absent the result equals the input.
#[must_use]
pub fn replaced(tags: &[String], old_tag: &str, new_tag: &str) -> Vec<String> {
    tags.iter()
        .map(|t| {
            if t == old_tag {
                new_tag.to_string()
            } else {
                t.clone()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn appended_keeps_order_and_allows_duplicates() {
        let out = appended(&tags(&["a", "b"]), "a");
        assert_eq!(out, tags(&["a", "b", "a"]));
    }

    #[test]
    fn appended_to_empty() {
        assert_eq!(appended(&[], "x"), tags(&["x"]));
    }

    #[test]
    fn removed_drops_all_occurrences() {
        let out = removed(&tags(&["x", "y", "x"]), "x");
        assert_eq!(out, tags(&["y"]));
    }

    #[test]
    fn removed_absent_is_identity() {
        let input = tags(&["a", "b"]);
        assert_eq!(removed(&input, "z"), input);
    }

    #[test]
    fn removed_requires_exact_match() {
        let input = tags(&["env=prod"]);
        assert_eq!(removed(&input, "env"), input);
    }

    #[test]
    fn replaced_covers_all_occurrences_in_place() {
        let out = replaced(&tags(&["x", "y", "x"]), "x", "z");
        assert_eq!(out, tags(&["z", "y", "z"]));
    }

    #[test]
    fn replaced_absent_is_identity() {
        let input = tags(&["a", "b"]);
        assert_eq!(replaced(&input, "z", "w"), input);
    }
}

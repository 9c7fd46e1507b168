//! Note metadata - the front-matter fields extracted from a single note

use serde::{Deserialize, Serialize};

/// Metadata declared in the front-matter of one note.
///
/// Only `file` is guaranteed to be set. Every other field stays absent or
/// empty when the matching `:key:` line is missing from the note.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteMetadata {
    /// Path relative to the discovery root; unique within a run
    pub file: String,

    /// Value of the `:date:` line, trimmed
    pub date: Option<String>,

    /// Comma-separated `:tags:` entries, in declaration order
    pub tags: Vec<String>,

    /// Value of the `:topic:` line, trimmed
    pub topic: Option<String>,

    /// Raw `:related:` reference tokens, in declaration order
    pub related: Vec<String>,
}

impl NoteMetadata {
    /// Metadata for a note with no front-matter at all
    ///
    /// # Examples
    ///
    /// ```
    /// use notekeeper_domain::NoteMetadata;
    ///
    /// let meta = NoteMetadata::new("topics/rust.adoc");
    /// assert!(meta.date.is_none());
    /// assert!(meta.tags.is_empty());
    /// ```
    pub fn new(file: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            ..Default::default()
        }
    }

    /// Last path component of `file`, used as the display name in the index
    pub fn display_name(&self) -> &str {
        self.file
            .rsplit(['/', std::path::MAIN_SEPARATOR])
            .next()
            .unwrap_or(&self.file)
    }

    /// Topic, if declared with a non-empty value
    pub fn topic_label(&self) -> Option<&str> {
        self.topic.as_deref().filter(|t| !t.is_empty())
    }

    /// Date, if declared with a non-empty value
    pub fn date_label(&self) -> Option<&str> {
        self.date.as_deref().filter(|d| !d.is_empty())
    }

    /// True when none of the optional fields were found
    pub fn is_bare(&self) -> bool {
        self.date.is_none() && self.topic.is_none() && self.tags.is_empty() && self.related.is_empty()
    }
}

/// Split a comma-separated front-matter value.
///
/// Pieces are trimmed and empty pieces dropped; order is preserved.
///
/// # Examples
///
/// ```
/// use notekeeper_domain::split_list;
///
/// assert_eq!(split_list("a, b ,c"), vec!["a", "b", "c"]);
/// assert!(split_list(" , ").is_empty());
/// ```
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_bare() {
        let meta = NoteMetadata::new("a.adoc");
        assert_eq!(meta.file, "a.adoc");
        assert!(meta.is_bare());
    }

    #[test]
    fn test_display_name() {
        assert_eq!(NoteMetadata::new("a/b/c.md").display_name(), "c.md");
        assert_eq!(NoteMetadata::new("top.adoc").display_name(), "top.adoc");
    }

    #[test]
    fn test_empty_labels_are_hidden() {
        let mut meta = NoteMetadata::new("a.adoc");
        meta.topic = Some(String::new());
        meta.date = Some("2024-01-01".to_string());
        assert_eq!(meta.topic_label(), None);
        assert_eq!(meta.date_label(), Some("2024-01-01"));
        assert!(!meta.is_bare());
    }

    #[test]
    fn test_split_list_trims_and_drops_empty() {
        assert_eq!(split_list("a, b ,c"), vec!["a", "b", "c"]);
        assert_eq!(split_list("rust,,  ,notes,"), vec!["rust", "notes"]);
        assert!(split_list("").is_empty());
    }

    #[test]
    fn test_split_list_keeps_duplicates_in_order() {
        assert_eq!(split_list("x, y, x"), vec!["x", "y", "x"]);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: split pieces are never empty and never carry outer whitespace
        #[test]
        fn test_split_list_pieces_are_trimmed(value in "[a-z ,]{0,40}") {
            for piece in split_list(&value) {
                prop_assert!(!piece.is_empty());
                prop_assert_eq!(piece.trim(), piece.as_str());
                prop_assert!(!piece.contains(','));
            }
        }

        /// Property: joining the pieces back and splitting again is stable
        #[test]
        fn test_split_list_is_idempotent(value in "[a-z ,]{0,40}") {
            let once = split_list(&value);
            let twice = split_list(&once.join(","));
            prop_assert_eq!(once, twice);
        }
    }
}

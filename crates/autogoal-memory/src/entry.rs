use autogoal_core::error::{MemoryError, MemoryResult};
use autogoal_core::{EntryId, Metadata};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Importance score in `0..=10`.
///
/// Entries at or above [`Importance::PROMOTION_THRESHOLD`] survive eviction
/// from short-term memory by moving to long-term memory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Importance(u8);

impl Importance {
    pub const MIN: Importance = Importance(0);
    pub const MAX: Importance = Importance(10);
    pub const PROMOTION_THRESHOLD: Importance = Importance(5);

    /// Validate a score.
    ///
    /// # Errors
    ///
    /// `MemoryError::InvalidImportance` when `value` is outside `0..=10`.
    pub fn new(value: i64) -> MemoryResult<Self> {
        match u8::try_from(value) {
            Ok(score) if score <= Self::MAX.0 => Ok(Self(score)),
            _ => Err(MemoryError::InvalidImportance { value }),
        }
    }

    /// Clamp any integer into range.
    pub fn saturating(value: i64) -> Self {
        Self(value.clamp(0, i64::from(Self::MAX.0)) as u8)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn is_promotable(self) -> bool {
        self >= Self::PROMOTION_THRESHOLD
    }
}

impl TryFrom<i64> for Importance {
    type Error = MemoryError;

    fn try_from(value: i64) -> MemoryResult<Self> {
        Self::new(value)
    }
}

impl fmt::Display for Importance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single remembered item. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemoryEntry {
    id: EntryId,
    content: String,
    timestamp: DateTime<Utc>,
    importance: Importance,
    tags: Vec<String>,
    metadata: Metadata,
}

impl MemoryEntry {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            id: EntryId::new(),
            content: content.into(),
            timestamp: Utc::now(),
            importance: Importance::MIN,
            tags: Vec::new(),
            metadata: Metadata::new(),
        }
    }

    pub fn with_importance(mut self, importance: Importance) -> Self {
        self.importance = importance;
        self
    }

    /// Add a tag. Duplicates are ignored; first-seen order is kept.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        let tag = tag.into();
        if !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
        self
    }

    pub fn with_tags<I, S>(self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        tags.into_iter().fold(self, MemoryEntry::with_tag)
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    pub fn id(&self) -> EntryId {
        self.id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn importance(&self) -> Importance {
        self.importance
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Case-insensitive substring match on the content.
    pub(crate) fn matches(&self, needle_lowercase: &str) -> bool {
        self.content.to_lowercase().contains(needle_lowercase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0)]
    #[case(5)]
    #[case(10)]
    fn importance_accepts_range(#[case] value: i64) {
        assert_eq!(i64::from(Importance::new(value).unwrap().get()), value);
    }

    #[rstest]
    #[case(-1)]
    #[case(11)]
    #[case(300)]
    fn importance_rejects_out_of_range(#[case] value: i64) {
        assert_eq!(
            Importance::new(value),
            Err(MemoryError::InvalidImportance { value })
        );
    }

    #[test]
    fn importance_saturates() {
        assert_eq!(Importance::saturating(-4), Importance::MIN);
        assert_eq!(Importance::saturating(42), Importance::MAX);
        assert_eq!(Importance::saturating(7).get(), 7);
    }

    #[test]
    fn promotion_threshold_is_five() {
        assert!(!Importance::saturating(4).is_promotable());
        assert!(Importance::saturating(5).is_promotable());
    }

    #[test]
    fn tags_are_deduplicated_in_order() {
        let entry = MemoryEntry::new("x").with_tags(["b", "a", "b", "c"]);
        assert_eq!(entry.tags(), ["b", "a", "c"]);
        assert!(entry.has_tag("a"));
        assert!(!entry.has_tag("A"));
    }

    #[test]
    fn defaults() {
        let entry = MemoryEntry::new("plain");
        assert_eq!(entry.importance(), Importance::MIN);
        assert!(entry.tags().is_empty());
        assert!(entry.metadata().is_empty());
        assert_ne!(entry.id(), MemoryEntry::new("plain").id());
    }
}

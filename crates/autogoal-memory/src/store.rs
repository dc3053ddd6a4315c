use crate::entry::MemoryEntry;
use autogoal_core::EntryId;
use autogoal_core::config::DEFAULT_SHORT_TERM_CAPACITY;
use autogoal_core::error::{MemoryError, MemoryResult};
use serde::Serialize;
use std::collections::VecDeque;
use std::num::NonZeroUsize;

/// What happened to the oldest short-term entry when an insert overflowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spill {
    /// Short-term memory had room.
    None,
    /// The evicted entry was important enough to move to long-term memory.
    Promoted(EntryId),
    /// The evicted entry was dropped.
    Discarded(EntryId),
}

/// Counts reported by [`MemoryStore::stats`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MemoryStats {
    pub short_term: usize,
    pub long_term: usize,
    pub capacity: usize,
    pub promoted: usize,
    pub discarded: usize,
}

/// Bounded short-term memory in front of an unbounded long-term memory.
///
/// Short-term memory is a FIFO: when an insert pushes it past capacity the
/// oldest entry is evicted, and promoted to long-term memory if its
/// importance is at least [`Importance::PROMOTION_THRESHOLD`].
///
/// [`Importance::PROMOTION_THRESHOLD`]: crate::Importance::PROMOTION_THRESHOLD
///
/// # Example
///
/// ```rust
/// use autogoal_memory::{Importance, MemoryEntry, MemoryStore, Spill};
///
/// let mut memory = MemoryStore::with_capacity(1).unwrap();
/// memory.add_to_short_term(MemoryEntry::new("keep me").with_importance(Importance::saturating(9)));
/// let spill = memory.add_to_short_term(MemoryEntry::new("newer"));
///
/// assert!(matches!(spill, Spill::Promoted(_)));
/// assert_eq!(memory.long_term()[0].content(), "keep me");
/// ```
#[derive(Debug, Clone)]
pub struct MemoryStore {
    short_term: VecDeque<MemoryEntry>,
    long_term: Vec<MemoryEntry>,
    capacity: NonZeroUsize,
    promoted: usize,
    discarded: usize,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new(DEFAULT_SHORT_TERM_CAPACITY)
    }
}

impl MemoryStore {
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            short_term: VecDeque::with_capacity(capacity.get() + 1),
            long_term: Vec::new(),
            capacity,
            promoted: 0,
            discarded: 0,
        }
    }

    /// # Errors
    ///
    /// `MemoryError::InvalidCapacity` when `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> MemoryResult<Self> {
        NonZeroUsize::new(capacity)
            .map(Self::new)
            .ok_or(MemoryError::InvalidCapacity)
    }

    /// Append to short-term memory, evicting at most one entry.
    pub fn add_to_short_term(&mut self, entry: MemoryEntry) -> Spill {
        self.short_term.push_back(entry);
        if self.short_term.len() <= self.capacity.get() {
            return Spill::None;
        }

        let Some(oldest) = self.short_term.pop_front() else {
            return Spill::None;
        };
        let id = oldest.id();
        if oldest.importance().is_promotable() {
            tracing::debug!(entry_id = %id, importance = %oldest.importance(), "Promoted memory to long-term");
            self.long_term.push(oldest);
            self.promoted += 1;
            Spill::Promoted(id)
        } else {
            tracing::debug!(entry_id = %id, importance = %oldest.importance(), "Discarded short-term memory");
            self.discarded += 1;
            Spill::Discarded(id)
        }
    }

    pub fn add_to_long_term(&mut self, entry: MemoryEntry) {
        self.long_term.push(entry);
    }

    /// Short-term entries, oldest first.
    pub fn short_term(&self) -> impl ExactSizeIterator<Item = &MemoryEntry> + DoubleEndedIterator {
        self.short_term.iter()
    }

    /// Long-term entries, oldest first.
    pub fn long_term(&self) -> &[MemoryEntry] {
        &self.long_term
    }

    /// The `n` newest short-term entries, oldest first.
    pub fn recent(&self, n: usize) -> impl Iterator<Item = &MemoryEntry> {
        self.short_term
            .iter()
            .skip(self.short_term.len().saturating_sub(n))
    }

    /// Case-insensitive substring search: short-term matches first, then
    /// long-term matches when `search_long_term` is set.
    pub fn search(&self, query: &str, search_long_term: bool) -> Vec<&MemoryEntry> {
        let needle = query.to_lowercase();
        self.scan(search_long_term, |entry| entry.matches(&needle))
    }

    /// Exact tag search, ordered like [`MemoryStore::search`].
    pub fn search_by_tag(&self, tag: &str, search_long_term: bool) -> Vec<&MemoryEntry> {
        self.scan(search_long_term, |entry| entry.has_tag(tag))
    }

    pub fn clear_short_term(&mut self) {
        self.short_term.clear();
    }

    pub fn clear_long_term(&mut self) {
        self.long_term.clear();
    }

    pub fn clear_all(&mut self) {
        self.clear_short_term();
        self.clear_long_term();
    }

    pub fn capacity(&self) -> usize {
        self.capacity.get()
    }

    /// Total entries across both tiers.
    pub fn len(&self) -> usize {
        self.short_term.len() + self.long_term.len()
    }

    pub fn is_empty(&self) -> bool {
        self.short_term.is_empty() && self.long_term.is_empty()
    }

    pub fn short_term_len(&self) -> usize {
        self.short_term.len()
    }

    pub fn long_term_len(&self) -> usize {
        self.long_term.len()
    }

    pub fn stats(&self) -> MemoryStats {
        MemoryStats {
            short_term: self.short_term.len(),
            long_term: self.long_term.len(),
            capacity: self.capacity.get(),
            promoted: self.promoted,
            discarded: self.discarded,
        }
    }

    fn scan(&self, search_long_term: bool, predicate: impl Fn(&MemoryEntry) -> bool) -> Vec<&MemoryEntry> {
        let long_term: &[MemoryEntry] = if search_long_term {
            self.long_term.as_slice()
        } else {
            &[]
        };
        self.short_term
            .iter()
            .chain(long_term)
            .filter(|entry| predicate(entry))
            .collect()
    }
}

//! # Autogoal Memory
//!
//! Two-tier memory for agents:
//!
//! - **short-term**: a bounded FIFO of recent observations
//! - **long-term**: an unbounded list of entries worth keeping
//!
//! Entries leave short-term memory only by eviction; an evicted entry with
//! importance 5 or higher is promoted to long-term memory, anything less is
//! dropped. Everything lives for the lifetime of the process.

mod entry;
mod store;

pub use entry::{Importance, MemoryEntry};
pub use store::{MemoryStats, MemoryStore, Spill};

//! Utility types shared across the crate.
//!
//! - [`BitSet`] - Compact set of small integers, used as the node presence mask

mod bitset;

pub use bitset::{BitSet, BitSetIter};

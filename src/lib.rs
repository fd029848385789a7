#![warn(missing_docs)]
#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod error;

/// A key-value map over the Robin Hood table.
///
/// This module provides [`RobinHoodMap`](hash_map::RobinHoodMap), which hashes
/// keys with a configurable [`BuildHasher`](core::hash::BuildHasher) and stores
/// them in a [`HashTable`].
pub mod hash_map;

pub mod hash_table;

pub use error::Error;
pub use hash_map::Entry;
pub use hash_map::RobinHoodMap;
pub use hash_table::HashTable;
#[cfg(feature = "stats")]
pub use hash_table::DebugStats;
#[cfg(feature = "stats")]
pub use hash_table::ProbeHistogram;

cfg_if::cfg_if! {
    if #[cfg(feature = "foldhash")] {
        /// The hasher builder used when none is named.
        pub type DefaultHashBuilder = foldhash::fast::RandomState;
    } else if #[cfg(feature = "std")] {
        /// The hasher builder used when none is named.
        pub type DefaultHashBuilder = std::hash::RandomState;
    } else {
        /// Placeholder when neither `foldhash` nor `std` is enabled.
        ///
        /// It has no values, so maps must be built with
        /// [`RobinHoodMap::with_hasher`].
        #[derive(Clone, Copy, Debug)]
        pub enum DefaultHashBuilder {}
    }
}

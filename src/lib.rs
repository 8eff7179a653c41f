#![doc = include_str!("../README.md")]
//!
//! ---
//!
//! # Which Cache Should I Use?
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  Is your workload primarily...                                      │
//! │                                                                     │
//! │  Recency-based? (recent = hot)        ──▶  LruCache                 │
//! │                                                                     │
//! │  Frequency-based? (popular = hot)                                   │
//! │      popularity stable over time      ──▶  LfuCache                 │
//! │      popularity changes over time     ──▶  AgedLfuCache             │
//! │                                                                     │
//! │  Polluted by one-time keys / scans?   ──▶  KLruCache / KLfuCache    │
//! │                                                                     │
//! │  Accessed from many threads?          ──▶  ShardedLruCache,         │
//! │                                            ShardedLfuCache,         │
//! │                                            ShardedKLruCache         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`lru`]: Least Recently Used cache implementation
//! - [`lfu`]: Least Frequently Used cache implementation
//! - [`aged_lfu`]: LFU with frequency decay
//! - [`admission`]: K-admission gate over any bounded cache
//! - [`sharded`]: Hash-sharded, per-shard-locked wrappers (requires the
//!   `concurrent` feature)
//! - [`config`]: Configuration structures for all cache algorithms
//! - [`metrics`]: Metrics collection for cache performance monitoring
//! - [`traits`]: The [`BoundedCache`] capability the wrappers compose over

#![no_std]

#[cfg(not(feature = "hashbrown"))]
extern crate std;

/// Entry arena with stable handles.
///
/// Backing storage for every linked structure in the crate: entries are
/// addressed by handles with explicit prev/next links, so list surgery is
/// index reassignment rather than pointer manipulation.
mod arena;

/// Recency list for the LRU family.
///
/// Arena-backed doubly linked list ordered by last access, with O(1)
/// append, pop-least-recent, arbitrary removal, and move-to-back.
mod list;

/// Frequency buckets for the LFU family.
///
/// One linked list per distinct access-frequency value over a shared
/// arena, plus minimum-frequency tracking and the bulk decay pass used by
/// the aged variant.
mod buckets;

/// Cache configuration structures.
///
/// Provides configuration structures for all cache algorithm
/// implementations.
pub mod config;

/// Least Recently Used (LRU) cache implementation.
///
/// Provides a fixed-size cache that evicts the least recently used items
/// when the capacity is reached.
pub mod lru;

/// Least Frequently Used (LFU) cache implementation.
///
/// Provides a fixed-size cache that evicts the least frequently used items
/// when capacity is reached, breaking ties oldest-first within the lowest
/// frequency tier.
pub mod lfu;

/// Aged LFU cache implementation.
///
/// An LFU cache whose frequency counters decay whenever their running
/// average exceeds a configured ceiling, keeping once-popular entries from
/// permanently crowding out new ones.
pub mod aged_lfu;

/// K-admission cache implementation.
///
/// Wraps a bounded cache with a visit-counting history tracker; a key is
/// only admitted into the cache after `k` observations.
pub mod admission;

/// The bounded-cache capability.
///
/// The trait seam the K-admission and sharded wrappers compose over.
pub mod traits;

/// Cache metrics system.
///
/// Provides a flexible metrics collection and reporting system for all
/// cache algorithms. Each algorithm tracks algorithm-specific counters
/// while implementing a common interface.
pub mod metrics;

/// Hash-sharded cache implementations.
///
/// Partitions the key space across multiple independently locked cache
/// instances for concurrent access. Available when the `concurrent`
/// feature is enabled.
#[cfg(feature = "concurrent")]
pub mod sharded;

// Re-export cache types
pub use admission::{KAdmissionCache, KLfuCache, KLruCache};
pub use aged_lfu::AgedLfuCache;
pub use lfu::LfuCache;
pub use lru::LruCache;

// Re-export the capability trait
pub use traits::BoundedCache;

#[cfg(feature = "concurrent")]
pub use sharded::{ShardedCache, ShardedKLruCache, ShardedLfuCache, ShardedLruCache};

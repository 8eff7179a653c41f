//! Frequency buckets: one linked list per distinct access frequency.
//!
//! Entries live in a single shared [`Arena`](crate::arena::Arena); each
//! bucket is just a head/tail pair of handles into that arena, keyed by
//! frequency in a `BTreeMap`. Moving an entry between buckets on a
//! frequency increment is an index reassignment, never a reallocation.
//!
//! Within a bucket, entries are ordered oldest (head) to newest (tail) by
//! the time they entered the bucket, which gives the eviction tie-break:
//! among entries sharing the minimum frequency, the head — the one that has
//! been stuck at that frequency the longest — goes first.
//!
//! Minimum-frequency maintenance:
//! - On a frequency increment that empties the minimum bucket, the minimum
//!   becomes the old frequency plus one. This is exact: an increment moves
//!   an entry to exactly F+1, so F cannot be the minimum afterwards.
//! - Empty buckets are removed from the map eagerly, so everywhere else the
//!   map's first key is the true minimum; a recompute is a single
//!   `keys().next()` over non-empty buckets.
//! - A bulk [`decay`](FreqBuckets::decay) pass re-buckets everything and
//!   recomputes the minimum from scratch.
//!
//! **Note**: This module is internal infrastructure and should not be used
//! directly by library consumers. Use the high-level cache implementations
//! instead.

extern crate alloc;

use crate::arena::{Arena, EntryRef};
use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use core::fmt;

struct Node<K, V> {
    prev: Option<EntryRef>,
    next: Option<EntryRef>,
    freq: u64,
    key: K,
    value: V,
}

#[derive(Debug, Default, Clone, Copy)]
struct Bucket {
    head: Option<EntryRef>,
    tail: Option<EntryRef>,
}

/// Entries partitioned into per-frequency linked lists over one arena.
pub(crate) struct FreqBuckets<K, V> {
    entries: Arena<Node<K, V>>,
    buckets: BTreeMap<u64, Bucket>,
    /// Smallest frequency with a non-empty bucket; 0 when empty.
    min_freq: u64,
}

impl<K, V> FreqBuckets<K, V> {
    /// Creates an empty structure.
    pub(crate) fn new() -> Self {
        FreqBuckets {
            entries: Arena::new(),
            buckets: BTreeMap::new(),
            min_freq: 0,
        }
    }

    /// Creates an empty structure with entry space reserved for `capacity`.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        FreqBuckets {
            entries: Arena::with_capacity(capacity),
            buckets: BTreeMap::new(),
            min_freq: 0,
        }
    }

    /// Returns the number of live entries.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no entries are stored.
    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the minimum frequency currently in use.
    #[inline]
    pub(crate) fn min_freq(&self) -> Option<u64> {
        if self.is_empty() {
            None
        } else {
            Some(self.min_freq)
        }
    }

    /// Returns the maximum frequency currently in use.
    #[inline]
    pub(crate) fn max_freq(&self) -> Option<u64> {
        self.buckets.keys().next_back().copied()
    }

    /// Returns the number of distinct frequency values in use.
    #[inline]
    pub(crate) fn active_levels(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the key of the entry at `id`, if live.
    #[inline]
    #[allow(dead_code)]
    pub(crate) fn key(&self, id: EntryRef) -> Option<&K> {
        self.entries.get(id).map(|node| &node.key)
    }

    /// Returns the value of the entry at `id`, if live.
    #[inline]
    pub(crate) fn value(&self, id: EntryRef) -> Option<&V> {
        self.entries.get(id).map(|node| &node.value)
    }

    /// Returns a mutable reference to the value of the entry at `id`.
    #[inline]
    pub(crate) fn value_mut(&mut self, id: EntryRef) -> Option<&mut V> {
        self.entries.get_mut(id).map(|node| &mut node.value)
    }

    /// Replaces the value of the entry at `id`, returning the old value.
    pub(crate) fn replace_value(&mut self, id: EntryRef, value: V) -> Option<V> {
        self.entries
            .get_mut(id)
            .map(|node| core::mem::replace(&mut node.value, value))
    }

    /// Returns the recorded frequency of the entry at `id`, if live.
    #[inline]
    #[allow(dead_code)]
    pub(crate) fn frequency(&self, id: EntryRef) -> Option<u64> {
        self.entries.get(id).map(|node| node.freq)
    }

    /// Inserts a new entry at frequency 1 and returns its handle.
    ///
    /// The entry is appended at the tail of the frequency-1 bucket, and the
    /// minimum frequency resets to 1.
    pub(crate) fn insert(&mut self, key: K, value: V) -> EntryRef {
        let id = self.entries.insert(Node {
            prev: None,
            next: None,
            freq: 1,
            key,
            value,
        });
        self.append(id, 1);
        self.min_freq = 1;
        id
    }

    /// Increments the frequency of the entry at `id`, migrating it to the
    /// next bucket. Returns the new frequency.
    ///
    /// Returns `None` if `id` does not address a live entry.
    pub(crate) fn touch(&mut self, id: EntryRef) -> Option<u64> {
        let old = self.entries.get(id)?.freq;
        let emptied = self.unlink(id, old);
        if emptied && old == self.min_freq {
            // The entry moved to exactly old + 1, so old can no longer be
            // the minimum.
            self.min_freq = old + 1;
        }
        let new = old + 1;
        if let Some(node) = self.entries.get_mut(id) {
            node.freq = new;
        }
        self.append(id, new);
        Some(new)
    }

    /// Removes and returns the eviction candidate: the oldest entry in the
    /// minimum-frequency bucket.
    ///
    /// Returns `(key, value, frequency)`, or `None` if empty.
    pub(crate) fn pop_min(&mut self) -> Option<(K, V, u64)> {
        if self.is_empty() {
            return None;
        }
        let freq = self.min_freq;
        let bucket = self
            .buckets
            .get(&freq)
            .expect("frequency buckets corrupted: minimum frequency has no bucket");
        let id = bucket
            .head
            .expect("frequency buckets corrupted: empty bucket retained in map");
        if self.unlink(id, freq) {
            self.min_freq = self.buckets.keys().next().copied().unwrap_or(0);
        }
        let node = self
            .entries
            .remove(id)
            .expect("frequency buckets corrupted: linked entry missing from arena");
        Some((node.key, node.value, node.freq))
    }

    /// Removes the entry at `id`, returning `(key, value, frequency)`.
    ///
    /// Returns `None` if `id` does not address a live entry.
    pub(crate) fn remove(&mut self, id: EntryRef) -> Option<(K, V, u64)> {
        let freq = self.entries.get(id)?.freq;
        if self.unlink(id, freq) && freq == self.min_freq {
            self.min_freq = self.buckets.keys().next().copied().unwrap_or(0);
        }
        let node = self.entries.remove(id)?;
        Some((node.key, node.value, node.freq))
    }

    /// Bulk decay pass: reduces every entry's frequency by `decrement`
    /// (floored at 1), re-buckets all entries, and recomputes the minimum
    /// frequency from scratch.
    ///
    /// Entries are revisited in ascending frequency order, oldest first
    /// within a bucket, so relative age is preserved when buckets merge.
    /// Returns the sum of all frequencies after the pass. O(n).
    pub(crate) fn decay(&mut self, decrement: u64) -> u64 {
        let mut ids = Vec::with_capacity(self.len());
        for bucket in self.buckets.values() {
            let mut current = bucket.head;
            while let Some(id) = current {
                current = self.entries.get(id).and_then(|node| node.next);
                ids.push(id);
            }
        }

        self.buckets.clear();
        let mut total = 0;
        for id in ids {
            let freq = match self.entries.get_mut(id) {
                Some(node) => {
                    node.freq = node.freq.saturating_sub(decrement).max(1);
                    node.prev = None;
                    node.next = None;
                    node.freq
                }
                None => continue,
            };
            self.append(id, freq);
            total += freq;
        }
        self.min_freq = self.buckets.keys().next().copied().unwrap_or(0);
        total
    }

    /// Removes all entries and buckets.
    pub(crate) fn clear(&mut self) {
        self.entries.clear();
        self.buckets.clear();
        self.min_freq = 0;
    }

    /// Appends `id` at the tail (newest position) of the bucket for `freq`,
    /// creating the bucket if needed.
    fn append(&mut self, id: EntryRef, freq: u64) {
        let bucket = self.buckets.entry(freq).or_default();
        let old_tail = bucket.tail;
        bucket.tail = Some(id);
        if bucket.head.is_none() {
            bucket.head = Some(id);
        }
        if let Some(node) = self.entries.get_mut(id) {
            node.prev = old_tail;
            node.next = None;
        }
        if let Some(tail_id) = old_tail {
            if let Some(tail_node) = self.entries.get_mut(tail_id) {
                tail_node.next = Some(id);
            }
        }
    }

    /// Unlinks `id` from the bucket for `freq`, clearing its link fields.
    /// The bucket is dropped from the map if it becomes empty; returns
    /// `true` in that case.
    fn unlink(&mut self, id: EntryRef, freq: u64) -> bool {
        let (prev, next) = match self.entries.get(id) {
            Some(node) => (node.prev, node.next),
            None => return false,
        };

        match prev {
            Some(prev_id) => {
                if let Some(prev_node) = self.entries.get_mut(prev_id) {
                    prev_node.next = next;
                }
            }
            None => {
                if let Some(bucket) = self.buckets.get_mut(&freq) {
                    bucket.head = next;
                }
            }
        }
        match next {
            Some(next_id) => {
                if let Some(next_node) = self.entries.get_mut(next_id) {
                    next_node.prev = prev;
                }
            }
            None => {
                if let Some(bucket) = self.buckets.get_mut(&freq) {
                    bucket.tail = prev;
                }
            }
        }

        if let Some(node) = self.entries.get_mut(id) {
            node.prev = None;
            node.next = None;
        }

        let emptied = self
            .buckets
            .get(&freq)
            .is_some_and(|bucket| bucket.head.is_none());
        if emptied {
            self.buckets.remove(&freq);
        }
        emptied
    }
}

impl<K, V> Default for FreqBuckets<K, V> {
    fn default() -> Self {
        FreqBuckets::new()
    }
}

impl<K, V> fmt::Debug for FreqBuckets<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FreqBuckets")
            .field("len", &self.len())
            .field("min_freq", &self.min_freq)
            .field("active_levels", &self.buckets.len())
            .finish()
    }
}

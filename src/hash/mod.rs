//! # Hash Index
//!
//! A bucketed hash table over string-keyed entries: the point-lookup half of
//! coindb's index pair. Capacity is always prime, growth is automatic, and
//! the structure keeps the telemetry the statistics screen displays.
//!
//! ## Layout
//!
//! ```text
//!   buckets: Vec<BucketList<E>>        (len = capacity, always prime)
//!
//!   [0] -> (empty)
//!   [1] -> [Bitcoin]
//!   [2] -> (empty)
//!   [3] -> [Litecoin] -> [Dogecoin]    (collision chain, arrival order)
//!   ...
//! ```
//!
//! ## Hash Function
//!
//! The bucket for a key is the 1-based quadratic-weighted byte sum
//!
//! ```text
//!   index = ( Σ  key[i-1]² · i )  mod  capacity,   i = 1..=key.len()
//! ```
//!
//! accumulated in `u64` so long keys cannot wrap a 32-bit sum. The function
//! is deliberately simple and collision-prone for short or similar keys; the
//! per-bucket [`BucketList`] exists specifically to absorb that.
//!
//! ## Growth
//!
//! Construction picks the smallest prime >= 2·expected, leaving headroom
//! below the 75% load-factor threshold. The growth check runs *before* an
//! entry lands: when `(len + 1) / capacity` would meet the threshold, the
//! table first rehashes into the smallest prime >= 2·capacity, so the load
//! factor after any insert stays below the threshold. Rehashing drains every
//! old chain and re-inserts entry by entry; `len` and the collision counter
//! are reset and recomputed during redistribution, never copied.
//!
//! ## Telemetry
//!
//! - `len`: stored entries.
//! - `capacity`: bucket count.
//! - `load_factor`: `len / capacity` as a truncated integer percentage,
//!   always computed fresh.
//! - `collisions`: cumulative count of inserts that landed in a non-empty
//!   bucket. Removals never decrement it; only a rehash recomputes it.
//!
//! ## Failure Semantics
//!
//! Lookups and removals on absent keys return `None`. Inserts always succeed
//! (a chained table never fills); rehashing is invisible to callers beyond
//! key redistribution and its one-off O(capacity) cost.

mod bucket;

pub use bucket::{BucketList, Iter};

use crate::config::{CAPACITY_GROWTH_FACTOR, REHASH_THRESHOLD_PERCENT};
use crate::record::Keyed;

/// Read-only snapshot of the table's telemetry for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexStats {
    pub len: usize,
    pub capacity: usize,
    pub load_factor: usize,
    pub collisions: u64,
}

/// Prime-capacity bucketed hash table with chained collision resolution.
pub struct HashIndex<E: Keyed> {
    buckets: Vec<BucketList<E>>,
    len: usize,
    collisions: u64,
}

impl<E: Keyed> HashIndex<E> {
    /// Table sized for `expected` entries: capacity is the smallest prime
    /// >= 2·expected, so the initial load factor sits well under threshold.
    pub fn with_expected(expected: usize) -> Self {
        let capacity = next_prime(expected * CAPACITY_GROWTH_FACTOR);
        Self {
            buckets: (0..capacity).map(|_| BucketList::new()).collect(),
            len: 0,
            collisions: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Integer percentage, truncated. Recomputed on every call.
    pub fn load_factor(&self) -> usize {
        self.len * 100 / self.buckets.len()
    }

    /// Cumulative inserts that landed in an occupied bucket.
    pub fn collisions(&self) -> u64 {
        self.collisions
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            len: self.len,
            capacity: self.capacity(),
            load_factor: self.load_factor(),
            collisions: self.collisions,
        }
    }

    /// Inserts `entry`, growing first whenever the entry would push the load
    /// factor to the threshold. Always returns `true`; the bool is part of
    /// the engine contract shared with the tree index.
    pub fn insert(&mut self, entry: E) -> bool {
        if (self.len + 1) * 100 / self.buckets.len() >= REHASH_THRESHOLD_PERCENT {
            self.grow();
        }
        let index = bucket_index(entry.key(), self.buckets.len());
        let bucket = &mut self.buckets[index];
        if !bucket.is_empty() {
            self.collisions += 1;
        }
        bucket.push_back(entry);
        self.len += 1;
        true
    }

    /// Hashes to a bucket and scans its chain.
    pub fn find(&self, key: &str) -> Option<&E> {
        let index = bucket_index(key, self.buckets.len());
        self.buckets[index].find(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.find(key).is_some()
    }

    /// Unlinks the matching entry from its chain. The collision counter is
    /// left untouched; it is cumulative.
    pub fn remove(&mut self, key: &str) -> Option<E> {
        let index = bucket_index(key, self.buckets.len());
        let removed = self.buckets[index].remove(key);
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }

    /// Visits every entry in bucket order, then chain order, passing the
    /// bucket index along. Headers and formatting are caller concerns.
    pub fn for_each_bucket<F: FnMut(usize, &E)>(&self, mut visit: F) {
        for (index, bucket) in self.buckets.iter().enumerate() {
            for entry in bucket.iter() {
                visit(index, entry);
            }
        }
    }

    /// Full redistribution into the next prime-sized bucket array. Both
    /// counters restart from zero and are rebuilt as entries land.
    fn grow(&mut self) {
        let old_capacity = self.buckets.len();
        let new_capacity = next_prime(old_capacity * CAPACITY_GROWTH_FACTOR);
        let old_buckets = std::mem::replace(
            &mut self.buckets,
            (0..new_capacity).map(|_| BucketList::new()).collect(),
        );
        self.len = 0;
        self.collisions = 0;

        for mut bucket in old_buckets {
            while let Some(entry) = bucket.pop_front() {
                let index = bucket_index(entry.key(), new_capacity);
                let target = &mut self.buckets[index];
                if !target.is_empty() {
                    self.collisions += 1;
                }
                target.push_back(entry);
                self.len += 1;
            }
        }

        tracing::debug!(old_capacity, new_capacity, len = self.len, "rehashed");
    }
}

/// 1-based quadratic-weighted byte sum, reduced modulo the bucket count.
fn bucket_index(key: &str, capacity: usize) -> usize {
    let mut sum: u64 = 0;
    for (i, byte) in key.bytes().enumerate() {
        sum = sum.wrapping_add(u64::from(byte) * u64::from(byte) * (i as u64 + 1));
    }
    (sum % capacity as u64) as usize
}

fn is_prime(n: usize) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }
    let mut i = 3;
    while i * i <= n {
        if n % i == 0 {
            return false;
        }
        i += 2;
    }
    true
}

/// Smallest prime >= `n`, with a floor of 2 so a zero hint still yields a
/// usable table.
fn next_prime(n: usize) -> usize {
    let mut candidate = n.max(2);
    while !is_prime(candidate) {
        candidate += 1;
    }
    candidate
}

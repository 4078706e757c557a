//! # Store Coordinator
//!
//! [`CoinStore`] composes the three indexes and keeps them consistent on
//! every mutation:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                       CoinStore                         │
//! ├───────────────────┬───────────────────┬─────────────────┤
//! │  primary tree     │  secondary tree   │   hash index    │
//! │  OrderedTree      │  OrderedTree      │   HashIndex     │
//! │  key = name       │  key = algorithm  │   key = name    │
//! │  unique           │  duplicates chain │   point lookup  │
//! └───────────────────┴───────────────────┴─────────────────┘
//! ```
//!
//! ## Fan-Out Invariant
//!
//! Every successful insert places exactly one wrapper in each structure;
//! every successful remove takes exactly one wrapper out of each. The
//! primary tree is the single source of truth for "does this name exist":
//! inserts consult it before touching anything (a duplicate is rejected with
//! zero partial mutation) and removes consult it first as well, so the
//! secondary and hash removals cannot fail once the primary removal
//! succeeded. `debug_assert!` guards that construction.
//!
//! ## Record Lifetime
//!
//! The store is the sole authority over a coin's lifetime. A removed coin is
//! recovered from its `Rc` only after all three wrappers are dropped and is
//! handed back by value, which is what the CLI's undo stack holds on to.
//!
//! All operations are synchronous and single-threaded; the fan-out is atomic
//! because nothing can interleave with it. Callers embedding the store in a
//! concurrent context must wrap the whole `CoinStore` in one lock, never the
//! three indexes individually.

use std::rc::Rc;

use crate::config::DEFAULT_EXPECTED_COINS;
use crate::hash::{HashIndex, IndexStats};
use crate::record::{Coin, CoinKey};
use crate::tree::OrderedTree;

/// The coordinated three-index record store.
pub struct CoinStore {
    by_name: OrderedTree<CoinKey>,
    by_algorithm: OrderedTree<CoinKey>,
    lookup: HashIndex<CoinKey>,
}

impl Default for CoinStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CoinStore {
    pub fn new() -> Self {
        Self::with_expected(DEFAULT_EXPECTED_COINS)
    }

    /// Store whose hash index is sized for `expected` coins (the seed file's
    /// count header ends up here).
    pub fn with_expected(expected: usize) -> Self {
        Self {
            by_name: OrderedTree::new(),
            by_algorithm: OrderedTree::new(),
            lookup: HashIndex::with_expected(expected),
        }
    }

    /// Number of stored coins.
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// Adds a coin to all three indexes. Returns `false` without mutating
    /// anything when the name is already present.
    pub fn insert(&mut self, coin: Coin) -> bool {
        if self.by_name.contains(&coin.name) {
            tracing::debug!(name = %coin.name, "rejected duplicate insert");
            return false;
        }
        let coin = Rc::new(coin);
        self.by_name.insert(CoinKey::by_name(&coin));
        self.by_algorithm.insert(CoinKey::by_algorithm(&coin));
        self.lookup.insert(CoinKey::by_name(&coin));
        true
    }

    /// Removes a coin from all three indexes and returns it by value (for
    /// the undo stack). `None` when the name is absent.
    pub fn remove(&mut self, name: &str) -> Option<Coin> {
        let primary = self.by_name.remove(name)?;
        let algorithm = primary.coin().algorithm.clone();

        // Many coins share an algorithm, so the secondary removal has to
        // match on the record, not just the key.
        let secondary = self
            .by_algorithm
            .remove_entry(&algorithm, |entry| entry.coin().name == name);
        debug_assert!(secondary.is_some(), "secondary index out of sync: {name}");

        let hashed = self.lookup.remove(name);
        debug_assert!(hashed.is_some(), "hash index out of sync: {name}");

        drop(secondary);
        drop(hashed);
        let shared = primary.into_coin();
        Some(Rc::try_unwrap(shared).unwrap_or_else(|rc| (*rc).clone()))
    }

    /// Point lookup by name, served by the hash index.
    pub fn get(&self, name: &str) -> Option<&Coin> {
        self.lookup.find(name).map(CoinKey::coin)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains(name)
    }

    /// Grouped secondary lookup: visits every coin using `algorithm`, in the
    /// order they were added. `false` when no coin uses it.
    pub fn coins_with_algorithm<F: FnMut(&Coin)>(&self, algorithm: &str, mut visit: F) -> bool {
        self.by_algorithm
            .get_all(algorithm, |entry| visit(entry.coin()))
    }

    /// Coins in ascending name order.
    pub fn for_each_by_name<F: FnMut(&Coin)>(&self, mut visit: F) {
        self.by_name.in_order(|entry| visit(entry.coin()));
    }

    /// Coins in the primary tree's root-first order.
    pub fn for_each_pre_order<F: FnMut(&Coin)>(&self, mut visit: F) {
        self.by_name.pre_order(|entry| visit(entry.coin()));
    }

    /// Coins level by level through the primary tree.
    pub fn for_each_breadth<F: FnMut(&Coin)>(&self, mut visit: F) {
        self.by_name.breadth(|entry| visit(entry.coin()));
    }

    /// Coins grouped by algorithm, ascending.
    pub fn for_each_by_algorithm<F: FnMut(&Coin)>(&self, mut visit: F) {
        self.by_algorithm.in_order(|entry| visit(entry.coin()));
    }

    /// Hash bucket dump for the statistics screen: bucket order, then chain
    /// order within each bucket.
    pub fn for_each_bucket<F: FnMut(usize, &Coin)>(&self, mut visit: F) {
        self.lookup
            .for_each_bucket(|index, entry| visit(index, entry.coin()));
    }

    /// Hash index telemetry snapshot.
    pub fn stats(&self) -> IndexStats {
        self.lookup.stats()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coin(name: &str, algorithm: &str) -> Coin {
        Coin::new(name, algorithm, 1_000_000, 2015, 1.5, "Unknown")
    }

    #[test]
    fn insert_fans_out_to_every_index() {
        let mut store = CoinStore::new();
        assert!(store.insert(coin("Bitcoin", "SHA256")));
        assert!(store.insert(coin("Monero", "RandomX")));

        assert_eq!(store.len(), 2);
        assert!(store.get("Bitcoin").is_some());
        assert!(store.contains("Monero"));

        let mut grouped = Vec::new();
        assert!(store.coins_with_algorithm("SHA256", |c| grouped.push(c.name.clone())));
        assert_eq!(grouped, ["Bitcoin"]);
    }

    #[test]
    fn duplicate_insert_is_rejected_without_partial_mutation() {
        let mut store = CoinStore::new();
        assert!(store.insert(coin("Bitcoin", "SHA256")));
        assert!(!store.insert(coin("Bitcoin", "Scrypt")));

        assert_eq!(store.len(), 1);
        assert_eq!(store.stats().len, 1);
        // The rejected coin's algorithm never reached the secondary tree.
        assert!(!store.coins_with_algorithm("Scrypt", |_| {}));
        assert_eq!(store.get("Bitcoin").unwrap().algorithm, "SHA256");
    }

    #[test]
    fn remove_takes_the_right_record_out_of_a_shared_algorithm_group() {
        let mut store = CoinStore::new();
        store.insert(coin("Bitcoin", "SHA256"));
        store.insert(coin("Litecoin", "SHA256"));
        store.insert(coin("Peercoin", "SHA256"));

        let removed = store.remove("Litecoin").unwrap();
        assert_eq!(removed.name, "Litecoin");
        assert_eq!(store.len(), 2);
        assert!(store.get("Litecoin").is_none());

        let mut grouped = Vec::new();
        store.coins_with_algorithm("SHA256", |c| grouped.push(c.name.clone()));
        assert_eq!(grouped, ["Bitcoin", "Peercoin"]);
    }

    #[test]
    fn removed_coin_round_trips_through_reinsertion() {
        let mut store = CoinStore::new();
        let original = coin("Zcash", "Equihash");
        store.insert(original.clone());
        store.insert(coin("Dash", "X11"));
        let before = store.len();

        let removed = store.remove("Zcash").unwrap();
        assert_eq!(removed, original);
        assert_eq!(store.len(), before - 1);
        assert_eq!(store.stats().len, before - 1);

        assert!(store.insert(removed));
        assert_eq!(store.len(), before);
        assert_eq!(store.get("Zcash").unwrap(), &original);
    }

    #[test]
    fn remove_absent_name_is_a_clean_miss() {
        let mut store = CoinStore::new();
        store.insert(coin("Bitcoin", "SHA256"));
        assert!(store.remove("Ethereum").is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn lookup_round_trip_preserves_every_field() {
        let mut store = CoinStore::new();
        let original = Coin::new("Ethereum", "Ethash", 120_000_000, 2015, 3100.25, "Buterin");
        store.insert(original.clone());

        let found = store.get("Ethereum").unwrap();
        assert_eq!(found, &original);
    }

    #[test]
    fn traversal_orders_follow_the_primary_tree() {
        let mut store = CoinStore::new();
        for name in ["Monero", "Dash", "Tezos"] {
            store.insert(coin(name, "misc"));
        }

        let mut sorted = Vec::new();
        store.for_each_by_name(|c| sorted.push(c.name.clone()));
        assert_eq!(sorted, ["Dash", "Monero", "Tezos"]);

        let mut pre = Vec::new();
        store.for_each_pre_order(|c| pre.push(c.name.clone()));
        assert_eq!(pre, ["Monero", "Dash", "Tezos"]);

        let mut levels = Vec::new();
        store.for_each_breadth(|c| levels.push(c.name.clone()));
        assert_eq!(levels, ["Monero", "Dash", "Tezos"]);
    }
}

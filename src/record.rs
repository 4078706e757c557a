//! # Coin Records and Key Wrappers
//!
//! The value entity stored by coindb and the lightweight key wrapper that the
//! index structures actually hold.
//!
//! ## Ownership Model
//!
//! A [`Coin`] is created once (by the loader or the add command) and then
//! shared between up to three indexes:
//!
//! ```text
//!                  ┌──────────────┐
//!                  │   Rc<Coin>   │
//!                  └──────────────┘
//!                   ▲      ▲      ▲
//!        ┌──────────┘      │      └──────────┐
//!  CoinKey (name)   CoinKey (algorithm)  CoinKey (name)
//!  primary tree     secondary tree       hash index
//! ```
//!
//! Each index owns a [`CoinKey`] that clones the `Rc`. The store coordinator
//! is the only component that recovers the owned `Coin` again, and it does so
//! only after every index has dropped its wrapper (see `CoinStore::remove`).
//!
//! ## Key Semantics
//!
//! `CoinKey` ordering and equality are defined solely on `key`, never on the
//! referenced coin. Two wrappers with the same key are equal even when they
//! point at different records; this is what lets the secondary tree group
//! many coins under one algorithm key. Lookups never need a wrapper at all:
//! both engines take `&str` keys directly through the [`Keyed`] trait, so the
//! nullable "dummy wrapper" of pointer-based designs has no counterpart here.

use std::cmp::Ordering;
use std::rc::Rc;

/// Entry types that expose a string lookup key. The seam that keeps
/// [`crate::tree::OrderedTree`] and [`crate::hash::HashIndex`] generic.
pub trait Keyed {
    fn key(&self) -> &str;
}

/// A cryptocurrency record. Immutable after construction; the store never
/// mutates a stored coin in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Coin {
    pub name: String,
    pub algorithm: String,
    pub supply: i64,
    pub founded: i32,
    pub price: f64,
    pub founder: String,
}

impl Coin {
    pub fn new(
        name: impl Into<String>,
        algorithm: impl Into<String>,
        supply: i64,
        founded: i32,
        price: f64,
        founder: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            algorithm: algorithm.into(),
            supply,
            founded,
            price,
            founder: founder.into(),
        }
    }
}

/// Handle pairing a shared coin reference with one of its lookup keys.
#[derive(Debug, Clone)]
pub struct CoinKey {
    key: String,
    coin: Rc<Coin>,
}

impl CoinKey {
    /// Wrapper keyed by the coin's name (primary key).
    pub fn by_name(coin: &Rc<Coin>) -> Self {
        Self {
            key: coin.name.clone(),
            coin: Rc::clone(coin),
        }
    }

    /// Wrapper keyed by the coin's algorithm (secondary key, non-unique).
    pub fn by_algorithm(coin: &Rc<Coin>) -> Self {
        Self {
            key: coin.algorithm.clone(),
            coin: Rc::clone(coin),
        }
    }

    pub fn coin(&self) -> &Coin {
        &self.coin
    }

    /// Consumes the wrapper, yielding its share of the record.
    pub fn into_coin(self) -> Rc<Coin> {
        self.coin
    }
}

impl Keyed for CoinKey {
    fn key(&self) -> &str {
        &self.key
    }
}

impl PartialEq for CoinKey {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for CoinKey {}

impl PartialOrd for CoinKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CoinKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

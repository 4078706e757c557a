//! # coindb - In-Memory Cryptocurrency Record Store
//!
//! coindb keeps a small fixed-schema dataset of cryptocurrency records fully
//! in memory and serves it through a character-menu CLI. The interesting
//! part is the pair of generic, string-keyed container engines behind the
//! store:
//!
//! - [`tree::OrderedTree`]: an unbalanced binary search tree with
//!   duplicate-key chaining, used twice: keyed by coin name (unique) and by
//!   algorithm (one-to-many).
//! - [`hash::HashIndex`]: a prime-capacity bucketed hash table with
//!   automatic growth and collision telemetry, whose chains are hand-rolled
//!   [`hash::BucketList`]s.
//!
//! ## Quick Start
//!
//! ```
//! use coindb::{Coin, CoinStore};
//!
//! let mut store = CoinStore::new();
//! store.insert(Coin::new("Bitcoin", "SHA256", 21_000_000, 2009, 60_000.5, "Satoshi"));
//!
//! assert_eq!(store.get("Bitcoin").unwrap().algorithm, "SHA256");
//! assert!(store.coins_with_algorithm("SHA256", |coin| {
//!     println!("{}", coin.name);
//! }));
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │        CLI (menu REPL, undo)        │
//! ├─────────────────────────────────────┤
//! │   Loader (seed file import/export)  │
//! ├─────────────────────────────────────┤
//! │     Store Coordinator (CoinStore)   │
//! ├───────────┬───────────┬─────────────┤
//! │ tree      │ tree      │ hash index  │
//! │ (name)    │ (algo)    │ (name)      │
//! ├───────────┴───────────┴─────────────┤
//! │   Coin records (Rc-shared values)   │
//! └─────────────────────────────────────┘
//! ```
//!
//! Mutations fan out through the coordinator so the three indexes can never
//! disagree; see [`store`] for the invariant.
//!
//! ## Scope
//!
//! Everything lives and dies with the process: no persistence (beyond the
//! explicit seed-file export), no threads, no network. The engines are
//! deliberately simple (the tree never rebalances and the hash function is
//! collision-prone by design) because the dataset is small and the goal is
//! predictable, inspectable behavior.

pub mod cli;
pub mod config;
pub mod hash;
pub mod loader;
pub mod record;
pub mod store;
pub mod tree;

pub use hash::{BucketList, HashIndex, IndexStats};
pub use record::{Coin, CoinKey, Keyed};
pub use store::CoinStore;
pub use tree::OrderedTree;

//! # coindb CLI Module
//!
//! The interactive menu interface over the record store. Thin presentation
//! glue: all correctness lives in the store and the two index engines.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     CLI Entry Point                         │
//! │                    (bin/coindb.rs)                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │                        REPL Loop                            │
//! │  - Reads menu letters via rustyline                         │
//! │  - Sub-prompts for fields and search keys                   │
//! │  - Holds the undo stack of deleted coins                    │
//! ├─────────────────────────────────────────────────────────────┤
//! │     Commands          │    Table Formatter    │   History   │
//! │  (letter parsing,     │  ASCII box drawing    │  Persistent │
//! │   result rendering)   │  for coin listings    │  ~/.coindb_*│
//! └─────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod history;
pub mod repl;
pub mod table;

pub use repl::Repl;

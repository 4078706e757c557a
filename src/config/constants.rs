//! # coindb Configuration Constants
//!
//! All numeric tunables live here, with their interdependencies documented
//! and enforced through compile-time assertions.
//!
//! ## Dependency Graph
//!
//! ```text
//! REHASH_THRESHOLD_PERCENT (75)
//!       │
//!       └─> CAPACITY_GROWTH_FACTOR (2)
//!             Growth must at least double capacity: rehashing to the next
//!             prime >= 2·capacity more than halves the load factor, so a
//!             single growth step always lands the table back under the
//!             threshold and the triggering insert cannot re-trigger growth.
//!
//! DEFAULT_EXPECTED_COINS (16)
//!       │
//!       └─> Initial hash capacity when no seed file provides a count header:
//!           smallest prime >= 2·16 = 37 buckets.
//! ```

/// Load-factor percentage at which the hash index grows. The check runs
/// before the triggering insert lands, so observed load factor never reaches
/// this value.
pub const REHASH_THRESHOLD_PERCENT: usize = 75;

/// Capacity multiplier applied before rounding up to the next prime, used
/// both for initial sizing (2·expected) and for growth (2·capacity).
pub const CAPACITY_GROWTH_FACTOR: usize = 2;

/// Hash sizing hint when starting without a seed file.
pub const DEFAULT_EXPECTED_COINS: usize = 16;

/// Seed-file name offered as the default by the write-to-file command.
pub const DEFAULT_SEED_FILE: &str = "coinlist.txt";

/// REPL history file, created in the user's home directory.
pub const HISTORY_FILE_NAME: &str = ".coindb_history";

const _: () = assert!(REHASH_THRESHOLD_PERCENT > 0 && REHASH_THRESHOLD_PERCENT < 100);
const _: () = assert!(CAPACITY_GROWTH_FACTOR >= 2);

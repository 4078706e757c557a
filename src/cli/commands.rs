//! # Menu Command Handling
//!
//! Parses the single-letter menu commands and renders the non-interactive
//! responses (listings, search results, statistics) into strings for the
//! REPL to print.
//!
//! ## Commands
//!
//! | Letter | Action                                         |
//! |--------|------------------------------------------------|
//! | A      | Add a new coin (interactive prompts)           |
//! | B      | Delete a coin by name                          |
//! | C      | Search by name or by algorithm                 |
//! | D      | Listings (sorted / pre-order / level / by alg) |
//! | E      | Write the dataset to a file                    |
//! | F      | Hash index statistics and bucket table         |
//! | G      | Show the menu again                            |
//! | H      | Exit                                           |
//! | U      | Undo the last deletion                         |
//!
//! Letters are case-insensitive and the command set is static configuration
//! data owned by this module; the core store knows nothing about it.

use std::fmt::Write;

use crate::cli::table::TableFormatter;
use crate::store::CoinStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    Add,
    Delete,
    Search,
    List,
    WriteFile,
    Stats,
    Help,
    Quit,
    Undo,
}

impl MenuCommand {
    /// Parses the first non-whitespace character, case-insensitively.
    /// `None` for empty input or an unknown letter.
    pub fn parse(input: &str) -> Option<Self> {
        let letter = input.trim().chars().next()?;
        match letter.to_ascii_uppercase() {
            'A' => Some(Self::Add),
            'B' => Some(Self::Delete),
            'C' => Some(Self::Search),
            'D' => Some(Self::List),
            'E' => Some(Self::WriteFile),
            'F' => Some(Self::Stats),
            'G' => Some(Self::Help),
            'H' => Some(Self::Quit),
            'U' => Some(Self::Undo),
            _ => None,
        }
    }
}

/// Traversal orders offered by the listing sub-menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListOrder {
    ByName,
    PreOrder,
    Breadth,
    ByAlgorithm,
}

impl ListOrder {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::ByName),
            "2" => Some(Self::PreOrder),
            "3" => Some(Self::Breadth),
            "4" => Some(Self::ByAlgorithm),
            _ => None,
        }
    }
}

pub fn menu_text() -> &'static str {
    "Welcome to the coindb cryptocurrency database! Commands:

  A - Add a new coin
  B - Delete a coin
  C - Search (by name or algorithm)
  D - List coins (sorted in various ways)
  E - Write the coins to a file
  F - Show hash index statistics
  G - Show this menu
  H - Exit
  U - Undo the last deletion
"
}

pub fn render_listing(store: &CoinStore, order: ListOrder) -> String {
    let mut coins = Vec::new();
    match order {
        ListOrder::ByName => store.for_each_by_name(|c| coins.push(c.clone())),
        ListOrder::PreOrder => store.for_each_pre_order(|c| coins.push(c.clone())),
        ListOrder::Breadth => store.for_each_breadth(|c| coins.push(c.clone())),
        ListOrder::ByAlgorithm => store.for_each_by_algorithm(|c| coins.push(c.clone())),
    }

    let table = TableFormatter::from_coins(&coins);
    format!("{}{} coins\n", table.render(), table.row_count())
}

pub fn render_search_by_name(store: &CoinStore, name: &str) -> String {
    match store.get(name) {
        Some(coin) => TableFormatter::from_coins(std::iter::once(coin)).render(),
        None => format!("No coin named {name:?}\n"),
    }
}

pub fn render_search_by_algorithm(store: &CoinStore, algorithm: &str) -> String {
    let mut coins = Vec::new();
    if !store.coins_with_algorithm(algorithm, |c| coins.push(c.clone())) {
        return format!("No coins using algorithm {algorithm:?}\n");
    }
    let table = TableFormatter::from_coins(&coins);
    format!("{}{} coins using {algorithm}\n", table.render(), table.row_count())
}

pub fn render_stats(store: &CoinStore) -> String {
    let stats = store.stats();
    let mut out = String::new();
    let _ = writeln!(out, "Hash index statistics:");
    let _ = writeln!(out, "  coins       : {}", stats.len);
    let _ = writeln!(out, "  capacity    : {}", stats.capacity);
    let _ = writeln!(out, "  load factor : {}%", stats.load_factor);
    let _ = writeln!(out, "  collisions  : {}", stats.collisions);

    // Occupied buckets with their chains, in bucket order.
    let mut buckets: Vec<(usize, Vec<String>)> = Vec::new();
    store.for_each_bucket(|bucket, coin| match buckets.last_mut() {
        Some((current, names)) if *current == bucket => names.push(coin.name.clone()),
        _ => buckets.push((bucket, vec![coin.name.clone()])),
    });

    if !buckets.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Bucket table:");
        for (bucket, names) in buckets {
            let _ = writeln!(out, "  [{bucket:>4}] {}", names.join(" -> "));
        }
    }
    out
}

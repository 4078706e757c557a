//! # Seed File Import / Export
//!
//! Line-oriented text format shared by startup loading and the write-to-file
//! command:
//!
//! ```text
//! 4
//! SHA256 21000000 Satoshi 2009 60000.5 Bitcoin
//! Ethash 120000000 Buterin 2015 3100.25 Ethereum
//! Scrypt 84000000 Lee 2011 80.1 Litecoin
//! Scrypt 132670764299 Palmer 2013 0.08 Dogecoin
//! ```
//!
//! The first line is a record-count header used to size the hash index.
//! Every following line holds five whitespace-delimited fields (algorithm,
//! supply, founder, founding year, price) and then the remainder of the
//! line, taken verbatim (trimmed), as the coin name. Names may therefore
//! contain spaces ("Bitcoin Cash"); founders may not.
//!
//! ## Failure Semantics
//!
//! Parsing is the one place malformed input can reach the crate, so this is
//! where `eyre` context lives: errors carry the file path and 1-based line
//! number. A duplicate name inside the file is not fatal: the first
//! occurrence wins and the rest are skipped with a warning, matching the
//! store's duplicate-rejection contract.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use eyre::{bail, ensure, Result, WrapErr};

use crate::record::Coin;
use crate::store::CoinStore;

/// Reads a seed file and builds a fully indexed store from it.
pub fn load(path: &Path) -> Result<CoinStore> {
    let text = fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read seed file {}", path.display()))?;

    let mut lines = text.lines();
    let header = match lines.next() {
        Some(line) => line,
        None => bail!("seed file {} is empty", path.display()),
    };
    let expected: usize = header
        .trim()
        .parse()
        .wrap_err_with(|| format!("invalid record-count header {header:?}"))?;

    let mut store = CoinStore::with_expected(expected);
    for (offset, line) in lines.enumerate() {
        let line_no = offset + 2;
        if line.trim().is_empty() {
            continue;
        }
        let coin = parse_line(line)
            .wrap_err_with(|| format!("{}:{line_no}: malformed record", path.display()))?;
        let name = coin.name.clone();
        if !store.insert(coin) {
            tracing::warn!(line_no, name = %name, "skipping duplicate coin in seed file");
        }
    }

    tracing::info!(
        path = %path.display(),
        coins = store.len(),
        expected,
        "seed file loaded"
    );
    Ok(store)
}

/// Writes the store back out in the seed format, in ascending name order,
/// with the count header the loader expects.
pub fn save(path: &Path, store: &CoinStore) -> Result<()> {
    let mut out = String::new();
    let _ = writeln!(out, "{}", store.len());
    store.for_each_by_name(|coin| {
        let _ = writeln!(
            out,
            "{} {} {} {} {} {}",
            coin.algorithm, coin.supply, coin.founder, coin.founded, coin.price, coin.name
        );
    });

    fs::write(path, out).wrap_err_with(|| format!("failed to write {}", path.display()))
}

fn parse_line(line: &str) -> Result<Coin> {
    let (algorithm, rest) = next_field(line).ok_or_else(|| eyre::eyre!("missing algorithm"))?;
    let (supply, rest) = next_field(rest).ok_or_else(|| eyre::eyre!("missing supply"))?;
    let (founder, rest) = next_field(rest).ok_or_else(|| eyre::eyre!("missing founder"))?;
    let (founded, rest) = next_field(rest).ok_or_else(|| eyre::eyre!("missing founding year"))?;
    let (price, rest) = next_field(rest).ok_or_else(|| eyre::eyre!("missing price"))?;

    let supply: i64 = supply.parse().wrap_err_with(|| format!("bad supply {supply:?}"))?;
    let founded: i32 = founded
        .parse()
        .wrap_err_with(|| format!("bad founding year {founded:?}"))?;
    let price: f64 = price.parse().wrap_err_with(|| format!("bad price {price:?}"))?;

    let name = rest.trim();
    ensure!(!name.is_empty(), "missing coin name");

    Ok(Coin::new(name, algorithm, supply, founded, price, founder))
}

/// Splits off the next whitespace-delimited field, returning it and the
/// untouched remainder (so the final name field keeps its inner spacing).
fn next_field(s: &str) -> Option<(&str, &str)> {
    let s = s.trim_start();
    if s.is_empty() {
        return None;
    }
    match s.find(char::is_whitespace) {
        Some(pos) => Some((&s[..pos], &s[pos..])),
        None => Some((s, "")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_field_walks_the_line() {
        let (field, rest) = next_field("  SHA256  21000000 rest").unwrap();
        assert_eq!(field, "SHA256");
        let (field, rest) = next_field(rest).unwrap();
        assert_eq!(field, "21000000");
        assert_eq!(rest.trim(), "rest");
        assert!(next_field("   ").is_none());
    }

    #[test]
    fn parse_line_keeps_multi_word_names_verbatim() {
        let coin = parse_line("SHA256 21000000 Nakamoto 2017 280.5   Bitcoin Cash  ").unwrap();
        assert_eq!(coin.name, "Bitcoin Cash");
        assert_eq!(coin.algorithm, "SHA256");
        assert_eq!(coin.supply, 21_000_000);
        assert_eq!(coin.founded, 2017);
        assert_eq!(coin.price, 280.5);
        assert_eq!(coin.founder, "Nakamoto");
    }

    #[test]
    fn parse_line_rejects_truncated_records() {
        assert!(parse_line("SHA256 21000000 Nakamoto 2017 280.5").is_err());
        assert!(parse_line("SHA256 not-a-number Nakamoto 2017 280.5 X").is_err());
        assert!(parse_line("").is_err());
    }
}

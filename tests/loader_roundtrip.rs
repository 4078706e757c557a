//! # Seed File Round-Trip Tests
//!
//! Exercises the loader end to end against real files in a temp directory:
//! load, mutate, save, reload, and the error paths a hand-edited seed file
//! can hit.

use std::fs;

use coindb::{loader, Coin, CoinStore};
use tempfile::TempDir;

const SEED: &str = "\
4
SHA256 21000000 Satoshi 2009 60000.5 Bitcoin
Ethash 120000000 Buterin 2015 3100.25 Ethereum
Scrypt 84000000 Lee 2011 80.1 Litecoin
SHA256 21000000 Nakamoto 2017 280.5 Bitcoin Cash
";

#[test]
fn load_builds_a_fully_indexed_store() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("coinlist.txt");
    fs::write(&path, SEED).unwrap();

    let store = loader::load(&path).unwrap();
    assert_eq!(store.len(), 4);

    let bitcoin = store.get("Bitcoin").unwrap();
    assert_eq!(bitcoin.algorithm, "SHA256");
    assert_eq!(bitcoin.supply, 21_000_000);
    assert_eq!(bitcoin.founded, 2009);
    assert_eq!(bitcoin.price, 60_000.5);
    assert_eq!(bitcoin.founder, "Satoshi");

    // Multi-word name survives the trailing-field rule.
    assert!(store.get("Bitcoin Cash").is_some());

    let mut sha256 = Vec::new();
    store.coins_with_algorithm("SHA256", |c| sha256.push(c.name.clone()));
    assert_eq!(sha256, ["Bitcoin", "Bitcoin Cash"]);
}

#[test]
fn save_then_load_round_trips_every_record() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.txt");

    let mut store = CoinStore::new();
    store.insert(Coin::new("Bitcoin", "SHA256", 21_000_000, 2009, 60_000.5, "Satoshi"));
    store.insert(Coin::new("Bitcoin Cash", "SHA256", 21_000_000, 2017, 280.5, "Nakamoto"));
    store.insert(Coin::new("Monero", "RandomX", 18_400_000, 2014, 165.75, "Unknown"));

    loader::save(&path, &store).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("3\n"), "missing count header: {text:?}");

    let reloaded = loader::load(&path).unwrap();
    assert_eq!(reloaded.len(), store.len());
    for name in ["Bitcoin", "Bitcoin Cash", "Monero"] {
        assert_eq!(reloaded.get(name), store.get(name), "mismatch for {name}");
    }
}

#[test]
fn save_writes_records_in_name_order() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sorted.txt");

    let mut store = CoinStore::new();
    for name in ["Zcash", "Aave", "Monero"] {
        store.insert(Coin::new(name, "misc", 1, 2020, 1.0, "Anon"));
    }
    loader::save(&path, &store).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let names: Vec<&str> = text
        .lines()
        .skip(1)
        .map(|line| line.rsplit(' ').next().unwrap())
        .collect();
    assert_eq!(names, ["Aave", "Monero", "Zcash"]);
}

#[test]
fn duplicate_names_in_the_file_keep_the_first_occurrence() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("dupes.txt");
    fs::write(
        &path,
        "3\nSHA256 1 A 2009 1.0 Bitcoin\nScrypt 2 B 2011 2.0 Bitcoin\nEthash 3 C 2015 3.0 Ethereum\n",
    )
    .unwrap();

    let store = loader::load(&path).unwrap();
    assert_eq!(store.len(), 2);
    assert_eq!(store.get("Bitcoin").unwrap().algorithm, "SHA256");
}

#[test]
fn blank_lines_are_ignored() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("gaps.txt");
    fs::write(
        &path,
        "2\n\nSHA256 1 A 2009 1.0 Bitcoin\n\n\nEthash 3 C 2015 3.0 Ethereum\n",
    )
    .unwrap();

    let store = loader::load(&path).unwrap();
    assert_eq!(store.len(), 2);
}

#[test]
fn malformed_files_fail_with_located_errors() {
    let dir = TempDir::new().unwrap();

    let empty = dir.path().join("empty.txt");
    fs::write(&empty, "").unwrap();
    assert!(loader::load(&empty).is_err());

    let bad_header = dir.path().join("header.txt");
    fs::write(&bad_header, "four\nSHA256 1 A 2009 1.0 Bitcoin\n").unwrap();
    assert!(loader::load(&bad_header).is_err());

    let bad_record = dir.path().join("record.txt");
    fs::write(&bad_record, "1\nSHA256 lots A 2009 1.0 Bitcoin\n").unwrap();
    let err = loader::load(&bad_record)
        .err()
        .expect("malformed record should fail");
    let rendered = format!("{err:#}");
    assert!(rendered.contains(":2:"), "no line number in {rendered:?}");

    let missing = dir.path().join("does-not-exist.txt");
    assert!(loader::load(&missing).is_err());
}

//! # coindb CLI Entry Point
//!
//! ```bash
//! # Start with a seed file (first line is the record count)
//! coindb coinlist.txt
//!
//! # Start with an empty store
//! coindb
//!
//! # Show version / help
//! coindb --version
//! coindb --help
//! ```

use std::env;
use std::path::{Path, PathBuf};

use eyre::{bail, Result, WrapErr};
use tracing_subscriber::EnvFilter;

use coindb::cli::Repl;
use coindb::{loader, CoinStore};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    let mut seed_path: Option<PathBuf> = None;
    for arg in &args[1..] {
        match arg.as_str() {
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            "--version" | "-v" => {
                println!("coindb {}", env!("CARGO_PKG_VERSION"));
                return Ok(());
            }
            other if other.starts_with('-') => {
                bail!("Unknown option: {other}");
            }
            path => {
                if seed_path.is_some() {
                    bail!("Multiple seed files specified");
                }
                seed_path = Some(PathBuf::from(path));
            }
        }
    }

    let store = match &seed_path {
        Some(path) => loader::load(Path::new(path))
            .wrap_err_with(|| format!("failed to load seed file {}", path.display()))?,
        None => CoinStore::new(),
    };

    let mut repl = Repl::new(store)?;
    repl.run()?;

    Ok(())
}

fn print_usage() {
    println!("coindb - in-memory cryptocurrency record store");
    println!();
    println!("USAGE:");
    println!("    coindb [OPTIONS] [SEED_FILE]");
    println!();
    println!("ARGS:");
    println!("    [SEED_FILE]    Text file to load at startup (count header,");
    println!("                   then: algorithm supply founder year price name)");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Print help information");
    println!("    -v, --version    Print version information");
    println!();
    println!("EXAMPLES:");
    println!("    coindb coinlist.txt    Load coins, then start the menu");
    println!("    coindb                 Start with an empty store");
}

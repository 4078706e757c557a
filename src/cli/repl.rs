//! # REPL - Menu Loop
//!
//! The interactive loop for the coindb CLI. Reads single-letter menu
//! commands with rustyline (history, line editing), runs the matching
//! operation against the store, and prints the result. Commands that need
//! more input (add, delete, search, write) gather it through sub-prompts.
//!
//! ```text
//! coindb> F
//! Hash index statistics:
//!   coins       : 4
//!   ...
//! coindb> C
//!   search by (n)ame or (a)lgorithm> n
//!   name> Bitcoin
//! +---------+-----------+----------+---------+----------+---------+
//! | Name    | Algorithm | Supply   | Founded | Price    | Founder |
//! ...
//! ```
//!
//! ## Undo Stack
//!
//! Deleted coins are pushed onto an in-memory stack; `U` pops the most
//! recent one and re-inserts it. If the name has been re-added in the
//! meantime the coin is pushed back and the conflict reported, so nothing is
//! silently lost.
//!
//! ## Error Handling
//!
//! Invalid input (unknown letters, unparseable numbers, absent keys) is
//! reported and never terminates the loop. Ctrl+C cancels the current
//! command, Ctrl+D exits like `H`.

use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::cli::commands::{
    menu_text, render_listing, render_search_by_algorithm, render_search_by_name, render_stats,
    ListOrder, MenuCommand,
};
use crate::cli::history::history_path;
use crate::config::DEFAULT_SEED_FILE;
use crate::loader;
use crate::record::Coin;
use crate::store::CoinStore;

const PROMPT: &str = "coindb> ";

pub struct Repl {
    store: CoinStore,
    editor: DefaultEditor,
    undo: Vec<Coin>,
}

impl Repl {
    pub fn new(store: CoinStore) -> Result<Self> {
        let mut editor = DefaultEditor::new().wrap_err("failed to initialize line editor")?;

        if let Some(history_file) = history_path() {
            let _ = editor.load_history(&history_file);
        }

        Ok(Self {
            store,
            editor,
            undo: Vec::new(),
        })
    }

    pub fn run(&mut self) -> Result<()> {
        println!("{}", menu_text());

        loop {
            match self.editor.readline(PROMPT) {
                Ok(line) => {
                    let _ = self.editor.add_history_entry(line.as_str());
                    if !self.handle_line(&line) {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                }
                Err(ReadlineError::Eof) => {
                    break;
                }
                Err(err) => {
                    eprintln!("Error reading input: {err}");
                    break;
                }
            }
        }

        if let Some(history_file) = history_path() {
            let _ = self.editor.save_history(&history_file);
        }
        println!("Bye! Thanks for using the coindb cryptocurrency database!");
        Ok(())
    }

    /// Returns `false` when the loop should exit.
    fn handle_line(&mut self, line: &str) -> bool {
        let command = match MenuCommand::parse(line) {
            Some(command) => command,
            None => {
                if !line.trim().is_empty() {
                    println!("Unknown command {:?}. G shows the menu.", line.trim());
                }
                return true;
            }
        };

        match command {
            MenuCommand::Add => self.add_coin(),
            MenuCommand::Delete => self.delete_coin(),
            MenuCommand::Search => self.search(),
            MenuCommand::List => self.list(),
            MenuCommand::WriteFile => self.write_file(),
            MenuCommand::Stats => print!("{}", render_stats(&self.store)),
            MenuCommand::Help => println!("{}", menu_text()),
            MenuCommand::Quit => return false,
            MenuCommand::Undo => self.undo_delete(),
        }
        true
    }

    fn add_coin(&mut self) {
        let coin = match self.prompt_coin() {
            Ok(Some(coin)) => coin,
            Ok(None) => return, // cancelled
            Err(err) => {
                println!("Invalid input: {err:#}");
                return;
            }
        };

        let name = coin.name.clone();
        if self.store.insert(coin) {
            println!("Added {name}.");
        } else {
            println!("A coin named {name:?} already exists; nothing was added.");
        }
    }

    fn delete_coin(&mut self) {
        let Some(name) = self.sub_prompt("  name> ") else {
            return;
        };
        match self.store.remove(name.trim()) {
            Some(coin) => {
                println!("Deleted {}. U will bring it back.", coin.name);
                self.undo.push(coin);
            }
            None => println!("No coin named {:?}.", name.trim()),
        }
    }

    fn undo_delete(&mut self) {
        let Some(coin) = self.undo.pop() else {
            println!("Nothing to undo.");
            return;
        };
        if self.store.contains(&coin.name) {
            // The name was re-added since the deletion; keep the record so
            // the user can resolve the conflict and retry.
            println!(
                "A coin named {:?} exists again; undo kept on the stack.",
                coin.name
            );
            self.undo.push(coin);
            return;
        }
        let name = coin.name.clone();
        self.store.insert(coin);
        println!("Restored {name}.");
    }

    fn search(&mut self) {
        let Some(mode) = self.sub_prompt("  search by (n)ame or (a)lgorithm> ") else {
            return;
        };
        match mode.trim().to_ascii_lowercase().as_str() {
            "n" | "name" => {
                if let Some(name) = self.sub_prompt("  name> ") {
                    print!("{}", render_search_by_name(&self.store, name.trim()));
                }
            }
            "a" | "algorithm" => {
                if let Some(algorithm) = self.sub_prompt("  algorithm> ") {
                    print!("{}", render_search_by_algorithm(&self.store, algorithm.trim()));
                }
            }
            other => println!("Unknown search mode {other:?}."),
        }
    }

    fn list(&mut self) {
        println!("  1 - sorted by name (in-order)");
        println!("  2 - primary tree pre-order");
        println!("  3 - primary tree level by level");
        println!("  4 - grouped by algorithm");
        let Some(choice) = self.sub_prompt("  order> ") else {
            return;
        };
        match ListOrder::parse(&choice) {
            Some(order) => print!("{}", render_listing(&self.store, order)),
            None => println!("Unknown listing {:?}.", choice.trim()),
        }
    }

    fn write_file(&mut self) {
        let Some(path) = self.sub_prompt(&format!("  file [{DEFAULT_SEED_FILE}]> ")) else {
            return;
        };
        let path = if path.trim().is_empty() {
            PathBuf::from(DEFAULT_SEED_FILE)
        } else {
            PathBuf::from(path.trim())
        };
        match loader::save(Path::new(&path), &self.store) {
            Ok(()) => println!("Wrote {} coins to {}.", self.store.len(), path.display()),
            Err(err) => println!("Write failed: {err:#}"),
        }
    }

    /// Gathers the six coin fields one prompt at a time. `Ok(None)` when the
    /// user cancels with Ctrl+C.
    fn prompt_coin(&mut self) -> Result<Option<Coin>> {
        let Some(name) = self.sub_prompt("  name> ") else {
            return Ok(None);
        };
        let name = name.trim().to_string();
        eyre::ensure!(!name.is_empty(), "coin name must not be empty");

        let Some(algorithm) = self.sub_prompt("  algorithm> ") else {
            return Ok(None);
        };
        let algorithm = algorithm.trim().to_string();
        eyre::ensure!(!algorithm.is_empty(), "algorithm must not be empty");

        let Some(supply) = self.sub_prompt("  supply> ") else {
            return Ok(None);
        };
        let supply: i64 = supply.trim().parse().wrap_err("supply must be an integer")?;

        let Some(founded) = self.sub_prompt("  founding year> ") else {
            return Ok(None);
        };
        let founded: i32 = founded
            .trim()
            .parse()
            .wrap_err("founding year must be an integer")?;

        let Some(price) = self.sub_prompt("  price> ") else {
            return Ok(None);
        };
        let price: f64 = price.trim().parse().wrap_err("price must be a number")?;

        let Some(founder) = self.sub_prompt("  founder> ") else {
            return Ok(None);
        };
        let founder = founder.trim().to_string();

        Ok(Some(Coin::new(name, algorithm, supply, founded, price, founder)))
    }

    /// One-off prompt; `None` on Ctrl+C / Ctrl+D cancels the command.
    fn sub_prompt(&mut self, prompt: &str) -> Option<String> {
        match self.editor.readline(prompt) {
            Ok(line) => Some(line),
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => None,
            Err(err) => {
                eprintln!("Error reading input: {err}");
                None
            }
        }
    }
}

//! # History File Management
//!
//! Resolves the location of the CLI history file. By default history lives
//! in `~/.coindb_history`; the `COINDB_HISTORY` environment variable
//! overrides it, and an empty value disables persistence entirely. rustyline
//! handles the actual file I/O.

use std::env;
use std::path::PathBuf;

use crate::config::HISTORY_FILE_NAME;

const HISTORY_ENV_VAR: &str = "COINDB_HISTORY";

pub fn history_path() -> Option<PathBuf> {
    match env::var(HISTORY_ENV_VAR) {
        Ok(custom) if custom.is_empty() => None,
        Ok(custom) => Some(PathBuf::from(custom)),
        Err(_) => {
            let home = env::var_os("HOME")?;
            Some(PathBuf::from(home).join(HISTORY_FILE_NAME))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // One test: the cases share the env var and must not race each other.
    #[test]
    fn env_var_overrides_and_disables_the_default() {
        env::remove_var(HISTORY_ENV_VAR);
        if let Some(path) = history_path() {
            assert!(path.to_string_lossy().contains(".coindb_history"));
        }

        env::set_var(HISTORY_ENV_VAR, "/custom/path");
        assert_eq!(history_path(), Some(PathBuf::from("/custom/path")));

        env::set_var(HISTORY_ENV_VAR, "");
        assert_eq!(history_path(), None);

        env::remove_var(HISTORY_ENV_VAR);
    }
}

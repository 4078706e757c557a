//! # coindb Configuration Module
//!
//! Centralizes the tunables shared by the hash index and the CLI. The rehash
//! threshold and growth factor interact (see [`constants`]); keeping them in
//! one place with compile-time checks prevents them drifting apart.

pub mod constants;
pub use constants::*;

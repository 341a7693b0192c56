//! Persistence for cliteach progress state.
//!
//! This crate provides a trait-based store interface with a JSON-file
//! reference implementation writing to the per-user config directory.

#![warn(missing_docs)]

pub mod trait_;
pub mod json_store;

pub use trait_::{Result, StateStore, StoreError};
pub use json_store::{default_progress_path, JsonStore};

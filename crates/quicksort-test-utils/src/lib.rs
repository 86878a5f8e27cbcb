//! Shared test utilities for the quicksort-config workspace.
//!
//! This crate is a dev-dependency only and is never published.
//!
//! # Modules
//!
//! - [`document`] — [`ChestEntry`](document::ChestEntry) builder for config documents
//! - [`dir`] — [`TestConfigDir`](dir::TestConfigDir) temporary config directory
//! - [`fixtures`] — access to files under `test-fixtures/configs/`

pub mod dir;
pub mod document;
pub mod fixtures;

//! Common utilities for the safelist crates.
//!
//! This crate provides shared infrastructure used by the policy crates:
//! - **Warning System** - deduplicated, colored diagnostics on stderr

pub mod warning;

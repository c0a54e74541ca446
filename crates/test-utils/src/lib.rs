//! This crate provides test-utilities shared across the minipool crates.
//!
//! These utilities generate arbitrary account addresses and fixture values
//! for testing purposes.

pub mod accounts;
pub mod prelude;

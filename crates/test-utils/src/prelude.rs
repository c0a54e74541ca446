//! Re-exports of the commonly used test utilities.

pub use crate::accounts::{address_from_label, generate_address, generate_addresses};

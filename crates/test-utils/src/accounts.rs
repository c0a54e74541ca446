//! Generators for arbitrary account addresses.

use minipool_primitives::{types::ADDRESS_LEN, Address};
use rand::{rngs::OsRng, Rng, SeedableRng};

/// Generates a random account address.
pub fn generate_address() -> Address {
    let mut bytes = [0u8; ADDRESS_LEN];
    OsRng.fill(&mut bytes);

    Address::new(bytes)
}

/// Generates `count` distinct random addresses.
pub fn generate_addresses(count: usize) -> Vec<Address> {
    let mut addresses = Vec::with_capacity(count);
    while addresses.len() < count {
        let address = generate_address();
        if !addresses.contains(&address) {
            addresses.push(address);
        }
    }

    addresses
}

/// Derives a stable address from a label, for tests that need reproducible
/// fixtures across runs.
pub fn address_from_label(label: &str) -> Address {
    let mut seed = [0u8; 32];
    for (i, byte) in label.bytes().enumerate() {
        seed[i % seed.len()] ^= byte;
    }

    let mut rng = rand::rngs::StdRng::from_seed(seed);
    let mut bytes = [0u8; ADDRESS_LEN];
    rng.fill(&mut bytes);

    Address::new(bytes)
}

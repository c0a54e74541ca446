//! Account and balance types.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of bytes in an [`Address`].
pub const ADDRESS_LEN: usize = 20;

/// Balances are denominated in wei, the smallest unit of ether.
pub type Wei = u128;

/// Wall-clock seconds since the unix epoch.
///
/// All timeout guards compare a caller-supplied reading of this clock at call
/// time; the core never schedules anything itself.
pub type UnixTimestamp = u64;

/// A 20-byte account identifier.
///
/// Identifies node operators, node contracts, minipools and external accounts
/// alike. Serializes as a hex string and displays with a `0x` prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Address(#[serde(with = "hex::serde")] [u8; ADDRESS_LEN]);

impl Address {
    /// The all-zeroes address, conventionally not owned by anyone.
    pub const ZERO: Address = Address([0u8; ADDRESS_LEN]);

    /// Constructs an address from its raw bytes.
    pub const fn new(bytes: [u8; ADDRESS_LEN]) -> Self {
        Address(bytes)
    }

    /// Returns the raw bytes of the address.
    pub const fn as_bytes(&self) -> &[u8; ADDRESS_LEN] {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl From<[u8; ADDRESS_LEN]> for Address {
    fn from(bytes: [u8; ADDRESS_LEN]) -> Self {
        Address(bytes)
    }
}

impl FromStr for Address {
    type Err = AddressParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex_str = s.strip_prefix("0x").unwrap_or(s);
        let bytes: [u8; ADDRESS_LEN] =
            hex::FromHex::from_hex(hex_str).map_err(AddressParseError)?;

        Ok(Address(bytes))
    }
}

/// Error returned when parsing an [`Address`] from a string fails.
///
/// Only `PartialEq`: the wrapped [`hex::FromHexError`] does not implement
/// `Eq`.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("invalid address encoding: {0}")]
pub struct AddressParseError(#[from] hex::FromHexError);

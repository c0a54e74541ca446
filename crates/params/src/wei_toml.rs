//! Serde helper encoding wei amounts as decimal strings.
//!
//! TOML has no 128-bit integer type and ether-scale amounts overflow `i64`,
//! so params files carry them as strings.

use minipool_primitives::Wei;
use serde::{de, Deserialize, Deserializer, Serializer};

pub(crate) fn serialize<S: Serializer>(amount: &Wei, ser: S) -> Result<S::Ok, S::Error> {
    ser.collect_str(amount)
}

pub(crate) fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<Wei, D::Error> {
    let s = String::deserialize(de)?;
    s.parse::<Wei>().map_err(de::Error::custom)
}

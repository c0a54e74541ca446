//! Just import this if you want a no-brainer `use` statement to get the most
//! of the `minipool-params` crate.

pub use crate::{deposit::DepositParams, minipool::MinipoolParams, node::NodeParams};

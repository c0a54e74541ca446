//! Directory of registered node operators and their trust flags.

use std::collections::BTreeMap;

use minipool_primitives::{Address, UnixTimestamp};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::RegistryErr;

/// A node operator's registration record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRecord {
    /// The operator's account address.
    pub operator: Address,

    /// Timezone metadata supplied at registration. Informational only.
    pub timezone: String,

    /// Whether the registry owner has flagged this operator as trusted.
    pub trusted: bool,

    /// When the operator registered.
    pub registered_at: UnixTimestamp,
}

/// The node trust registry.
///
/// Maps node operator addresses to their registration records. Trust flags
/// are administered exclusively by the registry owner; records exist only for
/// operators that have registered a node contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRegistry {
    owner: Address,
    nodes: BTreeMap<Address, NodeRecord>,
}

impl NodeRegistry {
    /// Creates an empty registry administered by `owner`.
    pub const fn new(owner: Address) -> Self {
        NodeRegistry {
            owner,
            nodes: BTreeMap::new(),
        }
    }

    /// The privileged owner of this registry.
    pub const fn owner(&self) -> Address {
        self.owner
    }

    /// Records a new node operator. Operators register untrusted.
    pub fn register(
        &mut self,
        operator: Address,
        timezone: impl Into<String>,
        now: UnixTimestamp,
    ) -> Result<&NodeRecord, RegistryErr> {
        if self.nodes.contains_key(&operator) {
            warn!(%operator, "rejecting duplicate node registration");

            return Err(RegistryErr::AlreadyRegistered(operator));
        }

        let record = NodeRecord {
            operator,
            timezone: timezone.into(),
            trusted: false,
            registered_at: now,
        };

        info!(%operator, "node operator registered");

        Ok(self.nodes.entry(operator).or_insert(record))
    }

    /// Looks up the record for an operator.
    pub fn get(&self, operator: &Address) -> Option<&NodeRecord> {
        self.nodes.get(operator)
    }

    /// Whether a node contract is registered for the operator.
    pub fn is_registered(&self, operator: &Address) -> bool {
        self.nodes.contains_key(operator)
    }

    /// Whether the operator is currently flagged as trusted.
    ///
    /// Unregistered operators are never trusted.
    pub fn is_trusted(&self, operator: &Address) -> bool {
        self.nodes.get(operator).is_some_and(|rec| rec.trusted)
    }

    /// Number of registered operators.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the registry has no registered operators.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Sets the trust flag for a registered node operator.
    ///
    /// Only the registry owner may call this. The new value must differ from
    /// the stored one: setting a node to its current status is rejected with
    /// [`RegistryErr::TrustUnchanged`], not silently accepted.
    pub fn set_node_trusted(
        &mut self,
        caller: Address,
        node: Address,
        trusted: bool,
    ) -> Result<(), RegistryErr> {
        if caller != self.owner {
            warn!(%caller, %node, "non-owner attempted to set node trust flag");

            return Err(RegistryErr::Unauthorized(caller));
        }

        let Some(record) = self.nodes.get_mut(&node) else {
            warn!(%node, "attempted to set trust flag of unregistered node");

            return Err(RegistryErr::NodeNotFound(node));
        };

        if record.trusted == trusted {
            warn!(%node, trusted, "rejecting trust update to current status");

            return Err(RegistryErr::TrustUnchanged { node, trusted });
        }

        record.trusted = trusted;
        info!(%node, trusted, "node trust flag updated");

        Ok(())
    }
}

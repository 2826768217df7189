//! Identifier scheme for nodes, links and edges
//!
//! Fresh node and edge identifiers are random UUIDs (v4). Link identifiers
//! are derived (v5) from the link's unordered endpoint pair, so linking the
//! same two nodes always produces the same id regardless of argument order.
//! Duplicate-link suppression rests on this guarantee.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identifier of a [`Node`](crate::graph::Node).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(Uuid);

impl NodeId {
    pub fn new() -> Self {
        NodeId(Uuid::new_v4())
    }

    pub fn from_uuid(id: Uuid) -> Self {
        NodeId(id)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<Uuid> for NodeId {
    fn from(id: Uuid) -> Self {
        NodeId(id)
    }
}

/// Identifier of a [`Link`](crate::graph::Link), derived from its endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LinkId(Uuid);

impl LinkId {
    /// Derive the id for the unordered pair `(a, b)`.
    ///
    /// The pair is put in canonical byte order, the two ids are combined
    /// byte-wise into a namespace, and the id is the v5 hash of the ordered
    /// concatenation of both ids under that namespace. Commutative:
    /// `between(a, b) == between(b, a)`.
    pub fn between(a: &NodeId, b: &NodeId) -> Self {
        let (lo, hi) = if a.0 <= b.0 { (a, b) } else { (b, a) };
        let mut combined = [0u8; 16];
        for (byte, (l, h)) in combined
            .iter_mut()
            .zip(lo.0.as_bytes().iter().zip(hi.0.as_bytes().iter()))
        {
            *byte = l | h;
        }
        let namespace = Uuid::from_bytes(combined);
        let name = format!("{}{}", lo.0, hi.0);
        LinkId(Uuid::new_v5(&namespace, name.as_bytes()))
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for LinkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Identifier of an [`Edge`](crate::graph::Edge).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeId(Uuid);

impl EdgeId {
    pub fn new() -> Self {
        EdgeId(Uuid::new_v4())
    }

    pub fn from_uuid(id: Uuid) -> Self {
        EdgeId(id)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for EdgeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_id_commutative() {
        let a = NodeId::new();
        let b = NodeId::new();
        assert_eq!(LinkId::between(&a, &b), LinkId::between(&b, &a));
    }

    #[test]
    fn test_link_id_deterministic() {
        let a = NodeId::new();
        let b = NodeId::new();
        assert_eq!(LinkId::between(&a, &b), LinkId::between(&a, &b));
    }

    #[test]
    fn test_link_id_distinct_pairs() {
        let a = NodeId::new();
        let b = NodeId::new();
        let c = NodeId::new();
        assert_ne!(LinkId::between(&a, &b), LinkId::between(&a, &c));
    }

    #[test]
    fn test_node_ids_unique() {
        assert_ne!(NodeId::new(), NodeId::new());
    }

    #[test]
    fn test_node_id_display_roundtrip() {
        let id = NodeId::new();
        assert_eq!(id.to_string(), id.as_uuid().to_string());
    }
}

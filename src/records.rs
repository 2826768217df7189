//! Identifier-bounded projections of graph objects for serialization
//!
//! Nodes, links and edges reference one another through the neighbour
//! maps; serializing them naively would expand those cycles without bound.
//! Records carry bare identifiers for every cross-reference instead:
//! a link's endpoints become `from`/`to` ids, an edge's chain becomes a
//! list of node ids.

use crate::error::Result;
use crate::graph::node::{Link, Node};
use crate::graph::types::{Cost, Direction};
use crate::graph::Edge;
use crate::id::{EdgeId, LinkId, NodeId};
use serde::Serialize;

/// Projection of a [`Link`] with bare endpoint identifiers.
#[derive(Debug, Clone, Serialize)]
pub struct LinkRecord<V> {
    pub id: LinkId,
    pub direction: Direction,
    pub cost: Cost,
    pub from: NodeId,
    pub to: NodeId,
    pub value: V,
}

impl<V: Clone> From<&Link<V>> for LinkRecord<V> {
    fn from(link: &Link<V>) -> Self {
        LinkRecord {
            id: link.id(),
            direction: link.direction(),
            cost: link.cost(),
            from: link.from(),
            to: link.to(),
            value: link.value().clone(),
        }
    }
}

/// Projection of a [`Node`]: neighbours become link records, in map order.
#[derive(Debug, Clone, Serialize)]
pub struct NodeRecord<V> {
    pub id: NodeId,
    pub neighbours: Vec<LinkRecord<V>>,
    pub value: V,
}

impl<V: Clone> From<&Node<V>> for NodeRecord<V> {
    fn from(node: &Node<V>) -> Self {
        NodeRecord {
            id: node.id(),
            neighbours: node.neighbours().values().map(LinkRecord::from).collect(),
            value: node.value().clone(),
        }
    }
}

/// Projection of an [`Edge`]: the chain becomes a list of node ids.
#[derive(Debug, Clone, Serialize)]
pub struct EdgeRecord<V> {
    pub id: EdgeId,
    pub distance: Cost,
    pub nodes: Vec<NodeId>,
    pub direction: Direction,
    pub value: V,
}

impl<V: Clone> From<&Edge<V>> for EdgeRecord<V> {
    fn from(edge: &Edge<V>) -> Self {
        EdgeRecord {
            id: edge.id(),
            distance: edge.distance(),
            nodes: edge.nodes().iter().map(Node::id).collect(),
            direction: edge.direction(),
            value: edge.value().clone(),
        }
    }
}

/// Serialize any record to a JSON string.
pub fn to_json<T: Serialize>(record: &T) -> Result<String> {
    Ok(serde_json::to_string(record)?)
}

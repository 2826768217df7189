//! Graph data model, traversal and path-finding
//!
//! Provides the core structures for building weighted graphs from domain
//! objects and navigating them:
//! - Node/Link adjacency with idempotent linking
//! - Edge chains for bulk path construction, grouped into relations
//! - Depth-bounded breadth-first traversal with early-exit control
//! - Least-cost path search over the link structure

pub mod algos;
pub mod edge;
pub mod node;
pub mod traversal;
pub mod types;

pub use algos::astar::{astar, astar_with};
pub use edge::{Edge, Relation};
pub use node::{Link, Node};
pub use traversal::{is_linked_to_depth, iterate, NodeProvider, Visit, Walk};
pub use types::{Cost, Direction, PathResult};

use crate::config::GraphConfig;
use crate::id::NodeId;
use std::collections::HashMap;

/// Owns the global node table and the edges and relations registered with
/// it.
///
/// The table only grows: registration overwrites by id, nothing is ever
/// removed. Mutation is not safe from multiple threads without external
/// synchronization.
#[derive(Debug)]
pub struct Graph<V> {
    nodes: HashMap<NodeId, Node<V>>,
    edges: Vec<Edge<V>>,
    relations: Vec<Relation<V>>,
    config: GraphConfig,
}

impl<V> Graph<V> {
    pub fn new() -> Self {
        Self::with_config(GraphConfig::default())
    }

    pub fn with_config(config: GraphConfig) -> Self {
        Graph {
            nodes: HashMap::new(),
            edges: Vec::new(),
            relations: Vec::new(),
            config,
        }
    }

    pub fn node(&self, id: &NodeId) -> Option<&Node<V>> {
        self.nodes.get(id)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node<V>> {
        self.nodes.values()
    }

    pub fn edges(&self) -> &[Edge<V>] {
        &self.edges
    }

    pub fn relations(&self) -> &[Relation<V>] {
        &self.relations
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Register a single node, overwriting any entry with the same id.
    pub fn add_node(&mut self, node: Node<V>) {
        self.nodes.insert(node.id(), node);
    }

    /// Retain a named grouping of edges. Membership only.
    pub fn add_relation(&mut self, relation: Relation<V>) {
        self.relations.push(relation);
    }
}

impl<V: Clone + Default> Graph<V> {
    /// Register every node of `edge` into the table and wire consecutive
    /// chain nodes with bidirectional links at the configured chain cost.
    ///
    /// Chain wiring is independent of whatever cost and direction the edge
    /// was built with, and is a no-op wherever a link between a pair
    /// already exists, such as one created during
    /// [`Edge::append_node`]. The edge itself is retained.
    #[tracing::instrument(skip(self, edge), fields(edge = %edge.id(), nodes = edge.len()))]
    pub fn add_edge(&mut self, edge: Edge<V>) {
        let ids: Vec<NodeId> = edge.nodes().iter().map(Node::id).collect();
        for node in edge.nodes() {
            self.nodes.insert(node.id(), node.clone());
        }
        for pair in ids.windows(2) {
            self.link_chain_pair(pair[0], pair[1]);
        }
        self.edges.push(edge);
    }

    /// Insert the default chain link into both endpoints' maps, if absent.
    fn link_chain_pair(&mut self, a: NodeId, b: NodeId) {
        let link = Link::new(
            Direction::Bidirectional,
            self.config.chain_cost,
            a,
            b,
            V::default(),
        );
        if let Some(node) = self.nodes.get_mut(&a) {
            node.insert_link(link.clone());
        }
        if let Some(node) = self.nodes.get_mut(&b) {
            node.insert_link(link);
        }
    }
}

impl<V> Default for Graph<V> {
    fn default() -> Self {
        Self::new()
    }
}

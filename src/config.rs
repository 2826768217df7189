//! Graph assembly configuration

use crate::graph::types::Cost;
use serde::{Deserialize, Serialize};

/// Tunables for graph assembly.
///
/// Deserializable so embedding applications can carry it in their own
/// configuration files.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Weight of the bidirectional chain links that
    /// [`Graph::add_edge`](crate::graph::Graph::add_edge) wires between
    /// consecutive nodes of a registered edge.
    pub chain_cost: Cost,
}

impl Default for GraphConfig {
    fn default() -> Self {
        GraphConfig {
            chain_cost: Cost::DEFAULT,
        }
    }
}

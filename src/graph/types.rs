use crate::id::NodeId;
use serde::{Deserialize, Serialize};

/// Whether a link may be traversed from both endpoints or only stored on
/// its origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Unidirectional,
    Bidirectional,
}

impl std::str::FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "unidirectional" => Ok(Direction::Unidirectional),
            "bidirectional" => Ok(Direction::Bidirectional),
            other => Err(format!(
                "unknown direction '{}' (expected: unidirectional, bidirectional)",
                other
            )),
        }
    }
}

/// Represents the cost of traversing a single link, and of accumulated
/// distances along a chain or path.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cost(f64);

impl Cost {
    pub const ZERO: Cost = Cost(0.0);
    pub const DEFAULT: Cost = Cost(1.0);

    pub fn new(cost: f64) -> Self {
        Cost(cost)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for Cost {
    fn default() -> Self {
        Self::ZERO
    }
}

impl std::ops::Add for Cost {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Cost(self.0 + other.0)
    }
}

impl From<f64> for Cost {
    fn from(cost: f64) -> Self {
        Cost(cost)
    }
}

impl std::fmt::Display for Cost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod cost_tests {
    use super::*;

    #[test]
    fn test_cost_addition() {
        assert_eq!((Cost::new(2.0) + Cost::new(3.0)).value(), 5.0);
    }

    #[test]
    fn test_cost_ordering() {
        assert!(Cost::new(1.5) < Cost::new(2.0));
    }

    #[test]
    fn test_direction_from_str() {
        use std::str::FromStr;
        assert_eq!(
            Direction::from_str("Bidirectional").unwrap(),
            Direction::Bidirectional
        );
        assert_eq!(
            Direction::from_str("unidirectional").unwrap(),
            Direction::Unidirectional
        );
        assert!(Direction::from_str("sideways").is_err());
    }
}

/// Result of a successful least-cost search: the node chain from source to
/// goal, inclusive, with the total accumulated cost.
#[derive(Debug, Clone, Serialize)]
pub struct PathResult {
    pub from: NodeId,
    pub to: NodeId,
    pub nodes: Vec<NodeId>,
    pub cost: Cost,
}

impl PathResult {
    /// Number of hops along the path (one less than the node count).
    pub fn path_length(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }
}

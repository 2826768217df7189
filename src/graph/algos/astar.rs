use crate::error::{Result, SkeinError};
use crate::graph::node::Node;
use crate::graph::traversal::NodeProvider;
use crate::graph::types::{Cost, PathResult};
use crate::graph::Graph;
use crate::id::NodeId;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

/// Wrapper for BinaryHeap to use as min-heap, ordered by priority with
/// ties broken by insertion sequence.
#[derive(Debug, Clone)]
pub struct FrontierEntry {
    pub node_id: NodeId,
    pub priority: Cost,
    pub seq: u64,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.seq == other.seq
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.priority
            .partial_cmp(&other.priority)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Best-known route to a node: its predecessor on that route and the
/// cumulative cost from the source (g-score).
#[derive(Debug, Clone, Copy)]
struct PathStep {
    predecessor: Option<NodeId>,
    g: Cost,
}

/// Least-cost path from `source` to `goal` using a zero heuristic, which
/// degrades the search to cost-only (Dijkstra) order.
pub fn astar<V, P>(provider: &P, source: &NodeId, goal: &NodeId) -> Result<PathResult>
where
    P: NodeProvider<V>,
{
    astar_with(provider, source, goal, |_, _| Cost::ZERO)
}

/// Least-cost path from `source` to `goal`, guided by an admissible
/// `heuristic` estimating the remaining cost to the goal.
///
/// The frontier is a min-heap ordered by `g + h`; improvements re-push an
/// entry and stale ones are skipped when popped. Fails with
/// [`SkeinError::NoPath`] when the frontier exhausts without reaching the
/// goal, and with [`SkeinError::NodeNotFound`] when either endpoint is
/// unknown to the provider.
#[tracing::instrument(skip(provider, heuristic), fields(source = %source, goal = %goal))]
pub fn astar_with<V, P, H>(
    provider: &P,
    source: &NodeId,
    goal: &NodeId,
    heuristic: H,
) -> Result<PathResult>
where
    P: NodeProvider<V>,
    H: Fn(&Node<V>, &Node<V>) -> Cost,
{
    let source_node = provider
        .node(source)
        .ok_or(SkeinError::NodeNotFound(*source))?;
    let goal_node = provider.node(goal).ok_or(SkeinError::NodeNotFound(*goal))?;

    let mut best: HashMap<NodeId, PathStep> = HashMap::new();
    let mut closed: HashSet<NodeId> = HashSet::new();
    let mut frontier: BinaryHeap<Reverse<FrontierEntry>> = BinaryHeap::new();
    let mut seq = 0u64;

    best.insert(
        *source,
        PathStep {
            predecessor: None,
            g: Cost::ZERO,
        },
    );
    frontier.push(Reverse(FrontierEntry {
        node_id: *source,
        priority: heuristic(source_node, goal_node),
        seq,
    }));

    while let Some(Reverse(FrontierEntry { node_id, .. })) = frontier.pop() {
        if node_id == *goal {
            tracing::debug!(explored = closed.len(), "goal reached");
            return Ok(reconstruct(&best, source, goal));
        }
        if !closed.insert(node_id) {
            continue; // stale entry for an already-explored node
        }
        let node = match provider.node(&node_id) {
            Some(node) => node,
            None => continue,
        };
        let g = match best.get(&node_id) {
            Some(step) => step.g,
            None => continue,
        };

        for link in node.neighbours().values() {
            let next = link.other_end(&node_id);
            if closed.contains(&next) {
                continue;
            }
            let tentative = g + link.cost();
            let improved = match best.get(&next) {
                Some(step) => tentative < step.g,
                None => true,
            };
            if !improved {
                continue;
            }
            best.insert(
                next,
                PathStep {
                    predecessor: Some(node_id),
                    g: tentative,
                },
            );
            let priority = match provider.node(&next) {
                Some(next_node) => tentative + heuristic(next_node, goal_node),
                None => tentative,
            };
            seq += 1;
            frontier.push(Reverse(FrontierEntry {
                node_id: next,
                priority,
                seq,
            }));
        }
    }

    Err(SkeinError::NoPath {
        from: *source,
        to: *goal,
    })
}

/// Walk predecessors back from the goal; the source's `None` terminates.
fn reconstruct(best: &HashMap<NodeId, PathStep>, source: &NodeId, goal: &NodeId) -> PathResult {
    let mut nodes = vec![*goal];
    let mut current = *goal;
    while let Some(step) = best.get(&current) {
        match step.predecessor {
            Some(pred) => {
                nodes.push(pred);
                current = pred;
            }
            None => break,
        }
    }
    nodes.reverse();

    PathResult {
        from: *source,
        to: *goal,
        cost: best.get(goal).map(|step| step.g).unwrap_or(Cost::ZERO),
        nodes,
    }
}

impl<V> Graph<V> {
    /// Least-cost path over the registered link structure, cost-only
    /// ordering.
    pub fn astar(&self, source: &NodeId, goal: &NodeId) -> Result<PathResult> {
        astar(self, source, goal)
    }

    /// Least-cost path guided by an admissible `heuristic`.
    pub fn astar_with<H>(&self, source: &NodeId, goal: &NodeId, heuristic: H) -> Result<PathResult>
    where
        H: Fn(&Node<V>, &Node<V>) -> Cost,
    {
        astar_with(self, source, goal, heuristic)
    }
}

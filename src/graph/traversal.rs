use crate::error::{ErrorStack, Result};
use crate::graph::node::Node;
use crate::graph::{Edge, Graph};
use crate::id::NodeId;
use std::collections::{HashSet, VecDeque};

/// Supplies id-to-node resolution for the traversal and path-finding
/// engines.
///
/// Implemented by [`Graph`] (table lookup) and by [`Edge`] (scan of its
/// owned chain), so detached subgraphs are walkable before registration.
pub trait NodeProvider<V> {
    fn node(&self, id: &NodeId) -> Option<&Node<V>>;
}

impl<V> NodeProvider<V> for Graph<V> {
    fn node(&self, id: &NodeId) -> Option<&Node<V>> {
        Graph::node(self, id)
    }
}

impl<V> NodeProvider<V> for Edge<V> {
    fn node(&self, id: &NodeId) -> Option<&Node<V>> {
        self.nodes().iter().find(|n| n.id() == *id)
    }
}

/// Signal returned by a traversal callback for each visited node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    Continue,
    /// Terminate the traversal immediately. A control signal, not a
    /// failure.
    Stop,
}

/// How a traversal ended when no callback failure is being reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Walk {
    /// Every reachable node within the depth bound was visited.
    Exhausted,
    /// A callback asked to stop early.
    Stopped,
}

/// Breadth-first visitation of `root`'s neighborhood, bounded to
/// `max_depth` hops (`0` visits only the root).
///
/// Each node is visited at most once. The callback decides per node:
/// `Ok(Visit::Stop)` terminates immediately with `Ok(Walk::Stopped)`;
/// errors are collected and the walk continues, surfacing them together as
/// [`SkeinError::Callbacks`](crate::error::SkeinError::Callbacks) at the
/// end. Both endpoints of every incident link are candidate next hops, so
/// directed links are followed from whichever endpoint stores them.
/// Candidates the provider cannot resolve are skipped.
#[tracing::instrument(skip(provider, root, callback), fields(root = %root.id()))]
pub fn iterate<V, P, F>(provider: &P, root: &Node<V>, max_depth: u32, mut callback: F) -> Result<Walk>
where
    P: NodeProvider<V>,
    F: FnMut(&Node<V>) -> Result<Visit>,
{
    let mut queue: VecDeque<(NodeId, u32)> = VecDeque::new();
    let mut closed: HashSet<NodeId> = HashSet::new();
    let mut errors = ErrorStack::default();

    queue.push_back((root.id(), 0));
    closed.insert(root.id());

    while let Some((id, depth)) = queue.pop_front() {
        let node = if id == root.id() {
            root
        } else {
            match provider.node(&id) {
                Some(node) => node,
                None => continue,
            }
        };

        match callback(node) {
            Ok(Visit::Stop) => {
                tracing::debug!(stopped_at = %id, visited = closed.len(), "traversal stopped");
                return Ok(Walk::Stopped);
            }
            Ok(Visit::Continue) => {}
            Err(err) => errors.push(err),
        }

        if depth < max_depth {
            for link in node.neighbours().values() {
                let next = link.other_end(&id);
                if closed.insert(next) {
                    queue.push_back((next, depth + 1));
                }
            }
        }
    }

    errors.into_result()?;
    Ok(Walk::Exhausted)
}

/// True iff `target` is reachable from `root` within `max_depth` hops.
pub fn is_linked_to_depth<V, P>(provider: &P, root: &Node<V>, max_depth: u32, target: &NodeId) -> bool
where
    P: NodeProvider<V>,
{
    matches!(
        iterate(provider, root, max_depth, |node| {
            if node.id() == *target {
                Ok(Visit::Stop)
            } else {
                Ok(Visit::Continue)
            }
        }),
        Ok(Walk::Stopped)
    )
}

impl<V> Node<V> {
    /// [`iterate`] with `self` as the root.
    pub fn iterate<P, F>(&self, provider: &P, max_depth: u32, callback: F) -> Result<Walk>
    where
        P: NodeProvider<V>,
        F: FnMut(&Node<V>) -> Result<Visit>,
    {
        iterate(provider, self, max_depth, callback)
    }

    /// [`is_linked_to_depth`] with `self` as the root.
    pub fn is_linked_to_depth<P>(&self, provider: &P, max_depth: u32, target: &NodeId) -> bool
    where
        P: NodeProvider<V>,
    {
        is_linked_to_depth(provider, self, max_depth, target)
    }
}

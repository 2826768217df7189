use crate::graph::types::{Cost, Direction};
use crate::id::{LinkId, NodeId};
use indexmap::IndexMap;

/// A weighted connection between two node identifiers.
///
/// Links are immutable once built. Identity derives from the unordered
/// endpoint pair (see [`LinkId::between`]), so at most one link can exist
/// per pair: inserting under an id already present in a neighbour map is a
/// no-op regardless of differing cost or value.
#[derive(Debug, Clone)]
pub struct Link<V> {
    id: LinkId,
    direction: Direction,
    cost: Cost,
    from: NodeId,
    to: NodeId,
    value: V,
}

impl<V> Link<V> {
    pub fn new(direction: Direction, cost: Cost, from: NodeId, to: NodeId, value: V) -> Self {
        Link {
            id: LinkId::between(&from, &to),
            direction,
            cost,
            from,
            to,
            value,
        }
    }

    pub fn id(&self) -> LinkId {
        self.id
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn cost(&self) -> Cost {
        self.cost
    }

    pub fn from(&self) -> NodeId {
        self.from
    }

    pub fn to(&self) -> NodeId {
        self.to
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    /// The endpoint on the far side of `id`, whichever slot holds it.
    pub fn other_end(&self, id: &NodeId) -> NodeId {
        if self.from == *id {
            self.to
        } else {
            self.from
        }
    }
}

/// A graph vertex holding a value and its incident links.
///
/// The neighbour map is keyed by link id and preserves insertion order, so
/// walks over a node's neighborhood are deterministic.
#[derive(Debug, Clone)]
pub struct Node<V> {
    id: NodeId,
    neighbours: IndexMap<LinkId, Link<V>>,
    value: V,
}

impl<V> Node<V> {
    pub fn new(value: V) -> Self {
        Self::with_id(NodeId::new(), value)
    }

    pub fn with_id(id: NodeId, value: V) -> Self {
        Node {
            id,
            neighbours: IndexMap::new(),
            value,
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn neighbours(&self) -> &IndexMap<LinkId, Link<V>> {
        &self.neighbours
    }

    /// Direct adjacency check: true iff some incident link has `target` on
    /// either end, independent of the direction flag.
    pub fn is_linked_to(&self, target: &NodeId) -> bool {
        self.neighbours
            .values()
            .any(|l| l.from == *target || l.to == *target)
    }

    pub(crate) fn insert_link(&mut self, link: Link<V>) {
        self.neighbours.entry(link.id).or_insert(link);
    }
}

impl<V: Clone> Node<V> {
    /// Link this node to `other` with a freshly derived link.
    ///
    /// Re-linking the same unordered pair is suppressed: the existing link
    /// stays, whatever cost or value the second call carried. A
    /// bidirectional link lands in both neighbour maps under the same id; a
    /// unidirectional link is stored on this node only.
    pub fn add_neighbour(
        &mut self,
        other: &mut Node<V>,
        cost: Cost,
        direction: Direction,
        value: V,
    ) {
        let link = Link::new(direction, cost, self.id, other.id, value);
        if direction == Direction::Bidirectional {
            other
                .neighbours
                .entry(link.id)
                .or_insert_with(|| link.clone());
        }
        self.neighbours.entry(link.id).or_insert(link);
    }

    /// Copy with the same id and value but an empty neighbour map, for
    /// rebuilding subgraphs without carrying adjacency.
    pub fn detached(&self) -> Node<V> {
        Node {
            id: self.id,
            neighbours: IndexMap::new(),
            value: self.value.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_neighbour_bidirectional_symmetry() {
        let mut a = Node::new("a");
        let mut b = Node::new("b");
        a.add_neighbour(&mut b, Cost::new(2.0), Direction::Bidirectional, "ab");

        assert_eq!(a.neighbours().len(), 1);
        assert_eq!(b.neighbours().len(), 1);

        let id = LinkId::between(&a.id(), &b.id());
        let on_a = &a.neighbours()[&id];
        let on_b = &b.neighbours()[&id];
        assert_eq!(on_a.id(), on_b.id());
        assert_eq!(on_a.cost(), on_b.cost());
        assert_eq!(on_a.value(), on_b.value());
    }

    #[test]
    fn test_add_neighbour_unidirectional_one_sided() {
        let mut a = Node::new("a");
        let mut b = Node::new("b");
        a.add_neighbour(&mut b, Cost::DEFAULT, Direction::Unidirectional, "ab");

        assert_eq!(a.neighbours().len(), 1);
        assert!(b.neighbours().is_empty());
    }

    #[test]
    fn test_duplicate_link_suppressed() {
        let mut a = Node::new("a");
        let mut b = Node::new("b");
        a.add_neighbour(&mut b, Cost::new(1.0), Direction::Bidirectional, "first");
        a.add_neighbour(&mut b, Cost::new(9.0), Direction::Bidirectional, "second");

        assert_eq!(a.neighbours().len(), 1);
        assert_eq!(b.neighbours().len(), 1);

        let id = LinkId::between(&a.id(), &b.id());
        assert_eq!(a.neighbours()[&id].cost(), Cost::new(1.0));
        assert_eq!(*a.neighbours()[&id].value(), "first");
    }

    #[test]
    fn test_duplicate_suppressed_from_either_side() {
        let mut a = Node::new("a");
        let mut b = Node::new("b");
        a.add_neighbour(&mut b, Cost::new(1.0), Direction::Bidirectional, "ab");
        b.add_neighbour(&mut a, Cost::new(5.0), Direction::Bidirectional, "ba");

        assert_eq!(a.neighbours().len(), 1);
        assert_eq!(b.neighbours().len(), 1);
    }

    #[test]
    fn test_is_linked_to() {
        let mut a = Node::new("a");
        let mut b = Node::new("b");
        let c = Node::new("c");
        a.add_neighbour(&mut b, Cost::DEFAULT, Direction::Bidirectional, "ab");

        assert!(a.is_linked_to(&b.id()));
        assert!(b.is_linked_to(&a.id()));
        assert!(!a.is_linked_to(&c.id()));
    }

    #[test]
    fn test_is_linked_to_ignores_direction_flag() {
        let mut a = Node::new("a");
        let mut b = Node::new("b");
        a.add_neighbour(&mut b, Cost::DEFAULT, Direction::Unidirectional, "ab");

        assert!(a.is_linked_to(&b.id()));
    }

    #[test]
    fn test_detached_copy() {
        let mut a = Node::new("a");
        let mut b = Node::new("b");
        a.add_neighbour(&mut b, Cost::DEFAULT, Direction::Bidirectional, "ab");

        let bare = a.detached();
        assert_eq!(bare.id(), a.id());
        assert_eq!(bare.value(), a.value());
        assert!(bare.neighbours().is_empty());
    }
}

//! Borrowed views over the vertices and edges stored in a [`Graph`](super::Graph).
//!
//! Nodes and edges are identified by the data they carry, not by where they
//! live in the arena: two nodes are equal iff their data are equal, and an
//! edge is equal to another iff both endpoints' data are.

use std::fmt;
use std::hash::{Hash, Hasher};

use petgraph::stable_graph::{NodeIndex, StableDiGraph};
use petgraph::visit::EdgeRef;

/// A directed record of one node linking to another.
///
/// `A -> B` and `B -> A` are distinct values. The graph always stores both
/// directions of a link, so from either endpoint's perspective the edge
/// starts at that endpoint.
///
/// # Example
///
/// ```rust
/// use graphlink::graph::Graph;
///
/// let mut graph = Graph::new();
/// graph.insert("a").unwrap();
/// graph.insert("b").unwrap();
///
/// let root = graph.root().unwrap();
/// let edge = root.links().next().unwrap();
/// assert_eq!(*edge.source(), "a");
/// assert_eq!(*edge.target(), "b");
/// ```
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct Edge<'g, T> {
    source: &'g T,
    target: &'g T,
}

impl<'g, T> Edge<'g, T> {
    pub(crate) fn new(source: &'g T, target: &'g T) -> Self {
        Self { source, target }
    }

    /// Data of the node this edge starts at.
    pub fn source(&self) -> &'g T {
        self.source
    }

    /// Data of the node this edge points to.
    pub fn target(&self) -> &'g T {
        self.target
    }

    /// Returns true if the edge starts and ends at the same node.
    pub fn is_self_link(&self) -> bool
    where
        T: PartialEq,
    {
        self.source == self.target
    }
}

impl<T> Clone for Edge<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Edge<'_, T> {}

/// A vertex of the graph: a data value plus the edges it is the source of.
///
/// `Node` borrows the graph it came from, so it cannot outlive a mutation.
/// Equality and hashing use the data value only.
pub struct Node<'g, T> {
    graph: &'g StableDiGraph<T, ()>,
    index: NodeIndex,
}

impl<'g, T> Node<'g, T> {
    /// `index` must belong to `graph`.
    pub(crate) fn new(graph: &'g StableDiGraph<T, ()>, index: NodeIndex) -> Self {
        Self { graph, index }
    }

    /// The data carried by this node.
    pub fn data(&self) -> &'g T {
        &self.graph[self.index]
    }

    /// Iterates over the edges whose source is this node.
    ///
    /// Iteration order is unspecified.
    pub fn links(&self) -> impl Iterator<Item = Edge<'g, T>> + 'g {
        let graph = self.graph;
        graph
            .edges(self.index)
            .map(move |edge| Edge::new(&graph[edge.source()], &graph[edge.target()]))
    }

    /// Iterates over the nodes this node is linked to.
    pub fn neighbors(&self) -> impl Iterator<Item = Node<'g, T>> + 'g {
        let graph = self.graph;
        graph
            .neighbors(self.index)
            .map(move |index| Node::new(graph, index))
    }

    /// Number of edges leaving this node. A self-link counts once.
    pub fn degree(&self) -> usize {
        self.graph.edges(self.index).count()
    }

    /// Returns true if this node has an edge to a node carrying `criteria`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use graphlink::graph::Graph;
    ///
    /// let graph = {
    ///     let mut graph = Graph::with_root("a");
    ///     graph.insert("b").unwrap();
    ///     graph
    /// };
    ///
    /// let a = graph.find_node(&"a").unwrap();
    /// assert!(a.contains_link(&"b"));
    /// assert!(!a.contains_link(&"c"));
    /// ```
    pub fn contains_link(&self, criteria: &T) -> bool
    where
        T: PartialEq,
    {
        self.links().any(|edge| edge.target() == criteria)
    }
}

impl<T> Clone for Node<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Node<'_, T> {}

impl<T: PartialEq> PartialEq for Node<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.data() == other.data()
    }
}

impl<T: Eq> Eq for Node<'_, T> {}

impl<T: Hash> Hash for Node<'_, T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.data().hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for Node<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let targets: Vec<&T> = self.links().map(|edge| edge.target()).collect();
        f.debug_struct("Node")
            .field("data", self.data())
            .field("links", &targets)
            .finish()
    }
}

impl<T: fmt::Display> fmt::Display for Node<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.data())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn pair() -> (StableDiGraph<&'static str, ()>, NodeIndex, NodeIndex) {
        let mut graph = StableDiGraph::new();
        let a = graph.add_node("a");
        let b = graph.add_node("b");
        graph.add_edge(a, b, ());
        graph.add_edge(b, a, ());
        (graph, a, b)
    }

    #[test]
    fn test_edge_equality_is_directional() {
        let forward = Edge::new(&"a", &"b");
        let same = Edge::new(&"a", &"b");
        let reverse = Edge::new(&"b", &"a");

        assert_eq!(forward, same);
        assert_ne!(forward, reverse);

        let set: HashSet<Edge<'_, &str>> = [forward, same, reverse].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_edge_self_link() {
        assert!(Edge::new(&"a", &"a").is_self_link());
        assert!(!Edge::new(&"a", &"b").is_self_link());
    }

    #[test]
    fn test_node_links() {
        let (graph, a, _) = pair();
        let node = Node::new(&graph, a);

        assert_eq!(*node.data(), "a");
        assert_eq!(node.degree(), 1);

        let links: Vec<Edge<'_, &str>> = node.links().collect();
        assert_eq!(links, vec![Edge::new(&"a", &"b")]);
        assert!(node.contains_link(&"b"));
        assert!(!node.contains_link(&"a"));
    }

    #[test]
    fn test_node_neighbors() {
        let (graph, a, b) = pair();
        let neighbors: Vec<&str> = Node::new(&graph, b).neighbors().map(|n| *n.data()).collect();
        assert_eq!(neighbors, vec!["a"]);
        assert_eq!(Node::new(&graph, b).neighbors().next(), Some(Node::new(&graph, a)));
    }

    #[test]
    fn test_node_equality_uses_data() {
        let (graph, a, b) = pair();
        let mut other: StableDiGraph<&str, ()> = StableDiGraph::new();
        let lonely = other.add_node("a");

        // Same data in a different arena with different links is still equal.
        assert_eq!(Node::new(&graph, a), Node::new(&other, lonely));
        assert_ne!(Node::new(&graph, a), Node::new(&graph, b));
    }

    #[test]
    fn test_node_formatting() {
        let (graph, a, _) = pair();
        let node = Node::new(&graph, a);

        assert_eq!(format!("{}", node), "a");
        assert_eq!(
            format!("{:?}", node),
            "Node { data: \"a\", links: [\"b\"] }"
        );
    }
}

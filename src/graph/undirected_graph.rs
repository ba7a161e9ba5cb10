//! Undirected graph implementation using petgraph.
//!
//! Every link is stored as a pair of directed edges (`a -> b` and `b -> a`),
//! and every lookup walks the graph depth-first from the root. Vertices that
//! a removal cuts off from the root are dropped from the arena, so a value
//! inserted again later starts out with no links.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;

use petgraph::stable_graph::{NodeIndex, StableDiGraph};
use petgraph::visit::Dfs;
use tracing::{debug, trace};

use super::error::{GraphError, GraphResult};
use super::node::Node;

/// A generic undirected graph rooted at a single entry node.
///
/// Nodes are identified by their data: the graph never holds two vertices
/// with equal data, and inserting a value that is already present links the
/// existing vertex instead of creating a new one.
///
/// # Example
///
/// ```rust
/// use graphlink::graph::Graph;
///
/// let mut graph = Graph::new();
/// graph.insert("a").unwrap(); // becomes the root
/// graph.insert("b").unwrap(); // linked to the root
/// graph.insert_under(&"b", "c").unwrap();
///
/// assert!(graph.are_linked(&"a", &"b"));
/// assert!(graph.are_linked(&"c", &"b"));
/// assert!(!graph.are_linked(&"a", &"c"));
///
/// assert!(graph.link(&"a", &"c"));
/// assert!(graph.are_linked(&"c", &"a"));
/// ```
#[derive(Debug, Clone)]
pub struct Graph<T> {
    /// Vertex arena; one directed edge per direction of each link
    graph: StableDiGraph<T, ()>,
    /// Interns data values to their vertex
    node_indices: HashMap<T, NodeIndex>,
    /// Entry point for every lookup and traversal
    root: Option<NodeIndex>,
}

impl<T: Eq + Hash + Clone> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash + Clone> Graph<T> {
    /// Creates a new empty graph with no root.
    ///
    /// # Example
    ///
    /// ```rust
    /// use graphlink::graph::Graph;
    ///
    /// let graph: Graph<u32> = Graph::new();
    /// assert!(graph.root().is_none());
    /// assert!(graph.is_empty());
    /// ```
    pub fn new() -> Self {
        Self {
            graph: StableDiGraph::new(),
            node_indices: HashMap::new(),
            root: None,
        }
    }

    /// Creates a graph whose root carries `data`.
    pub fn with_root(data: T) -> Self {
        let mut graph = Self::new();
        let root = graph.intern(data);
        graph.root = Some(root);
        graph
    }

    /// Returns the root node, if one has been set.
    pub fn root(&self) -> Option<Node<'_, T>> {
        self.root.map(|index| Node::new(&self.graph, index))
    }

    /// Inserts `data` into the graph.
    ///
    /// If the graph has no root, the new node becomes the root. Otherwise it
    /// is linked to the root (and only to the root).
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidArgument`] if `data` is `None`. The graph
    /// is left unmodified.
    ///
    /// # Example
    ///
    /// ```rust
    /// use graphlink::graph::{Graph, GraphError};
    ///
    /// let mut graph = Graph::new();
    /// graph.insert("root").unwrap();
    /// graph.insert("leaf").unwrap();
    /// assert!(graph.are_linked(&"root", &"leaf"));
    ///
    /// assert!(matches!(graph.insert(None), Err(GraphError::InvalidArgument(_))));
    /// ```
    pub fn insert(&mut self, data: impl Into<Option<T>>) -> GraphResult<()> {
        let data = data
            .into()
            .ok_or(GraphError::InvalidArgument("node data must be present"))?;

        match self.root {
            None => {
                let root = self.intern(data);
                self.root = Some(root);
                debug!(root = root.index(), "Set root node");
            }
            Some(root) => {
                let index = self.intern(data);
                self.add_link(root, index);
            }
        }

        Ok(())
    }

    /// Inserts `data` and links it to the node carrying `parent`.
    ///
    /// # Errors
    ///
    /// - [`GraphError::InvalidArgument`] if `data` is `None`
    /// - [`GraphError::NotFound`] if `parent` is not reachable from the root
    ///
    /// In both cases the graph is left unmodified.
    ///
    /// # Example
    ///
    /// ```rust
    /// use graphlink::graph::{Graph, GraphError};
    ///
    /// let mut graph = Graph::with_root("a");
    /// graph.insert_under(&"a", "b").unwrap();
    /// graph.insert_under(&"b", "c").unwrap();
    /// assert!(graph.are_linked(&"b", &"c"));
    ///
    /// assert_eq!(
    ///     graph.insert_under(&"z", "d"),
    ///     Err(GraphError::NotFound("\"z\"".to_string()))
    /// );
    /// ```
    pub fn insert_under(&mut self, parent: &T, data: impl Into<Option<T>>) -> GraphResult<()>
    where
        T: fmt::Debug,
    {
        let data = data
            .into()
            .ok_or(GraphError::InvalidArgument("node data must be present"))?;

        let parent = self
            .find_index(parent)
            .ok_or_else(|| GraphError::NotFound(format!("{:?}", parent)))?;

        let index = self.intern(data);
        self.add_link(parent, index);
        Ok(())
    }

    /// Detaches the node carrying `data` from every node it is linked to.
    ///
    /// Does nothing if the node is not reachable. The node, and anything that
    /// was only reachable through it, is dropped from the graph. Removing the
    /// root leaves the root in place with no links.
    pub fn remove(&mut self, data: &T) {
        let Some(index) = self.find_index(data) else {
            trace!("Remove skipped: node not reachable");
            return;
        };

        // Snapshot first: unlinking mutates the edge list being walked.
        let targets: Vec<NodeIndex> = self.graph.neighbors(index).collect();
        for target in targets {
            self.remove_link(index, target);
        }

        debug!(node = index.index(), "Removed node links");
        self.sweep_unreachable();
    }

    /// Links the nodes carrying `source` and `target` in both directions.
    ///
    /// # Returns
    ///
    /// `true` if the link was newly established, `false` if either node is
    /// not reachable or the two are already linked.
    pub fn link(&mut self, source: &T, target: &T) -> bool {
        match (self.find_index(source), self.find_index(target)) {
            (Some(source), Some(target)) => self.add_link(source, target),
            _ => {
                trace!("Link skipped: node not reachable");
                false
            }
        }
    }

    /// Removes the link between the nodes carrying `source` and `target`.
    ///
    /// # Returns
    ///
    /// `true` if a link was removed, `false` if either node is not reachable
    /// or the two were not linked.
    pub fn unlink(&mut self, source: &T, target: &T) -> bool {
        match (self.find_index(source), self.find_index(target)) {
            (Some(source), Some(target)) => {
                let removed = self.remove_link(source, target);
                if removed {
                    self.sweep_unreachable();
                }
                removed
            }
            _ => {
                trace!("Unlink skipped: node not reachable");
                false
            }
        }
    }

    /// Checks whether the nodes carrying `source` and `target` are linked.
    ///
    /// Returns `false` if either node is not reachable.
    pub fn are_linked(&self, source: &T, target: &T) -> bool {
        match (self.find_node(source), self.find_node(target)) {
            (Some(source), Some(target)) => source.contains_link(target.data()),
            _ => false,
        }
    }

    /// Finds the node carrying `data` by a depth-first search from the root.
    ///
    /// # Returns
    ///
    /// `Some(Node)` if the node is reachable from the root, `None` otherwise
    /// (including when the graph has no root).
    ///
    /// # Example
    ///
    /// ```rust
    /// use graphlink::graph::Graph;
    ///
    /// let mut graph = Graph::with_root(1u32);
    /// graph.insert(2u32).unwrap();
    ///
    /// assert_eq!(graph.find_node(&2).map(|node| *node.data()), Some(2));
    /// assert!(graph.find_node(&3).is_none());
    /// ```
    pub fn find_node(&self, data: &T) -> Option<Node<'_, T>> {
        self.find_index(data)
            .map(|index| Node::new(&self.graph, index))
    }

    /// Visits every node reachable from the root exactly once, depth-first.
    ///
    /// Does nothing if the graph has no root.
    pub fn for_each<F>(&self, mut visitor: F)
    where
        F: FnMut(Node<'_, T>),
    {
        for index in self.reachable() {
            visitor(Node::new(&self.graph, index));
        }
    }

    /// Returns the data of every reachable node in depth-first order.
    pub fn traverse(&self) -> Vec<&T> {
        self.reachable().map(|index| &self.graph[index]).collect()
    }

    /// Gets the data of the nodes linked to the node carrying `data`.
    ///
    /// Returns an empty vector if the node is not reachable.
    pub fn neighbors(&self, data: &T) -> Vec<&T> {
        let Some(node) = self.find_node(data) else {
            return Vec::new();
        };
        node.neighbors().map(|neighbor| neighbor.data()).collect()
    }

    /// Checks if a node carrying `data` is reachable from the root.
    pub fn contains(&self, data: &T) -> bool {
        self.find_index(data).is_some()
    }

    /// Returns the number of nodes reachable from the root.
    pub fn len(&self) -> usize {
        self.reachable().count()
    }

    /// Checks if no node is reachable, i.e. the graph has no root.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the number of links between reachable nodes.
    ///
    /// Each undirected link counts once, including self-links.
    pub fn edge_count(&self) -> usize {
        self.reachable()
            .map(|index| {
                self.graph
                    .neighbors(index)
                    .filter(|target| target.index() >= index.index())
                    .count()
            })
            .sum()
    }

    /// Returns the vertex for `data`, creating it if the value is new.
    fn intern(&mut self, data: T) -> NodeIndex {
        if let Some(&index) = self.node_indices.get(&data) {
            return index;
        }

        let index = self.graph.add_node(data.clone());
        self.node_indices.insert(data, index);
        index
    }

    /// Looks up the vertex interned for `criteria` and returns it only if a
    /// depth-first search from the root reaches it.
    fn find_index(&self, criteria: &T) -> Option<NodeIndex> {
        // Values that were never inserted cannot be reachable.
        let &target = self.node_indices.get(criteria)?;
        self.reachable().find(|&index| index == target)
    }

    /// Vertices reachable from the root, each yielded once, depth-first.
    fn reachable(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        let mut dfs = self.root.map(|root| Dfs::new(&self.graph, root));
        std::iter::from_fn(move || dfs.as_mut()?.next(&self.graph))
    }

    /// Drops every vertex the root can no longer reach, along with its edges
    /// and its interned value.
    fn sweep_unreachable(&mut self) {
        let reachable: HashSet<NodeIndex> = self.reachable().collect();
        let orphans: Vec<NodeIndex> = self
            .graph
            .node_indices()
            .filter(|index| !reachable.contains(index))
            .collect();

        for &index in &orphans {
            if let Some(data) = self.graph.remove_node(index) {
                self.node_indices.remove(&data);
            }
        }

        if !orphans.is_empty() {
            debug!(count = orphans.len(), "Dropped unreachable nodes");
        }
    }

    /// Adds `source -> target`, then the reverse edge if it is missing.
    ///
    /// Returns `false` without touching the graph if the forward edge exists.
    /// For a self-link the forward edge is also the reverse edge.
    fn add_link(&mut self, source: NodeIndex, target: NodeIndex) -> bool {
        if self.graph.find_edge(source, target).is_some() {
            return false;
        }

        self.graph.add_edge(source, target, ());
        if self.graph.find_edge(target, source).is_none() {
            self.graph.add_edge(target, source, ());
        }

        debug!(
            source = source.index(),
            target = target.index(),
            "Linked nodes"
        );
        true
    }

    /// Removes `source -> target`, then the reverse edge if it is present.
    ///
    /// Returns `false` if the forward edge does not exist.
    fn remove_link(&mut self, source: NodeIndex, target: NodeIndex) -> bool {
        let Some(forward) = self.graph.find_edge(source, target) else {
            return false;
        };

        let mut removed = self.graph.remove_edge(forward).is_some();
        if let Some(reverse) = self.graph.find_edge(target, source) {
            removed = self.graph.remove_edge(reverse).is_some() && removed;
        }

        debug!(
            source = source.index(),
            target = target.index(),
            "Unlinked nodes"
        );
        removed
    }
}

impl<T> Graph<T> {
    fn root_data(&self) -> Option<&T> {
        self.root.map(|index| &self.graph[index])
    }
}

/// Two graphs are equal when their roots carry equal data.
impl<T: PartialEq> PartialEq for Graph<T> {
    fn eq(&self, other: &Self) -> bool {
        self.root_data() == other.root_data()
    }
}

impl<T: Eq> Eq for Graph<T> {}

//! Incrementally built dependency graph with Kahn-style cycle detection.
//!
//! The graph keeps two tables:
//! - an adjacency list of outgoing edges per node, in insertion order
//! - the in-degree of every known node
//!
//! After each insertion the whole graph is re-checked by repeatedly removing
//! nodes whose in-degree is zero. Any node that never reaches zero lies on a
//! cycle or depends on one.
//!
//! # Edge Direction
//!
//! An edge `source -> target` reads "source depends on target". Parallel
//! edges are kept: adding `a -> b` twice gives `b` an in-degree of 2.
//!
//! # Rollback Is the Caller's Job
//!
//! [`DependencyGraph::add_edge_and_detect_cycle`] always keeps the edge, even
//! when it reports a cycle. There is no removal operation, so a caller that
//! needs a strict DAG must reject the input before inserting it into the
//! graph it keeps (for example by inserting into a clone first).

use std::collections::{HashMap, VecDeque};

/// A directed graph that only grows, keyed by opaque string identifiers.
///
/// Nodes are created implicitly the first time they appear as either end of
/// an edge. The type has no interior mutability; wrap it in a lock if it must
/// be shared between threads.
///
/// # Example
///
/// ```
/// use depcycle::DependencyGraph;
///
/// let mut graph = DependencyGraph::new();
/// assert!(!graph.add_edge_and_detect_cycle("app", "lib"));
/// assert!(!graph.add_edge_and_detect_cycle("lib", "core"));
/// assert!(graph.add_edge_and_detect_cycle("core", "app"));
///
/// // The cycle-closing edge was kept.
/// assert_eq!(graph.edge_count(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyGraph {
    /// Outgoing edges per source node. Duplicates allowed.
    adjacency: HashMap<String, Vec<String>>,
    /// Incoming edge count for every known node.
    in_degree: HashMap<String, usize>,
    /// Total number of edges, parallel edges included.
    edge_count: usize,
}

impl DependencyGraph {
    /// Create an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the edge `source -> target` and report whether the graph now
    /// contains a cycle.
    ///
    /// The edge is recorded unconditionally. A `true` result means the graph
    /// as it stands after this insertion is cyclic; the edge is not undone.
    ///
    /// Self-loops (`source == target`) always report a cycle.
    pub fn add_edge_and_detect_cycle(
        &mut self,
        source: impl Into<String>,
        target: impl Into<String>,
    ) -> bool {
        let source = source.into();
        let target = target.into();
        tracing::trace!(source = %source, target = %target, "Adding edge");

        *self.in_degree.entry(target.clone()).or_insert(0) += 1;
        self.in_degree.entry(source.clone()).or_insert(0);
        self.adjacency.entry(source).or_default().push(target);
        self.edge_count += 1;

        let cyclic = self.has_cycle();
        tracing::debug!(
            nodes = self.node_count(),
            edges = self.edge_count,
            cyclic,
            "Edge added"
        );
        cyclic
    }

    /// Check whether the graph currently contains a directed cycle.
    ///
    /// Runs Kahn's algorithm over a copy of the in-degree table, so repeated
    /// calls without mutation always agree. Cost is O(nodes + edges).
    #[must_use]
    pub fn has_cycle(&self) -> bool {
        let mut remaining: HashMap<&str, usize> = self
            .in_degree
            .iter()
            .map(|(node, degree)| (node.as_str(), *degree))
            .collect();

        let mut queue: VecDeque<&str> = remaining
            .iter()
            .filter(|(_, degree)| **degree == 0)
            .map(|(node, _)| *node)
            .collect();

        let mut processed = 0usize;
        while let Some(node) = queue.pop_front() {
            processed += 1;

            for target in self.targets(node) {
                // Every target has an in-degree entry, and each occurrence is
                // decremented at most once because each source is dequeued once.
                let Some(degree) = remaining.get_mut(target.as_str()) else {
                    continue;
                };
                *degree -= 1;
                if *degree == 0 {
                    queue.push_back(target.as_str());
                }
            }
        }

        let total = remaining.len();
        tracing::trace!(processed, total, "Topological pass finished");
        processed < total
    }

    /// Number of distinct nodes seen as either edge endpoint.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.in_degree.len()
    }

    /// Number of edges, counting parallel edges separately.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns `true` if no edge has been added yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.in_degree.is_empty()
    }

    /// Returns `true` if `node` has appeared in any edge.
    #[must_use]
    pub fn contains_node(&self, node: &str) -> bool {
        self.in_degree.contains_key(node)
    }

    /// Incoming edge count of `node`, or `None` for an unknown node.
    #[must_use]
    pub fn in_degree(&self, node: &str) -> Option<usize> {
        self.in_degree.get(node).copied()
    }

    /// Outgoing edges of `node` in insertion order.
    ///
    /// Empty for sinks and unknown nodes.
    #[must_use]
    pub fn targets(&self, node: &str) -> &[String] {
        self.adjacency.get(node).map_or(&[], Vec::as_slice)
    }
}

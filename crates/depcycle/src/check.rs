//! Replay an edge list into a [`DependencyGraph`] and report the first cycle.

use crate::edges::{Edge, SourcedEdge};
use crate::graph::DependencyGraph;
use serde::Serialize;

/// Options controlling a replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckOptions {
    /// Stop feeding edges once a cycle has been reported.
    pub stop_at_first_cycle: bool,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            stop_at_first_cycle: true,
        }
    }
}

/// The insertion that first made the graph cyclic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CycleHit {
    /// 0-based position of the edge in the replayed sequence.
    pub index: usize,
    /// 1-based input line the edge came from.
    pub line: usize,
    /// The cycle-closing edge.
    pub edge: Edge,
}

/// Outcome of replaying an edge list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    /// Number of edges inserted into the graph.
    pub edges_processed: usize,
    /// Distinct nodes in the graph after the replay.
    pub node_count: usize,
    /// Edges in the graph after the replay, parallel edges included.
    pub edge_count: usize,
    /// First insertion that reported a cycle, if any.
    pub first_cycle: Option<CycleHit>,
}

impl CheckReport {
    /// Returns `true` if any insertion reported a cycle.
    #[must_use]
    pub fn is_cyclic(&self) -> bool {
        self.first_cycle.is_some()
    }
}

/// Feed `edges` in order into a fresh graph.
///
/// Every edge up to (and including) the first cycle-closing one is inserted.
/// With [`CheckOptions::stop_at_first_cycle`] unset, the rest are inserted
/// too; the graph stays cyclic, so only the first hit is recorded.
pub fn check_edges<'a, I>(edges: I, options: CheckOptions) -> CheckReport
where
    I: IntoIterator<Item = &'a SourcedEdge>,
{
    let mut graph = DependencyGraph::new();
    let mut first_cycle = None;
    let mut edges_processed = 0;

    for (index, sourced) in edges.into_iter().enumerate() {
        let edge = &sourced.edge;
        let cyclic = graph.add_edge_and_detect_cycle(edge.source.as_str(), edge.target.as_str());
        edges_processed += 1;

        if cyclic && first_cycle.is_none() {
            tracing::warn!(
                line = sourced.line,
                source = %edge.source,
                target = %edge.target,
                "Edge closes a dependency cycle"
            );
            first_cycle = Some(CycleHit {
                index,
                line: sourced.line,
                edge: edge.clone(),
            });
            if options.stop_at_first_cycle {
                break;
            }
        }
    }

    tracing::debug!(
        edges_processed,
        nodes = graph.node_count(),
        cyclic = first_cycle.is_some(),
        "Replay finished"
    );

    CheckReport {
        edges_processed,
        node_count: graph.node_count(),
        edge_count: graph.edge_count(),
        first_cycle,
    }
}

//! Edge-list input formats.
//!
//! Two line-oriented formats are supported:
//!
//! - **Text**: `source -> target` or `source target`, one edge per line.
//!   Blank lines and `#` comments are skipped.
//! - **JSONL**: `{"source": "a", "target": "b"}`, one object per line.
//!   Blank lines are skipped.
//!
//! Node identifiers must be non-empty and contain neither whitespace nor `->`.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// Arrow separating source and target in the text format.
pub const TEXT_ARROW: &str = "->";

/// Comment marker for the text format.
pub const TEXT_COMMENT: char = '#';

/// A single dependency edge read from input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// The dependent node.
    pub source: String,
    /// The node depended upon.
    pub target: String,
}

impl Edge {
    /// Create a new edge.
    #[must_use]
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {TEXT_ARROW} {}", self.source, self.target)
    }
}

/// An edge together with the input line it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcedEdge {
    /// 1-based line number in the input.
    pub line: usize,
    /// The parsed edge.
    pub edge: Edge,
}

/// Supported edge-list formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeFormat {
    /// `a -> b` or `a b` per line
    #[default]
    Text,
    /// One JSON object per line
    Jsonl,
}

impl fmt::Display for EdgeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeFormat::Text => write!(f, "text"),
            EdgeFormat::Jsonl => write!(f, "jsonl"),
        }
    }
}

/// Check that a node identifier is usable.
pub fn validate_node_id(id: &str) -> std::result::Result<(), String> {
    if id.is_empty() {
        return Err("Node identifier cannot be empty".to_string());
    }
    if id.chars().any(char::is_whitespace) {
        return Err(format!("Node identifier '{id}' contains whitespace"));
    }
    if id.contains(TEXT_ARROW) {
        return Err(format!("Node identifier '{id}' contains '{TEXT_ARROW}'"));
    }
    Ok(())
}

/// Parse a whole edge list in the given format.
///
/// Parsing stops at the first malformed line.
///
/// # Errors
///
/// Returns [`Error::Parse`] for a malformed text line or invalid node
/// identifier, and [`Error::Json`] for a JSONL line that is not an edge
/// object. Both carry the 1-based line number.
pub fn parse_edges(input: &str, format: EdgeFormat) -> Result<Vec<SourcedEdge>> {
    let mut edges = Vec::new();

    for (index, raw) in input.lines().enumerate() {
        let line = index + 1;
        let parsed = match format {
            EdgeFormat::Text => parse_text_line(raw, line)?,
            EdgeFormat::Jsonl => parse_jsonl_line(raw, line)?,
        };

        if let Some(edge) = parsed {
            edges.push(SourcedEdge { line, edge });
        }
    }

    tracing::debug!(format = %format, edges = edges.len(), "Parsed edge list");
    Ok(edges)
}

/// Read and parse an edge-list file.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read, otherwise the errors of
/// [`parse_edges`].
pub fn read_edges(path: &Path, format: EdgeFormat) -> Result<Vec<SourcedEdge>> {
    let input = fs::read_to_string(path)?;
    parse_edges(&input, format)
}

/// Parse one text-format line. `Ok(None)` for blank and comment lines.
fn parse_text_line(raw: &str, line: usize) -> Result<Option<Edge>> {
    let text = raw.trim();
    if text.is_empty() || text.starts_with(TEXT_COMMENT) {
        return Ok(None);
    }

    let parse_error = |message: String| Error::Parse { line, message };

    let (source, target) = match text.split_once(TEXT_ARROW) {
        Some((source, target)) => (source.trim(), target.trim()),
        None => {
            let mut parts = text.split_whitespace();
            match (parts.next(), parts.next(), parts.next()) {
                (Some(source), Some(target), None) => (source, target),
                _ => {
                    return Err(parse_error(format!(
                        "Expected 'source {TEXT_ARROW} target' or 'source target', got '{text}'"
                    )));
                }
            }
        }
    };

    validate_node_id(source).map_err(parse_error)?;
    validate_node_id(target).map_err(parse_error)?;
    Ok(Some(Edge::new(source, target)))
}

/// Parse one JSONL line. `Ok(None)` for blank lines.
fn parse_jsonl_line(raw: &str, line: usize) -> Result<Option<Edge>> {
    let text = raw.trim();
    if text.is_empty() {
        return Ok(None);
    }

    let edge: Edge =
        serde_json::from_str(text).map_err(|source| Error::Json { line, source })?;
    for id in [&edge.source, &edge.target] {
        validate_node_id(id).map_err(|message| Error::Parse { line, message })?;
    }
    Ok(Some(edge))
}

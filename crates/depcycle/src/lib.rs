//! depcycle - incremental dependency cycle detection.
//!
//! The core is [`DependencyGraph`], a directed graph built one edge at a
//! time that answers "is the graph cyclic now?" after every insertion using
//! Kahn's algorithm. The remaining modules read edge lists, replay them into
//! a graph and report the result for the `depcycle` binary.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod check;
pub mod cli;
pub mod config;
pub mod edges;
pub mod error;
pub mod graph;
pub mod output;

pub use error::{Error, Result};
pub use graph::DependencyGraph;

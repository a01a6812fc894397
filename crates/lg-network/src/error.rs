//! Topology error type.

use thiserror::Error;

use lg_core::{EdgeId, NodeId};

/// Errors produced by `lg-network`.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("edge {edge} references node {node}, which has not been added")]
    UnknownNode { edge: EdgeId, node: NodeId },

    #[error("node {0} added twice")]
    DuplicateNode(NodeId),

    #[error("edge {0} added twice")]
    DuplicateEdge(EdgeId),
}

pub type NetworkResult<T> = Result<T, NetworkError>;

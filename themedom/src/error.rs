use thiserror::Error;

use crate::document::NodeId;

/// Errors from structural document operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    #[error("node {0} does not exist")]
    UnknownNode(NodeId),

    #[error("node {0} is not connected to the document")]
    Detached(NodeId),

    #[error("the document root cannot be removed")]
    RootRemoval,
}

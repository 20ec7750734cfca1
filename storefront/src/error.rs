use thiserror::Error;

use themedom::{DomError, NodeId};

use crate::config::ConfigError;

/// Errors from host-facing [`Page`](crate::Page) operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PageError {
    #[error("invalid widget configuration: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Dom(#[from] DomError),

    #[error("no controller is attached to node {0}")]
    NoController(NodeId),

    #[error("controller on node {host} is not a {expected}")]
    WrongController {
        host: NodeId,
        expected: &'static str,
    },

    #[error("tab group has no title with index '{0}'")]
    UnknownTab(String),
}

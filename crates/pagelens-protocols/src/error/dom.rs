//! Document tree errors.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomError {
    #[error("Node not found: {0}")]
    NodeNotFound(usize),

    #[error("Node {0} is not an element")]
    NotAnElement(usize),

    #[error("Node {0} is not a child of node {1}")]
    NotAChild(usize, usize),

    #[error("Node {0} has no parent")]
    Detached(usize),

    #[error("Document has no body element")]
    MissingBody,

    #[error("Invalid tree operation: {0}")]
    InvalidOperation(String),
}

//! Errors raised by graph mutations that require their inputs to exist.

/// Errors that can occur while inserting into a [`Graph`](super::Graph).
///
/// Only insertion fails hard. Relationship queries and mutations between
/// possibly-absent nodes (`link`, `unlink`, `are_linked`, `remove`) report
/// a miss through their return value instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// A required data value was absent.
    #[error("Invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// A node that the operation requires could not be reached from the root.
    #[error("Node not found: {0}")]
    NotFound(String),
}

/// Result type alias for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GraphError::InvalidArgument("node data must be present");
        assert_eq!(err.to_string(), "Invalid argument: node data must be present");

        let err = GraphError::NotFound("\"A\"".to_string());
        assert_eq!(err.to_string(), "Node not found: \"A\"");
    }
}

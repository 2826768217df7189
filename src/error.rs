//! Error types for skein operations
//!
//! A stopped traversal is not an error here: early termination is reported
//! through [`Walk::Stopped`](crate::graph::Walk) so callers can tell a
//! deliberate stop apart from collected callback failures.

use crate::id::NodeId;
use thiserror::Error;

/// Errors reported by traversal callbacks, collected without aborting the
/// walk.
#[derive(Debug, Default)]
pub struct ErrorStack(Vec<SkeinError>);

impl ErrorStack {
    pub fn push(&mut self, err: SkeinError) {
        self.0.push(err);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn errors(&self) -> &[SkeinError] {
        &self.0
    }

    /// Fold the stack into a traversal outcome: `Ok` when nothing was
    /// collected, the aggregate error otherwise.
    pub fn into_result(self) -> Result<()> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(SkeinError::Callbacks(self))
        }
    }
}

impl std::fmt::Display for ErrorStack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for err in &self.0 {
            writeln!(f, "{}", err)?;
        }
        Ok(())
    }
}

/// Errors that can occur during skein operations
#[derive(Error, Debug)]
pub enum SkeinError {
    #[error("no path from {from} to {to}")]
    NoPath { from: NodeId, to: NodeId },

    #[error("node not found: {0}")]
    NodeNotFound(NodeId),

    #[error("traversal callbacks failed:\n{0}")]
    Callbacks(ErrorStack),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl SkeinError {
    /// Number of collected callback failures, zero for any other kind.
    pub fn callback_failures(&self) -> usize {
        match self {
            SkeinError::Callbacks(stack) => stack.len(),
            _ => 0,
        }
    }
}

/// Result type alias for skein operations
pub type Result<T> = std::result::Result<T, SkeinError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_stack_is_ok() {
        assert!(ErrorStack::default().into_result().is_ok());
    }

    #[test]
    fn test_stack_folds_into_aggregate() {
        let mut stack = ErrorStack::default();
        stack.push(SkeinError::Other("first".to_string()));
        stack.push(SkeinError::Other("second".to_string()));
        let err = stack.into_result().unwrap_err();
        assert_eq!(err.callback_failures(), 2);
    }

    #[test]
    fn test_stack_display_joins_messages() {
        let mut stack = ErrorStack::default();
        stack.push(SkeinError::Other("first".to_string()));
        stack.push(SkeinError::Other("second".to_string()));
        assert_eq!(stack.to_string(), "first\nsecond\n");
    }

    #[test]
    fn test_no_path_mentions_both_endpoints() {
        let from = NodeId::new();
        let to = NodeId::new();
        let msg = SkeinError::NoPath { from, to }.to_string();
        assert!(msg.contains(&from.to_string()));
        assert!(msg.contains(&to.to_string()));
    }
}

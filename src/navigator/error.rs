//! Error types for path navigation.

use std::fmt;

/// Errors that can occur while navigating a document tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    /// A segment addressing a sequence position is not a valid base-10
    /// integer.
    InvalidIndexSegment {
        /// The offending path segment.
        segment: String,
    },
    /// Delete was called with an empty path; there is no target to remove.
    EmptyDeletePath,
}

impl fmt::Display for NavigationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigationError::InvalidIndexSegment { segment } => {
                write!(f, "'{}' is not a valid sequence index", segment)
            }
            NavigationError::EmptyDeletePath => {
                write!(f, "delete requires a non-empty path")
            }
        }
    }
}

impl std::error::Error for NavigationError {}

use thiserror::Error;

/// Errors reported by tree operations.
///
/// Most of the failure modes of a binary tree are not errors here: queries on
/// an empty tree return zero, deleting an absent value does nothing and a
/// truncated flat array is reported through [`FlatArray::is_truncated`].
///
/// [`FlatArray::is_truncated`]: crate::FlatArray::is_truncated
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// The traversal order could not be recognized.
    #[error("unrecognized traversal order `{0}`")]
    InvalidTraversalKind(String),
    /// The operation needs a complete tree.
    #[error("the tree is not complete")]
    NotComplete,
}

/// Result alias for tree operations
pub type Result<T, E = TreeError> = std::result::Result<T, E>;

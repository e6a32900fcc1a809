use thiserror::Error;

/// Errors raised while building a tree or computing a root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MerkleError {
    #[error("Cannot build a merkle tree from an empty hash sequence")]
    EmptyInput,
}

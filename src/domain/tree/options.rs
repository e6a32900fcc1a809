/// Controls how [`MerkleTree::from_leaves`](super::MerkleTree::from_leaves) reads its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MerkleTreeOptions {
    /// Treat each leaf as raw data and double-hash it. When false every leaf
    /// must already be a 32 byte hash.
    pub hash_leaves: bool,
    /// Leaf count from which raw leaf hashing is spread over the rayon pool.
    pub parallel_threshold: usize,
}

impl Default for MerkleTreeOptions {
    fn default() -> Self {
        Self {
            hash_leaves: false,
            parallel_threshold: 1024,
        }
    }
}

use anyhow::Result;
use log::{debug, info, trace};
use rayon::prelude::*;
use std::marker::PhantomData;
use std::sync::Arc;
use std::time::Instant;

use super::hash::{sha256::Sha256Double, Hash256, HashMethod};
use crate::error::MerkleError;

pub mod level;
pub mod node;
pub mod options;

use level::{generate_leaves, level_up};
use node::HashNode;
use options::MerkleTreeOptions;

/// An immutable binary hash tree over an ordered sequence of hashes.
#[derive(Debug)]
pub struct MerkleTree<Method: HashMethod = Sha256Double> {
    root: Arc<HashNode>,
    depth: usize,
    leaf_count: usize,
    method: PhantomData<Method>,
}

pub type MerkleTreeSha256 = MerkleTree<Sha256Double>;

impl<Method: HashMethod> Clone for MerkleTree<Method> {
    fn clone(&self) -> Self {
        Self {
            root: Arc::clone(&self.root),
            depth: self.depth,
            leaf_count: self.leaf_count,
            method: PhantomData,
        }
    }
}

impl<Method: HashMethod> MerkleTree<Method> {
    /// Build a tree from already-hashed leaves.
    ///
    /// Levels are folded until a single node remains. The leaf level counts
    /// as depth 1, so a one element input yields a tree of depth 1 whose root
    /// is the input itself.
    pub fn from_hashes(hashes: &[Hash256]) -> Result<Self, MerkleError> {
        if hashes.is_empty() {
            return Err(MerkleError::EmptyInput);
        }

        let total_start = Instant::now();
        let mut nodes = generate_leaves(hashes);
        let mut depth = 1;

        while nodes.len() > 1 {
            nodes = level_up::<Method>(&nodes);
            depth += 1;
            trace!("Folded level {depth}: {} nodes", nodes.len());
        }

        let root = nodes.pop().ok_or(MerkleError::EmptyInput)?;
        info!(
            "Built merkle tree over {} leaves (depth {depth}) in {:?}",
            hashes.len(),
            total_start.elapsed()
        );

        Ok(Self {
            root,
            depth,
            leaf_count: hashes.len(),
            method: PhantomData,
        })
    }

    /// Build a tree from raw leaves data (will be double-hashed).
    pub fn from_leaves_data<T>(leaves: &[T]) -> Result<Self, MerkleError>
    where
        T: AsRef<[u8]> + Sync,
    {
        let hashes = hash_leaves_data::<Method, T>(leaves, &MerkleTreeOptions::default());
        Self::from_hashes(&hashes)
    }

    /// Build a tree from byte leaves, interpreting them according to `options`.
    pub fn from_leaves(leaves: &[Vec<u8>], options: &MerkleTreeOptions) -> Result<Self> {
        let hashes = if options.hash_leaves {
            hash_leaves_data::<Method, _>(leaves, options)
        } else {
            leaves
                .iter()
                .map(|leaf| Hash256::try_from(leaf.as_slice()))
                .collect::<Result<Vec<_>>>()?
        };
        Ok(Self::from_hashes(&hashes)?)
    }

    pub fn root(&self) -> &Arc<HashNode> {
        &self.root
    }

    pub fn root_hash(&self) -> Hash256 {
        self.root.hash()
    }

    pub fn root_hex(&self) -> String {
        self.root.hash().to_hex_prefixed()
    }

    /// Number of levels from the leaves to the root, both included.
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn leaf_count(&self) -> usize {
        self.leaf_count
    }

    /// Return the leaf hashes left to right, i.e. the sequence the tree was built from.
    pub fn leaf_hashes(&self) -> Vec<Hash256> {
        let mut out = Vec::with_capacity(self.leaf_count);
        let mut stack = vec![&self.root];

        while let Some(node) = stack.pop() {
            match node.children() {
                None => out.push(node.hash()),
                // the right slot repeats the left one
                Some((left, _)) if node.is_self_paired() => stack.push(left),
                Some((left, right)) => {
                    stack.push(right);
                    stack.push(left);
                }
            }
        }
        out
    }

    /// Check that every internal node hashes to the compression of its children.
    pub fn is_consistent(&self) -> bool {
        let mut stack = vec![&self.root];

        while let Some(node) = stack.pop() {
            let Some((left, right)) = node.children() else {
                continue;
            };
            if node.hash() != Method::hash_nodes(&left.hash(), &right.hash()) {
                debug!("Inconsistent node {}", node.hash());
                return false;
            }
            stack.push(left);
            if !node.is_self_paired() {
                stack.push(right);
            }
        }
        true
    }
}

fn hash_leaves_data<Method, T>(leaves: &[T], options: &MerkleTreeOptions) -> Vec<Hash256>
where
    Method: HashMethod,
    T: AsRef<[u8]> + Sync,
{
    let start = Instant::now();
    let hashes: Vec<Hash256> = if leaves.len() >= options.parallel_threshold {
        leaves
            .par_iter()
            .map(|leaf| Method::hash_leaf(leaf.as_ref()))
            .collect()
    } else {
        leaves
            .iter()
            .map(|leaf| Method::hash_leaf(leaf.as_ref()))
            .collect()
    };
    debug!("Hashing {} leaves took {:?}", leaves.len(), start.elapsed());
    hashes
}

/// Compute the root over `hashes` with the default double SHA-256 primitive.
pub fn compute_root(hashes: &[Hash256]) -> Result<Hash256, MerkleError> {
    compute_root_with::<Sha256Double>(hashes)
}

/// Compute the root over `hashes`. A single hash is its own root.
pub fn compute_root_with<Method: HashMethod>(hashes: &[Hash256]) -> Result<Hash256, MerkleError> {
    match hashes {
        [] => Err(MerkleError::EmptyInput),
        [only] => Ok(*only),
        _ => Ok(MerkleTree::<Method>::from_hashes(hashes)?.root_hash()),
    }
}

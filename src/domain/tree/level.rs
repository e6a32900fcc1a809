use log::trace;
use std::sync::Arc;

use super::node::HashNode;
use crate::domain::hash::{Hash256, HashMethod};

/// Wrap each input hash in a childless node, keeping input order.
pub fn generate_leaves(hashes: &[Hash256]) -> Vec<Arc<HashNode>> {
    hashes
        .iter()
        .map(|hash| Arc::new(HashNode::leaf(*hash)))
        .collect()
}

/// Fold one level into the next.
///
/// Nodes `2i` and `2i + 1` become the children of parent `i`. When the level
/// has an odd length the last node is paired with itself: both child slots
/// reference the same node. Nodes are never reordered, so the output has
/// `ceil(len / 2)` entries.
pub fn level_up<Method: HashMethod>(nodes: &[Arc<HashNode>]) -> Vec<Arc<HashNode>> {
    let mut next = Vec::with_capacity(nodes.len().div_ceil(2));
    for pair in nodes.chunks(2) {
        let left = &pair[0];
        // chunks(2) yields a single node only for the odd tail
        let right = pair.last().unwrap_or(left);
        if Arc::ptr_eq(left, right) {
            trace!("Self-pairing trailing node {}", left.hash());
        }
        next.push(Arc::new(HashNode::branch::<Method>(
            Arc::clone(left),
            Arc::clone(right),
        )));
    }
    next
}

use std::sync::Arc;

use crate::domain::hash::{Hash256, HashMethod};

/// An immutable tree node. Internal nodes own exactly two children; a
/// self-paired node holds the same child in both slots.
#[derive(Debug, PartialEq, Eq)]
pub struct HashNode {
    hash: Hash256,
    children: Option<(Arc<HashNode>, Arc<HashNode>)>,
}

impl HashNode {
    pub fn leaf(hash: Hash256) -> Self {
        Self {
            hash,
            children: None,
        }
    }

    /// Build the parent of `left` and `right`, hashing them in that order.
    pub fn branch<Method: HashMethod>(left: Arc<HashNode>, right: Arc<HashNode>) -> Self {
        Self {
            hash: Method::hash_nodes(&left.hash, &right.hash),
            children: Some((left, right)),
        }
    }

    pub fn hash(&self) -> Hash256 {
        self.hash
    }

    pub fn left(&self) -> Option<&Arc<HashNode>> {
        self.children.as_ref().map(|(left, _)| left)
    }

    pub fn right(&self) -> Option<&Arc<HashNode>> {
        self.children.as_ref().map(|(_, right)| right)
    }

    pub fn children(&self) -> Option<(&Arc<HashNode>, &Arc<HashNode>)> {
        self.children.as_ref().map(|(left, right)| (left, right))
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// True when both child slots point at the same node.
    pub fn is_self_paired(&self) -> bool {
        self.children
            .as_ref()
            .is_some_and(|(left, right)| Arc::ptr_eq(left, right))
    }
}

#[cfg(test)]
mod tests {
    use super::HashNode;
    use crate::domain::hash::{sha256::Sha256Double, HashMethod};
    use std::sync::Arc;

    #[test]
    fn test_leaf_has_no_children() {
        let leaf = HashNode::leaf(Sha256Double::hash_leaf(b"x"));
        assert!(leaf.is_leaf());
        assert!(leaf.left().is_none() && leaf.right().is_none());
        assert!(!leaf.is_self_paired());
    }

    #[test]
    fn test_branch_hashes_children_in_order() {
        let a = Arc::new(HashNode::leaf(Sha256Double::hash_leaf(b"a")));
        let b = Arc::new(HashNode::leaf(Sha256Double::hash_leaf(b"b")));
        let parent = HashNode::branch::<Sha256Double>(a.clone(), b.clone());

        assert!(!parent.is_leaf());
        assert!(!parent.is_self_paired());
        assert_eq!(
            parent.hash(),
            Sha256Double::hash_nodes(&a.hash(), &b.hash())
        );
        assert!(Arc::ptr_eq(parent.left().unwrap(), &a));
        assert!(Arc::ptr_eq(parent.right().unwrap(), &b));
    }

    #[test]
    fn test_self_pairing_shares_the_child() {
        let last = Arc::new(HashNode::leaf(Sha256Double::hash_leaf(b"last")));
        let parent = HashNode::branch::<Sha256Double>(last.clone(), last.clone());

        assert!(parent.is_self_paired());
        // one owner here plus the two slots in the parent
        assert_eq!(Arc::strong_count(&last), 3);
    }

    #[test]
    fn test_equal_content_is_not_self_pairing() {
        let hash = Sha256Double::hash_leaf(b"dup");
        let a = Arc::new(HashNode::leaf(hash));
        let b = Arc::new(HashNode::leaf(hash));
        let parent = HashNode::branch::<Sha256Double>(a, b);
        assert!(
            !parent.is_self_paired(),
            "Two distinct leaves with equal hashes are a normal pair"
        );
    }
}

use super::{Hash256, HashMethod, HASH_SIZE};
use sha2::{digest::FixedOutput, Digest, Sha256};

/// SHA-256 applied twice for both leaves and internal nodes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sha256Double;

impl HashMethod for Sha256Double {
    fn digest(data: &[u8]) -> Hash256 {
        let mut hasher = Sha256::new();
        hasher.update(data);
        let out = hasher.finalize_fixed();

        let mut bytes = [0u8; HASH_SIZE];
        bytes.copy_from_slice(&out);
        Hash256::new(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::Sha256Double;
    use crate::domain::hash::{Hash256, HashMethod};

    fn h(s: &str) -> Hash256 {
        Hash256::from_hex(s).unwrap()
    }

    #[test]
    fn test_single_digest_known_vector() {
        assert_eq!(
            Sha256Double::digest(b"abc"),
            h("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad")
        );
    }

    #[test]
    fn test_double_digest_known_vector() {
        // sha256(sha256("hello"))
        assert_eq!(
            Sha256Double::hash_leaf(b"hello"),
            h("9595c9df90075148eb06860365df33584b75bff782a510c6cd4883a419833d50")
        );
    }

    #[test]
    fn test_hash_nodes_is_double_digest_of_concatenation() {
        let left = Sha256Double::digest(b"left");
        let right = Sha256Double::digest(b"right");

        let mut concat = Vec::new();
        concat.extend_from_slice(left.as_bytes());
        concat.extend_from_slice(right.as_bytes());

        let once = Sha256Double::digest(&concat);
        let expected = Sha256Double::digest(once.as_bytes());
        assert_eq!(Sha256Double::hash_nodes(&left, &right), expected);
    }

    #[test]
    fn test_hash_nodes_is_not_commutative() {
        let a = Sha256Double::digest(b"a");
        let b = Sha256Double::digest(b"b");
        assert_ne!(
            Sha256Double::hash_nodes(&a, &b),
            Sha256Double::hash_nodes(&b, &a),
            "Children must be hashed left then right"
        );
    }
}

use anyhow::{anyhow, Result};
use std::fmt;

pub mod sha256;

/// Width in bytes of every hash handled by the tree.
pub const HASH_SIZE: usize = 32;

/// A fixed-width content hash. The canonical serialization is the raw bytes in array order.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Hash256([u8; HASH_SIZE]);

impl Hash256 {
    pub const fn new(bytes: [u8; HASH_SIZE]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; HASH_SIZE] {
        &self.0
    }

    pub fn to_hex_prefixed(self) -> String {
        format!("0x{}", hex::encode(self.0))
    }

    /// Parse a 64 character hex string, with or without a leading `0x`.
    pub fn from_hex(s: &str) -> Result<Self> {
        let digits = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(digits).map_err(|e| anyhow!("Invalid hash hex {s:?}: {e}"))?;
        Self::try_from(bytes.as_slice())
    }
}

impl From<[u8; HASH_SIZE]> for Hash256 {
    fn from(bytes: [u8; HASH_SIZE]) -> Self {
        Self(bytes)
    }
}

impl From<Hash256> for [u8; HASH_SIZE] {
    fn from(hash: Hash256) -> Self {
        hash.0
    }
}

impl TryFrom<&[u8]> for Hash256 {
    type Error = anyhow::Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        let array: [u8; HASH_SIZE] = bytes.try_into().map_err(|_| {
            anyhow!(
                "Hash must be {HASH_SIZE} bytes long, got {} bytes",
                bytes.len()
            )
        })?;
        Ok(Self(array))
    }
}

impl AsRef<[u8]> for Hash256 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl fmt::Debug for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash256({})", hex::encode(self.0))
    }
}

/// The hash primitive a tree is built with.
///
/// Implementors only provide a single application of the digest. Leaves and
/// internal nodes both go through the primitive twice.
pub trait HashMethod {
    /// One application of the underlying digest.
    fn digest(data: &[u8]) -> Hash256;

    fn double_digest(data: &[u8]) -> Hash256 {
        Self::digest(Self::digest(data).as_bytes())
    }

    /// Hash a leaf's raw data.
    fn hash_leaf(data: &[u8]) -> Hash256 {
        Self::double_digest(data)
    }

    /// Compress two child hashes into their parent. Order is always `left || right`.
    fn hash_nodes(left: &Hash256, right: &Hash256) -> Hash256 {
        let mut buf = [0u8; 2 * HASH_SIZE];
        buf[..HASH_SIZE].copy_from_slice(left.as_bytes());
        buf[HASH_SIZE..].copy_from_slice(right.as_bytes());
        Self::double_digest(&buf)
    }
}

#[cfg(test)]
mod tests {
    use super::{Hash256, HASH_SIZE};

    #[test]
    fn test_hex_round_trip_with_and_without_prefix() {
        let hash = Hash256::new([0xab; HASH_SIZE]);
        let hex = hash.to_string();
        assert_eq!(hex.len(), 2 * HASH_SIZE);
        assert_eq!(Hash256::from_hex(&hex).unwrap(), hash);
        assert_eq!(Hash256::from_hex(&hash.to_hex_prefixed()).unwrap(), hash);
    }

    #[test]
    fn test_from_hex_rejects_bad_input() {
        assert!(Hash256::from_hex("0xzz").is_err(), "Non-hex digits must fail");
        assert!(
            Hash256::from_hex("abcd").is_err(),
            "Short hex must fail the width check"
        );
    }

    #[test]
    fn test_try_from_slice_width() {
        let ok = Hash256::try_from(&[7u8; 32][..]).unwrap();
        assert_eq!(ok.as_bytes(), &[7u8; 32]);

        let err = Hash256::try_from(&[7u8; 31][..]).unwrap_err();
        assert!(err.to_string().contains("31 bytes"));
    }

    #[test]
    fn test_ordering_follows_bytes() {
        let mut low = [0u8; HASH_SIZE];
        let mut high = [0u8; HASH_SIZE];
        low[0] = 1;
        high[0] = 2;
        assert!(Hash256::from(low) < Hash256::from(high));
    }
}

use napi::bindgen_prelude::Uint8Array;

use super::{options::MerkleTreeOptionsJs, to_hashes, to_napi_error};
use crate::domain::tree::{options::MerkleTreeOptions, MerkleTreeSha256};

#[napi(js_name = "MerkleTree")]
pub struct MerkleTreeJs {
  inner: MerkleTreeSha256,
}

#[napi]
impl MerkleTreeJs {
  /// Build from 32 byte leaf hashes, in order.
  #[napi(factory)]
  pub fn from_hashes(hashes: Vec<Uint8Array>) -> napi::Result<Self> {
    let hashes = to_hashes(&hashes)?;
    let inner = MerkleTreeSha256::from_hashes(&hashes).map_err(to_napi_error)?;
    Ok(Self { inner })
  }

  /// Build from raw leaves, double-hashing each one first.
  #[napi(factory)]
  pub fn from_leaves(leaves: Vec<Uint8Array>) -> napi::Result<Self> {
    let options = MerkleTreeOptions {
      hash_leaves: true,
      ..Default::default()
    };
    Self::build(leaves, &options)
  }

  #[napi(factory)]
  pub fn from_leaves_with_options(
    leaves: Vec<Uint8Array>,
    options: &MerkleTreeOptionsJs,
  ) -> napi::Result<Self> {
    Self::build(leaves, &options.into())
  }

  fn build(leaves: Vec<Uint8Array>, options: &MerkleTreeOptions) -> napi::Result<Self> {
    let leaves: Vec<Vec<u8>> = leaves.iter().map(|l| l.to_vec()).collect();
    let inner = MerkleTreeSha256::from_leaves(&leaves, options).map_err(to_napi_error)?;
    Ok(Self { inner })
  }

  #[napi]
  pub fn root(&self) -> Uint8Array {
    self.inner.root_hash().as_bytes().to_vec().into()
  }

  #[napi]
  pub fn root_hex(&self) -> String {
    self.inner.root_hex()
  }

  #[napi]
  pub fn depth(&self) -> u32 {
    self.inner.depth() as u32
  }

  #[napi]
  pub fn leaf_count(&self) -> u32 {
    self.inner.leaf_count() as u32
  }

  #[napi]
  pub fn hashes(&self) -> Vec<Uint8Array> {
    self
      .inner
      .leaf_hashes()
      .iter()
      .map(|h| h.as_bytes().to_vec().into())
      .collect()
  }
}

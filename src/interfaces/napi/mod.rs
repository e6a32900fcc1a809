use std::{fmt::Display, panic};

use ::napi::bindgen_prelude::Uint8Array;

use crate::domain::{
  hash::{sha256::Sha256Double, Hash256, HashMethod},
  tree,
};

pub mod options;
pub mod tree_js;

#[napi]
pub fn init() {
  panic::set_hook(Box::new(|_| {}));
  crate::init_logger();
}

/// Double SHA-256 of `data`, the leaf hash used by `MerkleTree.fromLeaves`.
#[napi]
pub fn hash(data: Uint8Array) -> Uint8Array {
  Sha256Double::hash_leaf(&data).as_bytes().to_vec().into()
}

#[napi]
pub fn compute_root(hashes: Vec<Uint8Array>) -> ::napi::Result<Uint8Array> {
  let hashes = to_hashes(&hashes)?;
  let root = tree::compute_root(&hashes).map_err(to_napi_error)?;
  Ok(root.as_bytes().to_vec().into())
}

pub(crate) fn to_hashes(values: &[Uint8Array]) -> ::napi::Result<Vec<Hash256>> {
  values
    .iter()
    .map(|v| Hash256::try_from(&v[..]).map_err(to_napi_error))
    .collect()
}

pub(crate) fn to_napi_error(err: impl Display) -> ::napi::Error {
  ::napi::Error::from_reason(err.to_string())
}

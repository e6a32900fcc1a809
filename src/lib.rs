#![deny(clippy::all)]

#[cfg(feature = "napi")]
#[macro_use]
extern crate napi_derive;

mod domain;
mod error;
#[cfg(feature = "napi")]
mod interfaces;

pub use domain::hash::{sha256::Sha256Double, Hash256, HashMethod, HASH_SIZE};
pub use domain::tree::{
  compute_root, compute_root_with,
  level::{generate_leaves, level_up},
  node::HashNode,
  options::MerkleTreeOptions,
  MerkleTree, MerkleTreeSha256,
};
pub use error::MerkleError;

/// Install the `env_logger` backend for the `log` facade.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logger() {
  let _ = env_logger::try_init();
}

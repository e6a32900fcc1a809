use crate::domain::tree::options::MerkleTreeOptions;

#[napi(js_name = "MerkleTreeOptions")]
#[derive(Clone)]
pub struct MerkleTreeOptionsJs {
  pub hash_leaves: bool,
  pub parallel_threshold: u32,
}

impl From<&MerkleTreeOptionsJs> for MerkleTreeOptions {
  fn from(options: &MerkleTreeOptionsJs) -> Self {
    Self {
      hash_leaves: options.hash_leaves,
      parallel_threshold: options.parallel_threshold as usize,
    }
  }
}

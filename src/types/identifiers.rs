use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Content hash identity of a loaded catalog + keyword list.
///
/// Stable across reloads of identical data, so hosts can use it as a
/// persistence or cache-invalidation key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CatalogVersion(String);

impl CatalogVersion {
    pub fn from_content(content: &[u8]) -> Self {
        let hash = Sha256::digest(content);
        CatalogVersion(format!("sha256:{}", hex::encode(hash)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

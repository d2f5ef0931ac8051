//! Domain-separated SHA-256 and the `sha256:<hex>` digest string.
//!
//! Every published digest (topology, trace, snapshot, policy, fixture file)
//! is produced by [`canonical_hash`]; nothing else in the workspace touches
//! `sha2` directly except the trace chain, which folds raw
//! [`domain_digest`] outputs.

use sha2::{Digest, Sha256};

pub use super::hash_domain::HashDomain;

const ALGORITHM: &str = "sha256";
const HEX_LEN: usize = 64;

/// A SHA-256 digest rendered as `sha256:<64 lowercase hex chars>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentHash(String);

impl ContentHash {
    /// Accept a previously rendered digest. Anything but `sha256:` followed
    /// by exactly 64 lowercase hex characters is refused.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let hex = s.strip_prefix(ALGORITHM)?.strip_prefix(':')?;
        let well_formed = hex.len() == HEX_LEN
            && hex
                .bytes()
                .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b));
        well_formed.then(|| Self(s.to_owned()))
    }

    fn from_digest(bytes: &[u8]) -> Self {
        Self(format!("{ALGORITHM}:{}", hex::encode(bytes)))
    }

    /// Always `"sha256"`.
    #[must_use]
    pub fn algorithm(&self) -> &str {
        ALGORITHM
    }

    #[must_use]
    pub fn hex_digest(&self) -> &str {
        &self.0[ALGORITHM.len() + 1..]
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ContentHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// SHA-256 of the domain separator followed by `data`.
#[must_use]
pub fn domain_digest(domain: HashDomain, data: &[u8]) -> [u8; 32] {
    let digest = Sha256::new()
        .chain_update(domain.as_bytes())
        .chain_update(data)
        .finalize();
    let mut out = [0u8; 32];
    out.copy_from_slice(&digest);
    out
}

/// [`domain_digest`] rendered as a [`ContentHash`].
#[must_use]
pub fn canonical_hash(domain: HashDomain, data: &[u8]) -> ContentHash {
    ContentHash::from_digest(&domain_digest(domain, data))
}

//! Proof module: canonical JSON, domain separation, content hashing.
//!
//! Nothing in `proof` knows about graphs or search.

pub mod canon;
pub mod hash;
pub mod hash_domain;

//! Locks the domain-separator registry.
//!
//! Every digest the workspace publishes is prefixed by one of these byte
//! strings, so renaming or duplicating one silently changes (or aliases)
//! every stored digest in that domain.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use pathlab_kernel::proof::hash::{canonical_hash, HashDomain};
use sha2::{Digest, Sha256};

const SCANNED_CRATES: [&str; 3] = ["kernel", "search", "harness"];

#[test]
fn registry_is_closed_and_well_formed() {
    assert_eq!(
        HashDomain::ALL.len(),
        6,
        "domain added or removed: update this lock together with the registry"
    );

    let distinct: BTreeSet<&[u8]> = HashDomain::ALL.iter().map(HashDomain::as_bytes).collect();
    assert_eq!(distinct.len(), HashDomain::ALL.len(), "two domains share bytes");

    for domain in HashDomain::ALL {
        let text = std::str::from_utf8(domain.as_bytes()).unwrap();
        let inner = text
            .strip_prefix("PATHLAB::")
            .and_then(|rest| rest.strip_suffix("::V1\0"))
            .unwrap_or_else(|| panic!("{domain}: malformed separator {text:?}"));
        assert!(
            !inner.is_empty() && inner.chars().all(|c| c.is_ascii_uppercase() || c == '_'),
            "{domain}: separator body {inner:?} is not SCREAMING_SNAKE"
        );
    }
}

fn rust_sources(dir: &Path, out: &mut Vec<PathBuf>) {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return;
    };
    for path in entries.flatten().map(|e| e.path()) {
        if path.is_dir() {
            rust_sources(&path, out);
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            out.push(path);
        }
    }
}

/// Lines outside the registry module that spell a separator literal.
fn stray_separator_literals() -> (usize, Vec<String>) {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("../..");
    let mut files = Vec::new();
    for krate in SCANNED_CRATES {
        rust_sources(&root.join(krate).join("src"), &mut files);
    }
    files.retain(|p| !p.ends_with("proof/hash_domain.rs"));

    let mut hits = Vec::new();
    for file in &files {
        let Ok(body) = std::fs::read_to_string(file) else {
            continue;
        };
        for (n, line) in body.lines().enumerate() {
            let code = line.trim_start();
            if !code.starts_with("//") && code.contains("b\"PATHLAB::") {
                hits.push(format!("{}:{}", file.display(), n + 1));
            }
        }
    }
    (files.len(), hits)
}

#[test]
fn separators_are_spelled_only_in_the_registry() {
    let (scanned, hits) = stray_separator_literals();
    assert!(scanned > 0, "source scan found nothing; paths are wrong");
    assert!(hits.is_empty(), "separator literals outside the registry:\n{}", hits.join("\n"));
}

#[test]
fn digest_is_plain_sha256_over_prefix_and_payload() {
    let payload = br#"{"edges":[],"nodes":[]}"#;
    for &domain in HashDomain::ALL {
        let independent = Sha256::new()
            .chain_update(domain.as_bytes())
            .chain_update(payload)
            .finalize();
        assert_eq!(
            canonical_hash(domain, payload).as_str(),
            format!("sha256:{}", hex::encode(independent)),
            "{domain}"
        );
    }
}

use golli_types::EntityId;

/// Deterministic 64-bit content fingerprint.
///
/// The fingerprint is the first 8 bytes (little-endian) of the BLAKE3 digest
/// of the input. It takes no key and is stable across runs, processes and
/// platforms, so it is suitable as a content address but not as a MAC.
///
/// # Known limitation
///
/// Truncating to 64 bits means distinct inputs can collide. There is no
/// collision resolution: two entities whose sources collide share an id, and
/// a repository lookup returns whichever was stored first.
pub struct IdentityHasher;

impl IdentityHasher {
    /// Fingerprint raw bytes.
    pub fn hash(data: &[u8]) -> EntityId {
        Self::finish(blake3::hash(data))
    }

    /// Fingerprint a string's UTF-8 bytes.
    pub fn hash_str(s: &str) -> EntityId {
        Self::hash(s.as_bytes())
    }

    /// Fingerprint the concatenation of `parts` without allocating it.
    ///
    /// `hash_parts(&[a, b])` equals `hash(&[a, b].concat())`.
    pub fn hash_parts(parts: &[&[u8]]) -> EntityId {
        let mut hasher = blake3::Hasher::new();
        for part in parts {
            hasher.update(part);
        }
        Self::finish(hasher.finalize())
    }

    fn finish(digest: blake3::Hash) -> EntityId {
        let mut head = [0u8; 8];
        head.copy_from_slice(&digest.as_bytes()[..8]);
        u64::from_le_bytes(head)
    }
}

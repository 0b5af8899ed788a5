use async_trait::async_trait;
use thiserror::Error;

/// Durable key-value storage errors.
#[derive(Debug, Error)]
pub enum KeyValueStorageError {
    #[error("storage io failed: {0}")]
    Io(String),

    #[error("stored value is corrupt: {0}")]
    Corrupt(String),

    #[error("storage backend failed: {0}")]
    Backend(String),
}

/// Plain durable key-value storage used by the state persistor.
///
/// Callers treat `get` failures as "absent".
#[async_trait]
pub trait KeyValueStoragePort: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, KeyValueStorageError>;

    async fn put(&self, key: &str, value: &str) -> Result<(), KeyValueStorageError>;

    async fn remove(&self, key: &str) -> Result<(), KeyValueStorageError>;
}

/// Encode a storage key as a file-name-safe stem.
///
/// ASCII alphanumerics, `-` and `_` are kept; every other byte becomes
/// `%XX`. The encoding is reversible, so distinct keys never share a file.
pub fn encode_storage_key(key: &str) -> String {
    let mut encoded = String::with_capacity(key.len());
    for byte in key.bytes() {
        if byte.is_ascii_alphanumeric() || byte == b'-' || byte == b'_' {
            encoded.push(byte as char);
        } else {
            encoded.push('%');
            encoded.push_str(&hex::encode_upper([byte]));
        }
    }
    encoded
}

/// Inverse of [`encode_storage_key`]. `None` for malformed input.
pub fn decode_storage_key(encoded: &str) -> Option<String> {
    let mut bytes = Vec::with_capacity(encoded.len());
    let mut rest = encoded.as_bytes();
    while let Some((&first, tail)) = rest.split_first() {
        if first == b'%' {
            let digits = tail.get(..2)?;
            bytes.extend(hex::decode(digits).ok()?);
            rest = &tail[2..];
        } else {
            bytes.push(first);
            rest = tail;
        }
    }
    String::from_utf8(bytes).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn similar_keys_get_distinct_names() {
        assert_eq!(encode_storage_key("persist:debug"), "persist%3Adebug");
        assert_eq!(encode_storage_key("persist_debug"), "persist_debug");
        assert_ne!(
            encode_storage_key("persist:debug"),
            encode_storage_key("persist_debug")
        );
        assert_ne!(encode_storage_key("a%3A"), encode_storage_key("a:"));
    }

    #[test]
    fn encoding_is_reversible() {
        for key in ["persist:preferences", "a/b\\c", "..", "100%", "clé"] {
            let encoded = encode_storage_key(key);
            assert!(encoded
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b"-_%".contains(&b)));
            assert_eq!(decode_storage_key(&encoded).as_deref(), Some(key));
        }
        assert_eq!(decode_storage_key("bad%4"), None);
    }
}

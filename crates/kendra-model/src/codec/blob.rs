//! Binary document content.

use std::fmt;

use base64::prelude::*;
use serde::{Deserialize, Serialize};

/// Raw bytes carried inline in a request, encoded as standard base64 on the wire.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Blob(Vec<u8>);

impl Blob {
    /// Creates a blob from raw bytes.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// Returns the raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns the number of raw bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether the blob holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consumes the blob and returns the raw bytes.
    pub fn into_inner(self) -> Vec<u8> {
        self.0
    }

    /// Encodes the bytes as a base64 string.
    pub fn encode(&self) -> String {
        BASE64_STANDARD.encode(&self.0)
    }
}

impl fmt::Debug for Blob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Blob({} bytes)", self.0.len())
    }
}

impl From<Vec<u8>> for Blob {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for Blob {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl From<&str> for Blob {
    fn from(text: &str) -> Self {
        Self(text.as_bytes().to_vec())
    }
}

impl From<Blob> for String {
    fn from(blob: Blob) -> Self {
        blob.encode()
    }
}

impl TryFrom<String> for Blob {
    type Error = base64::DecodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        BASE64_STANDARD.decode(value).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blob_wire_encoding() {
        let blob = Blob::from("hello kendra");
        let json = serde_json::to_string(&blob).unwrap();
        assert_eq!(json, r#""aGVsbG8ga2VuZHJh""#);

        let decoded: Blob = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.as_bytes(), b"hello kendra");
    }

    #[test]
    fn test_blob_rejects_invalid_base64() {
        assert!(serde_json::from_str::<Blob>(r#""not base64!""#).is_err());
    }

    #[test]
    fn test_blob_debug_hides_content() {
        let blob = Blob::new(vec![0u8; 16]);
        assert_eq!(format!("{blob:?}"), "Blob(16 bytes)");
    }
}

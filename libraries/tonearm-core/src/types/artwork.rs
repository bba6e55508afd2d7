use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// Artwork attached to a single track.
///
/// Owned by exactly one [`Track`](crate::Track) (or by the transient
/// response that carries it); only the folder path used to produce
/// folder-level artwork is ever cached, never the bytes themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artwork {
    /// Raw image bytes
    pub data: Vec<u8>,
    /// MIME type (e.g., "image/jpeg", "image/png")
    pub mime_type: String,
}

impl Artwork {
    /// Create new artwork data
    pub fn new(data: Vec<u8>, mime_type: String) -> Self {
        Self { data, mime_type }
    }

    /// Get the data as a base64-encoded string
    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.data)
    }
}

// Wire format: `{"data": "<base64>", "mime": "image/jpeg"}`, consumed by
// the web player as a data URL.
impl Serialize for Artwork {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Artwork", 2)?;
        state.serialize_field("data", &self.to_base64())?;
        state.serialize_field("mime", &self.mime_type)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base64_encoding() {
        let artwork = Artwork::new(vec![1, 2, 3], "image/png".to_string());
        assert_eq!(artwork.to_base64(), "AQID");
    }

    #[test]
    fn serializes_with_inlined_data() {
        let artwork = Artwork::new(vec![0xFF, 0xD8, 0xFF], "image/jpeg".to_string());
        let value = serde_json::to_value(&artwork).unwrap();
        assert_eq!(value["data"], "/9j/");
        assert_eq!(value["mime"], "image/jpeg");
    }
}

use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub const BYTES_PER_MB: u64 = 1024 * 1024;

/// Content identifier returned by the storage service.
///
/// Opaque: never parsed, only guaranteed to be non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cid(String);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("content identifier must not be empty")]
pub struct EmptyCid;

impl Cid {
    /// Wraps a raw identifier, rejecting blank values
    pub fn new(value: impl Into<String>) -> Result<Self, EmptyCid> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(EmptyCid);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TryFrom<String> for Cid {
    type Error = EmptyCid;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Cid> for String {
    fn from(cid: Cid) -> Self {
        cid.0
    }
}

impl fmt::Display for Cid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A file handed to the uploader by the caller
#[derive(Debug, Clone)]
pub struct UploadableFile {
    pub name: String,
    pub mime_type: String,
    data: Bytes,
}

impl UploadableFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, data: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            data: data.into(),
        }
    }

    /// Payload size in bytes
    pub fn size(&self) -> u64 {
        self.data.len() as u64
    }

    pub fn data(&self) -> &Bytes {
        &self.data
    }
}

/// File metadata captured alongside every upload attempt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileMeta {
    pub name: String,
    #[serde(rename = "type")]
    pub mime_type: String,
    pub size: u64,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
}

impl FileMeta {
    /// Snapshots the file's attributes, stamped with the current time
    pub fn capture(file: &UploadableFile) -> Self {
        Self {
            name: file.name.clone(),
            mime_type: file.mime_type.clone(),
            size: file.size(),
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadDetail {
    pub cid: Option<Cid>,
    pub file: FileMeta,
}

impl UploadDetail {
    pub fn is_stored(&self) -> bool {
        self.cid.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cid_rejects_blank() {
        assert_eq!(Cid::new(""), Err(EmptyCid));
        assert_eq!(EmptyCid.to_string(), "content identifier must not be empty");
        assert_eq!(Cid::new("   "), Err(EmptyCid));
        assert_eq!(Cid::new("bafkreid").unwrap().as_str(), "bafkreid");
    }

    #[test]
    fn test_cid_deserialize_rejects_empty_string() {
        assert!(serde_json::from_str::<Cid>("\"\"").is_err());
        let cid: Cid = serde_json::from_str("\"bafybeigdyr3f\"").unwrap();
        assert_eq!(cid.to_string(), "bafybeigdyr3f");
    }

    #[test]
    fn test_file_meta_copies_attributes() {
        let file = UploadableFile::new("a.png", "image/png", vec![0u8; 100]);
        let meta = FileMeta::capture(&file);

        assert_eq!(meta.name, "a.png");
        assert_eq!(meta.mime_type, "image/png");
        assert_eq!(meta.size, 100);
    }

    #[test]
    fn test_detail_serialization_shape() {
        let file = UploadableFile::new("a.png", "image/png", vec![1u8; 3]);
        let detail = UploadDetail {
            cid: None,
            file: FileMeta::capture(&file),
        };

        let json = serde_json::to_value(&detail).unwrap();
        assert!(json["cid"].is_null());
        assert_eq!(json["file"]["type"], "image/png");
        assert_eq!(json["file"]["size"], 3);
        assert!(json["file"]["created_at"].is_i64());
    }
}

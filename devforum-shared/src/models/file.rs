use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Metadata for an uploaded attachment.
///
/// `is_safe` is only meaningful once `is_malware_scanned` is set; until then
/// the server refuses downloads.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    #[serde(default)]
    pub post_id: Option<Uuid>,
    #[serde(default)]
    pub thread_id: Option<Uuid>,
    /// Name on disk, assigned by the server.
    pub filename: String,
    pub original_filename: String,
    pub file_type: String,
    pub file_size: i64,
    #[serde(default)]
    pub is_malware_scanned: bool,
    #[serde(default)]
    pub is_safe: bool,
    #[serde(default)]
    pub download_count: i32,
    pub created_at: DateTime<Utc>,
}

impl FileRecord {
    /// Whether the attachment has been scanned and found clean.
    #[must_use]
    pub const fn is_downloadable(&self) -> bool {
        self.is_malware_scanned && self.is_safe
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_file_record_downloadable_requires_scan() {
        let mut record: FileRecord = serde_json::from_value(json!({
            "id": "f47ac10b-58cc-4372-a567-0e02b2c3d479",
            "user_id": "3b241101-e2bb-4255-8caf-4136c566a962",
            "filename": "a1b2.zip",
            "original_filename": "tools.zip",
            "file_type": "application/zip",
            "file_size": 1024,
            "is_safe": true,
            "created_at": "2024-03-01T12:00:00Z"
        }))
        .unwrap();

        assert!(!record.is_downloadable());
        record.is_malware_scanned = true;
        assert!(record.is_downloadable());
    }
}

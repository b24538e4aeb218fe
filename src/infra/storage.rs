use crate::error::{Result, ScraperError};
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Storage seam for the published collection. The pipeline only ever does a
/// single unconditional PUT; tests substitute an in-memory implementation.
#[async_trait]
pub trait BucketStore: Send + Sync {
    async fn put_object(&self, key: &str, bytes: Vec<u8>, content_type: &str) -> Result<()>;
}

/// S3-backed store publishing into a fixed bucket.
pub struct S3BucketStore {
    client: Client,
    bucket: String,
}

impl S3BucketStore {
    pub async fn new(bucket: impl Into<String>) -> Self {
        let config = aws_config::load_defaults(BehaviorVersion::latest()).await;
        Self {
            client: Client::new(&config),
            bucket: bucket.into(),
        }
    }
}

#[async_trait]
impl BucketStore for S3BucketStore {
    async fn put_object(&self, key: &str, bytes: Vec<u8>, content_type: &str) -> Result<()> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(bytes))
            .content_type(content_type)
            .send()
            .await
            .map_err(|e| ScraperError::Storage {
                message: e.to_string(),
            })?;
        Ok(())
    }
}

/// Dry-run sink: write the collection to a local JSON file instead of S3 so
/// a run can be inspected without credentials.
pub fn persist_to_json(entries: &[Value], feed_name: &str, output_dir: &str) -> Result<String> {
    fs::create_dir_all(output_dir)?;

    let timestamp = chrono::Utc::now().format("%Y%m%d_%H%M%S");
    let filename = format!("{feed_name}_{timestamp}.json");
    let filepath = Path::new(output_dir).join(&filename);

    let json_content = serde_json::to_string_pretty(entries)?;
    fs::write(&filepath, json_content)?;

    Ok(filepath.to_string_lossy().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_persist_to_json_writes_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let entries = vec![json!({"title": "Export University 101"})];

        let path = persist_to_json(&entries, "xml", dir.path().to_str().unwrap()).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        let parsed: Vec<Value> = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed, entries);
        assert!(path.contains("xml_"));
    }
}

//! Model artifact fetcher
//!
//! Downloads the serialized model from an S3-compatible bucket into a
//! local directory. One shot: no retry, no integrity check; any failure
//! propagates to the caller.

pub mod config;
pub mod signing;

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::info;
use url::Url;

pub use config::FetchConfig;

use crate::utils::error::{IrisError, Result};

/// Object key of the model artifact in the bucket
pub const DEFAULT_OBJECT_KEY: &str = "iris_trained_model.pkl";

/// Path-style object URL: `{endpoint}/{bucket}/{key}`
fn object_url(config: &FetchConfig, key: &str) -> Result<Url> {
    let raw = format!(
        "{}/{}/{}",
        config.endpoint_url.trim_end_matches('/'),
        config.bucket_name,
        key
    );
    Url::parse(&raw).map_err(|e| IrisError::Config(format!("invalid object URL {}: {}", raw, e)))
}

/// Download `key` from the configured bucket into `dest_dir`
///
/// Creates `dest_dir` if absent and writes the object under its own
/// name. Returns the path of the written file.
pub async fn download_object(config: &FetchConfig, key: &str, dest_dir: &Path) -> Result<PathBuf> {
    let url = object_url(config, key)?;

    fs::create_dir_all(dest_dir)?;

    let signed = signing::sign_get(
        &url,
        &config.aws_access_key_id,
        &config.aws_secret_access_key,
        &config.region,
        &Utc::now(),
    );

    info!("Fetching {} from bucket {}", key, config.bucket_name);

    let client = reqwest::Client::new();
    let response = client
        .get(url.clone())
        .header("host", signed.host.as_str())
        .header("x-amz-date", signed.amz_date.as_str())
        .header("x-amz-content-sha256", signed.content_sha256.as_str())
        .header("authorization", signed.authorization.as_str())
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(IrisError::Fetch(format!(
            "GET {} returned {}: {}",
            url,
            status,
            body.trim()
        )));
    }

    let bytes = response.bytes().await?;
    let dest = dest_dir.join(key);
    fs::write(&dest, &bytes)?;

    info!("Wrote {} bytes to {}", bytes.len(), dest.display());
    Ok(dest)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(endpoint: &str) -> FetchConfig {
        FetchConfig {
            endpoint_url: endpoint.to_string(),
            aws_access_key_id: "minio".to_string(),
            aws_secret_access_key: "minio123".to_string(),
            bucket_name: "models".to_string(),
            region: "us-east-1".to_string(),
        }
    }

    #[test]
    fn test_object_url_path_style() {
        let url = object_url(&test_config("http://localhost:9000"), DEFAULT_OBJECT_KEY).unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:9000/models/iris_trained_model.pkl"
        );
    }

    #[test]
    fn test_object_url_trailing_slash_endpoint() {
        let url = object_url(&test_config("http://localhost:9000/"), DEFAULT_OBJECT_KEY).unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:9000/models/iris_trained_model.pkl"
        );
    }

    #[test]
    fn test_object_url_rejects_garbage_endpoint() {
        let result = object_url(&test_config("not a url"), DEFAULT_OBJECT_KEY);
        assert!(matches!(result, Err(IrisError::Config(_))));
    }
}

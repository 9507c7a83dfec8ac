//! Remote scanner: uploads files to the scanning API

use std::path::Path;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;

use super::{ScanError, Scanner};
use crate::config::ApiConfig;
use crate::verdict::{ParseVerdictError, Verdict};

/// Header carrying the API key
pub const API_KEY_HEADER: &str = "X-API-Key";

/// Header carrying the scanned file's base name
pub const FILE_NAME_HEADER: &str = "X-File-Name";

/// Success body of `POST /scan`. Extra fields are ignored.
#[derive(Debug, Deserialize)]
struct ScanResponse {
    verdict: String,
}

/// Client for `POST {base_url}/scan`
#[derive(Debug, Clone)]
pub struct RemoteScanner {
    client: reqwest::Client,
    scan_url: String,
    api_key: String,
}

impl RemoteScanner {
    /// Build a scanner with a shared HTTP client
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: &ApiConfig) -> Result<Self, ScanError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("malscan/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            scan_url: config.scan_url(),
            api_key: config.api_key.clone(),
        })
    }

    #[must_use]
    pub fn scan_url(&self) -> &str {
        &self.scan_url
    }
}

#[async_trait]
impl Scanner for RemoteScanner {
    async fn scan_file(&self, path: &Path) -> Result<Verdict, ScanError> {
        let body = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|name| header_file_name(&name.to_string_lossy()))
            .unwrap_or_default();

        let response = self
            .client
            .post(&self.scan_url)
            .header(CONTENT_TYPE, "application/octet-stream")
            .header(API_KEY_HEADER, &self.api_key)
            .header(FILE_NAME_HEADER, file_name)
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScanError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let bytes = response.bytes().await?;
        parse_response(&bytes)
    }

    fn name(&self) -> &'static str {
        "api"
    }
}

/// `X-File-Name` is only a hint, so control characters that are not
/// allowed in a header value are replaced rather than failing the upload.
pub(crate) fn header_file_name(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_control() { '_' } else { c })
        .collect()
}

/// Decode a success body. Verdicts outside the known four are errors.
pub(crate) fn parse_response(body: &[u8]) -> Result<Verdict, ScanError> {
    let response: ScanResponse = serde_json::from_slice(body).map_err(ScanError::Decode)?;
    response
        .verdict
        .parse()
        .map_err(|e: ParseVerdictError| ScanError::UnknownVerdict(e.0))
}

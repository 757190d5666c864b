//! Resume fetcher: the single read of the resume document.
//!
//! One attempt, no retry. Non-success HTTP status and I/O failures are
//! transport errors; a body that is not a JSON object is a parse error.

use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info};

use crate::errors::FolioError;
use crate::models::ResumeDocument;

/// Where the resume document comes from.
#[async_trait]
pub trait ResumeSource: Send + Sync {
    async fn load(&self) -> Result<ResumeDocument, FolioError>;

    /// Human-readable location for logs.
    fn location(&self) -> &str;
}

/// GETs the document over HTTP.
pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    /// `timeout: None` waits indefinitely.
    pub fn new(url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, FolioError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            url: url.into(),
        })
    }
}

#[async_trait]
impl ResumeSource for HttpSource {
    async fn load(&self) -> Result<ResumeDocument, FolioError> {
        debug!("GET {}", self.url);
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FolioError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        info!("Fetched {} bytes from {}", body.len(), self.url);
        parse_document(&body)
    }

    fn location(&self) -> &str {
        &self.url
    }
}

/// Reads the document from the local filesystem.
pub struct FileSource {
    path: PathBuf,
    display: String,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let display = path.display().to_string();
        Self { path, display }
    }
}

#[async_trait]
impl ResumeSource for FileSource {
    async fn load(&self) -> Result<ResumeDocument, FolioError> {
        let body = tokio::fs::read(&self.path).await?;
        info!("Read {} bytes from {}", body.len(), self.display);
        parse_document(&body)
    }

    fn location(&self) -> &str {
        &self.display
    }
}

/// Picks a source for `location`: `http://` and `https://` go over the
/// network, anything else is a filesystem path.
pub fn source_for(
    location: &str,
    timeout: Option<Duration>,
) -> Result<Box<dyn ResumeSource>, FolioError> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Ok(Box::new(HttpSource::new(location, timeout)?))
    } else {
        Ok(Box::new(FileSource::new(location)))
    }
}

/// Parses a response body into a document. The top level must be an object;
/// `null` and other scalars count as a missing document.
pub fn parse_document(body: &[u8]) -> Result<ResumeDocument, FolioError> {
    let value: Value = serde_json::from_slice(body)?;
    if !value.is_object() {
        return Err(FolioError::NotADocument(json_type_name(&value).to_string()));
    }
    Ok(serde_json::from_value(value)?)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

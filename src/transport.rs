//! The request seam shared by every resource client.
//!
//! Resource clients only assemble a verb, a path, an optional body and a
//! parameter bag. Everything else (connection state, credentials, the
//! network call itself) lives behind [`Transport`].

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::params::QueryParams;

/// Performs a single request against the Lockstep API.
///
/// [`LockstepClient`](crate::LockstepClient) is the bundled implementation.
/// Anything else that can answer `request` (a proxy, a recording test double)
/// can drive the resource clients as well.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send `method` to `path` with the given body and query parameters.
    ///
    /// `path` is rooted at the API base (e.g. `/api/v1/Companies/query`).
    ///
    /// # Errors
    ///
    /// Implementations surface network failures, error statuses and anything
    /// else that prevents a response from being produced.
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<RequestBody>,
        params: QueryParams,
    ) -> Result<ApiResponse>;
}

/// Body of an outgoing request.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// A JSON document, already in wire casing.
    Json(serde_json::Value),
    /// A single file sent as `multipart/form-data`.
    File(FileUpload),
}

impl RequestBody {
    /// The JSON payload, if this is a JSON body.
    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::File(_) => None,
        }
    }
}

/// A file to upload.
#[derive(Clone, PartialEq)]
pub struct FileUpload {
    /// File name reported to the server.
    pub file_name: String,
    /// Raw file contents.
    pub contents: Vec<u8>,
}

impl std::fmt::Debug for FileUpload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileUpload")
            .field("file_name", &self.file_name)
            .field("len", &self.contents.len())
            .finish()
    }
}

impl FileUpload {
    /// Read a file from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub async fn from_path(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());
        Ok(Self {
            file_name,
            contents,
        })
    }
}

/// A response exactly as the transport received it.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl ApiResponse {
    /// Build a response from its parts.
    pub fn new(status: StatusCode, headers: HeaderMap, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Drain a reqwest response.
    pub(crate) async fn from_response(response: reqwest::Response) -> Result<Self> {
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?.to_vec();
        Ok(Self::new(status, headers, body))
    }

    /// HTTP status code.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Response headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Raw response body.
    pub fn bytes(&self) -> &[u8] {
        &self.body
    }

    /// Consume the response and return the raw body.
    pub fn into_bytes(self) -> Vec<u8> {
        self.body
    }

    /// Response body as text (invalid UTF-8 is replaced).
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Returns true if the response carried no body (e.g. a HEAD request).
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Decode the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the body is not valid JSON for `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_slice(&self.body)?)
    }
}

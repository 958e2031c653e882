//! A transport that records requests instead of sending them.

use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode};

use crate::error::Result;
use crate::params::QueryParams;
use crate::transport::{ApiResponse, RequestBody, Transport};

#[derive(Debug, Clone)]
pub(crate) struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<RequestBody>,
    pub params: QueryParams,
}

/// Answers every request with the same canned body and keeps what it saw.
pub(crate) struct RecordingTransport {
    requests: Mutex<Vec<RecordedRequest>>,
    response_body: Vec<u8>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::responding_with("{}")
    }

    pub fn responding_with(body: &str) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            response_body: body.as_bytes().to_vec(),
        }
    }

    /// Every request recorded so far, oldest first.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// The single request recorded so far.
    pub fn only_request(&self) -> RecordedRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests[0].clone()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<RequestBody>,
        params: QueryParams,
    ) -> Result<ApiResponse> {
        self.requests.lock().unwrap().push(RecordedRequest {
            method,
            path: path.to_string(),
            body,
            params,
        });
        Ok(ApiResponse::new(
            StatusCode::OK,
            HeaderMap::new(),
            self.response_body.clone(),
        ))
    }
}

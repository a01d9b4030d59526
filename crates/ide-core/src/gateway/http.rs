//! HTTP compile/run service backend

use async_trait::async_trait;
use serde::Serialize;

use super::CodeExecutionBackend;
use crate::domain::{DomainError, DomainResult, ExecutionRequest, ExecutionResult, SourcePayload};

/// The service compiles every file into one directory and launches
/// `mainClass` from there, so files travel under their bare names.
#[derive(Debug, Serialize, PartialEq)]
struct WireFile<'a> {
    path: &'a str,
    content: &'a str,
}

impl<'a> From<&'a SourcePayload> for WireFile<'a> {
    fn from(file: &'a SourcePayload) -> Self {
        Self {
            path: &file.name,
            content: &file.content,
        }
    }
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
struct RunBody<'a> {
    files: Vec<WireFile<'a>>,
    main_class: String,
    input: &'a str,
}

impl<'a> RunBody<'a> {
    fn from_request(request: &'a ExecutionRequest) -> Self {
        Self {
            files: request.files.iter().map(WireFile::from).collect(),
            main_class: request.main_class(),
            input: &request.stdin,
        }
    }
}

pub struct HttpExecutionBackend {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpExecutionBackend {
    pub fn new(endpoint: &str) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait(?Send)]
impl CodeExecutionBackend for HttpExecutionBackend {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn execute(&self, request: &ExecutionRequest) -> DomainResult<ExecutionResult> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&RunBody::from_request(request))
            .send()
            .await
            .map_err(|e| DomainError::Execution(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(DomainError::Execution(format!(
                "Execution failed ({}): {}",
                status, text
            )));
        }

        response
            .json::<ExecutionResult>()
            .await
            .map_err(|e| DomainError::Execution(format!("Malformed response: {}", e)))
    }
}

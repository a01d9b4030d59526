//! Generative simulation backend
//!
//! Asks a generateContent model to act as a Java execution engine and answer
//! with the `{stdout, stderr, exitCode}` triple as JSON.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};

use super::CodeExecutionBackend;
use crate::domain::{DomainError, DomainResult, ExecutionRequest, ExecutionResult};

/// Reported when the model answers with no text at all
pub const EMPTY_RESPONSE: &str = "Error: Empty response from engine";

pub struct SimulationBackend {
    base_url: String,
    model: String,
    api_key: Option<String>,
    client: reqwest::Client,
}

impl SimulationBackend {
    pub fn new(base_url: &str, model: &str, api_key: Option<String>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            api_key,
            client: reqwest::Client::new(),
        }
    }

    fn url(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

fn fenced(name: &str, content: &str) -> String {
    format!("Filename: {}\nContent:\n```java\n{}\n```", name, content)
}

/// Prompt for one run: the entry file first, then every supporting file
pub(crate) fn build_prompt(request: &ExecutionRequest) -> String {
    let supporting = request
        .files
        .iter()
        .filter(|f| f.path != request.entry_path)
        .map(|f| fenced(&f.path, &f.content))
        .collect::<Vec<_>>()
        .join("\n\n");

    let mut prompt = String::from(
        "You are a Java 21 Execution Engine. Simulate the compilation and execution of the provided Java files.\n\n",
    );
    prompt.push_str("MAIN FILE (EntryPoint):\n");
    prompt.push_str(&fenced(&request.entry_path, &request.entry_content));
    prompt.push_str("\n\nSUPPORTING FILES:\n");
    prompt.push_str(&supporting);
    if !request.stdin.is_empty() {
        prompt.push_str("\n\nSTANDARD INPUT:\n");
        prompt.push_str(&request.stdin);
    }
    prompt.push_str(
        "\n\nAnalyze the code carefully.\n\
         1. Check for compilation errors (syntax, missing imports, class mismatches).\n\
         2. If it compiles, simulate the exact output that would appear in a terminal (stdout).\n\
         3. If there's an exception, provide the stack trace in stderr.\n\
         4. Return a JSON object with stdout, stderr, and exitCode.",
    );
    prompt
}

pub(crate) fn request_body(prompt: &str) -> Value {
    json!({
        "contents": [{ "parts": [{ "text": prompt }] }],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": {
                "type": "OBJECT",
                "properties": {
                    "stdout": { "type": "STRING", "description": "Standard output of the program" },
                    "stderr": { "type": "STRING", "description": "Errors or stack traces" },
                    "exitCode": { "type": "INTEGER", "description": "Status code (0 for success, non-zero for error)" }
                },
                "required": ["stdout", "stderr", "exitCode"]
            }
        }
    })
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct GenerateResponse {
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct CandidateContent {
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct Part {
    text: String,
}

/// Turn a generateContent response body into a run result
pub(crate) fn parse_response(body: &str) -> DomainResult<ExecutionResult> {
    let response: GenerateResponse = serde_json::from_str(body)
        .map_err(|e| DomainError::Execution(format!("Malformed response: {}", e)))?;
    let text: String = response
        .candidates
        .first()
        .map(|c| c.content.parts.iter().map(|p| p.text.as_str()).collect())
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Ok(ExecutionResult::failure(EMPTY_RESPONSE));
    }
    serde_json::from_str(&text)
        .map_err(|e| DomainError::Execution(format!("Malformed result: {}", e)))
}

#[async_trait(?Send)]
impl CodeExecutionBackend for SimulationBackend {
    fn name(&self) -> &'static str {
        "simulation"
    }

    async fn execute(&self, request: &ExecutionRequest) -> DomainResult<ExecutionResult> {
        let api_key = self
            .api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or_else(|| DomainError::InvalidInput("no API key configured".into()))?;

        let response = self
            .client
            .post(self.url())
            .header("x-goog-api-key", api_key)
            .json(&request_body(&build_prompt(request)))
            .send()
            .await
            .map_err(|e| DomainError::Execution(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| DomainError::Execution(e.to_string()))?;
        if !status.is_success() {
            return Err(DomainError::Execution(format!("{}: {}", status, body)));
        }
        parse_response(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SourcePayload;

    fn request() -> ExecutionRequest {
        ExecutionRequest {
            entry_name: "Main.java".into(),
            entry_path: "Main.java".into(),
            entry_content: "public class Main {}".into(),
            files: vec![
                SourcePayload {
                    name: "Main.java".into(),
                    path: "Main.java".into(),
                    content: "public class Main {}".into(),
                },
                SourcePayload {
                    name: "Calc.java".into(),
                    path: "utils/Calc.java".into(),
                    content: "class Calc {}".into(),
                },
            ],
            stdin: String::new(),
        }
    }

    #[test]
    fn test_prompt_lists_entry_then_supporting() {
        let prompt = build_prompt(&request());
        let main_at = prompt.find("Filename: Main.java").unwrap();
        let calc_at = prompt.find("Filename: utils/Calc.java").unwrap();
        assert!(main_at < calc_at);
        assert_eq!(prompt.matches("Filename: Main.java").count(), 1);
        assert!(!prompt.contains("STANDARD INPUT"));
    }

    #[test]
    fn test_request_body_asks_for_json() {
        let body = request_body("hi");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "hi");
        assert_eq!(body["generationConfig"]["responseMimeType"], "application/json");
    }

    #[test]
    fn test_parse_response() {
        let body = r#"{"candidates":[{"content":{"parts":[{"text":"{\"stdout\":\"10 + 5 = 15\\n\",\"stderr\":\"\",\"exitCode\":0}"}]}}]}"#;
        let result = parse_response(body).unwrap();
        assert_eq!(result.stdout, "10 + 5 = 15\n");
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn test_empty_response() {
        let result = parse_response(r#"{"candidates":[]}"#).unwrap();
        assert_eq!(result.stderr, EMPTY_RESPONSE);
        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn test_garbage_is_an_error() {
        assert!(parse_response("<html>").is_err());
    }

    #[tokio::test]
    async fn test_missing_key_is_an_error() {
        let backend = SimulationBackend::new("http://localhost", "m", None);
        let err = backend.execute(&request()).await.unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
    }
}

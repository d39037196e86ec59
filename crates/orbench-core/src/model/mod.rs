//! Ollama generation client
//!
//! Thin HTTP client for the Ollama generate API, with bounded retries
//! and exponential backoff on transport failures. Responses are cleaned
//! of markdown fences and the end-of-response marker before being saved
//! as candidate programs.

use std::time::Duration;

use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::Client;
use serde_json::{json, Value};

use crate::error::{BenchError, BenchResult};
use crate::prompt::END_OF_RESPONSE;

const DEFAULT_BASE_URL: &str = "http://localhost:11434";
const DEFAULT_MAX_RETRIES: u32 = 3;

static FENCE_OPEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"```python\s*\n").expect("fence pattern must compile"));
static FENCE_CLOSE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"```\s*\n?").expect("fence pattern must compile"));

/// Client for an Ollama-compatible generation server
pub struct OllamaClient {
    model_name: String,
    base_url: String,
    request_timeout: Duration,
    max_retries: u32,
    http_client: Client,
}

impl OllamaClient {
    /// Create a client for the given model at the default local server
    pub fn new(model_name: impl Into<String>) -> Self {
        Self::with_base_url(model_name, DEFAULT_BASE_URL)
    }

    /// Create a client for a specific server base URL
    pub fn with_base_url(model_name: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            model_name: model_name.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            request_timeout: Duration::from_secs(600),
            max_retries: DEFAULT_MAX_RETRIES,
            http_client: Client::new(),
        }
    }

    /// Set the per-request timeout
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.request_timeout = Duration::from_secs(secs);
        self
    }

    /// Check whether the server is reachable
    pub async fn check_server(&self) -> bool {
        let url = format!("{}/api/tags", self.base_url);
        match self
            .http_client
            .get(&url)
            .timeout(Duration::from_secs(5))
            .send()
            .await
        {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                tracing::error!(error = %e, "Generation server not accessible");
                false
            }
        }
    }

    /// Generate code for a prompt, returning the cleaned program text
    pub async fn generate(&self, prompt: &str) -> BenchResult<String> {
        let url = format!("{}/api/generate", self.base_url);
        let payload = json!({
            "model": self.model_name,
            "prompt": prompt,
            "stream": false,
            "options": {
                "temperature": 0.2,
                "top_p": 0.95,
                "top_k": 40,
                "num_ctx": 8192,
                "num_predict": 4096,
                "stop": [END_OF_RESPONSE],
            }
        });

        let mut last_error = String::new();
        for attempt in 1..=self.max_retries {
            match self.try_generate(&url, &payload).await {
                Ok(text) => return Ok(Self::clean_code(&text)),
                Err(e) => {
                    tracing::warn!(
                        attempt,
                        max_retries = self.max_retries,
                        error = %e,
                        "Generation request failed"
                    );
                    last_error = e.to_string();
                    if attempt < self.max_retries {
                        let backoff = Duration::from_secs(1u64 << (attempt - 1));
                        tokio::time::sleep(backoff).await;
                    }
                }
            }
        }

        Err(BenchError::model(format!(
            "Max retries exceeded: {last_error}"
        )))
    }

    async fn try_generate(&self, url: &str, payload: &Value) -> BenchResult<String> {
        let response = self
            .http_client
            .post(url)
            .json(payload)
            .timeout(self.request_timeout)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    BenchError::model("request timeout")
                } else {
                    BenchError::model(format!("request failed: {e}"))
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(BenchError::model(format!(
                "server error (status {status}): {body}"
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| BenchError::model(format!("invalid JSON response: {e}")))?;

        Ok(body
            .get("response")
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string())
    }

    /// Strip markdown fences and the end-of-response marker
    pub fn clean_code(text: &str) -> String {
        let without_open = FENCE_OPEN.replace_all(text, "");
        let without_fences = FENCE_CLOSE.replace_all(&without_open, "");
        without_fences.replace(END_OF_RESPONSE, "").trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_code_strips_fences() {
        let raw = "```python\nimport gurobipy as gp\nprint(1.0)\n```\n";
        assert_eq!(
            OllamaClient::clean_code(raw),
            "import gurobipy as gp\nprint(1.0)"
        );
    }

    #[test]
    fn test_clean_code_strips_end_marker() {
        let raw = "print(42)\n<EOR>\n";
        assert_eq!(OllamaClient::clean_code(raw), "print(42)");
    }

    #[test]
    fn test_clean_code_plain_text_untouched() {
        assert_eq!(OllamaClient::clean_code("print(7)"), "print(7)");
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = OllamaClient::with_base_url("m", "http://localhost:11434/");
        assert_eq!(client.base_url, "http://localhost:11434");
    }
}

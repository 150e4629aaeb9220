use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{CompletionClient, CompletionError};
use crate::config::AiConfig;

/// Chat-completions client for Groq's OpenAI-compatible endpoint.
#[derive(Clone)]
pub struct GroqClient {
    client: Client,
    config: AiConfig,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    temperature: f32,
    stream: bool,
    messages: [ChatMessage<'a>; 1],
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    #[serde(default)]
    content: Option<String>,
}

impl GroqClient {
    /// Builds the HTTP client with the configured request timeout.
    pub fn new(config: AiConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.config.base_url)
    }
}

#[async_trait]
impl CompletionClient for GroqClient {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(CompletionError::NotConfigured)?;

        let body = ChatRequest {
            model: &self.config.model,
            temperature: 0.0,
            stream: false,
            messages: [ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(classify)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CompletionError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let payload: ChatResponse = response.json().await.map_err(classify)?;

        payload
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .filter(|content| !content.is_empty())
            .ok_or(CompletionError::EmptyResponse)
    }
}

fn classify(err: reqwest::Error) -> CompletionError {
    if err.is_timeout() {
        CompletionError::Timeout
    } else {
        CompletionError::Transport(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config_for(server: &MockServer) -> AiConfig {
        AiConfig {
            api_key: Some("test-key".to_string()),
            base_url: server.uri(),
            model: "llama-3.1-8b-instant".to_string(),
            timeout: Duration::from_millis(500),
        }
    }

    fn completion(content: &str) -> serde_json::Value {
        serde_json::json!({
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "choices": [
                { "index": 0, "message": { "role": "assistant", "content": content } }
            ]
        })
    }

    #[tokio::test]
    async fn returns_first_choice_content() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("authorization", "Bearer test-key"))
            .and(body_partial_json(serde_json::json!({
                "model": "llama-3.1-8b-instant",
                "temperature": 0.0,
                "messages": [{ "role": "user", "content": "hello" }]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion(
                "  {\"ai_probability\": 61}  ",
            )))
            .expect(1)
            .mount(&server)
            .await;

        let client = GroqClient::new(config_for(&server)).expect("client builds");
        let reply = client.complete("hello").await.expect("completion");

        assert_eq!(reply, "{\"ai_probability\": 61}");
    }

    #[tokio::test]
    async fn server_error_is_not_retried() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
            .expect(1)
            .mount(&server)
            .await;

        let client = GroqClient::new(config_for(&server)).expect("client builds");
        let err = client.complete("hello").await.expect_err("503 fails");

        match err {
            CompletionError::Http { status, body } => {
                assert_eq!(status, 503);
                assert_eq!(body, "overloaded");
            }
            other => panic!("expected HTTP error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn slow_reply_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(completion("{}"))
                    .set_delay(Duration::from_secs(3)),
            )
            .mount(&server)
            .await;

        let client = GroqClient::new(config_for(&server)).expect("client builds");
        let err = client.complete("hello").await.expect_err("times out");

        assert!(matches!(err, CompletionError::Timeout), "got {err:?}");
    }

    #[tokio::test]
    async fn empty_choices_are_reported() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "choices": []
            })))
            .mount(&server)
            .await;

        let client = GroqClient::new(config_for(&server)).expect("client builds");
        let err = client.complete("hello").await.expect_err("no content");

        assert!(matches!(err, CompletionError::EmptyResponse));
    }

    #[tokio::test]
    async fn missing_api_key_skips_the_request() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let mut config = config_for(&server);
        config.api_key = None;
        let client = GroqClient::new(config).expect("client builds");
        let err = client.complete("hello").await.expect_err("not configured");

        assert!(matches!(err, CompletionError::NotConfigured));
    }
}

use crate::error::GenerateError;
use crate::generator::TextService;
use crate::settings::Settings;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content<'a> {
    role: &'a str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
}

#[derive(Deserialize)]
pub(crate) struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate.
    pub(crate) fn text(&self) -> Option<String> {
        let parts = &self.candidates.first()?.content.as_ref()?.parts;
        let text: String = parts.iter().filter_map(|p| p.text.as_deref()).collect();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

/// Google Generative Language API client.
pub struct GeminiClient {
    client: Client,
    settings: Settings,
}

impl GeminiClient {
    pub fn new(settings: &Settings) -> Result<Self, GenerateError> {
        let mut builder = Client::builder();
        if let Some(secs) = settings.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
            settings: settings.clone(),
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.settings.api_base.trim_end_matches('/'),
            self.settings.model
        )
    }
}

#[async_trait]
impl TextService for GeminiClient {
    async fn complete_json(&self, prompt: &str) -> Result<String, GenerateError> {
        let api_key = self.settings.api_key()?;

        let request_body = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![RequestPart { text: prompt }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
            },
        };

        debug!(model = %self.settings.model, "calling generateContent");

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&request_body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(GenerateError::Service { status, body });
        }

        let body: GenerateContentResponse = response.json().await?;
        body.text().ok_or(GenerateError::EmptyResponse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::QuoteGenerator;
    use crate::quote::Quote;
    use std::sync::Arc;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    const KEY_VAR: &str = "QUOTE_TEST_GEMINI_KEY";

    fn settings_for(base: String) -> Settings {
        std::env::set_var(KEY_VAR, "test-key");
        Settings {
            api_base: base,
            api_key_env: KEY_VAR.to_string(),
            request_timeout_secs: Some(5),
            ..Settings::default()
        }
    }

    /// Serve exactly one canned HTTP response and hand back the request head.
    async fn serve_once(status: &str, body: &str) -> (String, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let response = format!(
            "HTTP/1.1 {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = vec![0u8; 16 * 1024];
            let n = socket.read(&mut buf).await.unwrap();
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            String::from_utf8_lossy(&buf[..n]).to_string()
        });
        (format!("http://{}", addr), handle)
    }

    #[test]
    fn extracts_first_candidate_text() {
        let body: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates":[
                {"content":{"parts":[{"text":"{\"text\":"},{"text":"\"a\",\"author\":\"b\"}"}]}},
                {"content":{"parts":[{"text":"ignored"}]}}
            ]}"#,
        )
        .unwrap();
        assert_eq!(body.text().as_deref(), Some(r#"{"text":"a","author":"b"}"#));
    }

    #[test]
    fn no_candidates_means_no_text() {
        let body: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(body.text().is_none());
        let body: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates":[{"finishReason":"SAFETY"}]}"#).unwrap();
        assert!(body.text().is_none());
    }

    #[tokio::test]
    async fn end_to_end_success() {
        let reply = serde_json::json!({
            "candidates": [{"content": {"parts": [{"text": "{\"text\":\"慢慢来，比较快。\",\"author\":\"匿名\"}"}]}}]
        })
        .to_string();
        let (base, server) = serve_once("200 OK", &reply).await;

        let client = GeminiClient::new(&settings_for(base)).unwrap();
        let generator = QuoteGenerator::new(Arc::new(client));
        assert_eq!(
            generator.generate().await,
            Some(Quote::new("慢慢来，比较快。", "匿名"))
        );

        let request = server.await.unwrap();
        assert!(request.starts_with("POST "));
        assert!(request.contains("/models/gemini-3-flash-preview:generateContent"));
        assert!(request.to_ascii_lowercase().contains("x-goog-api-key: test-key"));
    }

    #[tokio::test]
    async fn error_status_is_a_service_error() {
        let (base, _server) = serve_once("403 Forbidden", r#"{"error":"denied"}"#).await;
        let client = GeminiClient::new(&settings_for(base)).unwrap();

        match client.complete_json("hi").await {
            Err(GenerateError::Service { status, body }) => {
                assert_eq!(status, 403);
                assert!(body.contains("denied"));
            }
            Err(other) => panic!("unexpected error {}", other),
            Ok(text) => panic!("unexpected success {}", text),
        }
    }

    #[tokio::test]
    async fn missing_key_fails_before_sending() {
        let settings = Settings {
            api_base: "http://127.0.0.1:9".to_string(),
            api_key_env: "QUOTE_TEST_GEMINI_KEY_UNSET".to_string(),
            ..Settings::default()
        };
        let client = GeminiClient::new(&settings).unwrap();
        assert!(matches!(
            client.complete_json("hi").await,
            Err(GenerateError::MissingCredential { .. })
        ));
    }

    #[tokio::test]
    async fn refused_connection_resolves_to_none() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = GeminiClient::new(&settings_for(format!("http://{}", addr))).unwrap();
        let generator = QuoteGenerator::new(Arc::new(client));
        assert!(matches!(
            generator.generate_detailed().await,
            Err(GenerateError::Transport(_))
        ));
        assert_eq!(generator.generate().await, None);
    }
}

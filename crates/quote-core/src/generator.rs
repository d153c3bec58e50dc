//! AI quote generation
//!
//! One call to [`QuoteGenerator::generate`] sends one fixed prompt to a
//! [`TextService`] and turns the reply into a [`Quote`], or into `None` when
//! anything along the way goes wrong. Calls share no state.

use crate::error::GenerateError;
use crate::quote::Quote;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, warn};

#[cfg(test)]
use mockall::automock;

pub const QUOTE_PROMPT: &str = "请生成一个富有哲理、治愈且充满力量的短句子，字数在30字以内。返回格式为 JSON: { \"text\": \"句子内容\", \"author\": \"作者名或'匿名'\" }。确保只返回JSON字符串。";

/// A generative text backend that answers a prompt with a JSON document.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TextService: Send + Sync {
    /// Send `prompt`, asking for a JSON reply, and return the raw reply text.
    async fn complete_json(&self, prompt: &str) -> Result<String, GenerateError>;
}

/// Produces fresh quotes from a [`TextService`]. Cheap to clone.
#[derive(Clone)]
pub struct QuoteGenerator {
    service: Arc<dyn TextService>,
}

impl QuoteGenerator {
    pub fn new(service: Arc<dyn TextService>) -> Self {
        Self { service }
    }

    /// Request a new quote. Every failure is logged and becomes `None`.
    pub async fn generate(&self) -> Option<Quote> {
        match self.generate_detailed().await {
            Ok(quote) => {
                info!(author = %quote.author, "generated quote");
                Some(quote)
            }
            Err(err) => {
                warn!(error = %err, "quote generation failed");
                None
            }
        }
    }

    /// Same request as [`generate`](Self::generate) but keeps the failure reason.
    pub async fn generate_detailed(&self) -> Result<Quote, GenerateError> {
        debug!("requesting quote from text service");
        let raw = self.service.complete_json(QUOTE_PROMPT).await?;
        parse_quote(&raw)
    }
}

/// Shape-check a service reply: a JSON object with non-empty string
/// `text` and `author`. Field values are returned verbatim.
pub fn parse_quote(raw: &str) -> Result<Quote, GenerateError> {
    let value: Value = serde_json::from_str(raw)?;
    let object = value.as_object().ok_or(GenerateError::NotAnObject)?;

    let field = |name: &'static str| -> Result<String, GenerateError> {
        match object.get(name).and_then(Value::as_str) {
            Some(s) if !s.is_empty() => Ok(s.to_owned()),
            _ => Err(GenerateError::MissingField { field: name }),
        }
    };

    Ok(Quote {
        text: field("text")?,
        author: field("author")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generator_replying(reply: Result<String, GenerateError>) -> QuoteGenerator {
        let mut service = MockTextService::new();
        let mut reply = Some(reply);
        service
            .expect_complete_json()
            .withf(|prompt: &str| prompt == QUOTE_PROMPT)
            .times(1)
            .returning(move |_| reply.take().unwrap_or(Err(GenerateError::EmptyResponse)));
        QuoteGenerator::new(Arc::new(service))
    }

    #[tokio::test]
    async fn well_formed_reply_becomes_quote() {
        let generator =
            generator_replying(Ok(r#"{"text":"慢慢来，比较快。","author":"匿名"}"#.to_string()));
        assert_eq!(
            generator.generate().await,
            Some(Quote::new("慢慢来，比较快。", "匿名"))
        );
    }

    #[tokio::test]
    async fn fields_are_kept_verbatim() {
        let generator =
            generator_replying(Ok(r#"{"text":"  spaced  ","author":" A ","extra":1}"#.to_string()));
        assert_eq!(
            generator.generate().await,
            Some(Quote::new("  spaced  ", " A "))
        );
    }

    #[tokio::test]
    async fn empty_text_is_rejected() {
        let generator = generator_replying(Ok(r#"{"text":"","author":"鲁迅"}"#.to_string()));
        assert_eq!(generator.generate().await, None);
    }

    #[tokio::test]
    async fn non_json_is_rejected() {
        let generator = generator_replying(Ok("not json at all".to_string()));
        assert!(matches!(
            generator.generate_detailed().await,
            Err(GenerateError::MalformedPayload(_))
        ));
    }

    #[tokio::test]
    async fn transport_failure_resolves_to_none() {
        let generator = generator_replying(Err(GenerateError::Service {
            status: 503,
            body: "unavailable".to_string(),
        }));
        assert_eq!(generator.generate().await, None);
    }

    #[tokio::test]
    async fn missing_credential_resolves_to_none() {
        let generator = generator_replying(Err(GenerateError::MissingCredential {
            var: "GEMINI_API_KEY".to_string(),
        }));
        assert_eq!(generator.generate().await, None);
    }

    #[test]
    fn rejects_missing_or_mistyped_fields() {
        for raw in [
            r#"{"author":"匿名"}"#,
            r#"{"text":"hello"}"#,
            r#"{"text":"hello","author":""}"#,
            r#"{"text":null,"author":"匿名"}"#,
            r#"{"text":42,"author":"匿名"}"#,
            r#"{"text":"hello","author":false}"#,
        ] {
            assert!(
                matches!(parse_quote(raw), Err(GenerateError::MissingField { .. })),
                "accepted {}",
                raw
            );
        }
    }

    #[test]
    fn rejects_non_objects_and_empty_body() {
        assert!(matches!(parse_quote("[]"), Err(GenerateError::NotAnObject)));
        assert!(matches!(parse_quote("\"text\""), Err(GenerateError::NotAnObject)));
        assert!(matches!(parse_quote(""), Err(GenerateError::MalformedPayload(_))));
    }

    #[test]
    fn reports_first_missing_field() {
        match parse_quote("{}") {
            Err(GenerateError::MissingField { field }) => assert_eq!(field, "text"),
            other => panic!("unexpected {:?}", other),
        }
    }
}

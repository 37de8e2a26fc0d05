//! Generative-model provider abstractions and implementations.
//!
//! This module provides a trait-based abstraction over the remote model
//! provider, allowing the real Gemini backend to be swapped for a mock.

pub mod gemini;
pub mod mock;

use async_trait::async_trait;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug, Clone)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(String),
}

/// A model advertised by the provider, with its declared capabilities.
#[derive(Debug, Clone)]
pub struct ModelInfo {
    /// Fully-qualified model name (e.g. `models/gemini-1.5-pro`).
    pub name: String,

    /// Generation methods the provider declares for this model.
    pub supported_generation_methods: Vec<String>,
}

impl ModelInfo {
    /// Whether this model can serve `generateContent` requests.
    pub fn supports_generation(&self) -> bool {
        self.supported_generation_methods
            .iter()
            .any(|m| m == "generateContent")
    }
}

/// A part of a candidate's content; may or may not carry text.
#[derive(Debug, Clone)]
pub struct ReplyPart {
    pub text: Option<String>,
}

/// One candidate output, composed of ordered parts.
#[derive(Debug, Clone)]
pub struct ReplyCandidate {
    pub parts: Vec<ReplyPart>,
}

/// The two response shapes the provider can hand back.
///
/// `Text` is the direct top-level text field some backends return;
/// `Candidates` is the structured candidate/parts shape. `into_text`
/// is the single place either shape is normalized to plain text.
#[derive(Debug, Clone)]
pub enum ModelReply {
    Text(String),
    Candidates(Vec<ReplyCandidate>),
}

impl ModelReply {
    /// Normalize the reply to plain text.
    ///
    /// A non-empty direct text field is returned verbatim. For the
    /// candidate shape, all non-empty part texts are concatenated in
    /// order, newline-joined and trimmed. `None` when neither shape
    /// yields any text.
    pub fn into_text(self) -> Option<String> {
        match self {
            ModelReply::Text(text) => {
                if text.is_empty() {
                    None
                } else {
                    Some(text)
                }
            }
            ModelReply::Candidates(candidates) => {
                let parts: Vec<String> = candidates
                    .into_iter()
                    .flat_map(|c| c.parts)
                    .filter_map(|p| p.text)
                    .filter(|t| !t.is_empty())
                    .collect();

                if parts.is_empty() {
                    None
                } else {
                    Some(parts.join("\n").trim().to_string())
                }
            }
        }
    }
}

/// Trait for generative-model providers (e.g. Gemini).
#[async_trait]
pub trait ModelProvider: Send + Sync {
    /// Generate content with the named model.
    async fn generate(&self, model: &str, prompt: &str) -> Result<ModelReply, ProviderError>;

    /// List all models available to the current credentials.
    async fn list_models(&self) -> Result<Vec<ModelInfo>, ProviderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direct_text_is_returned_verbatim() {
        let reply = ModelReply::Text("  Pancakes: mix, fry, eat.  ".to_string());
        assert_eq!(
            reply.into_text().as_deref(),
            Some("  Pancakes: mix, fry, eat.  ")
        );
    }

    #[test]
    fn empty_direct_text_yields_none() {
        assert!(ModelReply::Text(String::new()).into_text().is_none());
    }

    #[test]
    fn candidate_parts_are_newline_joined_in_order() {
        let reply = ModelReply::Candidates(vec![
            ReplyCandidate {
                parts: vec![
                    ReplyPart {
                        text: Some("Step 1".to_string()),
                    },
                    ReplyPart { text: None },
                    ReplyPart {
                        text: Some("Step 2".to_string()),
                    },
                ],
            },
            ReplyCandidate {
                parts: vec![ReplyPart {
                    text: Some("Step 3".to_string()),
                }],
            },
        ]);
        assert_eq!(reply.into_text().as_deref(), Some("Step 1\nStep 2\nStep 3"));
    }

    #[test]
    fn candidates_without_text_yield_none() {
        let reply = ModelReply::Candidates(vec![ReplyCandidate {
            parts: vec![
                ReplyPart { text: None },
                ReplyPart {
                    text: Some(String::new()),
                },
            ],
        }]);
        assert!(reply.into_text().is_none());
    }

    #[test]
    fn model_info_capability_check() {
        let info = ModelInfo {
            name: "models/gemini-1.5-pro".to_string(),
            supported_generation_methods: vec![
                "countTokens".to_string(),
                "generateContent".to_string(),
            ],
        };
        assert!(info.supports_generation());

        let embed = ModelInfo {
            name: "models/embedding-001".to_string(),
            supported_generation_methods: vec!["embedContent".to_string()],
        };
        assert!(!embed.supports_generation());
    }
}

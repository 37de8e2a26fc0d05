//! Mock provider implementation for testing.

use super::{ModelInfo, ModelProvider, ModelReply, ProviderError};
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Mutex;

/// Mock model provider with scripted behavior and call recording.
#[derive(Default)]
pub struct MockProvider {
    reply: Option<ModelReply>,
    error: Option<ProviderError>,
    failing_models: HashSet<String>,
    models: Vec<ModelInfo>,
    list_fails: bool,
    calls: Mutex<Vec<String>>,
}

impl MockProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Canned reply for successful generate calls. Defaults to a direct
    /// text echo of the prompt.
    pub fn with_reply(mut self, reply: ModelReply) -> Self {
        self.reply = Some(reply);
        self
    }

    /// Make every generate call fail with the given error.
    pub fn with_error(mut self, error: ProviderError) -> Self {
        self.error = Some(error);
        self
    }

    /// Make generate calls for these model names fail.
    pub fn with_failing_models<I: IntoIterator<Item = &'static str>>(mut self, names: I) -> Self {
        self.failing_models = names.into_iter().map(String::from).collect();
        self
    }

    /// Models returned by `list_models`.
    pub fn with_models(mut self, models: Vec<ModelInfo>) -> Self {
        self.models = models;
        self
    }

    /// Make `list_models` fail.
    pub fn with_list_error(mut self) -> Self {
        self.list_fails = true;
        self
    }

    /// Model names passed to `generate`, in call order.
    pub fn recorded_calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ModelProvider for MockProvider {
    async fn generate(&self, model: &str, prompt: &str) -> Result<ModelReply, ProviderError> {
        self.calls.lock().unwrap().push(model.to_string());

        if self.failing_models.contains(model) {
            return Err(ProviderError::ApiError(format!(
                "mock failure for {}",
                model
            )));
        }

        if let Some(error) = &self.error {
            return Err(error.clone());
        }

        Ok(self
            .reply
            .clone()
            .unwrap_or_else(|| ModelReply::Text(format!("Mock response for: {}", prompt))))
    }

    async fn list_models(&self) -> Result<Vec<ModelInfo>, ProviderError> {
        if self.list_fails {
            return Err(ProviderError::ApiError("mock list failure".to_string()));
        }
        Ok(self.models.clone())
    }
}

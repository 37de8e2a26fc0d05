//! Startup-time model resolution.
//!
//! Provider-side model availability and naming change over time and vary
//! per credential, so a single static model name is unreliable. The
//! resolver probes an ordered preference list with a minimal request and
//! falls back to whatever the provider says it can serve.

use crate::services::providers::{ModelProvider, ProviderError};

/// Minimal request used to verify a model actually responds.
pub const PROBE_PROMPT: &str = "ping";

/// Reference to the remote model selected at startup.
///
/// Write-once: selected (or confirmed absent) exactly once per process,
/// then shared read-only across requests.
#[derive(Debug, Clone)]
pub struct ModelHandle {
    name: String,
}

impl ModelHandle {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Outcome of probing a single candidate model.
#[derive(Debug)]
pub struct ProbeAttempt {
    pub model: String,
    pub error: Option<ProviderError>,
}

/// Result of a resolution pass: the selected handle (if any) plus every
/// probe outcome, kept for diagnostics instead of being discarded.
#[derive(Debug)]
pub struct Resolution {
    pub handle: Option<ModelHandle>,
    pub attempts: Vec<ProbeAttempt>,
}

/// Select a usable model.
///
/// Probes each preferred identifier in order and returns on the first
/// success. If all preferred names fail, asks the provider for its model
/// list, filters to those supporting content generation, and probes those
/// in provider-returned order. Total exhaustion (or a listing failure)
/// yields no handle; the caller keeps running with generation disabled.
pub async fn resolve(provider: &dyn ModelProvider, preferred: &[String]) -> Resolution {
    let mut attempts = Vec::new();

    for name in preferred {
        if let Some(handle) = probe(provider, name, &mut attempts).await {
            return Resolution {
                handle: Some(handle),
                attempts,
            };
        }
    }

    match provider.list_models().await {
        Ok(models) => {
            for model in models.iter().filter(|m| m.supports_generation()) {
                if let Some(handle) = probe(provider, &model.name, &mut attempts).await {
                    return Resolution {
                        handle: Some(handle),
                        attempts,
                    };
                }
            }
        }
        Err(e) => {
            tracing::warn!(error = %e, "Could not list models");
        }
    }

    Resolution {
        handle: None,
        attempts,
    }
}

async fn probe(
    provider: &dyn ModelProvider,
    name: &str,
    attempts: &mut Vec<ProbeAttempt>,
) -> Option<ModelHandle> {
    match provider.generate(name, PROBE_PROMPT).await {
        Ok(_) => {
            attempts.push(ProbeAttempt {
                model: name.to_string(),
                error: None,
            });
            Some(ModelHandle::new(name))
        }
        Err(e) => {
            tracing::debug!(model = %name, error = %e, "Model probe failed");
            attempts.push(ProbeAttempt {
                model: name.to_string(),
                error: Some(e),
            });
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::providers::mock::MockProvider;
    use crate::services::providers::ModelInfo;

    fn preferred(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn first_working_candidate_wins() {
        let provider = MockProvider::new().with_failing_models(["models/a", "models/b"]);
        let resolution = resolve(
            &provider,
            &preferred(&["models/a", "models/b", "models/c", "models/d"]),
        )
        .await;

        let handle = resolution.handle.expect("expected a resolved handle");
        assert_eq!(handle.name(), "models/c");

        // No probe beyond the first success.
        assert_eq!(
            provider.recorded_calls(),
            vec!["models/a", "models/b", "models/c"]
        );
        assert_eq!(resolution.attempts.len(), 3);
        assert!(resolution.attempts[0].error.is_some());
        assert!(resolution.attempts[1].error.is_some());
        assert!(resolution.attempts[2].error.is_none());
    }

    #[tokio::test]
    async fn falls_back_to_listed_generation_models() {
        let provider = MockProvider::new()
            .with_failing_models(["models/a", "models/b"])
            .with_models(vec![
                ModelInfo {
                    name: "models/embedding-001".to_string(),
                    supported_generation_methods: vec!["embedContent".to_string()],
                },
                ModelInfo {
                    name: "models/listed-gen".to_string(),
                    supported_generation_methods: vec!["generateContent".to_string()],
                },
            ]);

        let resolution = resolve(&provider, &preferred(&["models/a", "models/b"])).await;

        let handle = resolution.handle.expect("expected a resolved handle");
        assert_eq!(handle.name(), "models/listed-gen");

        // The embedding-only model is never probed.
        assert_eq!(
            provider.recorded_calls(),
            vec!["models/a", "models/b", "models/listed-gen"]
        );
    }

    #[tokio::test]
    async fn exhaustion_yields_no_handle() {
        let provider = MockProvider::new()
            .with_failing_models(["models/a", "models/listed-gen"])
            .with_models(vec![ModelInfo {
                name: "models/listed-gen".to_string(),
                supported_generation_methods: vec!["generateContent".to_string()],
            }]);

        let resolution = resolve(&provider, &preferred(&["models/a"])).await;

        assert!(resolution.handle.is_none());
        assert_eq!(resolution.attempts.len(), 2);
    }

    #[tokio::test]
    async fn listing_failure_yields_no_handle() {
        let provider = MockProvider::new()
            .with_failing_models(["models/a"])
            .with_list_error();

        let resolution = resolve(&provider, &preferred(&["models/a"])).await;

        assert!(resolution.handle.is_none());
        assert_eq!(resolution.attempts.len(), 1);
    }
}

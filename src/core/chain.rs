use crate::core::prompts;
use crate::domain::model::Technique;
use crate::domain::ports::CompletionClient;
use std::sync::Arc;

/// Printed in place of a narrative when the remote call fails.
pub const CHAIN_FALLBACK: &str = "Unable to generate TTP chain.";

/// Chain generation stage: one completion round-trip per technique.
pub struct ChainGenerator<C: CompletionClient> {
    client: Arc<C>,
}

impl<C: CompletionClient> ChainGenerator<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    /// Returns the model's example scenario and TTP chain for the technique,
    /// or the fixed fallback string on any remote error.
    pub async fn generate(&self, technique: &Technique) -> String {
        let prompt = prompts::build_chain_prompt(technique);

        match self
            .client
            .complete(prompts::CHAIN_SYSTEM_PROMPT, &prompt)
            .await
        {
            Ok(response) => response.trim().to_string(),
            Err(e) => {
                tracing::error!("Chain generation failed for '{}': {}", technique.name, e);
                CHAIN_FALLBACK.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::{Result, TriageError};
    use async_trait::async_trait;

    struct FixedClient {
        response: std::result::Result<String, ()>,
    }

    #[async_trait]
    impl CompletionClient for FixedClient {
        async fn complete(&self, _system_prompt: &str, _user_prompt: &str) -> Result<String> {
            match &self.response {
                Ok(text) => Ok(text.clone()),
                Err(()) => Err(TriageError::EmptyCompletionError),
            }
        }
    }

    fn technique() -> Technique {
        Technique {
            id: "attack-pattern--phishing".to_string(),
            external_id: Some("T1566".to_string()),
            name: "Phishing".to_string(),
            description: Some("Adversaries may send phishing messages.".to_string()),
            tactics: vec!["initial-access".to_string()],
            revoked: false,
            deprecated: false,
            created: None,
            modified: None,
        }
    }

    #[tokio::test]
    async fn test_generate_returns_trimmed_narrative() {
        let client = Arc::new(FixedClient {
            response: Ok("  An attacker sends a crafted email...  ".to_string()),
        });
        let generator = ChainGenerator::new(client);

        let chain = generator.generate(&technique()).await;
        assert_eq!(chain, "An attacker sends a crafted email...");
    }

    #[tokio::test]
    async fn test_generate_remote_failure_yields_fallback() {
        let client = Arc::new(FixedClient { response: Err(()) });
        let generator = ChainGenerator::new(client);

        let chain = generator.generate(&technique()).await;
        assert_eq!(chain, CHAIN_FALLBACK);
    }
}

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

use crate::candidate::parse_candidate;
use crate::composer::EvaluationContext;
use crate::traits::GenerationProvider;
use schema::SchemaDescriptor;

const DEFAULT_MODEL: &str = "llama-3.1-8b-instant";

/// Live extractor backed by the Groq chat-completions API.
pub struct GroqGenerator {
    client: llm::Client,
}

impl GroqGenerator {
    pub fn new(client: llm::Client) -> Self {
        Self { client }
    }

    /// Model comes from GROQ_MODEL when set.
    pub fn from_env() -> Result<Self> {
        let model =
            std::env::var("GROQ_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        Ok(Self::new(llm::Client::from_env_groq(&model)?))
    }

    fn system_prompt(context: &EvaluationContext, descriptor: &SchemaDescriptor) -> String {
        let mut prompt = context.prompt.clone();
        prompt.push_str("\n\nOUTPUT FORMAT (JSON object only)");
        if descriptor.is_empty() {
            prompt.push_str(": an empty object {}\n");
        } else {
            prompt.push_str(" with exactly these fields:\n");
            for field in descriptor.fields {
                prompt.push_str(&format!(
                    "- {} ({}): {}\n",
                    field.name,
                    field.ty.expected(),
                    field.constraint
                ));
            }
        }
        prompt
    }
}

#[async_trait]
impl GenerationProvider for GroqGenerator {
    async fn generate(
        &self,
        context: &EvaluationContext,
        descriptor: &SchemaDescriptor,
    ) -> Result<Value> {
        let system = Self::system_prompt(context, descriptor);
        tracing::debug!(
            action = descriptor.kind.name(),
            model = self.client.model(),
            "requesting structured extraction"
        );
        let raw = self
            .client
            .generate_json(&system, "Extract the parameters now. Reply with the JSON object only.")
            .await?;
        parse_candidate(&raw)
    }

    fn name(&self) -> &str {
        "groq"
    }
}

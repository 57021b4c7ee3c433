use anyhow::Result;
use async_trait::async_trait;
use serde_json::{json, Value};

use crate::composer::EvaluationContext;
use crate::traits::GenerationProvider;
use schema::{CommandKind, SchemaDescriptor};

/// Mock provider for testing: canned, well-formed candidates per kind.
pub struct MockGenerator;

impl MockGenerator {
    pub fn new() -> Self {
        Self
    }

    fn canned(kind: CommandKind) -> Value {
        match kind {
            CommandKind::RegisterAgent => json!({
                "name": "Pizza",
                "personality": ["dramatic", "witty"],
                "style": "sarcastic",
                "stake_amount": 1000,
                "role": "validator"
            }),
            CommandKind::SubmitVote => json!({
                "block_height": 150,
                "approved": true,
                "reason": "Block is valid"
            }),
            CommandKind::ProposeBlock => json!({
                "transactions": ["tx1", "tx2"]
            }),
            CommandKind::ProposeAlliance => json!({
                "name": "Chaos Alliance",
                "agents": ["agent_a", "agent_b"],
                "drama_commitment": 8
            }),
            CommandKind::GetNetworkStatus | CommandKind::GetAgentStatus => json!({}),
        }
    }
}

impl Default for MockGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GenerationProvider for MockGenerator {
    async fn generate(
        &self,
        _context: &EvaluationContext,
        descriptor: &SchemaDescriptor,
    ) -> Result<Value> {
        Ok(Self::canned(descriptor.kind))
    }

    fn name(&self) -> &str {
        "mock"
    }
}

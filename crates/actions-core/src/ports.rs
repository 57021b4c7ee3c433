use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

use schema::{ProposeAlliance, ProposeBlock, RegisterAgent, RegistrationReceipt, SubmitVote};

// The generation side of the pipeline is already a port; re-export it so
// adapters only need this module.
pub use extractor::GenerationProvider;

/// Network client executing the remote ChaosChain operation for each
/// command kind. Errors carry the remote's human-readable message.
#[async_trait]
pub trait ChainPort: Send + Sync {
    async fn register_agent(&self, cmd: &RegisterAgent) -> Result<RegistrationReceipt>;
    async fn network_status(&self) -> Result<Value>;
    async fn submit_vote(&self, cmd: &SubmitVote) -> Result<Value>;
    async fn propose_block(&self, cmd: &ProposeBlock) -> Result<Value>;
    async fn agent_status(&self) -> Result<Value>;
    async fn propose_alliance(&self, cmd: &ProposeAlliance) -> Result<Value>;
}

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

use actions_core::ChainPort;
use chain::ChainClient;
use schema::{ProposeAlliance, ProposeBlock, RegisterAgent, RegistrationReceipt, SubmitVote};

/// Adapts the HTTP chain client to the dispatcher's chain port.
pub struct LiveChain {
    client: ChainClient,
}

impl LiveChain {
    pub fn new(client: ChainClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ChainPort for LiveChain {
    async fn register_agent(&self, cmd: &RegisterAgent) -> Result<RegistrationReceipt> {
        self.client.register_agent(cmd).await
    }

    async fn network_status(&self) -> Result<Value> {
        self.client.network_status().await
    }

    async fn submit_vote(&self, cmd: &SubmitVote) -> Result<Value> {
        self.client.submit_vote(cmd).await
    }

    async fn propose_block(&self, cmd: &ProposeBlock) -> Result<Value> {
        self.client.propose_block(cmd).await
    }

    async fn agent_status(&self) -> Result<Value> {
        self.client.agent_status().await
    }

    async fn propose_alliance(&self, cmd: &ProposeAlliance) -> Result<Value> {
        self.client.propose_alliance(cmd).await
    }
}

pub mod ports;
pub mod registry;
pub mod report;
pub mod state;

pub use ports::{ChainPort, GenerationProvider};
pub use registry::{ActionDefinition, ActionRegistry};
pub use report::{report, ActionOutcome};
pub use state::InvocationState;

use std::sync::Arc;

use anyhow::{anyhow, Result};
use serde_json::Value;

use extractor::{compose, ConversationState};
use schema::{descriptor_for, validate, CommandKind, InvocationResult, ValidatedCommand};

/// Headless action dispatcher: turns one conversational request into at most
/// one network effect and exactly one reported outcome.
pub struct ActionDispatcher<G: GenerationProvider, C: ChainPort> {
    registry: Arc<ActionRegistry>,
    generator: G,
    chain: C,
}

impl<G: GenerationProvider, C: ChainPort> ActionDispatcher<G, C> {
    pub fn new(registry: Arc<ActionRegistry>, generator: G, chain: C) -> Self {
        Self { registry, generator, chain }
    }

    pub fn registry(&self) -> &ActionRegistry {
        &self.registry
    }

    /// Caller-facing entry point: invoke an action by its name.
    pub async fn dispatch_named(
        &self,
        name: &str,
        message: &str,
        state: Option<&ConversationState>,
    ) -> ActionOutcome {
        match self.registry.by_name(name) {
            Some(def) => self.dispatch(def.kind, message, state).await,
            None => {
                tracing::warn!(action = name, "unknown action requested");
                ActionOutcome {
                    ok: false,
                    text: format!("Unknown action `{}`", name),
                    payload: None,
                }
            }
        }
    }

    /// Run the full pipeline for one invocation. Every collaborator failure
    /// is converted into a rejected outcome here; nothing escapes.
    pub async fn dispatch(
        &self,
        kind: CommandKind,
        message: &str,
        state: Option<&ConversationState>,
    ) -> ActionOutcome {
        let def = self.registry.by_kind(kind);
        let invocation = uuid::Uuid::new_v4();
        tracing::info!(action = def.name, invocation = %invocation, "starting action handler");

        let result = self.run(def, message, state).await;
        let outcome = report(kind, &result);

        tracing::info!(
            action = def.name,
            invocation = %invocation,
            ok = outcome.ok,
            "invocation finished"
        );
        outcome
    }

    async fn run(
        &self,
        def: &ActionDefinition,
        message: &str,
        state: Option<&ConversationState>,
    ) -> InvocationResult {
        let mut st = InvocationState::Idle;

        // Absent state synthesizes a fresh one; the caller's copy is never
        // touched, the incoming message lands only in our snapshot.
        let snapshot = match state {
            Some(s) => s.snapshot_with(message),
            None => ConversationState::default().snapshot_with(message),
        };
        let context = compose(&snapshot, def.template);
        self.advance(&mut st, InvocationState::ContextReady, def);

        let command = if def.kind.requires_payload() {
            let descriptor = descriptor_for(def.kind);
            let candidate = match self.generator.generate(&context, descriptor).await {
                Ok(candidate) => candidate,
                Err(e) => {
                    self.advance(&mut st, InvocationState::Rejected, def);
                    return InvocationResult::Rejected {
                        reason: format!("extraction failed: {:#}", e),
                    };
                }
            };
            self.advance(&mut st, InvocationState::Extracted, def);

            match validate(def.kind, &candidate) {
                Ok(command) => {
                    self.advance(&mut st, InvocationState::Validated, def);
                    command
                }
                Err(e) => {
                    tracing::warn!(action = def.name, error = %e, "candidate failed validation");
                    self.advance(&mut st, InvocationState::Rejected, def);
                    return InvocationResult::Rejected {
                        reason: format!("malformed command data: {}", e),
                    };
                }
            }
        } else {
            // Status queries carry no payload; nothing to extract or check.
            ValidatedCommand::StatusQuery(def.kind)
        };

        self.advance(&mut st, InvocationState::Dispatched, def);
        match self.call_chain(&command).await {
            Ok(payload) => {
                self.advance(&mut st, InvocationState::Completed, def);
                InvocationResult::Completed { payload }
            }
            Err(e) => {
                tracing::warn!(action = def.name, error = %e, "chain call rejected");
                self.advance(&mut st, InvocationState::Rejected, def);
                InvocationResult::Rejected { reason: e.to_string() }
            }
        }
    }

    /// The single network effect of an invocation.
    async fn call_chain(&self, command: &ValidatedCommand) -> Result<Value> {
        match command {
            ValidatedCommand::RegisterAgent(cmd) => {
                let receipt = self.chain.register_agent(cmd).await?;
                Ok(serde_json::to_value(receipt)?)
            }
            ValidatedCommand::SubmitVote(cmd) => self.chain.submit_vote(cmd).await,
            ValidatedCommand::ProposeBlock(cmd) => self.chain.propose_block(cmd).await,
            ValidatedCommand::ProposeAlliance(cmd) => self.chain.propose_alliance(cmd).await,
            ValidatedCommand::StatusQuery(kind) => match kind {
                CommandKind::GetNetworkStatus => self.chain.network_status().await,
                CommandKind::GetAgentStatus => self.chain.agent_status().await,
                other => Err(anyhow!("{} is not a status query", other.name())),
            },
        }
    }

    fn advance(&self, st: &mut InvocationState, next: InvocationState, def: &ActionDefinition) {
        debug_assert!(st.can_advance_to(next), "{:?} -> {:?}", st, next);
        *st = next;
        tracing::debug!(action = def.name, state = next.as_str(), "pipeline state");
    }
}

// Simple in-crate mocks for demo/testing
pub mod mocks {
    use super::*;
    use async_trait::async_trait;
    use extractor::EvaluationContext;
    use schema::{
        ProposeAlliance, ProposeBlock, RegisterAgent, RegistrationReceipt, SchemaDescriptor,
        SubmitVote,
    };
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Generation port that replays a fixed candidate (or fails), counting
    /// how often it was consulted. The counter handle stays observable after
    /// the mock moves into a dispatcher.
    pub struct ScriptedGenerator {
        response: Result<Value, String>,
        calls: Arc<AtomicUsize>,
    }

    impl ScriptedGenerator {
        pub fn returning(candidate: Value) -> Self {
            Self { response: Ok(candidate), calls: Arc::new(AtomicUsize::new(0)) }
        }

        pub fn failing(message: &str) -> Self {
            Self { response: Err(message.to_string()), calls: Arc::new(AtomicUsize::new(0)) }
        }

        pub fn counter(&self) -> Arc<AtomicUsize> {
            self.calls.clone()
        }
    }

    #[async_trait]
    impl GenerationProvider for ScriptedGenerator {
        async fn generate(
            &self,
            _context: &EvaluationContext,
            _descriptor: &SchemaDescriptor,
        ) -> Result<Value> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.response {
                Ok(v) => Ok(v.clone()),
                Err(msg) => Err(anyhow!("{}", msg)),
            }
        }

        fn name(&self) -> &str {
            "scripted"
        }
    }

    /// Chain port that counts calls and either succeeds with canned payloads
    /// or fails every operation with a fixed message.
    pub struct CountingChain {
        fail_with: Option<String>,
        calls: Arc<AtomicUsize>,
    }

    impl CountingChain {
        pub fn new() -> Self {
            Self { fail_with: None, calls: Arc::new(AtomicUsize::new(0)) }
        }

        pub fn failing(message: &str) -> Self {
            Self { fail_with: Some(message.to_string()), calls: Arc::new(AtomicUsize::new(0)) }
        }

        pub fn counter(&self) -> Arc<AtomicUsize> {
            self.calls.clone()
        }

        fn tally(&self) -> Result<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.fail_with {
                Some(msg) => Err(anyhow!("{}", msg)),
                None => Ok(()),
            }
        }
    }

    impl Default for CountingChain {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl ChainPort for CountingChain {
        async fn register_agent(&self, cmd: &RegisterAgent) -> Result<RegistrationReceipt> {
            self.tally()?;
            Ok(RegistrationReceipt {
                token: "1234567890".to_string(),
                agent_id: format!("{}-id", cmd.name.to_lowercase()),
            })
        }

        async fn network_status(&self) -> Result<Value> {
            self.tally()?;
            Ok(json!({"block_height": 150, "validators": 7, "drama_level": "high"}))
        }

        async fn submit_vote(&self, cmd: &SubmitVote) -> Result<Value> {
            self.tally()?;
            Ok(json!({"accepted": true, "block_height": cmd.block_height}))
        }

        async fn propose_block(&self, cmd: &ProposeBlock) -> Result<Value> {
            self.tally()?;
            Ok(json!({"accepted": true, "transactions": cmd.transactions.len()}))
        }

        async fn agent_status(&self) -> Result<Value> {
            self.tally()?;
            Ok(json!({"drama_score": 42, "validations": 17}))
        }

        async fn propose_alliance(&self, cmd: &ProposeAlliance) -> Result<Value> {
            self.tally()?;
            Ok(json!({"accepted": true, "name": cmd.name}))
        }
    }
}

use serde_json::Value;

use schema::{CommandKind, InvocationResult};

/// What the caller sees from one invocation: overall success, a
/// human-readable line, and the untouched payload on success.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionOutcome {
    pub ok: bool,
    pub text: String,
    pub payload: Option<Value>,
}

/// Exactly one report per invocation. Never fails.
pub fn report(kind: CommandKind, result: &InvocationResult) -> ActionOutcome {
    match result {
        InvocationResult::Completed { payload } => ActionOutcome {
            ok: true,
            text: success_text(kind, payload),
            payload: Some(payload.clone()),
        },
        InvocationResult::Rejected { reason } => ActionOutcome {
            ok: false,
            text: format!("{}: {}", failure_prefix(kind), reason),
            payload: None,
        },
    }
}

fn success_text(kind: CommandKind, payload: &Value) -> String {
    match kind {
        CommandKind::RegisterAgent => {
            let token = payload.get("token").and_then(|t| t.as_str()).unwrap_or("unknown");
            let agent_id = payload
                .get("agent_id")
                .and_then(|a| a.as_str())
                .unwrap_or("unknown");
            format!(
                "Agent has been registered successfully. Here are the details:\nToken: {}\nAgent ID: {}",
                token, agent_id
            )
        }
        CommandKind::GetNetworkStatus => format!("Network status fetched: {}", payload),
        CommandKind::SubmitVote => format!("Vote submitted successfully: {}", payload),
        CommandKind::ProposeBlock => "Block proposal submitted successfully".to_string(),
        CommandKind::GetAgentStatus => "Agent status fetched.".to_string(),
        CommandKind::ProposeAlliance => "Alliance proposal submitted successfully".to_string(),
    }
}

fn failure_prefix(kind: CommandKind) -> &'static str {
    match kind {
        CommandKind::RegisterAgent => "Registration failed",
        CommandKind::GetNetworkStatus => "Error fetching network status",
        CommandKind::SubmitVote => "Vote submission failed",
        CommandKind::ProposeBlock => "Block proposal failed",
        CommandKind::GetAgentStatus => "Error fetching agent status",
        CommandKind::ProposeAlliance => "Alliance proposal failed",
    }
}

pub mod descriptor;
pub mod validate;

pub use descriptor::{descriptor_for, FieldSpec, FieldType, SchemaDescriptor};
pub use validate::{validate, ValidationError};

use serde::{Deserialize, Serialize};

/// The six action categories the core supports. Fixed at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandKind {
    RegisterAgent,
    GetNetworkStatus,
    SubmitVote,
    ProposeBlock,
    GetAgentStatus,
    ProposeAlliance,
}

impl CommandKind {
    pub const ALL: [CommandKind; 6] = [
        CommandKind::RegisterAgent,
        CommandKind::GetNetworkStatus,
        CommandKind::SubmitVote,
        CommandKind::ProposeBlock,
        CommandKind::GetAgentStatus,
        CommandKind::ProposeAlliance,
    ];

    /// Caller-facing action name.
    pub fn name(&self) -> &'static str {
        match self {
            CommandKind::RegisterAgent => "registerChaosAgent",
            CommandKind::GetNetworkStatus => "getNetworkStatus",
            CommandKind::SubmitVote => "submitVote",
            CommandKind::ProposeBlock => "proposeBlock",
            CommandKind::GetAgentStatus => "getAgentStatus",
            CommandKind::ProposeAlliance => "proposeAlliance",
        }
    }

    pub fn from_name(name: &str) -> Option<CommandKind> {
        CommandKind::ALL.iter().copied().find(|k| k.name() == name)
    }

    /// Status queries carry no command payload; the other four kinds require
    /// a validated payload before any network effect occurs.
    pub fn requires_payload(&self) -> bool {
        !matches!(
            self,
            CommandKind::GetNetworkStatus | CommandKind::GetAgentStatus
        )
    }
}

/// Network role an agent registers as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Validator,
    Producer,
}

impl Role {
    pub fn parse(s: &str) -> Option<Role> {
        match s {
            "validator" => Some(Role::Validator),
            "producer" => Some(Role::Producer),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Validator => "validator",
            Role::Producer => "producer",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterAgent {
    pub name: String,
    pub personality: Vec<String>,
    pub style: String,
    pub stake_amount: f64,
    pub role: Role,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitVote {
    pub block_height: u64,
    pub approved: bool,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProposeBlock {
    pub transactions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProposeAlliance {
    pub name: String,
    pub agents: Vec<String>,
    pub drama_commitment: u8,
}

/// A candidate object that has passed its schema descriptor. Only these
/// values ever reach the network client.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidatedCommand {
    RegisterAgent(RegisterAgent),
    SubmitVote(SubmitVote),
    ProposeBlock(ProposeBlock),
    ProposeAlliance(ProposeAlliance),
    /// The two payload-free kinds.
    StatusQuery(CommandKind),
}

impl ValidatedCommand {
    pub fn kind(&self) -> CommandKind {
        match self {
            ValidatedCommand::RegisterAgent(_) => CommandKind::RegisterAgent,
            ValidatedCommand::SubmitVote(_) => CommandKind::SubmitVote,
            ValidatedCommand::ProposeBlock(_) => CommandKind::ProposeBlock,
            ValidatedCommand::ProposeAlliance(_) => CommandKind::ProposeAlliance,
            ValidatedCommand::StatusQuery(kind) => *kind,
        }
    }
}

/// Registration hands back an auth token plus the assigned agent id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrationReceipt {
    pub token: String,
    pub agent_id: String,
}

/// Terminal outcome of one pipeline invocation. Produced exactly once,
/// consumed immediately by the reporter, never retried.
#[derive(Debug, Clone, PartialEq)]
pub enum InvocationResult {
    Completed { payload: serde_json::Value },
    Rejected { reason: String },
}

impl InvocationResult {
    pub fn is_completed(&self) -> bool {
        matches!(self, InvocationResult::Completed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_name_round_trip() {
        for kind in CommandKind::ALL {
            assert_eq!(CommandKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(CommandKind::from_name("unknownAction"), None);
    }

    #[test]
    fn test_payload_requirements() {
        assert!(CommandKind::RegisterAgent.requires_payload());
        assert!(CommandKind::SubmitVote.requires_payload());
        assert!(CommandKind::ProposeBlock.requires_payload());
        assert!(CommandKind::ProposeAlliance.requires_payload());
        assert!(!CommandKind::GetNetworkStatus.requires_payload());
        assert!(!CommandKind::GetAgentStatus.requires_payload());
    }

    #[test]
    fn test_role_parsing() {
        assert_eq!(Role::parse("validator"), Some(Role::Validator));
        assert_eq!(Role::parse("producer"), Some(Role::Producer));
        assert_eq!(Role::parse("spectator"), None);
    }
}

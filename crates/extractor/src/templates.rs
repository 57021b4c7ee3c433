use schema::CommandKind;

/// Placeholder the composer replaces with the rendered conversation window.
pub const RECENT_MESSAGES: &str = "{{recent_messages}}";

pub const REGISTER_AGENT_TEMPLATE: &str = r#"You are preparing a ChaosChain agent registration.

TASK: From the conversation, determine the parameters of the agent the user wants to register.

{{recent_messages}}

Use only what the user actually said. Do not invent a stake amount or role the user never mentioned; if the user gave none, use stake_amount 0 and role "validator"."#;

pub const GET_NETWORK_STATUS_TEMPLATE: &str = r#"The user is asking about the current state of the ChaosChain network.

{{recent_messages}}"#;

pub const SUBMIT_VOTE_TEMPLATE: &str = r#"You are preparing a block validation vote for ChaosChain.

TASK: From the conversation, determine the block height the user is voting on, whether they approve it, and their stated reason.

{{recent_messages}}

Preserve the user's exact reasoning in the reason field."#;

pub const PROPOSE_BLOCK_TEMPLATE: &str = r#"You are preparing a block proposal for ChaosChain.

TASK: From the conversation, collect the transactions the user wants included in the proposed block.

{{recent_messages}}"#;

pub const GET_AGENT_STATUS_TEMPLATE: &str = r#"The user is asking about their own ChaosChain agent, including drama score and validations.

{{recent_messages}}"#;

pub const PROPOSE_ALLIANCE_TEMPLATE: &str = r#"You are preparing an alliance proposal between ChaosChain agents.

TASK: From the conversation, determine the alliance name, the agent identifiers joining it, and the drama commitment level (1-10).

{{recent_messages}}"#;

/// Static context template for each command kind.
pub fn template_for(kind: CommandKind) -> &'static str {
    match kind {
        CommandKind::RegisterAgent => REGISTER_AGENT_TEMPLATE,
        CommandKind::GetNetworkStatus => GET_NETWORK_STATUS_TEMPLATE,
        CommandKind::SubmitVote => SUBMIT_VOTE_TEMPLATE,
        CommandKind::ProposeBlock => PROPOSE_BLOCK_TEMPLATE,
        CommandKind::GetAgentStatus => GET_AGENT_STATUS_TEMPLATE,
        CommandKind::ProposeAlliance => PROPOSE_ALLIANCE_TEMPLATE,
    }
}

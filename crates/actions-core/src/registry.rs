use schema::CommandKind;

/// Static binding of one action: caller-facing name, context template, and
/// (via the kind) its schema descriptor and network operation.
#[derive(Debug, Clone, Copy)]
pub struct ActionDefinition {
    pub kind: CommandKind,
    pub name: &'static str,
    pub description: &'static str,
    pub similes: &'static [&'static str],
    pub template: &'static str,
}

/// Immutable table of the six actions. Built once at startup and passed by
/// reference into the dispatcher; safe for unsynchronized concurrent reads.
pub struct ActionRegistry {
    actions: [ActionDefinition; 6],
}

impl ActionRegistry {
    pub fn standard() -> Self {
        Self {
            actions: [
                ActionDefinition {
                    kind: CommandKind::RegisterAgent,
                    name: CommandKind::RegisterAgent.name(),
                    description: "Register a new agent with ChaosChain. Stores the auth token for subsequent requests.",
                    similes: &[
                        "Create a new agent",
                        "Register a new agent",
                        "Enroll a new agent",
                        "Sign up for a new agent",
                    ],
                    template: extractor::templates::REGISTER_AGENT_TEMPLATE,
                },
                ActionDefinition {
                    kind: CommandKind::GetNetworkStatus,
                    name: CommandKind::GetNetworkStatus.name(),
                    description: "Fetch current network status from ChaosChain.",
                    similes: &[
                        "Check the status of the network",
                        "Get the current network status",
                    ],
                    template: extractor::templates::GET_NETWORK_STATUS_TEMPLATE,
                },
                ActionDefinition {
                    kind: CommandKind::SubmitVote,
                    name: CommandKind::SubmitVote.name(),
                    description: "Submit a block validation vote (for validators): block height, approval flag, and reason.",
                    similes: &[],
                    template: extractor::templates::SUBMIT_VOTE_TEMPLATE,
                },
                ActionDefinition {
                    kind: CommandKind::ProposeBlock,
                    name: CommandKind::ProposeBlock.name(),
                    description: "Submit a block proposal (for producers).",
                    similes: &[],
                    template: extractor::templates::PROPOSE_BLOCK_TEMPLATE,
                },
                ActionDefinition {
                    kind: CommandKind::GetAgentStatus,
                    name: CommandKind::GetAgentStatus.name(),
                    description: "Retrieve agent status including drama score and validations.",
                    similes: &[
                        "Get agent info",
                        "Fetch my agent status",
                        "Retrieve agent status",
                    ],
                    template: extractor::templates::GET_AGENT_STATUS_TEMPLATE,
                },
                ActionDefinition {
                    kind: CommandKind::ProposeAlliance,
                    name: CommandKind::ProposeAlliance.name(),
                    description: "Propose an alliance between agents in the ChaosChain network.",
                    similes: &[
                        "Propose alliance",
                        "Form an alliance",
                        "Alliance proposal",
                    ],
                    template: extractor::templates::PROPOSE_ALLIANCE_TEMPLATE,
                },
            ],
        }
    }

    /// Total over all six kinds.
    pub fn by_kind(&self, kind: CommandKind) -> &ActionDefinition {
        self.actions
            .iter()
            .find(|a| a.kind == kind)
            .expect("registry covers every command kind")
    }

    pub fn by_name(&self, name: &str) -> Option<&ActionDefinition> {
        self.actions.iter().find(|a| a.name == name)
    }

    pub fn actions(&self) -> &[ActionDefinition] {
        &self.actions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_covers_every_kind() {
        let registry = ActionRegistry::standard();
        for kind in CommandKind::ALL {
            let def = registry.by_kind(kind);
            assert_eq!(def.kind, kind);
            assert_eq!(def.name, kind.name());
            assert!(!def.template.is_empty());
        }
    }

    #[test]
    fn test_lookup_by_name() {
        let registry = ActionRegistry::standard();
        assert!(registry.by_name("submitVote").is_some());
        assert!(registry.by_name("registerChaosAgent").is_some());
        assert!(registry.by_name("mintNft").is_none());
    }
}

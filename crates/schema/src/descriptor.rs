use crate::CommandKind;

/// Primitive shape a candidate field must carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    String,
    StringList,
    Number,
    Integer,
    Bool,
}

impl FieldType {
    pub fn expected(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::StringList => "list of strings",
            FieldType::Number => "number",
            FieldType::Integer => "integer",
            FieldType::Bool => "boolean",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub ty: FieldType,
    /// Human-readable constraint, spliced into extraction prompts.
    pub constraint: &'static str,
}

/// Structural contract a candidate object must satisfy for one command kind.
/// Single source of truth for both the validator and the extraction prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaDescriptor {
    pub kind: CommandKind,
    pub fields: &'static [FieldSpec],
}

impl SchemaDescriptor {
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }
}

static REGISTER_AGENT: SchemaDescriptor = SchemaDescriptor {
    kind: CommandKind::RegisterAgent,
    fields: &[
        FieldSpec { name: "name", ty: FieldType::String, constraint: "non-empty agent name" },
        FieldSpec { name: "personality", ty: FieldType::StringList, constraint: "at least one personality trait" },
        FieldSpec { name: "style", ty: FieldType::String, constraint: "non-empty conversational style" },
        FieldSpec { name: "stake_amount", ty: FieldType::Number, constraint: "non-negative stake" },
        FieldSpec { name: "role", ty: FieldType::String, constraint: "one of: validator, producer" },
    ],
};

static GET_NETWORK_STATUS: SchemaDescriptor = SchemaDescriptor {
    kind: CommandKind::GetNetworkStatus,
    fields: &[],
};

static SUBMIT_VOTE: SchemaDescriptor = SchemaDescriptor {
    kind: CommandKind::SubmitVote,
    fields: &[
        FieldSpec { name: "block_height", ty: FieldType::Integer, constraint: "non-negative block height" },
        FieldSpec { name: "approved", ty: FieldType::Bool, constraint: "approval flag" },
        FieldSpec { name: "reason", ty: FieldType::String, constraint: "rationale for the vote" },
    ],
};

static PROPOSE_BLOCK: SchemaDescriptor = SchemaDescriptor {
    kind: CommandKind::ProposeBlock,
    fields: &[
        FieldSpec { name: "transactions", ty: FieldType::StringList, constraint: "at least one transaction" },
    ],
};

static GET_AGENT_STATUS: SchemaDescriptor = SchemaDescriptor {
    kind: CommandKind::GetAgentStatus,
    fields: &[],
};

static PROPOSE_ALLIANCE: SchemaDescriptor = SchemaDescriptor {
    kind: CommandKind::ProposeAlliance,
    fields: &[
        FieldSpec { name: "name", ty: FieldType::String, constraint: "non-empty alliance name" },
        FieldSpec { name: "agents", ty: FieldType::StringList, constraint: "at least two distinct agent ids" },
        FieldSpec { name: "drama_commitment", ty: FieldType::Integer, constraint: "integer from 1 to 10" },
    ],
};

/// Pure lookup, total over all six command kinds.
pub fn descriptor_for(kind: CommandKind) -> &'static SchemaDescriptor {
    match kind {
        CommandKind::RegisterAgent => &REGISTER_AGENT,
        CommandKind::GetNetworkStatus => &GET_NETWORK_STATUS,
        CommandKind::SubmitVote => &SUBMIT_VOTE,
        CommandKind::ProposeBlock => &PROPOSE_BLOCK,
        CommandKind::GetAgentStatus => &GET_AGENT_STATUS,
        CommandKind::ProposeAlliance => &PROPOSE_ALLIANCE,
    }
}

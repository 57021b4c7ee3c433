use serde_json::Value;

use crate::descriptor::{descriptor_for, FieldType};
use crate::{
    CommandKind, ProposeAlliance, ProposeBlock, RegisterAgent, Role, SubmitVote, ValidatedCommand,
};

/// The violated constraint when an untrusted candidate fails its descriptor.
/// Expected outcome of extraction, reported rather than thrown.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
    #[error("field `{field}` must be a {expected}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
    },
    #[error("{0}")]
    Constraint(String),
}

fn constraint(msg: impl Into<String>) -> ValidationError {
    ValidationError::Constraint(msg.into())
}

/// Structural and semantic check of an untrusted candidate against the
/// descriptor for `kind`. Pure: the same candidate always yields the same
/// outcome. Status-query kinds validate trivially.
pub fn validate(kind: CommandKind, candidate: &Value) -> Result<ValidatedCommand, ValidationError> {
    if !kind.requires_payload() {
        return Ok(ValidatedCommand::StatusQuery(kind));
    }

    check_shape(kind, candidate)?;

    match kind {
        CommandKind::RegisterAgent => validate_register(candidate),
        CommandKind::SubmitVote => validate_vote(candidate),
        CommandKind::ProposeBlock => validate_block(candidate),
        CommandKind::ProposeAlliance => validate_alliance(candidate),
        CommandKind::GetNetworkStatus | CommandKind::GetAgentStatus => {
            unreachable!("status kinds carry no payload")
        }
    }
}

/// Presence and primitive-type pass, driven entirely by the descriptor.
fn check_shape(kind: CommandKind, candidate: &Value) -> Result<(), ValidationError> {
    let descriptor = descriptor_for(kind);
    for field in descriptor.fields {
        let value = candidate
            .get(field.name)
            .ok_or(ValidationError::MissingField(field.name))?;
        let type_ok = match field.ty {
            FieldType::String => value.is_string(),
            FieldType::StringList => value
                .as_array()
                .map(|a| a.iter().all(|v| v.is_string()))
                .unwrap_or(false),
            FieldType::Number => value.is_number(),
            FieldType::Integer => value.is_i64() || value.is_u64(),
            FieldType::Bool => value.is_boolean(),
        };
        if !type_ok {
            return Err(ValidationError::WrongType {
                field: field.name,
                expected: field.ty.expected(),
            });
        }
    }
    Ok(())
}

fn required_str(candidate: &Value, field: &'static str) -> Result<String, ValidationError> {
    // Presence and type are guaranteed by check_shape.
    let s = candidate[field].as_str().unwrap_or_default().trim();
    if s.is_empty() {
        return Err(constraint(format!("{} must not be empty", field)));
    }
    Ok(s.to_string())
}

fn string_list(candidate: &Value, field: &'static str) -> Vec<String> {
    candidate[field]
        .as_array()
        .map(|a| {
            a.iter()
                .filter_map(|v| v.as_str())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn validate_register(candidate: &Value) -> Result<ValidatedCommand, ValidationError> {
    let name = required_str(candidate, "name")?;
    let style = required_str(candidate, "style")?;

    let personality = string_list(candidate, "personality");
    if personality.is_empty() {
        return Err(constraint("personality must list at least one trait"));
    }

    let stake_amount = candidate["stake_amount"].as_f64().unwrap_or(f64::NAN);
    if !stake_amount.is_finite() || stake_amount < 0.0 {
        return Err(constraint("stake_amount must be a non-negative number"));
    }

    let role_raw = candidate["role"].as_str().unwrap_or_default();
    let role = Role::parse(role_raw).ok_or_else(|| {
        constraint(format!(
            "role `{}` is not one of: validator, producer",
            role_raw
        ))
    })?;

    Ok(ValidatedCommand::RegisterAgent(RegisterAgent {
        name,
        personality,
        style,
        stake_amount,
        role,
    }))
}

fn validate_vote(candidate: &Value) -> Result<ValidatedCommand, ValidationError> {
    // Negative heights pass the integer shape check but never the range check.
    let block_height = candidate["block_height"]
        .as_u64()
        .ok_or_else(|| constraint("block_height must be a non-negative integer"))?;
    let approved = candidate["approved"].as_bool().unwrap_or(false);
    let reason = candidate["reason"].as_str().unwrap_or_default().to_string();

    Ok(ValidatedCommand::SubmitVote(SubmitVote {
        block_height,
        approved,
        reason,
    }))
}

fn validate_block(candidate: &Value) -> Result<ValidatedCommand, ValidationError> {
    let transactions = string_list(candidate, "transactions");
    if transactions.is_empty() {
        return Err(constraint("transactions must list at least one entry"));
    }
    Ok(ValidatedCommand::ProposeBlock(ProposeBlock { transactions }))
}

fn validate_alliance(candidate: &Value) -> Result<ValidatedCommand, ValidationError> {
    let name = required_str(candidate, "name")?;

    let agents = string_list(candidate, "agents");
    let mut distinct = agents.clone();
    distinct.sort();
    distinct.dedup();
    if distinct.len() < 2 {
        return Err(constraint("alliance requires at least two distinct agents"));
    }

    let drama = candidate["drama_commitment"].as_i64().unwrap_or(0);
    if !(1..=10).contains(&drama) {
        return Err(constraint("drama_commitment must be between 1 and 10"));
    }

    Ok(ValidatedCommand::ProposeAlliance(ProposeAlliance {
        name,
        agents,
        drama_commitment: drama as u8,
    }))
}

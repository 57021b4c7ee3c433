use anyhow::{Context, Result};
use serde_json::Value;

/// Parse generation-service output into an untrusted candidate object.
///
/// Models wrapped in chat UIs like to fence their JSON; strip that before
/// parsing. A parse failure here means the service returned something that
/// is not JSON at all, which the pipeline treats as an extraction failure
/// (shape problems inside valid JSON are validation's job, not ours).
pub fn parse_candidate(raw: &str) -> Result<Value> {
    let trimmed = strip_code_fence(raw.trim());
    serde_json::from_str(trimmed).context("generation output is not valid JSON")
}

fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    // Drop an optional language tag on the fence line.
    let rest = match rest.find('\n') {
        Some(idx) => &rest[idx + 1..],
        None => rest,
    };
    rest.strip_suffix("```").map(str::trim).unwrap_or(rest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_plain_json() {
        let v = parse_candidate(r#"{"block_height": 150, "approved": true}"#).unwrap();
        assert_eq!(v["block_height"], json!(150));
    }

    #[test]
    fn test_fenced_json() {
        let raw = "```json\n{\"name\": \"Pizza\"}\n```";
        let v = parse_candidate(raw).unwrap();
        assert_eq!(v["name"], json!("Pizza"));
    }

    #[test]
    fn test_non_json_is_an_error() {
        assert!(parse_candidate("I could not find any parameters.").is_err());
    }

    #[test]
    fn test_valid_but_wrong_shape_is_not_an_error() {
        // Shape problems are for schema validation to judge.
        assert!(parse_candidate(r#"{"surprise": []}"#).is_ok());
        assert!(parse_candidate("[1, 2, 3]").is_ok());
    }
}

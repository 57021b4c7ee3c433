use anyhow::{anyhow, Context, Result};
use reqwest::Client as Http;
use serde_json::Value;
use std::sync::Mutex;

use schema::{ProposeAlliance, ProposeBlock, RegisterAgent, RegistrationReceipt, SubmitVote};

/// HTTP client for a ChaosChain node.
///
/// Registration stores the returned auth token; every later call sends it as
/// bearer auth. Remote errors come back with the node's own message so the
/// reporter can surface it verbatim.
pub struct ChainClient {
    http: Http,
    base_url: String,
    token: Mutex<Option<String>>,
}

impl ChainClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self {
            http: Http::builder().pool_max_idle_per_host(8).build()?,
            base_url,
            token: Mutex::new(None),
        })
    }

    /// Convenience: pick up CHAOSCHAIN_API_URL from env.
    pub fn from_env() -> Result<Self> {
        let url = std::env::var("CHAOSCHAIN_API_URL").context("CHAOSCHAIN_API_URL not set")?;
        Self::new(url)
    }

    pub fn token(&self) -> Option<String> {
        self.token.lock().unwrap().clone()
    }

    pub async fn register_agent(&self, cmd: &RegisterAgent) -> Result<RegistrationReceipt> {
        let payload = self.post("/agents/register", cmd).await?;
        let receipt: RegistrationReceipt = serde_json::from_value(payload)
            .context("registration response missing token or agent_id")?;
        *self.token.lock().unwrap() = Some(receipt.token.clone());
        tracing::info!(agent_id = %receipt.agent_id, "registered agent, token stored");
        Ok(receipt)
    }

    pub async fn network_status(&self) -> Result<Value> {
        self.get("/network/status").await
    }

    pub async fn submit_vote(&self, cmd: &SubmitVote) -> Result<Value> {
        self.post("/votes", cmd).await
    }

    pub async fn propose_block(&self, cmd: &ProposeBlock) -> Result<Value> {
        self.post("/blocks/propose", cmd).await
    }

    pub async fn agent_status(&self) -> Result<Value> {
        self.get("/agents/status").await
    }

    pub async fn propose_alliance(&self, cmd: &ProposeAlliance) -> Result<Value> {
        self.post("/alliances/propose", cmd).await
    }

    async fn post<T: serde::Serialize>(&self, path: &str, body: &T) -> Result<Value> {
        let mut req = self.http.post(format!("{}{}", self.base_url, path)).json(body);
        if let Some(token) = self.token() {
            req = req.bearer_auth(token);
        }
        let resp = req.send().await.context("chain request failed")?;
        Self::into_payload(resp).await
    }

    async fn get(&self, path: &str) -> Result<Value> {
        let mut req = self.http.get(format!("{}{}", self.base_url, path));
        if let Some(token) = self.token() {
            req = req.bearer_auth(token);
        }
        let resp = req.send().await.context("chain request failed")?;
        Self::into_payload(resp).await
    }

    async fn into_payload(resp: reqwest::Response) -> Result<Value> {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        if !status.is_success() {
            return Err(anyhow!("{}", remote_error_message(&body, status)));
        }
        serde_json::from_str(&body).context("chain response is not valid JSON")
    }
}

/// Pull the node's human-readable message out of an error body. Falls back
/// to the raw body, then to the status line.
fn remote_error_message(body: &str, status: reqwest::StatusCode) -> String {
    if let Ok(v) = serde_json::from_str::<Value>(body) {
        for key in ["error", "message", "detail"] {
            if let Some(msg) = v.get(key).and_then(|m| m.as_str()) {
                return msg.to_string();
            }
        }
    }
    if !body.trim().is_empty() {
        return body.trim().to_string();
    }
    format!("chain returned {}", status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_error_message_from_json() {
        let status = reqwest::StatusCode::BAD_REQUEST;
        assert_eq!(
            remote_error_message(r#"{"error": "insufficient stake"}"#, status),
            "insufficient stake"
        );
        assert_eq!(
            remote_error_message(r#"{"message": "unknown agent"}"#, status),
            "unknown agent"
        );
    }

    #[test]
    fn test_remote_error_message_from_plain_body() {
        let status = reqwest::StatusCode::INTERNAL_SERVER_ERROR;
        assert_eq!(remote_error_message("node on fire", status), "node on fire");
    }

    #[test]
    fn test_remote_error_message_fallback() {
        let status = reqwest::StatusCode::BAD_GATEWAY;
        assert_eq!(remote_error_message("", status), "chain returned 502 Bad Gateway");
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = ChainClient::new("http://localhost:3000/").unwrap();
        assert_eq!(client.base_url, "http://localhost:3000");
    }

    #[test]
    fn test_token_starts_empty() {
        let client = ChainClient::new("http://localhost:3000").unwrap();
        assert!(client.token().is_none());
    }
}

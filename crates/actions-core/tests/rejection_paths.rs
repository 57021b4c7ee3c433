use std::sync::atomic::Ordering;
use std::sync::Arc;

use actions_core::{mocks::*, ActionDispatcher, ActionRegistry};
use schema::CommandKind;
use serde_json::json;

fn dispatcher(
    generator: ScriptedGenerator,
    chain: CountingChain,
) -> ActionDispatcher<ScriptedGenerator, CountingChain> {
    ActionDispatcher::new(Arc::new(ActionRegistry::standard()), generator, chain)
}

#[tokio::test]
async fn test_negative_block_height_never_reaches_the_chain() {
    let generator = ScriptedGenerator::returning(json!({
        "block_height": -1,
        "approved": true,
        "reason": ""
    }));
    let chain = CountingChain::new();
    let chain_calls = chain.counter();

    let core = dispatcher(generator, chain);
    let outcome = core
        .dispatch(CommandKind::SubmitVote, "vote against block -1", None)
        .await;

    assert!(!outcome.ok);
    assert!(outcome.text.contains("malformed command data"));
    assert!(outcome.text.contains("block_height"));
    assert_eq!(chain_calls.load(Ordering::SeqCst), 0);
    assert_eq!(outcome.payload, None);
}

#[tokio::test]
async fn test_single_member_alliance_rejected_before_dispatch() {
    let generator = ScriptedGenerator::returning(json!({
        "name": "Lonely Alliance",
        "agents": ["agent_a"],
        "drama_commitment": 8
    }));
    let chain = CountingChain::new();
    let chain_calls = chain.counter();

    let core = dispatcher(generator, chain);
    let outcome = core
        .dispatch(CommandKind::ProposeAlliance, "ally with myself", None)
        .await;

    assert!(!outcome.ok);
    assert!(outcome.text.starts_with("Alliance proposal failed"));
    assert!(outcome.text.contains("two distinct agents"));
    assert_eq!(chain_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_missing_field_rejected_before_dispatch() {
    // No 'role' field at all.
    let generator = ScriptedGenerator::returning(json!({
        "name": "Pizza",
        "personality": ["dramatic"],
        "style": "sarcastic",
        "stake_amount": 1000
    }));
    let chain = CountingChain::new();
    let chain_calls = chain.counter();

    let core = dispatcher(generator, chain);
    let outcome = core
        .dispatch(CommandKind::RegisterAgent, "register Pizza", None)
        .await;

    assert!(!outcome.ok);
    assert!(outcome.text.contains("malformed command data"));
    assert!(outcome.text.contains("role"));
    assert_eq!(chain_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_provider_error_surfaced_verbatim() {
    let generator = ScriptedGenerator::returning(json!({"transactions": ["tx1", "tx2"]}));
    let chain = CountingChain::failing("insufficient stake");
    let chain_calls = chain.counter();

    let core = dispatcher(generator, chain);
    let outcome = core
        .dispatch(CommandKind::ProposeBlock, "propose a block with tx1 and tx2", None)
        .await;

    assert!(!outcome.ok);
    assert_eq!(outcome.text, "Block proposal failed: insufficient stake");
    // The call happened; the rejection came from the remote side.
    assert_eq!(chain_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_extraction_failure_rejected_without_network_call() {
    let generator = ScriptedGenerator::failing("generation service unreachable");
    let chain = CountingChain::new();
    let chain_calls = chain.counter();

    let core = dispatcher(generator, chain);
    let outcome = core
        .dispatch(CommandKind::SubmitVote, "vote yes on block 150", None)
        .await;

    assert!(!outcome.ok);
    assert!(outcome.text.contains("extraction failed"));
    assert!(outcome.text.contains("generation service unreachable"));
    assert_eq!(chain_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_rejection_is_repeatable() {
    let candidate = json!({"block_height": -1, "approved": true, "reason": ""});

    let first = {
        let core = dispatcher(ScriptedGenerator::returning(candidate.clone()), CountingChain::new());
        core.dispatch(CommandKind::SubmitVote, "vote", None).await
    };
    let second = {
        let core = dispatcher(ScriptedGenerator::returning(candidate), CountingChain::new());
        core.dispatch(CommandKind::SubmitVote, "vote", None).await
    };

    assert_eq!(first.text, second.text);
    assert_eq!(first.ok, second.ok);
}

#[tokio::test]
async fn test_status_query_provider_failure_is_reported_not_thrown() {
    let generator = ScriptedGenerator::failing("unused");
    let chain = CountingChain::failing("node unreachable");
    let chain_calls = chain.counter();

    let core = dispatcher(generator, chain);
    let outcome = core
        .dispatch(CommandKind::GetNetworkStatus, "network status please", None)
        .await;

    assert!(!outcome.ok);
    assert_eq!(outcome.text, "Error fetching network status: node unreachable");
    assert_eq!(chain_calls.load(Ordering::SeqCst), 1);
}

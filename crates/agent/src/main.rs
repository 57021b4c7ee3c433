mod adapters;
mod config;

use std::io::Write;
use std::sync::Arc;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use actions_core::{ActionDispatcher, ActionRegistry};
use adapters::LiveChain;
use extractor::{ConversationState, GroqGenerator};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cfg = match config::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Please run: export CHAOSCHAIN_API_URL=http://localhost:3000");
            return Ok(());
        }
    };
    if let Err(e) = config::require_groq_api_key() {
        eprintln!("Error: {}", e);
        eprintln!("Please run: export GROQ_API_KEY=your_key_here");
        return Ok(());
    }

    let registry = Arc::new(ActionRegistry::standard());
    let generator = GroqGenerator::from_env()?;
    let chain = LiveChain::new(chain::ChainClient::new(cfg.chain_url.as_str())?);
    let dispatcher = ActionDispatcher::new(registry, generator, chain);

    println!("ChaosChain agent connected to {}", cfg.chain_url);
    println!("Type `help` for the action list, `quit` to exit.");

    let mut state = ConversationState::new();
    let stdin = std::io::stdin();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            break; // EOF
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match line {
            "quit" | "exit" => break,
            "help" => {
                print_help(dispatcher.registry());
                continue;
            }
            _ => {}
        }

        let (action, message) = match line.split_once(char::is_whitespace) {
            Some((action, rest)) => (action, rest.trim()),
            None => (line, ""),
        };

        let outcome = dispatcher.dispatch_named(action, message, Some(&state)).await;
        println!("{}", outcome.text);

        // Conversation history is owned here, not by the core.
        state.record_user(message);
        state.record_agent(&outcome.text);
    }

    Ok(())
}

fn print_help(registry: &ActionRegistry) {
    println!("Usage: <action> <message>, e.g.");
    println!("  submitVote approve block 150, it looks valid\n");
    for def in registry.actions() {
        println!("  {:<22} {}", def.name, def.description);
    }
}

use crate::memory::ConversationState;
use crate::templates::RECENT_MESSAGES;

/// Prompt context handed to the generation service for one invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationContext {
    pub prompt: String,
}

/// Splice the rendered conversation window into the action's template.
/// Pure function of its inputs: composition never writes to the state, and
/// an absent/empty state simply renders to nothing.
pub fn compose(state: &ConversationState, template: &str) -> EvaluationContext {
    let history = state.render();
    let prompt = if template.contains(RECENT_MESSAGES) {
        template.replace(RECENT_MESSAGES, &history)
    } else {
        // Defensive default for caller-supplied templates.
        format!("{}\n\n{}", template, history)
    };
    EvaluationContext { prompt }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates;
    use schema::CommandKind;

    #[test]
    fn test_compose_splices_history() {
        let mut state = ConversationState::new();
        state.record_user("register agent Pizza with stake 1000");

        let ctx = compose(&state, templates::template_for(CommandKind::RegisterAgent));
        assert!(ctx.prompt.contains("agent registration"));
        assert!(ctx.prompt.contains("register agent Pizza with stake 1000"));
        assert!(!ctx.prompt.contains(templates::RECENT_MESSAGES));
    }

    #[test]
    fn test_compose_with_empty_state() {
        let state = ConversationState::default();
        let ctx = compose(&state, templates::template_for(CommandKind::SubmitVote));
        assert!(ctx.prompt.contains("block validation vote"));
    }

    #[test]
    fn test_compose_is_pure() {
        let mut state = ConversationState::new();
        state.record_user("what's my agent status?");

        let before = state.len();
        let first = compose(&state, templates::template_for(CommandKind::GetAgentStatus));
        let second = compose(&state, templates::template_for(CommandKind::GetAgentStatus));
        assert_eq!(first, second);
        assert_eq!(state.len(), before);
    }

    #[test]
    fn test_compose_without_placeholder_appends() {
        let mut state = ConversationState::new();
        state.record_user("hello");
        let ctx = compose(&state, "Custom template with no slot.");
        assert!(ctx.prompt.starts_with("Custom template"));
        assert!(ctx.prompt.contains("hello"));
    }
}

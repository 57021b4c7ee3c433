/// Per-invocation pipeline state. Every invocation walks this machine left
/// to right; `Rejected` is reachable from any non-terminal state past
/// `Idle`, and nothing ever walks backwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvocationState {
    Idle,
    ContextReady,
    Extracted,
    Validated,
    Dispatched,
    Completed,
    Rejected,
}

impl InvocationState {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvocationState::Idle => "idle",
            InvocationState::ContextReady => "context_ready",
            InvocationState::Extracted => "extracted",
            InvocationState::Validated => "validated",
            InvocationState::Dispatched => "dispatched",
            InvocationState::Completed => "completed",
            InvocationState::Rejected => "rejected",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, InvocationState::Completed | InvocationState::Rejected)
    }

    /// Legal forward transitions. Status queries go straight from
    /// `ContextReady` to `Dispatched`; payload kinds pass through
    /// `Extracted` and `Validated` first.
    pub fn can_advance_to(&self, next: InvocationState) -> bool {
        use InvocationState::*;
        match (*self, next) {
            (Idle, ContextReady) => true,
            (ContextReady, Extracted) => true,
            (ContextReady, Dispatched) => true,
            (Extracted, Validated) => true,
            (Validated, Dispatched) => true,
            (Dispatched, Completed) => true,
            (ContextReady | Extracted | Validated | Dispatched, Rejected) => true,
            _ => false,
        }
    }
}

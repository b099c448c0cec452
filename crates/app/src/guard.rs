//! Transition guard — the explicit state flow behind the "discard unsaved
//! changes?" confirmation.
//!
//! A navigation-start signal either passes through (`Allow`) or is
//! suppressed while the user decides (`Prompt`). While prompting, the
//! pending target is captured immutably; the user's choice later resumes
//! or abandons it.

/// Target of an in-app transition: state name plus opaque params.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionTarget {
    pub state: String,
    pub params: serde_json::Value,
}

impl TransitionTarget {
    #[must_use]
    pub fn new(state: impl Into<String>, params: serde_json::Value) -> Self {
        Self {
            state: state.into(),
            params,
        }
    }
}

/// Guard lifecycle: idle, or holding a suppressed transition.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum GuardState {
    #[default]
    Idle,
    /// A transition was suppressed and awaits the user's save/discard/
    /// cancel choice.
    Pending(TransitionTarget),
}

impl GuardState {
    /// Take the pending target, resetting the guard to idle.
    #[must_use]
    pub fn take_pending(&mut self) -> Option<TransitionTarget> {
        match std::mem::take(self) {
            Self::Idle => None,
            Self::Pending(target) => Some(target),
        }
    }
}

/// Verdict for a navigation-start signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionDecision {
    /// Let the transition proceed untouched.
    Allow,
    /// Transition suppressed; the confirmation dialog is showing.
    Prompt,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_start_idle() {
        assert_eq!(GuardState::default(), GuardState::Idle);
    }

    #[test]
    fn should_return_none_when_taking_from_idle() {
        let mut guard = GuardState::Idle;
        assert_eq!(guard.take_pending(), None);
        assert_eq!(guard, GuardState::Idle);
    }

    #[test]
    fn should_reset_to_idle_when_taking_pending_target() {
        let target = TransitionTarget::new("home.manage", serde_json::json!({"config": "default"}));
        let mut guard = GuardState::Pending(target.clone());

        assert_eq!(guard.take_pending(), Some(target));
        assert_eq!(guard, GuardState::Idle);
    }
}

//! UI-side ports — implemented by the host screen.
//!
//! These are synchronous: the host form framework dispatches them inside
//! the UI event that raised them.

use std::fmt;
use std::sync::Arc;

/// Severity of a transient user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Error,
}

impl fmt::Display for MessageLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => f.write_str("info"),
            Self::Error => f.write_str("error"),
        }
    }
}

/// Displays transient info/error messages identified by fixed message codes.
pub trait Notifier {
    fn show(&self, level: MessageLevel, code: &str);
}

/// Performs in-app state transitions.
pub trait Navigator {
    /// Go to the named application state, carrying opaque params.
    fn go_to(&self, state: &str, params: &serde_json::Value);
}

/// Options passed when opening the save-confirmation modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmOptions {
    /// Identifier of the confirmation view template.
    pub template: String,
    /// Whether pressing escape dismisses the modal.
    pub close_by_escape: bool,
}

/// The modal asking the user to save, discard, or cancel.
pub trait ConfirmDialog {
    fn open_confirm(&self, options: ConfirmOptions);
    fn close(&self);
}

impl<T: Notifier + Send + Sync> Notifier for Arc<T> {
    fn show(&self, level: MessageLevel, code: &str) {
        (**self).show(level, code);
    }
}

impl<T: Navigator + Send + Sync> Navigator for Arc<T> {
    fn go_to(&self, state: &str, params: &serde_json::Value) {
        (**self).go_to(state, params);
    }
}

impl<T: ConfirmDialog + Send + Sync> ConfirmDialog for Arc<T> {
    fn open_confirm(&self, options: ConfirmOptions) {
        (**self).open_confirm(options);
    }

    fn close(&self) {
        (**self).close();
    }
}

//! Headless implementations of the UI-side ports.
//!
//! The CLI has no screen to drive, so transitions and dialogs are simply
//! logged. Notifications go over the [`NotificationBus`] and are logged
//! by a subscriber task in `main`.
//!
//! [`NotificationBus`]: opdesk_app::notify_bus::NotificationBus

use opdesk_app::ports::{ConfirmDialog, ConfirmOptions, Navigator};

/// Navigator that records transitions in the log only.
pub struct TracingNavigator;

impl Navigator for TracingNavigator {
    fn go_to(&self, state: &str, params: &serde_json::Value) {
        tracing::info!(state, %params, "transition");
    }
}

/// Confirm dialog that records open/close in the log only.
pub struct TracingDialog;

impl ConfirmDialog for TracingDialog {
    fn open_confirm(&self, options: ConfirmOptions) {
        tracing::info!(template = options.template, "confirmation opened");
    }

    fn close(&self) {
        tracing::info!("confirmation closed");
    }
}

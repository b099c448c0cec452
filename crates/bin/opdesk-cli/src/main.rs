//! # opdesk-cli
//!
//! Composition root that wires the REST directories into the
//! appointment-service form controller and runs a backend connectivity
//! check.
//!
//! ## Responsibilities
//! - Parse configuration (`opdesk.toml`, env vars)
//! - Construct the REST client and directory implementations (adapters)
//! - Construct the form controller, injecting directories via port traits
//! - Report what the controller fetched, then exit
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;
mod ui;

use std::sync::Arc;

use opdesk_adapter_rest::{
    RestClient, RestLocationDirectory, RestServiceDirectory, RestSpecialityDirectory,
};
use opdesk_app::notify_bus::NotificationBus;
use opdesk_app::services::ServiceFormController;

use self::config::Config;
use self::ui::{TracingDialog, TracingNavigator};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&config.logging.filter))
        .init();

    // Adapters
    let client = Arc::new(RestClient::new(&config.backend)?);
    let service_directory = RestServiceDirectory::new(Arc::clone(&client));
    let location_directory = RestLocationDirectory::new(Arc::clone(&client));
    let speciality_directory = RestSpecialityDirectory::new(client);

    // Notifications
    let bus = Arc::new(NotificationBus::new(64));
    let mut notifications = bus.subscribe();
    tokio::spawn(async move {
        while let Ok(notification) = notifications.recv().await {
            tracing::info!(
                level = %notification.level,
                code = notification.code,
                "notification"
            );
        }
    });

    // Controller
    tracing::info!(backend = config.backend.base_url, "checking backend");
    let controller = ServiceFormController::initialize(
        service_directory,
        &location_directory,
        &speciality_directory,
        config.form,
        bus,
        TracingNavigator,
        TracingDialog,
    )
    .await?;

    tracing::info!(
        services = controller.services.len(),
        locations = controller.locations.len(),
        specialities = controller
            .specialities
            .as_ref()
            .map_or(0, std::vec::Vec::len),
        default_color = controller.draft.color,
        "backend reachable"
    );

    Ok(())
}

//! End-to-end exercise of the form controller: initialize from fake
//! directories, edit, get intercepted by the unsaved-changes guard, and
//! finally save with notifications observed through the bus.

use std::future::Future;
use std::sync::{Arc, Mutex};

use opdesk_app::config::FormConfig;
use opdesk_app::guard::{TransitionDecision, TransitionTarget};
use opdesk_app::notify_bus::NotificationBus;
use opdesk_app::ports::{
    ConfirmDialog, ConfirmOptions, LocationDirectory, MessageLevel, Navigator, ServiceDirectory,
    SpecialityDirectory,
};
use opdesk_app::services::{SaveOutcome, ServiceFormController};
use opdesk_domain::error::OpdeskError;
use opdesk_domain::id::{LocationId, SpecialityId};
use opdesk_domain::location::Location;
use opdesk_domain::record::AppointmentServiceRecord;
use opdesk_domain::speciality::Speciality;
use opdesk_domain::summary::ServiceSummary;

#[derive(Default)]
struct InMemoryDirectory {
    services: Vec<ServiceSummary>,
    saved: Mutex<Vec<AppointmentServiceRecord>>,
}

impl ServiceDirectory for InMemoryDirectory {
    fn get_all_services(
        &self,
    ) -> impl Future<Output = Result<Vec<ServiceSummary>, OpdeskError>> + Send {
        let services = self.services.clone();
        async { Ok(services) }
    }

    fn save(
        &self,
        record: AppointmentServiceRecord,
    ) -> impl Future<Output = Result<(), OpdeskError>> + Send {
        self.saved.lock().unwrap().push(record);
        async { Ok(()) }
    }
}

struct InMemoryLocations(Vec<Location>);

impl LocationDirectory for InMemoryLocations {
    fn get_all_by_tag(
        &self,
        _tag: &str,
    ) -> impl Future<Output = Result<Vec<Location>, OpdeskError>> + Send {
        let locations = self.0.clone();
        async { Ok(locations) }
    }
}

struct InMemorySpecialities(Vec<Speciality>);

impl SpecialityDirectory for InMemorySpecialities {
    fn get_all_specialities(
        &self,
    ) -> impl Future<Output = Result<Vec<Speciality>, OpdeskError>> + Send {
        let specialities = self.0.clone();
        async { Ok(specialities) }
    }
}

#[derive(Default)]
struct RecordingNavigator {
    visits: Mutex<Vec<(String, serde_json::Value)>>,
}

impl Navigator for RecordingNavigator {
    fn go_to(&self, state: &str, params: &serde_json::Value) {
        self.visits
            .lock()
            .unwrap()
            .push((state.to_string(), params.clone()));
    }
}

#[derive(Default)]
struct RecordingDialog {
    open_count: Mutex<usize>,
    close_count: Mutex<usize>,
}

impl ConfirmDialog for RecordingDialog {
    fn open_confirm(&self, _options: ConfirmOptions) {
        *self.open_count.lock().unwrap() += 1;
    }

    fn close(&self) {
        *self.close_count.lock().unwrap() += 1;
    }
}

#[tokio::test]
async fn should_drive_a_full_edit_guard_and_save_flow() {
    let directory = Arc::new(InMemoryDirectory {
        services: vec![ServiceSummary::new("Oncology", None)],
        ..InMemoryDirectory::default()
    });
    let bus = Arc::new(NotificationBus::new(16));
    let mut notifications = bus.subscribe();
    let navigator = Arc::new(RecordingNavigator::default());
    let dialog = Arc::new(RecordingDialog::default());

    let config = FormConfig {
        enable_specialities: true,
        enable_service_types: true,
        enable_calendar_view: true,
        colors: vec!["#000000".to_string()],
    };
    let mut controller = ServiceFormController::initialize(
        Arc::clone(&directory),
        &InMemoryLocations(vec![Location::new(LocationId::new(), "OPD1")]),
        &InMemorySpecialities(vec![Speciality::new(SpecialityId::new(), "Cardiology")]),
        config,
        Arc::clone(&bus),
        Arc::clone(&navigator),
        Arc::clone(&dialog),
    )
    .await
    .unwrap();

    assert_eq!(controller.locations.len(), 1);
    assert_eq!(controller.draft.color, "#000000");

    // The user types a unique name; the form turns dirty.
    controller.draft.name = Some("Chemotherapy".to_string());
    controller.form.dirty = true;
    controller.validate_service_name();
    assert!(!controller.form.invalid);

    // Navigating away mid-edit is intercepted; the user opts to stay.
    let decision = controller.on_transition_start(TransitionTarget::new(
        "home.manage",
        serde_json::Value::Null,
    ));
    assert_eq!(decision, TransitionDecision::Prompt);
    controller.cancel_transition();
    assert_eq!(*dialog.close_count.lock().unwrap(), 1);
    assert!(navigator.visits.lock().unwrap().is_empty());

    // Saving persists the record, notifies, and leaves the form.
    let outcome = controller.save().await.unwrap();
    assert_eq!(outcome, SaveOutcome::Saved);

    let saved = directory.saved.lock().unwrap();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].name, "Chemotherapy");

    let notification = notifications.try_recv().unwrap();
    assert_eq!(notification.level, MessageLevel::Info);
    assert_eq!(notification.code, "APPOINTMENT_SERVICE_SAVE_SUCCESS");

    assert_eq!(
        *navigator.visits.lock().unwrap(),
        vec![("home.admin.service".to_string(), serde_json::Value::Null)]
    );
}

#[tokio::test]
async fn should_broadcast_invalid_form_error_over_the_bus() {
    let directory = Arc::new(InMemoryDirectory::default());
    let bus = Arc::new(NotificationBus::new(16));
    let mut notifications = bus.subscribe();

    let mut controller = ServiceFormController::initialize(
        Arc::clone(&directory),
        &InMemoryLocations(Vec::new()),
        &InMemorySpecialities(Vec::new()),
        FormConfig::default(),
        Arc::clone(&bus),
        Arc::new(RecordingNavigator::default()),
        Arc::new(RecordingDialog::default()),
    )
    .await
    .unwrap();
    controller.form.invalid = true;

    let outcome = controller.save().await.unwrap();

    assert_eq!(outcome, SaveOutcome::InvalidForm);
    let notification = notifications.try_recv().unwrap();
    assert_eq!(notification.level, MessageLevel::Error);
    assert_eq!(notification.code, "INVALID_SERVICE_FORM_ERROR_MESSAGE");
    assert!(directory.saved.lock().unwrap().is_empty());
}

//! Appointment-service form controller — the use-cases behind the
//! create/edit service admin screen.
//!
//! On construction the controller issues its reference-data fetches
//! (locations, existing services, specialities when enabled) as
//! independent concurrent requests; each populates only its own field, so
//! completion order does not matter. Everything afterwards is driven by
//! user events: field edits, the save click, and navigation attempts
//! intercepted by the unsaved-changes guard.

use opdesk_domain::draft::ServiceDraft;
use opdesk_domain::error::OpdeskError;
use opdesk_domain::location::Location;
use opdesk_domain::record::AppointmentServiceRecord;
use opdesk_domain::speciality::Speciality;
use opdesk_domain::summary::ServiceSummary;

use crate::config::FormConfig;
use crate::form::{FormState, ValidityKey};
use crate::guard::{GuardState, TransitionDecision, TransitionTarget};
use crate::ports::{
    ConfirmDialog, ConfirmOptions, LocationDirectory, MessageLevel, Navigator, Notifier,
    ServiceDirectory, SpecialityDirectory,
};

/// Message code shown after a successful save.
pub const SAVE_SUCCESS_CODE: &str = "APPOINTMENT_SERVICE_SAVE_SUCCESS";
/// Message code shown when the enclosing form is invalid at save time.
pub const INVALID_FORM_CODE: &str = "INVALID_SERVICE_FORM_ERROR_MESSAGE";
/// Message code shown when the directory rejects a save.
pub const SAVE_FAILURE_CODE: &str = "APPOINTMENT_SERVICE_SAVE_FAILURE";
/// Tag identifying locations where appointment services run.
pub const APPOINTMENT_LOCATION_TAG: &str = "Appointment Location";
/// Navigation state listing all appointment services.
pub const SERVICE_LIST_STATE: &str = "home.admin.service";
/// View template of the save-confirmation modal.
pub const SAVE_CONFIRMATION_TEMPLATE: &str = "views/admin/appointmentServiceSaveConfirmation.html";

/// What a [`ServiceFormController::save`] call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The record was persisted and the user was sent to the service list.
    Saved,
    /// The enclosing form was invalid; nothing was sent to the backend.
    InvalidForm,
}

/// Stateful controller bound to the appointment-service form.
pub struct ServiceFormController<D, N, V, C> {
    directory: D,
    notifier: N,
    navigator: V,
    dialog: C,
    /// Typed feature flags, resolved once at startup.
    pub config: FormConfig,
    /// Locations tagged for appointment services, as fetched.
    pub locations: Vec<Location>,
    /// Every persisted service, for the uniqueness check.
    pub services: Vec<ServiceSummary>,
    /// Speciality list; stays `None` when the feature is disabled.
    pub specialities: Option<Vec<Speciality>>,
    /// The in-progress draft bound to the form fields.
    pub draft: ServiceDraft,
    /// Host form framework state (dirty/invalid flags, validity keys).
    pub form: FormState,
    guard: GuardState,
}

impl<D, N, V, C> ServiceFormController<D, N, V, C>
where
    D: ServiceDirectory,
    N: Notifier,
    V: Navigator,
    C: ConfirmDialog,
{
    /// Build the controller, issuing the initialization fetches.
    ///
    /// The location, service, and speciality requests are independent and
    /// run concurrently; the speciality fetch is skipped entirely when
    /// `config.enable_specialities` is off. The draft starts empty with
    /// the configured default color.
    ///
    /// # Errors
    ///
    /// Propagates the first directory failure; there is no retry and no
    /// partially-initialized controller.
    #[tracing::instrument(skip_all)]
    pub async fn initialize(
        directory: D,
        location_directory: &impl LocationDirectory,
        speciality_directory: &impl SpecialityDirectory,
        config: FormConfig,
        notifier: N,
        navigator: V,
        dialog: C,
    ) -> Result<Self, OpdeskError> {
        let speciality_fetch = async {
            if config.enable_specialities {
                speciality_directory.get_all_specialities().await.map(Some)
            } else {
                Ok::<_, OpdeskError>(None)
            }
        };
        let (locations, services, specialities) = tokio::join!(
            location_directory.get_all_by_tag(APPOINTMENT_LOCATION_TAG),
            directory.get_all_services(),
            speciality_fetch,
        );

        let draft = ServiceDraft::empty(config.default_color());
        Ok(Self {
            directory,
            notifier,
            navigator,
            dialog,
            config,
            locations: locations?,
            services: services?,
            specialities: specialities?,
            draft,
            form: FormState::default(),
            guard: GuardState::default(),
        })
    }

    /// Check the draft name for case-insensitive collisions with existing
    /// services and record the verdict under the `uniqueServiceName` key.
    ///
    /// An empty or unset name is always valid at this check; emptiness is
    /// the concern of a different validator.
    pub fn validate_service_name(&mut self) {
        let unique = match self.draft.name.as_deref() {
            None | Some("") => true,
            Some(name) => {
                let lowered = name.to_lowercase();
                !self
                    .services
                    .iter()
                    .any(|existing| existing.name.to_lowercase() == lowered)
            }
        };
        self.form.set_validity(ValidityKey::UniqueServiceName, unique);
    }

    /// Submit the draft.
    ///
    /// An invalid form short-circuits with an error notification and no
    /// backend call. Otherwise the draft is normalized (stale fields
    /// cleared, matching validity keys marked valid), converted to the
    /// persistence record, and sent to the directory; success notifies
    /// the user and navigates to the service list.
    ///
    /// # Errors
    ///
    /// Returns [`OpdeskError::Validation`] when the draft cannot form a
    /// record, or the directory error on a rejected save. A rejected save
    /// also raises an error notification and stays on the form.
    #[tracing::instrument(skip(self))]
    pub async fn save(&mut self) -> Result<SaveOutcome, OpdeskError> {
        if self.form.invalid {
            self.notifier.show(MessageLevel::Error, INVALID_FORM_CODE);
            return Ok(SaveOutcome::InvalidForm);
        }

        let cleared = self.draft.clear_stale_fields();
        if cleared.times {
            self.form.set_validity(ValidityKey::TimeSequence, true);
        }
        if cleared.load_limit {
            self.form.set_validity(ValidityKey::MinLoad, true);
        }

        let record = AppointmentServiceRecord::try_from(&self.draft)?;
        if let Err(err) = self.directory.save(record).await {
            self.notifier.show(MessageLevel::Error, SAVE_FAILURE_CODE);
            return Err(err);
        }

        self.notifier.show(MessageLevel::Info, SAVE_SUCCESS_CODE);
        self.navigator
            .go_to(SERVICE_LIST_STATE, &serde_json::Value::Null);
        Ok(SaveOutcome::Saved)
    }

    /// Handle an impending navigation away from the form.
    ///
    /// A clean form, or a draft whose only set field is the color, passes
    /// through silently. Otherwise the transition is suppressed: the
    /// target is captured and the save-confirmation modal opens.
    pub fn on_transition_start(&mut self, target: TransitionTarget) -> TransitionDecision {
        if !self.form.dirty || !self.draft.has_unsaved_input() {
            return TransitionDecision::Allow;
        }

        self.dialog.open_confirm(ConfirmOptions {
            template: SAVE_CONFIRMATION_TEMPLATE.to_string(),
            close_by_escape: true,
        });
        self.guard = GuardState::Pending(target);
        TransitionDecision::Prompt
    }

    /// The user chose to stay: close the modal, keep the current state.
    pub fn cancel_transition(&mut self) {
        self.dialog.close();
        self.guard = GuardState::Idle;
    }

    /// The user chose to discard: close the modal and resume the
    /// suppressed transition, bypassing the dirty guard.
    pub fn continue_without_saving(&mut self) {
        self.dialog.close();
        if let Some(target) = self.guard.take_pending() {
            self.navigator.go_to(&target.state, &target.params);
        }
    }

    /// The transition currently awaiting the user's choice, if any.
    #[must_use]
    pub fn pending_transition(&self) -> Option<&TransitionTarget> {
        match &self.guard {
            GuardState::Idle => None,
            GuardState::Pending(target) => Some(target),
        }
    }
}

//! # Onboarding Handlers
//!
//! Handlers for the KYC onboarding form.

use crate::app::state::{AppState, SERVICES};
use crate::core::error::ValidationError;
use crate::utils::validation::{validate_email, validate_required};
use parking_lot::RwLock;
use shared::dto::trade::OnboardingApplication;
use std::sync::Arc;

/// Onboarding form fields addressable by the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnboardingField {
    FullName,
    CompanyName,
    Country,
    Address,
    Email,
    Whatsapp,
}

/// Handle a form field edit.
///
/// Internal handler function - use [`crate::app::App::handle_onboarding_field`] instead.
pub(crate) fn handle_field_input(
    state: Arc<RwLock<AppState>>,
    field: OnboardingField,
    value: String,
) {
    let mut state = state.write();
    let form = &mut state.onboarding;
    match field {
        OnboardingField::FullName => form.full_name = value,
        OnboardingField::CompanyName => form.company_name = value,
        OnboardingField::Country => form.country = value,
        OnboardingField::Address => form.address = value,
        OnboardingField::Email => form.email = value,
        OnboardingField::Whatsapp => form.whatsapp = value,
    }
}

/// Toggle one of the service checkboxes.
///
/// Internal handler function - use [`crate::app::App::handle_service_toggle`] instead.
pub(crate) fn handle_service_toggle(state: Arc<RwLock<AppState>>, service_idx: usize) {
    if service_idx >= SERVICES.len() {
        return;
    }
    let mut state = state.write();
    state.onboarding.selected_services[service_idx] = !state.onboarding.selected_services[service_idx];
}

/// Validate the application form. Public so the submit path and tests share
/// one rule set.
pub fn validate_application(state: &AppState) -> Vec<ValidationError> {
    let form = &state.onboarding;
    let mut errors = Vec::new();

    if let Some(e) = validate_required("full name", &form.full_name).error {
        errors.push(e);
    }
    if let Some(e) = validate_email(&form.email).error {
        errors.push(e);
    }
    if !form.selected_services.iter().any(|s| *s) {
        errors.push(ValidationError::missing("services"));
    }

    errors
}

/// Submit the onboarding form.
///
/// Internal handler function - use [`crate::app::App::handle_onboarding_submit`] instead.
pub(crate) fn handle_submit(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();

    let errors = validate_application(&state);
    if !errors.is_empty() {
        tracing::debug!(count = errors.len(), "Onboarding rejected with field errors");
        state.onboarding.errors = errors;
        state.onboarding.submitted = false;
        return;
    }

    let application = OnboardingApplication {
        full_name: state.onboarding.full_name.trim().to_string(),
        company_name: state.onboarding.company_name.trim().to_string(),
        country: state.onboarding.country.trim().to_string(),
        address: state.onboarding.address.trim().to_string(),
        email: state.onboarding.email.trim().to_string(),
        whatsapp: state.onboarding.whatsapp.trim().to_string(),
        services: state.onboarding.selected_service_names(),
    };
    tracing::info!(
        company = %application.company_name,
        services = application.services.len(),
        "Onboarding application submitted"
    );

    state.onboarding.errors.clear();
    state.onboarding.submitted = true;
}

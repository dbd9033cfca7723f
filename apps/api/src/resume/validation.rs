//! Standalone validation for the candidate submission form.
//!
//! `validate` takes the raw submitted values and either returns a normalized
//! [`NewResume`] or a field-keyed map of messages. It has no side effects;
//! persisting (and storing uploads) is up to the caller.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::resume::{NewResume, GENDERS, JOB_CITIES, STATES};

/// Per-field validation messages, keyed by form field name.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FieldErrors(pub BTreeMap<&'static str, String>);

impl FieldErrors {
    fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Raw values as they arrive from the multipart form. Everything is untyped
/// text except `job_city`, which is the repeated multi-select field.
#[derive(Debug, Clone, Default)]
pub struct ResumeSubmission {
    pub name: String,
    pub dob: String,
    pub gender: String,
    pub locality: String,
    pub city: String,
    pub pin: String,
    pub state: String,
    pub mobile: String,
    pub email: String,
    pub job_city: Vec<String>,
}

pub fn validate(sub: &ResumeSubmission) -> Result<NewResume, FieldErrors> {
    let mut errors = FieldErrors::default();

    let name = sub.name.trim();
    if name.is_empty() {
        errors.push("name", "This field is required.");
    }

    let dob = match NaiveDate::parse_from_str(sub.dob.trim(), "%Y-%m-%d") {
        Ok(d) => Some(d),
        Err(_) => {
            errors.push("dob", "Enter a valid date in YYYY-MM-DD format.");
            None
        }
    };

    if !GENDERS.contains(&sub.gender.as_str()) {
        errors.push("gender", "Select a valid gender.");
    }

    let locality = sub.locality.trim();
    if locality.is_empty() {
        errors.push("locality", "This field is required.");
    }

    let city = sub.city.trim();
    if city.is_empty() {
        errors.push("city", "This field is required.");
    }

    let pin = match sub.pin.trim().parse::<i32>() {
        Ok(n) if n >= 0 => Some(n),
        _ => {
            errors.push("pin", "Enter a non-negative whole number.");
            None
        }
    };

    if !STATES.contains(&sub.state.as_str()) {
        errors.push("state", "Select a valid state.");
    }

    let mobile = match sub.mobile.trim().parse::<i64>() {
        Ok(n) => Some(n),
        Err(_) => {
            errors.push("mobile", "Enter a whole number within 64-bit range.");
            None
        }
    };

    let email = sub.email.trim();
    if !is_valid_email(email) {
        errors.push("email", "Enter a valid email address.");
    }

    for selection in &sub.job_city {
        if !JOB_CITIES.contains(&selection.as_str()) {
            errors.push(
                "job_city",
                format!("'{selection}' is not one of the available job cities."),
            );
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(NewResume {
        name: name.to_string(),
        dob: dob.unwrap(),
        gender: sub.gender.clone(),
        locality: locality.to_string(),
        city: city.to_string(),
        pin: pin.unwrap(),
        state: sub.state.clone(),
        mobile: mobile.unwrap(),
        email: email.to_string(),
        job_city: serialize_job_cities(&sub.job_city),
        profile_image: None,
        resume_file: None,
    })
}

/// De-duplicates the selections (keeping first-seen order) and joins them
/// with `", "`. An empty selection serializes to the empty string; that is
/// valid here, not an error.
pub fn serialize_job_cities(selected: &[String]) -> String {
    let mut seen: Vec<&str> = Vec::new();
    for city in selected {
        if !seen.contains(&city.as_str()) {
            seen.push(city);
        }
    }
    seen.join(", ")
}

/// Minimal email syntax check: one `@`, non-empty local part, and a domain
/// containing a dot, with no whitespace anywhere.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains('@')
}

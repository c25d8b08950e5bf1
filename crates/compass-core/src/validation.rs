//! Client/server validation boundary.
//!
//! Validators take a candidate value and return either the normalized value
//! or every field-level problem found. They never panic and never stop at
//! the first error; callers decide whether to block on the result.

use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use validator::ValidateEmail;

use crate::models::generation::GenerationRequest;
use crate::models::mentor::MentorInterestForm;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Ordered list of field errors, in the order fields were checked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FieldErrors(pub Vec<FieldError>);

impl FieldErrors {
    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        self.0.push(FieldError {
            field: field.to_string(),
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn has(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field == field)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    fn into_result<T>(self, value: T) -> Result<T, FieldErrors> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect();
        f.write_str(&parts.join("; "))
    }
}

impl std::error::Error for FieldErrors {}

/// Validate and normalize a mentor-interest form.
///
/// Text is trimmed, the email is lower-cased, and empty optional fields
/// become `None`.
pub fn validate_mentor_interest(
    form: MentorInterestForm,
) -> Result<MentorInterestForm, FieldErrors> {
    let mut errors = FieldErrors::default();

    let normalized = MentorInterestForm {
        first_name: form.first_name.trim().to_string(),
        last_name: optional(form.last_name),
        email: form.email.trim().to_lowercase(),
        job_title: form.job_title.trim().to_string(),
        company: optional(form.company),
        industry: form.industry.trim().to_string(),
        career_stage: form.career_stage.trim().to_string(),
    };

    require(&mut errors, "firstName", &normalized.first_name, "First name is required");
    if normalized.email.is_empty() {
        errors.push("email", "Email is required");
    } else if !normalized.email.validate_email() {
        errors.push("email", "Invalid email address");
    }
    require(&mut errors, "jobTitle", &normalized.job_title, "Job title is required");
    require(&mut errors, "industry", &normalized.industry, "Industry is required");
    require(
        &mut errors,
        "careerStage",
        &normalized.career_stage,
        "Career stage is required",
    );

    errors.into_result(normalized)
}

/// Validate a generation request: both fields non-blank, and `date` a real
/// calendar day in `YYYY-MM-DD` form.
pub fn validate_generation_request(
    req: GenerationRequest,
) -> Result<GenerationRequest, FieldErrors> {
    let mut errors = FieldErrors::default();

    let normalized = GenerationRequest {
        date: req.date.trim().to_string(),
        free_text: req.free_text.trim().to_string(),
    };

    if normalized.date.is_empty() {
        errors.push("date", "Date is required");
    } else if normalized.date.parse::<jiff::civil::Date>().is_err() {
        errors.push("date", "Date must be a calendar day (YYYY-MM-DD)");
    }
    require(
        &mut errors,
        "freeText",
        &normalized.free_text,
        "Reflection text is required",
    );

    errors.into_result(normalized)
}

fn require(errors: &mut FieldErrors, field: &str, value: &str, message: &str) {
    if value.is_empty() {
        errors.push(field, message);
    }
}

fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

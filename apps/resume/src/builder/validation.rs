use serde::{Deserialize, Serialize};

use crate::builder::fields::RequiredField;
use crate::models::resume::Resume;

/// Outcome of checking a resume before it may be saved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ValidationResult {
    Valid,
    Invalid {
        field: RequiredField,
        message: String,
    },
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    /// The first failure's message, or `"valid"`.
    pub fn message(&self) -> &str {
        match self {
            ValidationResult::Valid => "valid",
            ValidationResult::Invalid { message, .. } => message,
        }
    }
}

fn required_value(resume: &Resume, field: RequiredField) -> &str {
    match field {
        RequiredField::Name => &resume.personal_info.name,
        RequiredField::Email => &resume.personal_info.email,
        RequiredField::Phone => &resume.personal_info.phone,
        RequiredField::Location => &resume.personal_info.location,
        RequiredField::School => &resume.education.school,
        RequiredField::Grade => &resume.education.grade,
    }
}

fn is_blank(resume: &Resume, field: RequiredField) -> bool {
    required_value(resume, field).trim().is_empty()
}

/// Checks the required fields in fixed order and reports only the first blank one.
///
/// Lists (experience, skills, interests, achievements) are never required; an empty
/// list passes.
pub fn validate(resume: &Resume) -> ValidationResult {
    match RequiredField::CHECK_ORDER
        .into_iter()
        .find(|f| is_blank(resume, *f))
    {
        Some(field) => ValidationResult::Invalid {
            field,
            message: field.message().to_string(),
        },
        None => ValidationResult::Valid,
    }
}

/// Every blank required field, in check order. Used for progress reporting, not gating.
pub fn missing_required_fields(resume: &Resume) -> Vec<RequiredField> {
    RequiredField::CHECK_ORDER
        .into_iter()
        .filter(|f| is_blank(resume, *f))
        .collect()
}

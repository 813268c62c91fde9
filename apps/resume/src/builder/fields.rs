//! Closed field identifiers for the resume edit operations.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonalInfoField {
    Name,
    Email,
    Phone,
    Location,
}

/// One replacement for a field of `education`. `Achievements` replaces the whole list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EducationEdit {
    School(String),
    Grade(String),
    Gpa(Option<String>),
    Achievements(Vec<String>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceField {
    Title,
    Organization,
    Duration,
    Description,
}

/// Free-form text lists editable element by element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListName {
    Skills,
    Interests,
    Achievements,
}

/// Fields that must be non-blank before a resume can be saved, in check order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequiredField {
    Name,
    Email,
    Phone,
    Location,
    School,
    Grade,
}

impl RequiredField {
    pub const CHECK_ORDER: [RequiredField; 6] = [
        RequiredField::Name,
        RequiredField::Email,
        RequiredField::Phone,
        RequiredField::Location,
        RequiredField::School,
        RequiredField::Grade,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RequiredField::Name => "name",
            RequiredField::Email => "email",
            RequiredField::Phone => "phone",
            RequiredField::Location => "location",
            RequiredField::School => "school",
            RequiredField::Grade => "grade",
        }
    }

    /// User-facing prompt shown when the field is blank.
    pub fn message(&self) -> &'static str {
        match self {
            RequiredField::Name => "Please enter your name",
            RequiredField::Email => "Please enter your email",
            RequiredField::Phone => "Please enter your phone number",
            RequiredField::Location => "Please enter your location",
            RequiredField::School => "Please enter your school",
            RequiredField::Grade => "Please enter your grade",
        }
    }
}

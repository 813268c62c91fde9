// Resume model operations: pure edits, required-field validation, completeness
// reporting and view-mode rendering. Nothing here touches storage.

pub mod completeness;
pub mod edit;
pub mod fields;
pub mod render;
pub mod validation;

pub use edit::{
    add_experience, add_list_item, set_education_field, set_experience_field,
    set_list_item, set_personal_info_field,
};
pub use fields::{EducationEdit, ExperienceField, ListName, PersonalInfoField};
pub use validation::validate;

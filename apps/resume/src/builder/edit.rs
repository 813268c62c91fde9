//! Pure edit operations: each takes the current resume and returns the edited copy.
//!
//! Out-of-range indices are ignored and yield an unchanged copy; callers only index
//! entries they have rendered.

use crate::builder::fields::{EducationEdit, ExperienceField, ListName, PersonalInfoField};
use crate::models::resume::{Experience, Resume};

pub fn set_personal_info_field(resume: &Resume, field: PersonalInfoField, value: &str) -> Resume {
    let mut next = resume.clone();
    let info = &mut next.personal_info;
    let slot = match field {
        PersonalInfoField::Name => &mut info.name,
        PersonalInfoField::Email => &mut info.email,
        PersonalInfoField::Phone => &mut info.phone,
        PersonalInfoField::Location => &mut info.location,
    };
    *slot = value.to_string();
    next
}

pub fn set_education_field(resume: &Resume, edit: EducationEdit) -> Resume {
    let mut next = resume.clone();
    let education = &mut next.education;
    match edit {
        EducationEdit::School(v) => education.school = v,
        EducationEdit::Grade(v) => education.grade = v,
        EducationEdit::Gpa(v) => education.gpa = v,
        EducationEdit::Achievements(v) => education.achievements = v,
    }
    next
}

pub fn set_experience_field(
    resume: &Resume,
    index: usize,
    field: ExperienceField,
    value: &str,
) -> Resume {
    let mut next = resume.clone();
    if let Some(entry) = next.experience.get_mut(index) {
        let slot = match field {
            ExperienceField::Title => &mut entry.title,
            ExperienceField::Organization => &mut entry.organization,
            ExperienceField::Duration => &mut entry.duration,
            ExperienceField::Description => &mut entry.description,
        };
        *slot = value.to_string();
    }
    next
}

pub fn add_experience(resume: &Resume) -> Resume {
    let mut next = resume.clone();
    next.experience.push(Experience::default());
    next
}

pub fn set_list_item(resume: &Resume, list: ListName, index: usize, value: &str) -> Resume {
    let mut next = resume.clone();
    if let Some(item) = list_mut(&mut next, list).get_mut(index) {
        *item = value.to_string();
    }
    next
}

pub fn add_list_item(resume: &Resume, list: ListName) -> Resume {
    let mut next = resume.clone();
    list_mut(&mut next, list).push(String::new());
    next
}

pub fn list(resume: &Resume, list: ListName) -> &[String] {
    match list {
        ListName::Skills => &resume.skills,
        ListName::Interests => &resume.interests,
        ListName::Achievements => &resume.education.achievements,
    }
}

fn list_mut(resume: &mut Resume, list: ListName) -> &mut Vec<String> {
    match list {
        ListName::Skills => &mut resume.skills,
        ListName::Interests => &mut resume.interests,
        ListName::Achievements => &mut resume.education.achievements,
    }
}

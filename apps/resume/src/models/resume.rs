use serde::{Deserialize, Serialize};

/// The single resume record held per client.
///
/// Serialized field names are part of the stored slot format; renaming any of them
/// makes previously saved values unparseable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resume {
    pub personal_info: PersonalInfo,
    pub education: Education,
    pub experience: Vec<Experience>,
    pub skills: Vec<String>,
    pub interests: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub school: String,
    pub grade: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpa: Option<String>,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub title: String,
    pub organization: String,
    pub duration: String,
    pub description: String,
}

impl Experience {
    /// True when every field is blank, i.e. an untouched placeholder row.
    pub fn is_blank(&self) -> bool {
        [
            &self.title,
            &self.organization,
            &self.duration,
            &self.description,
        ]
        .iter()
        .all(|s| s.trim().is_empty())
    }
}

impl Default for Resume {
    /// Blank form: empty scalars, one empty placeholder in each list.
    fn default() -> Self {
        Resume {
            personal_info: PersonalInfo::default(),
            education: Education {
                achievements: vec![String::new()],
                ..Education::default()
            },
            experience: vec![Experience::default()],
            skills: vec![String::new()],
            interests: vec![String::new()],
        }
    }
}

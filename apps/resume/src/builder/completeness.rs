use serde::{Deserialize, Serialize};

use crate::builder::validation::missing_required_fields;
use crate::models::resume::Resume;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum SectionStatus {
    Strong,
    Moderate,
    Weak,
    Missing,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionHealth {
    pub section: String,
    pub score: f64,
    pub filled: usize,
    pub status: SectionStatus,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletenessReport {
    pub overall_score: f64,
    pub sections: Vec<SectionHealth>,
    pub missing_sections: Vec<String>,
    /// Blank required fields, in validation order.
    pub missing_required: Vec<String>,
}

const SECTION_WEIGHTS: &[(&str, f64)] = &[
    ("personal_info", 0.35),
    ("education", 0.25),
    ("experience", 0.2),
    ("skills", 0.1),
    ("interests", 0.1),
];

fn non_blank(items: &[String]) -> usize {
    items.iter().filter(|s| !s.trim().is_empty()).count()
}

fn filled_scalars(values: &[&str]) -> usize {
    values.iter().filter(|s| !s.trim().is_empty()).count()
}

/// Returns (filled count, score in [0, 1]) for one section.
fn section_fill(resume: &Resume, section: &str) -> (usize, f64) {
    match section {
        "personal_info" => {
            let p = &resume.personal_info;
            let filled = filled_scalars(&[
                p.name.as_str(),
                p.email.as_str(),
                p.phone.as_str(),
                p.location.as_str(),
            ]);
            (filled, filled as f64 / 4.0)
        }
        "education" => {
            let e = &resume.education;
            let gpa = e.gpa.as_deref().unwrap_or("");
            let filled = filled_scalars(&[e.school.as_str(), e.grade.as_str(), gpa])
                + usize::from(non_blank(&e.achievements) > 0);
            (filled, filled as f64 / 4.0)
        }
        "experience" => {
            let filled = resume.experience.iter().filter(|x| !x.is_blank()).count();
            (filled, if filled > 0 { 1.0 } else { 0.0 })
        }
        "skills" => {
            let filled = non_blank(&resume.skills);
            (filled, if filled > 0 { 1.0 } else { 0.0 })
        }
        "interests" => {
            let filled = non_blank(&resume.interests);
            (filled, if filled > 0 { 1.0 } else { 0.0 })
        }
        _ => (0, 0.0),
    }
}

/// Non-blocking health check of how filled-in the resume is. Saving never depends on it.
pub fn compute_completeness_report(resume: &Resume) -> CompletenessReport {
    let mut section_healths = Vec::new();
    let mut weighted_score_sum = 0.0;
    let mut missing_sections = Vec::new();

    for (section_key, weight) in SECTION_WEIGHTS {
        let (filled, section_score) = section_fill(resume, section_key);

        if filled == 0 {
            missing_sections.push(section_key.to_string());
            section_healths.push(SectionHealth {
                section: section_key.to_string(),
                score: 0.0,
                filled: 0,
                status: SectionStatus::Missing,
                recommendations: vec![format!(
                    "Fill in your {} to strengthen your resume",
                    section_key.replace('_', " ")
                )],
            });
            continue;
        }

        let status = match section_score {
            s if s >= 0.8 => SectionStatus::Strong,
            s if s >= 0.5 => SectionStatus::Moderate,
            s if s >= 0.2 => SectionStatus::Weak,
            _ => SectionStatus::Missing,
        };

        let mut recommendations = Vec::new();
        if *section_key == "experience" && filled < 2 {
            recommendations.push(
                "Add volunteering, clubs or part-time work as extra experience entries"
                    .to_string(),
            );
        }
        if *section_key == "education" && non_blank(&resume.education.achievements) == 0 {
            recommendations.push("List an award, honor or achievement".to_string());
        }

        weighted_score_sum += section_score * weight;
        section_healths.push(SectionHealth {
            section: section_key.to_string(),
            score: section_score,
            filled,
            status,
            recommendations,
        });
    }

    let total_weight: f64 = SECTION_WEIGHTS.iter().map(|(_, w)| w).sum();
    let overall_score = if total_weight > 0.0 {
        (weighted_score_sum / total_weight).clamp(0.0, 1.0)
    } else {
        0.0
    };

    CompletenessReport {
        overall_score,
        sections: section_healths,
        missing_sections,
        missing_required: missing_required_fields(resume)
            .iter()
            .map(|f| f.as_str().to_string())
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::Experience;

    fn full() -> Resume {
        let mut r = Resume::default();
        r.personal_info.name = "Sam Ortiz".to_string();
        r.personal_info.email = "sam@example.com".to_string();
        r.personal_info.phone = "555-0199".to_string();
        r.personal_info.location = "Denver, CO".to_string();
        r.education.school = "East High".to_string();
        r.education.grade = "12th".to_string();
        r.education.gpa = Some("3.6".to_string());
        r.education.achievements = vec!["National Honor Society".to_string()];
        r.experience = vec![Experience {
            title: "Barista".to_string(),
            organization: "Corner Cafe".to_string(),
            duration: "Summer 2025".to_string(),
            description: "Served 200 customers per shift".to_string(),
        }];
        r.skills = vec!["Customer service".to_string()];
        r.interests = vec!["Robotics".to_string()];
        r
    }

    #[test]
    fn test_default_resume_is_all_missing() {
        let report = compute_completeness_report(&Resume::default());
        assert_eq!(report.overall_score, 0.0);
        assert_eq!(report.missing_sections.len(), SECTION_WEIGHTS.len());
        assert_eq!(report.missing_required.len(), 6);
        assert!(report
            .sections
            .iter()
            .all(|s| s.status == SectionStatus::Missing));
    }

    #[test]
    fn test_full_resume_scores_one() {
        let report = compute_completeness_report(&full());
        assert!((report.overall_score - 1.0).abs() < 1e-9);
        assert!(report.missing_sections.is_empty());
        assert!(report.missing_required.is_empty());
    }

    #[test]
    fn test_partial_personal_info_is_moderate() {
        let mut r = full();
        r.personal_info.phone.clear();
        r.personal_info.location.clear();
        let report = compute_completeness_report(&r);
        let personal = &report.sections[0];
        assert_eq!(personal.section, "personal_info");
        assert_eq!(personal.filled, 2);
        assert_eq!(personal.status, SectionStatus::Moderate);
        assert_eq!(report.missing_required, vec!["phone", "location"]);
    }

    #[test]
    fn test_blank_placeholders_do_not_count() {
        let mut r = full();
        r.skills = vec![String::new(), "  ".to_string()];
        let report = compute_completeness_report(&r);
        assert!(report.missing_sections.contains(&"skills".to_string()));
    }

    #[test]
    fn test_single_experience_gets_recommendation() {
        let report = compute_completeness_report(&full());
        let exp = report
            .sections
            .iter()
            .find(|s| s.section == "experience")
            .unwrap();
        assert_eq!(exp.status, SectionStatus::Strong);
        assert_eq!(exp.recommendations.len(), 1);
    }
}

use crate::models::resume::Resume;

fn filled(items: &[String]) -> Vec<&str> {
    items
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Renders the resume as a read-only markdown document (the "view" mode).
/// Blank placeholder rows and empty sections are left out.
pub fn render_resume_to_md(resume: &Resume) -> String {
    let info = &resume.personal_info;
    let name = info.name.trim();
    let mut md = format!(
        "# {}\n\n",
        if name.is_empty() { "Untitled Resume" } else { name }
    );

    let contact: Vec<&str> = [&info.email, &info.phone, &info.location]
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();
    if !contact.is_empty() {
        md.push_str(&contact.join(" | "));
        md.push_str("\n\n");
    }

    let edu = &resume.education;
    let achievements = filled(&edu.achievements);
    if !edu.school.trim().is_empty() || !edu.grade.trim().is_empty() || !achievements.is_empty()
    {
        md.push_str("## Education\n\n");
        if !edu.school.trim().is_empty() {
            md.push_str(&format!("- **School:** {}\n", edu.school.trim()));
        }
        if !edu.grade.trim().is_empty() {
            md.push_str(&format!("- **Grade:** {}\n", edu.grade.trim()));
        }
        if let Some(gpa) = edu.gpa.as_deref().map(str::trim).filter(|g| !g.is_empty()) {
            md.push_str(&format!("- **GPA:** {gpa}\n"));
        }
        if !achievements.is_empty() {
            md.push_str(&format!("- **Achievements:** {}\n", achievements.join(", ")));
        }
        md.push('\n');
    }

    let experience: Vec<_> = resume.experience.iter().filter(|e| !e.is_blank()).collect();
    if !experience.is_empty() {
        md.push_str("## Experience\n\n");
        for entry in experience {
            let heading: Vec<&str> = [&entry.title, &entry.organization]
                .iter()
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .collect();
            if !heading.is_empty() {
                md.push_str(&format!("### {}\n", heading.join(" — ")));
            }
            if !entry.duration.trim().is_empty() {
                md.push_str(&format!("*{}*\n", entry.duration.trim()));
            }
            if !entry.description.trim().is_empty() {
                md.push_str(&format!("\n{}\n", entry.description.trim()));
            }
            md.push('\n');
        }
    }

    for (title, items) in [("Skills", &resume.skills), ("Interests", &resume.interests)] {
        let items = filled(items);
        if items.is_empty() {
            continue;
        }
        md.push_str(&format!("## {title}\n\n"));
        md.push_str(&items.join(", "));
        md.push_str("\n\n");
    }

    md
}

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::{debug, error, info};

use crate::builder::completeness::compute_completeness_report;
use crate::builder::edit::list;
use crate::builder::render::render_resume_to_md;
use crate::builder::{
    add_experience, add_list_item, set_education_field, set_experience_field, set_list_item,
    set_personal_info_field, validate, EducationEdit, ExperienceField, ListName,
    PersonalInfoField,
};
use crate::errors::PersistenceError;
use crate::models::resume::Resume;
use crate::persistence::ResumePersistence;
use crate::storage::KeyValueStorage;
use crate::store::{EditorMode, ResumeStore};

#[derive(Parser)]
#[command(name = "resume", version, about = "Build and save your resume")]
pub struct Cmd {
    #[command(subcommand)]
    pub command: SubCommandType,
}

#[derive(Subcommand)]
pub enum SubCommandType {
    /// Print the saved resume
    Show {
        /// Print the loaded JSON record instead of the formatted view
        #[arg(long)]
        json: bool,
    },
    /// Check the saved resume for missing required fields
    Validate,
    /// Edit fields of the saved resume, then save it
    Edit(EditArgs),
    /// Save a resume read from a JSON file
    Import { path: PathBuf },
    /// Delete the saved resume
    Reset,
}

#[derive(Args, Debug, Default)]
pub struct EditArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub location: Option<String>,
    #[arg(long)]
    pub school: Option<String>,
    #[arg(long)]
    pub grade: Option<String>,
    /// Pass an empty string to clear
    #[arg(long)]
    pub gpa: Option<String>,
    #[arg(long = "achievement")]
    pub achievements: Vec<String>,
    #[arg(long = "skill")]
    pub skills: Vec<String>,
    #[arg(long = "interest")]
    pub interests: Vec<String>,
    /// "title|organization|duration|description"
    #[arg(long = "experience")]
    pub experience: Vec<String>,
}

/// Runs one command against the resume slot. `Ok(false)` means the command ran but
/// the user must fix something (validation or a failed save).
pub fn run<S: KeyValueStorage>(
    cmd: Cmd,
    persistence: &mut ResumePersistence<S>,
) -> Result<bool> {
    match cmd.command {
        SubCommandType::Show { json } => {
            let store = ResumeStore::load_from(persistence);
            if json {
                println!("{}", serde_json::to_string_pretty(store.get())?);
            } else {
                print!("{}", render_resume_to_md(store.get()));
            }
            if store.mode() == EditorMode::Edit {
                eprintln!("Resume incomplete: {}", validate(store.get()).message());
            }
            Ok(true)
        }
        SubCommandType::Validate => {
            let resume = persistence.load();
            let report = compute_completeness_report(&resume);
            let result = validate(&resume);
            println!("{}", result.message());
            println!("completeness: {:.0}%", report.overall_score * 100.0);
            for section in &report.sections {
                for rec in &section.recommendations {
                    println!("  - {rec}");
                }
            }
            Ok(result.is_valid())
        }
        SubCommandType::Edit(args) => {
            let mut store = ResumeStore::load_from(persistence);
            store.subscribe(|r| {
                debug!("Resume edited: {} experience entries", r.experience.len())
            });
            apply_edits(&mut store, &args)?;
            save(&mut store, persistence)
        }
        SubCommandType::Import { path } => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let resume: Resume = serde_json::from_str(&text)
                .with_context(|| format!("{} is not a valid resume record", path.display()))?;
            let mut store = ResumeStore::new(resume);
            save(&mut store, persistence)
        }
        SubCommandType::Reset => {
            persistence.clear()?;
            info!("Saved resume removed");
            Ok(true)
        }
    }
}

fn save<S: KeyValueStorage>(
    store: &mut ResumeStore,
    persistence: &mut ResumePersistence<S>,
) -> Result<bool> {
    match store.save_to(persistence) {
        Ok(()) => {
            println!("Resume saved successfully!");
            Ok(true)
        }
        Err(e) => {
            if let PersistenceError::StorageWriteFailed(cause) = &e {
                error!("Storage write error: {cause}");
            }
            eprintln!("{}", e.user_message());
            Ok(false)
        }
    }
}

/// Routes every requested change through the pure edit operations.
pub fn apply_edits(store: &mut ResumeStore, args: &EditArgs) -> Result<()> {
    let personal = [
        (PersonalInfoField::Name, &args.name),
        (PersonalInfoField::Email, &args.email),
        (PersonalInfoField::Phone, &args.phone),
        (PersonalInfoField::Location, &args.location),
    ];
    for (field, value) in personal {
        if let Some(value) = value {
            store.update(|r| set_personal_info_field(r, field, value));
        }
    }

    if let Some(school) = &args.school {
        store.update(|r| set_education_field(r, EducationEdit::School(school.clone())));
    }
    if let Some(grade) = &args.grade {
        store.update(|r| set_education_field(r, EducationEdit::Grade(grade.clone())));
    }
    if let Some(gpa) = &args.gpa {
        let gpa = Some(gpa.trim().to_string()).filter(|g| !g.is_empty());
        store.update(|r| set_education_field(r, EducationEdit::Gpa(gpa)));
    }

    for (name, values) in [
        (ListName::Achievements, &args.achievements),
        (ListName::Skills, &args.skills),
        (ListName::Interests, &args.interests),
    ] {
        for value in values {
            store.update(|r| append_list_value(r, name, value));
        }
    }

    for raw in &args.experience {
        let fields = parse_experience(raw)?;
        store.update(|r| append_experience(r, &fields));
    }
    Ok(())
}

/// Fills the trailing blank placeholder if there is one, otherwise appends.
fn append_list_value(resume: &Resume, name: ListName, value: &str) -> Resume {
    let items = list(resume, name);
    match items.last() {
        Some(last) if last.trim().is_empty() => {
            set_list_item(resume, name, items.len() - 1, value)
        }
        _ => {
            let next = add_list_item(resume, name);
            let index = list(&next, name).len() - 1;
            set_list_item(&next, name, index, value)
        }
    }
}

fn append_experience(resume: &Resume, fields: &[(ExperienceField, String); 4]) -> Resume {
    let mut next = match resume.experience.last() {
        Some(last) if last.is_blank() => resume.clone(),
        _ => add_experience(resume),
    };
    let index = next.experience.len() - 1;
    for (field, value) in fields {
        next = set_experience_field(&next, index, *field, value);
    }
    next
}

fn parse_experience(raw: &str) -> Result<[(ExperienceField, String); 4]> {
    let parts: Vec<&str> = raw.split('|').map(str::trim).collect();
    if parts.len() != 4 {
        bail!("--experience expects \"title|organization|duration|description\", got '{raw}'");
    }
    Ok([
        (ExperienceField::Title, parts[0].to_string()),
        (ExperienceField::Organization, parts[1].to_string()),
        (ExperienceField::Duration, parts[2].to_string()),
        (ExperienceField::Description, parts[3].to_string()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn required_args() -> EditArgs {
        EditArgs {
            name: Some("Lena Fox".to_string()),
            email: Some("lena@example.com".to_string()),
            phone: Some("555-0123".to_string()),
            location: Some("Reno, NV".to_string()),
            school: Some("Galena High".to_string()),
            grade: Some("10th".to_string()),
            ..EditArgs::default()
        }
    }

    #[test]
    fn test_cli_parses_edit_flags() {
        let cmd = Cmd::try_parse_from([
            "resume", "edit", "--name", "Lena", "--skill", "Excel", "--skill", "Canva",
        ])
        .unwrap();
        match cmd.command {
            SubCommandType::Edit(args) => {
                assert_eq!(args.name.as_deref(), Some("Lena"));
                assert_eq!(args.skills, vec!["Excel", "Canva"]);
            }
            _ => panic!("expected edit"),
        }
    }

    #[test]
    fn test_show_json_help_describes_loaded_record() {
        use clap::CommandFactory;

        let mut cmd = Cmd::command();
        let show = cmd.find_subcommand_mut("show").unwrap();
        let help = show.render_long_help().to_string();
        assert!(help.contains("loaded JSON record"), "{help}");
    }

    #[test]
    fn test_list_values_fill_placeholder_then_append() {
        let mut store = ResumeStore::new(Resume::default());
        let args = EditArgs {
            skills: vec!["Excel".to_string(), "Canva".to_string()],
            achievements: vec!["Honor Roll".to_string()],
            ..EditArgs::default()
        };
        apply_edits(&mut store, &args).unwrap();
        assert_eq!(store.get().skills, vec!["Excel", "Canva"]);
        assert_eq!(store.get().education.achievements, vec!["Honor Roll"]);
        assert_eq!(store.get().interests, vec![""]);
    }

    #[test]
    fn test_experience_fills_blank_row_then_appends() {
        let mut store = ResumeStore::new(Resume::default());
        let args = EditArgs {
            experience: vec![
                "Cashier|Grocery Mart|Summer 2025|Ran the register".to_string(),
                "Volunteer | Food Bank | 2024 | Sorted donations".to_string(),
            ],
            ..EditArgs::default()
        };
        apply_edits(&mut store, &args).unwrap();
        let exp = &store.get().experience;
        assert_eq!(exp.len(), 2);
        assert_eq!(exp[0].organization, "Grocery Mart");
        assert_eq!(exp[1].title, "Volunteer");
        assert_eq!(exp[1].description, "Sorted donations");
    }

    #[test]
    fn test_bad_experience_format_is_error() {
        let mut store = ResumeStore::new(Resume::default());
        let args = EditArgs {
            experience: vec!["Cashier|Grocery Mart".to_string()],
            ..EditArgs::default()
        };
        assert!(apply_edits(&mut store, &args).is_err());
    }

    #[test]
    fn test_empty_gpa_clears() {
        let mut store = ResumeStore::new(Resume::default());
        let set = EditArgs {
            gpa: Some("3.5".to_string()),
            ..EditArgs::default()
        };
        apply_edits(&mut store, &set).unwrap();
        assert_eq!(store.get().education.gpa.as_deref(), Some("3.5"));
        let clear = EditArgs {
            gpa: Some(" ".to_string()),
            ..EditArgs::default()
        };
        apply_edits(&mut store, &clear).unwrap();
        assert_eq!(store.get().education.gpa, None);
    }

    #[test]
    fn test_edit_command_saves_valid_resume() {
        let mut persistence = ResumePersistence::new(MemoryStorage::new());
        let ok = run(
            Cmd {
                command: SubCommandType::Edit(required_args()),
            },
            &mut persistence,
        )
        .unwrap();
        assert!(ok);
        assert!(validate(&persistence.load()).is_valid());
        assert_eq!(persistence.load().personal_info.name, "Lena Fox");
    }

    #[test]
    fn test_edit_command_refuses_incomplete_resume() {
        let mut persistence = ResumePersistence::new(MemoryStorage::new());
        let args = EditArgs {
            name: Some("Lena Fox".to_string()),
            ..EditArgs::default()
        };
        let ok = run(
            Cmd {
                command: SubCommandType::Edit(args),
            },
            &mut persistence,
        )
        .unwrap();
        assert!(!ok);
        assert_eq!(persistence.load(), Resume::default());
    }

    #[test]
    fn test_import_and_reset() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.json");
        let mut store = ResumeStore::new(Resume::default());
        apply_edits(&mut store, &required_args()).unwrap();
        std::fs::write(&path, serde_json::to_string(store.get()).unwrap()).unwrap();

        let mut persistence = ResumePersistence::new(MemoryStorage::new());
        let ok = run(
            Cmd {
                command: SubCommandType::Import { path },
            },
            &mut persistence,
        )
        .unwrap();
        assert!(ok);
        assert_eq!(&persistence.load(), store.get());

        run(
            Cmd {
                command: SubCommandType::Reset,
            },
            &mut persistence,
        )
        .unwrap();
        assert_eq!(persistence.load(), Resume::default());
    }
}

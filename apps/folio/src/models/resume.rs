use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::models::loose;

/// The fetched resume document. Every field is optional, and a field of the
/// wrong shape decodes as absent: both degrade to placeholders at render
/// time, never to errors.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ResumeDocument {
    #[serde(deserialize_with = "loose::opt_record")]
    pub personal_info: Option<PersonalInfo>,
    #[serde(deserialize_with = "loose::opt_text")]
    pub summary: Option<String>,
    #[serde(deserialize_with = "loose::opt_records")]
    pub experience: Option<Vec<ExperienceEntry>>,
    #[serde(deserialize_with = "loose::opt_records")]
    pub education: Option<Vec<EducationEntry>>,
    #[serde(deserialize_with = "loose::opt_list")]
    pub skills: Option<Vec<String>>,
    #[serde(deserialize_with = "loose::opt_records")]
    pub projects: Option<Vec<ProjectEntry>>,
    #[serde(deserialize_with = "loose::opt_list")]
    pub certifications: Option<Vec<String>>,
    #[serde(deserialize_with = "loose::opt_list")]
    pub languages: Option<Vec<String>>,
    #[serde(deserialize_with = "loose::opt_text")]
    pub last_updated: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PersonalInfo {
    #[serde(deserialize_with = "loose::opt_text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "loose::opt_text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "loose::opt_text")]
    pub email: Option<String>,
    #[serde(deserialize_with = "loose::opt_text")]
    pub phone: Option<String>,
    #[serde(deserialize_with = "loose::opt_text")]
    pub linkedin: Option<String>,
    #[serde(deserialize_with = "loose::opt_text")]
    pub github: Option<String>,
    #[serde(deserialize_with = "loose::opt_text")]
    pub location: Option<String>,
    /// Profile image URL.
    #[serde(deserialize_with = "loose::opt_text")]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ExperienceEntry {
    #[serde(deserialize_with = "loose::opt_text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "loose::opt_text")]
    pub company: Option<String>,
    #[serde(deserialize_with = "loose::opt_text")]
    pub dates: Option<String>,
    pub description: Option<Description>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EducationEntry {
    #[serde(deserialize_with = "loose::opt_text")]
    pub degree: Option<String>,
    #[serde(deserialize_with = "loose::opt_text")]
    pub institution: Option<String>,
    #[serde(deserialize_with = "loose::opt_text")]
    pub year: Option<String>,
    #[serde(deserialize_with = "loose::opt_text")]
    pub gpa: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProjectEntry {
    #[serde(deserialize_with = "loose::opt_text")]
    pub name: Option<String>,
    pub description: Option<Description>,
    #[serde(deserialize_with = "loose::opt_record")]
    pub technologies: Option<Technologies>,
}

/// A description is either prose or a list of bullet items.
/// Any other JSON shape is kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq)]
pub enum Description {
    Text(String),
    Items(Vec<String>),
    Other(Value),
}

impl<'de> Deserialize<'de> for Description {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(text) => Description::Text(text),
            Value::Array(items) => Description::Items(items.iter().map(loose::item_text).collect()),
            other => Description::Other(other),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Technologies {
    Text(String),
    List(Vec<String>),
}

impl<'de> Deserialize<'de> for Technologies {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::String(text) => Ok(Technologies::Text(text)),
            Value::Array(items) => Ok(Technologies::List(
                items.iter().filter_map(loose::scalar_text).collect(),
            )),
            other => Err(serde::de::Error::custom(format!(
                "expected a string or a list, found {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_object_deserializes_to_all_absent() {
        let doc: ResumeDocument = serde_json::from_value(json!({})).unwrap();
        assert!(doc.personal_info.is_none());
        assert!(doc.experience.is_none());
        assert!(doc.skills.is_none());
        assert!(doc.last_updated.is_none());
    }

    #[test]
    fn test_description_string_is_text() {
        let entry: ExperienceEntry =
            serde_json::from_value(json!({ "description": "Built things" })).unwrap();
        assert_eq!(
            entry.description,
            Some(Description::Text("Built things".to_string()))
        );
    }

    #[test]
    fn test_description_list_is_items() {
        let entry: ExperienceEntry =
            serde_json::from_value(json!({ "description": ["Led team", "Shipped v2"] }))
                .unwrap();
        assert_eq!(
            entry.description,
            Some(Description::Items(vec![
                "Led team".to_string(),
                "Shipped v2".to_string()
            ]))
        );
    }

    #[test]
    fn test_description_list_with_numbers_is_still_items() {
        let entry: ExperienceEntry =
            serde_json::from_value(json!({ "description": [1, "a"] })).unwrap();
        assert_eq!(
            entry.description,
            Some(Description::Items(vec!["1".to_string(), "a".to_string()]))
        );
    }

    #[test]
    fn test_description_other_shape_is_kept() {
        let entry: ExperienceEntry =
            serde_json::from_value(json!({ "description": { "lead": true } })).unwrap();
        assert_eq!(
            entry.description,
            Some(Description::Other(json!({ "lead": true })))
        );
    }

    #[test]
    fn test_numeric_gpa_and_year_become_text() {
        let edu: EducationEntry =
            serde_json::from_value(json!({ "year": 2019, "gpa": 3.8 })).unwrap();
        assert_eq!(edu.year.as_deref(), Some("2019"));
        assert_eq!(edu.gpa.as_deref(), Some("3.8"));
    }

    #[test]
    fn test_technologies_accepts_string_or_list() {
        let a: ProjectEntry =
            serde_json::from_value(json!({ "technologies": "Rust, Tokio" })).unwrap();
        let b: ProjectEntry =
            serde_json::from_value(json!({ "technologies": ["Rust", "Tokio"] })).unwrap();
        assert_eq!(
            a.technologies,
            Some(Technologies::Text("Rust, Tokio".to_string()))
        );
        assert_eq!(
            b.technologies,
            Some(Technologies::List(vec!["Rust".to_string(), "Tokio".to_string()]))
        );
    }

    #[test]
    fn test_technologies_of_wrong_shape_is_absent() {
        let p: ProjectEntry =
            serde_json::from_value(json!({ "name": "Folio", "technologies": 7 })).unwrap();
        assert!(p.technologies.is_none());
        assert_eq!(p.name.as_deref(), Some("Folio"));
    }

    #[test]
    fn test_malformed_sections_do_not_reject_the_document() {
        let doc: ResumeDocument = serde_json::from_value(json!({
            "personal_info": "Ada",
            "summary": ["a", "b"],
            "skills": "Rust, Go",
            "experience": ["Engineer at Acme", { "title": "Analyst" }],
            "certifications": [123]
        }))
        .unwrap();
        assert!(doc.personal_info.is_none());
        assert!(doc.summary.is_none());
        assert!(doc.skills.is_none());
        let titles: Vec<_> = doc
            .experience
            .unwrap()
            .into_iter()
            .map(|e| e.title)
            .collect();
        assert_eq!(titles, vec![Some("Analyst".to_string())]);
        assert_eq!(doc.certifications, Some(vec!["123".to_string()]));
    }
}

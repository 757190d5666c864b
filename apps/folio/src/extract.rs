//! Field extraction: default resolution for every optional field of the
//! resume document. Empty strings count as absent.

use crate::models::{EducationEntry, ExperienceEntry, PersonalInfo, ProjectEntry, ResumeDocument};

pub const DEFAULT_NAME: &str = "Your Name";
pub const DEFAULT_TITLE: &str = "Professional";
pub const DEFAULT_PAGE_NAME: &str = "Portfolio";
pub const DEFAULT_SUMMARY: &str = "No summary available.";
pub const INITIALS_FALLBACK: &str = "?";
const MAX_INITIALS: usize = 2;

/// Returns the value if it is present and non-empty.
pub fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

impl ResumeDocument {
    pub fn personal(&self) -> Option<&PersonalInfo> {
        self.personal_info.as_ref()
    }

    fn personal_field(&self, field: fn(&PersonalInfo) -> &Option<String>) -> Option<&str> {
        self.personal().and_then(|info| present(field(info)))
    }

    pub fn display_name(&self) -> &str {
        self.personal_field(|p| &p.name).unwrap_or(DEFAULT_NAME)
    }

    /// Browser tab title: `"{name} - Professional Portfolio"`.
    pub fn page_title(&self) -> String {
        let name = self.personal_field(|p| &p.name).unwrap_or(DEFAULT_PAGE_NAME);
        format!("{name} - Professional Portfolio")
    }

    /// Headline under the name: explicit title, else the most recent role,
    /// else the default.
    pub fn title_hint(&self) -> &str {
        self.personal_field(|p| &p.title)
            .or_else(|| {
                self.experience
                    .as_deref()
                    .and_then(|entries| entries.first())
                    .and_then(|first| present(&first.title))
            })
            .unwrap_or(DEFAULT_TITLE)
    }

    pub fn image_url(&self) -> Option<&str> {
        self.personal_field(|p| &p.image)
    }

    pub fn summary_text(&self) -> &str {
        present(&self.summary).unwrap_or(DEFAULT_SUMMARY)
    }

    pub fn experience_entries(&self) -> &[ExperienceEntry] {
        self.experience.as_deref().unwrap_or_default()
    }

    pub fn education_entries(&self) -> &[EducationEntry] {
        self.education.as_deref().unwrap_or_default()
    }

    pub fn skill_list(&self) -> &[String] {
        self.skills.as_deref().unwrap_or_default()
    }

    pub fn project_entries(&self) -> &[ProjectEntry] {
        self.projects.as_deref().unwrap_or_default()
    }

    pub fn certification_list(&self) -> &[String] {
        self.certifications.as_deref().unwrap_or_default()
    }

    pub fn language_list(&self) -> &[String] {
        self.languages.as_deref().unwrap_or_default()
    }
}

impl ExperienceEntry {
    pub fn display_title(&self) -> &str {
        present(&self.title).unwrap_or("Position Title")
    }

    pub fn display_company(&self) -> &str {
        present(&self.company).unwrap_or("Company Name")
    }
}

impl EducationEntry {
    pub fn display_degree(&self) -> &str {
        present(&self.degree).unwrap_or("Degree")
    }

    pub fn display_institution(&self) -> &str {
        present(&self.institution).unwrap_or("Institution")
    }
}

impl ProjectEntry {
    pub fn display_name(&self) -> &str {
        present(&self.name).unwrap_or("Project Name")
    }
}

/// Reduces a name to at most two uppercase initials.
/// A blank name yields [`INITIALS_FALLBACK`].
pub fn initials(name: &str) -> String {
    let letters: String = name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(MAX_INITIALS)
        .collect();

    if letters.is_empty() {
        INITIALS_FALLBACK.to_string()
    } else {
        letters
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactChannel {
    Email,
    Phone,
    LinkedIn,
    GitHub,
    Location,
}

impl ContactChannel {
    /// Display priority, independent of field order in the source document.
    pub const ORDER: [ContactChannel; 5] = [
        ContactChannel::Email,
        ContactChannel::Phone,
        ContactChannel::LinkedIn,
        ContactChannel::GitHub,
        ContactChannel::Location,
    ];

    pub fn icon(&self) -> &'static str {
        match self {
            ContactChannel::Email => "fas fa-envelope",
            ContactChannel::Phone => "fas fa-phone",
            ContactChannel::LinkedIn => "fab fa-linkedin",
            ContactChannel::GitHub => "fab fa-github",
            ContactChannel::Location => "fas fa-map-marker-alt",
        }
    }

    fn value<'a>(&self, info: &'a PersonalInfo) -> Option<&'a str> {
        match self {
            ContactChannel::Email => present(&info.email),
            ContactChannel::Phone => present(&info.phone),
            ContactChannel::LinkedIn => present(&info.linkedin),
            ContactChannel::GitHub => present(&info.github),
            ContactChannel::Location => present(&info.location),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactItem {
    pub channel: ContactChannel,
    pub icon: &'static str,
    pub text: String,
    pub link: Option<String>,
}

/// Builds the contact list in fixed channel order, skipping absent channels.
pub fn contact_items(info: &PersonalInfo) -> Vec<ContactItem> {
    ContactChannel::ORDER
        .iter()
        .filter_map(|channel| {
            let value = channel.value(info)?;
            let (text, link) = match channel {
                ContactChannel::Email => (value.to_string(), Some(format!("mailto:{value}"))),
                ContactChannel::Phone => (value.to_string(), Some(format!("tel:{value}"))),
                ContactChannel::LinkedIn => ("LinkedIn".to_string(), Some(with_scheme(value))),
                ContactChannel::GitHub => ("GitHub".to_string(), Some(with_scheme(value))),
                ContactChannel::Location => (value.to_string(), None),
            };
            Some(ContactItem {
                channel: *channel,
                icon: channel.icon(),
                text,
                link,
            })
        })
        .collect()
}

/// Prepends `https://` unless the value already starts with `http`.
fn with_scheme(url: &str) -> String {
    if url.starts_with("http") {
        url.to_string()
    } else {
        format!("https://{url}")
    }
}

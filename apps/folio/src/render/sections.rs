use crate::extract::present;
use crate::html;
use crate::models::{EducationEntry, ExperienceEntry, ProjectEntry, ResumeDocument, Technologies};
use crate::page::{Region, RenderTarget};
use crate::render::{format_description, is_blank, placeholder, RenderContext};
use crate::skills::{self, SkillGroup};

pub const NO_EXPERIENCE: &str = "No experience information available.";
pub const NO_EDUCATION: &str = "No education information available.";
pub const NO_SKILLS: &str = "No skills information available.";
pub const NO_PROJECTS: &str = "No projects information available.";
pub const NO_CERTIFICATIONS: &str = "No certifications available.";
pub const NO_LANGUAGES: &str = "No languages information available.";
pub const NO_PROJECT_DESCRIPTION: &str = "No description available.";

/// Maps each item to a fragment and concatenates them, or returns the
/// placeholder when there are no items.
fn list_or_placeholder<T>(
    items: &[T],
    empty_message: &str,
    fragment: impl Fn(&T) -> String,
) -> String {
    if items.is_empty() {
        return placeholder(empty_message);
    }
    items.iter().map(fragment).collect()
}

fn dates_badge(value: Option<&str>) -> String {
    value
        .map(|v| format!("<span class=\"item-dates\">{}</span>", html::escape(v)))
        .unwrap_or_default()
}

pub fn render_summary(
    doc: &ResumeDocument,
    _ctx: &RenderContext,
    target: &mut dyn RenderTarget,
) {
    target.set_text(Region::Summary, doc.summary_text().to_string());
}

pub fn render_experience(
    doc: &ResumeDocument,
    _ctx: &RenderContext,
    target: &mut dyn RenderTarget,
) {
    let html = list_or_placeholder(doc.experience_entries(), NO_EXPERIENCE, experience_item);
    target.set_html(Region::ExperienceList, html);
}

fn experience_item(entry: &ExperienceEntry) -> String {
    let description = entry
        .description
        .as_ref()
        .map(format_description)
        .unwrap_or_default();

    format!(
        "<div class=\"experience-item\"><div class=\"item-header\"><div>\
         <h3 class=\"item-title\">{}</h3><p class=\"item-company\">{}</p></div>{}</div>\
         <div class=\"item-description\">{description}</div></div>",
        html::escape(entry.display_title()),
        html::escape(entry.display_company()),
        dates_badge(present(&entry.dates)),
    )
}

pub fn render_education(
    doc: &ResumeDocument,
    _ctx: &RenderContext,
    target: &mut dyn RenderTarget,
) {
    let html = list_or_placeholder(doc.education_entries(), NO_EDUCATION, education_item);
    target.set_html(Region::EducationList, html);
}

fn education_item(entry: &EducationEntry) -> String {
    let gpa = present(&entry.gpa)
        .map(|gpa| {
            format!(
                "<div class=\"item-description\"><strong>GPA:</strong> {}</div>",
                html::escape(gpa)
            )
        })
        .unwrap_or_default();

    format!(
        "<div class=\"education-item\"><div class=\"item-header\"><div>\
         <h3 class=\"item-title\">{}</h3><p class=\"item-institution\">{}</p></div>{}</div>\
         {gpa}</div>",
        html::escape(entry.display_degree()),
        html::escape(entry.display_institution()),
        dates_badge(present(&entry.year)),
    )
}

pub fn render_skills(
    doc: &ResumeDocument,
    _ctx: &RenderContext,
    target: &mut dyn RenderTarget,
) {
    let list = doc.skill_list();
    let html = if list.is_empty() {
        placeholder(NO_SKILLS)
    } else {
        skills::classify(list).iter().map(skill_group).collect()
    };
    target.set_html(Region::SkillsGrid, html);
}

fn skill_group(group: &SkillGroup) -> String {
    let tags: String = group
        .skills
        .iter()
        .map(|skill| format!("<span class=\"skill-tag\">{}</span>", html::escape(skill)))
        .collect();

    format!(
        "<div class=\"skill-category\"><h3>{}</h3><div class=\"skill-tags\">{tags}</div></div>",
        html::escape(group.category.label())
    )
}

pub fn render_projects(
    doc: &ResumeDocument,
    _ctx: &RenderContext,
    target: &mut dyn RenderTarget,
) {
    let html = list_or_placeholder(doc.project_entries(), NO_PROJECTS, project_item);
    target.set_html(Region::ProjectsGrid, html);
}

fn project_item(project: &ProjectEntry) -> String {
    let description = match &project.description {
        Some(d) if !is_blank(d) => format_description(d),
        _ => html::escape(NO_PROJECT_DESCRIPTION),
    };

    let technologies = technologies_text(project.technologies.as_ref())
        .map(|tech| {
            format!(
                "<div style=\"margin-top: 15px;\"><strong>Technologies:</strong> {}</div>",
                html::escape(&tech)
            )
        })
        .unwrap_or_default();

    format!(
        "<div class=\"project-item\"><div class=\"item-header\">\
         <h3 class=\"item-title\">{}</h3></div>\
         <div class=\"item-description\">{description}</div>{technologies}</div>",
        html::escape(project.display_name()),
    )
}

fn technologies_text(technologies: Option<&Technologies>) -> Option<String> {
    let text = match technologies? {
        Technologies::Text(text) => text.clone(),
        Technologies::List(items) => items.join(", "),
    };
    (!text.is_empty()).then_some(text)
}

pub fn render_certifications(
    doc: &ResumeDocument,
    _ctx: &RenderContext,
    target: &mut dyn RenderTarget,
) {
    let html = list_or_placeholder(doc.certification_list(), NO_CERTIFICATIONS, |cert| {
        format!(
            "<div class=\"certification-item\"><i class=\"fas fa-certificate\"></i><p>{}</p></div>",
            html::escape(cert)
        )
    });
    target.set_html(Region::CertificationsList, html);
}

pub fn render_languages(
    doc: &ResumeDocument,
    _ctx: &RenderContext,
    target: &mut dyn RenderTarget,
) {
    let html = list_or_placeholder(doc.language_list(), NO_LANGUAGES, |lang| {
        format!(
            "<div class=\"language-item\"><i class=\"fas fa-language\"></i><span>{}</span></div>",
            html::escape(lang)
        )
    });
    target.set_html(Region::LanguagesList, html);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::RegionMap;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn doc(value: serde_json::Value) -> ResumeDocument {
        serde_json::from_value(value).unwrap()
    }

    fn ctx() -> RenderContext {
        RenderContext {
            today: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        }
    }

    fn run(
        render: fn(&ResumeDocument, &RenderContext, &mut dyn RenderTarget),
        value: serde_json::Value,
        region: Region,
    ) -> String {
        let mut map = RegionMap::new();
        render(&doc(value), &ctx(), &mut map);
        map.get(region).unwrap().to_string()
    }

    #[test]
    fn test_empty_experience_renders_placeholder_only() {
        let html = run(render_experience, json!({ "experience": [] }), Region::ExperienceList);
        assert_eq!(html, placeholder(NO_EXPERIENCE));
        assert!(!html.contains("<ul>"));
        assert!(!html.contains("experience-item"));
    }

    #[test]
    fn test_absent_sections_render_placeholders() {
        let empty = json!({});
        assert_eq!(
            run(render_education, empty.clone(), Region::EducationList),
            placeholder(NO_EDUCATION)
        );
        assert_eq!(
            run(render_skills, empty.clone(), Region::SkillsGrid),
            placeholder(NO_SKILLS)
        );
        assert_eq!(
            run(render_projects, empty.clone(), Region::ProjectsGrid),
            placeholder(NO_PROJECTS)
        );
        assert_eq!(
            run(render_certifications, empty.clone(), Region::CertificationsList),
            placeholder(NO_CERTIFICATIONS)
        );
        assert_eq!(
            run(render_languages, empty, Region::LanguagesList),
            placeholder(NO_LANGUAGES)
        );
    }

    #[test]
    fn test_experience_bullets_render_as_list_in_order() {
        let html = run(
            render_experience,
            json!({ "experience": [{
                "title": "Engineer",
                "company": "Acme",
                "dates": "2020 - 2023",
                "description": ["Led team", "Shipped v2"]
            }] }),
            Region::ExperienceList,
        );
        assert!(html.contains("<ul><li>Led team</li><li>Shipped v2</li></ul>"));
        assert_eq!(html.matches("<li>").count(), 2);
        assert!(html.contains("<span class=\"item-dates\">2020 - 2023</span>"));
    }

    #[test]
    fn test_mixed_bullets_still_render_as_list() {
        let html = run(
            render_experience,
            json!({ "experience": [{ "description": [1, "a"] }] }),
            Region::ExperienceList,
        );
        assert!(html.contains("<ul><li>1</li><li>a</li></ul>"));
    }

    #[test]
    fn test_numeric_certification_is_rendered() {
        let html = run(
            render_certifications,
            json!({ "certifications": [123] }),
            Region::CertificationsList,
        );
        assert!(html.contains("<p>123</p>"));
    }

    #[test]
    fn test_mistyped_section_renders_placeholder() {
        assert_eq!(
            run(render_skills, json!({ "skills": "Rust, Go" }), Region::SkillsGrid),
            placeholder(NO_SKILLS)
        );
        assert_eq!(
            run(
                render_experience,
                json!({ "experience": ["Engineer at Acme"] }),
                Region::ExperienceList
            ),
            placeholder(NO_EXPERIENCE)
        );
    }

    #[test]
    fn test_experience_preserves_source_order() {
        let html = run(
            render_experience,
            json!({ "experience": [{ "title": "Second Job" }, { "title": "First Job" }] }),
            Region::ExperienceList,
        );
        assert!(html.find("Second Job").unwrap() < html.find("First Job").unwrap());
    }

    #[test]
    fn test_experience_defaults_and_no_dates_badge() {
        let html = run(render_experience, json!({ "experience": [{}] }), Region::ExperienceList);
        assert!(html.contains(">Position Title</h3>"));
        assert!(html.contains(">Company Name</p>"));
        assert!(!html.contains("item-dates"));
    }

    #[test]
    fn test_education_with_gpa_and_year() {
        let html = run(
            render_education,
            json!({ "education": [{ "degree": "BSc", "institution": "UCL", "year": 2015, "gpa": 3.9 }] }),
            Region::EducationList,
        );
        assert!(html.contains("<strong>GPA:</strong> 3.9"));
        assert!(html.contains("<span class=\"item-dates\">2015</span>"));
    }

    #[test]
    fn test_skills_grouped_by_category() {
        let html = run(
            render_skills,
            json!({ "skills": ["Docker", "Python", "Photoshop"] }),
            Region::SkillsGrid,
        );
        let languages = html.find("Programming Languages").unwrap();
        let tools = html.find("Tools &amp; Technologies").unwrap();
        let other = html.find("Other Skills").unwrap();
        assert!(languages < tools && tools < other);
        assert!(!html.contains("Frameworks"));
    }

    #[test]
    fn test_project_without_description_uses_default() {
        let html = run(
            render_projects,
            json!({ "projects": [{ "name": "Folio", "technologies": ["Rust", "Tokio"] }] }),
            Region::ProjectsGrid,
        );
        assert!(html.contains("No description available."));
        assert!(html.contains("<strong>Technologies:</strong> Rust, Tokio"));
    }

    #[test]
    fn test_list_sections_escape_entries() {
        let html = run(
            render_certifications,
            json!({ "certifications": ["AWS <SAA>"] }),
            Region::CertificationsList,
        );
        assert!(html.contains("<p>AWS &lt;SAA&gt;</p>"));
    }

    #[test]
    fn test_languages_render_one_item_each() {
        let html = run(
            render_languages,
            json!({ "languages": ["English", "French"] }),
            Region::LanguagesList,
        );
        assert_eq!(html.matches("language-item").count(), 2);
    }

    #[test]
    fn test_summary_default() {
        assert_eq!(run(render_summary, json!({}), Region::Summary), "No summary available.");
    }
}

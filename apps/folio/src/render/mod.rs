//! Fragment rendering: one procedure per résumé section.
//!
//! Each procedure reads its slice of the document, builds markup, and writes
//! exactly one group of target regions. Absent or empty sections produce a
//! fixed placeholder; nothing here fails on missing fields.

pub mod footer;
pub mod header;
pub mod sections;

use chrono::{Local, NaiveDate};
use tracing::debug;

use crate::errors::FolioError;
use crate::html;
use crate::models::{Description, ResumeDocument};
use crate::page::RenderTarget;

/// Inputs that are not part of the document. Fixing `today` makes output
/// byte-identical across runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderContext {
    pub today: NaiveDate,
}

impl RenderContext {
    pub fn now() -> Self {
        Self {
            today: Local::now().date_naive(),
        }
    }
}

pub type SectionRenderer = fn(&ResumeDocument, &RenderContext, &mut dyn RenderTarget);

/// Render order.
pub const SECTIONS: [(&str, SectionRenderer); 9] = [
    ("header", header::render_header),
    ("summary", sections::render_summary),
    ("experience", sections::render_experience),
    ("education", sections::render_education),
    ("skills", sections::render_skills),
    ("projects", sections::render_projects),
    ("certifications", sections::render_certifications),
    ("languages", sections::render_languages),
    ("footer", footer::render_footer),
];

/// Runs every section procedure in order against `target`.
pub fn render_portfolio(
    doc: Option<&ResumeDocument>,
    ctx: &RenderContext,
    target: &mut dyn RenderTarget,
) -> Result<(), FolioError> {
    let doc = doc.ok_or(FolioError::NoData)?;

    for (name, render) in SECTIONS {
        debug!("Rendering section {name}");
        render(doc, ctx, target);
    }

    Ok(())
}

const PLACEHOLDER_STYLE: &str = "text-align: center; color: #666; padding: 40px;";

/// The fixed "nothing to show" fragment for a section.
pub fn placeholder(message: &str) -> String {
    format!(
        "<p style=\"{PLACEHOLDER_STYLE}\">{}</p>",
        html::escape(message)
    )
}

/// Prose renders as escaped text, item lists as `<ul>`. Other JSON shapes
/// are shown as their JSON text.
pub fn format_description(description: &Description) -> String {
    match description {
        Description::Text(text) => html::escape(text),
        Description::Items(items) => {
            let list: String = items
                .iter()
                .map(|item| format!("<li>{}</li>", html::escape(item)))
                .collect();
            format!("<ul>{list}</ul>")
        }
        Description::Other(value) => html::escape(&value.to_string()),
    }
}

/// True when the description would render nothing.
pub fn is_blank(description: &Description) -> bool {
    matches!(description, Description::Text(text) if text.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{Region, RegionMap};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn ctx() -> RenderContext {
        RenderContext {
            today: NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(),
        }
    }

    fn sample() -> ResumeDocument {
        serde_json::from_value(json!({
            "personal_info": { "name": "Ada Lovelace", "email": "ada@example.com" },
            "summary": "Analyst.",
            "experience": [{ "title": "Analyst", "company": "Engine Co", "description": ["Led team", "Shipped v2"] }],
            "skills": ["Python", "React"],
            "last_updated": "2024-01-15"
        }))
        .unwrap()
    }

    #[test]
    fn test_render_without_document_is_no_data() {
        let mut map = RegionMap::new();
        let err = render_portfolio(None, &ctx(), &mut map).unwrap_err();
        assert!(matches!(err, FolioError::NoData));
        assert_eq!(map, RegionMap::new());
    }

    #[test]
    fn test_render_fills_every_content_region() {
        let mut map = RegionMap::new();
        render_portfolio(Some(&sample()), &ctx(), &mut map).unwrap();

        for region in Region::ALL {
            let is_container = matches!(region, Region::Loading | Region::Content | Region::Error);
            assert_eq!(map.get(region).is_some(), !is_container, "{region:?}");
        }
    }

    #[test]
    fn test_render_is_idempotent() {
        let doc = sample();
        let mut first = RegionMap::new();
        let mut second = RegionMap::new();
        render_portfolio(Some(&doc), &ctx(), &mut first).unwrap();
        render_portfolio(Some(&doc), &ctx(), &mut second).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_format_description_text_is_escaped() {
        assert_eq!(
            format_description(&Description::Text("R&D <lead>".to_string())),
            "R&amp;D &lt;lead&gt;"
        );
    }

    #[test]
    fn test_format_description_items_keep_order() {
        let html = format_description(&Description::Items(vec![
            "Led team".to_string(),
            "Shipped v2".to_string(),
        ]));
        assert_eq!(html, "<ul><li>Led team</li><li>Shipped v2</li></ul>");
    }

    #[test]
    fn test_format_description_other_passes_through() {
        assert_eq!(format_description(&Description::Other(json!(42))), "42");
    }

    #[test]
    fn test_placeholder_markup() {
        assert_eq!(
            placeholder("No skills information available."),
            "<p style=\"text-align: center; color: #666; padding: 40px;\">No skills information available.</p>"
        );
    }
}

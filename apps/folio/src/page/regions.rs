use std::collections::BTreeMap;

/// Named target regions the host page must expose, one element per id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Region {
    PageTitle,
    Name,
    Title,
    ProfileImage,
    ContactInfo,
    Summary,
    ExperienceList,
    EducationList,
    SkillsGrid,
    ProjectsGrid,
    CertificationsList,
    LanguagesList,
    CurrentYear,
    FooterName,
    LastUpdated,
    Loading,
    Content,
    Error,
}

impl Region {
    pub const ALL: [Region; 18] = [
        Region::PageTitle,
        Region::Name,
        Region::Title,
        Region::ProfileImage,
        Region::ContactInfo,
        Region::Summary,
        Region::ExperienceList,
        Region::EducationList,
        Region::SkillsGrid,
        Region::ProjectsGrid,
        Region::CertificationsList,
        Region::LanguagesList,
        Region::CurrentYear,
        Region::FooterName,
        Region::LastUpdated,
        Region::Loading,
        Region::Content,
        Region::Error,
    ];

    /// The element `id` in the host page.
    pub fn id(&self) -> &'static str {
        match self {
            Region::PageTitle => "page-title",
            Region::Name => "name",
            Region::Title => "title",
            Region::ProfileImage => "profile-img",
            Region::ContactInfo => "contact-info",
            Region::Summary => "summary",
            Region::ExperienceList => "experience-list",
            Region::EducationList => "education-list",
            Region::SkillsGrid => "skills-grid",
            Region::ProjectsGrid => "projects-grid",
            Region::CertificationsList => "certifications-list",
            Region::LanguagesList => "languages-list",
            Region::CurrentYear => "current-year",
            Region::FooterName => "footer-name",
            Region::LastUpdated => "last-updated",
            Region::Loading => "loading",
            Region::Content => "portfolio-content",
            Region::Error => "error",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Display {
    None,
    Block,
}

impl Display {
    pub fn css(&self) -> &'static str {
        match self {
            Display::None => "none",
            Display::Block => "block",
        }
    }
}

/// Content injected into a region. `Text` is escaped on output; `Html` is
/// a trusted fragment produced by the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegionContent {
    Text(String),
    Html(String),
}

/// The surface render procedures write to. Each call replaces whatever the
/// region held before.
pub trait RenderTarget {
    fn set_html(&mut self, region: Region, html: String);
    fn set_text(&mut self, region: Region, text: String);
    fn set_display(&mut self, region: Region, display: Display);
}

/// In-memory record of region writes, later spliced into a host document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionMap {
    content: BTreeMap<Region, RegionContent>,
    display: BTreeMap<Region, Display>,
}

impl RegionMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> impl Iterator<Item = (Region, &RegionContent)> {
        self.content.iter().map(|(r, c)| (*r, c))
    }

    pub fn displays(&self) -> impl Iterator<Item = (Region, Display)> + '_ {
        self.display.iter().map(|(r, d)| (*r, *d))
    }

    /// Moves every write recorded in `staged` into this map.
    pub fn commit(&mut self, staged: RegionMap) {
        self.content.extend(staged.content);
        self.display.extend(staged.display);
    }
}

// Read-back accessors; the writer only walks `contents` and `displays`.
#[cfg(test)]
impl RegionMap {
    pub fn content(&self, region: Region) -> Option<&RegionContent> {
        self.content.get(&region)
    }

    /// The written value as a string, text or markup alike.
    pub fn get(&self, region: Region) -> Option<&str> {
        self.content(region).map(|c| match c {
            RegionContent::Text(s) | RegionContent::Html(s) => s.as_str(),
        })
    }

    pub fn display(&self, region: Region) -> Option<Display> {
        self.display.get(&region).copied()
    }

    pub fn is_visible(&self, region: Region) -> bool {
        self.display(region) == Some(Display::Block)
    }
}

impl RenderTarget for RegionMap {
    fn set_html(&mut self, region: Region, html: String) {
        self.content.insert(region, RegionContent::Html(html));
    }

    fn set_text(&mut self, region: Region, text: String) {
        self.content.insert(region, RegionContent::Text(text));
    }

    fn set_display(&mut self, region: Region, display: Display) {
        self.display.insert(region, display);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_region_ids_are_unique() {
        let ids: HashSet<_> = Region::ALL.iter().map(|r| r.id()).collect();
        assert_eq!(ids.len(), Region::ALL.len());
    }

    #[test]
    fn test_later_write_replaces_earlier() {
        let mut map = RegionMap::new();
        map.set_text(Region::Name, "First".to_string());
        map.set_html(Region::Name, "<b>Second</b>".to_string());
        assert_eq!(
            map.content(Region::Name),
            Some(&RegionContent::Html("<b>Second</b>".to_string()))
        );
    }

    #[test]
    fn test_commit_moves_staged_writes() {
        let mut page = RegionMap::new();
        page.set_display(Region::Loading, Display::Block);

        let mut staged = RegionMap::new();
        staged.set_text(Region::Summary, "Hello".to_string());
        page.commit(staged);

        assert_eq!(page.get(Region::Summary), Some("Hello"));
        assert!(page.is_visible(Region::Loading));
    }
}

//! Host page: the HTML document whose `id`-tagged elements receive region
//! writes.
//!
//! The document is scanned once at load time. Every [`Region`] id must name
//! exactly one non-void element; anything else is a `HostPage` error, so a
//! broken template fails before any data is fetched.

use std::collections::{BTreeMap, HashSet};
use std::ops::Range;
use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use crate::errors::FolioError;
use crate::html;
use crate::page::regions::{Display, Region, RegionContent, RegionMap};

/// Host page used when no template path is configured.
pub const DEFAULT_HOST_PAGE: &str = include_str!("../../templates/index.html");

fn open_tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<([A-Za-z][A-Za-z0-9-]*)\b([^>]*)>").expect("valid regex"))
}

fn id_attr_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?:^|\s)id\s*=\s*["']([^"']*)["']"#).expect("valid regex")
    })
}

fn href_attr_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?:^|\s)href\s*=\s*["']([^"']*)["']"#).expect("valid regex")
    })
}

fn style_attr_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"\sstyle\s*=\s*"([^"]*)""#).expect("valid regex"))
}

#[derive(Debug, Clone)]
struct ElementSpan {
    open_start: usize,
    open_end: usize,
    close_start: usize,
}

impl ElementSpan {
    fn opening(&self) -> Range<usize> {
        self.open_start..self.open_end
    }

    fn inner(&self) -> Range<usize> {
        self.open_end..self.close_start
    }
}

#[derive(Debug, Clone)]
pub struct HostDocument {
    source: String,
    regions: BTreeMap<Region, ElementSpan>,
    ids: HashSet<String>,
    anchors: Vec<String>,
}

impl HostDocument {
    pub fn parse(source: impl Into<String>) -> Result<Self, FolioError> {
        let source = source.into();
        let mut by_id: BTreeMap<String, Vec<(usize, usize, String)>> = BTreeMap::new();
        let mut anchors = Vec::new();

        for caps in open_tag_re().captures_iter(&source) {
            let (Some(whole), Some(tag), Some(attrs)) = (caps.get(0), caps.get(1), caps.get(2))
            else {
                continue;
            };
            let tag_name = tag.as_str().to_ascii_lowercase();

            if tag_name == "a" {
                if let Some(href) = href_attr_re().captures(attrs.as_str()).and_then(|c| c.get(1)) {
                    anchors.push(href.as_str().to_string());
                }
            }

            if let Some(id) = id_attr_re().captures(attrs.as_str()).and_then(|c| c.get(1)) {
                by_id.entry(id.as_str().to_string()).or_default().push((
                    whole.start(),
                    whole.end(),
                    tag_name,
                ));
            }
        }

        let mut regions = BTreeMap::new();
        for region in Region::ALL {
            let found = by_id.get(region.id()).map(Vec::as_slice).unwrap_or_default();
            let (open_start, open_end, tag_name) = match found {
                [single] => single,
                [] => {
                    return Err(FolioError::HostPage(format!(
                        "missing element with id=\"{}\"",
                        region.id()
                    )))
                }
                _ => {
                    return Err(FolioError::HostPage(format!(
                        "id=\"{}\" appears {} times, expected once",
                        region.id(),
                        found.len()
                    )))
                }
            };

            if source[*open_start..*open_end].ends_with("/>") {
                return Err(FolioError::HostPage(format!(
                    "element id=\"{}\" is self-closing and cannot hold content",
                    region.id()
                )));
            }

            let close_start = find_close(&source, tag_name, *open_end).ok_or_else(|| {
                FolioError::HostPage(format!(
                    "element id=\"{}\" has no closing </{}>",
                    region.id(),
                    tag_name
                ))
            })?;

            regions.insert(
                region,
                ElementSpan {
                    open_start: *open_start,
                    open_end: *open_end,
                    close_start,
                },
            );
        }

        debug!(
            "Host page parsed: {} regions, {} anchors",
            regions.len(),
            anchors.len()
        );

        Ok(Self {
            ids: by_id.into_keys().collect(),
            source,
            regions,
            anchors,
        })
    }

    pub fn default_page() -> Result<Self, FolioError> {
        Self::parse(DEFAULT_HOST_PAGE)
    }

    pub fn has_id(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// `href` values of every `<a>` element, in document order.
    pub fn anchor_hrefs(&self) -> &[String] {
        &self.anchors
    }

    /// Splices region writes into the document and injects `script` before
    /// `</body>` (or at the end when the page has no body tag).
    ///
    /// Content writes replace an element's children; display writes rewrite
    /// its opening tag. Content written to a region that encloses another
    /// written region is rejected.
    pub fn render(&self, page: &RegionMap, script: &str) -> Result<String, FolioError> {
        let mut edits: Vec<(Range<usize>, String)> = Vec::new();

        for (region, content) in page.contents() {
            let span = self.span(region)?;
            let inner = match content {
                RegionContent::Text(text) => html::escape(text),
                RegionContent::Html(markup) => markup.clone(),
            };
            edits.push((span.inner(), inner));
        }

        for (region, display) in page.displays() {
            let span = self.span(region)?;
            let opening = &self.source[span.opening()];
            edits.push((span.opening(), with_display(opening, display)));
        }

        let body_close = self
            .source
            .to_ascii_lowercase()
            .rfind("</body>")
            .unwrap_or(self.source.len());
        edits.push((body_close..body_close, format!("<script>{script}</script>\n")));

        // Apply back to front so earlier offsets stay valid.
        edits.sort_by(|a, b| (b.0.start, b.0.end).cmp(&(a.0.start, a.0.end)));

        let mut out = self.source.clone();
        let mut applied_floor = usize::MAX;
        for (range, replacement) in edits {
            if range.end > applied_floor {
                return Err(FolioError::HostPage(
                    "overlapping region writes".to_string(),
                ));
            }
            applied_floor = range.start;
            out.replace_range(range, &replacement);
        }

        Ok(out)
    }

    fn span(&self, region: Region) -> Result<&ElementSpan, FolioError> {
        self.regions
            .get(&region)
            .ok_or_else(|| FolioError::HostPage(format!("unknown region {}", region.id())))
    }
}

/// Finds the start of the `</tag>` that closes an element opened just before
/// `from`, accounting for nested elements of the same name.
fn find_close(source: &str, tag_name: &str, from: usize) -> Option<usize> {
    let pattern = format!(r"(?i)<(/?){}[\s>/]", regex::escape(tag_name));
    let re = Regex::new(&pattern).ok()?;
    let mut depth = 1usize;

    for caps in re.captures_iter(&source[from..]) {
        let whole = caps.get(0)?;
        let closing = caps.get(1).is_some_and(|m| !m.as_str().is_empty());
        if closing {
            depth -= 1;
            if depth == 0 {
                return Some(from + whole.start());
            }
        } else if !source[from + whole.start()..].split('>').next()?.ends_with('/') {
            depth += 1;
        }
    }
    None
}

/// Rewrites an opening tag so its inline style carries `display: <value>`,
/// preserving other declarations.
fn with_display(opening: &str, display: Display) -> String {
    let declaration = format!("display: {}", display.css());

    let existing = style_attr_re()
        .captures(opening)
        .and_then(|c| Some((c.get(0)?, c.get(1)?)));

    match existing {
        Some((attr, body)) => {
            let mut declarations: Vec<&str> = body
                .as_str()
                .split(';')
                .map(str::trim)
                .filter(|d| !d.is_empty() && !is_display_declaration(d))
                .collect();
            declarations.push(&declaration);
            format!(
                "{} style=\"{}\"{}",
                &opening[..attr.start()],
                declarations.join("; "),
                &opening[attr.end()..]
            )
        }
        None => {
            let insert_at = if opening.ends_with("/>") {
                opening.len() - 2
            } else {
                opening.len() - 1
            };
            format!(
                "{} style=\"{}\"{}",
                &opening[..insert_at],
                declaration,
                &opening[insert_at..]
            )
        }
    }
}

fn is_display_declaration(declaration: &str) -> bool {
    declaration
        .split(':')
        .next()
        .is_some_and(|property| property.trim().eq_ignore_ascii_case("display"))
}

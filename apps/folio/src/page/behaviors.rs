//! Page behaviours that run in the browser independently of the resume
//! data: smooth scrolling for in-page anchors and a parallax offset on the
//! header while the page scrolls. Both are attached on every written page,
//! including the error page.

use crate::page::host::HostDocument;

/// Header moves at half the scroll speed.
pub const PARALLAX_FACTOR: f64 = 0.5;
pub const HEADER_SELECTOR: &str = ".header";

/// The element id an in-page anchor scrolls to. Bare `#` and links that
/// leave the page resolve to `None`.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// CSS transform applied to the header, as the body of a JS template
/// literal. `scroll_y` is the script expression for the vertical scroll
/// offset.
pub fn parallax_transform(scroll_y: &str) -> String {
    format!("translateY(${{{scroll_y} * {PARALLAX_FACTOR}}}px)")
}

/// In-page anchors whose target id does not exist in the host page.
pub fn dangling_anchors(doc: &HostDocument) -> Vec<&str> {
    doc.anchor_hrefs()
        .iter()
        .filter_map(|href| anchor_target(href))
        .filter(|id| !doc.has_id(id))
        .collect()
}

const BEHAVIORS_JS: &str = r##"
document.addEventListener('DOMContentLoaded', () => {
    document.querySelectorAll('a[href^="#"]').forEach(anchor => {
        anchor.addEventListener('click', event => {
            const id = anchor.getAttribute('href').slice(1);
            const target = id && document.getElementById(id);
            if (target) {
                event.preventDefault();
                target.scrollIntoView({ behavior: 'smooth', block: 'start' });
            }
        });
    });

    window.addEventListener('scroll', () => {
        const header = document.querySelector('__HEADER__');
        if (header) {
            header.style.transform = `__TRANSFORM__`;
        }
    });
});
"##;

/// Script wiring both behaviours to click and scroll events.
pub fn script() -> String {
    BEHAVIORS_JS
        .replace("__HEADER__", HEADER_SELECTOR)
        .replace("__TRANSFORM__", &parallax_transform("window.pageYOffset"))
}

use crate::extract::{self, ContactItem};
use crate::html;
use crate::models::ResumeDocument;
use crate::page::{Region, RenderTarget};
use crate::render::RenderContext;

const IMAGE_STYLE: &str = "width: 100%; height: 100%; object-fit: cover; border-radius: 50%;";
const INITIALS_STYLE: &str = "font-size: 3rem; font-weight: 600;";

/// Page title, name, headline, profile image and contact list.
pub fn render_header(
    doc: &ResumeDocument,
    _ctx: &RenderContext,
    target: &mut dyn RenderTarget,
) {
    let name = doc.display_name();

    target.set_text(Region::PageTitle, doc.page_title());
    target.set_text(Region::Name, name.to_string());
    target.set_text(Region::Title, doc.title_hint().to_string());
    target.set_html(Region::ProfileImage, profile_image(doc.image_url(), name));

    let contacts = doc
        .personal()
        .map(extract::contact_items)
        .unwrap_or_default();
    target.set_html(Region::ContactInfo, contact_list(&contacts));
}

/// The photo when a URL is given, otherwise the name's initials.
pub fn profile_image(image_url: Option<&str>, name: &str) -> String {
    match image_url {
        Some(url) => format!(
            "<img src=\"{}\" alt=\"{}\" style=\"{IMAGE_STYLE}\">",
            html::escape(url),
            html::escape(name)
        ),
        None => format!(
            "<span style=\"{INITIALS_STYLE}\">{}</span>",
            html::escape(&extract::initials(name))
        ),
    }
}

fn contact_list(items: &[ContactItem]) -> String {
    items
        .iter()
        .map(|item| {
            let body = match &item.link {
                Some(link) => format!(
                    "<a href=\"{}\" target=\"_blank\" rel=\"noopener\">{}</a>",
                    html::escape(link),
                    html::escape(&item.text)
                ),
                None => format!("<span>{}</span>", html::escape(&item.text)),
            };
            format!(
                "<div class=\"contact-item\"><i class=\"{}\"></i>{body}</div>",
                item.icon
            )
        })
        .collect()
}

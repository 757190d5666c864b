use chrono::{DateTime, Datelike, NaiveDate};
use tracing::warn;

use crate::models::ResumeDocument;
use crate::page::{Region, RenderTarget};
use crate::render::RenderContext;

/// Locale-default short date (en-US): `3/9/2024`.
const DISPLAY_DATE_FORMAT: &str = "%-m/%-d/%Y";

pub fn render_footer(doc: &ResumeDocument, ctx: &RenderContext, target: &mut dyn RenderTarget) {
    target.set_text(Region::CurrentYear, ctx.today.year().to_string());
    target.set_text(Region::FooterName, doc.display_name().to_string());

    let updated = last_updated_date(doc.last_updated.as_deref(), ctx.today);
    target.set_text(Region::LastUpdated, format_display_date(updated));
}

/// `last_updated` when it parses as an ISO date, else `today`. Accepted:
/// `YYYY-MM-DD`, RFC 3339, and `YYYY-MM` / `YYYY` as the first day of the
/// month or year.
pub fn last_updated_date(raw: Option<&str>, today: NaiveDate) -> NaiveDate {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return today;
    };

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
        .or_else(|| NaiveDate::parse_from_str(&format!("{raw}-01"), "%Y-%m-%d").ok())
        .or_else(|| year_start(raw))
        .unwrap_or_else(|| {
            warn!("Unparseable last_updated '{raw}', using today's date");
            today
        })
}

fn year_start(raw: &str) -> Option<NaiveDate> {
    if raw.len() != 4 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    NaiveDate::from_ymd_opt(raw.parse().ok()?, 1, 1)
}

pub fn format_display_date(date: NaiveDate) -> String {
    date.format(DISPLAY_DATE_FORMAT).to_string()
}

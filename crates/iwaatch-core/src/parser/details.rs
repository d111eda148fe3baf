//! Movie detail page parser for iwaatch.com
//!
//! The synopsis is the second `h2` of `#movie-desc` (the first one is the
//! heading). Duration and rating sit in `ul#info`, each as the text right
//! after an empty glyphicon span.

use scraper::{ElementRef, Html, Selector};

use crate::types::{DESCRIPTION_MISSING, DetailRecord};

/// Parses a detail page into a [`DetailRecord`]
///
/// Missing description falls back to "No description"; missing duration or
/// rating falls back to "Unknown", each independently.
pub fn parse_details(html: &str) -> DetailRecord {
    let document = Html::parse_document(html);

    let description =
        extract_description(&document).unwrap_or_else(|| DESCRIPTION_MISSING.to_string());

    let info = Selector::parse("ul#info")
        .ok()
        .and_then(|selector| document.select(&selector).next());

    let duration = info
        .as_ref()
        .and_then(|list| text_after_icon(list, "span.glyphicon-time"))
        .unwrap_or_default();
    let rating = info
        .as_ref()
        .and_then(|list| text_after_icon(list, "span.glyphicon-star-empty"))
        .unwrap_or_default();

    tracing::debug!(
        has_info = info.is_some(),
        %duration,
        %rating,
        "parsed detail page"
    );

    DetailRecord::new(description, &duration, &rating)
}

fn extract_description(document: &Html) -> Option<String> {
    let selector = Selector::parse("#movie-desc h2").ok()?;
    let overview = document
        .select(&selector)
        .nth(1)?
        .text()
        .collect::<String>();

    let overview = overview.trim();
    if overview.is_empty() {
        None
    } else {
        Some(overview.to_string())
    }
}

/// Text node following the icon span, up to the end of its first line
fn text_after_icon(list: &ElementRef, icon_selector: &str) -> Option<String> {
    let selector = Selector::parse(icon_selector).ok()?;
    let icon = list.select(&selector).next()?;
    let text = icon.next_sibling()?.value().as_text()?;

    let line = text.trim_start().lines().next().unwrap_or_default().trim();
    if line.is_empty() {
        None
    } else {
        Some(line.to_string())
    }
}

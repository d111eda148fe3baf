//! Search results parser for iwaatch.com
//!
//! Parses HTML from the `/?q=` listing page. Each result is a grid cell
//! `div` whose class starts with `col-xs-12 col-sm-6 col-md-3 `, wrapping a
//! link, a poster set as a `background-image` style and a `post-title` div.

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::types::SearchResult;

const CONTAINER_SELECTOR: &str = r#"div[class^="col-xs-12 col-sm-6 col-md-3 "]"#;

/// Parses search results HTML and returns the movie cards in document order
///
/// Cards missing a link, a poster or a title are skipped.
///
/// # Arguments
/// * `html` - Raw HTML string from the search results page
///
/// # Returns
/// Vector of [`SearchResult`], empty if no complete cards were found
pub fn parse_search_results(html: &str) -> Vec<SearchResult> {
    let document = Html::parse_document(html);

    let Ok(container_selector) = Selector::parse(CONTAINER_SELECTOR) else {
        return Vec::new();
    };
    let Ok(background_re) =
        Regex::new(r#"background-image:\s*url\(\s*['"]?([^'")]+)['"]?\s*\)"#)
    else {
        return Vec::new();
    };

    let results: Vec<SearchResult> = document
        .select(&container_selector)
        .filter_map(|container| parse_movie_card(&container, &background_re))
        .collect();

    tracing::debug!(count = results.len(), "parsed search results");
    results
}

/// Parses a single movie card, `None` unless all three fields are present
fn parse_movie_card(container: &ElementRef, background_re: &Regex) -> Option<SearchResult> {
    let href = extract_href(container)?;
    let image = extract_background_image(container, background_re)?;
    let title = extract_title(container)?;

    Some(SearchResult { title, image, href })
}

/// First link target inside the card
fn extract_href(container: &ElementRef) -> Option<String> {
    let selector = Selector::parse("a[href]").ok()?;
    let href = container
        .select(&selector)
        .next()?
        .value()
        .attr("href")?
        .trim();

    non_empty(href)
}

/// First `background-image: url(...)` inside the card
fn extract_background_image(container: &ElementRef, background_re: &Regex) -> Option<String> {
    let selector = Selector::parse("[style]").ok()?;

    container
        .select(&selector)
        .filter_map(|el| el.value().attr("style"))
        .find_map(|style| {
            background_re
                .captures(style)
                .and_then(|caps| caps.get(1))
                .and_then(|m| non_empty(m.as_str().trim()))
        })
}

/// Text of the card's `post-title` div
fn extract_title(container: &ElementRef) -> Option<String> {
    let selector = Selector::parse("div.post-title").ok()?;
    let title = container
        .select(&selector)
        .next()?
        .text()
        .collect::<String>();

    non_empty(title.trim())
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(href: &str, image: &str, title: &str) -> String {
        format!(
            r#"<div class="col-xs-12 col-sm-6 col-md-3 movie-item">
                <a href="{href}">
                    <div class="poster" style="background-image: url('{image}');"></div>
                    <div class="post-title">{title}</div>
                </a>
            </div>"#
        )
    }

    #[test]
    fn test_parse_empty_html() {
        let html = "<html><body></body></html>";
        assert!(parse_search_results(html).is_empty());
    }

    #[test]
    fn test_parse_single_card() {
        let html = format!(
            "<html><body><div class=\"row\">{}</div></body></html>",
            card(
                "https://iwaatch.com/movie/inception",
                "https://iwaatch.com/uploads/inception.jpg",
                "  Inception  "
            )
        );

        let results = parse_search_results(&html);
        assert_eq!(results.len(), 1);
        assert_eq!(
            results[0],
            SearchResult {
                title: "Inception".to_string(),
                image: "https://iwaatch.com/uploads/inception.jpg".to_string(),
                href: "https://iwaatch.com/movie/inception".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_multiple_cards_in_document_order() {
        let html = format!(
            "<html><body>{}{}{}</body></html>",
            card("/movie/heat", "/img/heat.jpg", "Heat"),
            card("/movie/ronin", "/img/ronin.jpg", "Ronin"),
            card("/movie/heat", "/img/heat.jpg", "Heat"),
        );

        let results = parse_search_results(&html);
        let titles: Vec<&str> = results.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Heat", "Ronin", "Heat"]);
    }

    #[test]
    fn test_skip_card_without_title() {
        let html = r#"
        <html><body>
            <div class="col-xs-12 col-sm-6 col-md-3 movie-item">
                <a href="/movie/untitled">
                    <div style="background-image: url('/img/untitled.jpg')"></div>
                </a>
            </div>
        </body></html>
        "#;

        assert!(parse_search_results(html).is_empty());
    }

    #[test]
    fn test_skip_card_without_image() {
        let html = r#"
        <html><body>
            <div class="col-xs-12 col-sm-6 col-md-3 movie-item">
                <a href="/movie/no-poster"><div class="post-title">No Poster</div></a>
            </div>
        </body></html>
        "#;

        assert!(parse_search_results(html).is_empty());
    }

    #[test]
    fn test_skip_card_without_link() {
        let html = r#"
        <html><body>
            <div class="col-xs-12 col-sm-6 col-md-3 movie-item">
                <div style="background-image: url('/img/x.jpg')"></div>
                <div class="post-title">Orphan</div>
            </div>
        </body></html>
        "#;

        assert!(parse_search_results(html).is_empty());
    }

    #[test]
    fn test_skip_whitespace_title() {
        let html = card("/movie/blank", "/img/blank.jpg", "   ");
        assert!(parse_search_results(&html).is_empty());
    }

    #[test]
    fn test_ignore_other_grid_cells() {
        let html = r#"
        <html><body>
            <div class="col-xs-12 col-sm-6 col-md-4 sidebar">
                <a href="/movie/ad"><div style="background-image: url('/img/ad.jpg')"></div>
                <div class="post-title">Ad</div></a>
            </div>
            <div class="col-xs-12 col-sm-6 col-md-3">
                <a href="/movie/bare"><div style="background-image: url('/img/bare.jpg')"></div>
                <div class="post-title">No trailing class</div></a>
            </div>
        </body></html>
        "#;

        assert!(parse_search_results(html).is_empty());
    }

    #[test]
    fn test_background_image_double_quotes() {
        let html = r#"
        <div class="col-xs-12 col-sm-6 col-md-3 movie-item">
            <a href="/movie/alien">
                <div style="height: 300px; background-image:url(&quot;/img/alien.jpg&quot;)"></div>
                <div class="post-title">Alien</div>
            </a>
        </div>
        "#;

        let results = parse_search_results(html);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].image, "/img/alien.jpg");
    }

    #[test]
    fn test_title_entities_decoded() {
        let html = card("/movie/fast", "/img/fast.jpg", "Fast &amp; Furious");
        let results = parse_search_results(&html);
        assert_eq!(results[0].title, "Fast & Furious");
    }
}

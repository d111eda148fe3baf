//! Playback page parser for iwaatch.com
//!
//! The player markup lists one `<source type="video/mp4" size="...">` per
//! quality and optionally an Arabic `<track>`.

use scraper::{Html, Selector};

use crate::types::{Stream, StreamBundle};

const SUBTITLE_LABEL: &str = "Arabic";

/// Parses a playback page into a [`StreamBundle`]
///
/// Streams keep document order. Sources without a numeric `size` are
/// skipped. A missing Arabic track leaves `subtitles` empty.
pub fn parse_stream_bundle(html: &str) -> StreamBundle {
    let document = Html::parse_document(html);

    let streams = extract_streams(&document);
    let subtitles = extract_subtitles(&document).unwrap_or_default();

    tracing::debug!(
        streams = streams.len(),
        has_subtitles = !subtitles.is_empty(),
        "parsed playback page"
    );

    StreamBundle { streams, subtitles }
}

fn extract_streams(document: &Html) -> Vec<Stream> {
    let Ok(selector) = Selector::parse(r#"source[src][type="video/mp4"][size]"#) else {
        return Vec::new();
    };

    document
        .select(&selector)
        .filter_map(|source| {
            let url = source.value().attr("src")?.trim();
            let size = source.value().attr("size")?.trim();

            if url.is_empty() || !is_numeric(size) {
                return None;
            }

            Some(Stream {
                title: format!("{}p", size),
                url: url.to_string(),
            })
        })
        .collect()
}

fn extract_subtitles(document: &Html) -> Option<String> {
    let selector = Selector::parse("track[src][label]").ok()?;

    document
        .select(&selector)
        .filter(|track| track.value().attr("label") == Some(SUBTITLE_LABEL))
        .find_map(|track| track.value().attr("src"))
        .map(|src| src.trim().to_string())
}

fn is_numeric(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
}

//! HTML extraction from Flaticon search result pages.
//!
//! Scraping third-party markup is inherently fragile; the contract here is
//! failure tolerance, not correctness. Two independent patterns are applied
//! over the body and merged in match order:
//!
//! - v1 "tile": `data-id` attribute followed by an `<img>` with `src`/`alt`,
//!   as rendered in the classic search grid.
//! - v2 "embedded": icon objects serialized into the page as JSON fragments
//!   (`"id":…,"description":…,"images":{…,"64":…}`).

use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::blocking::Client;

use crate::model::types::{IconRecord, PAGE_SIZE};

pub const SEARCH_URL: &str = "https://www.flaticon.com/search";

static TILE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?s)data-id="(\d+)"[^>]*>.*?<img[^>]*src="([^"]*)"[^>]*alt="([^"]*)"[^>]*>"#)
        .expect("tile pattern compiles")
});

static EMBEDDED_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#""id":(\d+),"description":"([^"]*)"[^}]*"images":\{[^}]*"64":"([^"]*)""#)
        .expect("embedded pattern compiles")
});

/// First numeric path segment is the rendered size; force the 64px variant.
static SIZE_SEGMENT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"/\d+/").expect("size pattern"));

pub fn fetch(client: &Client, query: &str, page: u32) -> Result<Vec<IconRecord>, super::FetchError> {
    let url = format!("{SEARCH_URL}?word={}&page={page}", urlencoding::encode(query));
    let body = client
        .get(&url)
        .header(
            reqwest::header::ACCEPT,
            "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8",
        )
        .send()?
        .error_for_status()?
        .text()?;
    Ok(extract(&body, query))
}

/// Applies both patterns over `html`, merging matches up to one page's worth.
/// `query` stands in for missing titles.
pub fn extract(html: &str, query: &str) -> Vec<IconRecord> {
    let mut records = Vec::new();

    for caps in TILE_RE.captures_iter(html) {
        if records.len() >= PAGE_SIZE {
            break;
        }
        let id = &caps[1];
        let image_url = SIZE_SEGMENT_RE.replace(&caps[2], "/64/").into_owned();
        let title = if caps[3].is_empty() { query } else { &caps[3] };
        records.push(IconRecord {
            id: id.to_string(),
            title: title.to_string(),
            image_url,
            flaticon_url: detail_url(title, id),
            fallback_url: None,
        });
    }

    for caps in EMBEDDED_RE.captures_iter(html) {
        if records.len() >= PAGE_SIZE {
            break;
        }
        let id = &caps[1];
        let title = if caps[2].is_empty() { query } else { &caps[2] };
        records.push(IconRecord {
            id: id.to_string(),
            title: title.to_string(),
            image_url: caps[3].to_string(),
            flaticon_url: detail_url(title, id),
            fallback_url: None,
        });
    }

    records
}

fn detail_url(title: &str, id: &str) -> String {
    let slug = title.to_lowercase().split_whitespace().collect::<Vec<_>>().join("-");
    format!("https://www.flaticon.com/free-icon/{slug}_{id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tile(id: u32, src: &str, alt: &str) -> String {
        format!(r#"<li data-id="{id}" class="icon"><img src="{src}" alt="{alt}"></li>"#)
    }

    #[test]
    fn tile_pattern_extracts_and_normalizes_size() {
        let html = tile(870768, "https://cdn-icons-png.flaticon.com/128/870/870768.png", "Wedding Ring");
        let records = extract(&html, "ring");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "870768");
        assert_eq!(records[0].title, "Wedding Ring");
        assert_eq!(records[0].image_url, "https://cdn-icons-png.flaticon.com/64/870/870768.png");
        assert_eq!(records[0].flaticon_url, "https://www.flaticon.com/free-icon/wedding-ring_870768");
    }

    #[test]
    fn embedded_pattern_extracts_json_fragments() {
        let html = r#"window.__data = [{"id":833472,"description":"Heart","tags":"x","images":{"16":"a","64":"https://cdn-icons-png.flaticon.com/64/833/833472.png"}}]"#;
        let records = extract(html, "heart");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "833472");
        assert_eq!(records[0].image_url, "https://cdn-icons-png.flaticon.com/64/833/833472.png");
    }

    #[test]
    fn empty_alt_falls_back_to_query() {
        let html = tile(42, "https://cdn.example/128/42.png", "");
        let records = extract(&html, "ring");
        assert_eq!(records[0].title, "ring");
    }

    #[test]
    fn merged_matches_cap_at_a_page() {
        let mut html = String::new();
        for id in 0..30 {
            html.push_str(&tile(id, "https://cdn.example/128/i.png", "icon"));
        }
        html.push_str(r#""id":99,"description":"Extra","images":{"64":"u"}"#);
        assert_eq!(extract(&html, "q").len(), PAGE_SIZE);
    }

    #[test]
    fn unmatched_markup_yields_nothing() {
        assert!(extract("<html><body>nothing here</body></html>", "q").is_empty());
    }
}

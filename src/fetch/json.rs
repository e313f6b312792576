//! JSON search endpoint strategy.

use std::collections::HashMap;

use reqwest::blocking::Client;
use serde::Deserialize;

use crate::model::types::{IconRecord, PAGE_SIZE};

use super::FetchError;

pub const API_URL: &str = "https://www.flaticon.com/api/search/icons";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    data: Vec<ApiIcon>,
}

#[derive(Debug, Deserialize)]
struct ApiIcon {
    id: u64,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    slug: Option<String>,
    /// Size label -> URL, e.g. `"64" -> "https://cdn…/64/…png"`. Often absent.
    #[serde(default)]
    images: Option<HashMap<String, String>>,
}

pub fn fetch(client: &Client, query: &str, page: u32) -> Result<Vec<IconRecord>, FetchError> {
    let url = format!(
        "{API_URL}?q={}&limit={PAGE_SIZE}&page={page}",
        urlencoding::encode(query)
    );
    let body = client
        .get(&url)
        .header(reqwest::header::ACCEPT, "application/json")
        .send()?
        .error_for_status()?
        .text()?;
    parse_body(&body, query)
}

/// Maps the endpoint's icon objects to records, synthesizing the default 64px
/// CDN template when no explicit image map is present.
pub fn parse_body(body: &str, query: &str) -> Result<Vec<IconRecord>, FetchError> {
    let parsed: SearchResponse =
        serde_json::from_str(body).map_err(|e| FetchError::Parse(e.to_string()))?;

    Ok(parsed
        .data
        .into_iter()
        .take(PAGE_SIZE)
        .map(|icon| {
            let title = icon
                .description
                .clone()
                .filter(|s| !s.is_empty())
                .or_else(|| icon.slug.clone().filter(|s| !s.is_empty()))
                .unwrap_or_else(|| query.to_string());
            let image_url = icon
                .images
                .as_ref()
                .and_then(|m| m.get("64").cloned())
                .unwrap_or_else(|| {
                    format!("https://cdn-icons-png.flaticon.com/64/{0}/{0}.png", icon.id)
                });
            let slug = icon.slug.filter(|s| !s.is_empty()).unwrap_or_else(|| "icon".to_string());
            IconRecord {
                id: icon.id.to_string(),
                title,
                image_url,
                flaticon_url: format!("https://www.flaticon.com/free-icon/{slug}_{}", icon.id),
                fallback_url: None,
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_icons_with_explicit_image_map() {
        let body = r#"{"data":[{"id":833472,"description":"Heart","slug":"heart","images":{"64":"https://cdn/64/heart.png"}}]}"#;
        let records = parse_body(body, "heart").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].image_url, "https://cdn/64/heart.png");
        assert_eq!(records[0].flaticon_url, "https://www.flaticon.com/free-icon/heart_833472");
    }

    #[test]
    fn synthesizes_default_image_template() {
        let body = r#"{"data":[{"id":123}]}"#;
        let records = parse_body(body, "ring").unwrap();
        assert_eq!(records[0].image_url, "https://cdn-icons-png.flaticon.com/64/123/123.png");
        assert_eq!(records[0].title, "ring");
        assert_eq!(records[0].flaticon_url, "https://www.flaticon.com/free-icon/icon_123");
    }

    #[test]
    fn caps_at_one_page() {
        let items: Vec<String> = (0..30).map(|i| format!(r#"{{"id":{i}}}"#)).collect();
        let body = format!(r#"{{"data":[{}]}}"#, items.join(","));
        assert_eq!(parse_body(&body, "q").unwrap().len(), PAGE_SIZE);
    }

    #[test]
    fn malformed_body_is_a_parse_failure() {
        let err = parse_body("<html>not json</html>", "q").unwrap_err();
        assert!(matches!(err, FetchError::Parse(_)));
    }

    #[test]
    fn missing_data_field_means_no_icons() {
        assert!(parse_body("{}", "q").unwrap().is_empty());
    }
}

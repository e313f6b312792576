//! Normalized record and state types for the icon search flow.

use serde::Serialize;

/// Results per page. Both the remote endpoints and the catalog fallback slice
/// to this size.
pub const PAGE_SIZE: usize = 20;

/// One icon as surfaced to a renderer. Built per search response, accumulated
/// for the active query, discarded when a new query starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IconRecord {
    pub id: String,
    pub title: String,
    /// 64px preview image.
    pub image_url: String,
    /// Detail page on flaticon.com.
    pub flaticon_url: String,
    /// Larger (512px) image to try when the preview fails to load.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_url: Option<String>,
}

/// Where the controller currently is in the search lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No query committed; renderer shows a hint placeholder.
    Idle,
    /// Page-1 fetch outstanding.
    Loading,
    /// Follow-up page fetch outstanding; existing results stay on screen.
    LoadingMore,
    Loaded,
    /// Page 1 came back well-formed but with zero matches.
    Empty,
    /// Page 1 failed outright; renderer offers a retry.
    Error,
}

/// The single mutable state value owned by the controller.
#[derive(Debug, Clone)]
pub struct SearchState {
    pub query: String,
    /// Last page successfully appended, numbered from 1.
    pub page: u32,
    /// Ordered results for the active query. Length is monotonically
    /// non-decreasing until the query changes.
    pub accumulated: Vec<IconRecord>,
    pub has_more: bool,
    pub loading: bool,
    pub phase: Phase,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            query: String::new(),
            page: 1,
            accumulated: Vec::new(),
            has_more: true,
            loading: false,
            phase: Phase::Idle,
        }
    }
}

impl SearchState {
    pub fn is_busy(&self) -> bool {
        self.loading
    }
}

use serde::{Deserialize, Serialize};

use super::window::WindowType;

/// A node from the bookmark storage backend.
///
/// Folders have no `url` and may carry `children`; bookmark entries have a `url`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct BookmarkNode {
    pub id: String,
    pub parent_id: Option<String>,
    pub index: i32,
    pub title: String,
    pub url: Option<String>,
    #[serde(default)]
    pub children: Vec<BookmarkNode>,
}

impl BookmarkNode {
    pub fn is_folder(&self) -> bool {
        self.url.is_none()
    }
}

/// A live tab as reported by the browser's tab events.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BrowserTab {
    pub id: Option<i32>,
    pub index: i32,
    pub window_id: i32,
    pub url: Option<String>,
    pub title: Option<String>,
    pub fav_icon_url: Option<String>,
    pub active: bool,
    pub audible: bool,
    pub pinned: bool,
    /// Set when the browser has discarded the tab to reclaim memory.
    pub discarded: bool,
}

/// A live window as reported by the browser's window events.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BrowserWindow {
    pub id: i32,
    pub window_type: WindowType,
    pub width: i32,
    pub height: i32,
    #[serde(default)]
    pub tabs: Vec<BrowserTab>,
}

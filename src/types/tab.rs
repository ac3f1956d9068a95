use serde::{Deserialize, Serialize};

use super::browser::{BookmarkNode, BrowserTab};

/// A tab as persisted in a bookmark folder.
///
/// Empty strings mean "not set".
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SavedTabState {
    pub bookmark_id: String,
    /// Position within the bookmark folder. Only used to order tabs when a
    /// window is built from its folder.
    pub bookmark_index: i32,
    pub title: String,
    pub url: String,
}

impl SavedTabState {
    pub fn new(
        bookmark_id: impl Into<String>,
        bookmark_index: i32,
        title: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            bookmark_id: bookmark_id.into(),
            bookmark_index,
            title: title.into(),
            url: url.into(),
        }
    }

    /// Builds the saved state of a bookmark entry. Returns `None` for folders.
    pub fn from_bookmark(node: &BookmarkNode) -> Option<Self> {
        let url = node.url.as_ref()?;
        Some(Self {
            bookmark_id: node.id.clone(),
            bookmark_index: node.index,
            title: node.title.clone(),
            url: url.clone(),
        })
    }
}

/// A tab as currently open in a browser window.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OpenTabState {
    pub open_tab_id: i32,
    pub open_tab_index: i32,
    pub url: String,
    pub title: String,
    pub fav_icon_url: Option<String>,
    /// At most one open tab per window is active; the window enforces this.
    pub active: bool,
    pub audible: bool,
    pub pinned: bool,
    pub is_suspended: bool,
}

impl Default for OpenTabState {
    fn default() -> Self {
        Self {
            open_tab_id: Self::UNSET_TAB_ID,
            open_tab_index: 0,
            url: String::new(),
            title: String::new(),
            fav_icon_url: None,
            active: false,
            audible: false,
            pinned: false,
            is_suspended: false,
        }
    }
}

impl OpenTabState {
    /// Sentinel for a tab id the browser has not assigned (or that is invalid).
    pub const UNSET_TAB_ID: i32 = -1;

    pub fn new(open_tab_id: i32, url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            open_tab_id,
            url: url.into(),
            title: title.into(),
            ..Self::default()
        }
    }

    /// Builds the open state from a browser tab event payload.
    pub fn from_browser_tab(tab: &BrowserTab) -> Self {
        Self {
            open_tab_id: tab.id.unwrap_or(Self::UNSET_TAB_ID),
            open_tab_index: tab.index,
            url: tab.url.clone().unwrap_or_default(),
            title: tab.title.clone().unwrap_or_default(),
            fav_icon_url: tab.fav_icon_url.clone(),
            active: tab.active,
            audible: tab.audible,
            pinned: tab.pinned,
            is_suspended: tab.discarded,
        }
    }

    pub fn has_valid_id(&self) -> bool {
        self.open_tab_id != Self::UNSET_TAB_ID
    }
}

//! Unified state of a browser window that may be open, saved as a bookmark folder, or both.
//!
//! `TabWindow` is an immutable value. Every update returns a new instance and
//! leaves the old one untouched. The display title and the identity key are
//! computed lazily and memoized per instance; updates always start the new
//! instance with empty memo slots so a stale value is never carried forward.

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

use super::browser::{BookmarkNode, BrowserWindow};
use super::errors::TabStateError;
use super::settings::ViewSettings;
use super::tab::{OpenTabState, SavedTabState};
use super::tab_item::TabItem;
use crate::services::diagnostics::{Diagnostic, DiagnosticsSink, LogSink};
use crate::services::text_export::{self, CellEscaper, MarkdownCellEscaper};

const SAVED_ID_PREFIX: &str = "_saved";
const OPEN_ID_PREFIX: &str = "_open";

/// Browser window kind.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum WindowType {
    #[default]
    Normal,
    Popup,
    Panel,
    App,
    Devtools,
}

/// Window state backed by a bookmark folder.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct SavedWindowState {
    pub folder_id: String,
    pub title: String,
}

impl SavedWindowState {
    pub fn new(folder_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            folder_id: folder_id.into(),
            title: title.into(),
        }
    }
}

/// Window state of a live browser window.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct OpenWindowState {
    pub window_id: i32,
    pub window_type: WindowType,
    pub width: i32,
    pub height: i32,
}

impl OpenWindowState {
    pub fn new(window_id: i32, window_type: WindowType, width: i32, height: i32) -> Self {
        Self {
            window_id,
            window_type,
            width,
            height,
        }
    }
}

/// A browser window with its ordered tabs.
///
/// At least one of the saved and open states is always present.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "TabWindowRecord", into = "TabWindowRecord")]
pub struct TabWindow {
    saved: Option<SavedWindowState>,
    open: Option<OpenWindowState>,
    tab_items: Vec<TabItem>,
    snapshot: bool,
    chrome_session_id: Option<String>,
    expanded: Option<bool>,
    cached_title: OnceCell<String>,
    cached_id: OnceCell<String>,
}

/// Serialized form of a `TabWindow`, validated on the way in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TabWindowRecord {
    pub saved: Option<SavedWindowState>,
    pub open: Option<OpenWindowState>,
    pub tab_items: Option<Vec<TabItem>>,
    #[serde(default)]
    pub snapshot: bool,
    #[serde(default)]
    pub chrome_session_id: Option<String>,
    #[serde(default)]
    pub expanded: Option<bool>,
}

impl TryFrom<TabWindowRecord> for TabWindow {
    type Error = TabStateError;

    fn try_from(record: TabWindowRecord) -> Result<Self, Self::Error> {
        let tab_items = record.tab_items.ok_or_else(|| {
            TabStateError::InputRejection("window record has no tab items".to_string())
        })?;
        if record.snapshot && record.open.is_some() {
            return Err(TabStateError::InputRejection(
                "open window record cannot be a snapshot".to_string(),
            ));
        }
        let window = TabWindow::from_parts(record.saved, record.open, tab_items)?;
        Ok(window
            .with_snapshot(record.snapshot)
            .with_chrome_session_id(record.chrome_session_id)
            .with_expanded(record.expanded))
    }
}

impl From<TabWindow> for TabWindowRecord {
    fn from(window: TabWindow) -> Self {
        Self {
            saved: window.saved,
            open: window.open,
            tab_items: Some(window.tab_items),
            snapshot: window.snapshot,
            chrome_session_id: window.chrome_session_id,
            expanded: window.expanded,
        }
    }
}

impl PartialEq for TabWindow {
    fn eq(&self, other: &Self) -> bool {
        self.saved == other.saved
            && self.open == other.open
            && self.tab_items == other.tab_items
            && self.snapshot == other.snapshot
            && self.chrome_session_id == other.chrome_session_id
            && self.expanded == other.expanded
    }
}

impl Eq for TabWindow {}

impl TabWindow {
    fn build(
        saved: Option<SavedWindowState>,
        open: Option<OpenWindowState>,
        tab_items: Vec<TabItem>,
    ) -> Self {
        Self {
            saved,
            open,
            tab_items,
            snapshot: false,
            chrome_session_id: None,
            expanded: None,
            cached_title: OnceCell::new(),
            cached_id: OnceCell::new(),
        }
    }

    /// A live window that has not been saved.
    pub fn new_open(open: OpenWindowState, tab_items: Vec<TabItem>) -> Self {
        Self::build(None, Some(open), tab_items)
    }

    /// A saved window that is not currently open.
    pub fn new_saved(saved: SavedWindowState, tab_items: Vec<TabItem>) -> Self {
        Self::build(Some(saved), None, tab_items)
    }

    /// Builds a window from optional halves, rejecting the empty combination.
    pub fn from_parts(
        saved: Option<SavedWindowState>,
        open: Option<OpenWindowState>,
        tab_items: Vec<TabItem>,
    ) -> Result<Self, TabStateError> {
        if saved.is_none() && open.is_none() {
            return Err(TabStateError::InputRejection(
                "window needs a saved or an open state".to_string(),
            ));
        }
        Ok(Self::build(saved, open, tab_items))
    }

    /// Builds a closed saved window from a bookmark folder.
    ///
    /// Bookmark entries become saved tabs ordered by their position in the
    /// folder; sub-folders are ignored.
    pub fn from_bookmark_folder(folder: &BookmarkNode) -> Self {
        let mut saved_tabs: Vec<SavedTabState> = folder
            .children
            .iter()
            .filter_map(SavedTabState::from_bookmark)
            .collect();
        saved_tabs.sort_by_key(|tab| tab.bookmark_index);

        let saved = SavedWindowState::new(folder.id.clone(), folder.title.clone());
        let tab_items = saved_tabs.into_iter().map(TabItem::Saved).collect();
        Self::new_saved(saved, tab_items)
    }

    /// Builds an unsaved open window from a browser window and its tabs, in tab-strip order.
    pub fn from_browser_window(window: &BrowserWindow) -> Self {
        let mut tabs: Vec<_> = window.tabs.iter().collect();
        tabs.sort_by_key(|tab| tab.index);

        let open = OpenWindowState::new(window.id, window.window_type, window.width, window.height);
        let tab_items = tabs
            .into_iter()
            .map(|tab| TabItem::Open(OpenTabState::from_browser_tab(tab)))
            .collect();
        Self::new_open(open, tab_items)
    }

    // --- Field accessors ---

    pub fn is_saved(&self) -> bool {
        self.saved.is_some()
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn saved_window(&self) -> Option<&SavedWindowState> {
        self.saved.as_ref()
    }

    pub fn open_window(&self) -> Option<&OpenWindowState> {
        self.open.as_ref()
    }

    pub fn safe_saved_window(&self) -> Result<&SavedWindowState, TabStateError> {
        self.saved.as_ref().ok_or_else(|| {
            TabStateError::PreconditionViolation(
                "saved state requested on a window that is not saved".to_string(),
            )
        })
    }

    pub fn safe_open_window(&self) -> Result<&OpenWindowState, TabStateError> {
        self.open.as_ref().ok_or_else(|| {
            TabStateError::PreconditionViolation(
                "open state requested on a window that is not open".to_string(),
            )
        })
    }

    /// Bookmark folder title; empty when the window is not saved.
    pub fn saved_title(&self) -> &str {
        self.saved.as_ref().map_or("", |saved| saved.title.as_str())
    }

    pub fn saved_folder_id(&self) -> Option<&str> {
        self.saved.as_ref().map(|saved| saved.folder_id.as_str())
    }

    pub fn open_window_id(&self) -> Option<i32> {
        self.open.as_ref().map(|open| open.window_id)
    }

    pub fn window_type(&self) -> Option<WindowType> {
        self.open.as_ref().map(|open| open.window_type)
    }

    pub fn width(&self) -> Option<i32> {
        self.open.as_ref().map(|open| open.width)
    }

    pub fn height(&self) -> Option<i32> {
        self.open.as_ref().map(|open| open.height)
    }

    /// Tabs in display order.
    pub fn tab_items(&self) -> &[TabItem] {
        &self.tab_items
    }

    /// True when the window is closed and its tabs are a capture of its last live session.
    pub fn is_snapshot(&self) -> bool {
        self.snapshot
    }

    pub fn chrome_session_id(&self) -> Option<&str> {
        self.chrome_session_id.as_deref()
    }

    pub fn expanded(&self) -> Option<bool> {
        self.expanded
    }

    pub fn open_tab_count(&self) -> usize {
        self.tab_items.iter().filter(|item| item.is_open()).count()
    }

    pub fn saved_tab_count(&self) -> usize {
        self.tab_items.iter().filter(|item| item.is_saved()).count()
    }

    // --- Derived fields ---

    /// Display title, reporting anomalies to the log.
    pub fn title(&self) -> &str {
        self.title_with(&LogSink)
    }

    /// Display title, reporting anomalies to `sink`.
    ///
    /// Saved windows use their bookmark folder title. Unsaved windows use the
    /// title of the active open tab, falling back to the first open tab (and
    /// reporting `Diagnostic::NoActiveTab`) or to an empty string. The result
    /// is memoized, so the diagnostic is reported at most once per instance.
    pub fn title_with(&self, sink: &dyn DiagnosticsSink) -> &str {
        self.cached_title
            .get_or_init(|| self.resolve_title(sink))
            .as_str()
    }

    fn resolve_title(&self, sink: &dyn DiagnosticsSink) -> String {
        if let Some(saved) = &self.saved {
            return saved.title.clone();
        }

        if let Some(active) = self
            .tab_items
            .iter()
            .find(|item| item.is_open() && item.active())
        {
            return active.title().to_string();
        }

        let fallback = self
            .tab_items
            .iter()
            .find(|item| item.is_open())
            .map(|item| item.title().to_string())
            .unwrap_or_default();
        sink.report(Diagnostic::NoActiveTab {
            window_id: self.id().to_string(),
            fallback_title: fallback.clone(),
        });
        fallback
    }

    /// Key distinguishing this window within a collection of windows.
    pub fn id(&self) -> &str {
        self.cached_id
            .get_or_init(|| match (&self.saved, &self.open) {
                (Some(saved), _) => format!("{}{}", SAVED_ID_PREFIX, saved.folder_id),
                (None, Some(open)) => format!("{}{}", OPEN_ID_PREFIX, open.window_id),
                (None, None) => String::new(),
            })
            .as_str()
    }

    /// Whether the window should be shown expanded.
    ///
    /// An explicit per-window choice wins; otherwise open windows follow the
    /// global expand-all flag and closed windows stay collapsed.
    pub fn is_expanded(&self, view: &ViewSettings) -> bool {
        match self.expanded {
            Some(expanded) => expanded,
            None => view.expand_all && self.is_open(),
        }
    }

    // --- Lookup ---

    pub fn find_by_open_tab_id(&self, open_tab_id: i32) -> Option<(usize, &TabItem)> {
        self.tab_items.iter().enumerate().find(|(_, item)| {
            item.open_state()
                .is_some_and(|open| open.open_tab_id == open_tab_id)
        })
    }

    pub fn find_by_bookmark_id(&self, bookmark_id: &str) -> Option<(usize, &TabItem)> {
        self.tab_items.iter().enumerate().find(|(_, item)| {
            item.saved_state()
                .is_some_and(|saved| saved.bookmark_id == bookmark_id)
        })
    }

    pub fn get_active_tab_id(&self) -> Option<i32> {
        self.tab_items
            .iter()
            .filter_map(TabItem::open_state)
            .find(|open| open.active)
            .map(|open| open.open_tab_id)
    }

    pub fn index_of(&self, item: &TabItem) -> Option<usize> {
        self.tab_items.iter().position(|candidate| candidate == item)
    }

    // --- Updates ---

    fn updated(&self, update: impl FnOnce(&mut TabWindow)) -> TabWindow {
        let mut next = self.clone();
        update(&mut next);
        next.cached_title = OnceCell::new();
        next.cached_id = OnceCell::new();
        next
    }

    /// Replaces the tab sequence as given. No re-sorting by browser index is done.
    pub fn set_tab_items(&self, tab_items: Vec<TabItem>) -> TabWindow {
        TabWindow {
            saved: self.saved.clone(),
            open: self.open.clone(),
            tab_items,
            snapshot: self.snapshot,
            chrome_session_id: self.chrome_session_id.clone(),
            expanded: self.expanded,
            cached_title: OnceCell::new(),
            cached_id: OnceCell::new(),
        }
    }

    /// Like `set_tab_items`, for callers that may not have a sequence at all.
    pub fn try_set_tab_items(
        &self,
        tab_items: Option<Vec<TabItem>>,
    ) -> Result<TabWindow, TabStateError> {
        self.try_set_tab_items_with(tab_items, &LogSink)
    }

    pub fn try_set_tab_items_with(
        &self,
        tab_items: Option<Vec<TabItem>>,
        sink: &dyn DiagnosticsSink,
    ) -> Result<TabWindow, TabStateError> {
        match tab_items {
            Some(tab_items) => Ok(self.set_tab_items(tab_items)),
            None => {
                sink.report(Diagnostic::MissingTabItems {
                    window_id: self.id().to_string(),
                });
                Err(TabStateError::InputRejection(format!(
                    "no tab items supplied for window {}",
                    self.id()
                )))
            }
        }
    }

    /// Replaces the bookmark folder title. A window that is not saved is returned unchanged.
    pub fn update_saved_title(&self, title: impl Into<String>) -> TabWindow {
        let title = title.into();
        self.updated(|next| {
            if let Some(saved) = next.saved.as_mut() {
                saved.title = title;
            }
        })
    }

    /// Marks the tabs as a capture of the last live session. Has no effect on open windows.
    pub fn with_snapshot(&self, snapshot: bool) -> TabWindow {
        self.updated(|next| next.snapshot = snapshot && next.open.is_none())
    }

    pub fn with_chrome_session_id(&self, chrome_session_id: Option<String>) -> TabWindow {
        self.updated(|next| next.chrome_session_id = chrome_session_id)
    }

    pub fn with_expanded(&self, expanded: Option<bool>) -> TabWindow {
        self.updated(|next| next.expanded = expanded)
    }

    /// The window is (re)opened in the browser.
    pub fn with_open_window(&self, open: OpenWindowState) -> TabWindow {
        self.updated(|next| {
            next.open = Some(open);
            next.snapshot = false;
        })
    }

    /// The window is saved to a bookmark folder.
    pub fn with_saved_window(&self, saved: SavedWindowState) -> TabWindow {
        self.updated(|next| next.saved = Some(saved))
    }

    /// Makes the open tab with `open_tab_id` the only active tab.
    ///
    /// If no open tab matches, every open tab ends up inactive.
    pub fn set_active_tab(&self, open_tab_id: i32) -> TabWindow {
        let tab_items = self
            .tab_items
            .iter()
            .map(|item| {
                let is_target = item
                    .open_state()
                    .is_some_and(|open| open.open_tab_id == open_tab_id);
                item.with_active(is_target)
            })
            .collect();
        self.set_tab_items(tab_items)
    }

    /// The live window went away.
    ///
    /// Unsaved windows disappear (`None`) and windows that are already closed
    /// are returned unchanged. With `snapshot`, every tab is kept in its last
    /// live order and open arms are frozen (unset tab id, inactive).
    /// Otherwise only saved tabs remain, back in bookmark order.
    pub fn close_window(&self, snapshot: bool) -> Option<TabWindow> {
        let saved = self.saved.clone()?;
        if !self.is_open() {
            return Some(self.clone());
        }

        let tab_items: Vec<TabItem> = if snapshot {
            self.tab_items.iter().map(TabItem::frozen).collect()
        } else {
            let mut saved_items: Vec<TabItem> = self
                .tab_items
                .iter()
                .filter_map(TabItem::without_open_state)
                .collect();
            saved_items.sort_by_key(|item| item.saved_state().map_or(0, |s| s.bookmark_index));
            saved_items
        };

        let closed = TabWindow::new_saved(saved, tab_items);
        Some(TabWindow {
            snapshot,
            chrome_session_id: self.chrome_session_id.clone(),
            expanded: self.expanded,
            ..closed
        })
    }

    /// The bookmark folder was removed. Closed windows disappear (`None`).
    pub fn unsave_window(&self) -> Option<TabWindow> {
        let open = self.open.clone()?;
        let tab_items = self
            .tab_items
            .iter()
            .filter_map(TabItem::without_saved_state)
            .collect();

        let unsaved = TabWindow::new_open(open, tab_items);
        Some(TabWindow {
            chrome_session_id: self.chrome_session_id.clone(),
            expanded: self.expanded,
            ..unsaved
        })
    }

    // --- Export ---

    /// Plain-text table of this window's tabs.
    pub fn export_str(&self) -> String {
        self.export_str_with(&MarkdownCellEscaper)
    }

    pub fn export_str_with(&self, escaper: &dyn CellEscaper) -> String {
        text_export::render_table(
            self.title(),
            self.tab_items.iter().map(|item| (item.title(), item.url())),
            escaper,
        )
    }
}

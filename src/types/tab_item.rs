//! A single tab that may be open, saved as a bookmark, or both.
//!
//! Derived fields read the open state first and fall back to the saved state.

use serde::{Deserialize, Serialize};

use super::errors::TabStateError;
use super::tab::{OpenTabState, SavedTabState};

/// One tab record combining its saved and open states.
///
/// A tab with neither state cannot be represented.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TabItem {
    Saved(SavedTabState),
    Open(OpenTabState),
    Both {
        saved: SavedTabState,
        open: OpenTabState,
    },
}

impl TabItem {
    /// Builds a tab item from optional halves, rejecting the empty combination.
    pub fn from_parts(
        saved: Option<SavedTabState>,
        open: Option<OpenTabState>,
    ) -> Result<Self, TabStateError> {
        match (saved, open) {
            (Some(saved), Some(open)) => Ok(TabItem::Both { saved, open }),
            (Some(saved), None) => Ok(TabItem::Saved(saved)),
            (None, Some(open)) => Ok(TabItem::Open(open)),
            (None, None) => Err(TabStateError::InputRejection(
                "tab item needs a saved or an open state".to_string(),
            )),
        }
    }

    pub fn is_saved(&self) -> bool {
        matches!(self, TabItem::Saved(_) | TabItem::Both { .. })
    }

    pub fn is_open(&self) -> bool {
        matches!(self, TabItem::Open(_) | TabItem::Both { .. })
    }

    pub fn saved_state(&self) -> Option<&SavedTabState> {
        match self {
            TabItem::Saved(saved) | TabItem::Both { saved, .. } => Some(saved),
            TabItem::Open(_) => None,
        }
    }

    pub fn open_state(&self) -> Option<&OpenTabState> {
        match self {
            TabItem::Open(open) | TabItem::Both { open, .. } => Some(open),
            TabItem::Saved(_) => None,
        }
    }

    /// Returns the saved state, failing if this tab is not saved.
    pub fn safe_saved_state(&self) -> Result<&SavedTabState, TabStateError> {
        self.saved_state().ok_or_else(|| {
            TabStateError::PreconditionViolation(
                "saved state requested on a tab that is not saved".to_string(),
            )
        })
    }

    /// Returns the open state, failing if this tab is not open.
    pub fn safe_open_state(&self) -> Result<&OpenTabState, TabStateError> {
        self.open_state().ok_or_else(|| {
            TabStateError::PreconditionViolation(
                "open state requested on a tab that is not open".to_string(),
            )
        })
    }

    pub fn title(&self) -> &str {
        match self {
            TabItem::Open(open) | TabItem::Both { open, .. } => &open.title,
            TabItem::Saved(saved) => &saved.title,
        }
    }

    pub fn url(&self) -> &str {
        match self {
            TabItem::Open(open) | TabItem::Both { open, .. } => &open.url,
            TabItem::Saved(saved) => &saved.url,
        }
    }

    pub fn pinned(&self) -> bool {
        self.open_state().is_some_and(|open| open.pinned)
    }

    pub fn active(&self) -> bool {
        self.open_state().is_some_and(|open| open.active)
    }

    pub fn audible(&self) -> bool {
        self.open_state().is_some_and(|open| open.audible)
    }

    pub fn is_suspended(&self) -> bool {
        self.open_state().is_some_and(|open| open.is_suspended)
    }

    pub fn fav_icon_url(&self) -> Option<&str> {
        self.open_state().and_then(|open| open.fav_icon_url.as_deref())
    }

    /// Attaches (or replaces) the open state, keeping any saved state.
    pub fn with_open_state(&self, open: OpenTabState) -> Self {
        match self.saved_state() {
            Some(saved) => TabItem::Both {
                saved: saved.clone(),
                open,
            },
            None => TabItem::Open(open),
        }
    }

    /// Attaches (or replaces) the saved state, keeping any open state.
    pub fn with_saved_state(&self, saved: SavedTabState) -> Self {
        match self.open_state() {
            Some(open) => TabItem::Both {
                saved,
                open: open.clone(),
            },
            None => TabItem::Saved(saved),
        }
    }

    /// The tab was closed. Returns `None` when nothing of the tab remains.
    pub fn without_open_state(&self) -> Option<Self> {
        self.saved_state().cloned().map(TabItem::Saved)
    }

    /// The bookmark was removed. Returns `None` when nothing of the tab remains.
    pub fn without_saved_state(&self) -> Option<Self> {
        self.open_state().cloned().map(TabItem::Open)
    }

    /// Copy kept in a window snapshot: the open arm no longer refers to a
    /// live tab, so its id is unset and it is inactive.
    pub(crate) fn frozen(&self) -> Self {
        match self.open_state() {
            Some(open) => self.with_open_state(OpenTabState {
                open_tab_id: OpenTabState::UNSET_TAB_ID,
                active: false,
                ..open.clone()
            }),
            None => self.clone(),
        }
    }

    /// Returns a copy whose open state (if any) has the given `active` flag.
    pub(crate) fn with_active(&self, active: bool) -> Self {
        match self.open_state() {
            Some(open) if open.active != active => self.with_open_state(OpenTabState {
                active,
                ..open.clone()
            }),
            _ => self.clone(),
        }
    }
}

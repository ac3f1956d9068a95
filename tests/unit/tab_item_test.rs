use tabstate::types::errors::TabStateError;
use tabstate::types::tab::{OpenTabState, SavedTabState};
use tabstate::types::tab_item::TabItem;

fn saved(id: &str, title: &str) -> SavedTabState {
    SavedTabState::new(id, 0, title, format!("https://saved.example/{}", id))
}

fn open(tab_id: i32, title: &str) -> OpenTabState {
    OpenTabState {
        pinned: true,
        active: true,
        audible: true,
        fav_icon_url: Some("https://open.example/favicon.ico".to_string()),
        ..OpenTabState::new(tab_id, format!("https://open.example/{}", tab_id), title)
    }
}

#[test]
fn test_from_parts_rejects_neither() {
    let result = TabItem::from_parts(None, None);
    assert!(matches!(result, Err(TabStateError::InputRejection(_))));
}

#[test]
fn test_from_parts_flags_match_states() {
    let both = TabItem::from_parts(Some(saved("b1", "Saved")), Some(open(1, "Open"))).unwrap();
    assert!(both.is_saved() && both.is_open());
    assert!(both.saved_state().is_some() && both.open_state().is_some());

    let saved_only = TabItem::from_parts(Some(saved("b1", "Saved")), None).unwrap();
    assert!(saved_only.is_saved() && !saved_only.is_open());
    assert!(saved_only.open_state().is_none());

    let open_only = TabItem::from_parts(None, Some(open(1, "Open"))).unwrap();
    assert!(!open_only.is_saved() && open_only.is_open());
    assert!(open_only.saved_state().is_none());
}

#[test]
fn test_open_state_takes_precedence() {
    let item = TabItem::Both {
        saved: saved("b1", "Saved title"),
        open: open(7, "Open title"),
    };
    assert_eq!(item.title(), "Open title");
    assert_eq!(item.url(), "https://open.example/7");
    assert!(item.pinned());
    assert!(item.active());
    assert!(item.audible());
    assert_eq!(item.fav_icon_url(), Some("https://open.example/favicon.ico"));
}

#[test]
fn test_saved_only_falls_back_to_saved_state() {
    let item = TabItem::Saved(saved("b1", "Saved title"));
    assert_eq!(item.title(), "Saved title");
    assert_eq!(item.url(), "https://saved.example/b1");
    assert!(!item.pinned());
    assert!(!item.active());
    assert!(!item.audible());
    assert!(!item.is_suspended());
    assert_eq!(item.fav_icon_url(), None);
}

#[test]
fn test_safe_open_state_on_closed_tab_fails() {
    let item = TabItem::Saved(saved("b1", "Saved"));
    assert!(matches!(
        item.safe_open_state(),
        Err(TabStateError::PreconditionViolation(_))
    ));
    assert_eq!(item.safe_saved_state().unwrap().bookmark_id, "b1");
}

#[test]
fn test_safe_saved_state_on_unsaved_tab_fails() {
    let item = TabItem::Open(open(3, "Open"));
    assert!(matches!(
        item.safe_saved_state(),
        Err(TabStateError::PreconditionViolation(_))
    ));
    assert_eq!(item.safe_open_state().unwrap().open_tab_id, 3);
}

#[test]
fn test_with_open_state_keeps_saved_arm() {
    let item = TabItem::Saved(saved("b1", "Saved"));
    let reopened = item.with_open_state(open(5, "Reopened"));
    assert_eq!(reopened.saved_state(), item.saved_state());
    assert_eq!(reopened.safe_open_state().unwrap().open_tab_id, 5);
    // the original value is untouched
    assert!(!item.is_open());
}

#[test]
fn test_with_saved_state_keeps_open_arm() {
    let item = TabItem::Open(open(5, "Open"));
    let bookmarked = item.with_saved_state(saved("b9", "Bookmarked"));
    assert!(bookmarked.is_saved());
    assert_eq!(bookmarked.title(), "Open");
    assert_eq!(bookmarked.safe_saved_state().unwrap().bookmark_id, "b9");
}

#[test]
fn test_without_open_state() {
    let both = TabItem::Both {
        saved: saved("b1", "Saved"),
        open: open(1, "Open"),
    };
    assert_eq!(
        both.without_open_state(),
        Some(TabItem::Saved(saved("b1", "Saved")))
    );
    assert_eq!(TabItem::Open(open(1, "Open")).without_open_state(), None);
}

#[test]
fn test_without_saved_state() {
    let both = TabItem::Both {
        saved: saved("b1", "Saved"),
        open: open(1, "Open"),
    };
    assert_eq!(both.without_saved_state(), Some(TabItem::Open(open(1, "Open"))));
    assert_eq!(TabItem::Saved(saved("b1", "Saved")).without_saved_state(), None);
}

#[test]
fn test_open_tab_state_defaults() {
    let state = OpenTabState::default();
    assert_eq!(state.open_tab_id, OpenTabState::UNSET_TAB_ID);
    assert!(!state.has_valid_id());
    assert!(OpenTabState::new(12, "https://a", "A").has_valid_id());
}

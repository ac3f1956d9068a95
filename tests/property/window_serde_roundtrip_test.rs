//! Property-based tests for `TabWindow` JSON round-trip and record validation.

use proptest::prelude::*;
use tabstate::types::tab::{OpenTabState, SavedTabState};
use tabstate::types::tab_item::TabItem;
use tabstate::types::window::{OpenWindowState, SavedWindowState, TabWindow, WindowType};

fn arb_tab_item() -> impl Strategy<Value = TabItem> {
    (0u8..3, 0i32..1000, "[A-Za-z0-9 ]{0,20}", any::<bool>()).prop_map(
        |(kind, n, title, active)| {
            let open = OpenTabState {
                active,
                ..OpenTabState::new(n, format!("https://o{}.example", n), title.clone())
            };
            let saved = SavedTabState::new(n.to_string(), n, title, format!("https://s{}.example", n));
            match kind {
                0 => TabItem::Open(open),
                1 => TabItem::Saved(saved),
                _ => TabItem::Both { saved, open },
            }
        },
    )
}

fn arb_window() -> impl Strategy<Value = TabWindow> {
    (
        prop::collection::vec(arb_tab_item(), 0..6),
        0u8..3,
        any::<bool>(),
        proptest::option::of("[a-z0-9]{4,8}"),
        proptest::option::of(any::<bool>()),
    )
        .prop_map(|(items, shape, snapshot, session, expanded)| {
            let saved = SavedWindowState::new("77", "Saved window");
            let open = OpenWindowState::new(12, WindowType::App, 400, 300);
            let window = match shape {
                0 => TabWindow::new_open(open, items),
                1 => TabWindow::new_saved(saved, items),
                _ => TabWindow::new_saved(saved, items).with_open_window(open),
            };
            window
                .with_snapshot(snapshot)
                .with_chrome_session_id(session)
                .with_expanded(expanded)
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn window_json_roundtrip(window in arb_window()) {
        // warm the memo slots; they must not leak into the serialized form
        let _ = window.id();
        let json = serde_json::to_string(&window).unwrap();
        prop_assert!(!json.contains("cached_title") && !json.contains("cached_id"));

        let restored: TabWindow = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(&restored, &window);
        prop_assert_eq!(restored.id(), window.id());
    }
}

#[test]
fn record_without_tab_items_is_rejected() {
    let json = r#"{ "saved": { "folder_id": "1", "title": "Work" }, "open": null }"#;
    let result: Result<TabWindow, _> = serde_json::from_str(json);
    assert!(result.is_err());
}

#[test]
fn record_without_saved_or_open_is_rejected() {
    let json = r#"{ "saved": null, "open": null, "tab_items": [] }"#;
    let result: Result<TabWindow, _> = serde_json::from_str(json);
    assert!(result.is_err());
}

#[test]
fn open_snapshot_record_is_rejected() {
    let json = r#"{
        "saved": { "folder_id": "1", "title": "Work" },
        "open": { "window_id": 3, "window_type": "normal", "width": 10, "height": 20 },
        "tab_items": [],
        "snapshot": true
    }"#;
    let result: Result<TabWindow, _> = serde_json::from_str(json);
    assert!(result.is_err());

    let closed = json.replace(
        r#""open": { "window_id": 3, "window_type": "normal", "width": 10, "height": 20 },"#,
        "",
    );
    let window: TabWindow = serde_json::from_str(&closed).unwrap();
    assert!(window.is_snapshot());
}

#[test]
fn record_with_minimal_fields_is_accepted() {
    let json = r#"{
        "open": { "window_id": 3, "window_type": "popup", "width": 10, "height": 20 },
        "tab_items": [ { "open": { "open_tab_id": 1, "open_tab_index": 0, "url": "https://a",
            "title": "A", "fav_icon_url": null, "active": true, "audible": false,
            "pinned": false, "is_suspended": false } } ]
    }"#;
    let window: TabWindow = serde_json::from_str(json).unwrap();
    assert_eq!(window.id(), "_open3");
    assert_eq!(window.window_type(), Some(WindowType::Popup));
    assert_eq!(window.title(), "A");
}

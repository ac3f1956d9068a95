use tabstate::types::errors::*;

// === TabStateError Tests ===

#[test]
fn tab_state_error_precondition_display() {
    let err = TabStateError::PreconditionViolation("tab is not open".to_string());
    assert_eq!(err.to_string(), "Precondition violation: tab is not open");
}

#[test]
fn tab_state_error_input_rejection_display() {
    let err = TabStateError::InputRejection("no tab items".to_string());
    assert_eq!(err.to_string(), "Input rejected: no tab items");
}

#[test]
fn tab_state_error_implements_error_trait() {
    let err: Box<dyn std::error::Error> =
        Box::new(TabStateError::InputRejection("x".to_string()));
    assert!(err.source().is_none());
}

// === SettingsError Tests ===

#[test]
fn settings_error_display_variants() {
    assert_eq!(
        SettingsError::IoError("disk full".to_string()).to_string(),
        "Settings I/O error: disk full"
    );
    assert_eq!(
        SettingsError::SerializationError("bad json".to_string()).to_string(),
        "Settings serialization error: bad json"
    );
    assert_eq!(
        SettingsError::InvalidKey("view.nope".to_string()).to_string(),
        "Invalid settings key: view.nope"
    );
    assert_eq!(
        SettingsError::InvalidValue("expected bool".to_string()).to_string(),
        "Invalid settings value: expected bool"
    );
}

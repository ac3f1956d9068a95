//! Property-based tests for settings save-load round-trip.

use proptest::prelude::*;
use tabstate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use tabstate::types::settings::{DiagnosticsSettings, ModelSettings, ViewSettings};

fn arb_model_settings() -> impl Strategy<Value = ModelSettings> {
    (any::<bool>(), any::<bool>()).prop_map(|(expand_all, enabled)| ModelSettings {
        view: ViewSettings { expand_all },
        diagnostics: DiagnosticsSettings { enabled },
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn settings_survive_save_and_load(settings in arb_model_settings()) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json").to_string_lossy().to_string();

        let mut engine = SettingsEngine::new(Some(path.clone()));
        engine.load().unwrap();
        engine
            .set_value("view.expand_all", serde_json::Value::Bool(settings.view.expand_all))
            .unwrap();
        engine
            .set_value("diagnostics.enabled", serde_json::Value::Bool(settings.diagnostics.enabled))
            .unwrap();

        let mut reloaded = SettingsEngine::new(Some(path));
        prop_assert_eq!(reloaded.load().unwrap(), settings);
    }
}

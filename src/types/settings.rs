use serde::{Deserialize, Serialize};

/// Top-level settings container persisted by the settings engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ModelSettings {
    pub view: ViewSettings,
    pub diagnostics: DiagnosticsSettings,
}

/// UI view state that windows consult when resolving their expansion.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ViewSettings {
    /// Global "expand all" toggle; only applies to open windows without an explicit choice.
    pub expand_all: bool,
}

/// Controls where model diagnostics go.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiagnosticsSettings {
    /// When false, diagnostics are discarded instead of being logged.
    pub enabled: bool,
}

impl Default for DiagnosticsSettings {
    fn default() -> Self {
        Self { enabled: true }
    }
}

// Settings engine for the tab state model.
// Loads, saves, updates and resets `ModelSettings`, stored as a JSON file at the
// platform-specific config path.

use std::fs;
use std::io;
use std::path::Path;

use crate::platform;
use crate::services::diagnostics::{DiagnosticsSink, LogSink, NullSink};
use crate::types::errors::SettingsError;
use crate::types::settings::{ModelSettings, ViewSettings};

/// Trait defining the settings engine interface.
pub trait SettingsEngineTrait {
    fn load(&mut self) -> Result<ModelSettings, SettingsError>;
    fn save(&self) -> Result<(), SettingsError>;
    fn get_settings(&self) -> &ModelSettings;
    fn set_value(&mut self, key: &str, value: serde_json::Value) -> Result<(), SettingsError>;
    fn reset(&mut self) -> Result<(), SettingsError>;
    fn get_config_path(&self) -> &str;
}

/// Settings engine implementation that persists settings as JSON on disk.
pub struct SettingsEngine {
    config_path: String,
    settings: ModelSettings,
}

impl SettingsEngine {
    /// Creates a new SettingsEngine.
    ///
    /// If `path_override` is `Some`, uses that path for the config file.
    /// Otherwise, uses `settings.json` in the platform config directory.
    pub fn new(path_override: Option<String>) -> Self {
        let config_path = match path_override {
            Some(p) => p,
            None => platform::get_config_dir()
                .join("settings.json")
                .to_string_lossy()
                .to_string(),
        };

        Self {
            config_path,
            settings: ModelSettings::default(),
        }
    }

    /// The view state windows consult in `TabWindow::is_expanded`.
    pub fn view_settings(&self) -> ViewSettings {
        self.settings.view
    }

    /// Sink selected by `diagnostics.enabled`.
    pub fn diagnostics_sink(&self) -> Box<dyn DiagnosticsSink> {
        if self.settings.diagnostics.enabled {
            Box::new(LogSink)
        } else {
            Box::new(NullSink)
        }
    }
}

fn io_error(context: &str, err: io::Error) -> SettingsError {
    SettingsError::IoError(format!("{}: {}", context, err))
}

fn json_error(context: &str, err: serde_json::Error) -> SettingsError {
    SettingsError::SerializationError(format!("{}: {}", context, err))
}

fn unknown_key(key: &str) -> SettingsError {
    SettingsError::InvalidKey(format!("Key '{}' not found in settings", key))
}

impl SettingsEngineTrait for SettingsEngine {
    /// Reads `ModelSettings` from the config file; a missing file yields defaults.
    fn load(&mut self) -> Result<ModelSettings, SettingsError> {
        self.settings = match fs::read_to_string(&self.config_path) {
            Ok(content) => serde_json::from_str(&content)
                .map_err(|e| json_error("config file is not valid settings JSON", e))?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => ModelSettings::default(),
            Err(e) => return Err(io_error("cannot read config file", e)),
        };
        Ok(self.settings.clone())
    }

    fn save(&self) -> Result<(), SettingsError> {
        let path = Path::new(&self.config_path);
        if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|e| io_error("cannot create config directory", e))?;
        }
        let json = serde_json::to_string_pretty(&self.settings)
            .map_err(|e| json_error("cannot encode settings", e))?;
        fs::write(path, json).map_err(|e| io_error("cannot write config file", e))
    }

    fn get_settings(&self) -> &ModelSettings {
        &self.settings
    }

    /// Updates an individual setting by dot-notation key path and saves.
    ///
    /// The new value is validated by deserializing the whole document back
    /// into `ModelSettings`, e.g. `"view.expand_all"` or `"diagnostics.enabled"`.
    fn set_value(&mut self, key: &str, value: serde_json::Value) -> Result<(), SettingsError> {
        let parts: Vec<&str> = key.split('.').collect();
        let (last, parents) = match parts.split_last() {
            Some((last, parents)) if !last.is_empty() => (*last, parents),
            _ => return Err(SettingsError::InvalidKey("Key cannot be empty".to_string())),
        };

        let mut document = serde_json::to_value(&self.settings)
            .map_err(|e| json_error("cannot encode settings", e))?;

        let mut current = &mut document;
        for part in parents {
            current = current.get_mut(*part).ok_or_else(|| unknown_key(key))?;
        }
        match current {
            serde_json::Value::Object(map) if map.contains_key(last) => {
                map.insert(last.to_string(), value);
            }
            serde_json::Value::Object(_) => return Err(unknown_key(key)),
            _ => {
                return Err(SettingsError::InvalidKey(format!(
                    "Cannot navigate to key '{}': intermediate value is not an object",
                    key
                )))
            }
        }

        self.settings = serde_json::from_value(document).map_err(|e| {
            SettingsError::InvalidValue(format!("Invalid value for key '{}': {}", key, e))
        })?;
        self.save()
    }

    /// Resets all settings to defaults and saves to disk.
    fn reset(&mut self) -> Result<(), SettingsError> {
        self.settings = ModelSettings::default();
        self.save()
    }

    fn get_config_path(&self) -> &str {
        &self.config_path
    }
}

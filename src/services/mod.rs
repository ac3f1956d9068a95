// tabstate services
// Diagnostics reporting, plain-text export, and settings persistence.

pub mod diagnostics;
pub mod settings_engine;
pub mod text_export;

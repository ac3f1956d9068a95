// tabstate shared type definitions
// Leaf tab states, the dual-state tab item, the window model, and collaborator inputs.

pub mod browser;
pub mod errors;
pub mod settings;
pub mod tab;
pub mod tab_item;
pub mod window;

//! tabstate — unified open/saved state of browser windows and their tabs.
//!
//! A window or tab may be live in the browser, persisted as a bookmark, or
//! both. This crate reconciles the two views into immutable values with
//! well-defined derived fields (title, identity, active tab).

pub mod platform;
pub mod services;
pub mod types;

//! Core library surface for the Personal Music Library TUI application.
//!
//! The public modules exposed here provide an intentionally small API so the
//! `bin` target as well as the tests can reuse the same pieces. Keeping the
//! glue logic documented makes it easy to recall why each re-export exists
//! when revisiting the project.
pub mod catalog;
pub mod models;
pub mod ui;

/// The sorted in-memory collection that owns every song, plus its typed
/// rejection outcomes.
pub use catalog::{Catalog, CatalogError};

/// The primary domain type that other layers manipulate.
pub use models::Song;

/// The interactive application entry point and state container.
pub use ui::{run_app, App};

//! Theme engine and template rendering.
//!
//! Provides Tera-based form rendering with embedded default templates that
//! a theme directory can override by name.

mod engine;

pub use engine::ThemeEngine;

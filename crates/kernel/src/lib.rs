//! Passform Kernel Library
//!
//! Password form with ordered rule validation, an explicit edit/submit state
//! machine, and Tera rendering. The `passform` binary drives it from an
//! action script.

pub mod config;
pub mod error;
pub mod form;
pub mod script;
pub mod theme;

//! Core, DOM-free primitives and helpers for page enhancement.
pub mod behaviors;
pub mod config;
pub mod effect;
pub mod error;
pub mod widgets;

// SentiView - core/mod.rs
//
// Core business logic layer.
// Must NOT depend on: ui, platform, app, or direct filesystem access.

pub mod export;
pub mod model;
pub mod parser;
pub mod render;
pub mod summary;

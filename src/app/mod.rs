// SentiView - app/mod.rs
//
// Application layer: orchestration, state management, preview loading,
// preference persistence.
// Dependencies: core layer.
// Must NOT depend on: ui.

pub mod flash;
pub mod headless;
pub mod loader;
pub mod preferences;
pub mod state;
pub mod view;

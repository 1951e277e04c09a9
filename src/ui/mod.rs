// SentiView - ui/mod.rs
//
// UI layer: presentation only.
// Dependencies: app (state), core (read-only models), egui.
// Must NOT depend on: platform. File writes only for user-requested exports.

pub mod panels;
pub mod theme;

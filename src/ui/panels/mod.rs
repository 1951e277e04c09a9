// SentiView - ui/panels/mod.rs

pub mod flash;
pub mod preview;
pub mod sidebar;
pub mod top_bar;

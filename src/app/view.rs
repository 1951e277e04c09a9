// SentiView - app/view.rs
//
// Small view-state values, each owned by exactly one UI component.

/// Drop-down user menu in the top bar.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct UserMenu {
    pub open: bool,
}

impl UserMenu {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// A click landed somewhere on screen. Closes the menu unless the click
    /// hit the menu itself or its toggle button.
    pub fn click_elsewhere(&mut self, inside_menu: bool, on_toggle: bool) {
        if !inside_menu && !on_toggle {
            self.close();
        }
    }
}

/// Left sidebar. While open, an overlay covers the central area.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Sidebar {
    pub open: bool,
}

impl Sidebar {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// The overlay is drawn exactly while the sidebar is open.
    pub fn overlay_visible(&self) -> bool {
        self.open
    }
}

//! Open/closed state for the compact menu popover.

use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    OutsideClick,
    Escape,
    LinkSelected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OverlayState {
    open: bool,
}

impl OverlayState {
    pub fn new(open: bool) -> Self {
        Self { open }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn aria_expanded(&self) -> &'static str {
        if self.open {
            "true"
        } else {
            "false"
        }
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
        trace!(open = self.open, "navbar popover toggled");
    }

    /// Close the popover. Returns whether it was open.
    pub fn dismiss(&mut self, reason: DismissReason) -> bool {
        let was_open = std::mem::replace(&mut self.open, false);
        if was_open {
            trace!(?reason, "navbar popover dismissed");
        }
        was_open
    }
}

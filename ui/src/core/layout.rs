//! Width-driven layout tracking for the navbar root.
//!
//! The observer itself is platform-agnostic: the component feeds it the
//! widths it reads from `onmounted` / `onresize` and only writes the mode
//! signal when a measurement actually flips the mode.
//!
//! Subscription lifecycle
//! ----------------------
//! - `attach()` is called whenever the root element mounts (or is replaced).
//!   Any previous subscription is released first, so at most one is live.
//! - `detach()` is called when the component is dropped.
//! - Notifications carry the `SubscriptionId` they were issued for; anything
//!   tagged with a released id is reported as `Measurement::Stale`.
//! - The mount-time reading goes through `notify_initial`. It is resolved
//!   asynchronously, so once a resize has been applied for the subscription
//!   the older initial reading is dropped.

use tracing::{debug, trace};

/// Widths strictly below this (logical pixels) render the compact menu.
pub const COMPACT_BREAKPOINT_PX: f64 = 768.0;

/// Which of the two menu branches the navbar renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LayoutMode {
    /// Hamburger trigger + popover list.
    Compact,
    /// Inline horizontal list.
    #[default]
    Expanded,
}

impl LayoutMode {
    pub fn for_width(width: f64, breakpoint_px: f64) -> Self {
        if width < breakpoint_px {
            Self::Compact
        } else {
            Self::Expanded
        }
    }

    pub fn is_compact(self) -> bool {
        matches!(self, Self::Compact)
    }

    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Compact => "navbar--compact",
            Self::Expanded => "navbar--expanded",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Result of feeding one width reading into the observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Measurement {
    /// No element attached (or nothing measurable); nothing happened.
    Detached,
    /// Notification from a released subscription; ignored.
    Stale,
    Unchanged(LayoutMode),
    Changed(LayoutMode),
}

impl Measurement {
    /// The new mode, only when the reading flipped it.
    pub fn changed(self) -> Option<LayoutMode> {
        match self {
            Self::Changed(mode) => Some(mode),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct LayoutObserver {
    breakpoint_px: f64,
    mode: LayoutMode,
    active: Option<SubscriptionId>,
    /// A resize has been applied for `active`.
    resized: bool,
    next_id: u64,
}

impl Default for LayoutObserver {
    fn default() -> Self {
        Self::new(COMPACT_BREAKPOINT_PX)
    }
}

impl LayoutObserver {
    pub fn new(breakpoint_px: f64) -> Self {
        Self {
            breakpoint_px,
            mode: LayoutMode::default(),
            active: None,
            resized: false,
            next_id: 0,
        }
    }

    pub fn mode(&self) -> LayoutMode {
        self.mode
    }

    pub fn breakpoint_px(&self) -> f64 {
        self.breakpoint_px
    }

    pub fn subscription(&self) -> Option<SubscriptionId> {
        self.active
    }

    pub fn is_attached(&self) -> bool {
        self.active.is_some()
    }

    /// Start observing a (new) root element, releasing any previous subscription.
    pub fn attach(&mut self) -> SubscriptionId {
        if let Some(previous) = self.active.take() {
            debug!(subscription = previous.0, "navbar root replaced; releasing observation");
        }
        self.next_id += 1;
        let id = SubscriptionId(self.next_id);
        self.active = Some(id);
        self.resized = false;
        debug!(subscription = id.0, "navbar root attached");
        id
    }

    /// Stop observing. Returns the released subscription, if any.
    pub fn detach(&mut self) -> Option<SubscriptionId> {
        let released = self.active.take();
        if let Some(id) = released {
            debug!(subscription = id.0, "navbar root detached");
        }
        released
    }

    /// Measure against the current subscription.
    pub fn measure(&mut self, width: Option<f64>) -> Measurement {
        match self.active {
            Some(id) => self.notify(id, width),
            None => Measurement::Detached,
        }
    }

    /// Apply the mount-time reading for `id`, unless a resize already landed.
    pub fn notify_initial(&mut self, id: SubscriptionId, width: Option<f64>) -> Measurement {
        if self.active == Some(id) && self.resized {
            trace!(subscription = id.0, "initial reading superseded by resize");
            return Measurement::Stale;
        }
        self.apply(id, width)
    }

    /// Apply a resize notification delivered for subscription `id`.
    pub fn notify(&mut self, id: SubscriptionId, width: Option<f64>) -> Measurement {
        let outcome = self.apply(id, width);
        if matches!(outcome, Measurement::Unchanged(_) | Measurement::Changed(_)) {
            self.resized = true;
        }
        outcome
    }

    fn apply(&mut self, id: SubscriptionId, width: Option<f64>) -> Measurement {
        match self.active {
            None => return Measurement::Detached,
            Some(active) if active != id => {
                trace!(subscription = id.0, "dropping notification from released subscription");
                return Measurement::Stale;
            }
            Some(_) => {}
        }

        let Some(width) = width.filter(|w| w.is_finite()) else {
            return Measurement::Detached;
        };

        let next = LayoutMode::for_width(width, self.breakpoint_px);
        if next == self.mode {
            return Measurement::Unchanged(next);
        }

        debug!(width, from = ?self.mode, to = ?next, "navbar layout mode changed");
        self.mode = next;
        Measurement::Changed(next)
    }
}

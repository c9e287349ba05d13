//! Panel resize controller
//!
//! Translates pointer input into a clamped sidebar width and a fold toggle.
//! The controller subscribes to the viewport pointer stream exactly once when
//! it is created and releases that subscription exactly once on `dispose`
//! (or drop). Moves and releases arriving after disposal are dropped.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::model::panel::{PanelState, SidebarMetrics};
use crate::pointer::{PointerEvent, PointerEvents, PointerSubscription};

/// Live source for the panel container's left edge.
///
/// Read on every pointer move, since the container can shift while dragging.
pub trait Anchor {
    fn left_edge(&self) -> f64;
}

impl<F: Fn() -> f64> Anchor for F {
    fn left_edge(&self) -> f64 {
        self()
    }
}

struct Shared {
    state: RefCell<PanelState>,
    anchor: Box<dyn Anchor>,
}

impl Shared {
    fn track_pointer(&self, pointer_x: f64) -> bool {
        let anchor_left = self.anchor.left_edge();
        self.state.borrow_mut().track_pointer(pointer_x, anchor_left)
    }

    fn end_resize(&self) {
        self.state.borrow_mut().end_resize();
    }
}

/// Owns the sidebar width and resize/fold flags for one mounted layout
pub struct PanelResizeController {
    shared: Rc<Shared>,
    subscription: PointerSubscription,
}

impl PanelResizeController {
    /// Create a controller and subscribe it to `events`
    pub fn new(
        metrics: SidebarMetrics,
        anchor: impl Anchor + 'static,
        events: &PointerEvents,
    ) -> Self {
        let shared = Rc::new(Shared {
            state: RefCell::new(PanelState::new(metrics)),
            anchor: Box::new(anchor),
        });

        let weak: Weak<Shared> = Rc::downgrade(&shared);
        let subscription = events.subscribe(move |event| {
            let Some(shared) = weak.upgrade() else {
                return;
            };
            match *event {
                PointerEvent::Moved { x, .. } => {
                    shared.track_pointer(x);
                }
                PointerEvent::Released => shared.end_resize(),
            }
        });

        tracing::debug!(
            target: "panel",
            default_width = metrics.default_width,
            min_width = metrics.min_width,
            max_width = metrics.max_width,
            "controller mounted"
        );

        Self {
            shared,
            subscription,
        }
    }

    pub fn begin_resize(&self) {
        self.shared.state.borrow_mut().begin_resize();
    }

    pub fn end_resize(&self) {
        self.shared.end_resize();
    }

    /// Apply a pointer sample; returns true if the width changed
    pub fn track_pointer(&self, pointer_x: f64) -> bool {
        self.shared.track_pointer(pointer_x)
    }

    pub fn toggle_fold(&self) {
        self.shared.state.borrow_mut().toggle_fold();
    }

    /// Release the pointer subscription. Later calls are no-ops.
    pub fn dispose(&mut self) {
        if self.is_disposed() {
            return;
        }
        self.subscription.unsubscribe();
        self.shared.state.borrow_mut().dispose();
        tracing::debug!(target: "panel", "controller disposed");
    }

    pub fn width(&self) -> f32 {
        self.shared.state.borrow().width
    }

    pub fn is_resizing(&self) -> bool {
        self.shared.state.borrow().resizing
    }

    pub fn is_folded(&self) -> bool {
        self.shared.state.borrow().folded
    }

    pub fn is_disposed(&self) -> bool {
        self.shared.state.borrow().disposed
    }

    pub fn metrics(&self) -> SidebarMetrics {
        self.shared.state.borrow().metrics
    }

    /// Owned copy of the current state
    pub fn snapshot(&self) -> PanelState {
        self.shared.state.borrow().clone()
    }

    /// Current anchor reading, as the next pointer sample would see it
    pub fn anchor_left(&self) -> f64 {
        self.shared.anchor.left_edge()
    }
}

impl Drop for PanelResizeController {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl std::fmt::Debug for PanelResizeController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PanelResizeController")
            .field("state", &*self.shared.state.borrow())
            .field("subscribed", &self.subscription.is_active())
            .finish()
    }
}

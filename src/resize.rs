//! Window resize notifications.
//!
//! [`ResizeBus`] stands in for the host window: it remembers the last known
//! inner width and fans resize events out to listeners. Listeners are
//! registered through [`ResizeBus::subscribe`] and stay registered exactly as
//! long as the returned [`ResizeSubscription`] is alive.
//!
//! The bus lives on the UI thread only.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

type Handler = Rc<dyn Fn(f32)>;

#[derive(Default)]
struct BusInner {
    next_id: u64,
    inner_width: Option<f32>,
    listeners: Vec<(u64, Handler)>,
}

/// Shared handle to the window's resize events.
#[derive(Clone, Default)]
pub struct ResizeBus {
    inner: Rc<RefCell<BusInner>>,
}

impl std::fmt::Debug for ResizeBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("ResizeBus")
            .field("inner_width", &inner.inner_width)
            .field("listeners", &inner.listeners.len())
            .finish()
    }
}

impl ResizeBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last published width, or `None` before the first measurement.
    pub fn inner_width(&self) -> Option<f32> {
        self.inner.borrow().inner_width
    }

    /// Number of live listeners.
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    /// Registers `handler` for resize events until the subscription is dropped.
    #[must_use = "dropping the subscription unregisters the listener immediately"]
    pub fn subscribe(&self, handler: impl Fn(f32) + 'static) -> ResizeSubscription {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.listeners.push((id, Rc::new(handler)));

        ResizeSubscription {
            bus: Rc::downgrade(&self.inner),
            id,
        }
    }

    /// Records a new inner width and notifies every listener.
    ///
    /// Handlers run after the bus borrow is released, so a handler may
    /// subscribe or drop subscriptions without panicking.
    pub fn publish(&self, width: f32) {
        let handlers: Vec<Handler> = {
            let mut inner = self.inner.borrow_mut();
            inner.inner_width = Some(width);
            inner.listeners.iter().map(|(_, h)| Rc::clone(h)).collect()
        };

        for handler in handlers {
            handler(width);
        }
    }
}

/// Guard for a registered resize listener; unregisters on drop.
pub struct ResizeSubscription {
    bus: Weak<RefCell<BusInner>>,
    id: u64,
}

impl std::fmt::Debug for ResizeSubscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResizeSubscription").field("id", &self.id).finish()
    }
}

impl Drop for ResizeSubscription {
    fn drop(&mut self) {
        if let Some(bus) = self.bus.upgrade() {
            bus.borrow_mut().listeners.retain(|(id, _)| *id != self.id);
        }
    }
}

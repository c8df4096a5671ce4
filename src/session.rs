//! Stacking order for one desktop session.
//!
//! A single monotonic counter decides who is on top: every interaction
//! stamps the touched window with the next value, and the highest stamp is
//! both the topmost window and the unique "active" one. The counter never
//! resets while the session lives.

use crate::constants::Z_ORDER_START;
use crate::window::WindowId;

#[derive(Debug, Clone)]
pub struct ZOrder {
    counter: u64,
    active: Option<WindowId>,
}

impl ZOrder {
    pub fn new() -> Self {
        Self {
            counter: Z_ORDER_START,
            active: None,
        }
    }

    /// Stamp `id` with the next stacking value and make it the active
    /// window. Returns the value assigned.
    pub fn bring_to_front(&mut self, id: WindowId) -> u64 {
        self.counter += 1;
        self.active = Some(id);
        tracing::trace!(window = %id, z = self.counter, "brought to front");
        self.counter
    }

    pub fn active(&self) -> Option<WindowId> {
        self.active
    }

    pub fn is_active(&self, id: WindowId) -> bool {
        self.active == Some(id)
    }

    /// Drop the active slot if `id` holds it. Called on close and minimize;
    /// the next interaction elects the new active window.
    pub fn clear_active_if(&mut self, id: WindowId) {
        if self.active == Some(id) {
            self.active = None;
        }
    }

    pub fn current(&self) -> u64 {
        self.counter
    }
}

impl Default for ZOrder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: WindowId = WindowId("about");
    const B: WindowId = WindowId("skills");
    const C: WindowId = WindowId("contact");

    #[test]
    fn bring_to_front_is_strictly_monotonic() {
        let mut z = ZOrder::new();
        let mut last = z.current();
        for id in [A, B, C, A, B] {
            let next = z.bring_to_front(id);
            assert!(next > last);
            last = next;
            assert_eq!(z.active(), Some(id));
        }
    }

    #[test]
    fn last_caller_is_unique_active() {
        let mut z = ZOrder::new();
        z.bring_to_front(A);
        z.bring_to_front(B);
        assert!(z.is_active(B));
        assert!(!z.is_active(A));
    }

    #[test]
    fn clear_active_only_when_matching() {
        let mut z = ZOrder::new();
        z.bring_to_front(A);
        z.clear_active_if(B);
        assert_eq!(z.active(), Some(A));
        z.clear_active_if(A);
        assert_eq!(z.active(), None);
    }
}

//! Mount-scoped listener registration
//!
//! A scroller subscribes to wheel, touch-start and touch-move when it is
//! mounted and drops all three when it is unmounted. `ListenerSet` records
//! which of those subscriptions are live so dispatch can answer
//! "is anyone listening" without touching scroller state.
//!
//! ```text
//!            attach_all()
//!   Detached ───────────► Listening { Wheel, TouchStart, TouchMove }
//!       ▲                          │
//!       └──────────────────────────┘
//!            detach_all()
//! ```

use smallvec::SmallVec;

use crate::input::EventKind;

/// Set of registered listener kinds
#[derive(Clone, Debug, Default)]
pub struct ListenerSet {
    kinds: SmallVec<[EventKind; 4]>,
}

impl ListenerSet {
    /// Create an empty (detached) set
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a single listener kind
    ///
    /// Returns false if it was already registered.
    pub fn attach(&mut self, kind: EventKind) -> bool {
        if self.kinds.contains(&kind) {
            return false;
        }
        self.kinds.push(kind);
        true
    }

    /// Remove a single listener kind
    ///
    /// Returns false if it was not registered.
    pub fn detach(&mut self, kind: EventKind) -> bool {
        match self.kinds.iter().position(|k| *k == kind) {
            Some(pos) => {
                self.kinds.swap_remove(pos);
                true
            }
            None => false,
        }
    }

    /// Register every scroller listener
    ///
    /// Returns true if at least one listener was newly registered.
    pub fn attach_all(&mut self) -> bool {
        EventKind::ALL
            .iter()
            .fold(false, |changed, kind| self.attach(*kind) || changed)
    }

    /// Remove every registered listener
    ///
    /// Returns true if at least one listener was removed.
    pub fn detach_all(&mut self) -> bool {
        let changed = !self.kinds.is_empty();
        self.kinds.clear();
        changed
    }

    /// Check whether a listener for `kind` is registered
    pub fn is_listening(&self, kind: EventKind) -> bool {
        self.kinds.contains(&kind)
    }

    /// Number of registered listeners
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// Check if no listeners are registered
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attach_all_is_idempotent() {
        let mut listeners = ListenerSet::new();
        assert!(listeners.is_empty());

        assert!(listeners.attach_all());
        assert_eq!(listeners.len(), 3);

        // Second attach changes nothing
        assert!(!listeners.attach_all());
        assert_eq!(listeners.len(), 3);

        for kind in EventKind::ALL {
            assert!(listeners.is_listening(kind));
        }
    }

    #[test]
    fn test_detach_all_is_symmetric() {
        let mut listeners = ListenerSet::new();
        listeners.attach_all();

        assert!(listeners.detach_all());
        assert!(listeners.is_empty());
        assert!(!listeners.detach_all());

        for kind in EventKind::ALL {
            assert!(!listeners.is_listening(kind));
        }
    }

    #[test]
    fn test_single_attach_detach() {
        let mut listeners = ListenerSet::new();
        assert!(listeners.attach(EventKind::Wheel));
        assert!(!listeners.attach(EventKind::Wheel));
        assert!(listeners.is_listening(EventKind::Wheel));
        assert!(!listeners.is_listening(EventKind::TouchMove));

        assert!(listeners.detach(EventKind::Wheel));
        assert!(!listeners.detach(EventKind::Wheel));
        assert!(listeners.is_empty());

        // attach_all fills in what is missing
        listeners.attach(EventKind::TouchStart);
        assert!(listeners.attach_all());
        assert_eq!(listeners.len(), 3);
    }
}

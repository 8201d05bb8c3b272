//! Folio Platform Input Layer
//!
//! This crate provides the platform-agnostic input vocabulary consumed by
//! the Folio page scroller: wheel and touch events, the event kinds a
//! scroller subscribes to, and the response a listener reports back to the
//! platform (whether default scrolling was suppressed).
//!
//! # Example
//!
//! ```rust
//! use folio_platform::{Gesture, InputEvent, ListenerSet};
//!
//! let mut listeners = ListenerSet::new();
//! listeners.attach_all();
//!
//! let event = InputEvent::wheel(0.0, 48.0);
//! let gesture = Gesture::of(&event).unwrap();
//! assert!(listeners.is_listening(gesture.kind()));
//! ```

mod input;
mod listener;

pub use input::{EventKind, EventResponse, Gesture, InputEvent, TouchEvent};
pub use listener::ListenerSet;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::input::{EventKind, EventResponse, Gesture, InputEvent, TouchEvent};
    pub use crate::listener::ListenerSet;
}

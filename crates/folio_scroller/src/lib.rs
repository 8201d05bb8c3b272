//! Folio Page Scroller
//!
//! Renders a stack of pages one at a time and lets the user move between
//! them with the mouse wheel, touch swipes or direct index control, while
//! a renderer plays a directional enter/exit transition.
//!
//! # Features
//!
//! - **Gesture thresholds**: wheel deltas above 40 and swipes above 20
//!   change the page; anything smaller is ignored
//! - **Debounced navigation**: a lock drops gestures while a transition
//!   plays, released by a timer sized to the transition
//! - **Bounce at the edges**: navigating past either end keeps the index
//!   but still reports it
//! - **Closed transition presets**: built-in presets or a custom named
//!   transition with its own timing
//! - **Renderer contract**: per-frame page slots tagged with phase,
//!   class name and timing
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use folio_platform::InputEvent;
//! use folio_scroller::{Direction, Scroller, ScrollerConfig};
//!
//! let config = ScrollerConfig::from_toml_str(r#"start = 1"#).unwrap();
//! let mut scroller = Scroller::new(vec!["A", "B", "C"], config);
//! scroller.mount();
//!
//! let response = scroller.handle_input(&InputEvent::wheel(0.0, 50.0));
//! assert!(response.is_default_prevented());
//! assert_eq!(scroller.index(), 2);
//! assert_eq!(scroller.direction(), Direction::Forward);
//!
//! // Locked until the transition finishes
//! scroller.handle_input(&InputEvent::wheel(0.0, -50.0));
//! assert_eq!(scroller.index(), 2);
//!
//! scroller.advance(Duration::from_millis(800));
//! scroller.handle_input(&InputEvent::wheel(0.0, -50.0));
//! assert_eq!(scroller.index(), 1);
//! ```

pub mod config;
pub mod direction;
pub mod error;
pub mod gesture;
pub mod navigation;
pub mod render;
pub mod scroller;
pub mod timer;
pub mod transition;

pub use config::ScrollerConfig;
pub use direction::Direction;
pub use error::{ConfigError, Result};
pub use gesture::{
    classify, GestureSample, Orientation, TouchTracker, SWIPE_THRESHOLD, WHEEL_THRESHOLD,
};
pub use navigation::{resolve_start_index, NavigationState};
pub use render::{ExitingPage, PageFrame, PageRenderer, PageSlot, PageTransitions, SlotPhase};
pub use scroller::{IndexChangedCallback, Scroller};
pub use timer::UnlockTimers;
pub use transition::{BuiltinTransition, Transition, TransitionTiming, BUILTIN_UNLOCK_MARGIN};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::ScrollerConfig;
    pub use crate::direction::Direction;
    pub use crate::gesture::Orientation;
    pub use crate::render::{PageFrame, PageRenderer, PageSlot, SlotPhase};
    pub use crate::scroller::Scroller;
    pub use crate::transition::{BuiltinTransition, Transition, TransitionTiming};
    pub use folio_platform::{EventResponse, InputEvent};
}

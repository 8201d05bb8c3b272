//! Page transition presets and timing
//!
//! A transition is either one of the built-in presets, whose timing is
//! fixed, or a caller-named custom transition carrying its own timing.
//! The scroller never animates anything itself; it only needs the class
//! stem to hand to the renderer and the durations to size its lock.
//!
//! # Unlock delay
//!
//! | Transition | Delay |
//! |---|---|
//! | `Builtin(p)` | `max(p.enter, p.exit) + 100ms` |
//! | `Custom { timing, .. }` | `max(timing.enter, timing.exit)` |

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::direction::Direction;

/// Extra lock time added after a built-in transition to cover its cleanup
pub const BUILTIN_UNLOCK_MARGIN: Duration = Duration::from_millis(100);

/// Enter/exit durations in milliseconds
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransitionTiming {
    /// Duration of the incoming page's enter animation (ms)
    pub enter: u64,
    /// Duration of the outgoing page's exit animation (ms)
    pub exit: u64,
}

impl Default for TransitionTiming {
    fn default() -> Self {
        Self {
            enter: 1000,
            exit: 1000,
        }
    }
}

impl TransitionTiming {
    /// Create a timing from enter/exit milliseconds
    pub fn new(enter: u64, exit: u64) -> Self {
        Self { enter, exit }
    }

    /// Enter duration
    pub fn enter_duration(&self) -> Duration {
        Duration::from_millis(self.enter)
    }

    /// Exit duration
    pub fn exit_duration(&self) -> Duration {
        Duration::from_millis(self.exit)
    }

    /// The longer of the two durations
    pub fn longest(&self) -> Duration {
        Duration::from_millis(self.enter.max(self.exit))
    }
}

/// Built-in transition presets
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuiltinTransition {
    /// Pages slide in from the bottom and out through the top (or back)
    #[default]
    #[serde(rename = "move-top-bottom")]
    MoveTopBottom,
}

impl BuiltinTransition {
    /// Class stem for this preset
    pub fn name(&self) -> &'static str {
        match self {
            BuiltinTransition::MoveTopBottom => "move-top-bottom",
        }
    }

    /// Fixed timing for this preset
    pub fn timing(&self) -> TransitionTiming {
        match self {
            BuiltinTransition::MoveTopBottom => TransitionTiming::new(700, 700),
        }
    }
}

/// The transition a scroller plays between pages
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Transition {
    /// A built-in preset
    Builtin(BuiltinTransition),
    /// A renderer-defined transition identified by name
    Custom {
        /// Class stem understood by the renderer
        name: String,
        /// Timing used for both the renderer and the lock
        timing: TransitionTiming,
    },
}

impl Default for Transition {
    fn default() -> Self {
        Transition::Builtin(BuiltinTransition::default())
    }
}

impl Transition {
    /// Create a custom transition
    pub fn custom(name: impl Into<String>, timing: TransitionTiming) -> Self {
        Transition::Custom {
            name: name.into(),
            timing,
        }
    }

    /// Class stem handed to the renderer
    pub fn class_stem(&self) -> &str {
        match self {
            Transition::Builtin(preset) => preset.name(),
            Transition::Custom { name, .. } => name,
        }
    }

    /// Full class name for a page animating in `direction`
    pub fn class_name(&self, direction: Direction) -> String {
        format!("{}-{}", self.class_stem(), direction)
    }

    /// Enter/exit timing handed to the renderer
    pub fn timing(&self) -> TransitionTiming {
        match self {
            Transition::Builtin(preset) => preset.timing(),
            Transition::Custom { timing, .. } => *timing,
        }
    }

    /// How long gestures stay locked after a navigation
    pub fn unlock_delay(&self) -> Duration {
        match self {
            Transition::Builtin(preset) => preset.timing().longest() + BUILTIN_UNLOCK_MARGIN,
            Transition::Custom { timing, .. } => timing.longest(),
        }
    }
}

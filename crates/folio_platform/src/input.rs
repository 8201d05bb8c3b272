//! Input event types for wheel and touch

/// Input events delivered to a scroller
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    /// Touch event (mobile/touchscreen)
    Touch(TouchEvent),
    /// Scroll/wheel event
    Scroll {
        /// Horizontal scroll delta
        delta_x: f32,
        /// Vertical scroll delta
        delta_y: f32,
    },
}

impl InputEvent {
    /// Build a wheel event
    pub fn wheel(delta_x: f32, delta_y: f32) -> Self {
        InputEvent::Scroll { delta_x, delta_y }
    }

    /// Build a touch-start event for the primary touch
    pub fn touch_start(x: f32, y: f32) -> Self {
        InputEvent::Touch(TouchEvent::Started { x, y })
    }

    /// Build a touch-move event for the primary touch
    pub fn touch_move(x: f32, y: f32) -> Self {
        InputEvent::Touch(TouchEvent::Moved { x, y })
    }
}

// ============================================================================
// Touch Events
// ============================================================================

/// Touch events for touchscreens
#[derive(Clone, Debug, PartialEq)]
pub enum TouchEvent {
    /// A touch started
    Started {
        /// X position in window coordinates
        x: f32,
        /// Y position in window coordinates
        y: f32,
    },
    /// A touch moved
    Moved {
        /// X position in window coordinates
        x: f32,
        /// Y position in window coordinates
        y: f32,
    },
    /// A touch ended
    Ended,
    /// A touch was cancelled (e.g., by system gesture)
    Cancelled,
}

// ============================================================================
// Dispatch
// ============================================================================

/// The event kinds a page scroller subscribes to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Mouse wheel / trackpad scroll
    Wheel,
    /// First contact of a touch gesture
    TouchStart,
    /// Touch point moved
    TouchMove,
}

impl EventKind {
    /// Every kind a scroller listens for while mounted
    pub const ALL: [EventKind; 3] = [
        EventKind::Wheel,
        EventKind::TouchStart,
        EventKind::TouchMove,
    ];
}

/// An input event a scroller listener consumes, with its payload
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Gesture {
    Wheel { delta_x: f32, delta_y: f32 },
    TouchStart { x: f32, y: f32 },
    TouchMove { x: f32, y: f32 },
}

impl Gesture {
    /// Classify an input event, or `None` if no scroller listener consumes it
    pub fn of(event: &InputEvent) -> Option<Gesture> {
        match *event {
            InputEvent::Scroll { delta_x, delta_y } => Some(Gesture::Wheel { delta_x, delta_y }),
            InputEvent::Touch(TouchEvent::Started { x, y }) => Some(Gesture::TouchStart { x, y }),
            InputEvent::Touch(TouchEvent::Moved { x, y }) => Some(Gesture::TouchMove { x, y }),
            InputEvent::Touch(TouchEvent::Ended | TouchEvent::Cancelled) => None,
        }
    }

    /// The listener this gesture is delivered to
    pub fn kind(&self) -> EventKind {
        match self {
            Gesture::Wheel { .. } => EventKind::Wheel,
            Gesture::TouchStart { .. } => EventKind::TouchStart,
            Gesture::TouchMove { .. } => EventKind::TouchMove,
        }
    }
}

/// What a listener did with an event
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EventResponse {
    /// No listener is registered for this event
    #[default]
    Unhandled,
    /// A listener ran but left the platform's default behavior intact
    Observed,
    /// A listener ran and suppressed the platform's default scrolling
    DefaultPrevented,
}

impl EventResponse {
    /// Returns true if default scrolling must be suppressed
    pub fn is_default_prevented(&self) -> bool {
        matches!(self, EventResponse::DefaultPrevented)
    }

    /// Returns true if any listener saw the event
    pub fn is_handled(&self) -> bool {
        !matches!(self, EventResponse::Unhandled)
    }
}

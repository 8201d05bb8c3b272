//! Page scroller state machine
//!
//! Owns the current page, the direction of the last change and a
//! reentrancy lock that debounces gestures while a transition plays.
//!
//! ```text
//!                 gesture below threshold
//!            ┌──────────────────────────────┐
//!            │   (lock, unlock after 0ms)   │
//!            ▼                              │
//!          Idle ────────────────────────────┘
//!            │  ▲
//!  gesture   │  │ unlock timer fires
//!  above     │  │ (max(enter, exit), +100ms for built-ins)
//!  threshold ▼  │
//!          Locked ◄── any gesture (ignored, default not prevented)
//! ```
//!
//! Gestures arriving while locked are dropped, not queued. Programmatic
//! navigation (`next`, `prev`, `go_to`) is not gated by the lock but runs
//! the same lock cycle.
//!
//! Time is driven by the host: call [`Scroller::advance`] once per frame
//! (or whenever time passes) so unlock timers fire and transitions retire.
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use folio_scroller::{Scroller, ScrollerConfig};
//!
//! let pages = vec!["intro", "features", "pricing"];
//! let mut scroller = Scroller::new(pages, ScrollerConfig::default())
//!     .on_index_changed(|index| println!("now on page {index}"));
//! scroller.mount();
//!
//! scroller.on_wheel(0.0, 120.0);
//! assert_eq!(scroller.index(), 1);
//! assert!(scroller.is_locked());
//!
//! scroller.advance(Duration::from_millis(800));
//! assert!(!scroller.is_locked());
//! ```

use std::time::Duration;

use folio_platform::{EventResponse, Gesture, InputEvent, ListenerSet};
use tracing::{debug, trace};

use crate::config::ScrollerConfig;
use crate::direction::Direction;
use crate::gesture::{classify, TouchTracker, SWIPE_THRESHOLD, WHEEL_THRESHOLD};
use crate::navigation::{resolve_start_index, NavigationState};
use crate::render::{PageFrame, PageRenderer, PageTransitions};
use crate::timer::UnlockTimers;
use crate::transition::Transition;

/// Callback invoked with the current page after every committed change
pub type IndexChangedCallback = Box<dyn FnMut(usize)>;

/// A stack of pages navigated one at a time
pub struct Scroller<T> {
    pages: Vec<T>,
    config: ScrollerConfig,
    transition: Transition,
    state: NavigationState,
    locked: bool,
    touch: TouchTracker,
    timers: UnlockTimers,
    listeners: ListenerSet,
    transitions: PageTransitions,
    /// Time elapsed since creation, advanced by the host
    clock: Duration,
    /// Bumped on unmount; timers armed under an older generation are stale
    generation: u64,
    mounted: bool,
    index_changed: Option<IndexChangedCallback>,
}

impl<T> Scroller<T> {
    /// Create an unmounted scroller over `pages`
    pub fn new(pages: Vec<T>, config: ScrollerConfig) -> Self {
        let transition = config.resolved_transition();
        let state = NavigationState::at_start(config.start, pages.len());
        Self {
            pages,
            config,
            transition,
            state,
            locked: false,
            touch: TouchTracker::new(),
            timers: UnlockTimers::new(),
            listeners: ListenerSet::new(),
            transitions: PageTransitions::new(),
            clock: Duration::ZERO,
            generation: 0,
            mounted: false,
            index_changed: None,
        }
    }

    /// Register the index-changed callback
    pub fn on_index_changed<F>(mut self, callback: F) -> Self
    where
        F: FnMut(usize) + 'static,
    {
        self.index_changed = Some(Box::new(callback));
        self
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Attach listeners and start at the configured page
    ///
    /// Fires the index-changed callback once with the initial page. Does
    /// nothing if already mounted.
    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        self.listeners.attach_all();
        self.locked = false;
        self.touch.clear();
        self.state = NavigationState::at_start(self.config.start, self.pages.len());

        if self.pages.len() > 1 {
            self.transitions.appear(self.state.index, self.transition.timing());
        }

        debug!(
            index = self.state.index,
            pages = self.pages.len(),
            transition = self.transition.class_stem(),
            "scroller mounted"
        );
        self.notify();
    }

    /// Detach listeners and drop per-mount state
    ///
    /// Unlock timers armed before this point still fire but no longer
    /// affect the scroller. Does nothing if not mounted.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        self.listeners.detach_all();
        self.generation += 1;
        self.locked = false;
        self.touch.clear();
        self.transitions.reset();

        debug!(pending_timers = self.timers.len(), "scroller unmounted");
    }

    /// Change the requested start page
    ///
    /// Takes effect on the next mount; an unmounted scroller also moves to
    /// the resolved page immediately.
    pub fn set_start_index(&mut self, start: f64) -> usize {
        self.config.start = start;
        let index = self.start_index();
        if !self.mounted {
            self.state.index = index;
        }
        index
    }

    /// The page the next mount will start on
    pub fn start_index(&self) -> usize {
        resolve_start_index(self.config.start, self.pages.len())
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Route a platform input event to the matching gesture handler
    pub fn handle_input(&mut self, event: &InputEvent) -> EventResponse {
        match Gesture::of(event) {
            Some(gesture) => self.dispatch(gesture),
            None => EventResponse::Unhandled,
        }
    }

    /// Wheel / trackpad scroll
    pub fn on_wheel(&mut self, delta_x: f32, delta_y: f32) -> EventResponse {
        self.dispatch(Gesture::Wheel { delta_x, delta_y })
    }

    /// First contact of a touch gesture
    pub fn on_touch_start(&mut self, x: f32, y: f32) -> EventResponse {
        self.dispatch(Gesture::TouchStart { x, y })
    }

    /// Touch point moved
    pub fn on_touch_move(&mut self, x: f32, y: f32) -> EventResponse {
        self.dispatch(Gesture::TouchMove { x, y })
    }

    fn dispatch(&mut self, gesture: Gesture) -> EventResponse {
        if !self.listeners.is_listening(gesture.kind()) {
            return EventResponse::Unhandled;
        }
        match gesture {
            Gesture::Wheel { delta_x, delta_y } => self.wheel(delta_x, delta_y),
            Gesture::TouchStart { x, y } => self.touch_start(x, y),
            Gesture::TouchMove { x, y } => self.touch_move(x, y),
        }
    }

    fn wheel(&mut self, delta_x: f32, delta_y: f32) -> EventResponse {
        if self.locked {
            trace!(delta_x, delta_y, "wheel ignored while locked");
            return EventResponse::Observed;
        }

        self.lock();
        let delta = self.config.orientation.primary(delta_x, delta_y);
        self.interpret(delta, WHEEL_THRESHOLD);
        EventResponse::DefaultPrevented
    }

    fn touch_start(&mut self, x: f32, y: f32) -> EventResponse {
        self.touch.begin(x, y);
        EventResponse::Observed
    }

    fn touch_move(&mut self, x: f32, y: f32) -> EventResponse {
        if self.locked {
            trace!(x, y, "touch move ignored while locked");
            return EventResponse::Observed;
        }

        self.lock();
        let Some(origin) = self.touch.take() else {
            trace!("touch move without a touch start");
            self.release();
            return EventResponse::DefaultPrevented;
        };

        let (dx, dy) = origin.delta_to(x, y);
        let delta = self.config.orientation.primary(dx, dy);
        self.interpret(delta, SWIPE_THRESHOLD);
        EventResponse::DefaultPrevented
    }

    /// Navigate if `delta` crosses `threshold`, otherwise release the lock
    fn interpret(&mut self, delta: f32, threshold: f32) {
        if self.pages.is_empty() {
            self.release();
            return;
        }

        match classify(delta, threshold) {
            Some(direction) => {
                self.commit(self.state.step(direction, self.pages.len()));
            }
            None => {
                trace!(delta, threshold, "gesture below threshold");
                self.release();
            }
        }
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Move to the next page, bouncing at the last one
    ///
    /// Returns the (possibly unchanged) current page.
    pub fn next(&mut self) -> usize {
        let target = self.state.next(self.pages.len());
        self.navigate(target)
    }

    /// Move to the previous page, bouncing at the first one
    pub fn prev(&mut self) -> usize {
        let target = self.state.prev();
        self.navigate(target)
    }

    /// Move directly to `index`, clamped to the last page
    pub fn go_to(&mut self, index: usize) -> usize {
        let target = self.state.jump(index, self.pages.len());
        self.navigate(target)
    }

    fn navigate(&mut self, target: NavigationState) -> usize {
        if !self.mounted {
            trace!(index = target.index, "navigation ignored while unmounted");
            return self.state.index;
        }
        self.lock();
        self.commit(target);
        self.state.index
    }

    /// Commit a new state, arm the unlock timer and notify
    fn commit(&mut self, next: NavigationState) {
        let previous = self.state;
        self.state = next;

        if self.pages.len() > 1 {
            self.transitions.navigate(previous, next, self.transition.timing());
        }
        let delay = self.transition.unlock_delay();
        self.timers.arm(self.clock, delay, self.generation);

        debug!(
            from = previous.index,
            to = next.index,
            direction = %next.direction,
            unlock_ms = delay.as_millis() as u64,
            "page index committed"
        );
        self.notify();
    }

    fn notify(&mut self) {
        let index = self.state.index;
        if let Some(callback) = self.index_changed.as_mut() {
            callback(index);
        }
    }

    // =========================================================================
    // Lock
    // =========================================================================

    fn lock(&mut self) {
        self.locked = true;
    }

    /// Release the lock on the next clock advance
    fn release(&mut self) {
        self.timers.arm(self.clock, Duration::ZERO, self.generation);
    }

    /// Advance the scroller's clock by `dt`
    ///
    /// Fires due unlock timers and retires finished page transitions.
    pub fn advance(&mut self, dt: Duration) {
        self.clock += dt;

        for generation in self.timers.drain_due(self.clock) {
            if generation == self.generation {
                trace!(clock_ms = self.clock.as_millis() as u64, "unlocked");
                self.locked = false;
            } else {
                trace!(generation, "stale unlock timer discarded");
            }
        }

        self.transitions.advance(dt);
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Pages to draw this frame
    ///
    /// An unmounted scroller renders nothing.
    pub fn frame(&self) -> PageFrame<'_, T> {
        if !self.mounted {
            return PageFrame::Empty;
        }
        PageFrame::build(&self.pages, self.state, &self.transition, &self.transitions)
    }

    /// Hand the current frame to a renderer
    pub fn render_into<R>(&self, renderer: &mut R)
    where
        R: PageRenderer<T>,
    {
        renderer.render(&self.frame());
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Current page
    pub fn index(&self) -> usize {
        self.state.index
    }

    /// Direction of the last change
    pub fn direction(&self) -> Direction {
        self.state.direction
    }

    /// Current page and direction
    pub fn state(&self) -> NavigationState {
        self.state
    }

    /// Returns true while gestures are being ignored
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Returns true between `mount` and `unmount`
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Returns true while a page enter/exit animation is running
    pub fn is_transitioning(&self) -> bool {
        self.transitions.is_animating()
    }

    /// Number of pages
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Returns true if there are no pages
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// The page set, in order
    pub fn pages(&self) -> &[T] {
        &self.pages
    }

    /// The configuration, including any start index set since creation
    pub fn config(&self) -> &ScrollerConfig {
        &self.config
    }

    /// The resolved transition
    pub fn transition(&self) -> &Transition {
        &self.transition
    }

    /// How long gestures stay locked after a navigation
    pub fn unlock_delay(&self) -> Duration {
        self.transition.unlock_delay()
    }

    /// Time elapsed on the scroller's clock
    pub fn elapsed(&self) -> Duration {
        self.clock
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Scroller<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scroller")
            .field("pages", &self.pages)
            .field("state", &self.state)
            .field("locked", &self.locked)
            .field("mounted", &self.mounted)
            .field("transition", &self.transition)
            .field("clock", &self.clock)
            .finish_non_exhaustive()
    }
}

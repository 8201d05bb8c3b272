//! Page renderer contract
//!
//! The scroller decides *when* and *in which direction* pages change; a
//! [`PageRenderer`] decides what that looks like. Each frame the renderer
//! receives the pages that are currently mounted, each tagged with its
//! animation phase, class name and timing.
//!
//! ```text
//!   navigate 1 -> 2 (forward)
//!
//!   page 1: Active ──► Exiting  "<stem>-<old direction>"  (exit ms)  ──► unmounted
//!   page 2: (none) ──► Entering "<stem>-forward"          (enter ms) ──► Active
//! ```
//!
//! A page set with exactly one page skips all of this and is rendered
//! directly as [`PageFrame::Single`].

use std::time::Duration;

use smallvec::SmallVec;

use crate::direction::Direction;
use crate::navigation::NavigationState;
use crate::transition::{Transition, TransitionTiming};

/// Receives frames from a scroller
pub trait PageRenderer<T> {
    /// Draw (or reconcile) the mounted pages
    fn render(&mut self, frame: &PageFrame<'_, T>);
}

impl<T, F> PageRenderer<T> for F
where
    F: FnMut(&PageFrame<'_, T>),
{
    fn render(&mut self, frame: &PageFrame<'_, T>) {
        self(frame)
    }
}

/// Animation phase of a mounted page
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SlotPhase {
    /// First page playing its enter animation right after mount
    Appearing,
    /// Incoming page playing its enter animation
    Entering,
    /// Current page at rest
    Active,
    /// Outgoing page playing its exit animation
    Exiting,
}

impl SlotPhase {
    /// Returns true while an enter or exit animation is running
    pub fn is_animating(&self) -> bool {
        !matches!(self, SlotPhase::Active)
    }
}

/// A mounted page
#[derive(Debug)]
pub struct PageSlot<'a, T> {
    /// Position in the page set
    pub index: usize,
    /// The page content
    pub page: &'a T,
    /// What the page is doing this frame
    pub phase: SlotPhase,
    /// `"<stem>-<direction>"`
    pub class_name: String,
    /// Enter/exit timing
    pub timing: TransitionTiming,
}

/// Everything a renderer needs for one frame
#[derive(Debug)]
pub enum PageFrame<'a, T> {
    /// No pages
    Empty,
    /// Exactly one page, rendered without transition wrapping
    Single(&'a T),
    /// Mounted pages in page-set order
    Stack(Vec<PageSlot<'a, T>>),
}

impl<'a, T> PageFrame<'a, T> {
    /// Assemble a frame from the scroller's state
    pub fn build(
        pages: &'a [T],
        state: NavigationState,
        transition: &Transition,
        transitions: &PageTransitions,
    ) -> Self {
        match pages {
            [] => PageFrame::Empty,
            [only] => PageFrame::Single(only),
            _ => {
                let timing = transition.timing();
                let mut slots: Vec<PageSlot<'a, T>> = transitions
                    .exiting()
                    .filter_map(|exit| {
                        pages.get(exit.index).map(|page| PageSlot {
                            index: exit.index,
                            page,
                            phase: SlotPhase::Exiting,
                            class_name: transition.class_name(exit.direction),
                            timing,
                        })
                    })
                    .collect();

                if let Some(page) = pages.get(state.index) {
                    slots.push(PageSlot {
                        index: state.index,
                        page,
                        phase: transitions.phase_of(state.index),
                        class_name: transition.class_name(state.direction),
                        timing,
                    });
                }

                slots.sort_by_key(|slot| slot.index);
                PageFrame::Stack(slots)
            }
        }
    }

    /// The slot for the current page, if the frame is a stack
    pub fn active(&self) -> Option<&PageSlot<'a, T>> {
        match self {
            PageFrame::Stack(slots) => slots.iter().find(|s| s.phase != SlotPhase::Exiting),
            _ => None,
        }
    }

    /// Number of mounted pages
    pub fn mounted(&self) -> usize {
        match self {
            PageFrame::Empty => 0,
            PageFrame::Single(_) => 1,
            PageFrame::Stack(slots) => slots.len(),
        }
    }
}

/// A page playing its exit animation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExitingPage {
    pub index: usize,
    /// Direction in force before the navigation that removed this page
    pub direction: Direction,
    remaining: Duration,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct EnteringPage {
    index: usize,
    phase: SlotPhase,
    remaining: Duration,
}

/// Tracks which pages are mid-animation
///
/// Advanced by the scroller's clock; a page is unmounted once its exit
/// time has elapsed.
#[derive(Clone, Debug, Default)]
pub struct PageTransitions {
    entering: Option<EnteringPage>,
    exiting: SmallVec<[ExitingPage; 2]>,
}

impl PageTransitions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the mount-time enter animation of the first page
    pub fn appear(&mut self, index: usize, timing: TransitionTiming) {
        self.exiting.clear();
        self.entering = Some(EnteringPage {
            index,
            phase: SlotPhase::Appearing,
            remaining: timing.enter_duration(),
        });
    }

    /// Record a committed navigation
    ///
    /// A bounce (same index) leaves the mounted pages untouched.
    pub fn navigate(
        &mut self,
        from: NavigationState,
        to: NavigationState,
        timing: TransitionTiming,
    ) {
        if from.index == to.index {
            return;
        }

        self.exiting
            .retain(|exit| exit.index != to.index && exit.index != from.index);
        self.exiting.push(ExitingPage {
            index: from.index,
            direction: from.direction,
            remaining: timing.exit_duration(),
        });
        self.entering = Some(EnteringPage {
            index: to.index,
            phase: SlotPhase::Entering,
            remaining: timing.enter_duration(),
        });
    }

    /// Advance running animations by `dt`, retiring finished ones
    pub fn advance(&mut self, dt: Duration) {
        for exit in self.exiting.iter_mut() {
            exit.remaining = exit.remaining.saturating_sub(dt);
        }
        self.exiting.retain(|exit| !exit.remaining.is_zero());

        if let Some(enter) = self.entering.as_mut() {
            enter.remaining = enter.remaining.saturating_sub(dt);
            if enter.remaining.is_zero() {
                self.entering = None;
            }
        }
    }

    /// Drop all animation state
    pub fn reset(&mut self) {
        self.entering = None;
        self.exiting.clear();
    }

    /// Pages currently exiting
    pub fn exiting(&self) -> impl Iterator<Item = &ExitingPage> {
        self.exiting.iter()
    }

    /// Phase of the (non-exiting) page at `index`
    pub fn phase_of(&self, index: usize) -> SlotPhase {
        match self.entering {
            Some(enter) if enter.index == index => enter.phase,
            _ => SlotPhase::Active,
        }
    }

    /// Returns true while any page is animating
    pub fn is_animating(&self) -> bool {
        self.entering.is_some() || !self.exiting.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transition::BuiltinTransition;

    fn state(index: usize, direction: Direction) -> NavigationState {
        NavigationState { index, direction }
    }

    #[test]
    fn test_frame_shapes() {
        let transition = Transition::default();
        let transitions = PageTransitions::new();

        let empty: [&str; 0] = [];
        let frame = PageFrame::build(
            &empty,
            NavigationState::default(),
            &transition,
            &transitions,
        );
        assert!(matches!(frame, PageFrame::Empty));
        assert_eq!(frame.mounted(), 0);

        let single = ["only"];
        let frame = PageFrame::build(
            &single,
            NavigationState::default(),
            &transition,
            &transitions,
        );
        assert!(matches!(frame, PageFrame::Single(&"only")));
        assert!(frame.active().is_none());

        let pages = ["a", "b", "c"];
        let frame =
            PageFrame::build(&pages, state(1, Direction::Forward), &transition, &transitions);
        assert_eq!(frame.mounted(), 1);
        let active = frame.active().unwrap();
        assert_eq!(active.index, 1);
        assert_eq!(*active.page, "b");
        assert_eq!(active.phase, SlotPhase::Active);
        assert_eq!(active.class_name, "move-top-bottom-forward");
        assert_eq!(active.timing, BuiltinTransition::MoveTopBottom.timing());
    }

    #[test]
    fn test_navigation_mounts_exit_and_enter() {
        let transition = Transition::custom("slide", TransitionTiming::new(200, 300));
        let mut transitions = PageTransitions::new();
        let pages = ["a", "b", "c"];

        let from = state(0, Direction::Reverse);
        let to = state(1, Direction::Forward);
        transitions.navigate(from, to, transition.timing());

        let frame = PageFrame::build(&pages, to, &transition, &transitions);
        let PageFrame::Stack(slots) = &frame else {
            panic!("expected a stack frame");
        };
        assert_eq!(slots.len(), 2);
        assert_eq!(slots[0].index, 0);
        assert_eq!(slots[0].phase, SlotPhase::Exiting);
        assert_eq!(slots[0].class_name, "slide-reverse");
        assert_eq!(slots[1].index, 1);
        assert_eq!(slots[1].phase, SlotPhase::Entering);
        assert_eq!(slots[1].class_name, "slide-forward");
    }

    #[test]
    fn test_animations_retire_over_time() {
        let timing = TransitionTiming::new(200, 300);
        let mut transitions = PageTransitions::new();
        transitions.navigate(state(0, Direction::Forward), state(1, Direction::Forward), timing);
        assert!(transitions.is_animating());

        transitions.advance(Duration::from_millis(200));
        assert_eq!(transitions.phase_of(1), SlotPhase::Active);
        assert_eq!(transitions.exiting().count(), 1);

        transitions.advance(Duration::from_millis(100));
        assert_eq!(transitions.exiting().count(), 0);
        assert!(!transitions.is_animating());
    }

    #[test]
    fn test_bounce_starts_no_transition() {
        let mut transitions = PageTransitions::new();
        transitions.navigate(
            state(2, Direction::Forward),
            state(2, Direction::Forward),
            TransitionTiming::default(),
        );
        assert!(!transitions.is_animating());
    }

    #[test]
    fn test_returning_page_leaves_exit_list() {
        let timing = TransitionTiming::new(500, 500);
        let mut transitions = PageTransitions::new();
        transitions.navigate(state(0, Direction::Forward), state(1, Direction::Forward), timing);
        transitions.navigate(state(1, Direction::Forward), state(0, Direction::Reverse), timing);

        let exiting: Vec<usize> = transitions.exiting().map(|e| e.index).collect();
        assert_eq!(exiting, vec![1]);
        assert_eq!(transitions.phase_of(0), SlotPhase::Entering);
    }

    #[test]
    fn test_appear_phase() {
        let mut transitions = PageTransitions::new();
        transitions.appear(0, TransitionTiming::new(700, 700));
        assert_eq!(transitions.phase_of(0), SlotPhase::Appearing);
        assert!(SlotPhase::Appearing.is_animating());

        transitions.advance(Duration::from_millis(700));
        assert_eq!(transitions.phase_of(0), SlotPhase::Active);
    }

    #[test]
    fn test_closure_renderer() {
        let pages = ["a", "b"];
        let transition = Transition::default();
        let transitions = PageTransitions::new();
        let mut seen = Vec::new();

        let mut renderer = |frame: &PageFrame<'_, &'static str>| {
            seen.push(frame.mounted());
        };
        let frame =
            PageFrame::build(&pages, NavigationState::default(), &transition, &transitions);
        renderer.render(&frame);

        assert_eq!(seen, vec![1]);
    }
}

//! Page index state
//!
//! Pure index arithmetic, independent of gestures and timers. The index is
//! always within `0..max(1, len)`, so an empty page set pins it at 0.

use crate::direction::Direction;

/// Resolve a requested start page against a page count
///
/// Uses `floor(start)` when `0 <= start < len`; everything else (negative,
/// past the end, NaN, or an empty page set) falls back to 0.
pub fn resolve_start_index(start: f64, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    if start >= 0.0 && start < len as f64 {
        start.floor() as usize
    } else {
        0
    }
}

/// Current page and the direction of the last change
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavigationState {
    pub index: usize,
    pub direction: Direction,
}

impl NavigationState {
    /// Initial state for a freshly mounted scroller
    pub fn at_start(start: f64, len: usize) -> Self {
        Self {
            index: resolve_start_index(start, len),
            direction: Direction::Forward,
        }
    }

    /// Step toward the last page, staying put at the end
    pub fn next(&self, len: usize) -> Self {
        Self {
            index: (self.index + 1).min(last_index(len)),
            direction: Direction::Forward,
        }
    }

    /// Step toward the first page, staying put at the start
    pub fn prev(&self) -> Self {
        Self {
            index: self.index.saturating_sub(1),
            direction: Direction::Reverse,
        }
    }

    /// Step in `direction`
    pub fn step(&self, direction: Direction, len: usize) -> Self {
        match direction {
            Direction::Forward => self.next(len),
            Direction::Reverse => self.prev(),
        }
    }

    /// Jump to `target`, clamped to the last page
    ///
    /// Direction is forward unless the target lies before the current page.
    pub fn jump(&self, target: usize, len: usize) -> Self {
        let index = target.min(last_index(len));
        let direction = if index < self.index {
            Direction::Reverse
        } else {
            Direction::Forward
        };
        Self { index, direction }
    }
}

fn last_index(len: usize) -> usize {
    len.saturating_sub(1)
}

//! Slide navigation state machine.
//!
//! The navigator owns the active slide index and serializes transitions:
//! while a transition is in flight, every navigation request is dropped
//! (not queued). The transition window is measured against an injected
//! `Instant`, so the state machine never sleeps and never schedules a
//! callback that could outlive it.

use std::time::{Duration, Instant};

/// Duration of a slide transition. Navigation requests arriving inside
/// this window are dropped.
pub const TRANSITION: Duration = Duration::from_millis(600);

/// Direction of the most recent transition. Only selects which way the
/// slide pair animates; has no bearing on correctness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Prev,
}

/// Visibility of a slide relative to the active index.
///
/// Exactly one slide is `Active` at any time; everything else is parked
/// off-screen on one side or the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Already passed, parked in the `Prev` direction.
    Before,
    /// The single visible, interactive slide.
    Active,
    /// Not yet reached, parked in the `Next` direction.
    After,
}

/// Transition phase. `Transitioning` is duration-bounded and reverts to
/// `Idle` via [`Navigator::tick`].
#[derive(Debug, Clone, Copy)]
pub enum Phase {
    Idle,
    Transitioning {
        direction: Direction,
        /// Index the deck is transitioning away from.
        from: usize,
        started: Instant,
    },
}

/// Owns the active index for an ordered, session-immutable slide list.
///
/// All operations are total: out-of-range jumps, navigation past either
/// end, and requests during a transition are silent no-ops.
#[derive(Debug)]
pub struct Navigator {
    current: usize,
    len: usize,
    content_slide_count: usize,
    phase: Phase,
}

impl Navigator {
    /// Creates a navigator for `len` slides starting at index 0.
    ///
    /// `content_slide_count` marks where the main deck ends; it only
    /// affects appendix jump-target arithmetic, never navigation.
    pub fn new(len: usize, content_slide_count: usize) -> Self {
        debug_assert!(len > 0, "navigator requires at least one slide");
        Self {
            current: 0,
            len,
            content_slide_count,
            phase: Phase::Idle,
        }
    }

    /// Starts at `index` instead of 0, clamped into range.
    pub fn with_start(mut self, index: usize) -> Self {
        self.current = index.min(self.len - 1);
        self
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn content_slide_count(&self) -> usize {
        self.content_slide_count
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_transitioning(&self) -> bool {
        matches!(self.phase, Phase::Transitioning { .. })
    }

    /// Index of the appendix table-of-contents slide. May be out of range
    /// for decks without an appendix, in which case jumping there is a
    /// no-op like any other out-of-range request.
    pub fn appendix_toc_index(&self) -> usize {
        self.content_slide_count + 1
    }

    /// Advances to the next slide. No-op at the last index or while a
    /// transition is in flight. Returns whether the index changed.
    pub fn next(&mut self, now: Instant) -> bool {
        if self.current + 1 >= self.len {
            return false;
        }
        self.transition_to(self.current + 1, Direction::Next, now)
    }

    /// Moves to the previous slide. No-op at index 0 or while a
    /// transition is in flight. Returns whether the index changed.
    pub fn previous(&mut self, now: Instant) -> bool {
        if self.current == 0 {
            return false;
        }
        self.transition_to(self.current - 1, Direction::Prev, now)
    }

    /// Jumps to an arbitrary index. Out-of-range targets and jumps to the
    /// current index are silent no-ops; direction is inferred from the
    /// target. Returns whether the index changed.
    pub fn go_to(&mut self, target: usize, now: Instant) -> bool {
        if target >= self.len || target == self.current {
            return false;
        }
        let direction = if target > self.current {
            Direction::Next
        } else {
            Direction::Prev
        };
        self.transition_to(target, direction, now)
    }

    /// Jumps back to the appendix table of contents.
    pub fn back_to_toc(&mut self, now: Instant) -> bool {
        self.go_to(self.appendix_toc_index(), now)
    }

    /// Clears the transition guard once the window has elapsed. Returns
    /// whether the phase changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if let Phase::Transitioning { started, .. } = self.phase
            && now.duration_since(started) >= TRANSITION
        {
            self.phase = Phase::Idle;
            return true;
        }
        false
    }

    /// Fraction of the current transition that has elapsed, in `0.0..=1.0`.
    /// Returns 1.0 when idle. Animation input only.
    pub fn transition_progress(&self, now: Instant) -> f64 {
        match self.phase {
            Phase::Idle => 1.0,
            Phase::Transitioning { started, .. } => {
                (now.duration_since(started).as_secs_f64() / TRANSITION.as_secs_f64()).min(1.0)
            }
        }
    }

    /// Visibility of `index` relative to the active slide.
    pub fn visibility(&self, index: usize) -> Visibility {
        match index.cmp(&self.current) {
            std::cmp::Ordering::Less => Visibility::Before,
            std::cmp::Ordering::Equal => Visibility::Active,
            std::cmp::Ordering::Greater => Visibility::After,
        }
    }

    fn transition_to(&mut self, target: usize, direction: Direction, now: Instant) -> bool {
        if self.is_transitioning() {
            return false;
        }
        self.phase = Phase::Transitioning {
            direction,
            from: self.current,
            started: now,
        };
        self.current = target;
        true
    }
}

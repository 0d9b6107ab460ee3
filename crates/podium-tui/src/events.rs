//! UI event types.
//!
//! All external inputs are converted to `UiEvent` before being processed
//! by the reducer. There are no async sources here; the only clock is the
//! runtime's tick cadence.

use std::time::Instant;

use crossterm::event::Event as CrosstermEvent;

/// Events processed by the reducer.
#[derive(Debug)]
pub enum UiEvent {
    /// Fixed-cadence tick. Carries the time it fired so the transition
    /// guard can be advanced deterministically in tests.
    Tick(Instant),
    /// Current terminal size, prepended once per loop iteration so
    /// click-zone math always sees the live width.
    Frame { width: u16, height: u16 },
    /// Raw terminal input.
    Terminal(CrosstermEvent),
}

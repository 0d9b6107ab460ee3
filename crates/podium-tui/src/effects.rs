//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime
//! executes. The reducer only mutates state; anything that touches the
//! outside world goes through an effect.

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEffect {
    /// Quit the presenter.
    Quit,
}

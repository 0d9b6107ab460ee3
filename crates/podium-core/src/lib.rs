//! Deck model and slide navigation state machine for podium.
//!
//! This crate has no UI dependencies. The navigator takes time as an
//! explicit `Instant` argument so the transition guard can be tested
//! without sleeping.

pub mod deck;
pub mod input;
pub mod navigator;

pub use deck::{Deck, Slide, SlideKind};
pub use input::{NavCommand, click_zone};
pub use navigator::{Direction, Navigator, Phase, TRANSITION, Visibility};

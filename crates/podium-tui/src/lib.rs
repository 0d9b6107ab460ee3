//! Full-screen presenter TUI for podium.

pub mod effects;
pub mod events;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, stdout};

use anyhow::Result;
use podium_core::Deck;
pub use runtime::TuiRuntime;
pub use state::PresenterOptions;

/// Runs the presenter until the user quits.
pub fn present(deck: Deck, options: &PresenterOptions) -> Result<()> {
    if !stdout().is_terminal() {
        anyhow::bail!("podium requires a terminal");
    }

    let mut runtime = TuiRuntime::new(deck, options)?;
    runtime.run()
}

//! Presenter runtime - owns the terminal, runs the event loop, executes
//! effects.
//!
//! The reducer stays pure and produces effects; this module executes
//! them. The only asynchrony in the presenter is the deferred clearing of
//! the transition guard, and that deadline lives inside the navigator
//! value itself - dropping the runtime mid-transition cannot leak a timer
//! callback into freed state.

use std::io::Stdout;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use podium_core::Deck;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::{AppState, PresenterOptions};
use crate::{render, terminal, update};

/// Tick cadence while a transition animates (~60fps).
pub const FRAME_DURATION: Duration = Duration::from_millis(16);

/// Poll duration when idle. Longer timeout reduces CPU usage when
/// nothing is animating.
pub const IDLE_POLL_DURATION: Duration = Duration::from_millis(100);

/// Full-screen presenter runtime.
///
/// Owns the terminal and state. Terminal state is guaranteed to be
/// restored on drop or panic.
pub struct TuiRuntime {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    pub state: AppState,
    last_tick: Instant,
}

impl TuiRuntime {
    /// Creates a runtime: installs the panic hook, enters the alternate
    /// screen, and builds the initial state.
    pub fn new(deck: Deck, options: &PresenterOptions) -> Result<Self> {
        terminal::install_panic_hook();
        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;
        Ok(Self {
            terminal,
            state: AppState::new(deck, options),
            last_tick: Instant::now(),
        })
    }

    /// Runs the main event loop until the user quits.
    pub fn run(&mut self) -> Result<()> {
        terminal::enable_mouse_capture()?;
        let result = self.event_loop();
        let _ = terminal::disable_mouse_capture();
        result
    }

    fn event_loop(&mut self) -> Result<()> {
        let mut dirty = true; // Start dirty to ensure initial render

        while !self.state.should_quit {
            let mut events = self.collect_events()?;

            // Prepend Frame with the current terminal size so click-zone
            // math never runs against a stale width.
            let size = self.terminal.size()?;
            events.insert(
                0,
                UiEvent::Frame {
                    width: size.width,
                    height: size.height,
                },
            );

            for event in events {
                let marks_dirty = matches!(&event, UiEvent::Tick(_) | UiEvent::Terminal(_));
                let effects = update::update(&mut self.state, event);
                if marks_dirty {
                    dirty = true;
                }
                self.execute_effects(effects);
            }

            if dirty {
                let now = Instant::now();
                self.terminal.draw(|frame| {
                    render::render(&self.state, frame, now);
                })?;
                dirty = false;
            }
        }

        Ok(())
    }

    /// Collects terminal events and the tick.
    ///
    /// Uses the fast cadence while a transition is animating and slow
    /// polling otherwise; the poll blocks until the next tick is due so
    /// input stays responsive without spinning.
    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();

        let tick_interval = if self.state.nav.is_transitioning() {
            FRAME_DURATION
        } else {
            IDLE_POLL_DURATION
        };

        let poll_duration = tick_interval.saturating_sub(self.last_tick.elapsed());
        if event::poll(poll_duration)? {
            events.push(UiEvent::Terminal(event::read()?));
            // Drain any remaining buffered events (non-blocking)
            while event::poll(Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        if self.last_tick.elapsed() >= tick_interval {
            let now = Instant::now();
            events.push(UiEvent::Tick(now));
            self.last_tick = now;
        }

        Ok(events)
    }

    fn execute_effects(&mut self, effects: Vec<UiEffect>) {
        for effect in effects {
            match effect {
                UiEffect::Quit => self.state.should_quit = true,
            }
        }
    }
}

impl Drop for TuiRuntime {
    fn drop(&mut self) {
        let _ = terminal::restore_terminal();
    }
}

//! Application state for the presenter.
//!
//! State is created when the presenter mounts and discarded when it
//! unmounts; nothing is persisted across sessions. The navigator is the
//! only piece with real transition rules; everything else is plumbing
//! for input routing.

use std::cell::RefCell;

use podium_core::{Deck, NavCommand, Navigator};
use ratatui::layout::Rect;

/// Startup options for the presenter.
#[derive(Debug, Clone, Copy, Default)]
pub struct PresenterOptions {
    /// Slide index to start on, clamped into range.
    pub start: usize,
    /// Start with the chrome hidden.
    pub fullscreen: bool,
}

/// Presenter state.
pub struct AppState {
    pub deck: Deck,
    pub nav: Navigator,
    /// Flag indicating the presenter should quit.
    pub should_quit: bool,
    /// Chrome hidden, slide owns the whole viewport.
    pub fullscreen: bool,
    /// Terminal size as of the latest frame, for click-zone math.
    pub surface: (u16, u16),
    /// Interactive rects recorded during render (mouse click routing).
    pub hit: HitAreas,
}

impl AppState {
    pub fn new(deck: Deck, options: &PresenterOptions) -> Self {
        let nav =
            Navigator::new(deck.len(), deck.content_slide_count()).with_start(options.start);
        Self {
            deck,
            nav,
            should_quit: false,
            fullscreen: options.fullscreen,
            surface: (0, 0),
            hit: HitAreas::default(),
        }
    }
}

/// Interactive screen regions, rebuilt on every render.
///
/// Render functions take `&AppState`, so the backing store uses interior
/// mutability. A click landing on one of these rects dispatches the
/// recorded command instead of the bare-surface zone mapping.
#[derive(Default)]
pub struct HitAreas {
    areas: RefCell<Vec<(Rect, NavCommand)>>,
}

impl HitAreas {
    pub fn clear(&self) {
        self.areas.borrow_mut().clear();
    }

    pub fn push(&self, rect: Rect, command: NavCommand) {
        self.areas.borrow_mut().push((rect, command));
    }

    /// Command under the given screen cell, topmost first.
    pub fn command_at(&self, x: u16, y: u16) -> Option<NavCommand> {
        self.areas
            .borrow()
            .iter()
            .rev()
            .find(|(rect, _)| {
                x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
            })
            .map(|(_, command)| *command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_areas_route_topmost_first() {
        let hit = HitAreas::default();
        hit.push(Rect::new(0, 0, 10, 10), NavCommand::Next);
        hit.push(Rect::new(2, 2, 2, 2), NavCommand::GoTo(7));

        assert_eq!(hit.command_at(3, 3), Some(NavCommand::GoTo(7)));
        assert_eq!(hit.command_at(0, 0), Some(NavCommand::Next));
        assert_eq!(hit.command_at(10, 10), None);

        hit.clear();
        assert_eq!(hit.command_at(3, 3), None);
    }

    #[test]
    fn start_index_is_clamped() {
        let deck = Deck::sample();
        let last = deck.len() - 1;
        let app = AppState::new(
            deck,
            &PresenterOptions {
                start: 999,
                fullscreen: false,
            },
        );
        assert_eq!(app.nav.current(), last);
    }
}

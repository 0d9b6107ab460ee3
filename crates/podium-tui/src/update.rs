//! Presenter reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.
//!
//! Every input either produces a valid transition or a silent no-op:
//! out-of-range jumps, navigation during a transition, and clicks on
//! non-navigational cells are all defined as no-ops, never errors.

use std::time::Instant;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use podium_core::{NavCommand, click_zone};

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;

/// The main reducer function.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick(now) => {
            app.nav.tick(now);
            vec![]
        }
        UiEvent::Frame { width, height } => {
            app.surface = (width, height);
            vec![]
        }
        UiEvent::Terminal(event) => handle_terminal_event(app, event),
    }
}

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) => handle_key(app, key),
        Event::Mouse(mouse) => handle_mouse(app, mouse),
        // Resize is picked up by the next Frame event.
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    if key.kind == KeyEventKind::Release {
        return vec![];
    }
    match key_command(key) {
        Some(command) => dispatch(app, command),
        None => vec![],
    }
}

/// Keyboard mapping: right/space/enter advance, left goes back, `f`
/// toggles fullscreen, `q`/Esc/Ctrl+C quit.
fn key_command(key: KeyEvent) -> Option<NavCommand> {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(NavCommand::Quit)
        }
        KeyCode::Right | KeyCode::Char(' ') | KeyCode::Enter => Some(NavCommand::Next),
        KeyCode::Left => Some(NavCommand::Previous),
        KeyCode::Char('f') | KeyCode::Char('F') => Some(NavCommand::ToggleFullscreen),
        KeyCode::Char('q') | KeyCode::Esc => Some(NavCommand::Quit),
        _ => None,
    }
}

fn handle_mouse(app: &mut AppState, mouse: MouseEvent) -> Vec<UiEffect> {
    if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
        return vec![];
    }

    // Interactive elements consume the click entirely; only clicks on the
    // bare surface fall through to the zone mapping.
    let command = app
        .hit
        .command_at(mouse.column, mouse.row)
        .unwrap_or_else(|| click_zone(mouse.column, app.surface.0));
    dispatch(app, command)
}

fn dispatch(app: &mut AppState, command: NavCommand) -> Vec<UiEffect> {
    let now = Instant::now();
    match command {
        NavCommand::Next => {
            app.nav.next(now);
        }
        NavCommand::Previous => {
            app.nav.previous(now);
        }
        NavCommand::GoTo(index) => {
            app.nav.go_to(index, now);
        }
        NavCommand::ToggleFullscreen => {
            // Independent of slide position; does not touch the guard.
            app.fullscreen = !app.fullscreen;
        }
        NavCommand::Quit => return vec![UiEffect::Quit],
    }
    vec![]
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyEventState;
    use podium_core::{Deck, TRANSITION};
    use ratatui::layout::Rect;

    use super::*;
    use crate::state::PresenterOptions;

    fn app() -> AppState {
        AppState::new(Deck::sample(), &PresenterOptions::default())
    }

    fn key(code: KeyCode) -> UiEvent {
        UiEvent::Terminal(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn click(column: u16, row: u16) -> UiEvent {
        UiEvent::Terminal(Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }))
    }

    /// Lets the pending transition finish.
    fn settle(app: &mut AppState) {
        update(app, UiEvent::Tick(Instant::now() + TRANSITION));
    }

    #[test]
    fn arrow_right_advances() {
        let mut app = app();
        update(&mut app, key(KeyCode::Right));
        assert_eq!(app.nav.current(), 1);
    }

    #[test]
    fn space_and_enter_advance() {
        let mut app = app();
        update(&mut app, key(KeyCode::Char(' ')));
        settle(&mut app);
        update(&mut app, key(KeyCode::Enter));
        assert_eq!(app.nav.current(), 2);
    }

    #[test]
    fn second_press_inside_transition_window_is_dropped() {
        let mut app = app();
        update(&mut app, key(KeyCode::Right));
        update(&mut app, key(KeyCode::Right));
        assert_eq!(app.nav.current(), 1);

        settle(&mut app);
        update(&mut app, key(KeyCode::Right));
        assert_eq!(app.nav.current(), 2);
    }

    #[test]
    fn arrow_left_goes_back() {
        let mut app = app();
        update(&mut app, key(KeyCode::Right));
        settle(&mut app);
        update(&mut app, key(KeyCode::Left));
        assert_eq!(app.nav.current(), 0);
    }

    #[test]
    fn fullscreen_toggle_leaves_navigation_alone() {
        let mut app = app();
        update(&mut app, key(KeyCode::Char('f')));
        assert!(app.fullscreen);
        assert_eq!(app.nav.current(), 0);
        assert!(!app.nav.is_transitioning());

        update(&mut app, key(KeyCode::Char('F')));
        assert!(!app.fullscreen);
    }

    #[test]
    fn quit_keys_emit_quit() {
        let mut app = app();
        assert_eq!(update(&mut app, key(KeyCode::Char('q'))), vec![UiEffect::Quit]);
        assert_eq!(update(&mut app, key(KeyCode::Esc)), vec![UiEffect::Quit]);
    }

    #[test]
    fn key_release_is_ignored() {
        let mut app = app();
        let release = KeyEvent {
            code: KeyCode::Right,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        update(&mut app, UiEvent::Terminal(Event::Key(release)));
        assert_eq!(app.nav.current(), 0);
    }

    #[test]
    fn bare_surface_click_maps_by_zone() {
        let mut app = app();
        update(
            &mut app,
            UiEvent::Frame {
                width: 100,
                height: 40,
            },
        );

        // Right 80%: advance.
        update(&mut app, click(50, 20));
        assert_eq!(app.nav.current(), 1);
        settle(&mut app);

        // Left 20%: go back.
        update(&mut app, click(10, 20));
        assert_eq!(app.nav.current(), 0);
    }

    #[test]
    fn interactive_element_consumes_the_click() {
        let mut app = app();
        update(
            &mut app,
            UiEvent::Frame {
                width: 100,
                height: 40,
            },
        );
        // A progress segment in the left fifth of the screen.
        app.hit.push(Rect::new(5, 39, 2, 1), NavCommand::GoTo(4));

        update(&mut app, click(5, 39));
        // Jumped instead of going back.
        assert_eq!(app.nav.current(), 4);
    }
}

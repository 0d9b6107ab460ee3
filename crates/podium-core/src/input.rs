//! Navigation commands and click-surface geometry.
//!
//! Key and mouse events are translated at the UI boundary into
//! [`NavCommand`]s; only the surface geometry lives here so it can be
//! tested without a terminal.

/// A navigation request produced from user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCommand {
    Next,
    Previous,
    GoTo(usize),
    ToggleFullscreen,
    Quit,
}

/// Maps a click on the bare slide surface to a command.
///
/// The left 20% of the surface goes back, the rest advances. Clicks on
/// interactive elements (chevrons, progress segments, jump links) never
/// reach this function; hit testing consumes them first.
pub fn click_zone(x: u16, width: u16) -> NavCommand {
    // x < width * 0.2, kept in integer arithmetic
    if u32::from(x) * 5 < u32::from(width) {
        NavCommand::Previous
    } else {
        NavCommand::Next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_fifth_goes_back_rest_advances() {
        assert_eq!(click_zone(0, 100), NavCommand::Previous);
        assert_eq!(click_zone(19, 100), NavCommand::Previous);
        assert_eq!(click_zone(20, 100), NavCommand::Next);
        assert_eq!(click_zone(99, 100), NavCommand::Next);
    }

    #[test]
    fn boundary_holds_for_narrow_surfaces() {
        assert_eq!(click_zone(1, 10), NavCommand::Previous);
        assert_eq!(click_zone(2, 10), NavCommand::Next);
        // Degenerate width: everything advances.
        assert_eq!(click_zone(0, 0), NavCommand::Next);
    }
}

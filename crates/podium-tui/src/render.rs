//! Pure view/render functions for the presenter.
//!
//! Functions here take `&AppState` by immutable reference, draw to a
//! ratatui Frame, and never return effects. The one piece of interior
//! mutability is `HitAreas`: render is the only place that knows where
//! interactive elements land, so it records their rects for mouse
//! routing in the reducer.

use std::time::Instant;

use podium_core::{Direction, NavCommand, Phase, SlideKind};
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::state::AppState;

/// Chrome rows below the slide: progress segments, then hint/counter.
const FOOTER_HEIGHT: u16 = 2;

/// Width of one progress segment plus its trailing gap.
const SEGMENT_STRIDE: u16 = 3;

/// Renders the entire presenter to the frame.
pub fn render(app: &AppState, frame: &mut Frame, now: Instant) {
    app.hit.clear();
    let area = frame.area();

    let footer_height = if app.fullscreen {
        0
    } else {
        FOOTER_HEIGHT.min(area.height)
    };
    let slide_area = Rect {
        height: area.height - footer_height,
        ..area
    };
    let footer = Rect {
        y: area.y + slide_area.height,
        height: footer_height,
        ..area
    };

    render_slides(app, frame, slide_area, now);
    if !app.fullscreen {
        render_chevrons(app, frame, slide_area);
        render_footer(app, frame, footer);
    }
}

/// Draws the active slide, or the outgoing/incoming pair while a
/// transition is in flight. Direction selects which edge the incoming
/// slide grows from.
fn render_slides(app: &AppState, frame: &mut Frame, area: Rect, now: Instant) {
    let nav = &app.nav;
    let progress = nav.transition_progress(now);

    if let Phase::Transitioning {
        direction, from, ..
    } = nav.phase()
        && progress < 1.0
    {
        let offset = ((progress * f64::from(area.width)) as u16).min(area.width);
        let (incoming, outgoing) = match direction {
            Direction::Next => (
                Rect {
                    x: area.x + area.width - offset,
                    width: offset,
                    ..area
                },
                Rect {
                    x: area.x,
                    width: area.width - offset,
                    ..area
                },
            ),
            Direction::Prev => (
                Rect {
                    x: area.x,
                    width: offset,
                    ..area
                },
                Rect {
                    x: area.x + offset,
                    width: area.width - offset,
                    ..area
                },
            ),
        };
        if outgoing.width > 0 {
            render_slide(app, frame, from, outgoing);
        }
        if incoming.width > 0 {
            render_slide(app, frame, nav.current(), incoming);
        }
    } else {
        render_slide(app, frame, nav.current(), area);
    }
}

fn render_slide(app: &AppState, frame: &mut Frame, index: usize, area: Rect) {
    let Some(slide) = app.deck.get(index) else {
        return;
    };

    let title_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let link_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::UNDERLINED);

    let mut lines: Vec<Line<'static>> =
        vec![Line::from(Span::styled(slide.title.clone(), title_style))];
    if !slide.body.is_empty() {
        lines.push(Line::default());
        for body_line in &slide.body {
            lines.push(Line::from(body_line.clone()));
        }
    }

    // Jump links: (line index, label, command), registered as hit areas below.
    let mut links: Vec<(usize, String, NavCommand)> = Vec::new();
    match slide.kind {
        SlideKind::AppendixTitle => {
            for (target, title) in app.deck.appendix_entries() {
                lines.push(Line::default());
                let label = format!("{title} ›");
                lines.push(Line::from(Span::styled(label.clone(), link_style)));
                links.push((lines.len() - 1, label, NavCommand::GoTo(target)));
            }
        }
        SlideKind::Appendix => {
            lines.push(Line::default());
            let label = "‹ back to table of contents".to_string();
            lines.push(Line::from(Span::styled(label.clone(), link_style)));
            links.push((
                lines.len() - 1,
                label,
                NavCommand::GoTo(app.nav.appendix_toc_index()),
            ));
        }
        SlideKind::Content => {}
    }

    let top_pad = area.height.saturating_sub(lines.len() as u16) / 2;

    // Links are interactive only on the settled, full-width slide. During
    // a transition clicks are guarded anyway.
    if index == app.nav.current() && !app.nav.is_transitioning() {
        for (line_index, label, command) in &links {
            let width = label.as_str().width() as u16;
            let x = area.x + area.width.saturating_sub(width) / 2;
            let y = area.y + top_pad + *line_index as u16;
            if y < area.y + area.height {
                app.hit.push(Rect::new(x, y, width.max(1), 1), *command);
            }
        }
    }

    let content = Rect {
        y: area.y + top_pad,
        height: area.height - top_pad,
        ..area
    };
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), content);
}

/// Prev/next chevrons at the vertical center of the slide area. Dimmed
/// and non-interactive at the ends of the deck, so a click there falls
/// through to the surface zone mapping (itself a no-op at the bound).
fn render_chevrons(app: &AppState, frame: &mut Frame, area: Rect) {
    if area.width < 6 || area.height == 0 {
        return;
    }
    let nav = &app.nav;
    let mid_y = area.y + area.height / 2;
    let dim = Style::default().fg(Color::DarkGray);
    let lit = Style::default().fg(Color::Gray);

    let left = Rect::new(area.x + 1, mid_y, 1, 1);
    let left_style = if nav.current() == 0 { dim } else { lit };
    frame.render_widget(Paragraph::new("‹").style(left_style), left);
    if nav.current() > 0 {
        app.hit.push(
            Rect::new(area.x, mid_y.saturating_sub(1), 3, 3),
            NavCommand::Previous,
        );
    }

    let right = Rect::new(area.x + area.width - 2, mid_y, 1, 1);
    let right_style = if nav.current() + 1 == nav.len() {
        dim
    } else {
        lit
    };
    frame.render_widget(Paragraph::new("›").style(right_style), right);
    if nav.current() + 1 < nav.len() {
        app.hit.push(
            Rect::new(area.x + area.width - 3, mid_y.saturating_sub(1), 3, 3),
            NavCommand::Next,
        );
    }
}

/// Progress segments (main deck only), slide counter, fullscreen toggle
/// and key hint.
fn render_footer(app: &AppState, frame: &mut Frame, footer: Rect) {
    if footer.height == 0 {
        return;
    }
    let nav = &app.nav;
    let dim = Style::default().fg(Color::DarkGray);
    let active = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);

    // Row 0: one clickable segment per main-deck slide. Appendix slides
    // are excluded from the row by design.
    let count = nav.content_slide_count() as u16;
    let total_width = count * SEGMENT_STRIDE;
    let start_x = footer.x + footer.width.saturating_sub(total_width) / 2;
    for i in 0..count {
        let x = start_x + i * SEGMENT_STRIDE;
        if x + 2 > footer.x + footer.width {
            break;
        }
        let segment = Rect::new(x, footer.y, 2, 1);
        let style = if usize::from(i) == nav.current() {
            active
        } else {
            dim
        };
        frame.render_widget(Paragraph::new("━━").style(style), segment);
        app.hit.push(segment, NavCommand::GoTo(usize::from(i)));
    }

    if footer.height < 2 {
        return;
    }
    let row = Rect::new(footer.x, footer.y + 1, footer.width, 1);

    // Counter bottom-right, fullscreen toggle just left of it.
    let counter = format!("{} / {}", nav.current() + 1, nav.len());
    let counter_width = counter.as_str().width() as u16;
    if row.width > counter_width + 6 {
        let counter_x = row.x + row.width - counter_width - 1;
        frame.render_widget(
            Paragraph::new(counter).style(dim),
            Rect::new(counter_x, row.y, counter_width, 1),
        );

        let toggle = Rect::new(counter_x - 4, row.y, 3, 1);
        frame.render_widget(Paragraph::new("[f]").style(dim), toggle);
        app.hit.push(toggle, NavCommand::ToggleFullscreen);
    }

    // Key hint bottom-left.
    let hint = "click to advance · arrows to navigate · q to quit";
    let hint_width = (hint.width() as u16).min(row.width.saturating_sub(counter_width + 6));
    if hint_width > 0 {
        frame.render_widget(
            Paragraph::new(hint).style(dim),
            Rect::new(row.x + 1, row.y, hint_width, 1),
        );
    }
}

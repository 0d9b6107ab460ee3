//! Deck model.
//!
//! A deck is an ordered, session-immutable list of slides plus a fixed
//! boundary separating the main deck from the appendix. Slide content is
//! opaque to the navigator; the kinds exist only so the UI can render the
//! appendix table of contents and its jump links.
//!
//! Decks load from TOML files:
//!
//! ```toml
//! content-slides = 2
//!
//! [[slide]]
//! title = "Opening"
//! body = ["first line", "second line"]
//!
//! [[slide]]
//! title = "Closing"
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;

/// Role of a slide within the deck layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SlideKind {
    /// Ordinary slide (main deck or divider).
    #[default]
    Content,
    /// The appendix table of contents. Must sit at `content_slide_count + 1`.
    AppendixTitle,
    /// Appendix slide; renders a "back to table of contents" link.
    Appendix,
}

/// One unit of content occupying the single active-display slot.
#[derive(Debug, Clone, Deserialize)]
pub struct Slide {
    pub title: String,
    #[serde(default)]
    pub body: Vec<String>,
    #[serde(default)]
    pub kind: SlideKind,
}

impl Slide {
    pub fn new(title: impl Into<String>, body: &[&str]) -> Self {
        Self {
            title: title.into(),
            body: body.iter().map(|line| (*line).to_string()).collect(),
            kind: SlideKind::Content,
        }
    }

    pub fn with_kind(mut self, kind: SlideKind) -> Self {
        self.kind = kind;
        self
    }
}

/// An ordered slide list, constructed once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct Deck {
    slides: Vec<Slide>,
    content_slide_count: usize,
}

#[derive(Deserialize)]
struct DeckFile {
    /// Number of main-deck slides. Defaults to the whole deck.
    #[serde(rename = "content-slides")]
    content_slides: Option<usize>,
    #[serde(rename = "slide", default)]
    slides: Vec<Slide>,
}

impl Deck {
    /// Validates and builds a deck.
    ///
    /// `content_slide_count` is the number of main-deck slides. The
    /// appendix table of contents, when present, must sit at index
    /// `content_slide_count + 1` (one divider slide after the main deck),
    /// because that is where "back to table of contents" jumps land.
    pub fn new(slides: Vec<Slide>, content_slide_count: usize) -> Result<Self> {
        if slides.is_empty() {
            bail!("deck has no slides");
        }
        if content_slide_count == 0 || content_slide_count > slides.len() {
            bail!(
                "content-slides must be in 1..={}, got {content_slide_count}",
                slides.len()
            );
        }

        let toc_positions: Vec<usize> = slides
            .iter()
            .enumerate()
            .filter(|(_, slide)| slide.kind == SlideKind::AppendixTitle)
            .map(|(i, _)| i)
            .collect();
        match toc_positions.as_slice() {
            [] => {}
            [index] if *index == content_slide_count + 1 => {}
            [index] => bail!(
                "appendix table of contents is at index {index}, expected {}",
                content_slide_count + 1
            ),
            _ => bail!("deck has more than one appendix table of contents"),
        }

        Ok(Self {
            slides,
            content_slide_count,
        })
    }

    /// Parses a deck from TOML.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let file: DeckFile = toml::from_str(text).context("invalid deck file")?;
        let count = file.content_slides.unwrap_or(file.slides.len());
        Self::new(file.slides, count)
    }

    /// Loads a deck from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read deck file {}", path.display()))?;
        Self::from_toml_str(&text)
            .with_context(|| format!("failed to parse deck file {}", path.display()))
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn content_slide_count(&self) -> usize {
        self.content_slide_count
    }

    /// Appendix slide indices paired with their titles, for the table of
    /// contents. Empty for decks without an appendix.
    pub fn appendix_entries(&self) -> Vec<(usize, &str)> {
        self.slides
            .iter()
            .enumerate()
            .filter(|(_, slide)| slide.kind == SlideKind::Appendix)
            .map(|(i, slide)| (i, slide.title.as_str()))
            .collect()
    }

    /// Built-in demo deck, used when no deck file is given.
    pub fn sample() -> Self {
        let slides = vec![
            Slide::new("podium", &["a slide deck presenter for the terminal"]),
            Slide::new(
                "Keyboard navigation",
                &[
                    "right arrow, space or enter advance",
                    "left arrow goes back",
                    "f toggles fullscreen, q quits",
                ],
            ),
            Slide::new(
                "Mouse navigation",
                &[
                    "click the left fifth of the screen to go back",
                    "click anywhere else to advance",
                    "progress segments jump straight to a slide",
                ],
            ),
            Slide::new(
                "Progress",
                &[
                    "the segments below track the main deck",
                    "appendix slides stay out of the row",
                ],
            ),
            Slide::new(
                "Transitions",
                &[
                    "slides hand off over 600 milliseconds",
                    "input during the handoff is dropped, not queued",
                ],
            ),
            Slide::new("The end", &["the appendix follows"]),
            Slide::new("Appendix", &["click an entry to jump to it"])
                .with_kind(SlideKind::AppendixTitle),
            Slide::new(
                "Deck files",
                &["decks are plain TOML", "podium my-deck.toml"],
            )
            .with_kind(SlideKind::Appendix),
            Slide::new(
                "Logging",
                &["pass --log-file to trace to disk", "RUST_LOG picks the level"],
            )
            .with_kind(SlideKind::Appendix),
        ];
        // Fixed layout, kept in step with the validation rules by the
        // sample_deck_is_well_formed test.
        Self {
            slides,
            content_slide_count: 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn parses_a_minimal_deck() {
        let deck = Deck::from_toml_str(
            r#"
            [[slide]]
            title = "Only"
            body = ["one line"]
            "#,
        )
        .unwrap();

        assert_eq!(deck.len(), 1);
        assert_eq!(deck.content_slide_count(), 1);
        assert_eq!(deck.get(0).unwrap().title, "Only");
        assert_eq!(deck.get(0).unwrap().kind, SlideKind::Content);
    }

    #[test]
    fn rejects_an_empty_deck() {
        assert!(Deck::from_toml_str("").is_err());
    }

    #[test]
    fn rejects_out_of_range_content_slide_count() {
        let text = r#"
            content-slides = 3

            [[slide]]
            title = "Only"
        "#;
        assert!(Deck::from_toml_str(text).is_err());
    }

    #[test]
    fn rejects_misplaced_appendix_toc() {
        let text = r#"
            content-slides = 1

            [[slide]]
            title = "Main"

            [[slide]]
            kind = "appendix-title"
            title = "Appendix"
        "#;
        // TOC at index 1, expected at content_slide_count + 1 == 2.
        assert!(Deck::from_toml_str(text).is_err());
    }

    #[test]
    fn parses_appendix_layout() {
        let text = r#"
            content-slides = 1

            [[slide]]
            title = "Main"

            [[slide]]
            title = "Divider"

            [[slide]]
            kind = "appendix-title"
            title = "Appendix"

            [[slide]]
            kind = "appendix"
            title = "Extra detail"
        "#;
        let deck = Deck::from_toml_str(text).unwrap();

        assert_eq!(deck.content_slide_count(), 1);
        assert_eq!(deck.appendix_entries(), vec![(3, "Extra detail")]);
    }

    #[test]
    fn sample_deck_is_well_formed() {
        let deck = Deck::sample();
        let toc = deck.content_slide_count() + 1;

        assert_eq!(deck.get(toc).unwrap().kind, SlideKind::AppendixTitle);
        for (index, _) in deck.appendix_entries() {
            assert!(index > toc);
        }
    }

    #[test]
    fn loads_from_a_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
            [[slide]]
            title = "From disk"
            "#
        )
        .unwrap();

        let deck = Deck::load(file.path()).unwrap();
        assert_eq!(deck.get(0).unwrap().title, "From disk");
    }

    #[test]
    fn load_reports_missing_file_with_path() {
        let err = Deck::load(Path::new("/nonexistent/deck.toml")).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/deck.toml"));
    }
}

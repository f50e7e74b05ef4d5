//! Terminal view of the quote screen.
//!
//! Holds what would be on screen (the quote label, the author line and the state of
//! the refresh control) and renders it as plain text.
use std::io::{self, Write};

use chrono::{DateTime, Local};

use crate::model::event::Output;

/// Label shown before the first fetch completes.
pub const PLACEHOLDER: &str = "Loading...";

/// Screen state driven by controller outputs.
#[derive(Debug)]
pub struct QuoteView {
    label: String,
    byline: Option<String>,
    refresh_enabled: bool,
    updated_at: Option<DateTime<Local>>,
}

impl Default for QuoteView {
    fn default() -> Self {
        Self {
            label: PLACEHOLDER.to_string(),
            byline: None,
            refresh_enabled: true,
            updated_at: None,
        }
    }
}

impl QuoteView {
    /// Fresh view showing the placeholder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the screen state from one controller output.
    pub fn apply(&mut self, output: &Output) {
        match output {
            Output::FetchSucceeded(quote) => {
                self.label = quote.content.clone();
                self.byline = Some(quote.author.clone());
                self.updated_at = Some(Local::now());
            }
            Output::FetchFailed(error) => {
                self.label = error.to_string();
                self.byline = None;
                self.updated_at = Some(Local::now());
            }
            Output::ToggleRefresh { enabled } => self.refresh_enabled = *enabled,
        }
    }

    /// Text in the quote label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Author of the displayed quote, if a quote is displayed.
    pub fn byline(&self) -> Option<&str> {
        self.byline.as_deref()
    }

    /// Whether the refresh control accepts input.
    pub fn is_refresh_enabled(&self) -> bool {
        self.refresh_enabled
    }

    /// Write the current screen to `out`.
    pub fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "  {}", self.label())?;
        if let Some(author) = self.byline() {
            writeln!(out, "      ~ {author}")?;
        }
        let updated = self
            .updated_at
            .map(|t| t.format("%H:%M:%S").to_string())
            .unwrap_or_else(|| "never".to_string());
        if self.is_refresh_enabled() {
            writeln!(out, "[updated {updated}] Enter/r: refresh  q: quit")?;
        } else {
            writeln!(out, "[updated {updated}] refreshing...")?;
        }
        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote_common::{Quote, QuoteError};

    fn rendered(view: &QuoteView) -> String {
        let mut buf = Vec::new();
        view.render(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn starts_with_placeholder_and_enabled_refresh() {
        let view = QuoteView::new();
        assert_eq!(view.label(), PLACEHOLDER);
        assert_eq!(view.byline(), None);
        assert!(view.is_refresh_enabled());
        assert!(rendered(&view).contains("updated never"));
    }

    #[test]
    fn success_displays_content() {
        let mut view = QuoteView::new();
        view.apply(&Output::FetchSucceeded(Quote {
            content: "The only way out is through.".to_string(),
            author: "Robert Frost".to_string(),
        }));

        assert_eq!(view.label(), "The only way out is through.");
        assert_eq!(view.byline(), Some("Robert Frost"));
        let text = rendered(&view);
        assert!(text.contains("  The only way out is through.\n"));
        assert!(text.contains("~ Robert Frost"));
        assert!(!text.contains("updated never"));
    }

    #[test]
    fn failure_displays_error_text_and_clears_author() {
        let mut view = QuoteView::new();
        view.apply(&Output::FetchSucceeded(Quote {
            content: "old".to_string(),
            author: "someone".to_string(),
        }));
        let err: QuoteError = serde_json::from_str::<Quote>("not json").unwrap_err().into();
        let expected = err.to_string();
        view.apply(&Output::FetchFailed(err));

        assert!(!view.label().is_empty());
        assert_eq!(view.label(), expected);
        assert_eq!(view.byline(), None);
    }

    #[test]
    fn toggle_controls_refresh_state() {
        let mut view = QuoteView::new();
        view.apply(&Output::ToggleRefresh { enabled: false });
        assert!(!view.is_refresh_enabled());
        assert!(rendered(&view).contains("refreshing..."));

        view.apply(&Output::ToggleRefresh { enabled: true });
        assert!(view.is_refresh_enabled());
        assert!(rendered(&view).contains("r: refresh"));
    }
}

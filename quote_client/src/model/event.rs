//! Presentation events.
//!
//! `Input` is what the screen tells the controller, `Output` is what the controller
//! tells the screen. `KeyCommand` is one line typed by the user on stdin.
use quote_common::{Quote, QuoteError};
use strum_macros::{Display, EnumString};

/// Events sent to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Input {
    /// The quote screen was shown for the first time.
    Shown,
    /// The user activated the refresh control.
    RefreshRequested,
}

/// Events emitted by the controller.
#[derive(Debug)]
pub enum Output {
    /// A quote was fetched and decoded.
    FetchSucceeded(Quote),
    /// The fetch failed at the transport or decoding stage.
    FetchFailed(QuoteError),
    /// Enable or disable the refresh control.
    ToggleRefresh {
        /// New state of the control.
        enabled: bool,
    },
}

/// Commands accepted on stdin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum KeyCommand {
    /// Fetch another quote.
    #[strum(serialize = "r", serialize = "refresh")]
    Refresh,
    /// Leave the application.
    #[strum(serialize = "q", serialize = "quit", serialize = "exit")]
    Quit,
}

impl KeyCommand {
    /// Interpret one input line. A blank line (just Enter) means refresh.
    pub fn from_line(line: &str) -> Option<Self> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Some(KeyCommand::Refresh);
        }
        trimmed.parse().ok()
    }
}

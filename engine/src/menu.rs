//! Menu actions and selection parsing.
//!
//! The console renders the menu from [`MENU`] and parses each input line
//! with [`MenuAction::parse`]; everything stateful happens in
//! [`crate::Session`].

use thiserror::Error;

/// One selectable action in the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    EnterCode,
    EncryptAndVerify,
    Decrypt,
    DisplayCounters,
    Exit,
}

/// A menu line: the selection number and its label.
#[derive(Debug, Clone, Copy)]
pub struct MenuEntry {
    pub selection: u8,
    pub action: MenuAction,
    pub label: &'static str,
}

/// The main menu, in display order.
pub const MENU: &[MenuEntry] = &[
    MenuEntry {
        selection: 1,
        action: MenuAction::EnterCode,
        label: "Enter any code",
    },
    MenuEntry {
        selection: 2,
        action: MenuAction::EncryptAndVerify,
        label: "Encrypt the entered code and verify it against the authorised code",
    },
    MenuEntry {
        selection: 3,
        action: MenuAction::Decrypt,
        label: "Decrypt the code",
    },
    MenuEntry {
        selection: 4,
        action: MenuAction::DisplayCounters,
        label: "Display successful and unsuccessful match counts",
    },
    MenuEntry {
        selection: 5,
        action: MenuAction::Exit,
        label: "Exit the program",
    },
];

/// Why a menu selection was rejected.
///
/// The console reports every variant with the same generic message and
/// re-prompts; the variants exist for logs and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("empty selection")]
    Empty,
    #[error("selection is not a number")]
    NotANumber,
    #[error("selection {0} is outside the menu range")]
    OutOfRange(u32),
    #[error("unexpected input after the selection number")]
    TrailingInput,
}

impl MenuAction {
    /// Parse one input line (without its trailing newline) into an action.
    ///
    /// Leading whitespace is tolerated; anything after the number on the
    /// same line rejects the whole selection with no state change.
    pub fn parse(line: &str) -> Result<Self, SelectionError> {
        let trimmed = line.trim_start();
        if trimmed.is_empty() {
            return Err(SelectionError::Empty);
        }

        let digits_end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        if digits_end == 0 {
            return Err(SelectionError::NotANumber);
        }
        if digits_end < trimmed.len() {
            return Err(SelectionError::TrailingInput);
        }

        let value: u32 = trimmed.parse().map_err(|_| SelectionError::NotANumber)?;
        MENU.iter()
            .find(|entry| u32::from(entry.selection) == value)
            .map(|entry| entry.action)
            .ok_or(SelectionError::OutOfRange(value))
    }
}

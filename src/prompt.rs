//! Interactive prompt for the stylesheet identifier

use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;

use crate::detectors::imports::is_valid_identifier;
use crate::error::{BemError, Result};

/// Invalid entries accepted before the prompt gives up
pub const MAX_ATTEMPTS: usize = 3;

/// Whether someone is at the terminal to answer a prompt
pub fn can_prompt() -> bool {
    console::user_attended_stderr()
}

/// Ask for the identifier to bind the stylesheet module to.
///
/// Empty input cancels, as do [`MAX_ATTEMPTS`] invalid entries in a row.
pub fn ask_identifier(default: &str) -> Result<String> {
    let theme = ColorfulTheme::default();
    for attempt in 1..=MAX_ATTEMPTS {
        let answer: String = Input::with_theme(&theme)
            .with_prompt("No CSS module import found. Identifier for the stylesheet (empty to cancel)")
            .with_initial_text(default)
            .allow_empty(true)
            .interact_text()?;

        let answer = answer.trim();
        if answer.is_empty() {
            return Err(BemError::Cancelled);
        }
        if is_valid_identifier(answer) {
            return Ok(answer.to_string());
        }
        tracing::warn!(attempt, identifier = answer, "invalid identifier");
        console::Term::stderr()
            .write_line(&format!("{:?} is not a valid identifier", answer))
            .map_err(BemError::Io)?;
    }
    Err(BemError::Cancelled)
}

//! # survey-radio-ratatui
//!
//! Terminal rendering for survey radio groups.
//!
//! - [`RadioList`] is a ratatui `StatefulWidget` that draws a group's view.
//! - [`handle_key`] turns key presses into highlight moves and selection events.
//! - [`RadioPrompt`] runs one group full-screen until the user picks an option.
//!
//! Navigate with Up/Down (or k/j), select with Space or Enter, jump straight
//! to an option with 1-9, cancel with Esc.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use survey_radio::{RadioButtons, RadioOption};
//! use survey_radio_ratatui::RadioPrompt;
//!
//! fn main() -> anyhow::Result<()> {
//!     let options = [RadioOption::new("Yes", "yes"), RadioOption::new("No", "no")];
//!     let mut answer = String::new();
//!     let current = answer.clone();
//!     let mut group = RadioButtons::new(
//!         &current,
//!         |_group: &str, selected: &str| answer = selected.to_string(),
//!         "agree",
//!         "Do you agree?",
//!         &options,
//!     );
//!     RadioPrompt::new().run(&mut group)?;
//!     drop(group);
//!     println!("{answer}");
//!     Ok(())
//! }
//! ```

mod input;
mod prompt;
mod widget;

pub use input::{KeyOutcome, handle_key};
pub use prompt::{RadioPrompt, RatatuiRadioError};
pub use widget::{RadioList, RadioListState, Theme};

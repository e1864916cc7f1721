//! # survey-radio
//!
//! A group of mutually exclusive options bound to one answer of a survey.
//! Host-agnostic.
//!
//! The group never owns the answer. The caller passes the current value on
//! every render and receives selection events through the
//! `update_survey_data` callback, which gets the group's own key and the
//! key of the chosen option.
//!
//! ## Usage
//!
//! ```rust
//! use survey_radio::{RadioButtons, RadioOption};
//!
//! let options = [
//!     RadioOption::new("Small", "small"),
//!     RadioOption::new("Large", "large"),
//! ];
//! let mut answer = String::from("small");
//! let current = answer.clone();
//!
//! let mut group = RadioButtons::new(
//!     &current,
//!     |_group: &str, selected: &str| answer = selected.to_string(),
//!     "size",
//!     "Which size?",
//!     &options,
//! );
//!
//! let view = group.view();
//! assert_eq!(view.question, "Which size?");
//! assert!(view.controls[0].checked);
//!
//! group.select(1).unwrap();
//! drop(group);
//! assert_eq!(answer, "large");
//! ```
//!
//! ## Hosts
//!
//! Rendering hosts are separate crates that consume [`GroupView`] and feed
//! selection events back through [`RadioButtons::select`]:
//! - `survey-radio-html` - HTML fragment or document
//! - `survey-radio-egui` - egui widget
//! - `survey-radio-ratatui` - terminal widget and prompt

mod option;
pub use option::RadioOption;

mod view;
pub use view::{ControlView, GroupView};

mod group;
pub use group::RadioButtons;

mod error;
pub use error::RadioGroupError;

// Records callback invocations for tests and demos
mod recorder;
pub use recorder::UpdateRecorder;

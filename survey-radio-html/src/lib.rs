//! # survey-radio-html
//!
//! Renders a radio group as native HTML radio inputs.
//!
//! Every control in a group shares the group's key as its `name`, and
//! carries its option key as `value`. When the browser reports a change,
//! feed that `value` back through
//! [`RadioButtons::select_value`](survey_radio::RadioButtons::select_value).
//!
//! ## Usage
//!
//! ```rust
//! use survey_radio::{RadioButtons, RadioOption};
//! use survey_radio_html::{HtmlOptions, to_html_with_options};
//!
//! let options = [RadioOption::new("A", "a"), RadioOption::new("B", "b")];
//! let group = RadioButtons::new("a", |_: &str, _: &str| {}, "pick", "Pick one", &options);
//!
//! let html = to_html_with_options(&group, &HtmlOptions::new().full_document(false));
//! assert!(html.contains("<p class=\"survey-question\">Pick one</p>"));
//! ```

mod generator;

pub use generator::{HtmlOptions, to_html, to_html_with_options};

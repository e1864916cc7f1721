//! # survey-radio-egui
//!
//! Draws a survey radio group inside an egui `Ui`.
//!
//! egui is immediate mode, which suits the group well: build a
//! [`RadioButtons`](survey_radio::RadioButtons) from the current answer
//! every frame, add the widget, and let the callback update your state.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use survey_radio::{RadioButtons, RadioOption};
//! use survey_radio_egui::RadioGroupWidget;
//!
//! fn ui(ui: &mut egui::Ui, answer: &mut String, options: &[RadioOption]) {
//!     let current = answer.clone();
//!     let mut group = RadioButtons::new(
//!         &current,
//!         |_group: &str, selected: &str| *answer = selected.to_string(),
//!         "size",
//!         "Which size?",
//!         options,
//!     );
//!     ui.add(RadioGroupWidget::new(&mut group));
//! }
//! ```

mod widget;

pub use widget::{EguiOptions, RadioGroupWidget, show};

//! Sample radio questions shared by the host crates' tests and demos.

use survey_radio::{RadioButtons, RadioOption};

mod pizza;
pub use pizza::{crust, pizza_order, size};

mod spooky_forest;
pub use spooky_forest::{companion, role, spooky_forest};

/// A question definition: everything a radio group needs except the answer
/// and the callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleQuestion {
    pub value_key: String,
    pub question: String,
    pub options: Vec<RadioOption>,
}

impl SampleQuestion {
    pub fn new<'a>(
        value_key: &str,
        question: &str,
        options: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Self {
        Self {
            value_key: value_key.to_string(),
            question: question.to_string(),
            options: options.into_iter().map(RadioOption::from).collect(),
        }
    }

    /// Bind this question to an answer and a callback.
    pub fn group<'a, F>(&'a self, value: &'a str, update_survey_data: F) -> RadioButtons<'a, F>
    where
        F: FnMut(&str, &str),
    {
        RadioButtons::new(
            value,
            update_survey_data,
            &self.value_key,
            &self.question,
            &self.options,
        )
    }
}

use crate::{ControlView, GroupView, RadioGroupError, RadioOption};

/// A question with a set of mutually exclusive options.
///
/// The group holds no state of its own: `value` is the caller's current
/// answer, and selecting an option only asks the caller to change it by
/// calling `update_survey_data(value_key, selected_key)`.
///
/// Build one per render. Instances share nothing with each other.
pub struct RadioButtons<'a, F>
where
    F: FnMut(&str, &str),
{
    /// Key of the currently chosen option. May match no option.
    value: &'a str,

    /// Called once per selection event with `(value_key, selected_key)`.
    update_survey_data: F,

    /// The group's own identifier within the survey.
    value_key: &'a str,

    /// Question text.
    question: &'a str,

    /// Options in display order.
    options: &'a [RadioOption],
}

impl<'a, F> RadioButtons<'a, F>
where
    F: FnMut(&str, &str),
{
    /// Create a group from its five inputs.
    pub fn new(
        value: &'a str,
        update_survey_data: F,
        value_key: &'a str,
        question: &'a str,
        options: &'a [RadioOption],
    ) -> Self {
        Self {
            value,
            update_survey_data,
            value_key,
            question,
            options,
        }
    }

    /// Get the current answer.
    pub fn value(&self) -> &'a str {
        self.value
    }

    /// Get the group identifier.
    pub fn value_key(&self) -> &'a str {
        self.value_key
    }

    /// Get the question text.
    pub fn question(&self) -> &'a str {
        self.question
    }

    /// Get the options.
    pub fn options(&self) -> &'a [RadioOption] {
        self.options
    }

    /// Render the group.
    ///
    /// Exactly the options whose key equals `value` are checked. A value
    /// matching nothing leaves every control unchecked.
    pub fn view(&self) -> GroupView<'a> {
        log::trace!(
            "Rendering group '{}' with {} options",
            self.value_key,
            self.options.len()
        );

        let controls = self
            .options
            .iter()
            .map(|option| ControlView {
                label: option.name(),
                value: option.value_key(),
                checked: option.value_key() == self.value,
            })
            .collect();

        GroupView {
            question: self.question,
            name: self.value_key,
            controls,
        }
    }

    /// Position of the checked option, if any.
    pub fn checked_index(&self) -> Option<usize> {
        self.options
            .iter()
            .position(|option| option.value_key() == self.value)
    }

    /// Handle a selection event on the control at `index`.
    ///
    /// Calls `update_survey_data` exactly once. Does not compare against the
    /// current value; hosts decide what counts as a selection event.
    pub fn select(&mut self, index: usize) -> Result<(), RadioGroupError> {
        let option = self
            .options
            .get(index)
            .ok_or(RadioGroupError::NoSuchOption {
                index,
                len: self.options.len(),
            })?;

        log::debug!(
            "Group '{}': selected '{}' (was '{}')",
            self.value_key,
            option.value_key(),
            self.value
        );
        (self.update_survey_data)(self.value_key, option.value_key());
        Ok(())
    }

    /// Handle a selection event that carries the control's submitted value.
    ///
    /// With duplicate keys the first matching option wins.
    pub fn select_value(&mut self, value: &str) -> Result<(), RadioGroupError> {
        let index = self
            .options
            .iter()
            .position(|option| option.value_key() == value)
            .ok_or_else(|| RadioGroupError::UnknownValue {
                group: self.value_key.to_string(),
                value: value.to_string(),
            })?;
        self.select(index)
    }
}

impl<F> std::fmt::Debug for RadioButtons<'_, F>
where
    F: FnMut(&str, &str),
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RadioButtons")
            .field("value", &self.value)
            .field("value_key", &self.value_key)
            .field("question", &self.question)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

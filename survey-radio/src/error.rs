/// Error type for programmatic selection on a radio group.
///
/// Rendering never fails. These only arise when a selection event refers to
/// a control the group does not have.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RadioGroupError {
    /// The selected index is past the end of the option list.
    #[error("No option at index {index} (group has {len} options)")]
    NoSuchOption { index: usize, len: usize },

    /// No option in the group carries the submitted value.
    #[error("Group '{group}' has no option with key '{value}'")]
    UnknownValue { group: String, value: String },
}

impl RadioGroupError {
    /// Check if this error came from an out-of-range index.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::NoSuchOption { .. })
    }
}

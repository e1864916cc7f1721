/// One selectable choice in a radio group.
///
/// `value_key` identifies the option within its group and is what the
/// update callback receives. Keys are expected to be unique within a group.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RadioOption {
    /// The label shown next to the control.
    name: String,

    /// The identifier reported when this option is selected.
    value_key: String,
}

impl RadioOption {
    /// Create a new option.
    pub fn new(name: impl Into<String>, value_key: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value_key: value_key.into(),
        }
    }

    /// Get the display label.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the identifying key.
    pub fn value_key(&self) -> &str {
        &self.value_key
    }
}

impl From<(&str, &str)> for RadioOption {
    fn from((name, value_key): (&str, &str)) -> Self {
        Self::new(name, value_key)
    }
}

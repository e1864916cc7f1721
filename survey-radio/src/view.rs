/// The rendered structure of a radio group.
///
/// Produced by [`RadioButtons::view`](crate::RadioButtons::view) on every
/// render. Hosts draw this and nothing else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupView<'a> {
    /// The question text, shown before the controls.
    pub question: &'a str,

    /// The group identifier. Shared by every control (the native `name`).
    pub name: &'a str,

    /// One control per option, in input order.
    pub controls: Vec<ControlView<'a>>,
}

impl GroupView<'_> {
    /// Position of the first checked control.
    pub fn checked_index(&self) -> Option<usize> {
        self.controls.iter().position(|c| c.checked)
    }

    /// Number of controls.
    pub fn len(&self) -> usize {
        self.controls.len()
    }

    /// Whether the group has no controls.
    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }
}

/// A single labeled control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlView<'a> {
    /// Display label.
    pub label: &'a str,

    /// The option key this control submits.
    pub value: &'a str,

    /// Whether this control is shown as selected.
    pub checked: bool,
}

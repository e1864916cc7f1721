//! A recording callback for exercising radio groups without a user.
//!
//! # Example
//!
//! ```rust
//! use survey_radio::{RadioButtons, RadioOption, UpdateRecorder};
//!
//! let options = [RadioOption::new("Yes", "yes"), RadioOption::new("No", "no")];
//! let recorder = UpdateRecorder::new();
//!
//! let mut group = RadioButtons::new("", recorder.callback(), "agree", "Agree?", &options);
//! group.select_value("no").unwrap();
//!
//! assert_eq!(recorder.calls(), vec![("agree".to_string(), "no".to_string())]);
//! ```

use std::cell::RefCell;
use std::rc::Rc;

/// Records every `(group, selected)` pair passed to its callbacks.
///
/// Clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct UpdateRecorder {
    calls: Rc<RefCell<Vec<(String, String)>>>,
}

impl UpdateRecorder {
    /// Create a recorder with an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// A callback suitable for `update_survey_data` that appends to this log.
    pub fn callback(&self) -> impl FnMut(&str, &str) + use<> {
        let calls = Rc::clone(&self.calls);
        move |group: &str, selected: &str| {
            calls
                .borrow_mut()
                .push((group.to_string(), selected.to_string()));
        }
    }

    /// All recorded calls, oldest first.
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.borrow().clone()
    }

    /// The most recent call.
    pub fn last(&self) -> Option<(String, String)> {
        self.calls.borrow().last().cloned()
    }

    /// Number of recorded calls.
    pub fn len(&self) -> usize {
        self.calls.borrow().len()
    }

    /// Whether nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.calls.borrow().is_empty()
    }

    /// Forget all recorded calls.
    pub fn clear(&self) {
        self.calls.borrow_mut().clear();
    }
}

//! Key handling for a focused radio group.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use survey_radio::{RadioButtons, RadioGroupError};

use crate::RadioListState;

/// What a key press did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The control at this index was selected and the callback ran.
    Selected(usize),
    /// The highlight moved.
    Moved,
    /// The highlighted control was already checked; nothing was reported.
    Unchanged,
    /// The user asked to leave.
    Cancelled,
    /// The key means nothing here.
    Ignored,
}

/// Apply one key event to a group.
///
/// Up/Down (k/j) move the highlight and wrap around. Space/Enter select the
/// highlighted control. Digits 1-9 highlight and select that control. Esc
/// cancels. Only key presses count; releases and repeats are ignored.
pub fn handle_key<F>(
    group: &mut RadioButtons<'_, F>,
    state: &mut RadioListState,
    key: KeyEvent,
) -> Result<KeyOutcome, RadioGroupError>
where
    F: FnMut(&str, &str),
{
    if key.kind != KeyEventKind::Press {
        return Ok(KeyOutcome::Ignored);
    }

    let len = group.options().len();
    match key.code {
        KeyCode::Esc => Ok(KeyOutcome::Cancelled),
        KeyCode::Up | KeyCode::Char('k') => {
            state.up(len);
            Ok(KeyOutcome::Moved)
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.down(len);
            Ok(KeyOutcome::Moved)
        }
        KeyCode::Enter | KeyCode::Char(' ') if len > 0 => select(group, state.highlight()),
        KeyCode::Char(c @ '1'..='9') => {
            let idx = (c as usize) - ('1' as usize);
            if idx >= len {
                return Ok(KeyOutcome::Ignored);
            }
            state.set_highlight(idx, len);
            select(group, idx)
        }
        _ => Ok(KeyOutcome::Ignored),
    }
}

fn select<F>(group: &mut RadioButtons<'_, F>, idx: usize) -> Result<KeyOutcome, RadioGroupError>
where
    F: FnMut(&str, &str),
{
    if group.checked_index() == Some(idx) {
        return Ok(KeyOutcome::Unchanged);
    }
    group.select(idx)?;
    Ok(KeyOutcome::Selected(idx))
}

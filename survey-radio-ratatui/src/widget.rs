//! Stateful ratatui widget for a radio group view.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, StatefulWidget, Widget},
};
use survey_radio::GroupView;

/// Color theme for the terminal widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub primary: Color,
    pub text: Color,
    pub highlight: Color,
    pub border: Color,
    pub selected_bg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: Color::Cyan,
            text: Color::White,
            highlight: Color::Yellow,
            border: Color::Gray,
            selected_bg: Color::DarkGray,
        }
    }
}

/// Which control the cursor is on. This is navigation state only; the
/// answer itself always comes from the group's value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RadioListState {
    highlight: usize,
}

impl RadioListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start on the checked control, or the first one.
    pub fn for_view(view: &GroupView<'_>) -> Self {
        Self {
            highlight: view.checked_index().unwrap_or(0),
        }
    }

    pub fn highlight(&self) -> usize {
        self.highlight
    }

    /// Move the highlight, clamped to `len`.
    pub fn set_highlight(&mut self, index: usize, len: usize) {
        self.highlight = index.min(len.saturating_sub(1));
    }

    pub(crate) fn up(&mut self, len: usize) {
        if len > 0 {
            self.highlight = (self.highlight.min(len - 1) + len - 1) % len;
        }
    }

    pub(crate) fn down(&mut self, len: usize) {
        if len > 0 {
            self.highlight = (self.highlight.min(len - 1) + 1) % len;
        }
    }
}

/// Draws a bordered block titled with the question and one line per control.
#[derive(Debug, Clone)]
pub struct RadioList<'a> {
    view: GroupView<'a>,
    theme: Theme,
    focused: bool,
}

impl<'a> RadioList<'a> {
    pub fn new(view: GroupView<'a>) -> Self {
        Self {
            view,
            theme: Theme::default(),
            focused: true,
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Unfocused lists draw no highlight.
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl StatefulWidget for RadioList<'_> {
    type State = RadioListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let theme = &self.theme;
        let border_color = if self.focused {
            theme.primary
        } else {
            theme.border
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(format!(" {} ", self.view.question))
            .title_style(Style::default().fg(if self.focused {
                theme.highlight
            } else {
                theme.text
            }));

        let inner = block.inner(area);
        Widget::render(block, area, buf);

        let items: Vec<ListItem> = self
            .view
            .controls
            .iter()
            .enumerate()
            .map(|(idx, control)| {
                let marker = if control.checked { "(●)" } else { "( )" };
                let is_highlighted = self.focused && idx == state.highlight;
                let style = if is_highlighted {
                    Style::default()
                        .fg(theme.text)
                        .bg(theme.selected_bg)
                        .add_modifier(Modifier::BOLD)
                } else if control.checked {
                    Style::default().fg(theme.highlight)
                } else {
                    Style::default().fg(theme.text)
                };
                ListItem::new(format!("{marker} {}", control.label)).style(style)
            })
            .collect();

        Widget::render(List::new(items), inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use survey_radio::{RadioButtons, RadioOption};

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect()
    }

    fn draw(value: &str, state: &mut RadioListState) -> Buffer {
        let options = [RadioOption::new("A", "a"), RadioOption::new("B", "b")];
        let group = RadioButtons::new(value, |_: &str, _: &str| {}, "q", "Pick one", &options);
        let mut buf = Buffer::empty(Rect::new(0, 0, 24, 4));
        RadioList::new(group.view()).render(buf.area, &mut buf, state);
        buf
    }

    #[test]
    fn theme_default() {
        let theme = Theme::default();
        assert_eq!(theme.primary, Color::Cyan);
        assert_eq!(theme.selected_bg, Color::DarkGray);
    }

    #[test]
    fn draws_question_and_markers() {
        let buf = draw("a", &mut RadioListState::new());

        assert!(row(&buf, 0).contains(" Pick one "));
        assert!(row(&buf, 1).contains("(●) A"));
        assert!(row(&buf, 2).contains("( ) B"));
    }

    #[test]
    fn unmatched_value_draws_no_filled_marker() {
        let buf = draw("z", &mut RadioListState::new());

        assert!(row(&buf, 1).contains("( ) A"));
        assert!(row(&buf, 2).contains("( ) B"));
    }

    #[test]
    fn highlight_uses_selected_background() {
        let mut state = RadioListState::new();
        state.set_highlight(1, 2);
        let buf = draw("a", &mut state);

        assert_eq!(buf[(1, 2)].bg, Theme::default().selected_bg);
        assert_ne!(buf[(1, 1)].bg, Theme::default().selected_bg);
    }

    #[test]
    fn unfocused_list_draws_no_highlight() {
        let options = [RadioOption::new("A", "a"), RadioOption::new("B", "b")];
        let group = RadioButtons::new("a", |_: &str, _: &str| {}, "q", "Pick one", &options);
        let theme = Theme::default();
        let mut buf = Buffer::empty(Rect::new(0, 0, 24, 4));
        let mut state = RadioListState::new();

        RadioList::new(group.view())
            .focused(false)
            .render(buf.area, &mut buf, &mut state);

        assert_eq!(buf[(0, 0)].fg, theme.border);
        assert_ne!(buf[(1, 1)].bg, theme.selected_bg);
        assert_ne!(buf[(1, 2)].bg, theme.selected_bg);
        assert!(row(&buf, 1).contains("(●) A"));
    }

    #[test]
    fn focused_list_draws_primary_border() {
        let buf = draw("a", &mut RadioListState::new());

        assert_eq!(buf[(0, 0)].fg, Theme::default().primary);
        assert_eq!(buf[(1, 1)].bg, Theme::default().selected_bg);
    }

    #[test]
    fn state_wraps_and_clamps() {
        let mut state = RadioListState::new();
        state.up(3);
        assert_eq!(state.highlight(), 2);
        state.down(3);
        assert_eq!(state.highlight(), 0);
        state.set_highlight(10, 3);
        assert_eq!(state.highlight(), 2);
        state.down(0);
        assert_eq!(state.highlight(), 2);
    }
}

//! egui widget implementation.

use egui::{InnerResponse, Response, Ui, Widget};
use survey_radio::RadioButtons;

/// Layout configuration for the egui widget.
#[derive(Debug, Clone, PartialEq)]
pub struct EguiOptions {
    /// Lay the controls out in a row instead of a column.
    pub horizontal: bool,
    /// Space added after the group.
    pub spacing: f32,
}

impl Default for EguiOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl EguiOptions {
    /// Create options with default values.
    pub fn new() -> Self {
        Self {
            horizontal: false,
            spacing: 8.0,
        }
    }

    /// Lay the controls out in a row.
    pub fn horizontal(mut self, horizontal: bool) -> Self {
        self.horizontal = horizontal;
        self
    }

    /// Set the space added after the group.
    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }
}

/// A radio group as an egui [`Widget`].
///
/// The response is marked changed in the frame a selection is dispatched.
pub struct RadioGroupWidget<'g, 'a, F>
where
    F: FnMut(&str, &str),
{
    group: &'g mut RadioButtons<'a, F>,
    options: EguiOptions,
}

impl<'g, 'a, F> RadioGroupWidget<'g, 'a, F>
where
    F: FnMut(&str, &str),
{
    pub fn new(group: &'g mut RadioButtons<'a, F>) -> Self {
        Self {
            group,
            options: EguiOptions::new(),
        }
    }

    pub fn with_options(mut self, options: EguiOptions) -> Self {
        self.options = options;
        self
    }
}

impl<F> Widget for RadioGroupWidget<'_, '_, F>
where
    F: FnMut(&str, &str),
{
    fn ui(self, ui: &mut Ui) -> Response {
        show(ui, self.group, &self.options).response
    }
}

/// Draw the group and dispatch at most one selection.
///
/// The inner value is the index of the control that was selected this frame.
pub fn show<F>(
    ui: &mut Ui,
    group: &mut RadioButtons<'_, F>,
    options: &EguiOptions,
) -> InnerResponse<Option<usize>>
where
    F: FnMut(&str, &str),
{
    let view = group.view();
    let mut clicked = None;

    let mut response = ui
        .vertical(|ui| {
            ui.label(view.question);

            let mut draw = |ui: &mut Ui| {
                for (idx, control) in view.controls.iter().enumerate() {
                    if ui.radio(control.checked, control.label).clicked() {
                        clicked = Some(idx);
                    }
                }
            };
            if options.horizontal {
                ui.horizontal_wrapped(draw);
            } else {
                draw(ui);
            }
        })
        .response;

    ui.add_space(options.spacing);

    let checked = view.checked_index();
    let selected = clicked.filter(|&idx| dispatch(group, checked, idx));
    if selected.is_some() {
        response.mark_changed();
    }

    InnerResponse::new(selected, response)
}

/// Forward a click as a selection event.
///
/// Clicking the control that is already checked is not a change, the same
/// as a native radio input.
fn dispatch<F>(group: &mut RadioButtons<'_, F>, checked: Option<usize>, clicked: usize) -> bool
where
    F: FnMut(&str, &str),
{
    if checked == Some(clicked) {
        return false;
    }
    match group.select(clicked) {
        Ok(()) => true,
        Err(e) => {
            log::warn!("Dropped click on group '{}': {e}", group.value_key());
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use survey_radio::{RadioOption, UpdateRecorder};

    fn pick_one() -> Vec<RadioOption> {
        vec![RadioOption::new("A", "a"), RadioOption::new("B", "b")]
    }

    fn run_frame(mut add_contents: impl FnMut(&mut Ui)) {
        let ctx = egui::Context::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| add_contents(ui));
        });
    }

    /// Draw `value`'s group for four frames, clicking the last control in
    /// frames two and three. Returns each frame's inner value.
    fn click_last_control(value: &str, recorder: &UpdateRecorder) -> Vec<Option<usize>> {
        let options = pick_one();
        let ctx = egui::Context::default();
        let screen = egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(400.0, 300.0));
        let mut group_rect = egui::Rect::NOTHING;
        let mut results = Vec::new();

        for frame in 0..4 {
            let pos = egui::pos2(group_rect.left() + 8.0, group_rect.bottom() - 6.0);
            let events = match frame {
                1 => vec![
                    egui::Event::PointerMoved(pos),
                    egui::Event::PointerButton {
                        pos,
                        button: egui::PointerButton::Primary,
                        pressed: true,
                        modifiers: egui::Modifiers::NONE,
                    },
                ],
                2 => vec![egui::Event::PointerButton {
                    pos,
                    button: egui::PointerButton::Primary,
                    pressed: false,
                    modifiers: egui::Modifiers::NONE,
                }],
                _ => Vec::new(),
            };
            let input = egui::RawInput {
                screen_rect: Some(screen),
                events,
                ..Default::default()
            };

            let mut inner = None;
            let _ = ctx.run(input, |ctx| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    let mut group =
                        RadioButtons::new(value, recorder.callback(), "q", "Pick one", &options);
                    let response = show(ui, &mut group, &EguiOptions::new());
                    group_rect = response.response.rect;
                    assert_eq!(response.response.changed(), response.inner.is_some());
                    inner = response.inner;
                });
            });
            results.push(inner);
        }

        results
    }

    #[test]
    fn click_selects_other_control_once() {
        let recorder = UpdateRecorder::new();
        let results = click_last_control("a", &recorder);

        assert_eq!(results.iter().filter(|r| r.is_some()).count(), 1);
        assert!(results.contains(&Some(1)));
        assert_eq!(recorder.calls(), vec![("q".to_string(), "b".to_string())]);
    }

    #[test]
    fn click_on_checked_control_reports_nothing() {
        let recorder = UpdateRecorder::new();
        let results = click_last_control("b", &recorder);

        assert!(results.iter().all(Option::is_none));
        assert!(recorder.is_empty());
    }

    #[test]
    fn options_creation() {
        let options = EguiOptions::new().horizontal(true).with_spacing(2.0);
        assert!(options.horizontal);
        assert_eq!(options.spacing, 2.0);
        assert_eq!(EguiOptions::default(), EguiOptions::new());
    }

    #[test]
    fn drawing_does_not_dispatch() {
        let options = pick_one();
        let recorder = UpdateRecorder::new();
        let mut group = RadioButtons::new("a", recorder.callback(), "q", "Pick one", &options);

        run_frame(|ui| {
            let response = ui.add(RadioGroupWidget::new(&mut group));
            assert!(!response.changed());
            assert!(response.rect.height() > 0.0);
        });

        assert!(recorder.is_empty());
    }

    #[test]
    fn horizontal_layout_draws() {
        let options = pick_one();
        let mut group = RadioButtons::new("z", |_: &str, _: &str| {}, "q", "Pick one", &options);

        run_frame(|ui| {
            let inner = show(ui, &mut group, &EguiOptions::new().horizontal(true));
            assert_eq!(inner.inner, None);
        });
    }

    #[test]
    fn click_on_other_control_dispatches() {
        let options = pick_one();
        let recorder = UpdateRecorder::new();
        let mut group = RadioButtons::new("a", recorder.callback(), "q", "Pick one", &options);

        assert!(dispatch(&mut group, Some(0), 1));
        assert_eq!(recorder.calls(), vec![("q".to_string(), "b".to_string())]);
    }

    #[test]
    fn click_on_checked_control_is_ignored() {
        let options = pick_one();
        let recorder = UpdateRecorder::new();
        let mut group = RadioButtons::new("a", recorder.callback(), "q", "Pick one", &options);

        assert!(!dispatch(&mut group, Some(0), 0));
        assert!(recorder.is_empty());
    }

    #[test]
    fn click_with_nothing_checked_dispatches() {
        let options = pick_one();
        let recorder = UpdateRecorder::new();
        let mut group = RadioButtons::new("z", recorder.callback(), "q", "Pick one", &options);

        assert!(dispatch(&mut group, None, 0));
        assert_eq!(recorder.last(), Some(("q".to_string(), "a".to_string())));
    }
}

//! A two-question egui form built from radio groups.
//!
//! Run with: cargo run -p survey-radio-egui --example spooky_forest

use std::collections::HashMap;

use eframe::egui;
use example_surveys::SampleQuestion;
use survey_radio_egui::{EguiOptions, show};

struct ForestApp {
    questions: Vec<SampleQuestion>,
    answers: HashMap<String, String>,
}

impl eframe::App for ForestApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Into the spooky forest");
            ui.separator();

            for question in &self.questions {
                let current = self
                    .answers
                    .get(&question.value_key)
                    .cloned()
                    .unwrap_or_default();
                let answers = &mut self.answers;
                let mut group = question.group(&current, |group: &str, selected: &str| {
                    answers.insert(group.to_string(), selected.to_string());
                });
                show(ui, &mut group, &EguiOptions::new());
            }

            ui.separator();
            for question in &self.questions {
                let answer = self
                    .answers
                    .get(&question.value_key)
                    .map(String::as_str)
                    .unwrap_or("(none)");
                ui.label(format!("{}: {answer}", question.value_key));
            }
        });
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Spooky forest")
            .with_inner_size([420.0, 360.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Spooky forest",
        options,
        Box::new(|_cc| {
            Ok(Box::new(ForestApp {
                questions: example_surveys::spooky_forest(),
                answers: HashMap::new(),
            }))
        }),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {e}"))
}

//! Ask the pizza order one radio group at a time in the terminal.
//!
//! Run with: cargo run -p survey-radio-ratatui --example pizza

use std::collections::HashMap;

use survey_radio_ratatui::{RadioPrompt, RatatuiRadioError};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let prompt = RadioPrompt::new();
    let mut answers: HashMap<String, String> = HashMap::new();

    for question in example_surveys::pizza_order() {
        let current = answers.get(&question.value_key).cloned().unwrap_or_default();
        let mut group = question.group(&current, |group: &str, selected: &str| {
            answers.insert(group.to_string(), selected.to_string());
        });

        match prompt.run(&mut group) {
            Ok(_) => {}
            Err(RatatuiRadioError::Cancelled) => {
                println!("Order cancelled.");
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        }
    }

    println!("Your order: {answers:#?}");
    Ok(())
}

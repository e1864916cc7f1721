//! Render the pizza order as HTML radio groups, then replay a browser change.
//!
//! Run with: cargo run -p survey-radio-html --example pizza

use std::collections::HashMap;

use survey_radio_html::{HtmlOptions, to_html_with_options};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut answers: HashMap<String, String> = HashMap::new();
    answers.insert("size".to_string(), "medium".to_string());

    let options = HtmlOptions::new().full_document(false);
    for question in example_surveys::pizza_order() {
        let current = answers.get(&question.value_key).cloned().unwrap_or_default();
        let mut group = question.group(&current, |group: &str, selected: &str| {
            answers.insert(group.to_string(), selected.to_string());
        });

        println!("{}", to_html_with_options(&group, &options));

        // What a form submission would report for this input's `value`
        if let Some(last) = question.options.last() {
            group.select_value(last.value_key())?;
        }
    }

    println!("Answers after submit: {answers:#?}");
    Ok(())
}

//! HTML radio group generator implementation.

use survey_radio::{GroupView, RadioButtons};

/// Options for HTML generation.
#[derive(Debug, Clone)]
pub struct HtmlOptions {
    /// Title for the HTML document.
    pub title: Option<String>,
    /// Whether to include default CSS styling.
    pub include_styles: bool,
    /// Whether to generate a complete HTML document (with html/head/body tags).
    pub full_document: bool,
    /// Custom CSS class prefix for all generated elements.
    pub class_prefix: String,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl HtmlOptions {
    /// Create new options with default values.
    pub fn new() -> Self {
        Self {
            title: None,
            include_styles: true,
            full_document: true,
            class_prefix: "survey".to_string(),
        }
    }

    /// Set the document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Enable or disable default CSS styling.
    pub fn with_styles(mut self, include: bool) -> Self {
        self.include_styles = include;
        self
    }

    /// Generate a complete HTML document or just the group fragment.
    pub fn full_document(mut self, full: bool) -> Self {
        self.full_document = full;
        self
    }

    /// Set a custom CSS class prefix.
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = prefix.into();
        self
    }
}

/// Render a radio group as a complete HTML document.
///
/// This is a convenience function that uses default options with the given title.
pub fn to_html<F>(group: &RadioButtons<'_, F>, title: Option<&str>) -> String
where
    F: FnMut(&str, &str),
{
    let mut options = HtmlOptions::new();
    if let Some(t) = title {
        options.title = Some(t.to_string());
    }
    to_html_with_options(group, &options)
}

/// Render a radio group with custom options.
pub fn to_html_with_options<F>(group: &RadioButtons<'_, F>, options: &HtmlOptions) -> String
where
    F: FnMut(&str, &str),
{
    generate_html(&group.view(), options)
}

fn generate_html(view: &GroupView<'_>, options: &HtmlOptions) -> String {
    let mut html = String::new();
    let prefix = &options.class_prefix;

    if options.full_document {
        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("  <meta charset=\"UTF-8\">\n");
        html.push_str(
            "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
        );

        if let Some(title) = &options.title {
            html.push_str(&format!("  <title>{}</title>\n", escape_html(title)));
        }

        if options.include_styles {
            html.push_str(&generate_styles(prefix));
        }

        html.push_str("</head>\n<body>\n");
    }

    let indent = usize::from(options.full_document);
    html.push_str(&generate_group(view, prefix, indent));

    if options.full_document {
        html.push_str("</body>\n</html>\n");
    }

    log::trace!("Generated {} bytes of HTML for '{}'", html.len(), view.name);
    html
}

/// Generate the `<div>` for one group: question paragraph, then one label per control.
fn generate_group(view: &GroupView<'_>, prefix: &str, indent: usize) -> String {
    let ind = "  ".repeat(indent);
    let name = escape_html(view.name);
    let mut html = String::new();

    html.push_str(&format!(
        "{ind}<div class=\"{prefix}-group\" data-group=\"{name}\">\n"
    ));
    html.push_str(&format!(
        "{ind}  <p class=\"{prefix}-question\">{}</p>\n",
        escape_html(view.question)
    ));

    for control in &view.controls {
        let checked = if control.checked { " checked" } else { "" };
        html.push_str(&format!("{ind}  <label class=\"{prefix}-option\">\n"));
        html.push_str(&format!(
            "{ind}    <input type=\"radio\" name=\"{name}\" value=\"{}\"{checked}>\n",
            escape_html(control.value)
        ));
        html.push_str(&format!("{ind}    {}\n", escape_html(control.label)));
        html.push_str(&format!("{ind}  </label>\n"));
    }

    html.push_str(&format!("{ind}</div>\n"));
    html
}

/// Escape HTML special characters.
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Generate default CSS styles.
fn generate_styles(prefix: &str) -> String {
    format!(
        r#"  <style>
    .{prefix}-group {{
      max-width: 600px;
      margin: 2rem auto;
      font-family: sans-serif;
    }}
    .{prefix}-question {{
      font-weight: bold;
    }}
    .{prefix}-option {{
      display: block;
      margin: 0.25rem 0;
    }}
  </style>
"#
    )
}

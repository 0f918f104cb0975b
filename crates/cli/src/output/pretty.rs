//! Pretty output formatting.

use designprompt_core::{AxisOptions, Configuration, GeneratedOutput};

use super::Pretty;

fn section(title: &str, body: &str) -> String {
    format!("{title}\n{}\n{body}", "-".repeat(40))
}

/// Format both generated artifacts for display.
pub fn format_generated(outputs: &GeneratedOutput) -> String {
    format!(
        "{}\n\n{}",
        section("PROMPT", &outputs.prompt),
        section("CODE", &outputs.document)
    )
}

/// Format one axis with its values, marking the default.
pub fn format_axis(axis: &AxisOptions) -> String {
    let mut output = format!("{} ({})", axis.title, axis.key);
    for value in axis.values {
        if *value == axis.default {
            output.push_str(&format!("\n  * {value} (default)"));
        } else {
            output.push_str(&format!("\n    {value}"));
        }
    }
    if axis.free_text {
        output.push_str("\n  Any other text is accepted.");
    }
    output
}

/// Format the option catalog for display.
pub fn format_axes(axes: &[AxisOptions]) -> String {
    if axes.is_empty() {
        return "No options found.".to_string();
    }
    let mut output = format!("OPTIONS ({})\n", axes.len());
    output.push_str(&"-".repeat(40));
    for axis in axes {
        output.push_str(&format!("\n{}", format_axis(axis)));
        output.push('\n');
    }
    output
}

/// Format a configuration as aligned `key: value` lines.
pub fn format_configuration(config: &Configuration) -> String {
    let width = Configuration::KEYS
        .iter()
        .map(|key| key.len() + 1)
        .max()
        .unwrap_or_default();
    Configuration::KEYS
        .iter()
        .filter_map(|key| {
            config
                .value_of(key)
                .map(|value| format!("{:width$}  {value}", format!("{key}:")))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

impl Pretty for GeneratedOutput {
    fn pretty(&self) -> String {
        format_generated(self)
    }
}

impl Pretty for [AxisOptions] {
    fn pretty(&self) -> String {
        format_axes(self)
    }
}

impl Pretty for Configuration {
    fn pretty(&self) -> String {
        format_configuration(self)
    }
}

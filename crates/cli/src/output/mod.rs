//! Output formatting functions.

pub mod json;
pub mod pretty;

use crate::cli::OutputFormat;

/// Human-readable rendering of a command result.
pub trait Pretty {
    fn pretty(&self) -> String;
}

/// Format a command result in the requested format.
pub fn format_output<T>(value: &T, format: OutputFormat) -> String
where
    T: serde::Serialize + Pretty + ?Sized,
{
    match format {
        OutputFormat::Json => json::format_json(value),
        OutputFormat::Pretty => value.pretty(),
    }
}

#[cfg(test)]
mod tests {
    use designprompt_core::{generate, Configuration, OptionCatalog};

    use super::*;

    #[test]
    fn test_pretty_uses_renderer() {
        let outputs = generate(&Configuration::default());
        assert_eq!(
            format_output(&outputs, OutputFormat::Pretty),
            pretty::format_generated(&outputs)
        );

        let axes = OptionCatalog::axes();
        assert_eq!(
            format_output(axes.as_slice(), OutputFormat::Pretty),
            pretty::format_axes(&axes)
        );
    }

    #[test]
    fn test_json_is_compact() {
        let config = Configuration::default();
        let json = format_output(&config, OutputFormat::Json);

        assert!(!json.contains('\n'));
        assert_eq!(Configuration::from_json(&json).unwrap(), config);
    }
}

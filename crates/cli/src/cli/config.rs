//! Configuration flags shared by every command.

use std::convert::Infallible;
use std::fs;
use std::path::PathBuf;

use clap::Args;
use designprompt_core::{
    parse_shadow_depth, AnimationType, Configuration, Configurator, CssFramework, DeviceTarget,
    FieldChange, JsLibrary, Theme, Typography,
};

use crate::error::{CliError, Result};

/// One flag per configuration field, applied on top of an optional preset.
#[derive(Debug, Clone, Default, Args)]
pub struct ConfigArgs {
    /// JSON preset file; missing fields keep their defaults.
    #[arg(long, global = true, env = "DESIGNPROMPT_PRESET")]
    pub preset: Option<PathBuf>,

    /// Kind of project, e.g. "Landing Page".
    #[arg(long, global = true, env = "DESIGNPROMPT_PROJECT_TYPE")]
    pub project_type: Option<String>,

    /// Design style, e.g. "Minimalist".
    #[arg(long, global = true, env = "DESIGNPROMPT_DESIGN_STYLE")]
    pub design_style: Option<String>,

    /// Color theme (Dark, Light, Auto).
    #[arg(long, global = true, env = "DESIGNPROMPT_THEME", value_parser = parse_theme)]
    pub theme: Option<Theme>,

    /// Primary color as a hex value; invalid values are ignored.
    #[arg(long, global = true, env = "DESIGNPROMPT_PRIMARY_COLOR")]
    pub primary_color: Option<String>,

    /// Palette type, e.g. "Monochrome".
    #[arg(long, global = true, env = "DESIGNPROMPT_PALETTE_TYPE")]
    pub palette_type: Option<String>,

    /// Shadow depth as an index (0-3) or a label (None, Light, Medium, Heavy).
    #[arg(long, global = true, env = "DESIGNPROMPT_SHADOW_DEPTH", value_parser = parse_shadow_arg)]
    pub shadow_depth: Option<u8>,

    /// Device target (Mobile, Desktop, Responsive).
    #[arg(
        long,
        global = true,
        env = "DESIGNPROMPT_DEVICE_TARGET",
        value_parser = parse_device_target,
    )]
    pub device_target: Option<DeviceTarget>,

    /// CSS framework (Tailwind CSS, Bootstrap 5, Bulma).
    #[arg(
        long,
        global = true,
        env = "DESIGNPROMPT_CSS_FRAMEWORK",
        value_parser = parse_css_framework,
    )]
    pub css_framework: Option<CssFramework>,

    /// Typography (Geist, Inter, Roboto, Poppins).
    #[arg(long, global = true, env = "DESIGNPROMPT_TYPOGRAPHY", value_parser = parse_typography)]
    pub typography: Option<Typography>,

    /// Animation (Rotate, Fade, Slide, Scale, Bounce, Parallax, None).
    #[arg(
        long,
        global = true,
        env = "DESIGNPROMPT_ANIMATION_TYPE",
        value_parser = parse_animation_type,
    )]
    pub animation_type: Option<AnimationType>,

    /// Accessibility level, e.g. "AA".
    #[arg(long, global = true, env = "DESIGNPROMPT_ACCESSIBILITY_LEVEL")]
    pub accessibility_level: Option<String>,

    /// JS library (Vanilla JS, Alpine.js, React, Vue, GSAP).
    #[arg(long, global = true, env = "DESIGNPROMPT_JS_LIBRARY", value_parser = parse_js_library)]
    pub js_library: Option<JsLibrary>,
}

impl ConfigArgs {
    /// Field changes for every flag that was given, in form order.
    pub fn changes(&self) -> Vec<FieldChange> {
        let mut changes = Vec::new();
        if let Some(value) = &self.project_type {
            changes.push(FieldChange::ProjectType(value.clone()));
        }
        if let Some(value) = &self.design_style {
            changes.push(FieldChange::DesignStyle(value.clone()));
        }
        if let Some(value) = &self.theme {
            changes.push(FieldChange::Theme(value.clone()));
        }
        if let Some(value) = &self.primary_color {
            changes.push(FieldChange::ColorText(value.clone()));
        }
        if let Some(value) = &self.palette_type {
            changes.push(FieldChange::PaletteType(value.clone()));
        }
        if let Some(value) = self.shadow_depth {
            changes.push(FieldChange::ShadowDepth(value));
        }
        if let Some(value) = &self.device_target {
            changes.push(FieldChange::DeviceTarget(value.clone()));
        }
        if let Some(value) = &self.css_framework {
            changes.push(FieldChange::CssFramework(value.clone()));
        }
        if let Some(value) = &self.typography {
            changes.push(FieldChange::Typography(value.clone()));
        }
        if let Some(value) = &self.animation_type {
            changes.push(FieldChange::AnimationType(value.clone()));
        }
        if let Some(value) = &self.accessibility_level {
            changes.push(FieldChange::AccessibilityLevel(value.clone()));
        }
        if let Some(value) = &self.js_library {
            changes.push(FieldChange::JsLibrary(value.clone()));
        }
        changes
    }

    /// Builds the configurator: defaults, then the preset, then the flags.
    pub fn load(&self) -> Result<Configurator> {
        let config = match &self.preset {
            Some(path) => {
                let json = fs::read_to_string(path).map_err(|source| CliError::PresetRead {
                    path: path.clone(),
                    source,
                })?;
                tracing::debug!(path = %path.display(), "loaded preset");
                Configuration::from_json(&json)?
            }
            None => Configuration::default(),
        };

        let mut configurator = Configurator::from_config(config);
        for change in self.changes() {
            if !configurator.apply(change) {
                tracing::debug!(
                    color = configurator.color_text(),
                    "ignoring invalid primary color"
                );
            }
        }
        Ok(configurator)
    }
}

fn parse_theme(value: &str) -> std::result::Result<Theme, Infallible> {
    Ok(Theme::from_label_ignore_case(value))
}

fn parse_device_target(value: &str) -> std::result::Result<DeviceTarget, Infallible> {
    Ok(DeviceTarget::from_label_ignore_case(value))
}

fn parse_css_framework(value: &str) -> std::result::Result<CssFramework, Infallible> {
    Ok(CssFramework::from_label_ignore_case(value))
}

fn parse_typography(value: &str) -> std::result::Result<Typography, Infallible> {
    Ok(Typography::from_label_ignore_case(value))
}

fn parse_animation_type(value: &str) -> std::result::Result<AnimationType, Infallible> {
    Ok(AnimationType::from_label_ignore_case(value))
}

fn parse_js_library(value: &str) -> std::result::Result<JsLibrary, Infallible> {
    Ok(JsLibrary::from_label_ignore_case(value))
}

fn parse_shadow_arg(value: &str) -> std::result::Result<u8, String> {
    parse_shadow_depth(value)
        .ok_or_else(|| format!("expected 0-3 or None, Light, Medium, Heavy; got '{value}'"))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use clap::Parser;
    use designprompt_core::{OutputKind, ShadowDepth};

    use super::*;
    use crate::cli::Cli;

    fn parse(args: &[&str]) -> ConfigArgs {
        let mut argv = vec!["designprompt"];
        argv.extend_from_slice(args);
        argv.push("prompt");
        Cli::try_parse_from(argv).unwrap().config
    }

    fn preset_file(json: &serde_json::Value) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{json}").unwrap();
        file
    }

    #[test]
    fn test_no_flags_gives_defaults() {
        let args = ConfigArgs::default();
        assert!(args.changes().is_empty());

        let configurator = args.load().unwrap();
        assert_eq!(configurator.config(), &Configuration::default());
    }

    #[test]
    fn test_labels_are_case_insensitive() {
        let args = parse(&[
            "--theme",
            "light",
            "--css-framework",
            "bootstrap 5",
            "--js-library",
            "alpine.js",
            "--shadow-depth",
            "heavy",
        ]);

        assert_eq!(args.theme, Some(Theme::Light));
        assert_eq!(args.css_framework, Some(CssFramework::Bootstrap5));
        assert_eq!(args.js_library, Some(JsLibrary::Alpine));
        assert_eq!(args.shadow_depth, Some(3));
    }

    #[test]
    fn test_unknown_labels_are_kept() {
        let args = parse(&["--typography", "Fira Sans"]);
        assert_eq!(
            args.typography,
            Some(Typography::Other("Fira Sans".to_string()))
        );
    }

    #[test]
    fn test_bad_shadow_depth_is_rejected() {
        let result = Cli::try_parse_from(["designprompt", "--shadow-depth", "deep", "prompt"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_flags_apply_in_order() {
        let args = parse(&[
            "--project-type",
            "Portfolio",
            "--primary-color",
            "#ff0000",
            "--shadow-depth",
            "0",
        ]);

        let configurator = args.load().unwrap();
        let config = configurator.config();
        assert_eq!(config.project_type, "Portfolio");
        assert_eq!(config.primary_color, "#ff0000");
        assert_eq!(config.shadow(), ShadowDepth::None);
        assert!(configurator
            .output(OutputKind::Prompt)
            .starts_with("Create a Portfolio"));
    }

    #[test]
    fn test_invalid_primary_color_is_ignored() {
        let args = parse(&["--primary-color", "blue"]);

        let configurator = args.load().unwrap();
        assert_eq!(configurator.config().primary_color, "#3B82F6");
        assert_eq!(configurator.color_text(), "blue");
    }

    #[test]
    fn test_preset_then_flags() {
        let file = preset_file(&serde_json::json!({
            "projectType": "Dashboard",
            "theme": "Light",
            "jsLibrary": "React",
        }));

        let args = ConfigArgs {
            preset: Some(file.path().to_path_buf()),
            js_library: Some(JsLibrary::Vue),
            ..ConfigArgs::default()
        };

        let configurator = args.load().unwrap();
        let config = configurator.config();
        assert_eq!(config.project_type, "Dashboard");
        assert_eq!(config.theme, Theme::Light);
        assert_eq!(config.js_library, JsLibrary::Vue);
        assert_eq!(config.design_style, "Minimalist");
    }

    #[test]
    fn test_preset_with_invalid_color_fails() {
        let file = preset_file(&serde_json::json!({ "primaryColor": "not-a-color" }));
        let args = ConfigArgs {
            preset: Some(file.path().to_path_buf()),
            ..ConfigArgs::default()
        };

        assert!(matches!(args.load(), Err(CliError::Config(_))));
    }

    #[test]
    fn test_missing_preset_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");
        let args = ConfigArgs {
            preset: Some(path.clone()),
            ..ConfigArgs::default()
        };

        match args.load() {
            Err(CliError::PresetRead { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}

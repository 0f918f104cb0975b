//! Caller-side state for an interactive configurator.
//!
//! The generators are pure; this type plays the part of the form that owns
//! the current choices. It applies one field change at a time, gates typed
//! colors through the hex validator, and regenerates both artifacts after
//! every accepted change.

use crate::config::{
    is_valid_hex, AnimationType, Configuration, CssFramework, DeviceTarget, JsLibrary,
    ShadowDepth, Theme, Typography,
};
use crate::notice::Notice;
use crate::render::{generate, GeneratedOutput, OutputKind};

/// A single edit to one configuration field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldChange {
    ProjectType(String),
    DesignStyle(String),
    Theme(Theme),
    /// A color from a picker, applied as is.
    ColorPicker(String),
    /// Manually typed color text, applied only when it is a valid hex color.
    ColorText(String),
    PaletteType(String),
    ShadowDepth(u8),
    DeviceTarget(DeviceTarget),
    CssFramework(CssFramework),
    Typography(Typography),
    AnimationType(AnimationType),
    AccessibilityLevel(String),
    JsLibrary(JsLibrary),
}

impl FieldChange {
    /// Builds a change from a serialized field key and a text value.
    ///
    /// Enumerated axes accept their labels case-insensitively. The shadow
    /// depth accepts a level label or an index; `primaryColor` produces a
    /// [`FieldChange::ColorText`] so it goes through the hex gate.
    pub fn from_key(key: &str, value: &str) -> Option<Self> {
        let change = match key {
            "projectType" => Self::ProjectType(value.to_string()),
            "designStyle" => Self::DesignStyle(value.to_string()),
            "theme" => Self::Theme(Theme::from_label_ignore_case(value)),
            "primaryColor" => Self::ColorText(value.to_string()),
            "paletteType" => Self::PaletteType(value.to_string()),
            "shadowDepth" => Self::ShadowDepth(parse_shadow_depth(value)?),
            "deviceTarget" => Self::DeviceTarget(DeviceTarget::from_label_ignore_case(value)),
            "cssFramework" => Self::CssFramework(CssFramework::from_label_ignore_case(value)),
            "typography" => Self::Typography(Typography::from_label_ignore_case(value)),
            "animationType" => Self::AnimationType(AnimationType::from_label_ignore_case(value)),
            "accessibilityLevel" => Self::AccessibilityLevel(value.to_string()),
            "jsLibrary" => Self::JsLibrary(JsLibrary::from_label_ignore_case(value)),
            _ => return None,
        };
        Some(change)
    }
}

/// Parses a shadow depth given as an index (`0`-`3`) or a level label.
pub fn parse_shadow_depth(value: &str) -> Option<u8> {
    value
        .trim()
        .parse::<u8>()
        .ok()
        .or_else(|| ShadowDepth::from_label(value.trim()).map(ShadowDepth::index))
}

/// Current choices plus the artifacts generated from them.
#[derive(Debug, Clone)]
pub struct Configurator {
    config: Configuration,
    color_text: String,
    outputs: GeneratedOutput,
}

impl Default for Configurator {
    fn default() -> Self {
        Self::new()
    }
}

impl Configurator {
    /// Creates a configurator holding the default configuration.
    pub fn new() -> Self {
        Self::from_config(Configuration::default())
    }

    /// Creates a configurator starting from an existing configuration.
    pub fn from_config(config: Configuration) -> Self {
        let outputs = generate(&config);
        Self {
            color_text: config.primary_color.clone(),
            config,
            outputs,
        }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// Returns the text of the color input, which may hold a rejected value.
    pub fn color_text(&self) -> &str {
        &self.color_text
    }

    /// Returns the artifacts generated from the current configuration.
    pub fn outputs(&self) -> &GeneratedOutput {
        &self.outputs
    }

    /// Returns one generated artifact.
    pub fn output(&self, kind: OutputKind) -> &str {
        self.outputs.get(kind)
    }

    /// Applies a field change and regenerates the outputs.
    ///
    /// Returns `false` only when the change was rejected (an invalid typed
    /// color); the previous valid value is kept and nothing is regenerated.
    /// A change that sets a field to its current value is still accepted.
    pub fn apply(&mut self, change: FieldChange) -> bool {
        let config = &mut self.config;
        match change {
            FieldChange::ProjectType(value) => config.project_type = value,
            FieldChange::DesignStyle(value) => config.design_style = value,
            FieldChange::Theme(value) => config.theme = value,
            FieldChange::ColorPicker(value) => {
                self.color_text = value.clone();
                config.primary_color = value;
            }
            FieldChange::ColorText(value) => {
                let valid = is_valid_hex(&value);
                self.color_text = value;
                if !valid {
                    return false;
                }
                config.primary_color = self.color_text.clone();
            }
            FieldChange::PaletteType(value) => config.palette_type = value,
            FieldChange::ShadowDepth(value) => config.shadow_depth = value,
            FieldChange::DeviceTarget(value) => config.device_target = value,
            FieldChange::CssFramework(value) => config.css_framework = value,
            FieldChange::Typography(value) => config.typography = value,
            FieldChange::AnimationType(value) => config.animation_type = value,
            FieldChange::AccessibilityLevel(value) => config.accessibility_level = value,
            FieldChange::JsLibrary(value) => config.js_library = value,
        }
        self.regenerate();
        true
    }

    /// Restores every field to its default and regenerates the outputs.
    pub fn reset(&mut self) -> Notice {
        *self = Self::new();
        Notice::Reset
    }

    fn regenerate(&mut self) {
        self.outputs = generate(&self.config);
    }
}

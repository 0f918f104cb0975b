//! The fixed value sets offered for each axis.

use serde::Serialize;

use super::configuration::Configuration;
use super::types::{AnimationType, CssFramework, DeviceTarget, JsLibrary, Theme, Typography};

/// Suggested project types.
pub const PROJECT_TYPES: &[&str] = &[
    "Landing Page",
    "Dashboard",
    "E-commerce Store",
    "Portfolio",
    "Blog",
    "SaaS Application",
    "Mobile App",
];

/// Suggested design styles.
pub const DESIGN_STYLES: &[&str] = &[
    "Minimalist",
    "Modern",
    "Glassmorphism",
    "Neumorphism",
    "Brutalist",
    "Material Design",
    "Flat Design",
    "Retro",
];

/// Suggested color palette types.
pub const PALETTE_TYPES: &[&str] = &[
    "Monochrome",
    "Complementary",
    "Analogous",
    "Triadic",
    "Split-Complementary",
];

/// WCAG conformance levels.
pub const ACCESSIBILITY_LEVELS: &[&str] = &["A", "AA", "AAA"];

/// Shadow depth labels in index order.
pub const SHADOW_DEPTHS: &[&str] = &["None", "Light", "Medium", "Heavy"];

/// The values offered for one configuration field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisOptions {
    /// Field name as it appears in serialized configurations.
    pub key: &'static str,
    /// Human-readable axis name.
    pub title: &'static str,
    pub values: &'static [&'static str],
    /// Label of the default value.
    pub default: String,
    /// True when values outside `values` are accepted as free text.
    pub free_text: bool,
}

impl AxisOptions {
    /// Returns the position of the default value in `values`, if listed.
    pub fn default_index(&self) -> Option<usize> {
        self.values.iter().position(|value| *value == self.default)
    }
}

/// Catalog of every configuration axis.
pub struct OptionCatalog;

impl OptionCatalog {
    /// Lists every axis in form order with the defaults of [`Configuration::default`].
    pub fn axes() -> Vec<AxisOptions> {
        let defaults = Configuration::default();
        vec![
            axis("projectType", "Project type", PROJECT_TYPES, &defaults.project_type, true),
            axis("designStyle", "Design style", DESIGN_STYLES, &defaults.design_style, true),
            axis("theme", "Theme", Theme::KNOWN, defaults.theme.label(), false),
            axis(
                "paletteType",
                "Palette type",
                PALETTE_TYPES,
                &defaults.palette_type,
                true,
            ),
            axis(
                "shadowDepth",
                "Shadow depth",
                SHADOW_DEPTHS,
                defaults.shadow().label(),
                false,
            ),
            axis(
                "deviceTarget",
                "Device target",
                DeviceTarget::KNOWN,
                defaults.device_target.label(),
                false,
            ),
            axis(
                "cssFramework",
                "CSS framework",
                CssFramework::KNOWN,
                defaults.css_framework.label(),
                false,
            ),
            axis(
                "typography",
                "Typography",
                Typography::KNOWN,
                defaults.typography.label(),
                false,
            ),
            axis(
                "animationType",
                "Animation",
                AnimationType::KNOWN,
                defaults.animation_type.label(),
                false,
            ),
            axis(
                "accessibilityLevel",
                "Accessibility level",
                ACCESSIBILITY_LEVELS,
                &defaults.accessibility_level,
                true,
            ),
            axis(
                "jsLibrary",
                "JS library",
                JsLibrary::KNOWN,
                defaults.js_library.label(),
                false,
            ),
        ]
    }

    /// Looks up one axis by its field key.
    pub fn axis(key: &str) -> Option<AxisOptions> {
        Self::axes().into_iter().find(|axis| axis.key == key)
    }
}

fn axis(
    key: &'static str,
    title: &'static str,
    values: &'static [&'static str],
    default: &str,
    free_text: bool,
) -> AxisOptions {
    AxisOptions {
        key,
        title,
        values,
        default: default.to_string(),
        free_text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axes_cover_every_field() {
        let keys: Vec<_> = OptionCatalog::axes().iter().map(|axis| axis.key).collect();
        assert_eq!(
            keys,
            vec![
                "projectType",
                "designStyle",
                "theme",
                "paletteType",
                "shadowDepth",
                "deviceTarget",
                "cssFramework",
                "typography",
                "animationType",
                "accessibilityLevel",
                "jsLibrary",
            ]
        );
    }

    #[test]
    fn test_axis_keys_match_serialized_configuration() {
        let value = serde_json::to_value(Configuration::default()).unwrap();
        for axis in OptionCatalog::axes() {
            assert!(value.get(axis.key).is_some(), "missing key {}", axis.key);
        }
    }

    #[test]
    fn test_defaults_are_listed_values() {
        for axis in OptionCatalog::axes() {
            assert!(
                axis.default_index().is_some(),
                "default {} not listed for {}",
                axis.default,
                axis.key
            );
        }
    }

    #[test]
    fn test_shadow_axis_default_is_medium() {
        let axis = OptionCatalog::axis("shadowDepth").unwrap();
        assert_eq!(axis.default, "Medium");
        assert_eq!(axis.default_index(), Some(2));
        assert!(!axis.free_text);
    }

    #[test]
    fn test_unknown_axis() {
        assert!(OptionCatalog::axis("borderRadius").is_none());
    }
}

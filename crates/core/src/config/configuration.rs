use serde::{Deserialize, Deserializer, Serialize};

use super::color::is_valid_hex;
use super::types::{
    AnimationType, CssFramework, DeviceTarget, JsLibrary, ShadowDepth, Theme, Typography,
};
use crate::error::{ConfigError, Result};

/// Default primary accent color.
pub const DEFAULT_PRIMARY_COLOR: &str = "#3B82F6";

/// Default shadow depth index (`Medium`).
pub const DEFAULT_SHADOW_DEPTH: u8 = 2;

/// A complete set of design choices.
///
/// This is a plain value: it carries no identity and is rebuilt from the
/// caller's state before every generation. Deserialization fills any missing
/// field from [`Configuration::default`], so a record always has every field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Configuration {
    pub project_type: String,
    pub design_style: String,
    pub theme: Theme,
    /// Primary accent color (`#RRGGBB` or `#RGB`).
    pub primary_color: String,
    pub palette_type: String,
    /// Ordinal shadow depth index, resolved through [`ShadowDepth::from_index`].
    #[serde(deserialize_with = "deserialize_shadow_depth")]
    pub shadow_depth: u8,
    pub device_target: DeviceTarget,
    pub css_framework: CssFramework,
    pub typography: Typography,
    pub animation_type: AnimationType,
    /// WCAG conformance level; only used for display.
    pub accessibility_level: String,
    pub js_library: JsLibrary,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            project_type: "Landing Page".to_string(),
            design_style: "Minimalist".to_string(),
            theme: Theme::Dark,
            primary_color: DEFAULT_PRIMARY_COLOR.to_string(),
            palette_type: "Monochrome".to_string(),
            shadow_depth: DEFAULT_SHADOW_DEPTH,
            device_target: DeviceTarget::Desktop,
            css_framework: CssFramework::Tailwind,
            typography: Typography::Geist,
            animation_type: AnimationType::Rotate,
            accessibility_level: "AA".to_string(),
            js_library: JsLibrary::VanillaJs,
        }
    }
}

impl Configuration {
    /// Serialized field keys in form order.
    pub const KEYS: [&'static str; 12] = [
        "projectType",
        "designStyle",
        "theme",
        "primaryColor",
        "paletteType",
        "shadowDepth",
        "deviceTarget",
        "cssFramework",
        "typography",
        "animationType",
        "accessibilityLevel",
        "jsLibrary",
    ];

    /// Returns the display value of a field by its serialized key.
    ///
    /// The shadow depth is returned as its resolved label.
    pub fn value_of(&self, key: &str) -> Option<String> {
        let value = match key {
            "projectType" => self.project_type.clone(),
            "designStyle" => self.design_style.clone(),
            "theme" => self.theme.to_string(),
            "primaryColor" => self.primary_color.clone(),
            "paletteType" => self.palette_type.clone(),
            "shadowDepth" => self.shadow().to_string(),
            "deviceTarget" => self.device_target.to_string(),
            "cssFramework" => self.css_framework.to_string(),
            "typography" => self.typography.to_string(),
            "animationType" => self.animation_type.to_string(),
            "accessibilityLevel" => self.accessibility_level.clone(),
            "jsLibrary" => self.js_library.to_string(),
            _ => return None,
        };
        Some(value)
    }

    /// Returns the resolved shadow depth level.
    pub fn shadow(&self) -> ShadowDepth {
        ShadowDepth::from_index(self.shadow_depth)
    }

    /// Sets the project type.
    pub fn with_project_type(mut self, project_type: impl Into<String>) -> Self {
        self.project_type = project_type.into();
        self
    }

    /// Sets the design style.
    pub fn with_design_style(mut self, design_style: impl Into<String>) -> Self {
        self.design_style = design_style.into();
        self
    }

    /// Sets the theme.
    pub fn with_theme(mut self, theme: impl Into<Theme>) -> Self {
        self.theme = theme.into();
        self
    }

    /// Sets the primary color if it is a valid hex color.
    pub fn with_primary_color(mut self, color: impl Into<String>) -> Result<Self> {
        let color = color.into();
        if !is_valid_hex(&color) {
            return Err(ConfigError::InvalidColor(color));
        }
        self.primary_color = color;
        Ok(self)
    }

    /// Sets the palette type.
    pub fn with_palette_type(mut self, palette_type: impl Into<String>) -> Self {
        self.palette_type = palette_type.into();
        self
    }

    /// Sets the shadow depth index.
    pub fn with_shadow_depth(mut self, index: u8) -> Self {
        self.shadow_depth = index;
        self
    }

    /// Sets the device target.
    pub fn with_device_target(mut self, device_target: impl Into<DeviceTarget>) -> Self {
        self.device_target = device_target.into();
        self
    }

    /// Sets the CSS framework.
    pub fn with_css_framework(mut self, css_framework: impl Into<CssFramework>) -> Self {
        self.css_framework = css_framework.into();
        self
    }

    /// Sets the typography.
    pub fn with_typography(mut self, typography: impl Into<Typography>) -> Self {
        self.typography = typography.into();
        self
    }

    /// Sets the animation type.
    pub fn with_animation_type(mut self, animation_type: impl Into<AnimationType>) -> Self {
        self.animation_type = animation_type.into();
        self
    }

    /// Sets the accessibility level.
    pub fn with_accessibility_level(mut self, level: impl Into<String>) -> Self {
        self.accessibility_level = level.into();
        self
    }

    /// Sets the JavaScript library.
    pub fn with_js_library(mut self, js_library: impl Into<JsLibrary>) -> Self {
        self.js_library = js_library.into();
        self
    }

    /// Validates the configuration.
    ///
    /// The primary color is the only field with a syntactic constraint.
    pub fn validate(&self) -> Result<()> {
        if !is_valid_hex(&self.primary_color) {
            return Err(ConfigError::InvalidColor(self.primary_color.clone()));
        }
        Ok(())
    }

    /// Parses a JSON preset. Missing keys take their default values.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Preset(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes the configuration to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Preset(e.to_string()))
    }
}

/// Deserialize a shadow depth index. Integers outside `0..=3`, negative ones
/// included, become the `Medium` index.
fn deserialize_shadow_depth<'de, D>(deserializer: D) -> std::result::Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let index = i64::deserialize(deserializer)?;
    Ok(u8::try_from(index)
        .ok()
        .filter(|index| usize::from(*index) < ShadowDepth::LEVELS.len())
        .unwrap_or(DEFAULT_SHADOW_DEPTH))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_configuration() {
        let config = Configuration::default();
        assert_eq!(config.project_type, "Landing Page");
        assert_eq!(config.design_style, "Minimalist");
        assert_eq!(config.theme, Theme::Dark);
        assert_eq!(config.primary_color, "#3B82F6");
        assert_eq!(config.palette_type, "Monochrome");
        assert_eq!(config.shadow(), ShadowDepth::Medium);
        assert_eq!(config.device_target, DeviceTarget::Desktop);
        assert_eq!(config.css_framework, CssFramework::Tailwind);
        assert_eq!(config.typography, Typography::Geist);
        assert_eq!(config.animation_type, AnimationType::Rotate);
        assert_eq!(config.accessibility_level, "AA");
        assert_eq!(config.js_library, JsLibrary::VanillaJs);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builders() {
        let config = Configuration::default()
            .with_project_type("Dashboard")
            .with_theme("Light")
            .with_shadow_depth(0)
            .with_css_framework(CssFramework::Bulma)
            .with_js_library("React");

        assert_eq!(config.project_type, "Dashboard");
        assert_eq!(config.theme, Theme::Light);
        assert_eq!(config.shadow(), ShadowDepth::None);
        assert_eq!(config.css_framework, CssFramework::Bulma);
        assert_eq!(config.js_library, JsLibrary::React);
    }

    #[test]
    fn test_with_primary_color_rejects_invalid() {
        let result = Configuration::default().with_primary_color("3B82F6");
        assert_eq!(result, Err(ConfigError::InvalidColor("3B82F6".to_string())));

        let config = Configuration::default().with_primary_color("#f00").unwrap();
        assert_eq!(config.primary_color, "#f00");
    }

    #[test]
    fn test_from_json_fills_missing_fields() {
        let json = r##"{"projectType": "Portfolio", "theme": "Light", "shadowDepth": 3}"##;
        let config = Configuration::from_json(json).unwrap();

        assert_eq!(config.project_type, "Portfolio");
        assert_eq!(config.theme, Theme::Light);
        assert_eq!(config.shadow(), ShadowDepth::Heavy);
        assert_eq!(config.css_framework, CssFramework::Tailwind);
        assert_eq!(config.primary_color, DEFAULT_PRIMARY_COLOR);
    }

    #[test]
    fn test_from_json_out_of_range_shadow_is_medium() {
        for depth in [serde_json::json!(300), serde_json::json!(-1), serde_json::json!(4)] {
            let json = serde_json::json!({ "shadowDepth": depth }).to_string();
            let config = Configuration::from_json(&json).unwrap();
            assert_eq!(config.shadow_depth, DEFAULT_SHADOW_DEPTH, "depth {depth}");
            assert_eq!(config.shadow(), ShadowDepth::Medium);
        }

        let config = Configuration::from_json(r#"{"shadowDepth": 0}"#).unwrap();
        assert_eq!(config.shadow(), ShadowDepth::None);
    }

    #[test]
    fn test_from_json_rejects_non_integer_shadow() {
        assert!(matches!(
            Configuration::from_json(r#"{"shadowDepth": "deep"}"#),
            Err(ConfigError::Preset(_))
        ));
    }

    #[test]
    fn test_from_json_keeps_unknown_labels() {
        let json = r##"{"cssFramework": "Foundation", "animationType": "Wobble"}"##;
        let config = Configuration::from_json(json).unwrap();

        assert_eq!(
            config.css_framework,
            CssFramework::Other("Foundation".to_string())
        );
        assert_eq!(
            config.animation_type,
            AnimationType::Other("Wobble".to_string())
        );
    }

    #[test]
    fn test_from_json_rejects_invalid_color() {
        let json = r##"{"primaryColor": "blue"}"##;
        assert_eq!(
            Configuration::from_json(json),
            Err(ConfigError::InvalidColor("blue".to_string()))
        );
    }

    #[test]
    fn test_from_json_rejects_malformed_json() {
        assert!(matches!(
            Configuration::from_json("{not json"),
            Err(ConfigError::Preset(_))
        ));
    }

    #[test]
    fn test_value_of() {
        let config = Configuration::default();
        assert_eq!(config.value_of("cssFramework").as_deref(), Some("Tailwind CSS"));
        assert_eq!(config.value_of("shadowDepth").as_deref(), Some("Medium"));
        assert_eq!(config.value_of("primaryColor").as_deref(), Some("#3B82F6"));
        assert_eq!(config.value_of("unknown"), None);
    }

    #[test]
    fn test_keys_match_serialized_fields() {
        let value = serde_json::to_value(Configuration::default()).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), Configuration::KEYS.len());
        for key in Configuration::KEYS {
            assert!(object.contains_key(key), "{key}");
        }
    }

    #[test]
    fn test_json_uses_camel_case_labels() {
        let json = Configuration::default().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["projectType"], "Landing Page");
        assert_eq!(value["cssFramework"], "Tailwind CSS");
        assert_eq!(value["jsLibrary"], "Vanilla JS");
        assert_eq!(value["shadowDepth"], 2);
    }
}

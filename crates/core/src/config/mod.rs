mod catalog;
mod color;
mod configuration;
mod types;

pub use catalog::{
    AxisOptions, OptionCatalog, ACCESSIBILITY_LEVELS, DESIGN_STYLES, PALETTE_TYPES,
    PROJECT_TYPES, SHADOW_DEPTHS,
};
pub use color::is_valid_hex;
pub use configuration::{Configuration, DEFAULT_PRIMARY_COLOR, DEFAULT_SHADOW_DEPTH};
pub use types::{
    AnimationType, CssFramework, DeviceTarget, JsLibrary, ShadowDepth, Theme, Typography,
};

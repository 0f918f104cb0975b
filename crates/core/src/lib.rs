//! Pure generation logic for designprompt - no I/O, no async, no side effects.
//!
//! This crate provides:
//! - The [`Configuration`] record and the option catalog for each axis
//! - Prompt rendering and starter-document assembly
//! - A [`Configurator`] state holder for interactive callers
//!
//! # Example
//!
//! ```
//! use designprompt_core::{assemble_document, render_prompt, Configuration, JsLibrary};
//!
//! let config = Configuration::default()
//!     .with_project_type("Portfolio")
//!     .with_js_library(JsLibrary::Vue);
//!
//! let prompt = render_prompt(&config);
//! assert!(prompt.starts_with("Create a Portfolio with Minimalist design style"));
//!
//! let document = assemble_document(&config);
//! assert!(document.contains("<title>Portfolio</title>"));
//! assert!(document.contains("vue.global.js"));
//! ```

pub mod config;
pub mod configurator;
mod error;
pub mod notice;
pub mod render;

pub use config::{
    is_valid_hex, AnimationType, AxisOptions, Configuration, CssFramework, DeviceTarget,
    JsLibrary, OptionCatalog, ShadowDepth, Theme, Typography,
};
pub use configurator::{parse_shadow_depth, Configurator, FieldChange};
pub use error::{ConfigError, Result};
pub use notice::Notice;
pub use render::{
    assemble_document, generate, render_prompt, resolve_cdn_links, resolve_markup,
    resolve_script, resolve_stylesheet, GeneratedOutput, OutputKind,
};

mod cdn;
mod document;
mod escape;
mod markup;
mod prompt;
mod script;
mod style;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::Configuration;

pub use cdn::{framework_links, library_scripts, resolve_cdn_links, typography_links};
pub use document::assemble_document;
pub use markup::{bootstrap_theme, resolve_markup, tailwind_padding, wrapper_classes};
pub use prompt::render_prompt;
pub use script::resolve_script;
pub use style::{
    animation_rule, background_color, container_width, font_family, resolve_stylesheet,
    responsive_rules, shadow_rule, text_color, KEYFRAMES,
};

/// Which generated artifact an operation refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputKind {
    Prompt,
    Code,
}

impl OutputKind {
    /// Capitalized name used in notices.
    pub fn title(self) -> &'static str {
        match self {
            OutputKind::Prompt => "Prompt",
            OutputKind::Code => "Code",
        }
    }
}

impl fmt::Display for OutputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputKind::Prompt => f.write_str("prompt"),
            OutputKind::Code => f.write_str("code"),
        }
    }
}

/// Both artifacts generated from one configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedOutput {
    pub prompt: String,
    pub document: String,
}

impl GeneratedOutput {
    /// Returns the artifact of the given kind.
    pub fn get(&self, kind: OutputKind) -> &str {
        match kind {
            OutputKind::Prompt => &self.prompt,
            OutputKind::Code => &self.document,
        }
    }
}

/// Generates the prompt and the starter document.
pub fn generate(config: &Configuration) -> GeneratedOutput {
    GeneratedOutput {
        prompt: render_prompt(config),
        document: assemble_document(config),
    }
}

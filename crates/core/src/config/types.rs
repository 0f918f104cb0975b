//! Option axes of a configuration.
//!
//! Every enumerated axis is a closed set of known labels plus an `Other`
//! variant. Unknown labels are kept verbatim so they still show up in the
//! prompt, while the resolvers treat them as "no extra output".

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

macro_rules! option_axis {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $label:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// A label outside the known set.
            Other(String),
        }

        impl $name {
            /// Labels of the known variants, in catalog order.
            pub const KNOWN: &'static [&'static str] = &[$($label),+];

            /// Returns the display label of this value.
            pub fn label(&self) -> &str {
                match self {
                    $( Self::$variant => $label, )+
                    Self::Other(label) => label,
                }
            }

            /// Parses a label, matching known labels without regard to ASCII case.
            pub fn from_label_ignore_case(value: &str) -> Self {
                $(
                    if value.eq_ignore_ascii_case($label) {
                        return Self::$variant;
                    }
                )+
                Self::Other(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                match value.as_str() {
                    $( $label => Self::$variant, )+
                    _ => Self::Other(value),
                }
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::from(value.to_string())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                match value {
                    $name::Other(label) => label,
                    known => known.label().to_string(),
                }
            }
        }

        impl FromStr for $name {
            type Err = Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self::from(s))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

option_axis! {
    /// Color theme of the generated page.
    pub enum Theme {
        Dark => "Dark",
        Light => "Light",
        Auto => "Auto",
    }
}

option_axis! {
    /// Device class the layout is optimized for.
    pub enum DeviceTarget {
        Mobile => "Mobile",
        Desktop => "Desktop",
        Responsive => "Responsive",
    }
}

option_axis! {
    /// CSS framework loaded by the starter document.
    pub enum CssFramework {
        Tailwind => "Tailwind CSS",
        Bootstrap5 => "Bootstrap 5",
        Bulma => "Bulma",
    }
}

option_axis! {
    /// Font family used by the starter document.
    pub enum Typography {
        Geist => "Geist",
        Inter => "Inter",
        Roboto => "Roboto",
        Poppins => "Poppins",
    }
}

option_axis! {
    /// Entrance or idle animation applied to the headings.
    pub enum AnimationType {
        Rotate => "Rotate",
        Fade => "Fade",
        Slide => "Slide",
        Scale => "Scale",
        Bounce => "Bounce",
        Parallax => "Parallax",
        None => "None",
    }
}

option_axis! {
    /// JavaScript library the interactivity snippet is written for.
    pub enum JsLibrary {
        VanillaJs => "Vanilla JS",
        Alpine => "Alpine.js",
        React => "React",
        Vue => "Vue",
        Gsap => "GSAP",
    }
}

/// Shadow depth of interactive elements.
///
/// Configurations store the depth as an ordinal index; resolvers only ever
/// see the resolved level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShadowDepth {
    None,
    Light,
    Medium,
    Heavy,
}

impl ShadowDepth {
    /// Levels in index order.
    pub const LEVELS: [ShadowDepth; 4] = [
        ShadowDepth::None,
        ShadowDepth::Light,
        ShadowDepth::Medium,
        ShadowDepth::Heavy,
    ];

    /// Resolves an ordinal index. Indices outside `0..=3` resolve to `Medium`.
    pub fn from_index(index: u8) -> Self {
        Self::LEVELS
            .get(usize::from(index))
            .copied()
            .unwrap_or(ShadowDepth::Medium)
    }

    /// Returns the ordinal index of this level.
    pub fn index(self) -> u8 {
        match self {
            ShadowDepth::None => 0,
            ShadowDepth::Light => 1,
            ShadowDepth::Medium => 2,
            ShadowDepth::Heavy => 3,
        }
    }

    /// Returns the display label of this level.
    pub fn label(self) -> &'static str {
        match self {
            ShadowDepth::None => "None",
            ShadowDepth::Light => "Light",
            ShadowDepth::Medium => "Medium",
            ShadowDepth::Heavy => "Heavy",
        }
    }

    /// Parses a level label (ASCII case-insensitive).
    pub fn from_label(value: &str) -> Option<Self> {
        Self::LEVELS
            .into_iter()
            .find(|level| level.label().eq_ignore_ascii_case(value))
    }
}

impl fmt::Display for ShadowDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

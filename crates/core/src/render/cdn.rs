//! CDN tags needed by the chosen framework, font and library.

use crate::config::{Configuration, CssFramework, JsLibrary, Typography};

const GOOGLE_FONTS_PRECONNECT: &str = r#"<link rel="preconnect" href="https://fonts.googleapis.com">"#;
const GSTATIC_PRECONNECT: &str = r#"<link rel="preconnect" href="https://fonts.gstatic.com" crossorigin>"#;

/// Returns the tags that load the CSS framework.
pub fn framework_links(framework: &CssFramework) -> &'static [&'static str] {
    match framework {
        CssFramework::Tailwind => &[r#"<script src="https://cdn.tailwindcss.com"></script>"#],
        CssFramework::Bootstrap5 => &[
            r#"<link href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.0/dist/css/bootstrap.min.css" rel="stylesheet">"#,
        ],
        CssFramework::Bulma => &[
            r#"<link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/bulma@0.9.4/css/bulma.min.css">"#,
        ],
        CssFramework::Other(_) => &[],
    }
}

/// Returns the tags that load the font family.
pub fn typography_links(typography: &Typography) -> &'static [&'static str] {
    match typography {
        Typography::Geist => {
            &[r#"<link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/geist@1.0.0/style.css">"#]
        }
        Typography::Inter => &[
            GOOGLE_FONTS_PRECONNECT,
            GSTATIC_PRECONNECT,
            r#"<link href="https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600;700&display=swap" rel="stylesheet">"#,
        ],
        Typography::Roboto => &[
            GOOGLE_FONTS_PRECONNECT,
            GSTATIC_PRECONNECT,
            r#"<link href="https://fonts.googleapis.com/css2?family=Roboto:wght@400;500;700&display=swap" rel="stylesheet">"#,
        ],
        Typography::Poppins => &[
            GOOGLE_FONTS_PRECONNECT,
            GSTATIC_PRECONNECT,
            r#"<link href="https://fonts.googleapis.com/css2?family=Poppins:wght@400;500;600;700&display=swap" rel="stylesheet">"#,
        ],
        Typography::Other(_) => &[],
    }
}

/// Returns the tags that load the JavaScript library. Vanilla JS needs none.
pub fn library_scripts(library: &JsLibrary) -> &'static [&'static str] {
    match library {
        JsLibrary::Alpine => {
            &[r#"<script defer src="https://unpkg.com/alpinejs@3.x.x/dist/cdn.min.js"></script>"#]
        }
        JsLibrary::React => &[
            r#"<script crossorigin src="https://unpkg.com/react@18/umd/react.development.js"></script>"#,
            r#"<script crossorigin src="https://unpkg.com/react-dom@18/umd/react-dom.development.js"></script>"#,
        ],
        JsLibrary::Vue => &[r#"<script src="https://unpkg.com/vue@3/dist/vue.global.js"></script>"#],
        JsLibrary::Gsap => &[
            r#"<script src="https://cdnjs.cloudflare.com/ajax/libs/gsap/3.12.2/gsap.min.js"></script>"#,
        ],
        JsLibrary::VanillaJs | JsLibrary::Other(_) => &[],
    }
}

/// Resolves every CDN tag in document order: framework, then font, then library.
pub fn resolve_cdn_links(config: &Configuration) -> Vec<&'static str> {
    framework_links(&config.css_framework)
        .iter()
        .chain(typography_links(&config.typography))
        .chain(library_scripts(&config.js_library))
        .copied()
        .collect()
}

use super::escape::html_escape;
use crate::config::{Configuration, CssFramework, DeviceTarget, Theme};

/// Returns the Tailwind padding utilities for a device target.
pub fn tailwind_padding(device_target: &DeviceTarget) -> &'static str {
    match device_target {
        DeviceTarget::Mobile => "px-4 py-6",
        DeviceTarget::Desktop => "px-8 py-12 lg:px-16 lg:py-20",
        DeviceTarget::Responsive | DeviceTarget::Other(_) => {
            "px-4 py-6 md:px-8 md:py-12 lg:px-16 lg:py-20"
        }
    }
}

/// Returns the Bootstrap background/text utility pair for a theme.
pub fn bootstrap_theme(theme: &Theme) -> &'static str {
    match theme {
        Theme::Dark => "bg-dark text-light",
        _ => "bg-light text-dark",
    }
}

/// Returns the class list of the page wrapper, or `None` when the framework
/// has no wrapper classes.
pub fn wrapper_classes(config: &Configuration) -> Option<String> {
    match config.css_framework {
        CssFramework::Tailwind => {
            let mut classes = vec!["min-h-screen", tailwind_padding(&config.device_target)];
            if config.theme == Theme::Dark {
                classes.push("dark");
            }
            Some(classes.join(" "))
        }
        CssFramework::Bootstrap5 => Some(format!(
            "min-vh-100 {}",
            bootstrap_theme(&config.theme)
        )),
        CssFramework::Bulma | CssFramework::Other(_) => None,
    }
}

/// Resolves the body markup: header plus hero section.
pub fn resolve_markup(config: &Configuration) -> String {
    let wrapper = match wrapper_classes(config) {
        Some(classes) => format!(r#"<div class="{classes}">"#),
        None => "<div>".to_string(),
    };
    let project_type = html_escape(&config.project_type);
    let css_framework = html_escape(config.css_framework.label());
    let design_style = html_escape(&config.design_style.to_lowercase());
    let theme = html_escape(&config.theme.label().to_lowercase());

    format!(
        r#"    {wrapper}
        <header class="header">
            <div class="container">
                <h1 class="title">{project_type}</h1>
                <p class="subtitle">Built with {css_framework}</p>
            </div>
        </header>

        <main class="main-content">
            <div class="container">
                <section class="hero-section">
                    <h2 class="hero-title">Welcome to Your {project_type}</h2>
                    <p class="hero-description">This is a {design_style} design with {theme} theme.</p>
                    <button class="cta-button">Get Started</button>
                </section>
            </div>
        </main>
    </div>"#
    )
}

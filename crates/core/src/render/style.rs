//! Inline stylesheet of the starter document.
//!
//! The sheet is built from small lookups, one per axis, so each rule can be
//! checked on its own. Rules are indented to sit inside the `<style>` element
//! produced by the document assembler.

use crate::config::{AnimationType, Configuration, DeviceTarget, ShadowDepth, Theme, Typography};

/// Keyframes for every named animation. Emitted regardless of the selected
/// animation type.
pub const KEYFRAMES: &str = r#"        @keyframes rotate {
            0% { transform: rotate(0deg); }
            100% { transform: rotate(5deg); }
        }

        @keyframes fadeIn {
            from { opacity: 0; }
            to { opacity: 1; }
        }

        @keyframes slideIn {
            from { transform: translateX(-100%); }
            to { transform: translateX(0); }
        }

        @keyframes scale {
            0% { transform: scale(1); }
            100% { transform: scale(1.05); }
        }

        @keyframes bounce {
            0%, 20%, 53%, 80%, 100% { transform: translate3d(0,0,0); }
            40%, 43% { transform: translate3d(0, -10px, 0); }
            70% { transform: translate3d(0, -5px, 0); }
            90% { transform: translate3d(0, -2px, 0); }
        }"#;

const MOBILE_RULES: &str = r#"        @media (max-width: 768px) {
            .hero-title { font-size: 2rem; }
            .title { font-size: 2rem; }
        }"#;

const RESPONSIVE_RULES: &str = r#"        @media (max-width: 768px) {
            .hero-title { font-size: 2rem; }
            .title { font-size: 2rem; }
            .hero-section { padding: 2rem 0; }
        }

        @media (min-width: 1200px) {
            .hero-title { font-size: 4rem; }
        }"#;

/// Returns the `font-family` value for a typography choice.
pub fn font_family(typography: &Typography) -> &'static str {
    match typography {
        Typography::Inter => "'Inter', sans-serif",
        Typography::Roboto => "'Roboto', sans-serif",
        Typography::Poppins => "'Poppins', sans-serif",
        Typography::Geist | Typography::Other(_) => "'Geist', system-ui, sans-serif",
    }
}

/// Returns the body text color. Only `Dark` gets light text.
pub fn text_color(theme: &Theme) -> &'static str {
    match theme {
        Theme::Dark => "#f8f9fa",
        _ => "#333",
    }
}

/// Returns the body background. `Auto` gets an off-white, every other
/// non-dark theme plain white.
pub fn background_color(theme: &Theme) -> &'static str {
    match theme {
        Theme::Dark => "#1a1a1a",
        Theme::Auto => "#f8f9fa",
        _ => "#ffffff",
    }
}

/// Returns the `.container` max-width.
pub fn container_width(device_target: &DeviceTarget) -> &'static str {
    match device_target {
        DeviceTarget::Mobile => "480px",
        _ => "1200px",
    }
}

/// Returns the `box-shadow` declaration for a depth level.
pub fn shadow_rule(depth: ShadowDepth) -> &'static str {
    match depth {
        ShadowDepth::None => "box-shadow: none;",
        ShadowDepth::Light => "box-shadow: 0 2px 4px rgba(0,0,0,0.1);",
        ShadowDepth::Medium => "box-shadow: 0 4px 8px rgba(0,0,0,0.15);",
        ShadowDepth::Heavy => "box-shadow: 0 10px 25px rgba(0,0,0,0.2);",
    }
}

/// Returns the heading animation declaration, or an empty string when the
/// animation type adds none.
pub fn animation_rule(animation_type: &AnimationType) -> &'static str {
    match animation_type {
        AnimationType::Rotate => "animation: rotate 3s ease-in-out infinite alternate;",
        AnimationType::Fade => "animation: fadeIn 2s ease-in-out;",
        AnimationType::Slide => "animation: slideIn 1s ease-out;",
        AnimationType::Scale => "animation: scale 2s ease-in-out infinite alternate;",
        AnimationType::Bounce => "animation: bounce 2s infinite;",
        AnimationType::Parallax => "transform: translateZ(0);",
        AnimationType::None | AnimationType::Other(_) => "",
    }
}

/// Returns the media-query block for a device target, or an empty string.
pub fn responsive_rules(device_target: &DeviceTarget) -> &'static str {
    match device_target {
        DeviceTarget::Mobile => MOBILE_RULES,
        DeviceTarget::Responsive => RESPONSIVE_RULES,
        DeviceTarget::Desktop | DeviceTarget::Other(_) => "",
    }
}

/// Renders an optional declaration as its own line inside a rule block.
fn declaration_line(declaration: &str) -> String {
    if declaration.is_empty() {
        String::new()
    } else {
        format!("\n            {declaration}")
    }
}

/// Resolves the complete inline stylesheet.
pub fn resolve_stylesheet(config: &Configuration) -> String {
    let animation = declaration_line(animation_rule(&config.animation_type));

    let mut css = format!(
        r#"        :root {{
            --primary-color: {primary_color};
            --font-family: {font_family};
        }}

        * {{
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }}

        body {{
            font-family: var(--font-family);
            line-height: 1.6;
            color: {text_color};
            background: {background};
        }}

        .container {{
            max-width: {container_width};
            margin: 0 auto;
            padding: 0 1rem;
        }}

        .header {{
            padding: 2rem 0;
            text-align: center;
        }}

        .title {{
            font-size: 2.5rem;
            font-weight: bold;
            color: var(--primary-color);
            margin-bottom: 0.5rem;{animation}
        }}

        .subtitle {{
            font-size: 1.1rem;
            opacity: 0.8;
        }}

        .hero-section {{
            text-align: center;
            padding: 4rem 0;
        }}

        .hero-title {{
            font-size: 3rem;
            margin-bottom: 1rem;{animation}
        }}

        .hero-description {{
            font-size: 1.2rem;
            margin-bottom: 2rem;
            opacity: 0.9;
        }}

        .cta-button {{
            background: var(--primary-color);
            color: white;
            padding: 1rem 2rem;
            border: none;
            border-radius: 0.5rem;
            font-size: 1.1rem;
            font-weight: 500;
            cursor: pointer;
            transition: transform 0.2s ease;
            {shadow}
        }}

        .cta-button:hover {{
            transform: translateY(-2px);
            {hover_shadow}
        }}"#,
        primary_color = config.primary_color,
        font_family = font_family(&config.typography),
        text_color = text_color(&config.theme),
        background = background_color(&config.theme),
        container_width = container_width(&config.device_target),
        shadow = shadow_rule(config.shadow()),
        hover_shadow = shadow_rule(ShadowDepth::Heavy),
    );

    let responsive = responsive_rules(&config.device_target);
    if !responsive.is_empty() {
        css.push_str("\n\n");
        css.push_str(responsive);
    }

    css.push_str("\n\n");
    css.push_str(KEYFRAMES);
    css
}

use crate::config::Configuration;

/// Renders the natural-language design prompt.
///
/// Plain substitution into a fixed sentence template; the shadow depth is
/// substituted by its resolved label.
pub fn render_prompt(config: &Configuration) -> String {
    format!(
        "Create a {project_type} with {design_style} design style using {theme} theme. \
         Use {primary_color} as the primary accent color with {palette_type} color palette \
         and {shadow} shadows for depth. \
         The design should be optimized for {device_target} devices using {css_framework}. \
         Apply {typography} typography with {animation_type} animations. \
         Ensure the design is modern, accessible (WCAG {accessibility_level}), \
         and user-friendly with proper spacing and visual hierarchy.",
        project_type = config.project_type,
        design_style = config.design_style,
        theme = config.theme,
        primary_color = config.primary_color,
        palette_type = config.palette_type,
        shadow = config.shadow(),
        device_target = config.device_target,
        css_framework = config.css_framework,
        typography = config.typography,
        animation_type = config.animation_type,
        accessibility_level = config.accessibility_level,
    )
}

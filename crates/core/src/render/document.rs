use super::cdn::resolve_cdn_links;
use super::escape::html_escape;
use super::markup::resolve_markup;
use super::script::resolve_script;
use super::style::resolve_stylesheet;
use crate::config::Configuration;

/// Assembles the complete starter document.
///
/// Purely structural: the four resolver outputs are placed into a fixed
/// HTML5 skeleton and nothing is validated.
pub fn assemble_document(config: &Configuration) -> String {
    let title = html_escape(&config.project_type);
    let cdn_links: String = resolve_cdn_links(config)
        .into_iter()
        .map(|link| format!("\n    {link}"))
        .collect();
    let css = resolve_stylesheet(config);
    let html = resolve_markup(config);
    let js = resolve_script(config);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>{cdn_links}
    <style>
{css}
    </style>
</head>
<body>
{html}

    <script>
{js}
    </script>
</body>
</html>"#
    )
}

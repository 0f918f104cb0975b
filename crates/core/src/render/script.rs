//! Interactivity snippets, one template per JavaScript library.

use super::escape::js_escape;
use crate::config::{Configuration, JsLibrary};

const ALPINE_SCRIPT: &str = r#"        // Alpine.js reactive data
        document.addEventListener('alpine:init', () => {
            Alpine.data('app', () => ({
                message: 'Hello from Alpine.js!',
                toggleMessage() {
                    this.message = this.message === 'Hello from Alpine.js!'
                        ? 'Alpine.js is awesome!'
                        : 'Hello from Alpine.js!';
                }
            }));
        });"#;

const REACT_SCRIPT: &str = r#"        // React component example
        const { useState } = React;

        function App() {
            const [count, setCount] = useState(0);

            return React.createElement('div', null,
                React.createElement('h3', null, 'React Counter: ', count),
                React.createElement('button', {
                    onClick: () => setCount(count + 1),
                    style: { margin: '10px', padding: '5px 10px' }
                }, 'Increment')
            );
        }

        // Render React component
        ReactDOM.render(React.createElement(App), document.querySelector('.main-content'));"#;

const VUE_SCRIPT: &str = r#"        // Vue.js application
        const { createApp } = Vue;

        createApp({
            data() {
                return {
                    message: 'Hello Vue.js!',
                    count: 0
                };
            },
            methods: {
                increment() {
                    this.count++;
                }
            }
        }).mount('.main-content');"#;

const GSAP_SCRIPT: &str = r#"        // GSAP animations
        gsap.from('.title', {
            duration: 1,
            y: -50,
            opacity: 0,
            ease: 'bounce'
        });

        gsap.from('.hero-title', {
            duration: 1.5,
            scale: 0.5,
            opacity: 0,
            delay: 0.3
        });

        // Button hover animation
        document.querySelector('.cta-button').addEventListener('mouseenter', function() {
            gsap.to(this, { duration: 0.3, scale: 1.05 });
        });

        document.querySelector('.cta-button').addEventListener('mouseleave', function() {
            gsap.to(this, { duration: 0.3, scale: 1 });
        });"#;

/// Renders the Vanilla JS template, the fallback for every library without
/// its own template.
fn vanilla_script(config: &Configuration) -> String {
    let project_type = js_escape(&config.project_type);
    let primary_color = js_escape(&config.primary_color);

    format!(
        r#"        // Vanilla JavaScript
        document.addEventListener('DOMContentLoaded', function() {{
            console.log('{project_type} loaded successfully!');

            // Add click event to CTA button
            const ctaButton = document.querySelector('.cta-button');
            if (ctaButton) {{
                ctaButton.addEventListener('click', function() {{
                    alert('Welcome to your {project_type}!');
                }});
            }}

            // Add some interactivity
            const title = document.querySelector('.hero-title');
            if (title) {{
                title.addEventListener('click', function() {{
                    this.style.color = this.style.color === '{primary_color}' ? 'inherit' : '{primary_color}';
                }});
            }}
        }});"#
    )
}

/// Resolves the script snippet for the configured library. Exactly one
/// template is used.
pub fn resolve_script(config: &Configuration) -> String {
    match config.js_library {
        JsLibrary::Alpine => ALPINE_SCRIPT.to_string(),
        JsLibrary::React => REACT_SCRIPT.to_string(),
        JsLibrary::Vue => VUE_SCRIPT.to_string(),
        JsLibrary::Gsap => GSAP_SCRIPT.to_string(),
        JsLibrary::VanillaJs | JsLibrary::Other(_) => vanilla_script(config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vanilla_script_references_project_type_twice() {
        let script = resolve_script(&Configuration::default());
        assert!(script.starts_with("        // Vanilla JavaScript"));
        assert_eq!(script.matches("Landing Page").count(), 2);
        assert!(script.contains("console.log('Landing Page loaded successfully!');"));
        assert!(script.contains("alert('Welcome to your Landing Page!');"));
    }

    #[test]
    fn test_vanilla_script_toggles_primary_color() {
        let config = Configuration::default().with_primary_color("#ff0000").unwrap();
        let script = resolve_script(&config);
        assert!(script.contains(
            "this.style.color = this.style.color === '#ff0000' ? 'inherit' : '#ff0000';"
        ));
    }

    #[test]
    fn test_unknown_library_falls_back_to_vanilla() {
        let config = Configuration::default().with_js_library("Svelte");
        assert_eq!(resolve_script(&config), resolve_script(&Configuration::default()));
    }

    #[test]
    fn test_react_template() {
        let script = resolve_script(&Configuration::default().with_js_library(JsLibrary::React));
        assert!(script.contains("React.createElement('h3', null, 'React Counter: ', count)"));
        assert!(script.contains("document.querySelector('.main-content')"));
        assert!(!script.contains("Landing Page"));
    }

    #[test]
    fn test_vue_template() {
        let script = resolve_script(&Configuration::default().with_js_library(JsLibrary::Vue));
        assert!(script.contains("const { createApp } = Vue;"));
        assert!(script.contains("this.count++;"));
        assert!(script.ends_with("}).mount('.main-content');"));
    }

    #[test]
    fn test_gsap_template() {
        let script = resolve_script(&Configuration::default().with_js_library(JsLibrary::Gsap));
        assert_eq!(script.matches("gsap.from(").count(), 2);
        assert!(script.contains("'mouseenter'"));
        assert!(script.contains("'mouseleave'"));
    }

    #[test]
    fn test_alpine_template() {
        let script = resolve_script(&Configuration::default().with_js_library(JsLibrary::Alpine));
        assert!(script.contains("document.addEventListener('alpine:init'"));
        assert!(script.contains("toggleMessage()"));
    }

    #[test]
    fn test_templates_are_exclusive() {
        let markers = [
            "// Alpine.js reactive data",
            "// React component example",
            "// Vue.js application",
            "// GSAP animations",
            "// Vanilla JavaScript",
        ];
        for library in JsLibrary::KNOWN {
            let script = resolve_script(&Configuration::default().with_js_library(*library));
            let found = markers.iter().filter(|marker| script.contains(*marker)).count();
            assert_eq!(found, 1, "{library}");
        }
    }

    #[test]
    fn test_project_type_is_escaped_in_strings() {
        let config = Configuration::default().with_project_type("Bob's Shop");
        let script = resolve_script(&config);
        assert!(script.contains("console.log('Bob\\'s Shop loaded successfully!');"));
    }
}

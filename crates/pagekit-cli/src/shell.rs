//! Server-rendered page shell.
//!
//! Renders the page the way a server would: no effects run, so every
//! mount-gated component shows its pre-mount markup. The `<head>` carries the
//! theme bootstrap script so the stored preference applies before first paint.

use std::rc::Rc;

use dioxus::prelude::*;
use pagekit_core::{theme_bootstrap_script, MemoryDocument, PageKitConfig, Theme, UnavailableStore};
use pagekit_ui::{AccessibilityEnhancer, MainContent, NoSsr, PageKitProvider, Platform, ThemeToggle};

/// Minimal styles for the shell; the skip link stays off-screen until focused.
const SHELL_STYLES: &str = r#"
:root { color-scheme: dark; background: #0a0a0a; color: #f5f5f5; }
:root.light { color-scheme: light; background: #fafaf7; color: #1a1a1a; }
.skip-link { position: absolute; left: -9999px; top: 0; }
.skip-link:focus { left: 1rem; top: 1rem; z-index: 1000; }
"#;

/// Page layout shared by every server render.
#[component]
pub fn Shell(title: String) -> Element {
    rsx! {
        AccessibilityEnhancer {}
        header { class: "site-header",
            span { class: "site-title", "{title}" }
            ThemeToggle {}
        }
        MainContent {
            h1 { "{title}" }
            NoSsr {
                fallback: rsx! {
                    p { class: "placeholder", "Loading local preferences\u{2026}" }
                },
                p { class: "client-note", "Preferences loaded on this device." }
            }
        }
    }
}

#[component]
fn ServerApp(config: PageKitConfig, title: String) -> Element {
    // A server has no document to mutate and no client storage to read.
    let platform = use_hook(|| {
        Platform::new(
            Rc::new(MemoryDocument::new()),
            Rc::new(UnavailableStore),
            config.clone(),
        )
    });

    rsx! {
        PageKitProvider { platform, Shell { title } }
    }
}

/// Render a complete HTML document.
///
/// `initial` is the theme the server already knows about (for example from a
/// cookie); `None` leaves the root unflagged, which is the dark default.
pub fn render_page(config: &PageKitConfig, title: &str, initial: Option<Theme>) -> String {
    let mut dom = VirtualDom::new_with_props(
        ServerApp,
        ServerAppProps {
            config: config.clone(),
            title: title.to_string(),
        },
    );
    dom.rebuild_in_place();
    let body = dioxus_ssr::render(&dom);

    let root_class = match initial {
        Some(Theme::Light) => format!(" class=\"{}\"", escape_html(&config.theme.light_class)),
        _ => String::new(),
    };

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\"{root_class}>\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n<script>{script}</script>\n<style>{styles}</style>\n</head>\n<body>\n{body}\n</body>\n</html>\n",
        title = escape_html(title),
        script = theme_bootstrap_script(&config.theme),
        styles = SHELL_STYLES,
    )
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

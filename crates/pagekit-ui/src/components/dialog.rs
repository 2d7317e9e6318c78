//! Dialog Component
//!
//! Modal dialog that follows the conventions the Escape handler relies on:
//! the panel carries `role="dialog"` and its close control is a
//! [`CloseButton`] (`aria-label="Close"`). With an [`AccessibilityEnhancer`]
//! mounted, Escape activates that button, which calls `on_close`.
//!
//! [`AccessibilityEnhancer`]: crate::AccessibilityEnhancer

use dioxus::prelude::*;

use crate::components::button::CloseButton;

/// Modal dialog
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Dialog {
///         show: show_dialog(),
///         title: "Preferences".to_string(),
///         on_close: move |_| show_dialog.set(false),
///         p { "..." }
///     }
/// }
/// ```
#[component]
pub fn Dialog(
    /// Whether to show the dialog
    show: bool,
    /// Heading, also used as the accessible name
    title: String,
    /// Callback when the dialog is dismissed (close button, overlay, Escape)
    on_close: EventHandler<()>,
    children: Element,
) -> Element {
    if !show {
        return rsx! {};
    }

    let heading_id = format!("dialog-title-{}", slug(&title));

    rsx! {
        div { class: "modal-overlay",
            onclick: move |_| on_close.call(()),

            div {
                class: "modal-content",
                role: "dialog",
                "aria-modal": "true",
                "aria-labelledby": "{heading_id}",
                onclick: move |evt| evt.stop_propagation(),

                div { class: "modal-header",
                    h2 { id: "{heading_id}", class: "modal-title", "{title}" }
                    CloseButton { onclick: move |_| on_close.call(()) }
                }
                div { class: "modal-body", {children} }
            }
        }
    }
}

/// Lowercase ASCII alphanumerics joined by single dashes.
fn slug(text: &str) -> String {
    text.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_is_id_safe() {
        assert_eq!(slug("Delete file?"), "delete-file");
        assert_eq!(slug("  A  b "), "a-b");
        assert_eq!(slug("***"), "");
    }

    #[test]
    fn open_dialog_renders_contract_attributes() {
        fn app() -> Element {
            rsx! {
                Dialog {
                    show: true,
                    title: "Preferences".to_string(),
                    on_close: move |_| {},
                    p { "body text" }
                }
            }
        }

        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        assert!(html.contains(r#"role="dialog""#));
        assert!(html.contains(r#"aria-label="Close""#));
        assert!(html.contains("body text"));
        assert!(html.contains("dialog-title-preferences"));
    }

    #[test]
    fn hidden_dialog_renders_nothing() {
        fn app() -> Element {
            rsx! {
                Dialog {
                    show: false,
                    title: "Preferences".to_string(),
                    on_close: move |_| {},
                    p { "body text" }
                }
            }
        }

        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        assert!(!dioxus_ssr::render(&dom).contains("body text"));
    }
}

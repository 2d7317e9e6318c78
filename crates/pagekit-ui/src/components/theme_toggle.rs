//! Theme Toggle Component
//!
//! Switches between the dark and light themes. Before mount it renders an
//! inert placeholder of the same shape, so the server shell never guesses at
//! a preference it cannot read.

use dioxus::prelude::*;
use pagekit_core::{Theme, ThemeController};

use crate::components::button::{class_list, IconButton};
use crate::components::mount::use_gated_document;
use crate::context::use_platform;

/// Glyph shown for the theme a click switches to.
fn icon_for(target: Theme) -> &'static str {
    match target {
        Theme::Light => "\u{2600}",
        Theme::Dark => "\u{263E}",
    }
}

/// Accessible label for the button while `current` is active.
pub fn toggle_label(current: Theme) -> String {
    format!("Switch to {} theme", current.toggled())
}

/// Dark/light theme switch.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     header { ThemeToggle { class: "header-action".to_string() } }
/// }
/// ```
#[component]
pub fn ThemeToggle(#[props(default)] class: Option<String>) -> Element {
    let platform = use_platform();
    let document = use_gated_document();
    // None until hydrated, so settle never persists an unread default.
    let mut controller: Signal<Option<ThemeController>> = use_signal(|| None);

    let hydrate = platform.clone();
    use_effect(move || {
        if document.read().is_none() {
            return;
        }
        if controller.peek().is_none() {
            let hydrated =
                ThemeController::hydrate(hydrate.store.as_ref(), hydrate.config.theme.clone());
            controller.set(Some(hydrated));
        }
    });

    let store = platform.store.clone();
    use_effect(move || {
        let Some(doc) = document.cloned() else {
            return;
        };
        if let Some(current) = controller.read().as_ref() {
            current.settle(doc.as_ref(), store.as_ref());
        }
    });

    let full_class = class_list("theme-toggle", class.as_deref());
    let current = controller.read().as_ref().map(ThemeController::theme);

    match current {
        None => rsx! {
            button {
                class: "icon-btn {full_class}",
                r#type: "button",
                disabled: true,
                "aria-hidden": "true",
                span { class: "theme-toggle-icon" }
            }
        },
        Some(theme) => rsx! {
            IconButton {
                class: full_class,
                aria_label: toggle_label(theme),
                onclick: move |_| {
                    if let Some(c) = controller.write().as_mut() {
                        let next = c.toggle();
                        tracing::debug!(theme = %next, "theme toggled");
                    }
                },
                span { class: "theme-toggle-icon", {icon_for(theme.toggled())} }
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    use crate::context::{PageKitProvider, Platform};
    use pagekit_core::{MemoryDocument, MemoryStore, PageKitConfig, PreferenceStore};

    #[test]
    fn labels_name_the_target_theme() {
        assert_eq!(toggle_label(Theme::Dark), "Switch to light theme");
        assert_eq!(toggle_label(Theme::Light), "Switch to dark theme");
    }

    #[test]
    fn server_render_is_placeholder_and_touches_nothing() {
        #[component]
        fn Harness(platform: Platform) -> Element {
            rsx! {
                PageKitProvider { platform, ThemeToggle {} }
            }
        }

        let doc = MemoryDocument::new();
        let store = MemoryStore::with_entries([("theme", "light")]);
        let platform = Platform::new(
            Rc::new(doc.clone()),
            Rc::new(store.clone()),
            PageKitConfig::default(),
        );

        let mut dom = VirtualDom::new_with_props(Harness, HarnessProps { platform });
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        assert!(html.contains("disabled"));
        assert!(!html.contains("Switch to"));
        assert_eq!(doc.mutation_count(), 0);
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("light"));
    }
}

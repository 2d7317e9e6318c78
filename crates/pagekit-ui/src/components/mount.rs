//! Mount gate for components.
//!
//! Effects run after a render commits on the client and never during a server
//! render, so a flag flipped from an effect is `false` in the server shell and
//! becomes `true` exactly once on the client.

use std::rc::Rc;

use dioxus::prelude::*;
use pagekit_core::{DocumentHandle, MountGate};

use crate::context::use_platform;

/// `false` until the component's first render has committed, then `true`
/// for the rest of its life.
pub fn use_mounted() -> ReadOnlySignal<bool> {
    let mut mounted = use_signal(|| false);
    use_effect(move || {
        if !*mounted.peek() {
            mounted.set(true);
        }
    });
    mounted.into()
}

/// The platform document, reachable only through a [`MountGate`] that opens
/// once the calling component has mounted.
///
/// `None` in a server render and on the first client render. Effects that
/// read the signal rerun when it turns `Some`, and never see the document
/// before then.
pub fn use_gated_document() -> ReadOnlySignal<Option<DocumentHandle>> {
    let platform = use_platform();
    let gate = use_hook(|| Rc::new(MountGate::new(platform.document.clone())));
    let mut document: Signal<Option<DocumentHandle>> = use_signal(|| None);

    use_effect(move || {
        gate.open();
        if document.peek().is_none() {
            document.set(gate.with(Rc::clone));
        }
    });

    document.into()
}

/// Renders `children` only on the client, after mount.
///
/// Until then (and always in a server render) `fallback` is shown, or nothing
/// if no fallback is given.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     NoSsr {
///         fallback: rsx! { span { class: "placeholder" } },
///         LocalClock {}
///     }
/// }
/// ```
#[component]
pub fn NoSsr(children: Element, #[props(default)] fallback: Option<Element>) -> Element {
    let mounted = use_mounted();

    if mounted() {
        children
    } else {
        fallback.unwrap_or_else(|| rsx! {})
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{PageKitProvider, Platform};

    fn ssr(dom: &mut VirtualDom) -> String {
        dom.rebuild_in_place();
        dioxus_ssr::render(dom)
    }

    #[test]
    fn server_render_shows_fallback_only() {
        fn app() -> Element {
            rsx! {
                NoSsr {
                    fallback: rsx! { p { "loading preferences" } },
                    p { "client only content" }
                }
            }
        }

        let html = ssr(&mut VirtualDom::new(app));
        assert!(html.contains("loading preferences"));
        assert!(!html.contains("client only content"));
    }

    #[test]
    fn server_render_without_fallback_is_empty() {
        fn app() -> Element {
            rsx! {
                div { id: "wrapper",
                    NoSsr { p { "client only content" } }
                }
            }
        }

        let html = ssr(&mut VirtualDom::new(app));
        assert!(html.contains("wrapper"));
        assert!(!html.contains("client only content"));
    }

    #[test]
    fn gated_document_is_withheld_before_mount() {
        #[component]
        fn GateReader() -> Element {
            let doc = use_gated_document();
            let reachable = doc.read().is_some();
            rsx! {
                span { "{reachable}" }
            }
        }

        #[component]
        fn Harness(platform: Platform) -> Element {
            rsx! {
                PageKitProvider { platform, GateReader {} }
            }
        }

        let mut dom = VirtualDom::new_with_props(
            Harness,
            HarnessProps {
                platform: Platform::memory(),
            },
        );
        let html = ssr(&mut dom);
        assert!(html.contains("false"));
    }
}

//! Playground components.
//!
//! Views over the playground's in-memory document: dialogs created in it,
//! rendered from it, and an inspector showing its state.

mod dialog_launcher;
mod dialog_stack;
mod dom_inspector;

pub use dialog_launcher::DialogLauncher;
pub use dialog_stack::DialogStack;
pub use dom_inspector::DomInspector;

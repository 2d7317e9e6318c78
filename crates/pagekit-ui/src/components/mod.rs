//! Reusable PageKit components
//!
//! Every component that touches the document waits for its mount gate.

mod accessibility;
mod button;
mod dialog;
mod mount;
mod theme_toggle;

pub use accessibility::*;
pub use button::*;
pub use dialog::*;
pub use mount::*;
pub use theme_toggle::*;

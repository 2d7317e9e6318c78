//! Page components for the PageKit playground.

mod playground;

pub use playground::Playground;

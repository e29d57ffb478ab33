//! UI components for the playground.
//!
//! Components read shared state through [`AppContext`](crate::app::AppContext)
//! and route every side effect (clipboard, downloads, notifications)
//! through the capability wrappers in [`utils`](crate::utils).

pub mod editors;
pub mod export;
pub mod icons;
pub mod markdown;
pub mod playground;
pub mod preview;
pub mod toast;

pub use playground::Playground;

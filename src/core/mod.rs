//! Core business logic for the playground.
//!
//! This module provides:
//! - [`markdown::render`] - Markdown snippet generation
//! - [`preview::compose`] - Live preview document composition
//! - [`plan`] and [`sanitize_filename`] - Export planning
//! - [`CopyFsm`] - Copy button state machine

pub mod copy;
pub mod error;
mod export;
pub mod markdown;
pub mod preview;

pub use copy::{CopyFsm, CopyPhase, CopyStart, TimerCmd};
pub use export::{plan, sanitize_filename};

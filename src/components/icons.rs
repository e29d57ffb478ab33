//! Centralized icon definitions.
//!
//! Maps semantic icon names to lucide icons so components never name a
//! theme directly.

use icondata::Icon;

pub const RUN: Icon = icondata::LuPlay;
pub const EXPORT: Icon = icondata::LuDownload;
pub const COPY: Icon = icondata::LuCopy;
pub const CHECK: Icon = icondata::LuCheck;
pub const CLOSE: Icon = icondata::LuX;

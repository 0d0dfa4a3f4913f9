//! sysdash - live terminal dashboard of local system resources.
//!
//! This library provides:
//! - `collector` - platform abstraction and per-tick metric samples
//! - `fmt`, `panels` - formatting and panel text rendering
//! - `theme` - theme registry and the active theme
//! - `sampler`, `scheduler` - periodic sampling off the UI thread
//! - `tui` - the interactive dashboard

pub mod collector;
pub mod fmt;
pub mod host;
pub mod panels;
pub mod sampler;
pub mod scheduler;
pub mod theme;
pub mod tui;

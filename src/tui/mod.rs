//! Terminal user interface.
//!
//! The UI thread owns the terminal and the [`PanelBinder`]. Key presses and
//! sampler ticks arrive through one event queue, so every redraw happens on
//! that thread.

mod app;
pub mod binder;
mod event;
mod input;
mod render;
mod state;
mod style;
mod widgets;

pub use app::App;
pub use binder::{PanelBinder, PanelTarget};
pub use state::{AppState, View};

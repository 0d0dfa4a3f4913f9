//! TUI widgets for the dashboard.

mod footer;
mod panel;
mod settings;

pub use footer::render_footer;
pub use panel::render_panel;
pub use settings::render_settings;

//! Styles derived from the active theme.

use ratatui::style::{Modifier, Style};

use crate::theme::{PanelStyle, Theme};

/// Pre-defined styles.
pub struct Styles;

impl Styles {
    /// Outer frame and empty areas.
    pub fn dashboard(theme: &Theme) -> Style {
        Style::default().bg(theme.background)
    }

    /// Panel border.
    pub fn border(panel: &PanelStyle) -> Style {
        Style::default().fg(panel.border).bg(panel.background)
    }

    /// Panel title.
    pub fn title(panel: &PanelStyle) -> Style {
        Style::default()
            .fg(panel.title)
            .add_modifier(Modifier::BOLD)
    }

    /// Panel body text.
    pub fn body(panel: &PanelStyle) -> Style {
        Style::default().fg(panel.text).bg(panel.background)
    }

    /// Footer line.
    pub fn footer(theme: &Theme) -> Style {
        Style::default().fg(theme.picker.text).bg(theme.background)
    }

    /// Key hint in the footer.
    pub fn key_hint(theme: &Theme) -> Style {
        Style::default()
            .fg(theme.info.title)
            .add_modifier(Modifier::BOLD)
    }

    /// Unselected theme list item.
    pub fn picker_item(theme: &Theme) -> Style {
        Style::default()
            .fg(theme.picker.text)
            .bg(theme.picker.background)
    }

    /// Selected theme list item.
    pub fn picker_selected(theme: &Theme) -> Style {
        Style::default()
            .fg(theme.picker.selected_text)
            .bg(theme.picker.selected_background)
            .add_modifier(Modifier::BOLD)
    }

    /// Status message.
    pub fn status(theme: &Theme) -> Style {
        Style::default().fg(theme.medium)
    }
}

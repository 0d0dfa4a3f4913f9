//! Render targets of the dashboard panels.
//!
//! The binder is owned by the UI thread. Text arrives once per tick as a
//! whole [`PanelSet`]; chrome is applied separately, and always before text
//! rendered with a different theme is shown.

use chrono::{DateTime, Local};
use ratatui::text::Text;
use tracing::debug;

use crate::panels::{PanelId, PanelSet};
use crate::theme::{PanelStyle, Theme};

/// One bordered panel on screen.
#[derive(Debug, Clone)]
pub struct PanelTarget {
    pub id: PanelId,
    pub text: Text<'static>,
    pub style: PanelStyle,
}

impl PanelTarget {
    fn new(id: PanelId, theme: &Theme) -> Self {
        Self {
            id,
            text: Text::default(),
            style: *theme.panel(id),
        }
    }

    /// Border title.
    pub fn title(&self) -> &'static str {
        self.id.title()
    }
}

/// Maps each panel to its render target.
#[derive(Debug)]
pub struct PanelBinder {
    targets: [PanelTarget; 5],
    theme: &'static Theme,
    updated_at: Option<DateTime<Local>>,
    applied: u64,
}

impl PanelBinder {
    /// Creates empty targets dressed in `theme`.
    pub fn new(theme: &'static Theme) -> Self {
        Self {
            targets: PanelId::ALL.map(|id| PanelTarget::new(id, theme)),
            theme,
            updated_at: None,
            applied: 0,
        }
    }

    /// Replaces the text of every panel.
    pub fn apply(&mut self, panels: PanelSet) {
        if !std::ptr::eq(panels.theme, self.theme) {
            self.apply_chrome(panels.theme);
        }
        for (target, text) in self.targets.iter_mut().zip(panels.into_texts()) {
            target.text = text;
        }
        self.updated_at = Some(Local::now());
        self.applied += 1;
    }

    /// Recolors borders, titles, text and backgrounds.
    pub fn apply_chrome(&mut self, theme: &'static Theme) {
        debug!("Applying {} chrome", theme.name);
        for target in &mut self.targets {
            target.style = *theme.panel(target.id);
        }
        self.theme = theme;
    }

    /// Target of one panel.
    pub fn target(&self, id: PanelId) -> &PanelTarget {
        &self.targets[id.index()]
    }

    /// Theme of the current chrome.
    pub fn theme(&self) -> &'static Theme {
        self.theme
    }

    /// Local time of the last applied tick.
    pub fn updated_at(&self) -> Option<DateTime<Local>> {
        self.updated_at
    }

    /// Number of ticks applied.
    pub fn applied(&self) -> u64 {
        self.applied
    }
}

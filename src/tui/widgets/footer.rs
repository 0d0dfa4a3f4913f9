//! Footer line with key hints, theme name and refresh time.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::theme::Theme;
use crate::tui::binder::PanelBinder;
use crate::tui::state::View;
use crate::tui::style::Styles;

/// Renders the footer.
pub fn render_footer(
    frame: &mut Frame,
    area: Rect,
    binder: &PanelBinder,
    view: View,
    theme: &Theme,
) {
    let chunks = Layout::horizontal([
        Constraint::Min(20),    // Key hints
        Constraint::Length(18), // Theme
        Constraint::Length(20), // Last refresh
    ])
    .split(area);

    let mut hints = vec![
        Span::styled(" q", Styles::key_hint(theme)),
        Span::raw(" quit  "),
        Span::styled("s", Styles::key_hint(theme)),
    ];
    match view {
        View::Dashboard => {
            hints.push(Span::raw(" settings  "));
            hints.push(Span::styled("↑↓", Styles::key_hint(theme)));
            hints.push(Span::raw(" scroll CPU"));
        }
        View::Settings => hints.push(Span::raw(" dashboard")),
    }
    frame.render_widget(
        Paragraph::new(Line::from(hints)).style(Styles::footer(theme)),
        chunks[0],
    );

    let theme_name =
        Paragraph::new(format!("theme: {}", theme.name)).style(Styles::footer(theme));
    frame.render_widget(theme_name, chunks[1]);

    let updated = binder
        .updated_at()
        .map(|at| format!("updated {}", at.format("%H:%M:%S")))
        .unwrap_or_else(|| "sampling...".to_string());
    frame.render_widget(
        Paragraph::new(updated).style(Styles::footer(theme)),
        chunks[2],
    );
}

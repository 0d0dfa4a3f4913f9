//! Settings view with the theme picker.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};

use crate::theme::{Theme, ThemeName};
use crate::tui::state::AppState;
use crate::tui::style::Styles;

/// Renders the theme picker, colored with `theme`.
pub fn render_settings(frame: &mut Frame, area: Rect, state: &mut AppState, theme: &Theme) {
    let chunks = Layout::vertical([
        Constraint::Length(ThemeName::ALL.len() as u16 + 2), // Picker
        Constraint::Length(1),                                // Hint
        Constraint::Length(1),                                // Status
        Constraint::Min(0),
    ])
    .split(area);

    let items: Vec<ListItem> = ThemeName::ALL
        .iter()
        .map(|name| {
            let marker = if *name == theme.name { " (active)" } else { "" };
            ListItem::new(format!("{}{}", name, marker))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(Span::styled(" Theme ", Styles::key_hint(theme)))
                .borders(Borders::ALL)
                .border_style(Styles::picker_item(theme)),
        )
        .style(Styles::picker_item(theme))
        .highlight_style(Styles::picker_selected(theme))
        .highlight_symbol("> ");
    frame.render_stateful_widget(list, chunks[0], &mut state.picker);

    let hint = Line::from(vec![
        Span::styled(" ↑↓", Styles::key_hint(theme)),
        Span::raw(" select  "),
        Span::styled("Enter", Styles::key_hint(theme)),
        Span::raw(" apply  "),
        Span::styled("Esc", Styles::key_hint(theme)),
        Span::raw(" back"),
    ]);
    frame.render_widget(Paragraph::new(hint).style(Styles::footer(theme)), chunks[1]);

    if let Some(message) = &state.status_message {
        let status = Paragraph::new(format!(" {}", message)).style(Styles::status(theme));
        frame.render_widget(status, chunks[2]);
    }
}

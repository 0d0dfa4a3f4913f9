//! Bordered, titled panel widget.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::binder::PanelTarget;
use crate::tui::style::Styles;

/// Renders one panel.
///
/// With `scroll`, the text starts at that line; the offset is clamped so the
/// last line never scrolls above the bottom border.
pub fn render_panel(
    frame: &mut Frame,
    area: Rect,
    target: &PanelTarget,
    scroll: Option<&mut usize>,
) {
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", target.title()),
            Styles::title(&target.style),
        ))
        .borders(Borders::ALL)
        .border_style(Styles::border(&target.style))
        .style(Styles::body(&target.style));

    let visible_height = block.inner(area).height as usize;
    let offset = match scroll {
        Some(scroll) => {
            let max_scroll = target.text.lines.len().saturating_sub(visible_height);
            if *scroll > max_scroll {
                *scroll = max_scroll;
            }
            *scroll
        }
        None => 0,
    };

    let paragraph = Paragraph::new(target.text.clone())
        .block(block)
        .style(Styles::body(&target.style))
        .scroll((offset.min(u16::MAX as usize) as u16, 0));
    frame.render_widget(paragraph, area);
}

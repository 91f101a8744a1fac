//! Terminal output pane rendering

use super::utils::{clamp_scroll, pane_block, visible_height};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{List, ListItem, Padding, Paragraph},
    Frame,
};

/// Scroll state for the terminal pane
pub struct TerminalScrollState {
    pub offset: usize,
}

/// Data needed to render the terminal pane
pub struct TerminalRenderData<'a> {
    /// Lines printed up to the current step
    pub lines: &'a [&'a str],
}

/// Render the terminal output pane
pub fn render_terminal_pane(
    frame: &mut Frame,
    area: Rect,
    data: TerminalRenderData,
    is_focused: bool,
    scroll_state: &mut TerminalScrollState,
) {
    let block = pane_block(" Terminal Output ", is_focused);

    if data.lines.is_empty() {
        let paragraph = Paragraph::new("(no output)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let visible_height = visible_height(area.height);
    clamp_scroll(&mut scroll_state.offset, data.lines.len(), visible_height);

    // Take only visible items
    let visible_items: Vec<ListItem> = data
        .lines
        .iter()
        .skip(scroll_state.offset)
        .take(visible_height)
        .map(|line| ListItem::new(*line).style(Style::default().fg(DEFAULT_THEME.fg)))
        .collect();

    let list = List::new(visible_items).block(block);
    frame.render_widget(list, area);
}

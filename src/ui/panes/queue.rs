//! Queue pane rendering for the circular buffer
//!
//! Shows the occupied slots of a bounded queue from front to rear, with the
//! physical slot index of each element so wrap-around is visible, plus a
//! compact ring strip marking which slots are live.

use super::utils::{clamp_scroll, format_char_styled, pane_block, visible_height};
use crate::trace::{MemoryView, QueueView};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem},
    Frame,
};

/// Ring strips wider than this are not drawn
const MAX_RING_WIDTH: usize = 64;

/// Scroll state for the queue pane
pub struct QueueScrollState {
    pub offset: usize,
}

/// Data needed to render the queue pane
pub struct QueueRenderData<'a> {
    pub view: Option<&'a MemoryView>,
}

/// One cell per slot: `█` live, `·` free
fn ring_strip(queue: &QueueView) -> String {
    let mut cells = vec!['·'; queue.capacity];
    for &(slot, _) in &queue.slots {
        cells[slot] = '█';
    }
    cells.into_iter().collect()
}

fn slot_marker(queue: &QueueView, slot: usize) -> Option<&'static str> {
    let is_front = slot == queue.front;
    let is_rear = slot == queue.rear;
    match (is_front, is_rear) {
        (true, true) => Some("  ← front/rear"),
        (true, false) => Some("  ← front"),
        (false, true) => Some("  ← rear"),
        (false, false) => None,
    }
}

fn queue_items(queue: &QueueView) -> Vec<ListItem<'static>> {
    let mut items = Vec::new();
    let size_style = if queue.len() == queue.capacity {
        Style::default().fg(DEFAULT_THEME.error)
    } else {
        Style::default().fg(DEFAULT_THEME.success)
    };
    items.push(ListItem::new(Line::from(vec![
        Span::styled(format!(" size {}/{}", queue.len(), queue.capacity), size_style),
        Span::styled(
            format!("   front = {}   rear = {}", queue.front, queue.rear),
            Style::default().fg(DEFAULT_THEME.comment),
        ),
    ])));

    if queue.capacity <= MAX_RING_WIDTH {
        items.push(
            ListItem::new(format!(" {}", ring_strip(queue)))
                .style(Style::default().fg(DEFAULT_THEME.primary)),
        );
    }

    if queue.is_empty() {
        items.push(ListItem::new(" (empty)").style(Style::default().fg(DEFAULT_THEME.comment)));
        return items;
    }

    for &(slot, c) in &queue.slots {
        let mut spans = vec![
            Span::styled(
                format!(" [slot {:3}] ", slot),
                Style::default().fg(DEFAULT_THEME.comment),
            ),
            format_char_styled(c),
        ];
        if let Some(marker) = slot_marker(queue, slot) {
            spans.push(Span::styled(
                marker,
                Style::default()
                    .fg(DEFAULT_THEME.marker)
                    .add_modifier(Modifier::BOLD),
            ));
        }
        items.push(ListItem::new(Line::from(spans)));
    }
    items
}

/// Render the queue pane
pub fn render_queue_pane(
    frame: &mut Frame,
    area: Rect,
    data: QueueRenderData,
    is_focused: bool,
    scroll_state: &mut QueueScrollState,
) {
    let block = pane_block(" Queue ", is_focused);

    let all_items = match data.view.and_then(|v| v.queue.as_ref()) {
        Some(queue) => queue_items(queue),
        None => vec![ListItem::new("(no queue in use)").style(Style::default().fg(DEFAULT_THEME.comment))],
    };

    clamp_scroll(
        &mut scroll_state.offset,
        all_items.len(),
        visible_height(area.height),
    );

    let visible_items: Vec<ListItem> = all_items
        .into_iter()
        .skip(scroll_state.offset)
        .take(visible_height(area.height))
        .collect();

    let list = List::new(visible_items).block(block);
    frame.render_widget(list, area);
}

//! Stack pane rendering with call frames and stack contents
//!
//! This module renders the stack pane. Depending on the current step it shows
//! the mirrored call frames of a recursion demo, the slots of a character
//! stack, or both.
//!
//! # Layout
//!
//! Call frames are listed outermost first with their locals indented below.
//! Character stacks are listed top first, with the top slot marked:
//!
//! ```text
//!  size 3/100   top = 2
//!  [  2] 'C'  ← top
//!  [  1] 'B'
//!  [  0] 'A'
//! ```

use super::utils::{clamp_scroll, format_char_styled, pane_block, visible_height};
use crate::trace::{FramesView, MemoryView, StackView};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem},
    Frame,
};

/// Scroll state for the stack pane
pub struct StackScrollState {
    pub offset: usize,
    pub prev_item_count: usize,
}

/// Data needed to render the stack pane
pub struct StackRenderData<'a> {
    pub view: Option<&'a MemoryView>,
}

fn frame_items(frames: &FramesView, items: &mut Vec<ListItem<'static>>) {
    if frames.elided() > 0 {
        items.push(
            ListItem::new(format!("⋮ {} outer frame(s) not shown", frames.elided()))
                .style(Style::default().fg(DEFAULT_THEME.comment)),
        );
    }

    let innermost = frames.frames.len().saturating_sub(1);
    for (idx, stack_frame) in frames.frames.iter().enumerate() {
        let depth = frames.elided() + idx;
        let name_style = if idx == innermost {
            Style::default()
                .fg(DEFAULT_THEME.function)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(DEFAULT_THEME.muted_function)
        };

        items.push(ListItem::new(Line::from(vec![
            Span::styled("▸ ", Style::default().fg(DEFAULT_THEME.secondary)),
            Span::styled(
                format!("Frame {} ", depth),
                Style::default().fg(DEFAULT_THEME.comment),
            ),
            Span::styled("│ ", Style::default().fg(DEFAULT_THEME.comment)),
            Span::styled(format!("{}()", stack_frame.function_name), name_style),
        ])));

        for local in &stack_frame.locals {
            items.push(ListItem::new(Line::from(vec![
                Span::raw("    "),
                Span::styled(local.name.clone(), Style::default().fg(DEFAULT_THEME.fg)),
                Span::styled(" = ", Style::default().fg(DEFAULT_THEME.comment)),
                Span::styled(local.value.clone(), Style::default().fg(DEFAULT_THEME.number)),
            ])));
        }
    }
}

fn stack_items(stack: &StackView, items: &mut Vec<ListItem<'static>>) {
    let top = match stack.top_index() {
        Some(top) => top.to_string(),
        None => "-1".to_string(),
    };
    let size_style = if stack.items.len() == stack.capacity {
        Style::default().fg(DEFAULT_THEME.error)
    } else {
        Style::default().fg(DEFAULT_THEME.success)
    };
    items.push(ListItem::new(Line::from(vec![
        Span::styled(
            format!(" size {}/{}", stack.items.len(), stack.capacity),
            size_style,
        ),
        Span::styled(
            format!("   top = {}", top),
            Style::default().fg(DEFAULT_THEME.comment),
        ),
    ])));

    if stack.items.is_empty() {
        items.push(ListItem::new(" (empty)").style(Style::default().fg(DEFAULT_THEME.comment)));
        return;
    }

    for (index, &c) in stack.items.iter().enumerate().rev() {
        let mut spans = vec![
            Span::styled(
                format!(" [{:3}] ", index),
                Style::default().fg(DEFAULT_THEME.comment),
            ),
            format_char_styled(c),
        ];
        if Some(index) == stack.top_index() {
            spans.push(Span::styled(
                "  ← top",
                Style::default()
                    .fg(DEFAULT_THEME.marker)
                    .add_modifier(Modifier::BOLD),
            ));
        }
        items.push(ListItem::new(Line::from(spans)));
    }
}

/// Render the stack pane
pub fn render_stack_pane(
    frame: &mut Frame,
    area: Rect,
    data: StackRenderData,
    is_focused: bool,
    scroll_state: &mut StackScrollState,
) {
    let block = pane_block(" Stack ", is_focused);
    let mut all_items = Vec::new();

    let empty_view = MemoryView::default();
    let view = data.view.unwrap_or(&empty_view);
    if let Some(frames) = &view.frames {
        frame_items(frames, &mut all_items);
    }
    if let Some(stack) = &view.stack {
        if !all_items.is_empty() {
            all_items.push(ListItem::new(""));
        }
        stack_items(stack, &mut all_items);
    }
    if all_items.is_empty() {
        all_items.push(
            ListItem::new("(nothing on the stack)").style(Style::default().fg(DEFAULT_THEME.comment)),
        );
    }

    let total_items = all_items.len();
    let visible_height = visible_height(area.height);

    // Follow the innermost frame when frames are added
    if view.frames.is_some() && total_items > scroll_state.prev_item_count {
        scroll_state.offset = usize::MAX;
    }
    scroll_state.prev_item_count = total_items;
    clamp_scroll(&mut scroll_state.offset, total_items, visible_height);

    let visible_items: Vec<ListItem> = all_items
        .into_iter()
        .skip(scroll_state.offset)
        .take(visible_height)
        .collect();

    let list = List::new(visible_items).block(block);
    frame.render_widget(list, area);
}

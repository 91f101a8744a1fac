//! Step list pane rendering
//!
//! Lists every recorded step with its section and label, keeping the current
//! step at a fixed visual row while stepping.
//!
//! # Highlighting
//!
//! Labels get light highlighting from a small character tokenizer: operation
//! names, quoted characters, numbers and brackets each get their own color.

use super::utils::{pane_block, visible_height};
use crate::trace::Snapshot;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Scroll state for the steps pane
pub struct StepsScrollState {
    pub offset: usize,
    pub target_line_row: Option<usize>,
}

impl StepsScrollState {
    pub fn new() -> Self {
        StepsScrollState {
            offset: 0,
            target_line_row: None,
        }
    }
}

impl Default for StepsScrollState {
    fn default() -> Self {
        Self::new()
    }
}

/// Simple highlighting for step labels such as `push 'A'` or `call fib(3)`
fn highlight_label(label: &str) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    let mut current_word = String::new();
    let chars: Vec<char> = label.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        // Quoted character
        if c == '\'' {
            if !current_word.is_empty() {
                spans.push(word_span(std::mem::take(&mut current_word)));
            }
            let mut end = i + 1;
            while end < chars.len() && chars[end] != '\'' {
                end += 1;
            }
            end = (end + 1).min(chars.len());
            spans.push(Span::styled(
                chars[i..end].iter().collect::<String>(),
                Style::default().fg(DEFAULT_THEME.string),
            ));
            i = end;
            continue;
        }

        if !c.is_alphanumeric() && c != '_' {
            if !current_word.is_empty() {
                spans.push(word_span(std::mem::take(&mut current_word)));
            }
            let style = match c {
                '(' | ')' | '[' | ']' | '{' | '}' => Style::default().fg(DEFAULT_THEME.primary),
                _ => Style::default().fg(DEFAULT_THEME.fg),
            };
            spans.push(Span::styled(c.to_string(), style));
            i += 1;
            continue;
        }

        current_word.push(c);
        i += 1;
    }

    if !current_word.is_empty() {
        spans.push(word_span(current_word));
    }
    spans
}

fn word_span(word: String) -> Span<'static> {
    let style = match word.as_str() {
        "push" | "pop" | "enqueue" | "dequeue" | "bury" | "unbury" | "call" | "return"
        | "enter" | "leave" | "submit" | "print" | "bracket" => Style::default()
            .fg(DEFAULT_THEME.keyword)
            .add_modifier(Modifier::BOLD),
        "done" | "balanced" => Style::default().fg(DEFAULT_THEME.success),
        w if w.chars().all(|c| c.is_ascii_digit()) => Style::default().fg(DEFAULT_THEME.number),
        w if w.starts_with("fib") || w.starts_with("function_") => {
            Style::default().fg(DEFAULT_THEME.function)
        }
        _ => Style::default().fg(DEFAULT_THEME.fg),
    };
    Span::styled(word, style)
}

/// Render the steps pane
pub fn render_steps_pane(
    frame: &mut Frame,
    area: Rect,
    snapshots: &[Snapshot],
    current_step: usize,
    is_focused: bool,
    scroll_state: &mut StepsScrollState,
) {
    let block = pane_block(" Steps ", is_focused);
    let total_lines = snapshots.len();
    let visible_height = visible_height(area.height);

    // Initialize target_line_row to center if not set
    let target_row = scroll_state
        .target_line_row
        .unwrap_or(visible_height / 2)
        .min(visible_height.saturating_sub(1));
    scroll_state.target_line_row = Some(target_row);

    // Keep the current step at the target visual row
    scroll_state.offset = current_step.saturating_sub(target_row);
    if total_lines > visible_height {
        scroll_state.offset = scroll_state.offset.min(total_lines - visible_height);
    } else {
        scroll_state.offset = 0;
    }

    let visible_lines: Vec<Line> = snapshots
        .iter()
        .enumerate()
        .skip(scroll_state.offset)
        .take(visible_height)
        .map(|(idx, snapshot)| {
            let is_current = idx == current_step;
            let num_style = if is_current {
                Style::default()
                    .fg(DEFAULT_THEME.secondary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.comment)
            };

            let mut spans = vec![
                Span::styled(format!("{:5} ", idx + 1), num_style),
                Span::styled(
                    format!("{} │ ", snapshot.section),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
            ];
            spans.extend(highlight_label(&snapshot.label));

            if is_current {
                for span in &mut spans {
                    span.style = span.style.bg(DEFAULT_THEME.current_line_bg);
                }
            }
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(visible_lines).block(block);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(spans: &[Span]) -> Vec<String> {
        spans.iter().map(|s| s.content.to_string()).collect()
    }

    #[test]
    fn test_highlight_splits_quoted_char() {
        let spans = highlight_label("push 'A'");
        assert_eq!(texts(&spans), ["push", " ", "'A'"]);
        assert_eq!(spans[2].style.fg, Some(DEFAULT_THEME.string));
    }

    #[test]
    fn test_highlight_call_label() {
        let spans = highlight_label("call fib(3)");
        assert_eq!(texts(&spans), ["call", " ", "fib", "(", "3", ")"]);
        assert_eq!(spans[4].style.fg, Some(DEFAULT_THEME.number));
    }
}

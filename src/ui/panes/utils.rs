use crate::containers::SENTINEL;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders},
};

/// Bordered block with the focus-dependent border style
pub(crate) fn pane_block(title: &str, is_focused: bool) -> Block<'_> {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style)
}

/// A stored character, quoted, with non-printables escaped
pub(crate) fn format_char_styled(c: char) -> Span<'static> {
    let text = if c == SENTINEL {
        "'\\0'".to_string()
    } else if c.is_control() {
        format!("'\\u{{{:x}}}'", c as u32)
    } else {
        format!("'{}'", c)
    };
    Span::styled(text, Style::default().fg(DEFAULT_THEME.string))
}

/// Clamp a scroll offset so the last page stays full
pub(crate) fn clamp_scroll(offset: &mut usize, total_items: usize, visible_height: usize) {
    if total_items > visible_height {
        let max_scroll = total_items - visible_height;
        *offset = (*offset).min(max_scroll);
    } else {
        *offset = 0;
    }
}

/// Rows available inside a bordered pane, at least 1
pub(crate) fn visible_height(area_height: u16) -> usize {
    area_height.saturating_sub(2).max(1) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_scroll() {
        let mut offset = 50;
        clamp_scroll(&mut offset, 30, 10);
        assert_eq!(offset, 20);

        let mut offset = 5;
        clamp_scroll(&mut offset, 8, 10);
        assert_eq!(offset, 0);
    }

    #[test]
    fn test_format_char_escapes() {
        assert_eq!(format_char_styled('A').content, "'A'");
        assert_eq!(format_char_styled(SENTINEL).content, "'\\0'");
        assert_eq!(format_char_styled('\n').content, "'\\u{a}'");
    }
}

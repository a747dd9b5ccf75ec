use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_NEGATIVE, STATUS_OK};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Figures shown in the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderStatus {
    pub rows: usize,
    pub columns: u16,
    pub cells: usize,
    /// `(row, column)` of the focused cell, if any.
    pub focus: Option<(usize, usize)>,
    pub total: i64,
    pub applied: u64,
}

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, status: HeaderStatus) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let total_color = if status.total < 0 {
            STATUS_NEGATIVE
        } else {
            STATUS_OK
        };
        let focus = match status.focus {
            Some((row, column)) => format!("cell {row},{column}"),
            None => "no cells".to_string(),
        };
        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(
                "gridmvi",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(
                format!(
                    "{} cells · {}×{}",
                    status.cells, status.columns, status.rows
                ),
                text_style,
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(focus, text_style),
            Span::styled("  │  ", separator_style),
            Span::styled("total ", text_style),
            Span::styled(status.total.to_string(), Style::default().fg(total_color)),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("{} actions", status.applied), text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

use crate::ui::app::App;
use crate::ui::header::Header;
use crate::ui::layout::{grid_rect, layout_regions};
use crate::ui::node::{Node, Trigger};
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::Frame;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(app.header_status()), header);
    frame.render_widget(Clear, body);

    let grid = grid_rect(body, app.state().grid_size());
    let origin = (grid.x, grid.y);
    let root = app.view();
    root.paint(origin, body, frame.buffer_mut());
    let focused = root.children().get(app.focus());
    if let Some(cell) = focused {
        let rect = cell.rect(origin).intersection(body);
        frame
            .buffer_mut()
            .set_style(rect, Style::default().add_modifier(Modifier::REVERSED));
    }

    let style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
    let footer_widget = Paragraph::new(key_hints(focused)).style(style).block(
        Block::bordered()
            .border_style(Style::default().fg(GLOBAL_BORDER))
            .title_top(Line::from(format!(" v{VERSION} ")).right_aligned()),
    );
    frame.render_widget(footer_widget, footer);
}

/// Hint line listing the keys the focused cell answers to.
pub fn key_hints(cell: Option<&Node>) -> String {
    let keys: Vec<String> = cell
        .into_iter()
        .flat_map(Node::triggers)
        .filter_map(|trigger| match trigger {
            Trigger::Key(key) => Some(key.to_string()),
            Trigger::Click => None,
        })
        .collect();

    let mut hints = String::from(" Arrows/hjkl: Move");
    if !keys.is_empty() {
        hints.push_str(&format!(" │ {}: Cell", keys.join(" ")));
    }
    hints.push_str(" │ Click: Buttons │ q: Quit");
    hints
}

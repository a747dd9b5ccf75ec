//! Renderable description produced by component views.
//!
//! A [`Node`] is a box placed at an offset inside its parent, painted with a
//! ratatui [`Style`], optionally carrying centered text lines, event
//! bindings, and child nodes. Views build nodes; the terminal host paints
//! them (`&Node` is a [`Widget`]) and routes input back through their
//! bindings.
//!
//! Children are positioned absolutely and may overflow their parent; only
//! the area handed to the renderer clips them.

use std::fmt;
use std::sync::Arc;

use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::Widget;

use crate::ui::geometry::{Offset, Size};

pub type Handler = Arc<dyn Fn() + Send + Sync>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trigger {
    /// Left mouse button pressed over the node.
    Click,
    /// Character typed while the node's cell has focus.
    Key(char),
}

#[derive(Clone)]
struct Binding {
    trigger: Trigger,
    handler: Handler,
}

#[derive(Clone, Default)]
pub struct Node {
    offset: Offset,
    size: Size,
    style: Style,
    lines: Vec<Line<'static>>,
    bindings: Vec<Binding>,
    children: Vec<Node>,
}

impl Node {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    pub fn at(mut self, offset: Offset) -> Self {
        self.offset = offset;
        self
    }

    pub fn styled(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Append a text line. Lines stack from the top and are centered
    /// horizontally.
    pub fn line(mut self, line: impl Into<Line<'static>>) -> Self {
        self.lines.push(line.into());
        self
    }

    pub fn on_click<F>(self, handler: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.bind(Trigger::Click, handler)
    }

    pub fn on_key<F>(self, key: char, handler: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.bind(Trigger::Key(key), handler)
    }

    pub fn child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    fn bind<F>(mut self, trigger: Trigger, handler: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.bindings.push(Binding {
            trigger,
            handler: Arc::new(handler),
        });
        self
    }

    pub fn offset(&self) -> Offset {
        self.offset
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn style(&self) -> Style {
        self.style
    }

    pub fn lines(&self) -> &[Line<'static>] {
        &self.lines
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn triggers(&self) -> impl Iterator<Item = Trigger> + '_ {
        self.bindings.iter().map(|binding| binding.trigger)
    }

    /// Absolute rectangle of this node when its parent's origin is `origin`.
    pub fn rect(&self, origin: (u16, u16)) -> Rect {
        Rect {
            x: origin.0.saturating_add(self.offset.left),
            y: origin.1.saturating_add(self.offset.top),
            width: self.size.width,
            height: self.size.height,
        }
    }

    /// Handler of the deepest clickable node under `(x, y)`.
    ///
    /// Later children are drawn over earlier ones, so they are tried first.
    pub fn click_handler(&self, origin: (u16, u16), x: u16, y: u16) -> Option<Handler> {
        let rect = self.rect(origin);
        self.children
            .iter()
            .rev()
            .find_map(|child| child.click_handler((rect.x, rect.y), x, y))
            .or_else(|| {
                rect.contains(Position::new(x, y))
                    .then(|| self.handler_for(Trigger::Click))
                    .flatten()
            })
    }

    /// First handler bound to `key` in this subtree, depth-first.
    pub fn key_handler(&self, key: char) -> Option<Handler> {
        self.handler_for(Trigger::Key(key)).or_else(|| {
            self.children
                .iter()
                .find_map(|child| child.key_handler(key))
        })
    }

    fn handler_for(&self, trigger: Trigger) -> Option<Handler> {
        self.bindings
            .iter()
            .find(|binding| binding.trigger == trigger)
            .map(|binding| Arc::clone(&binding.handler))
    }

    /// Paint the node with its parent's origin at `origin`, touching only
    /// cells inside `clip`.
    pub fn paint(&self, origin: (u16, u16), clip: Rect, buf: &mut Buffer) {
        let clip = clip.intersection(buf.area);
        let rect = self.rect(origin);
        let visible = rect.intersection(clip);
        if !visible.is_empty() {
            self.paint_content(rect, visible, buf);
        }
        for child in &self.children {
            child.paint((rect.x, rect.y), clip, buf);
        }
    }

    fn paint_content(&self, rect: Rect, visible: Rect, buf: &mut Buffer) {
        buf.set_style(visible, self.style);
        for (row, line) in self.lines.iter().enumerate() {
            let y = rect.y.saturating_add(row as u16);
            if y < visible.y || y >= visible.bottom() {
                continue;
            }
            let width = line.width() as u16;
            let x = rect
                .x
                .saturating_add(rect.width.saturating_sub(width) / 2)
                .max(visible.x);
            if x >= visible.right() {
                continue;
            }
            buf.set_line(x, y, line, visible.right() - x);
        }
    }
}

impl Widget for &Node {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.paint((area.x, area.y), area, buf);
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("offset", &self.offset)
            .field("size", &self.size)
            .field("lines", &self.lines)
            .field("triggers", &self.triggers().collect::<Vec<_>>())
            .field("children", &self.children)
            .finish()
    }
}

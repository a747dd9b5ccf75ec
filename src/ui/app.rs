use std::sync::mpsc::Receiver;

use ratatui::layout::{Position, Rect};

use crate::ui::board::{self, Board, BoardAction, BoardState};
use crate::ui::header::HeaderStatus;
use crate::ui::layout::{body_rect, grid_rect};
use crate::ui::mvi::{Component, Dispatcher};
use crate::ui::node::Node;

/// Host-side application state around the board.
///
/// The board state only changes in [`App::drain_actions`], which applies
/// queued actions one at a time in the order they were dispatched.
pub struct App {
    should_quit: bool,
    board: Board,
    state: BoardState,
    dispatch: Dispatcher<BoardAction>,
    actions: Receiver<BoardAction>,
    focus: usize,
    size: Option<(u16, u16)>,
    applied: u64,
}

impl App {
    pub fn new(board: Board) -> Self {
        let state = board.init();
        let (dispatch, actions) = Dispatcher::channel();
        Self {
            should_quit: false,
            board,
            state,
            dispatch,
            actions,
            focus: 0,
            size: None,
            applied: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn state(&self) -> &BoardState {
        &self.state
    }

    /// Dispatch target feeding this app's action queue.
    pub fn dispatcher(&self) -> Dispatcher<BoardAction> {
        self.dispatch.clone()
    }

    /// Index of the focused cell.
    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Number of actions applied so far.
    pub fn applied(&self) -> u64 {
        self.applied
    }

    pub fn view(&self) -> Node {
        self.board.view(&(), &self.dispatch, &self.state)
    }

    pub fn header_status(&self) -> HeaderStatus {
        HeaderStatus {
            rows: self.state.full_rows(),
            columns: self.state.num_cols.get(),
            cells: self.state.len(),
            focus: (!self.state.is_empty()).then(|| self.state.cell_coords(self.focus)),
            total: board::total(&self.state),
            applied: self.applied,
        }
    }

    /// Move focus by whole rows and columns, staying on existing cells.
    pub fn move_focus(&mut self, rows: isize, columns: isize) {
        if self.state.is_empty() {
            return;
        }
        let num_cols = self.state.num_cols.get() as isize;
        let (row, column) = self.state.cell_coords(self.focus);
        let column = (column as isize + columns).clamp(0, num_cols - 1);
        let row = (row as isize + rows).max(0);
        let target = row.saturating_mul(num_cols).saturating_add(column) as usize;
        if target < self.state.len() {
            self.focus = target;
        }
    }

    /// Deliver a typed character to the focused cell.
    ///
    /// Returns true when the cell had a binding for it.
    pub fn on_key_char(&mut self, key: char) -> bool {
        let root = self.view();
        let handler = root
            .children()
            .get(self.focus)
            .and_then(|cell| cell.key_handler(key));
        let Some(handler) = handler else {
            return false;
        };
        handler();
        self.drain_actions();
        true
    }

    /// Deliver a left click at absolute terminal coordinates.
    ///
    /// Focus moves to the clicked cell. Returns true when a clickable node
    /// was hit.
    pub fn on_click(&mut self, x: u16, y: u16) -> bool {
        let Some(area) = self.grid_area() else {
            return false;
        };
        let origin = (area.x, area.y);
        let root = self.view();

        if let Some(index) = root
            .children()
            .iter()
            .position(|cell| cell.rect(origin).contains(Position::new(x, y)))
        {
            self.focus = index;
        }

        let Some(handler) = root.click_handler(origin, x, y) else {
            tracing::trace!(x, y, "Click hit no handler");
            return false;
        };
        handler();
        self.drain_actions();
        true
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        tracing::debug!(cols, rows, "Terminal resized");
        self.size = Some((cols, rows));
    }

    /// Where the grid is drawn for the current terminal size.
    pub fn grid_area(&self) -> Option<Rect> {
        let (cols, rows) = self.size?;
        let body = body_rect(Rect::new(0, 0, cols, rows));
        Some(grid_rect(body, self.state.grid_size()))
    }

    /// Apply every queued action, oldest first. Returns how many were applied.
    pub fn drain_actions(&mut self) -> usize {
        let mut count = 0;
        while let Ok(action) = self.actions.try_recv() {
            tracing::trace!(index = action.index, action = ?action.action, "Applying action");
            self.state = self.board.update(action, std::mem::take(&mut self.state));
            count += 1;
        }
        self.applied += count as u64;
        count
    }
}

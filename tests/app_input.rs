mod common;

use common::{make_app, make_app_with, make_config};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use gridmvi::ui::counter::CounterAction;
use gridmvi::ui::grid::GridAction;
use gridmvi::ui::input::{handle_key, handle_mouse};
use ratatui::layout::Rect;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn left_click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

#[test]
fn grid_is_centered_in_body() {
    let app = make_app();
    assert_eq!(app.grid_area(), Some(Rect::new(8, 3, 64, 24)));
}

#[test]
fn plus_key_increments_focused_cell() {
    let mut app = make_app();
    handle_key(&mut app, key(KeyCode::Char('+')));
    handle_key(&mut app, key(KeyCode::Char('=')));
    assert_eq!(app.state().children[0].count, 2);
    assert_eq!(app.applied(), 2);
    assert!(app.state().children[1..].iter().all(|c| c.count == 0));
}

#[test]
fn focus_moves_and_clamps() {
    let mut app = make_app();
    handle_key(&mut app, key(KeyCode::Left));
    handle_key(&mut app, key(KeyCode::Up));
    assert_eq!(app.focus(), 0);

    handle_key(&mut app, key(KeyCode::Right));
    handle_key(&mut app, key(KeyCode::Char('j')));
    assert_eq!(app.focus(), 9);

    for _ in 0..20 {
        handle_key(&mut app, key(KeyCode::Char('l')));
    }
    assert_eq!(app.focus(), 15);

    for _ in 0..20 {
        handle_key(&mut app, key(KeyCode::Down));
    }
    assert_eq!(app.focus(), 63);

    handle_key(&mut app, key(KeyCode::Char('-')));
    assert_eq!(app.state().children[63].count, -1);
}

#[test]
fn focus_does_not_enter_missing_cells_of_partial_row() {
    let mut app = make_app_with(&make_config(4, 6, 3, 32));
    handle_key(&mut app, key(KeyCode::Right));
    handle_key(&mut app, key(KeyCode::Right));
    handle_key(&mut app, key(KeyCode::Down));
    // Index 6 does not exist; focus stays on 2.
    assert_eq!(app.focus(), 2);
    handle_key(&mut app, key(KeyCode::Left));
    handle_key(&mut app, key(KeyCode::Down));
    assert_eq!(app.focus(), 5);
}

#[test]
fn click_on_buttons_changes_clicked_cell() {
    let mut app = make_app();
    // Cell 0 origin is (8, 3); buttons on row 5, [-] at x 8..11, [+] at x 13..16.
    handle_mouse(&mut app, left_click(14, 5));
    handle_mouse(&mut app, left_click(14, 5));
    handle_mouse(&mut app, left_click(9, 5));
    assert_eq!(app.state().children[0].count, 1);

    // Cell 10 (row 1, column 2) origin (24, 6): [+] at x 29..32, row 8.
    handle_mouse(&mut app, left_click(30, 8));
    assert_eq!(app.state().children[10].count, 1);
    assert_eq!(app.focus(), 10);
}

#[test]
fn click_on_count_only_moves_focus() {
    let mut app = make_app();
    assert!(!app.on_click(20, 4));
    assert_eq!(app.focus(), 1);
    assert_eq!(app.applied(), 0);
}

#[test]
fn click_outside_grid_is_ignored() {
    let mut app = make_app();
    assert!(!app.on_click(2, 10));
    assert_eq!(app.focus(), 0);
}

#[test]
fn quit_keys() {
    for code in [KeyCode::Char('q'), KeyCode::Esc] {
        let mut app = make_app();
        handle_key(&mut app, key(code));
        assert!(app.should_quit());
    }
    let mut app = make_app();
    handle_key(&mut app, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(app.should_quit());
}

#[test]
fn external_dispatch_applies_in_order() {
    let mut app = make_app();
    let dispatch = app.dispatcher();
    dispatch.dispatch(GridAction::new(3, CounterAction::Increment));
    dispatch.dispatch(GridAction::new(3, CounterAction::Reset));
    dispatch.dispatch(GridAction::new(3, CounterAction::Decrement));
    dispatch.dispatch(GridAction::new(999, CounterAction::Increment));
    assert_eq!(app.drain_actions(), 4);
    assert_eq!(app.state().children[3].count, -1);
    assert_eq!(app.applied(), 4);
}

#[test]
fn header_reports_focus_and_total() {
    let mut app = make_app();
    handle_key(&mut app, key(KeyCode::Down));
    handle_key(&mut app, key(KeyCode::Char('+')));
    let status = app.header_status();
    assert_eq!(status.focus, Some((1, 0)));
    assert_eq!(status.total, 1);
    assert_eq!(status.cells, 64);
    assert_eq!(status.rows, 8);
}

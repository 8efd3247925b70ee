//! Input routing between the inventory screen and the details modal

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use pedra_viewer::{
    app::{events::AppEvent, state::AppState},
    config::{Config, ModalConfig, UIConfig},
    pedra::{Inventory, StatusEntry, StoneDisplayRequest},
    ui::UI,
    App,
};
use ratatui::{backend::TestBackend, Terminal};
use std::time::Instant;

fn inventory() -> Inventory {
    Inventory::new(vec![
        StoneDisplayRequest::new(
            "11111111aaaa",
            "Ruby Tier 3 +7",
            "ruby.png",
            Some(vec![StatusEntry::new("STR", "+10")]),
        ),
        StoneDisplayRequest::new("22222222bbbb", "Jade Tier 2", "jade.png", None),
        StoneDisplayRequest::new("33333333cccc", "Opal", "opal.png", None),
    ])
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

fn draw(ui: &mut UI, state: &AppState) {
    let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
    terminal.draw(|f| ui.render(f, state)).unwrap();
}

#[test]
fn test_enter_opens_selected_stone_and_locks_list() {
    let mut app = App::with_config(Config::default(), None, Instant::now());
    app.handle_app_event(AppEvent::InventoryLoaded(inventory()));

    app.handle_key_event(key(KeyCode::Down)).unwrap();
    app.handle_key_event(key(KeyCode::Enter)).unwrap();

    assert!(app.ui().is_modal_open());
    assert!(app.state().is_background_scroll_locked());
    let view = app.ui().stone_details().view().unwrap();
    assert_eq!(view.name, "Jade Tier 2");
    assert_eq!(view.uid_text, "UID: 22222222...");

    // List does not move behind the modal
    app.handle_key_event(key(KeyCode::Down)).unwrap();
    assert_eq!(app.state().selected_index(), 1);
}

#[test]
fn test_escape_closes_modal_before_quitting() {
    let mut app = App::with_config(Config::default(), None, Instant::now());
    app.handle_app_event(AppEvent::InventoryLoaded(inventory()));
    app.handle_key_event(key(KeyCode::Enter)).unwrap();

    app.handle_key_event(key(KeyCode::Esc)).unwrap();
    assert!(!app.ui().is_modal_open());
    assert!(!app.state().is_background_scroll_locked());
    assert!(!app.state().should_quit());

    app.handle_key_event(key(KeyCode::Esc)).unwrap();
    assert!(app.state().should_quit());
}

#[test]
fn test_status_bar_tells_escape_also_quits() {
    let mut ui = UI::new(&UIConfig::default(), &ModalConfig::default());
    let mut state = AppState::new();
    state.mark_running();
    state.set_inventory(inventory());

    let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
    terminal.draw(|f| ui.render(f, &state)).unwrap();

    let buffer = terminal.backend().buffer();
    let bottom: String = (0..80).map(|x| buffer.get(x, 29).symbol()).collect();
    assert!(bottom.contains("q/Esc Quit"), "status bar: {:?}", bottom);
    assert!(bottom.starts_with("Stone 1/3 @"), "status bar: {:?}", bottom);
}

#[test]
fn test_q_is_captured_by_open_modal() {
    let mut app = App::with_config(Config::default(), None, Instant::now());
    app.handle_app_event(AppEvent::InventoryLoaded(inventory()));
    app.handle_key_event(key(KeyCode::Enter)).unwrap();

    app.handle_key_event(key(KeyCode::Char('q'))).unwrap();
    assert!(!app.state().should_quit());
    assert!(app.ui().is_modal_open());
}

#[test]
fn test_enter_on_empty_inventory_does_nothing() {
    let mut app = App::with_config(Config::default(), None, Instant::now());
    app.handle_key_event(key(KeyCode::Enter)).unwrap();
    assert!(!app.ui().is_modal_open());
}

#[test]
fn test_background_error_is_recorded() {
    let mut app = App::with_config(Config::default(), None, Instant::now());
    app.handle_app_event(AppEvent::Error("Failed to load inventory".to_string()));
    assert_eq!(
        app.state().latest_error().unwrap().message,
        "Failed to load inventory"
    );
}

#[test]
fn test_click_on_row_opens_modal_and_backdrop_closes_it() {
    let mut ui = UI::new(&UIConfig::default(), &ModalConfig::default());
    let mut state = AppState::new();
    state.set_inventory(inventory());
    draw(&mut ui, &state);

    // Header takes rows 0..3, the list border row 3, first stone row 4
    ui.handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), 5, 5), &mut state)
        .unwrap();
    assert!(ui.is_modal_open());
    assert_eq!(state.selected_index(), 1);
    assert_eq!(ui.stone_details().view().unwrap().name, "Jade Tier 2");

    // Wheel is swallowed by the modal
    ui.handle_mouse_event(mouse(MouseEventKind::ScrollDown, 5, 5), &mut state)
        .unwrap();
    assert_eq!(state.selected_index(), 1);

    draw(&mut ui, &state);
    ui.handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), 0, 0), &mut state)
        .unwrap();
    assert!(!ui.is_modal_open());
    assert!(!state.is_background_scroll_locked());

    ui.handle_mouse_event(mouse(MouseEventKind::ScrollDown, 5, 5), &mut state)
        .unwrap();
    assert_eq!(state.selected_index(), 2);
}

#[test]
fn test_click_below_last_row_is_ignored() {
    let mut ui = UI::new(&UIConfig::default(), &ModalConfig::default());
    let mut state = AppState::new();
    state.set_inventory(inventory());
    draw(&mut ui, &state);

    ui.handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), 5, 20), &mut state)
        .unwrap();
    assert!(!ui.is_modal_open());
    assert_eq!(state.selected_index(), 0);
}

#[test]
fn test_hide_stone_is_idempotent() {
    let mut ui = UI::new(&UIConfig::default(), &ModalConfig::default());
    let mut state = AppState::new();

    ui.hide_stone(&mut state);
    assert!(!ui.is_modal_open());

    ui.show_stone(
        StoneDisplayRequest::new("abc", "Emerald +1", "e.png", None),
        &mut state,
    );
    assert!(state.is_background_scroll_locked());
    ui.hide_stone(&mut state);
    ui.hide_stone(&mut state);
    assert!(!ui.is_modal_open());
    assert!(!state.is_background_scroll_locked());
}

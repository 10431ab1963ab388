use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use filenav_core::{FilenavConfig, ItemList};
use filenav_tui::{ui, App};
use ratatui::{backend::TestBackend, Terminal};

fn press(app: &mut App, code: KeyCode) {
    app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
}

fn app_with(items: &[&str]) -> App {
    App::new(
        items.iter().map(|s| s.to_string()).collect(),
        FilenavConfig::default(),
    )
}

fn screen(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(60, 10)).unwrap();
    terminal.draw(|frame| ui::render(app, frame)).unwrap();
    let buffer = terminal.backend().buffer().clone();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

#[test]
fn arrows_move_selection_while_active() {
    let mut app = app_with(&["main.rs", "lib.rs", "ui.rs"]);
    let _activation = app.activate().unwrap();

    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    assert_eq!(app.selected_index(), Some(1));
    assert_eq!(app.last_selection().as_deref(), Some("lib.rs"));

    press(&mut app, KeyCode::Up);
    assert_eq!(app.selected_index(), Some(0));
    assert_eq!(app.status_line(), "Selected 1: main.rs");

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.selected_index(), None);
    assert_eq!(app.last_selection(), None);
    assert_eq!(app.status_line(), "No selection");
}

#[test]
fn keys_are_ignored_when_inactive() {
    let mut app = app_with(&["a", "b"]);
    press(&mut app, KeyCode::Down);
    assert_eq!(app.selected_index(), None);

    let activation = app.activate().unwrap();
    press(&mut app, KeyCode::Down);
    assert_eq!(app.selected_index(), Some(0));
    activation.deactivate();

    press(&mut app, KeyCode::Down);
    assert_eq!(app.selected_index(), None);
}

#[test]
fn failed_second_activation_keeps_selection() {
    let mut app = app_with(&["a", "b"]);
    let _activation = app.activate().unwrap();
    press(&mut app, KeyCode::Down);
    assert_eq!(app.status_line(), "Selected 1: a");

    assert!(app.activate().is_err());
    assert_eq!(app.selected_index(), Some(0));
    assert_eq!(app.last_selection().as_deref(), Some("a"));
    assert_eq!(app.status_line(), "Selected 1: a");

    press(&mut app, KeyCode::Down);
    assert_eq!(app.last_selection().as_deref(), Some("b"));
}

#[test]
fn enter_does_not_change_selection() {
    let mut app = app_with(&["a", "b"]);
    let _activation = app.activate().unwrap();
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.selected_index(), Some(0));
    assert!(!app.should_quit());
}

#[test]
fn q_quits_without_dispatching() {
    let mut app = app_with(&["a"]);
    let _activation = app.activate().unwrap();
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit());
    assert_eq!(app.selected_index(), None);
}

#[test]
fn owner_can_extend_items_while_active() {
    let mut app = app_with(&["a"]);
    let _activation = app.activate().unwrap();
    press(&mut app, KeyCode::Down);
    app.items().push("b".to_string());
    press(&mut app, KeyCode::Down);
    assert_eq!(app.selected_index(), Some(1));
    assert_eq!(app.items().len(), 2);
}

#[test]
fn render_highlights_selection() {
    let mut app = app_with(&["alpha.txt", "beta.txt"]);
    let _activation = app.activate().unwrap();
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);

    let text = screen(&app);
    assert!(text.contains("Files (2)"));
    assert!(text.contains("> beta.txt"));
    assert!(text.contains("Selected 2: beta.txt"));
}

#[test]
fn render_empty_list_message() {
    let app = app_with(&[]);
    let text = screen(&app);
    assert!(text.contains("(no items)"));
    assert!(text.contains("No selection"));
}

use crate::ui::app::{App, Focus};
use crate::ui::form::FormIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Instant;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    if matches!(key.code, KeyCode::Tab | KeyCode::BackTab) {
        app.cycle_focus();
        return;
    }

    match app.focus() {
        Focus::Form => handle_form_key(app, key),
        Focus::Cards => handle_cards_key(app, key),
    }
}

fn handle_form_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.submit(),
        KeyCode::Up | KeyCode::Down => app.on_form(FormIntent::FocusNext),
        KeyCode::Backspace => app.on_form(FormIntent::Backspace),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.on_form(FormIntent::Insert(ch))
        }
        _ => {}
    }
}

fn handle_cards_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Left => app.move_selection(-1),
        KeyCode::Right => app.move_selection(1),
        KeyCode::Up => app.move_selection_rows(-1),
        KeyCode::Down => app.move_selection_rows(1),
        KeyCode::Char('f') | KeyCode::Char('F') | KeyCode::Char(' ') => app.toggle_selected(),
        KeyCode::Char('s') | KeyCode::Char('S') => app.share_selected(Instant::now()),
        KeyCode::Esc => app.focus_form(),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

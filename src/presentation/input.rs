use crate::application::{App, AppMode};
use crossterm::event::{KeyCode, KeyModifiers};

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key_event(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        match app.mode {
            AppMode::Browsing => Self::handle_browsing_mode(app, key, modifiers),
            AppMode::Picking(_) => Self::handle_picking_mode(app, key),
            AppMode::Done => {}
        }
    }

    fn handle_browsing_mode(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        if modifiers.contains(KeyModifiers::CONTROL) && key == KeyCode::Char('c') {
            app.should_quit = true;
            return;
        }

        app.status_message = None;

        match key {
            KeyCode::Tab | KeyCode::Down | KeyCode::Char('j') => app.focus_next(),
            KeyCode::BackTab | KeyCode::Up | KeyCode::Char('k') => app.focus_previous(),
            KeyCode::Enter | KeyCode::Char(' ') => app.activate(),
            KeyCode::Char('r') => {
                if !app.retry() {
                    app.status_message = Some("Nada para recarregar".to_string());
                }
            }
            KeyCode::Esc | KeyCode::Char('q') => app.should_quit = true,
            _ => {}
        }
    }

    fn handle_picking_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Enter => app.confirm_picker(),
            KeyCode::Esc => app.close_picker(),
            KeyCode::Up => app.picker_up(),
            KeyCode::Down => app.picker_down(),
            KeyCode::PageUp => {
                for _ in 0..10 {
                    app.picker_up();
                }
            }
            KeyCode::PageDown => {
                for _ in 0..10 {
                    app.picker_down();
                }
            }
            KeyCode::Home => app.picker_index = 0,
            KeyCode::Char(c) if c.is_alphanumeric() => app.picker_jump(c),
            _ => {}
        }
    }
}

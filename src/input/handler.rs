use crate::app::AppState;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Instant;

/// Handle a key press. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent, now: Instant) -> Result<bool> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Ok(true),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Ok(true),

        // Plan list navigation
        KeyCode::Up | KeyCode::Char('k') => {
            app.move_cursor_up();
            Ok(false)
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.move_cursor_down();
            Ok(false)
        }
        KeyCode::Enter => {
            app.select_plan_at_cursor(now)?;
            Ok(false)
        }

        // Timer controls
        KeyCode::Char(' ') | KeyCode::Char('s') => {
            app.toggle_timer(now);
            Ok(false)
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.reset(now);
            Ok(false)
        }

        _ => Ok(false),
    }
}

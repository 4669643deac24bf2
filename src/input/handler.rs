use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::{Direction, Intent};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Steer(Intent),
    Restart,
    Quit,
    None,
}

pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match key.code {
            // Relative turns - left/right arrows
            KeyCode::Left => KeyAction::Steer(Intent::TurnLeft),
            KeyCode::Right => KeyAction::Steer(Intent::TurnRight),

            // Absolute headings - up/down arrows and WASD
            KeyCode::Up => KeyAction::Steer(Intent::Face(Direction::Up)),
            KeyCode::Down => KeyAction::Steer(Intent::Face(Direction::Down)),
            KeyCode::Char('w') | KeyCode::Char('W') => {
                KeyAction::Steer(Intent::Face(Direction::Up))
            }
            KeyCode::Char('s') | KeyCode::Char('S') => {
                KeyAction::Steer(Intent::Face(Direction::Down))
            }
            KeyCode::Char('a') | KeyCode::Char('A') => {
                KeyAction::Steer(Intent::Face(Direction::Left))
            }
            KeyCode::Char('d') | KeyCode::Char('D') => {
                KeyAction::Steer(Intent::Face(Direction::Right))
            }

            // Controls
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,
            KeyCode::Char(' ') | KeyCode::Char('r') | KeyCode::Char('R') => KeyAction::Restart,

            _ => KeyAction::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::Section;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    Quit,
    GoTo(Section),
    NextSection,
    PrevSection,
    Cancel,
    NextField,
    PrevField,
    Submit,
    Backspace,
    Up,
    Down,
    Left,
    Right,
    /// Ctrl+letter; screen-specific commands that never collide with typing.
    Command(char),
    Input(char),
    None,
}

pub fn map_key(key: KeyEvent) -> AppAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => AppAction::Quit,
            KeyCode::Char('n') => AppAction::NextSection,
            KeyCode::Char('p') => AppAction::PrevSection,
            KeyCode::Char(ch) => AppAction::Command(ch.to_ascii_lowercase()),
            _ => AppAction::None,
        };
    }

    match key.code {
        KeyCode::F(n) => Section::from_function_key(n).map_or(AppAction::None, AppAction::GoTo),
        KeyCode::Esc => AppAction::Cancel,
        KeyCode::Tab => AppAction::NextField,
        KeyCode::BackTab => AppAction::PrevField,
        KeyCode::Enter => AppAction::Submit,
        KeyCode::Backspace => AppAction::Backspace,
        KeyCode::Up => AppAction::Up,
        KeyCode::Down => AppAction::Down,
        KeyCode::Left => AppAction::Left,
        KeyCode::Right => AppAction::Right,
        KeyCode::Char(ch) => AppAction::Input(ch),
        _ => AppAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn plain_letters_are_input() {
        assert_eq!(
            map_key(key(KeyCode::Char('q'), KeyModifiers::NONE)),
            AppAction::Input('q')
        );
    }

    #[test]
    fn control_chords() {
        assert_eq!(
            map_key(key(KeyCode::Char('q'), KeyModifiers::CONTROL)),
            AppAction::Quit
        );
        assert_eq!(
            map_key(key(KeyCode::Char('e'), KeyModifiers::CONTROL)),
            AppAction::Command('e')
        );
    }

    #[test]
    fn function_keys_jump_to_sections() {
        assert_eq!(
            map_key(key(KeyCode::F(2), KeyModifiers::NONE)),
            AppAction::GoTo(Section::Transfer)
        );
        assert_eq!(map_key(key(KeyCode::F(12), KeyModifiers::NONE)), AppAction::None);
    }
}

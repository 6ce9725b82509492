//! Key handling for the single-page TUI

use super::state::FocusArea;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press asks the application to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    None,
    Quit,
    /// Esc: dismiss the error panel if one is shown, otherwise quit
    Escape,
    Submit,
    CopyResult,
    Clear,
    FocusNext,
    LengthUp,
    LengthDown,
    InsertChar(char),
    InsertNewline,
    Backspace,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
}

/// Map a key press to an action, given which pane has focus.
///
/// Control chords work regardless of focus so the primary operations stay
/// reachable while typing into the text area.
pub fn map_key(key: KeyEvent, focus: FocusArea) -> AppAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => AppAction::Quit,
            KeyCode::Char('s') => AppAction::Submit,
            KeyCode::Char('y') => AppAction::CopyResult,
            KeyCode::Char('l') => AppAction::Clear,
            KeyCode::Up => AppAction::LengthUp,
            KeyCode::Down => AppAction::LengthDown,
            _ => AppAction::None,
        };
    }

    match (focus, key.code) {
        (_, KeyCode::Esc) => AppAction::Escape,
        (_, KeyCode::Tab) => AppAction::FocusNext,

        (FocusArea::Length, KeyCode::Left | KeyCode::Down) => AppAction::LengthDown,
        (FocusArea::Length, KeyCode::Right | KeyCode::Up) => AppAction::LengthUp,
        (FocusArea::Length, KeyCode::Enter) => AppAction::Submit,

        (FocusArea::Input, KeyCode::Char(c)) => AppAction::InsertChar(c),
        (FocusArea::Input, KeyCode::Enter) => AppAction::InsertNewline,
        (FocusArea::Input, KeyCode::Backspace) => AppAction::Backspace,
        (FocusArea::Input, KeyCode::Left) => AppAction::CursorLeft,
        (FocusArea::Input, KeyCode::Right) => AppAction::CursorRight,
        (FocusArea::Input, KeyCode::Home) => AppAction::CursorHome,
        (FocusArea::Input, KeyCode::End) => AppAction::CursorEnd,

        _ => AppAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::CONTROL)
    }

    #[test]
    fn test_ctrl_chords_ignore_focus() {
        for focus in [FocusArea::Input, FocusArea::Length] {
            assert_eq!(map_key(ctrl(KeyCode::Char('s')), focus), AppAction::Submit);
            assert_eq!(
                map_key(ctrl(KeyCode::Char('y')), focus),
                AppAction::CopyResult
            );
            assert_eq!(map_key(ctrl(KeyCode::Char('l')), focus), AppAction::Clear);
            assert_eq!(map_key(ctrl(KeyCode::Char('c')), focus), AppAction::Quit);
        }
    }

    #[test]
    fn test_typing_goes_to_input_pane() {
        assert_eq!(
            map_key(key(KeyCode::Char('a')), FocusArea::Input),
            AppAction::InsertChar('a')
        );
        assert_eq!(
            map_key(key(KeyCode::Enter), FocusArea::Input),
            AppAction::InsertNewline
        );
        assert_eq!(
            map_key(key(KeyCode::Backspace), FocusArea::Input),
            AppAction::Backspace
        );
    }

    #[test]
    fn test_length_pane_arrow_keys_adjust() {
        assert_eq!(
            map_key(key(KeyCode::Right), FocusArea::Length),
            AppAction::LengthUp
        );
        assert_eq!(
            map_key(key(KeyCode::Left), FocusArea::Length),
            AppAction::LengthDown
        );
        // Plain typing does nothing on the length pane
        assert_eq!(
            map_key(key(KeyCode::Char('a')), FocusArea::Length),
            AppAction::None
        );
    }

    #[test]
    fn test_tab_and_esc_work_everywhere() {
        for focus in [FocusArea::Input, FocusArea::Length] {
            assert_eq!(map_key(key(KeyCode::Tab), focus), AppAction::FocusNext);
            assert_eq!(map_key(key(KeyCode::Esc), focus), AppAction::Escape);
        }
    }
}

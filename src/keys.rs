//! Keybinding definitions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    NextTab,
    PrevTab,
    SwitchTab(usize),
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    Select,
    ToggleFilterFocus,
    ClearFilters,
    Refresh,
    Save,
    OpenHelp,
    Cancel,
}

pub fn map_key(event: KeyEvent) -> Option<Action> {
    let KeyEvent { code, modifiers, .. } = event;

    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('c') => Some(Action::Quit),
            KeyCode::Char('r') => Some(Action::Refresh),
            _ => None,
        };
    }

    match code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('?') => Some(Action::OpenHelp),
        KeyCode::Char('f') => Some(Action::ToggleFilterFocus),
        KeyCode::Char('c') => Some(Action::ClearFilters),
        KeyCode::Char('r') => Some(Action::Refresh),
        KeyCode::Char('s') => Some(Action::Save),
        KeyCode::Char(' ') | KeyCode::Enter => Some(Action::Select),
        KeyCode::Esc => Some(Action::Cancel),
        KeyCode::Tab => Some(Action::NextTab),
        KeyCode::BackTab => Some(Action::PrevTab),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveDown),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::MoveLeft),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::MoveRight),
        KeyCode::Char('1') => Some(Action::SwitchTab(0)),
        KeyCode::Char('2') => Some(Action::SwitchTab(1)),
        _ => None,
    }
}

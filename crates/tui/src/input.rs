//! Keyboard mapping per application mode.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::state::AppMode;

/// High-level actions the app shell dispatches on.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum KeyAction {
    Quit,
    NextSlot,
    PrevSlot,
    /// Open the change screen for the selected slot / confirm a choice.
    Confirm,
    Cancel,
    MenuUp,
    MenuDown,
    /// Open the selected panel's decoration sub-panel.
    ToggleDecorations,
    /// Open the decoration chooser for the selected slot.
    AddDecoration,
    /// Unbind the last decoration of the selected slot.
    RemoveDecoration,
    /// Remove the selected slot's piece.
    RemoveSelected,
    /// Menu action: open the full armor list picker.
    OpenArmorList,
    /// Switch to the quest list.
    OpenQuests,
    /// Flip the persisted hint-bar preference.
    ToggleHints,
    None,
}

pub fn handle_key(key: KeyEvent, mode: &AppMode) -> KeyAction {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return KeyAction::Quit;
    }

    match mode {
        AppMode::Builder => match key.code {
            KeyCode::Char('q') => KeyAction::Quit,
            KeyCode::Up | KeyCode::Char('k') => KeyAction::PrevSlot,
            KeyCode::Down | KeyCode::Char('j') => KeyAction::NextSlot,
            KeyCode::Enter => KeyAction::Confirm,
            KeyCode::Char('d') => KeyAction::ToggleDecorations,
            KeyCode::Char('a') => KeyAction::AddDecoration,
            KeyCode::Char('x') => KeyAction::RemoveDecoration,
            KeyCode::Backspace | KeyCode::Char('r') => KeyAction::RemoveSelected,
            KeyCode::Char('p') => KeyAction::OpenArmorList,
            KeyCode::Char('l') => KeyAction::OpenQuests,
            KeyCode::Char('h') => KeyAction::ToggleHints,
            _ => KeyAction::None,
        },
        AppMode::QuestList { .. } => match key.code {
            KeyCode::Char('q') => KeyAction::Quit,
            KeyCode::Up | KeyCode::Char('k') => KeyAction::MenuUp,
            KeyCode::Down | KeyCode::Char('j') => KeyAction::MenuDown,
            KeyCode::Enter => KeyAction::Confirm,
            KeyCode::Esc => KeyAction::Cancel,
            _ => KeyAction::None,
        },
        AppMode::QuestDetail { .. } => match key.code {
            KeyCode::Char('q') => KeyAction::Quit,
            KeyCode::Esc | KeyCode::Enter => KeyAction::Cancel,
            _ => KeyAction::None,
        },
        AppMode::Child(_) => match key.code {
            KeyCode::Up | KeyCode::Char('k') => KeyAction::MenuUp,
            KeyCode::Down | KeyCode::Char('j') => KeyAction::MenuDown,
            KeyCode::Enter => KeyAction::Confirm,
            KeyCode::Esc => KeyAction::Cancel,
            _ => KeyAction::None,
        },
    }
}

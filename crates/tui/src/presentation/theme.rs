//! Ratatui styling lookups for slots, quests, and labeled cells.
//!
//! The equivalent of compiled-resource lookups: every glyph and color used
//! by the screens resolves through here.

use ratatui::style::{Color, Modifier, Style};
use wyrmdex_data::{EquipSlot, QuestKind};

/// Fixed styling rules for the terminal UI.
pub struct WyrmdexTheme;

impl WyrmdexTheme {
    pub fn new() -> Self {
        Self
    }

    /// Glyph shown next to a slot panel title.
    pub fn slot_glyph(&self, slot: EquipSlot) -> &'static str {
        match slot {
            EquipSlot::Weapon => "⚔",
            EquipSlot::Head => "⛑",
            EquipSlot::Body => "🛡",
            EquipSlot::Arms => "🧤",
            EquipSlot::Waist => "⊙",
            EquipSlot::Legs => "🥾",
            EquipSlot::Talisman => "◈",
        }
    }

    pub fn slot_style(&self, selected: bool) -> Style {
        if selected {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        }
    }

    pub fn quest_kind_style(&self, kind: QuestKind) -> Style {
        let color = match kind {
            QuestKind::Normal => Color::White,
            QuestKind::Key => Color::Cyan,
            QuestKind::Urgent => Color::LightRed,
        };
        Style::default().fg(color)
    }

    pub fn label_style(&self) -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn value_style(&self) -> Style {
        Style::default().fg(Color::White)
    }

    pub fn hint_style(&self) -> Style {
        Style::default().fg(Color::DarkGray)
    }
}

impl Default for WyrmdexTheme {
    fn default() -> Self {
        Self::new()
    }
}

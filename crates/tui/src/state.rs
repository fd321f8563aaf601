//! Application modes and modal child-screen state.
//!
//! Child screens are modal states entered for one user decision. Each one
//! completes into a [`ScreenReply`] (Enter) or cancels (Esc); replies then
//! route through [`crate::screens::navigation::deliver`].

use tokio::sync::watch;
use wyrmdex_data::{DataResult, EquipSlot, QuestRecord, Talisman};

use crate::screens::outcome::{ReplyPayload, RequestKind, ScreenReply};

/// Top-level application mode determining input handling and UI layout.
pub enum AppMode {
    /// The armor-set builder with its seven slot panels.
    Builder,
    /// Quest list browser.
    QuestList { selected: usize },
    /// One quest's detail view; the record loads off-thread and lands in
    /// the holder once ready.
    QuestDetail {
        rx: watch::Receiver<Option<DataResult<QuestRecord>>>,
    },
    /// A modal child screen collecting one decision.
    Child(ChildScreen),
}

/// One pickable entry of a list-backed child screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PickEntry {
    pub id: i64,
    pub name: String,
}

/// Modal child screens launched by the builder.
pub enum ChildScreen {
    /// Chooser for the weapon's decoration slot count (0..=3).
    WeaponSlotChooser { selected: u8 },
    /// Per-slot armor chooser, already constrained to the slot.
    ArmorChooser {
        slot: EquipSlot,
        entries: Vec<PickEntry>,
        selected: usize,
    },
    /// Full armor list picker ("add piece" menu action).
    ArmorPicker {
        entries: Vec<PickEntry>,
        selected: usize,
    },
    /// Decoration chooser for the piece at `slot_index`.
    DecorationChooser {
        slot_index: usize,
        entries: Vec<PickEntry>,
        selected: usize,
    },
    /// Talisman editor: pick one of the preset charms.
    TalismanEditor {
        presets: Vec<Talisman>,
        selected: usize,
    },
}

impl ChildScreen {
    /// The request this screen answers; cancel replies carry it too.
    pub fn request_kind(&self) -> RequestKind {
        match self {
            Self::WeaponSlotChooser { .. } => RequestKind::SetWeaponSlots,
            Self::ArmorChooser { .. } | Self::ArmorPicker { .. } => RequestKind::AddPiece,
            Self::DecorationChooser { .. } => RequestKind::AddDecoration,
            Self::TalismanEditor { .. } => RequestKind::CreateTalisman,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::WeaponSlotChooser { .. } => "Weapon Slots",
            Self::ArmorChooser { .. } => "Choose Armor",
            Self::ArmorPicker { .. } => "All Armor",
            Self::DecorationChooser { .. } => "Add Decoration",
            Self::TalismanEditor { .. } => "Talisman",
        }
    }

    pub fn move_up(&mut self) {
        match self {
            Self::WeaponSlotChooser { selected } => {
                *selected = selected.saturating_sub(1);
            }
            Self::ArmorChooser { selected, .. }
            | Self::ArmorPicker { selected, .. }
            | Self::DecorationChooser { selected, .. }
            | Self::TalismanEditor { selected, .. } => {
                *selected = selected.saturating_sub(1);
            }
        }
    }

    pub fn move_down(&mut self) {
        match self {
            Self::WeaponSlotChooser { selected } => {
                *selected = (*selected + 1).min(3);
            }
            Self::ArmorChooser {
                entries, selected, ..
            }
            | Self::ArmorPicker {
                entries, selected, ..
            }
            | Self::DecorationChooser {
                entries, selected, ..
            } => {
                if *selected + 1 < entries.len() {
                    *selected += 1;
                }
            }
            Self::TalismanEditor { presets, selected } => {
                if *selected + 1 < presets.len() {
                    *selected += 1;
                }
            }
        }
    }

    /// Completes the screen with the current choice.
    ///
    /// An empty listing completes with an absent payload; decoding then
    /// falls back to the sentinel defaults and the flow stays silent.
    pub fn confirm(self) -> ScreenReply {
        let request = self.request_kind();
        let payload = match self {
            Self::WeaponSlotChooser { selected } => ReplyPayload {
                count: Some(selected),
                ..ReplyPayload::default()
            },
            Self::ArmorChooser {
                entries, selected, ..
            }
            | Self::ArmorPicker {
                entries, selected, ..
            } => ReplyPayload {
                armor_id: entries.get(selected).map(|entry| entry.id),
                ..ReplyPayload::default()
            },
            Self::DecorationChooser {
                slot_index,
                entries,
                selected,
            } => ReplyPayload {
                decoration_id: entries.get(selected).map(|entry| entry.id),
                slot_index: Some(slot_index as i64),
                ..ReplyPayload::default()
            },
            Self::TalismanEditor { presets, selected } => ReplyPayload {
                talisman: presets.get(selected).cloned(),
                ..ReplyPayload::default()
            },
        };
        ScreenReply::completed(request, payload)
    }

    /// Dismisses the screen without a choice.
    pub fn cancel(self) -> ScreenReply {
        ScreenReply::canceled(self.request_kind())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screens::outcome::ReplyStatus;

    fn entries() -> Vec<PickEntry> {
        vec![
            PickEntry {
                id: 10,
                name: "Jaggi Helm".into(),
            },
            PickEntry {
                id: 11,
                name: "Velociprey Helm".into(),
            },
        ]
    }

    #[test]
    fn weapon_chooser_clamps_between_zero_and_three() {
        let mut chooser = ChildScreen::WeaponSlotChooser { selected: 3 };
        chooser.move_down();
        if let ChildScreen::WeaponSlotChooser { selected } = chooser {
            assert_eq!(selected, 3);
        }

        let mut chooser = ChildScreen::WeaponSlotChooser { selected: 0 };
        chooser.move_up();
        if let ChildScreen::WeaponSlotChooser { selected } = chooser {
            assert_eq!(selected, 0);
        }
    }

    #[test]
    fn armor_chooser_confirm_carries_the_selected_id() {
        let chooser = ChildScreen::ArmorChooser {
            slot: EquipSlot::Head,
            entries: entries(),
            selected: 1,
        };
        let reply = chooser.confirm();
        assert_eq!(reply.request, RequestKind::AddPiece);
        assert_eq!(reply.status, ReplyStatus::Completed);
        assert_eq!(reply.payload.armor_id, Some(11));
    }

    #[test]
    fn empty_listing_confirms_with_absent_payload() {
        let chooser = ChildScreen::ArmorPicker {
            entries: Vec::new(),
            selected: 0,
        };
        assert_eq!(chooser.confirm().payload.armor_id, None);
    }

    #[test]
    fn decoration_chooser_carries_slot_and_decoration() {
        let chooser = ChildScreen::DecorationChooser {
            slot_index: 2,
            entries: vec![PickEntry {
                id: 5,
                name: "Attack Jewel".into(),
            }],
            selected: 0,
        };
        let reply = chooser.confirm();
        assert_eq!(reply.payload.decoration_id, Some(5));
        assert_eq!(reply.payload.slot_index, Some(2));
    }

    #[test]
    fn cancel_keeps_the_request_kind() {
        let chooser = ChildScreen::TalismanEditor {
            presets: Vec::new(),
            selected: 0,
        };
        let reply = chooser.cancel();
        assert_eq!(reply.request, RequestKind::CreateTalisman);
        assert_eq!(reply.status, ReplyStatus::Canceled);
    }

    #[test]
    fn list_navigation_respects_bounds() {
        let mut chooser = ChildScreen::ArmorChooser {
            slot: EquipSlot::Head,
            entries: entries(),
            selected: 0,
        };
        chooser.move_up();
        chooser.move_down();
        chooser.move_down();
        if let ChildScreen::ArmorChooser { selected, .. } = chooser {
            assert_eq!(selected, 1);
        }
    }
}

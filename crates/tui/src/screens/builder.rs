//! The armor-set builder screen.
//!
//! Owns the seven slot panels and the session view-model, routes child
//! screen results into view-model mutations, and refreshes exactly the
//! panel named by each update event. Panels signal intent only; all
//! navigation and all mutation authority lives here.

use wyrmdex_data::EquipSlot;
use wyrmdex_ui_core::{SetBuilderModel, SlotUpdate};

use crate::screens::navigation::ResultSink;
use crate::screens::outcome::{BuilderOutcome, ScreenReply, ScreenRequest};
use crate::screens::slot_panel::SlotPanel;

pub struct BuilderScreen {
    model: SetBuilderModel,
    panels: Vec<SlotPanel>,
    selected: usize,
}

impl BuilderScreen {
    /// Builds one panel per slot in fixed order and wires them to the
    /// injected view-model.
    pub fn new(model: SetBuilderModel) -> Self {
        let mut panels: Vec<SlotPanel> = EquipSlot::all().map(SlotPanel::new).collect();
        for panel in &mut panels {
            panel.update_contents(model.session(), model.catalog());
        }
        Self {
            model,
            panels,
            selected: 0,
        }
    }

    pub fn panels(&self) -> &[SlotPanel] {
        &self.panels
    }

    pub fn model(&self) -> &SetBuilderModel {
        &self.model
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_slot(&self) -> EquipSlot {
        self.panels[self.selected].slot()
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % self.panels.len();
    }

    pub fn select_prev(&mut self) {
        self.selected = (self.selected + self.panels.len() - 1) % self.panels.len();
    }

    /// Opens the weapon-slot chooser pre-filled with the current count.
    pub fn on_change_weapon_slots(&self) -> ScreenRequest {
        ScreenRequest::WeaponSlotChooser {
            current: self.model.session().weapon_slots,
        }
    }

    /// Opens the talisman editor.
    pub fn on_change_talisman(&self) -> ScreenRequest {
        ScreenRequest::TalismanEditor
    }

    /// Opens the armor chooser for the slot at `piece_index`, constrained
    /// by the session's rank and hunter kind.
    pub fn on_change_armor(&self, piece_index: usize) -> Option<ScreenRequest> {
        let slot = EquipSlot::from_index(piece_index)?;
        let session = self.model.session();
        Some(ScreenRequest::ArmorChooser {
            slot,
            rank: session.rank,
            hunter: session.hunter,
        })
    }

    /// Menu action "add piece": the full armor list picker.
    pub fn on_add_piece_menu(&self) -> ScreenRequest {
        ScreenRequest::ArmorPicker { from_builder: true }
    }

    /// Change intent for the currently selected panel.
    pub fn change_selected(&self) -> Option<ScreenRequest> {
        match self.selected_slot() {
            EquipSlot::Weapon => Some(self.on_change_weapon_slots()),
            EquipSlot::Talisman => Some(self.on_change_talisman()),
            slot => self.on_change_armor(slot.index()),
        }
    }

    /// Collapses every panel's decoration sub-panel.
    ///
    /// Only one panel may show its decorations at a time; the caller
    /// opens its own panel after this sweep.
    pub fn on_decorations_menu_opened(&mut self) {
        for panel in &mut self.panels {
            panel.hide_decorations();
        }
    }

    /// Opens the selected panel's decoration sub-panel, collapsing the
    /// rest first.
    pub fn toggle_selected_decorations(&mut self) {
        let was_open = self.panels[self.selected].decorations_open();
        self.on_decorations_menu_opened();
        if !was_open {
            self.panels[self.selected].open_decorations();
        }
        let index = self.selected;
        self.refresh_panel(index);
    }

    /// Applies one update event: refreshes exactly the named panel.
    ///
    /// `None` and out-of-range indices refresh nothing.
    pub fn on_update(&mut self, update: SlotUpdate) {
        let Some(index) = update.slot else {
            return;
        };
        if index >= self.panels.len() {
            return;
        }
        self.refresh_panel(index);
    }

    fn refresh_panel(&mut self, index: usize) {
        self.panels[index].update_contents(self.model.session(), self.model.catalog());
    }
}

impl ResultSink for BuilderScreen {
    /// Single dispatch point for child-screen results.
    ///
    /// Cancelled or payload-less replies decode to `None` and are dropped
    /// without touching the view-model. The refresh that follows a
    /// mutation is driven by the update event, not by the reply payload.
    fn on_result(&mut self, reply: ScreenReply) {
        let Some(outcome) = reply.decode() else {
            return;
        };
        match outcome {
            BuilderOutcome::SetWeaponSlots { count } => self.model.set_weapon_slots(count),
            BuilderOutcome::AddPiece { armor_id } => self.model.add_armor(armor_id),
            BuilderOutcome::RemovePiece { slot } => self.model.remove_armor_piece(slot),
            BuilderOutcome::AddDecoration {
                decoration_id,
                slot,
            } => self.model.bind_decoration(slot, decoration_id),
            BuilderOutcome::RemoveDecoration { slot, socket } => {
                self.model.unbind_decoration(slot, socket)
            }
            BuilderOutcome::CreateTalisman { talisman } => self.model.set_talisman(talisman),
        }
    }
}

//! Session view-model: the single mutation authority for the armor-set
//! draft.

use std::sync::Arc;

use tokio::sync::mpsc;

use wyrmdex_data::{ArmorCatalog, EquipSlot, Session, Talisman};

use crate::event::SlotUpdate;

/// Owns the in-progress armor set and the only operations that change it.
///
/// Screens read [`Self::session`] and call the mutation operations; after
/// every effective mutation exactly one [`SlotUpdate`] naming the changed
/// slot goes out on the update channel. Ids and indices use -1 as the
/// "missing" sentinel from the result-passing layer; negative or unknown
/// values are dropped without emitting.
///
/// The armor catalog is injected at construction so the model never
/// reaches into a globally scoped store.
pub struct SetBuilderModel {
    session: Session,
    catalog: Arc<dyn ArmorCatalog + Send + Sync>,
    tx_update: mpsc::UnboundedSender<SlotUpdate>,
}

impl SetBuilderModel {
    /// Creates the model and the single-subscriber update channel.
    pub fn new(
        session: Session,
        catalog: Arc<dyn ArmorCatalog + Send + Sync>,
    ) -> (Self, mpsc::UnboundedReceiver<SlotUpdate>) {
        let (tx_update, rx_update) = mpsc::unbounded_channel();
        (
            Self {
                session,
                catalog,
                tx_update,
            },
            rx_update,
        )
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn catalog(&self) -> &(dyn ArmorCatalog + Send + Sync) {
        self.catalog.as_ref()
    }

    /// Sets the weapon's decoration slot count (capped at 3).
    pub fn set_weapon_slots(&mut self, count: u8) {
        self.session.weapon_slots = count.min(3);
        self.emit(EquipSlot::Weapon);
    }

    /// Equips the armor piece with `armor_id`, deriving its slot from the
    /// catalog. Negative or unknown ids are dropped.
    pub fn add_armor(&mut self, armor_id: i64) {
        if armor_id < 0 {
            return;
        }
        let Some(slot) = self.catalog.slot_of(armor_id) else {
            tracing::debug!(armor_id, "ignoring unknown armor id");
            return;
        };
        self.session.equip(slot, armor_id);
        self.emit(slot);
    }

    /// Removes the piece at slot `index`. Out-of-range indices and empty
    /// slots are dropped.
    pub fn remove_armor_piece(&mut self, index: i64) {
        let Some(slot) = slot_from_raw(index) else {
            return;
        };
        if self.session.remove(slot).is_some() {
            self.emit(slot);
        }
    }

    /// Binds a decoration to the piece at slot `index`.
    pub fn bind_decoration(&mut self, index: i64, decoration_id: i64) {
        let Some(slot) = slot_from_raw(index) else {
            return;
        };
        if decoration_id < 0 {
            return;
        }
        if self.session.bind_decoration(slot, decoration_id) {
            self.emit(slot);
        }
    }

    /// Unbinds the decoration at `decoration_index` from the piece at
    /// slot `index`.
    pub fn unbind_decoration(&mut self, index: i64, decoration_index: i64) {
        let Some(slot) = slot_from_raw(index) else {
            return;
        };
        let Ok(socket) = usize::try_from(decoration_index) else {
            return;
        };
        if self.session.unbind_decoration(slot, socket) {
            self.emit(slot);
        }
    }

    /// Replaces the session talisman.
    pub fn set_talisman(&mut self, talisman: Talisman) {
        self.session.set_talisman(talisman);
        self.emit(EquipSlot::Talisman);
    }

    fn emit(&self, slot: EquipSlot) {
        // The subscriber may already be gone during teardown; nothing to do.
        let _ = self.tx_update.send(SlotUpdate::slot(slot.index()));
    }
}

fn slot_from_raw(index: i64) -> Option<EquipSlot> {
    usize::try_from(index).ok().and_then(EquipSlot::from_index)
}

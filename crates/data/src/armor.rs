//! Armor and decoration records plus the catalog lookup seam.

use serde::{Deserialize, Serialize};

use crate::common::{HunterKind, Rank};
use crate::session::EquipSlot;

/// One armor piece (or weapon) as listed in the catalog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArmorPiece {
    pub id: i64,
    pub name: String,
    /// Which equipment slot the piece occupies.
    pub slot: EquipSlot,
    pub rank: Rank,
    pub hunter: HunterKind,
    /// Number of decoration sockets on the piece.
    pub sockets: u8,
}

/// A decoration that can be bound into an armor piece's socket.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Decoration {
    pub id: i64,
    pub name: String,
    /// Sockets consumed when bound.
    pub required_sockets: u8,
}

/// Lookup seam between the session view-model and the armor data.
///
/// The view-model receives this at construction instead of reaching into
/// a globally scoped store, so tests can substitute a fixed catalog.
pub trait ArmorCatalog {
    /// Looks up a piece by id.
    fn piece(&self, id: i64) -> Option<&ArmorPiece>;

    /// Looks up a decoration by id.
    fn decoration(&self, id: i64) -> Option<&Decoration>;

    /// The slot a piece occupies, when the id is known.
    fn slot_of(&self, id: i64) -> Option<EquipSlot> {
        self.piece(id).map(|piece| piece.slot)
    }
}

//! The in-progress armor-set session and its fixed equipment slots.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, FromRepr, IntoEnumIterator};

use crate::common::{HunterKind, Rank};
use crate::talisman::Talisman;

/// Weapon slot count used when a chooser reports no payload.
pub const DEFAULT_WEAPON_SLOTS: u8 = 3;

/// One of the seven fixed equipment positions in an armor set.
///
/// Indices are stable (0..6) and the iteration order never changes; the
/// builder screen creates exactly one panel per variant in this order.
#[derive(
    Clone, Copy, Debug, Display, EnumIter, Eq, FromRepr, Hash, PartialEq, Serialize, Deserialize,
)]
#[repr(u8)]
pub enum EquipSlot {
    Weapon = 0,
    Head = 1,
    Body = 2,
    Arms = 3,
    Waist = 4,
    Legs = 5,
    Talisman = 6,
}

impl EquipSlot {
    pub const COUNT: usize = 7;

    /// Stable slot index, 0..6.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Slot for a stable index, `None` when out of range.
    pub fn from_index(index: usize) -> Option<Self> {
        u8::try_from(index).ok().and_then(Self::from_repr)
    }

    /// All slots in fixed display order.
    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }
}

/// An equipped armor piece together with its bound decorations.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionPiece {
    pub armor_id: i64,
    /// Decoration ids in binding order.
    pub decorations: Vec<i64>,
}

impl SessionPiece {
    pub fn new(armor_id: i64) -> Self {
        Self {
            armor_id,
            decorations: Vec::new(),
        }
    }
}

/// The user-editable armor-set draft.
///
/// Owned by the session view-model; the builder screen reads it and
/// mutates it only through view-model operations.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub weapon_slots: u8,
    pub rank: Rank,
    pub hunter: HunterKind,
    pieces: [Option<SessionPiece>; EquipSlot::COUNT],
    talisman: Option<Talisman>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Rank::Low, HunterKind::Hunter)
    }
}

impl Session {
    pub fn new(rank: Rank, hunter: HunterKind) -> Self {
        Self {
            weapon_slots: DEFAULT_WEAPON_SLOTS,
            rank,
            hunter,
            pieces: Default::default(),
            talisman: None,
        }
    }

    pub fn piece(&self, slot: EquipSlot) -> Option<&SessionPiece> {
        self.pieces[slot.index()].as_ref()
    }

    pub fn talisman(&self) -> Option<&Talisman> {
        self.talisman.as_ref()
    }

    /// Equips a piece into `slot`, replacing whatever was there.
    pub fn equip(&mut self, slot: EquipSlot, armor_id: i64) {
        self.pieces[slot.index()] = Some(SessionPiece::new(armor_id));
    }

    /// Removes the piece at `slot`, returning it if one was equipped.
    pub fn remove(&mut self, slot: EquipSlot) -> Option<SessionPiece> {
        self.pieces[slot.index()].take()
    }

    /// Binds a decoration to the piece at `slot`.
    ///
    /// Returns false when no piece is equipped there.
    pub fn bind_decoration(&mut self, slot: EquipSlot, decoration_id: i64) -> bool {
        match &mut self.pieces[slot.index()] {
            Some(piece) => {
                piece.decorations.push(decoration_id);
                true
            }
            None => false,
        }
    }

    /// Unbinds the decoration at `socket` from the piece at `slot`.
    ///
    /// Returns false when the piece or the socket does not exist.
    pub fn unbind_decoration(&mut self, slot: EquipSlot, socket: usize) -> bool {
        match &mut self.pieces[slot.index()] {
            Some(piece) if socket < piece.decorations.len() => {
                piece.decorations.remove(socket);
                true
            }
            _ => false,
        }
    }

    pub fn set_talisman(&mut self, talisman: Talisman) {
        self.talisman = Some(talisman);
    }
}

//! In-memory stores producing row cursors.
//!
//! These stand in for the database layer: every query hands back a
//! [`VecCursor`] so consumers go through the same single-pass,
//! release-on-exit discipline a real cursor would demand.

use std::collections::HashMap;

use crate::armor::{ArmorCatalog, ArmorPiece, Decoration};
use crate::common::{HunterKind, Rank};
use crate::cursor::{CursorExt, VecCursor};
use crate::error::DataResult;
use crate::quest::QuestRecord;
use crate::session::EquipSlot;

/// Quest table with cursor-producing query shapes.
#[derive(Clone, Debug, Default)]
pub struct QuestStore {
    quests: Vec<QuestRecord>,
}

impl QuestStore {
    pub fn new(quests: Vec<QuestRecord>) -> Self {
        Self { quests }
    }

    /// All quests in table order.
    pub fn all_quests(&self) -> VecCursor<QuestRecord> {
        VecCursor::new(self.quests.clone())
    }

    /// Quests for one hunter kind, in table order.
    pub fn quests_for(&self, hunter: HunterKind) -> VecCursor<QuestRecord> {
        let rows = self
            .quests
            .iter()
            .filter(|quest| quest.hunter == hunter)
            .cloned()
            .collect();
        VecCursor::new(rows)
    }

    /// Single quest by id; fails with `EmptyResult` when unknown.
    pub fn quest_by_id(&self, id: i64) -> DataResult<QuestRecord> {
        let rows = self
            .quests
            .iter()
            .filter(|quest| quest.id == id)
            .cloned()
            .collect();
        VecCursor::new(rows).first(Ok)
    }
}

/// Armor and decoration lookup backing the session view-model.
#[derive(Clone, Debug, Default)]
pub struct ArmorIndex {
    pieces: HashMap<i64, ArmorPiece>,
    decorations: HashMap<i64, Decoration>,
}

impl ArmorIndex {
    pub fn new(pieces: Vec<ArmorPiece>, decorations: Vec<Decoration>) -> Self {
        Self {
            pieces: pieces.into_iter().map(|p| (p.id, p)).collect(),
            decorations: decorations.into_iter().map(|d| (d.id, d)).collect(),
        }
    }

    /// Pieces matching the chooser constraints, sorted by id for a stable
    /// listing order.
    pub fn pieces_for(&self, slot: EquipSlot, rank: Rank, hunter: HunterKind) -> Vec<&ArmorPiece> {
        let mut out: Vec<&ArmorPiece> = self
            .pieces
            .values()
            .filter(|piece| piece.slot == slot && piece.rank == rank && piece.hunter == hunter)
            .collect();
        out.sort_by_key(|piece| piece.id);
        out
    }

    /// Every piece, sorted by id (the full armor list picker).
    pub fn all_pieces(&self) -> Vec<&ArmorPiece> {
        let mut out: Vec<&ArmorPiece> = self.pieces.values().collect();
        out.sort_by_key(|piece| piece.id);
        out
    }

    pub fn all_decorations(&self) -> Vec<&Decoration> {
        let mut out: Vec<&Decoration> = self.decorations.values().collect();
        out.sort_by_key(|decoration| decoration.id);
        out
    }
}

impl ArmorCatalog for ArmorIndex {
    fn piece(&self, id: i64) -> Option<&ArmorPiece> {
        self.pieces.get(&id)
    }

    fn decoration(&self, id: i64) -> Option<&Decoration> {
        self.decorations.get(&id)
    }
}

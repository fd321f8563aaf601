//! Domain records and data access primitives shared across UI layers.
//!
//! `wyrmdex-data` defines the canonical game-data records (quests, armor,
//! decorations, talismans), the in-progress armor-set session, and the
//! forward-only row cursor used to consume query results. UI crates depend
//! on the types re-exported here and never touch a backing store directly.
pub mod armor;
pub mod common;
pub mod cursor;
pub mod error;
pub mod quest;
pub mod session;
pub mod store;
pub mod talisman;

pub use armor::{ArmorCatalog, ArmorPiece, Decoration};
pub use common::{HunterKind, Rank};
pub use cursor::{CursorExt, RowCursor, VecCursor};
pub use error::{DataError, DataResult};
pub use quest::{QuestFlags, QuestKind, QuestRecord};
pub use session::{EquipSlot, Session, SessionPiece};
pub use store::{ArmorIndex, QuestStore};
pub use talisman::{Talisman, TalismanSkill};

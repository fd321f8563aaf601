//! Quest records and their derived predicates.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use strum::{Display, FromRepr};

use crate::common::HunterKind;

/// Quest category code: 0 = normal, 1 = key, 2 = urgent.
///
/// Unknown codes decode to [`QuestKind::Normal`].
#[derive(
    Clone, Copy, Debug, Default, Display, Eq, FromRepr, Hash, PartialEq, Serialize, Deserialize,
)]
#[repr(u8)]
pub enum QuestKind {
    #[default]
    Normal = 0,
    Key = 1,
    Urgent = 2,
}

impl QuestKind {
    pub fn from_code(code: i64) -> Self {
        u8::try_from(code)
            .ok()
            .and_then(Self::from_repr)
            .unwrap_or_default()
    }
}

bitflags! {
    /// Metadata bits attached to a quest row.
    ///
    /// Only two bits are evidenced in the source data; the rest of the
    /// field is carried through untouched.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
    pub struct QuestFlags: u32 {
        /// The quest has a gathering-item objective.
        const GATHERING_ITEM = 1 << 0;
        /// The quest has an academy-point requirement.
        const ACADEMY_POINTS = 1 << 1;
    }
}

/// One quest's static attributes as loaded from the data store.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct QuestRecord {
    pub id: i64,
    /// Default (untranslated) display name.
    pub name: String,
    /// Localized display name, falls back to `name` when empty.
    pub local_name: String,
    pub goal: String,
    pub location_id: i64,
    pub kind: QuestKind,
    /// Star rating as display text, e.g. "★★★".
    pub stars: String,
    pub hunter: HunterKind,
    /// Time limit in minutes.
    pub time_limit: i32,
    pub fee: i32,
    /// Zenny reward.
    pub reward: i32,
    /// Hunter-rank point reward.
    pub hrp: i32,
    pub sub_goal: String,
    pub sub_reward: i32,
    pub sub_hrp: i32,
    pub flavor: String,
    /// Raw goal-type code; no decoding evidenced in the source data.
    pub goal_kind: i32,
    /// Rank label as display text, e.g. "LR" / "HR".
    pub rank: String,
    pub flags: QuestFlags,
}

impl QuestRecord {
    /// Display name preferring the localized form.
    pub fn display_name(&self) -> &str {
        if self.local_name.is_empty() {
            &self.name
        } else {
            &self.local_name
        }
    }

    /// True when the quest carries a gathering-item objective.
    pub fn has_gathering_item(&self) -> bool {
        self.flags.contains(QuestFlags::GATHERING_ITEM)
    }

    /// True when the quest requires academy points.
    pub fn requires_academy_points(&self) -> bool {
        self.flags.contains(QuestFlags::ACADEMY_POINTS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_decodes_known_codes_and_falls_back() {
        assert_eq!(QuestKind::from_code(0), QuestKind::Normal);
        assert_eq!(QuestKind::from_code(1), QuestKind::Key);
        assert_eq!(QuestKind::from_code(2), QuestKind::Urgent);
        assert_eq!(QuestKind::from_code(42), QuestKind::Normal);
    }

    #[test]
    fn flag_predicates_read_their_own_bit() {
        let mut quest = QuestRecord {
            flags: QuestFlags::GATHERING_ITEM,
            ..QuestRecord::default()
        };
        assert!(quest.has_gathering_item());
        assert!(!quest.requires_academy_points());

        quest.flags = QuestFlags::ACADEMY_POINTS;
        assert!(!quest.has_gathering_item());
        assert!(quest.requires_academy_points());

        quest.flags = QuestFlags::GATHERING_ITEM | QuestFlags::ACADEMY_POINTS;
        assert!(quest.has_gathering_item());
        assert!(quest.requires_academy_points());
    }

    #[test]
    fn display_name_prefers_localized_form() {
        let mut quest = QuestRecord {
            name: "Jaggi Hunt".into(),
            ..QuestRecord::default()
        };
        assert_eq!(quest.display_name(), "Jaggi Hunt");

        quest.local_name = "Chasse au Jaggi".into();
        assert_eq!(quest.display_name(), "Chasse au Jaggi");
    }
}

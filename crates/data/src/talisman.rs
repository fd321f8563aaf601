//! User-authored talisman metadata.

use serde::{Deserialize, Serialize};

/// One skill granted by a talisman.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TalismanSkill {
    pub skill_id: i64,
    pub points: i32,
}

/// User-chosen talisman attributes.
///
/// Created in the talisman editor and carried opaquely through the screen
/// result channel into the session.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Talisman {
    pub name: String,
    pub rarity: u8,
    /// Number of decoration sockets.
    pub sockets: u8,
    /// At most two skills in the source data; not enforced here.
    pub skills: Vec<TalismanSkill>,
}

impl Talisman {
    pub fn new(name: impl Into<String>, rarity: u8, sockets: u8) -> Self {
        Self {
            name: name.into(),
            rarity,
            sockets,
            skills: Vec::new(),
        }
    }

    pub fn with_skill(mut self, skill_id: i64, points: i32) -> Self {
        self.skills.push(TalismanSkill { skill_id, points });
        self
    }
}

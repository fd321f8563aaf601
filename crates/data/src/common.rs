//! Small shared codes used across quest and armor records.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, FromRepr};

/// Which character type a quest or armor piece is meant for.
///
/// Stored as code 0 (hunter) or 1 (cat) in the source data; unknown codes
/// decode to [`HunterKind::Hunter`].
#[derive(
    Clone, Copy, Debug, Default, Display, EnumIter, Eq, FromRepr, Hash, PartialEq,
    Serialize, Deserialize,
)]
#[repr(u8)]
pub enum HunterKind {
    #[default]
    Hunter = 0,
    Cat = 1,
}

impl HunterKind {
    pub fn from_code(code: i64) -> Self {
        u8::try_from(code)
            .ok()
            .and_then(Self::from_repr)
            .unwrap_or_default()
    }
}

/// Equipment rank bracket used to constrain armor selection.
#[derive(
    Clone, Copy, Debug, Default, Display, EnumIter, Eq, FromRepr, Hash, PartialEq,
    Serialize, Deserialize,
)]
#[repr(u8)]
pub enum Rank {
    #[default]
    Low = 0,
    High = 1,
    Deviant = 2,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hunter_kind_decodes_known_codes() {
        assert_eq!(HunterKind::from_code(0), HunterKind::Hunter);
        assert_eq!(HunterKind::from_code(1), HunterKind::Cat);
    }

    #[test]
    fn hunter_kind_falls_back_on_unknown_codes() {
        assert_eq!(HunterKind::from_code(9), HunterKind::Hunter);
        assert_eq!(HunterKind::from_code(-1), HunterKind::Hunter);
    }
}

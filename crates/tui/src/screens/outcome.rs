//! Child-screen replies and their typed decoding.
//!
//! A child screen completes with a [`ScreenReply`]: the request kind it
//! answered, a status flag, and a loosely-typed payload. Decoding turns a
//! successful reply into one closed [`BuilderOutcome`] variant, applying
//! the sentinel defaults (-1 for ids and indices, 3 for the weapon slot
//! count) when a payload field is missing. Downstream, the view-model
//! treats negative values as no-ops.

use wyrmdex_data::{EquipSlot, HunterKind, Rank, Talisman, session::DEFAULT_WEAPON_SLOTS};

/// The closed set of requests a child screen can answer.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RequestKind {
    SetWeaponSlots,
    AddPiece,
    RemovePiece,
    AddDecoration,
    RemoveDecoration,
    CreateTalisman,
}

/// Whether the child screen finished with a usable choice.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ReplyStatus {
    Completed,
    Canceled,
}

/// Loosely-typed reply payload; any field may be absent.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReplyPayload {
    pub count: Option<u8>,
    pub armor_id: Option<i64>,
    pub slot_index: Option<i64>,
    pub decoration_id: Option<i64>,
    pub socket_index: Option<i64>,
    pub talisman: Option<Talisman>,
}

/// One completed (or cancelled) child-screen outcome.
#[derive(Clone, Debug, PartialEq)]
pub struct ScreenReply {
    pub request: RequestKind,
    pub status: ReplyStatus,
    pub payload: ReplyPayload,
}

impl ScreenReply {
    pub fn completed(request: RequestKind, payload: ReplyPayload) -> Self {
        Self {
            request,
            status: ReplyStatus::Completed,
            payload,
        }
    }

    pub fn canceled(request: RequestKind) -> Self {
        Self {
            request,
            status: ReplyStatus::Canceled,
            payload: ReplyPayload::default(),
        }
    }

    /// Decodes a successful reply into its typed outcome.
    ///
    /// Cancelled replies and a missing talisman value yield `None` and
    /// are dropped silently by the caller.
    pub fn decode(self) -> Option<BuilderOutcome> {
        if self.status != ReplyStatus::Completed {
            return None;
        }
        let payload = self.payload;
        let outcome = match self.request {
            RequestKind::SetWeaponSlots => BuilderOutcome::SetWeaponSlots {
                count: payload.count.unwrap_or(DEFAULT_WEAPON_SLOTS),
            },
            RequestKind::AddPiece => BuilderOutcome::AddPiece {
                armor_id: payload.armor_id.unwrap_or(-1),
            },
            RequestKind::RemovePiece => BuilderOutcome::RemovePiece {
                slot: payload.slot_index.unwrap_or(-1),
            },
            RequestKind::AddDecoration => BuilderOutcome::AddDecoration {
                decoration_id: payload.decoration_id.unwrap_or(-1),
                slot: payload.slot_index.unwrap_or(-1),
            },
            RequestKind::RemoveDecoration => BuilderOutcome::RemoveDecoration {
                slot: payload.slot_index.unwrap_or(-1),
                socket: payload.socket_index.unwrap_or(-1),
            },
            RequestKind::CreateTalisman => BuilderOutcome::CreateTalisman {
                talisman: payload.talisman?,
            },
        };
        Some(outcome)
    }
}

/// Exhaustively-matched outcome of a successful child screen, one variant
/// per request kind with its typed payload.
#[derive(Clone, Debug, PartialEq)]
pub enum BuilderOutcome {
    SetWeaponSlots { count: u8 },
    AddPiece { armor_id: i64 },
    RemovePiece { slot: i64 },
    AddDecoration { decoration_id: i64, slot: i64 },
    RemoveDecoration { slot: i64, socket: i64 },
    CreateTalisman { talisman: Talisman },
}

/// Navigation intents the builder screen hands to the app shell.
///
/// The screen owns no navigation machinery itself; it describes which
/// child screen to open and the app enters the matching modal state.
#[derive(Clone, Debug, PartialEq)]
pub enum ScreenRequest {
    WeaponSlotChooser {
        current: u8,
    },
    ArmorChooser {
        slot: EquipSlot,
        rank: Rank,
        hunter: HunterKind,
    },
    /// Full armor list picker, flagged with its launch origin.
    ArmorPicker {
        from_builder: bool,
    },
    TalismanEditor,
    DecorationChooser {
        slot_index: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_weapon_slot_count_defaults_to_three() {
        let reply = ScreenReply::completed(RequestKind::SetWeaponSlots, ReplyPayload::default());
        assert_eq!(
            reply.decode(),
            Some(BuilderOutcome::SetWeaponSlots { count: 3 })
        );
    }

    #[test]
    fn present_weapon_slot_count_is_kept() {
        let reply = ScreenReply::completed(
            RequestKind::SetWeaponSlots,
            ReplyPayload {
                count: Some(5),
                ..ReplyPayload::default()
            },
        );
        assert_eq!(
            reply.decode(),
            Some(BuilderOutcome::SetWeaponSlots { count: 5 })
        );
    }

    #[test]
    fn missing_ids_default_to_sentinel() {
        let reply = ScreenReply::completed(RequestKind::AddDecoration, ReplyPayload::default());
        assert_eq!(
            reply.decode(),
            Some(BuilderOutcome::AddDecoration {
                decoration_id: -1,
                slot: -1,
            })
        );
    }

    #[test]
    fn cancelled_replies_decode_to_none() {
        for request in [
            RequestKind::SetWeaponSlots,
            RequestKind::AddPiece,
            RequestKind::RemovePiece,
            RequestKind::AddDecoration,
            RequestKind::RemoveDecoration,
            RequestKind::CreateTalisman,
        ] {
            assert_eq!(ScreenReply::canceled(request).decode(), None);
        }
    }

    #[test]
    fn talisman_reply_without_value_is_a_no_op() {
        let reply = ScreenReply::completed(RequestKind::CreateTalisman, ReplyPayload::default());
        assert_eq!(reply.decode(), None);
    }

    #[test]
    fn talisman_value_passes_through() {
        let talisman = Talisman::new("Hero Charm", 4, 1);
        let reply = ScreenReply::completed(
            RequestKind::CreateTalisman,
            ReplyPayload {
                talisman: Some(talisman.clone()),
                ..ReplyPayload::default()
            },
        );
        assert_eq!(
            reply.decode(),
            Some(BuilderOutcome::CreateTalisman { talisman })
        );
    }
}

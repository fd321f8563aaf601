//! Per-slot panel of the armor-set builder.

use wyrmdex_data::{ArmorCatalog, EquipSlot, Session};

/// One equipment slot's display state.
///
/// Panels signal change intent to the builder screen and never navigate
/// or mutate the session themselves; `update_contents` re-derives the
/// visible lines from the session.
#[derive(Clone, Debug)]
pub struct SlotPanel {
    slot: EquipSlot,
    lines: Vec<String>,
    decorations_open: bool,
    /// Bumped on every contents refresh; render caching keys off it.
    revision: u64,
}

impl SlotPanel {
    pub fn new(slot: EquipSlot) -> Self {
        Self {
            slot,
            lines: Vec::new(),
            decorations_open: false,
            revision: 0,
        }
    }

    pub fn slot(&self) -> EquipSlot {
        self.slot
    }

    pub fn index(&self) -> usize {
        self.slot.index()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn decorations_open(&self) -> bool {
        self.decorations_open
    }

    pub fn open_decorations(&mut self) {
        self.decorations_open = true;
    }

    /// Collapses the decoration sub-panel.
    pub fn hide_decorations(&mut self) {
        self.decorations_open = false;
    }

    /// Re-derives the visible lines from the session.
    pub fn update_contents(&mut self, session: &Session, catalog: &dyn ArmorCatalog) {
        self.lines.clear();
        match self.slot {
            EquipSlot::Weapon => {
                let sockets = "◯".repeat(session.weapon_slots as usize);
                self.lines.push(format!("Slots: {sockets}"));
            }
            EquipSlot::Talisman => match session.talisman() {
                Some(talisman) => {
                    self.lines.push(talisman.name.clone());
                    for skill in &talisman.skills {
                        self.lines
                            .push(format!("  Skill {} +{}", skill.skill_id, skill.points));
                    }
                }
                None => self.lines.push("---".into()),
            },
            _ => match session.piece(self.slot) {
                Some(piece) => {
                    let name = catalog
                        .piece(piece.armor_id)
                        .map(|armor| armor.name.clone())
                        .unwrap_or_else(|| format!("#{}", piece.armor_id));
                    self.lines.push(name);
                    if self.decorations_open {
                        for (socket, decoration_id) in piece.decorations.iter().enumerate() {
                            let name = catalog
                                .decoration(*decoration_id)
                                .map(|d| d.name.clone())
                                .unwrap_or_else(|| format!("#{decoration_id}"));
                            self.lines.push(format!("  [{socket}] {name}"));
                        }
                    }
                }
                None => self.lines.push("---".into()),
            },
        }
        self.revision += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wyrmdex_data::{ArmorIndex, ArmorPiece, Decoration, HunterKind, Rank, Talisman};

    fn catalog() -> ArmorIndex {
        ArmorIndex::new(
            vec![ArmorPiece {
                id: 10,
                name: "Jaggi Helm".into(),
                slot: EquipSlot::Head,
                rank: Rank::Low,
                hunter: HunterKind::Hunter,
                sockets: 1,
            }],
            vec![Decoration {
                id: 5,
                name: "Attack Jewel".into(),
                required_sockets: 1,
            }],
        )
    }

    #[test]
    fn refresh_bumps_revision() {
        let mut panel = SlotPanel::new(EquipSlot::Head);
        let session = Session::default();
        let catalog = catalog();

        assert_eq!(panel.revision(), 0);
        panel.update_contents(&session, &catalog);
        panel.update_contents(&session, &catalog);
        assert_eq!(panel.revision(), 2);
    }

    #[test]
    fn empty_slot_shows_placeholder() {
        let mut panel = SlotPanel::new(EquipSlot::Body);
        panel.update_contents(&Session::default(), &catalog());
        assert_eq!(panel.lines(), ["---"]);
    }

    #[test]
    fn equipped_piece_shows_name_and_optionally_decorations() {
        let mut session = Session::default();
        session.equip(EquipSlot::Head, 10);
        session.bind_decoration(EquipSlot::Head, 5);
        let catalog = catalog();

        let mut panel = SlotPanel::new(EquipSlot::Head);
        panel.update_contents(&session, &catalog);
        assert_eq!(panel.lines(), ["Jaggi Helm"]);

        panel.open_decorations();
        panel.update_contents(&session, &catalog);
        assert_eq!(panel.lines(), ["Jaggi Helm", "  [0] Attack Jewel"]);

        panel.hide_decorations();
        panel.update_contents(&session, &catalog);
        assert_eq!(panel.lines(), ["Jaggi Helm"]);
    }

    #[test]
    fn weapon_panel_shows_slot_count() {
        let mut session = Session::default();
        session.weapon_slots = 2;

        let mut panel = SlotPanel::new(EquipSlot::Weapon);
        panel.update_contents(&session, &catalog());
        assert_eq!(panel.lines(), ["Slots: ◯◯"]);
    }

    #[test]
    fn talisman_panel_lists_skills() {
        let mut session = Session::default();
        session.set_talisman(Talisman::new("Dragon Charm", 5, 2).with_skill(3, 10));

        let mut panel = SlotPanel::new(EquipSlot::Talisman);
        panel.update_contents(&session, &catalog());
        assert_eq!(panel.lines(), ["Dragon Charm", "  Skill 3 +10"]);
    }
}

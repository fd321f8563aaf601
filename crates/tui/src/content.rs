//! Built-in sample catalog shipped with the binary.
//!
//! Stands in for the full game database: enough armor, decorations,
//! quests, and talisman presets to exercise every screen.

use wyrmdex_data::{
    ArmorIndex, ArmorPiece, Decoration, EquipSlot, HunterKind, QuestFlags, QuestKind, QuestRecord,
    QuestStore, Rank, Talisman,
};

pub fn armor_index() -> ArmorIndex {
    let piece = |id, name: &str, slot, rank, hunter, sockets| ArmorPiece {
        id,
        name: name.into(),
        slot,
        rank,
        hunter,
        sockets,
    };

    ArmorIndex::new(
        vec![
            piece(101, "Jaggi Helm", EquipSlot::Head, Rank::Low, HunterKind::Hunter, 1),
            piece(102, "Jaggi Mail", EquipSlot::Body, Rank::Low, HunterKind::Hunter, 2),
            piece(103, "Jaggi Vambraces", EquipSlot::Arms, Rank::Low, HunterKind::Hunter, 1),
            piece(104, "Jaggi Faulds", EquipSlot::Waist, Rank::Low, HunterKind::Hunter, 1),
            piece(105, "Jaggi Greaves", EquipSlot::Legs, Rank::Low, HunterKind::Hunter, 0),
            piece(201, "Rathalos Helm", EquipSlot::Head, Rank::High, HunterKind::Hunter, 2),
            piece(202, "Rathalos Mail", EquipSlot::Body, Rank::High, HunterKind::Hunter, 1),
            piece(203, "Rathalos Greaves", EquipSlot::Legs, Rank::High, HunterKind::Hunter, 3),
            piece(301, "Felyne Acorn Helm", EquipSlot::Head, Rank::Low, HunterKind::Cat, 1),
            piece(302, "Felyne Acorn Mail", EquipSlot::Body, Rank::Low, HunterKind::Cat, 1),
        ],
        vec![
            Decoration {
                id: 1,
                name: "Attack Jewel".into(),
                required_sockets: 1,
            },
            Decoration {
                id: 2,
                name: "Defense Jewel".into(),
                required_sockets: 1,
            },
            Decoration {
                id: 3,
                name: "Expert Jewel".into(),
                required_sockets: 2,
            },
        ],
    )
}

pub fn quest_store() -> QuestStore {
    let base = QuestRecord::default;

    QuestStore::new(vec![
        QuestRecord {
            id: 1,
            name: "Learning the Clutch".into(),
            goal: "Deliver 8 Special Mushrooms".into(),
            location_id: 1,
            kind: QuestKind::Normal,
            stars: "★".into(),
            time_limit: 50,
            fee: 0,
            reward: 600,
            hrp: 70,
            rank: "LR".into(),
            flags: QuestFlags::GATHERING_ITEM,
            ..base()
        },
        QuestRecord {
            id: 2,
            name: "Great Jaggi Hunt".into(),
            goal: "Hunt a Great Jaggi".into(),
            location_id: 1,
            kind: QuestKind::Key,
            stars: "★★".into(),
            time_limit: 50,
            fee: 150,
            reward: 1500,
            hrp: 220,
            sub_goal: "Sever the Great Jaggi's frill".into(),
            sub_reward: 300,
            sub_hrp: 40,
            rank: "LR".into(),
            ..base()
        },
        QuestRecord {
            id: 3,
            name: "The Nest of Flames".into(),
            goal: "Hunt a Rathalos".into(),
            location_id: 2,
            kind: QuestKind::Urgent,
            stars: "★★★★".into(),
            time_limit: 50,
            fee: 400,
            reward: 4400,
            hrp: 1000,
            flavor: "The king of the skies guards its nest.".into(),
            rank: "HR".into(),
            ..base()
        },
        QuestRecord {
            id: 4,
            name: "Feline Field Studies".into(),
            goal: "Deliver 5 Academy Reports".into(),
            location_id: 3,
            kind: QuestKind::Normal,
            stars: "★".into(),
            hunter: HunterKind::Cat,
            time_limit: 30,
            reward: 400,
            hrp: 45,
            rank: "LR".into(),
            flags: QuestFlags::GATHERING_ITEM | QuestFlags::ACADEMY_POINTS,
            ..base()
        },
    ])
}

pub fn talisman_presets() -> Vec<Talisman> {
    vec![
        Talisman::new("Dragon Charm", 5, 2).with_skill(3, 10),
        Talisman::new("Hero Charm", 4, 1).with_skill(1, 7).with_skill(8, -3),
        Talisman::new("Blank Charm", 1, 3),
    ]
}

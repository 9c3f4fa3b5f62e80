/// Which half of the map a unit or structure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Side {
    Goodguy,
    Badguy,
}

impl Side {
    pub fn other(self) -> Self {
        match self {
            Self::Goodguy => Self::Badguy,
            Self::Badguy => Self::Goodguy,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    PlayerSideKill(Side),
    NeutralKill,
    RoshanKill,
    TowerKill(Side),
    RaxKill(Side),
    BuildingKill(Side),
    Unclassified,
}

/// Prefixes of killable non-hero entities, checked in order. The first match wins.
pub static ENTITY_PREFIXES: &[(&str, Category)] = &[
    ("npc_dota_creep_goodguys", Category::PlayerSideKill(Side::Goodguy)),
    ("npc_dota_goodguys_siege", Category::PlayerSideKill(Side::Goodguy)),
    ("npc_dota_creep_badguys", Category::PlayerSideKill(Side::Badguy)),
    ("npc_dota_badguys_siege", Category::PlayerSideKill(Side::Badguy)),
    ("npc_dota_dark_troll_warlord_skeleton_warrior", Category::NeutralKill),
    ("npc_dota_neutral", Category::NeutralKill),
    ("npc_dota_roshan", Category::RoshanKill),
    ("npc_dota_badguys_tower", Category::TowerKill(Side::Badguy)),
    ("npc_dota_goodguys_tower", Category::TowerKill(Side::Goodguy)),
    ("npc_dota_badguys_melee_rax", Category::RaxKill(Side::Badguy)),
    ("npc_dota_badguys_range_rax", Category::RaxKill(Side::Badguy)),
    ("npc_dota_goodguys_melee_rax", Category::RaxKill(Side::Goodguy)),
    ("npc_dota_goodguys_range_rax", Category::RaxKill(Side::Goodguy)),
    ("npc_dota_badguys_fillers", Category::BuildingKill(Side::Badguy)),
    ("npc_dota_goodguys_fillers", Category::BuildingKill(Side::Goodguy)),
];

pub fn classify(entity_name: &str) -> Category {
    ENTITY_PREFIXES
        .iter()
        .find(|(prefix, _)| entity_name.starts_with(prefix))
        .map(|(_, category)| *category)
        .unwrap_or(Category::Unclassified)
}

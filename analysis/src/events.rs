//! The decoded events this crate consumes.
//!
//! Decoding the replay itself happens elsewhere, these types only describe
//! what such a decoder hands over, one event at a time and in stream order.

use std::collections::HashMap;

/// Name of the game event carrying combat log entries.
pub const COMBAT_LOG_EVENT: &str = "dota_combatlog";

/// Prefix shared by the entity names of all heroes.
pub const HERO_PREFIX: &str = "npc_dota_hero";

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DemoEvent {
    FileInfo(FileInfo),
    PlayerInfo(PlayerInfo),
    CombatLog(CombatLog),
    CombatLogNames(CombatLogNamesUpdate),
    TextMessage(TextMessage),
    Chat(ChatEvent),
    Overhead(OverheadEvent),
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FileInfo {
    pub playback_time: f32,
    pub match_id: u64,
    pub game_mode: i32,
    pub game_winner: i32,
    pub roster: Vec<RosterEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RosterEntry {
    pub hero_name: String,
    pub player_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PlayerInfo {
    pub name: String,
    #[serde(default)]
    pub is_hltv: bool,
    pub user_id: i32,
    pub guid: String,
    #[serde(default)]
    pub is_bot: bool,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CombatLog {
    pub name: String,
    pub keys: CombatLogKeys,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CombatLogKeys {
    #[serde(rename = "type")]
    pub type_code: i32,
    pub source_name: i32,
    pub target_name: i32,
    #[serde(default)]
    pub target_illusion: bool,
    pub timestamp: f32,
}

impl CombatLogKeys {
    pub fn log_type(&self) -> Option<CombatLogType> {
        COMBAT_LOG_TYPES.get(&self.type_code).copied()
    }
}

/// New entries for the combat log string table.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CombatLogNamesUpdate {
    pub entries: Vec<(i32, String)>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TextMessage {
    pub dest: i32,
    #[serde(default)]
    pub params: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ChatEvent {
    pub message_type: i32,
    #[serde(default)]
    pub value: i32,
    #[serde(default)]
    pub player_ids: Vec<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct OverheadEvent {
    pub message_type: i32,
    #[serde(default)]
    pub value: i32,
    #[serde(default)]
    pub target_player_entindex: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum CombatLogType {
    Damage,
    Heal,
    ModifierAdd,
    ModifierRemove,
    Death,
    Ability,
    Item,
    Location,
    Gold,
    GameState,
    Xp,
    Purchase,
    Buyback,
}

pub static COMBAT_LOG_TYPES: phf::Map<i32, CombatLogType> = phf::phf_map! {
    0_i32 => CombatLogType::Damage,
    1_i32 => CombatLogType::Heal,
    2_i32 => CombatLogType::ModifierAdd,
    3_i32 => CombatLogType::ModifierRemove,
    4_i32 => CombatLogType::Death,
    5_i32 => CombatLogType::Ability,
    6_i32 => CombatLogType::Item,
    7_i32 => CombatLogType::Location,
    8_i32 => CombatLogType::Gold,
    9_i32 => CombatLogType::GameState,
    10_i32 => CombatLogType::Xp,
    11_i32 => CombatLogType::Purchase,
    12_i32 => CombatLogType::Buyback,
};

/// The string table resolving combat log name indices.
///
/// The table can lag behind the combat log, so lookups may miss.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CombatLogNames {
    names: HashMap<i32, String>,
}

impl CombatLogNames {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, index: i32) -> Option<&str> {
        self.names.get(&index).map(String::as_str)
    }

    pub fn insert(&mut self, index: i32, name: impl Into<String>) {
        self.names.insert(index, name.into());
    }

    pub fn apply(&mut self, update: &CombatLogNamesUpdate) {
        for (index, name) in update.entries.iter() {
            self.names.insert(*index, name.clone());
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl FromIterator<(i32, String)> for CombatLogNames {
    fn from_iter<T: IntoIterator<Item = (i32, String)>>(iter: T) -> Self {
        Self {
            names: iter.into_iter().collect(),
        }
    }
}

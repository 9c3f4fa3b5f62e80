use std::collections::BTreeMap;

/// The match level output of a single pass over a replay.
///
/// Metadata stays `None` when the stream ended before the file info arrived.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MatchSummary {
    pub match_id: Option<u64>,
    pub playback_time: Option<f32>,
    pub game_mode: Option<i32>,
    pub game_winner: Option<i32>,
    pub players: BTreeMap<String, PlayerSnapshot>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_info: Option<BTreeMap<String, crate::PlayerConnection>>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PlayerSnapshot {
    pub hero: String,
    pub name: Option<String>,
    pub team: Option<u8>,
    pub index: Option<usize>,
    pub kills: usize,
    pub deaths: usize,
    /// Lane and siege kills on the enemy side plus neutral kills
    pub creep_kills: Option<usize>,
    pub creep_denies: Option<usize>,
    pub tower_kills: Option<usize>,
    pub tower_denies: Option<usize>,
    pub rax_kills: Option<usize>,
    pub rax_denies: Option<usize>,
    pub roshan_kills: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<PlayerDetail>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PlayerDetail {
    pub creep_kill_types: BTreeMap<String, usize>,
    pub creep_deny_types: BTreeMap<String, usize>,
    pub kill_list: Vec<TimedEntry>,
    pub death_list: Vec<TimedEntry>,
    pub building_kills: Option<usize>,
    pub building_denies: Option<usize>,
}

/// Another entity involved in a kill and the game time it happened at.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TimedEntry {
    pub entity: String,
    pub timestamp: f32,
}

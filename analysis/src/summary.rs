use std::collections::{BTreeMap, HashMap};

use common::demo_analysis::MatchSummary;
use common::PlayerConnection;

use crate::events::{
    ChatEvent, CombatLog, CombatLogNames, CombatLogType, DemoEvent, FileInfo, OverheadEvent,
    PlayerInfo, TextMessage, COMBAT_LOG_EVENT, HERO_PREFIX,
};
use crate::player::{PlayerAggregate, DETAIL_VERBOSITY};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterState {
    AwaitingRoster,
    RosterReady,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MatchInfo {
    pub match_id: u64,
    pub playback_time: f32,
    pub game_mode: i32,
    pub game_winner: i32,
}

/// What a combat log entry ended up as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatLogOutcome {
    HeroKill,
    CreepKill,
    /// Neither side of the entry is a hero we track kills for
    Ignored,
    /// One of the names is not in the string table yet
    Unresolved,
    /// Not a death entry
    Filtered,
}

/// Builds the per hero and per match statistics from the decoded events of
/// a single replay.
///
/// Events have to be fed in stream order. There is no explicit end, once the
/// stream is exhausted (or cut short) the collected state is the result.
#[derive(Debug)]
pub struct DemoSummary {
    state: RosterState,
    info: Option<MatchInfo>,
    roster: Vec<String>,
    heroes: HashMap<String, PlayerAggregate>,
    player_info: HashMap<String, PlayerConnection>,
}

impl Default for DemoSummary {
    fn default() -> Self {
        Self::new()
    }
}

impl DemoSummary {
    pub fn new() -> Self {
        Self {
            state: RosterState::AwaitingRoster,
            info: None,
            roster: Vec::new(),
            heroes: HashMap::new(),
            player_info: HashMap::new(),
        }
    }

    pub fn state(&self) -> RosterState {
        self.state
    }

    pub fn info(&self) -> Option<&MatchInfo> {
        self.info.as_ref()
    }

    /// Hero names of the roster, in slot order.
    pub fn roster(&self) -> &[String] {
        &self.roster
    }

    pub fn heroes(&self) -> &HashMap<String, PlayerAggregate> {
        &self.heroes
    }

    pub fn hero(&self, hero: &str) -> Option<&PlayerAggregate> {
        self.heroes.get(hero)
    }

    pub fn player_info(&self) -> &HashMap<String, PlayerConnection> {
        &self.player_info
    }

    /// Returns the aggregate for `hero`, creating an empty one if this is the
    /// first time the hero is referenced.
    pub fn get_or_create_hero(&mut self, hero: &str) -> &mut PlayerAggregate {
        match self.heroes.entry(hero.to_owned()) {
            std::collections::hash_map::Entry::Occupied(entry) => entry.into_mut(),
            std::collections::hash_map::Entry::Vacant(entry) => {
                tracing::trace!(%hero, "New hero");
                entry.insert(PlayerAggregate::new(hero))
            }
        }
    }

    /// Routes a single event. String table updates are not handled here, they
    /// belong to whoever owns `names`.
    pub fn handle(&mut self, event: &DemoEvent, names: &CombatLogNames) {
        match event {
            DemoEvent::FileInfo(info) => self.parse_file_info(info),
            DemoEvent::PlayerInfo(player) => self.parse_player_info(player),
            DemoEvent::CombatLog(entry) => {
                self.parse_combat_log(entry, names);
            }
            DemoEvent::TextMessage(message) => self.parse_text_message(message),
            DemoEvent::Chat(chat) => self.parse_chat_event(chat),
            DemoEvent::Overhead(overhead) => self.parse_overhead_event(overhead),
            DemoEvent::CombatLogNames(_) => {}
        };
    }

    /// Player infos arrive before the file info. Spectators and HLTV relays
    /// are skipped.
    pub fn parse_player_info(&mut self, player: &PlayerInfo) {
        if player.is_hltv {
            tracing::trace!(name = %player.name, "Skipping HLTV player");
            return;
        }

        self.player_info.insert(
            player.name.clone(),
            PlayerConnection {
                user_id: player.user_id,
                guid: player.guid.clone(),
                bot: player.is_bot,
            },
        );
    }

    pub fn parse_file_info(&mut self, file_info: &FileInfo) {
        if self.state == RosterState::RosterReady {
            tracing::debug!("Ignoring repeated file info");
            return;
        }

        self.info = Some(MatchInfo {
            match_id: file_info.match_id,
            playback_time: file_info.playback_time,
            game_mode: file_info.game_mode,
            game_winner: file_info.game_winner,
        });

        for (index, entry) in file_info.roster.iter().enumerate() {
            self.get_or_create_hero(&entry.hero_name)
                .assign_roster_slot(entry.player_name.clone(), index);
            self.roster.push(entry.hero_name.clone());
        }

        tracing::debug!(
            match_id = file_info.match_id,
            players = file_info.roster.len(),
            "Roster ready"
        );
        self.state = RosterState::RosterReady;
    }

    pub fn parse_combat_log(&mut self, entry: &CombatLog, names: &CombatLogNames) -> CombatLogOutcome {
        if entry.name != COMBAT_LOG_EVENT || entry.keys.log_type() != Some(CombatLogType::Death) {
            return CombatLogOutcome::Filtered;
        }

        let keys = &entry.keys;
        let (source, target) = match names.get(keys.source_name).zip(names.get(keys.target_name)) {
            Some(n) => n,
            None => {
                tracing::debug!(
                    source = keys.source_name,
                    target = keys.target_name,
                    "Dropping combat log entry with unknown names"
                );
                return CombatLogOutcome::Unresolved;
            }
        };

        if target.starts_with(HERO_PREFIX) && !keys.target_illusion {
            tracing::trace!(%source, %target, timestamp = keys.timestamp, "Hero died");

            self.get_or_create_hero(target)
                .record_death(source, keys.timestamp);
            self.get_or_create_hero(source)
                .record_kill(target, keys.timestamp);

            CombatLogOutcome::HeroKill
        } else if source.starts_with(HERO_PREFIX) {
            self.get_or_create_hero(source)
                .record_creep_kill(target, keys.timestamp);

            CombatLogOutcome::CreepKill
        } else {
            CombatLogOutcome::Ignored
        }
    }

    pub fn parse_text_message(&mut self, _message: &TextMessage) {}

    pub fn parse_chat_event(&mut self, _chat: &ChatEvent) {}

    pub fn parse_overhead_event(&mut self, _overhead: &OverheadEvent) {}

    /// The nested match summary, players keyed by their display name.
    pub fn summary(&self, verbosity: u8) -> MatchSummary {
        let players = self
            .roster
            .iter()
            .filter_map(|hero| self.heroes.get(hero))
            .filter_map(|player| {
                let name = player.name()?;
                Some((name.to_owned(), player.snapshot(verbosity)))
            })
            .collect();

        let player_info = (verbosity > DETAIL_VERBOSITY).then(|| {
            self.player_info
                .iter()
                .map(|(name, info)| (name.clone(), info.clone()))
                .collect::<BTreeMap<_, _>>()
        });

        MatchSummary {
            match_id: self.info.as_ref().map(|i| i.match_id),
            playback_time: self.info.as_ref().map(|i| i.playback_time),
            game_mode: self.info.as_ref().map(|i| i.game_mode),
            game_winner: self.info.as_ref().map(|i| i.game_winner),
            players,
            player_info,
        }
    }
}

use std::collections::{BTreeMap, HashMap};

use common::demo_analysis::{PlayerDetail, PlayerSnapshot, TimedEntry};

use crate::classify::{self, Category};
use crate::side::{self, AttributeFamily, CounterKey, SideCounters, Team};

/// Snapshots above this verbosity include the full histograms and kill lists.
pub const DETAIL_VERBOSITY: u8 = 3;

/// Everything collected about a single hero during the pass over a replay.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerAggregate {
    hero: String,
    name: Option<String>,
    team: Option<Team>,
    index: Option<usize>,
    kills: Vec<TimedEntry>,
    deaths: Vec<TimedEntry>,
    creep_kill_types: HashMap<String, usize>,
    neutral_kills: usize,
    roshan_kills: usize,
    counters: SideCounters,
}

impl PlayerAggregate {
    pub fn new(hero: impl Into<String>) -> Self {
        Self {
            hero: hero.into(),
            name: None,
            team: None,
            index: None,
            kills: Vec::new(),
            deaths: Vec::new(),
            creep_kill_types: HashMap::new(),
            neutral_kills: 0,
            roshan_kills: 0,
            counters: SideCounters::default(),
        }
    }

    pub fn hero(&self) -> &str {
        &self.hero
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn team(&self) -> Option<Team> {
        self.team
    }

    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Attaches the roster information, the team follows from the slot.
    pub fn assign_roster_slot(&mut self, name: impl Into<String>, index: usize) {
        self.name = Some(name.into());
        self.index = Some(index);
        self.team = Some(Team::from_roster_index(index));
    }

    pub fn kills(&self) -> &[TimedEntry] {
        &self.kills
    }

    pub fn deaths(&self) -> &[TimedEntry] {
        &self.deaths
    }

    pub fn creep_kill_types(&self) -> &HashMap<String, usize> {
        &self.creep_kill_types
    }

    pub fn neutral_kills(&self) -> usize {
        self.neutral_kills
    }

    pub fn roshan_kills(&self) -> usize {
        self.roshan_kills
    }

    pub fn counter(&self, key: CounterKey) -> usize {
        self.counters.get(key)
    }

    pub fn record_kill(&mut self, victim: impl Into<String>, timestamp: f32) {
        self.kills.push(TimedEntry {
            entity: victim.into(),
            timestamp,
        });
    }

    pub fn record_death(&mut self, killer: impl Into<String>, timestamp: f32) {
        self.deaths.push(TimedEntry {
            entity: killer.into(),
            timestamp,
        });
    }

    /// Counts a non-hero kill and returns how the target was classified.
    pub fn record_creep_kill(&mut self, target: &str, timestamp: f32) -> Category {
        *self.creep_kill_types.entry(target.to_owned()).or_default() += 1;

        let category = classify::classify(target);
        match category {
            Category::NeutralKill => self.neutral_kills += 1,
            Category::RoshanKill => self.roshan_kills += 1,
            Category::Unclassified => {
                tracing::warn!(hero = %self.hero, creep = %target, timestamp, "unhandled creep type");
            }
            other => {
                if let Some(key) = CounterKey::from_category(other) {
                    self.counters.increment(key);
                }
            }
        }

        tracing::trace!(hero = %self.hero, creep = %target, ?category, "creep kill");

        category
    }

    /// A team relative statistic, `None` until the team is known.
    pub fn side_stat(&self, family: AttributeFamily, invert: bool) -> Option<usize> {
        let team = self.team?;
        Some(self.counters.get(side::resolve(family, invert, team)))
    }

    pub fn creep_kills(&self) -> Option<usize> {
        self.side_stat(AttributeFamily::Kills, false)
    }

    pub fn creep_denies(&self) -> Option<usize> {
        self.side_stat(AttributeFamily::Kills, true)
    }

    pub fn tower_kills(&self) -> Option<usize> {
        self.side_stat(AttributeFamily::TowerKills, false)
    }

    pub fn tower_denies(&self) -> Option<usize> {
        self.side_stat(AttributeFamily::TowerKills, true)
    }

    pub fn rax_kills(&self) -> Option<usize> {
        self.side_stat(AttributeFamily::RaxKills, false)
    }

    pub fn rax_denies(&self) -> Option<usize> {
        self.side_stat(AttributeFamily::RaxKills, true)
    }

    pub fn building_kills(&self) -> Option<usize> {
        self.side_stat(AttributeFamily::BuildingKills, false)
    }

    pub fn building_denies(&self) -> Option<usize> {
        self.side_stat(AttributeFamily::BuildingKills, true)
    }

    /// The creep kill histogram restricted to lane units of the player's own side.
    pub fn creep_deny_types(&self) -> BTreeMap<String, usize> {
        let deny_side = match self.team {
            Some(team) => side::resolve(AttributeFamily::Kills, true, team).side,
            None => return BTreeMap::new(),
        };

        self.creep_kill_types
            .iter()
            .filter(|(target, _)| {
                classify::classify(target) == Category::PlayerSideKill(deny_side)
            })
            .map(|(target, count)| (target.clone(), *count))
            .collect()
    }

    pub fn snapshot(&self, verbosity: u8) -> PlayerSnapshot {
        let detail = (verbosity > DETAIL_VERBOSITY).then(|| PlayerDetail {
            creep_kill_types: self
                .creep_kill_types
                .iter()
                .map(|(target, count)| (target.clone(), *count))
                .collect(),
            creep_deny_types: self.creep_deny_types(),
            kill_list: self.kills.clone(),
            death_list: self.deaths.clone(),
            building_kills: self.building_kills(),
            building_denies: self.building_denies(),
        });

        PlayerSnapshot {
            hero: self.hero.clone(),
            name: self.name.clone(),
            team: self.team.map(Team::number),
            index: self.index,
            kills: self.kills.len(),
            deaths: self.deaths.len(),
            creep_kills: self.creep_kills().map(|k| k + self.neutral_kills),
            creep_denies: self.creep_denies(),
            tower_kills: self.tower_kills(),
            tower_denies: self.tower_denies(),
            rax_kills: self.rax_kills(),
            rax_denies: self.rax_denies(),
            roshan_kills: self.roshan_kills,
            detail,
        }
    }
}

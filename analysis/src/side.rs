//! Team relative views over the per side counters.
//!
//! The counters are stored from the perspective of the entity that died, a
//! `Badguy` tower kill is a tower of the badguys that went down. What counts as
//! a kill or a deny for a player therefore depends on the team they are on.

use crate::classify::{Category, Side};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Team {
    /// Team 0, plays for the goodguys
    Radiant,
    /// Team 1, plays for the badguys
    Dire,
}

impl Team {
    /// The team for a roster slot, the first five slots belong to team 0.
    pub fn from_roster_index(index: usize) -> Self {
        if index < 5 {
            Self::Radiant
        } else {
            Self::Dire
        }
    }

    pub fn number(self) -> u8 {
        match self {
            Self::Radiant => 0,
            Self::Dire => 1,
        }
    }

    pub fn other(self) -> Self {
        match self {
            Self::Radiant => Self::Dire,
            Self::Dire => Self::Radiant,
        }
    }

    /// The side whose units count as kills for this team.
    pub fn enemy_side(self) -> Side {
        match self {
            Self::Radiant => Side::Badguy,
            Self::Dire => Side::Goodguy,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeFamily {
    Kills,
    TowerKills,
    RaxKills,
    BuildingKills,
}

impl AttributeFamily {
    pub const ALL: [AttributeFamily; 4] = [
        AttributeFamily::Kills,
        AttributeFamily::TowerKills,
        AttributeFamily::RaxKills,
        AttributeFamily::BuildingKills,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CounterKey {
    pub family: AttributeFamily,
    pub side: Side,
}

impl CounterKey {
    /// The counter a classified entity is recorded under, if it has a side.
    pub fn from_category(category: Category) -> Option<CounterKey> {
        let (family, side) = match category {
            Category::PlayerSideKill(side) => (AttributeFamily::Kills, side),
            Category::TowerKill(side) => (AttributeFamily::TowerKills, side),
            Category::RaxKill(side) => (AttributeFamily::RaxKills, side),
            Category::BuildingKill(side) => (AttributeFamily::BuildingKills, side),
            Category::NeutralKill | Category::RoshanKill | Category::Unclassified => {
                return None
            }
        };

        Some(Self { family, side })
    }

    fn slot(self) -> usize {
        let family = match self.family {
            AttributeFamily::Kills => 0,
            AttributeFamily::TowerKills => 1,
            AttributeFamily::RaxKills => 2,
            AttributeFamily::BuildingKills => 3,
        };
        let side = match self.side {
            Side::Goodguy => 0,
            Side::Badguy => 1,
        };

        family * 2 + side
    }
}

/// Resolves a team relative statistic to the counter holding it.
///
/// Without `invert` this is the team's own achievement (killing the enemy
/// side), with `invert` it is the deny, the same family on the team's own side.
pub fn resolve(family: AttributeFamily, invert: bool, team: Team) -> CounterKey {
    let side = team.enemy_side();
    let side = if invert { side.other() } else { side };

    CounterKey { family, side }
}

/// One counter per attribute family and side.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SideCounters {
    values: [usize; 8],
}

impl SideCounters {
    pub fn get(&self, key: CounterKey) -> usize {
        self.values[key.slot()]
    }

    pub fn increment(&mut self, key: CounterKey) {
        self.values[key.slot()] += 1;
    }
}

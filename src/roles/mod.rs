//! Hidden roles and their distribution by player count.

use serde::{Deserialize, Serialize};

use crate::core::GameRng;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Sheriff,
    Deputy,
    Outlaw,
    Renegade,
}

/// Which side a role plays for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Team {
    Law,
    Outlaw,
    Renegade,
}

impl Role {
    #[must_use]
    pub const fn team(self) -> Team {
        match self {
            Role::Sheriff | Role::Deputy => Team::Law,
            Role::Outlaw => Team::Outlaw,
            Role::Renegade => Team::Renegade,
        }
    }

    #[must_use]
    pub const fn goal(self) -> &'static str {
        match self {
            Role::Sheriff => "Eliminate all Outlaws and the Renegade",
            Role::Deputy => "Protect the Sheriff and eliminate Outlaws",
            Role::Outlaw => "Eliminate the Sheriff",
            Role::Renegade => "Be the last player alive",
        }
    }

    /// The Sheriff is public from the start.
    #[must_use]
    pub const fn is_public(self) -> bool {
        matches!(self, Role::Sheriff)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Role::Sheriff => "sheriff",
            Role::Deputy => "deputy",
            Role::Outlaw => "outlaw",
            Role::Renegade => "renegade",
        };
        f.write_str(name)
    }
}

/// Smallest supported table.
pub const MIN_PLAYERS: usize = 4;
/// Largest supported table.
pub const MAX_PLAYERS: usize = 7;

/// Role table for a player count, Sheriff first. `None` outside 4-7.
#[must_use]
pub fn distribution(player_count: usize) -> Option<&'static [Role]> {
    use Role::*;
    const FOUR: [Role; 4] = [Sheriff, Renegade, Outlaw, Outlaw];
    const FIVE: [Role; 5] = [Sheriff, Renegade, Outlaw, Outlaw, Deputy];
    const SIX: [Role; 6] = [Sheriff, Renegade, Outlaw, Outlaw, Outlaw, Deputy];
    const SEVEN: [Role; 7] = [Sheriff, Renegade, Outlaw, Outlaw, Outlaw, Deputy, Deputy];

    match player_count {
        4 => Some(&FOUR),
        5 => Some(&FIVE),
        6 => Some(&SIX),
        7 => Some(&SEVEN),
        _ => None,
    }
}

/// Deal roles for a table. The Sheriff always sits at seat 0; the other
/// roles are shuffled over the remaining seats.
pub fn assign(rng: &mut GameRng, player_count: usize) -> Option<Vec<Role>> {
    let table = distribution(player_count)?;
    let mut others = table[1..].to_vec();
    rng.shuffle(&mut others);

    let mut roles = Vec::with_capacity(player_count);
    roles.push(Role::Sheriff);
    roles.extend(others);
    Some(roles)
}

//! Rule checks and the engine facade.
//!
//! ## Key Types
//!
//! - [`RulesEngine`]: Legal moves, move application and victory for a driver
//! - [`BangRules`]: The standard implementation
//! - [`VictoryResult`]: Winning side and survivors
//!
//! Distance, validation and playability are pure reads over `GameState`.

pub mod distance;
pub mod engine;
pub mod playability;
pub mod validation;
pub mod victory;

pub use distance::{attack_range, distance, is_in_range, players_in_range, UNREACHABLE};
pub use engine::{BangRules, RulesEngine};
pub use playability::{is_card_playable, valid_targets};
pub use validation::{can_equip, can_play_bang, can_play_card, has_card, is_valid_target};
pub use victory::{check_victory, VictoryResult, Winner};

//! Character ability triggers and emitted game events.
//!
//! ## Key Components
//!
//! - [`AbilityTrigger`]: Event points (draw phase, damage, death, empty hand)
//! - [`hooks`]: Per-character hook table, built by exhaustive match
//! - [`trigger`]: Runs one player's hook for an event point
//! - [`GameEvent`]: What an accepted move caused, returned to the caller
//!
//! ## Example Usage
//!
//! ```
//! use bang_rules::characters::Character;
//! use bang_rules::core::{MatchConfig, PlayerId};
//! use bang_rules::triggers::{trigger, AbilityTrigger, DrawHint};
//!
//! let mut state = MatchConfig::new().seed(1).build().unwrap();
//! let seat = PlayerId::new(1);
//! state.players[seat].character = Character::PedroRamirez;
//!
//! let hint = trigger(&mut state, seat, AbilityTrigger::OnDrawPhase).unwrap();
//! assert_eq!(hint, Some(DrawHint::CanDrawFromDiscard));
//! ```

mod dispatcher;
mod event;

pub use dispatcher::{
    fire_death, fire_hand_empty, hooks, trigger, AbilityHooks, AbilityTrigger, DrawHint, Hook,
};
pub use event::{CheckKind, GameEvent};

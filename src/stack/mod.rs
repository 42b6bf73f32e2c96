//! Pending actions and the reactive stage they impose.
//!
//! A card such as Bang! or Duel does not resolve in one move: it opens a
//! [`PendingAction`] and hands control to its current target. Only that
//! target may move until the action fully clears, at which point control
//! returns to the player whose turn it is.
//!
//! ## Key Types
//!
//! - [`PendingAction`]: The live effect, its source and its target queue
//! - [`PendingKind`]: Which card opened it
//! - [`ResponseStage`]: The stage the current target is placed in

mod pending;

pub use pending::{PendingAction, PendingKind, ResponseStage, TargetQueue};

use crate::core::GameState;

/// Move the pending action to its next living target, or clear it when the
/// queue is exhausted. Returns `true` if an action is still pending.
///
/// Cards left in a General Store pool when it clears go to the discard pile.
pub fn advance_or_clear(state: &mut GameState) -> bool {
    loop {
        let Some(pending) = state.pending_action.as_mut() else {
            return false;
        };
        if !pending.advance() {
            let leftovers = std::mem::take(&mut pending.revealed_cards);
            state.pending_action = None;
            state.discard_pile.extend(leftovers);
            return false;
        }
        let target = pending.target;
        if state.is_alive(target) {
            return true;
        }
    }
}

//! The pending action: an effect waiting for one or more responses.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::CardId;
use crate::core::PlayerId;

/// Which card opened the pending action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PendingKind {
    Bang,
    Duel,
    Indians,
    Gatling,
    GeneralStore,
}

/// Reactive stage handed to the pending action's current target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResponseStage {
    RespondToBang,
    RespondToDuel,
    RespondToIndians,
    RespondToGeneralStore,
}

impl PendingKind {
    #[must_use]
    pub const fn response_stage(self) -> ResponseStage {
        match self {
            PendingKind::Bang | PendingKind::Gatling => ResponseStage::RespondToBang,
            PendingKind::Duel => ResponseStage::RespondToDuel,
            PendingKind::Indians => ResponseStage::RespondToIndians,
            PendingKind::GeneralStore => ResponseStage::RespondToGeneralStore,
        }
    }
}

/// Target queue; at most six other players at a seven-seat table.
pub type TargetQueue = SmallVec<[PlayerId; 6]>;

/// Live pending action. At most one exists per match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingAction {
    pub kind: PendingKind,
    pub source: PlayerId,
    /// The player who must respond next.
    pub target: PlayerId,
    /// The card that opened the action (already discarded).
    pub card: CardId,
    /// Players still to respond after `target`, in order.
    pub remaining_targets: TargetQueue,
    /// Missed! still needed from `target` (Bang, Gatling).
    pub requires_missed: u8,
    /// Shared pool of a General Store.
    pub revealed_cards: SmallVec<[CardId; 7]>,
    /// Bang! exchanged so far in a Duel.
    pub bang_count: u32,
    /// Whether `target` already tried a draw! with a Barrel.
    pub barrel_used: bool,
}

impl PendingAction {
    fn base(kind: PendingKind, source: PlayerId, target: PlayerId, card: CardId) -> Self {
        Self {
            kind,
            source,
            target,
            card,
            remaining_targets: TargetQueue::new(),
            requires_missed: 0,
            revealed_cards: SmallVec::new(),
            bang_count: 0,
            barrel_used: false,
        }
    }

    #[must_use]
    pub fn bang(source: PlayerId, target: PlayerId, card: CardId, requires_missed: u8) -> Self {
        Self {
            requires_missed,
            ..Self::base(PendingKind::Bang, source, target, card)
        }
    }

    #[must_use]
    pub fn duel(source: PlayerId, target: PlayerId, card: CardId) -> Self {
        Self::base(PendingKind::Duel, source, target, card)
    }

    /// Gatling or Indians over a non-empty target queue.
    ///
    /// Returns `None` when there is nobody to hit.
    #[must_use]
    pub fn multi(
        kind: PendingKind,
        source: PlayerId,
        card: CardId,
        targets: &[PlayerId],
    ) -> Option<Self> {
        let (&first, rest) = targets.split_first()?;
        let requires_missed = u8::from(kind == PendingKind::Gatling);
        Some(Self {
            requires_missed,
            remaining_targets: rest.iter().copied().collect(),
            ..Self::base(kind, source, first, card)
        })
    }

    /// General Store: `pickers` choose in order from `revealed`.
    #[must_use]
    pub fn general_store(
        source: PlayerId,
        card: CardId,
        pickers: &[PlayerId],
        revealed: Vec<CardId>,
    ) -> Option<Self> {
        let (&first, rest) = pickers.split_first()?;
        Some(Self {
            remaining_targets: rest.iter().copied().collect(),
            revealed_cards: revealed.into_iter().collect(),
            ..Self::base(PendingKind::GeneralStore, source, first, card)
        })
    }

    #[must_use]
    pub fn response_stage(&self) -> ResponseStage {
        self.kind.response_stage()
    }

    /// Hand the action to the next queued target.
    ///
    /// Returns `false` once the queue is exhausted.
    pub fn advance(&mut self) -> bool {
        if self.remaining_targets.is_empty() {
            return false;
        }
        self.target = self.remaining_targets.remove(0);
        self.requires_missed = u8::from(self.kind == PendingKind::Gatling);
        self.barrel_used = false;
        true
    }

    /// Duel only: the responder answered with a Bang!, so the roles flip.
    /// `source` is always the last player to shoot.
    pub fn swap_duelists(&mut self) {
        std::mem::swap(&mut self.source, &mut self.target);
        self.bang_count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(i: u8) -> PlayerId {
        PlayerId::new(i)
    }

    #[test]
    fn test_gatling_queue_advances() {
        let mut pending =
            PendingAction::multi(PendingKind::Gatling, p(0), CardId::new(1), &[p(1), p(2), p(3)])
                .unwrap();
        assert_eq!(pending.target, p(1));
        assert_eq!(pending.requires_missed, 1);

        pending.requires_missed = 0;
        pending.barrel_used = true;
        assert!(pending.advance());
        assert_eq!(pending.target, p(2));
        assert_eq!(pending.requires_missed, 1);
        assert!(!pending.barrel_used);

        assert!(pending.advance());
        assert!(!pending.advance());
        assert_eq!(pending.target, p(3));
    }

    #[test]
    fn test_indians_needs_no_missed() {
        let pending =
            PendingAction::multi(PendingKind::Indians, p(0), CardId::new(1), &[p(1)]).unwrap();
        assert_eq!(pending.requires_missed, 0);
        assert_eq!(pending.response_stage(), ResponseStage::RespondToIndians);
        assert!(PendingAction::multi(PendingKind::Indians, p(0), CardId::new(1), &[]).is_none());
    }

    #[test]
    fn test_duel_swaps_roles() {
        let mut duel = PendingAction::duel(p(0), p(2), CardId::new(5));
        duel.swap_duelists();
        assert_eq!((duel.source, duel.target), (p(2), p(0)));
        duel.swap_duelists();
        assert_eq!((duel.source, duel.target), (p(0), p(2)));
        assert_eq!(duel.bang_count, 2);
    }
}

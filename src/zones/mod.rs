//! Card locations outside the players: the deck and the discard pile.
//!
//! Both piles are `im::Vector`s with the top card at the back. Hands and
//! equipment live on `PlayerState`.

pub mod draw_pile;

pub use draw_pile::{
    discard, discard_from_hand, draw_card, draw_cards, draw_check, dynamite_spared,
    is_dynamite_explosion, is_hearts, peek, reshuffle,
};

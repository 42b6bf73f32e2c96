//! The 80-card deck of the base game.
//!
//! Card ids are assigned in composition order, starting at 1.

use super::definition::{Card, CardId, CardType, Rank, Suit};

/// Number of physical cards in a match. Conserved for the whole match.
pub const DECK_SIZE: usize = 80;

use CardType::*;
use Rank::*;
use Suit::*;

const COMPOSITION: [(CardType, Suit, Rank); DECK_SIZE] = [
    // Bang! x25
    (Bang, Spades, Ace),
    (Bang, Clubs, Two),
    (Bang, Clubs, Three),
    (Bang, Clubs, Four),
    (Bang, Clubs, Five),
    (Bang, Clubs, Six),
    (Bang, Clubs, Seven),
    (Bang, Clubs, Eight),
    (Bang, Clubs, Nine),
    (Bang, Diamonds, Two),
    (Bang, Diamonds, Three),
    (Bang, Diamonds, Four),
    (Bang, Diamonds, Five),
    (Bang, Diamonds, Six),
    (Bang, Diamonds, Seven),
    (Bang, Diamonds, Eight),
    (Bang, Diamonds, Nine),
    (Bang, Diamonds, Ten),
    (Bang, Diamonds, Jack),
    (Bang, Diamonds, Queen),
    (Bang, Diamonds, King),
    (Bang, Diamonds, Ace),
    (Bang, Hearts, Queen),
    (Bang, Hearts, King),
    (Bang, Hearts, Ace),
    // Missed! x12
    (Missed, Spades, Ten),
    (Missed, Spades, Jack),
    (Missed, Spades, Queen),
    (Missed, Spades, King),
    (Missed, Clubs, Ten),
    (Missed, Clubs, Jack),
    (Missed, Clubs, Queen),
    (Missed, Clubs, King),
    (Missed, Clubs, Ace),
    (Missed, Hearts, Ten),
    (Missed, Hearts, Jack),
    (Missed, Hearts, Eight),
    // Beer x6
    (Beer, Hearts, Six),
    (Beer, Hearts, Seven),
    (Beer, Hearts, Eight),
    (Beer, Hearts, Nine),
    (Beer, Hearts, Ten),
    (Beer, Hearts, Jack),
    (Saloon, Hearts, Five),
    (Stagecoach, Spades, Nine),
    (Stagecoach, Spades, Nine),
    (WellsFargo, Hearts, Three),
    (Panic, Hearts, Jack),
    (Panic, Hearts, Queen),
    (Panic, Hearts, Ace),
    (Panic, Diamonds, Ace),
    (CatBalou, Diamonds, King),
    (CatBalou, Hearts, King),
    (CatBalou, Diamonds, Jack),
    (CatBalou, Hearts, Jack),
    (Duel, Spades, Eight),
    (Duel, Clubs, Eight),
    (Duel, Diamonds, Queen),
    (Indians, Diamonds, King),
    (Indians, Diamonds, Ace),
    (Gatling, Hearts, Ten),
    (GeneralStore, Clubs, Nine),
    (GeneralStore, Spades, Queen),
    // Blue cards
    (Volcanic, Spades, Ten),
    (Volcanic, Clubs, Ten),
    (Schofield, Spades, Jack),
    (Schofield, Spades, Queen),
    (Schofield, Clubs, King),
    (Remington, Clubs, King),
    (RevCarabine, Clubs, Ace),
    (Winchester, Spades, Eight),
    (Barrel, Spades, Queen),
    (Barrel, Spades, King),
    (Dynamite, Hearts, Two),
    (Jail, Spades, Jack),
    (Jail, Spades, Ten),
    (Jail, Hearts, Four),
    (Mustang, Hearts, Eight),
    (Mustang, Hearts, Nine),
    (Scope, Spades, Ace),
];

/// Build every card of the deck, in id order.
#[must_use]
pub fn create_deck() -> Vec<Card> {
    COMPOSITION
        .iter()
        .enumerate()
        .map(|(index, &(card_type, suit, rank))| {
            Card::new(CardId::new(index as u16 + 1), card_type, suit, rank)
        })
        .collect()
}

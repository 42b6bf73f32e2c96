//! Card definitions - static card data.
//!
//! A `Card` is an immutable catalogue entry. Everything that moves around a
//! match (deck, discard pile, hands, inPlay) holds `CardId`s; the registry is
//! the single owner of `Card` values.

use serde::{Deserialize, Serialize};

/// Identifier of one physical card of the 80-card deck (1-based).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u16);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "card-{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    /// Hearts and diamonds are red.
    #[must_use]
    pub const fn is_red(self) -> bool {
        matches!(self, Suit::Hearts | Suit::Diamonds)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Two = 2,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    /// Numeric value, 2 through 14 (Ace high).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }
}

/// Brown cards are used once and discarded; blue cards stay in play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Instant,
    Equipment,
}

/// Closed set of card kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CardType {
    Bang,
    Missed,
    Beer,
    Saloon,
    Stagecoach,
    WellsFargo,
    Panic,
    CatBalou,
    Duel,
    Indians,
    Gatling,
    GeneralStore,
    Volcanic,
    Schofield,
    Remington,
    RevCarabine,
    Winchester,
    Barrel,
    Dynamite,
    Jail,
    Mustang,
    Scope,
}

impl CardType {
    /// Every card type, in catalogue order.
    pub const ALL: [CardType; 22] = [
        CardType::Bang,
        CardType::Missed,
        CardType::Beer,
        CardType::Saloon,
        CardType::Stagecoach,
        CardType::WellsFargo,
        CardType::Panic,
        CardType::CatBalou,
        CardType::Duel,
        CardType::Indians,
        CardType::Gatling,
        CardType::GeneralStore,
        CardType::Volcanic,
        CardType::Schofield,
        CardType::Remington,
        CardType::RevCarabine,
        CardType::Winchester,
        CardType::Barrel,
        CardType::Dynamite,
        CardType::Jail,
        CardType::Mustang,
        CardType::Scope,
    ];

    /// Display name printed on the card.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            CardType::Bang => "Bang!",
            CardType::Missed => "Missed!",
            CardType::Beer => "Beer",
            CardType::Saloon => "Saloon",
            CardType::Stagecoach => "Stagecoach",
            CardType::WellsFargo => "Wells Fargo",
            CardType::Panic => "Panic!",
            CardType::CatBalou => "Cat Balou",
            CardType::Duel => "Duel",
            CardType::Indians => "Indians!",
            CardType::Gatling => "Gatling",
            CardType::GeneralStore => "General Store",
            CardType::Volcanic => "Volcanic",
            CardType::Schofield => "Schofield",
            CardType::Remington => "Remington",
            CardType::RevCarabine => "Rev. Carabine",
            CardType::Winchester => "Winchester",
            CardType::Barrel => "Barrel",
            CardType::Dynamite => "Dynamite",
            CardType::Jail => "Jail",
            CardType::Mustang => "Mustang",
            CardType::Scope => "Scope",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            CardType::Bang => "Deal 1 damage to a player in range",
            CardType::Missed => "Cancel a BANG! targeting you",
            CardType::Beer => "Regain 1 health point",
            CardType::Saloon => "All players regain 1 health point",
            CardType::Stagecoach => "Draw 2 cards from the deck",
            CardType::WellsFargo => "Draw 3 cards from the deck",
            CardType::Panic => "Draw a card from a player at range 1",
            CardType::CatBalou => "Discard a card from any player",
            CardType::Duel => "Challenge a player to a BANG! battle",
            CardType::Indians => "All other players must discard BANG! or lose 1 health",
            CardType::Gatling => "BANG! all other players",
            CardType::GeneralStore => "Reveal cards equal to players, each picks one",
            CardType::Volcanic => "Range 1. Unlimited BANGs per turn",
            CardType::Schofield => "Range 2 weapon",
            CardType::Remington => "Range 3 weapon",
            CardType::RevCarabine => "Range 4 weapon",
            CardType::Winchester => "Range 5 weapon",
            CardType::Barrel => "When targeted by BANG!, draw! If hearts, you miss",
            CardType::Dynamite => "At turn start, draw! If spades 2-9, lose 3 health",
            CardType::Jail => "At turn start, draw! If not hearts, skip turn",
            CardType::Mustang => "Others see you at distance +1",
            CardType::Scope => "You see others at distance -1",
        }
    }

    #[must_use]
    pub const fn category(self) -> Category {
        if self.is_equipment() {
            Category::Equipment
        } else {
            Category::Instant
        }
    }

    /// Weapon range, `None` for non-weapons.
    #[must_use]
    pub const fn range(self) -> Option<u32> {
        match self {
            CardType::Volcanic => Some(1),
            CardType::Schofield => Some(2),
            CardType::Remington => Some(3),
            CardType::RevCarabine => Some(4),
            CardType::Winchester => Some(5),
            _ => None,
        }
    }

    /// Health restored, `None` for cards that do not heal.
    #[must_use]
    pub const fn healing(self) -> Option<u8> {
        match self {
            CardType::Beer | CardType::Saloon => Some(1),
            _ => None,
        }
    }

    /// Whether playing the card needs a target player.
    #[must_use]
    pub const fn requires_target(self) -> bool {
        matches!(
            self,
            CardType::Bang | CardType::Panic | CardType::CatBalou | CardType::Duel | CardType::Jail
        )
    }

    #[must_use]
    pub const fn is_weapon(self) -> bool {
        self.range().is_some()
    }

    #[must_use]
    pub const fn is_equipment(self) -> bool {
        matches!(
            self,
            CardType::Volcanic
                | CardType::Schofield
                | CardType::Remington
                | CardType::RevCarabine
                | CardType::Winchester
                | CardType::Barrel
                | CardType::Dynamite
                | CardType::Jail
                | CardType::Mustang
                | CardType::Scope
        )
    }
}

/// Immutable catalogue entry for one physical card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub card_type: CardType,
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    #[must_use]
    pub const fn new(id: CardId, card_type: CardType, suit: Suit, rank: Rank) -> Self {
        Self {
            id,
            card_type,
            suit,
            rank,
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.card_type.name()
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.card_type.category()
    }

    #[must_use]
    pub fn range(&self) -> Option<u32> {
        self.card_type.range()
    }

    #[must_use]
    pub fn healing(&self) -> Option<u8> {
        self.card_type.healing()
    }

    #[must_use]
    pub fn requires_target(&self) -> bool {
        self.card_type.requires_target()
    }

    #[must_use]
    pub fn is_weapon(&self) -> bool {
        self.card_type.is_weapon()
    }

    #[must_use]
    pub fn is_equipment(&self) -> bool {
        self.card_type.is_equipment()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_id_display() {
        assert_eq!(format!("{}", CardId::new(42)), "card-42");
        assert_eq!(CardId::new(42).raw(), 42);
    }

    #[test]
    fn test_weapon_metadata() {
        assert_eq!(CardType::Volcanic.range(), Some(1));
        assert_eq!(CardType::Winchester.range(), Some(5));
        assert!(CardType::Schofield.is_weapon());
        assert!(CardType::Schofield.is_equipment());
        assert!(!CardType::Barrel.is_weapon());
        assert!(CardType::Barrel.is_equipment());
        assert_eq!(CardType::Bang.category(), Category::Instant);
        assert_eq!(CardType::Jail.category(), Category::Equipment);
    }

    #[test]
    fn test_targeting_metadata() {
        assert!(CardType::Bang.requires_target());
        assert!(CardType::Jail.requires_target());
        assert!(!CardType::Gatling.requires_target());
        assert!(!CardType::Missed.requires_target());
    }

    #[test]
    fn test_rank_and_suit() {
        assert_eq!(Rank::Two.value(), 2);
        assert_eq!(Rank::Ace.value(), 14);
        assert!(Rank::Seven < Rank::Ten);
        assert!(Suit::Diamonds.is_red());
        assert!(!Suit::Spades.is_red());
    }

    #[test]
    fn test_card_type_serialization() {
        let json = serde_json::to_string(&CardType::GeneralStore).unwrap();
        assert_eq!(json, "\"GENERAL_STORE\"");
    }
}

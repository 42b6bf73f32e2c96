//! The 16 playable characters.

use serde::{Deserialize, Serialize};

/// Closed set of characters. Dispatch on abilities is an exhaustive match
/// over this enum.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Character {
    BartCassidy,
    BlackJack,
    CalamityJanet,
    ElGringo,
    JesseJones,
    Jourdonnais,
    KitCarlson,
    LuckyDuke,
    PaulRegret,
    PedroRamirez,
    RoseDoolan,
    SidKetchum,
    SlabTheKiller,
    SuzyLafayette,
    VultureSam,
    WillyTheKid,
}

/// When a character's ability applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Timing {
    Passive,
    OnDraw,
    OnDamage,
    OnTurn,
    Reactive,
    OnDeath,
}

/// Ability tag carried by each character definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Ability {
    DrawOnDamage,
    SecondCardReveal,
    BangMissedSwap,
    DrawFromAttacker,
    DrawFromPlayer,
    VirtualBarrel,
    LookTopThree,
    DoubleDrawFlip,
    DistancePlusOne,
    DrawFromDiscard,
    DistanceMinusOne,
    DiscardForHealth,
    DoubleMissedRequired,
    DrawWhenEmpty,
    TakeDeadCards,
    UnlimitedBangs,
}

/// Immutable character definition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CharacterDef {
    pub id: &'static str,
    pub name: &'static str,
    /// Base health, before the Sheriff bonus.
    pub health: u8,
    pub ability: Ability,
    pub timing: Timing,
    pub description: &'static str,
}

impl Character {
    /// Whole roster, in catalogue order.
    pub const ALL: [Character; 16] = [
        Character::BartCassidy,
        Character::BlackJack,
        Character::CalamityJanet,
        Character::ElGringo,
        Character::JesseJones,
        Character::Jourdonnais,
        Character::KitCarlson,
        Character::LuckyDuke,
        Character::PaulRegret,
        Character::PedroRamirez,
        Character::RoseDoolan,
        Character::SidKetchum,
        Character::SlabTheKiller,
        Character::SuzyLafayette,
        Character::VultureSam,
        Character::WillyTheKid,
    ];

    #[must_use]
    pub const fn def(self) -> CharacterDef {
        use Ability as A;
        use Timing as T;

        let (id, name, health, ability, timing, description) = match self {
            Character::BartCassidy => (
                "bart-cassidy",
                "Bart Cassidy",
                4,
                A::DrawOnDamage,
                T::OnDamage,
                "Each time he loses a life point, he draws a card",
            ),
            Character::BlackJack => (
                "black-jack",
                "Black Jack",
                4,
                A::SecondCardReveal,
                T::OnDraw,
                "He shows the second card he draws. If it's red, he draws a third card",
            ),
            Character::CalamityJanet => (
                "calamity-janet",
                "Calamity Janet",
                4,
                A::BangMissedSwap,
                T::Passive,
                "She can play BANG! as Missed! and vice versa",
            ),
            Character::ElGringo => (
                "el-gringo",
                "El Gringo",
                3,
                A::DrawFromAttacker,
                T::OnDamage,
                "When hit by a player, he draws a card from their hand",
            ),
            Character::JesseJones => (
                "jesse-jones",
                "Jesse Jones",
                4,
                A::DrawFromPlayer,
                T::OnDraw,
                "He may draw his first card from a player's hand",
            ),
            Character::Jourdonnais => (
                "jourdonnais",
                "Jourdonnais",
                4,
                A::VirtualBarrel,
                T::Reactive,
                "He is considered to have a Barrel in play at all times",
            ),
            Character::KitCarlson => (
                "kit-carlson",
                "Kit Carlson",
                4,
                A::LookTopThree,
                T::OnDraw,
                "He looks at the top 3 cards and draws 2 of them",
            ),
            Character::LuckyDuke => (
                "lucky-duke",
                "Lucky Duke",
                4,
                A::DoubleDrawFlip,
                T::Reactive,
                "For draw! effects, he flips 2 cards and chooses which applies",
            ),
            Character::PaulRegret => (
                "paul-regret",
                "Paul Regret",
                3,
                A::DistancePlusOne,
                T::Passive,
                "All other players see him at distance +1",
            ),
            Character::PedroRamirez => (
                "pedro-ramirez",
                "Pedro Ramirez",
                4,
                A::DrawFromDiscard,
                T::OnDraw,
                "He may draw his first card from the discard pile",
            ),
            Character::RoseDoolan => (
                "rose-doolan",
                "Rose Doolan",
                4,
                A::DistanceMinusOne,
                T::Passive,
                "She sees all other players at distance -1",
            ),
            Character::SidKetchum => (
                "sid-ketchum",
                "Sid Ketchum",
                4,
                A::DiscardForHealth,
                T::OnTurn,
                "He may discard 2 cards to regain 1 health",
            ),
            Character::SlabTheKiller => (
                "slab-the-killer",
                "Slab the Killer",
                4,
                A::DoubleMissedRequired,
                T::Passive,
                "Players targeted by his BANG! need 2 Missed! to dodge",
            ),
            Character::SuzyLafayette => (
                "suzy-lafayette",
                "Suzy Lafayette",
                4,
                A::DrawWhenEmpty,
                T::Reactive,
                "When she has no cards in hand, she draws a card",
            ),
            Character::VultureSam => (
                "vulture-sam",
                "Vulture Sam",
                4,
                A::TakeDeadCards,
                T::OnDeath,
                "When a player is eliminated, he takes all their cards",
            ),
            Character::WillyTheKid => (
                "willy-the-kid",
                "Willy the Kid",
                4,
                A::UnlimitedBangs,
                T::Passive,
                "He can play any number of BANG! cards per turn",
            ),
        };

        CharacterDef {
            id,
            name,
            health,
            ability,
            timing,
            description,
        }
    }

    #[must_use]
    pub const fn ability(self) -> Ability {
        self.def().ability
    }

    #[must_use]
    pub const fn base_health(self) -> u8 {
        self.def().health
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        self.def().name
    }

    /// Look a character up by its kebab-case id.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Character> {
        Self::ALL.into_iter().find(|c| c.def().id == id)
    }
}

impl std::fmt::Display for Character {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.def().name)
    }
}

//! Card content: definitions, the deck composition and the registry.
//!
//! ## Key Types
//!
//! - `CardId`: One physical card of the deck
//! - `CardType`: Closed set of card kinds with their static metadata
//! - `Card`: Immutable catalogue entry (type, suit, rank)
//! - `CardRegistry`: Card map shared by a match

pub mod catalogue;
pub mod definition;
pub mod registry;

pub use catalogue::{create_deck, DECK_SIZE};
pub use definition::{Card, CardId, CardType, Category, Rank, Suit};
pub use registry::CardRegistry;

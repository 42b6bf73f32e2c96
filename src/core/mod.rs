//! Core engine types: players, state, moves, RNG, configuration, errors.
//!
//! Everything above this layer (rules, moves, turn structure) reads and
//! mutates the `GameState` defined here.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{ActionRecord, DrawChoice, Move};
pub use config::MatchConfig;
pub use error::{EngineError, Rejection, Result};
pub use player::{PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};
pub use state::{max_health_for, GameState, Phase, PlayerState, Stage, TurnStage};

// Game module - the scene state and its rules
//
// This module contains:
// - world.rs: GameWorld, which owns every body in the scene and runs the update phase
// - types.rs: GameState and the GameEvent stream consumed by audio, logging, and scores

pub mod types;
pub mod world;

pub use types::*;
pub use world::GameWorld;

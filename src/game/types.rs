// Shared enums used throughout the game

/// Game state enum for tracking current game mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Playing,
    /// Simulation paused until the restart button is pressed
    GameOver,
}

/// Something that happened during an update.
///
/// The world never plays sounds or writes files itself; the main loop routes
/// these to the sound board, the log, and the high-score table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Jumped,
    StarCollected { score: u32 },
    BombSpawned,
    PlayerGrew,
    ColorChanged { index: usize },
    /// A bomb was touched; `score` is after any penalty
    BombHit { score: u32 },
    /// A bomb was touched and the run ended (game-over rule)
    GameOver { score: u32, stars_collected: u32 },
    Restarted,
}

//! Screen-Space GUI System
//!
//! UI elements drawn at fixed screen positions on top of the world.
//!
//! # Available Components
//!
//! - [`Hud`] - Score text in the corner
//! - [`GameOverScreen`] - "GAME OVER" overlay with the restart button
//! - [`Button`] - Hoverable, clickable text button

pub mod button;
pub mod game_over;
pub mod hud;

pub use button::Button;
pub use game_over::GameOverScreen;
pub use hud::Hud;

//! High-score persistence
//!
//! Finished runs are ranked in a small JSON table in the user's data directory.
//!
//! # Architecture
//!
//! - `types`: The table, its entries, and error types
//! - `store`: ScoreStore for file operations
//!
//! # Example Usage
//!
//! ```ignore
//! let store = ScoreStore::new(ScoreStore::default_directory())?;
//! let mut table = store.load()?;
//! if let Some(rank) = table.record(score, stars_collected) {
//!     store.save(&table)?;
//! }
//! ```

pub mod store;
pub mod types;

pub use store::ScoreStore;
pub use types::*;

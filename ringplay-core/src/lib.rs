pub mod browser;
pub mod commands;
pub mod config;
pub mod entry;
pub mod error;
pub mod history;
pub mod playlist;
pub mod session;

pub use entry::{Entry, EntryId};
pub use error::{PlayerError, Result};
pub use history::PlayHistory;
pub use playlist::CircularPlaylist;

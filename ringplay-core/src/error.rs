//! Error types for the player shell
//!
//! The playlist and history structures never fail; these errors only come from
//! the folder loader, the playback engine and command parsing.

use std::path::PathBuf;

use thiserror::Error;

/// Player errors
#[derive(Debug, Error)]
pub enum PlayerError {
    /// The folder could not be listed
    #[error("cannot read folder {path:?}: {source}")]
    ReadFolder {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The folder holds no file with a supported extension
    #[error("no audio files found in {0:?}")]
    NoTracks(PathBuf),

    /// The playback engine refused the entry
    #[error("could not play {location}: {reason}")]
    Playback { location: String, reason: String },

    /// An operation needs at least one loaded track
    #[error("playlist is empty, load a folder first")]
    EmptyPlaylist,

    /// Command word not recognized
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// Command or option needs a value
    #[error("missing argument for {0}")]
    MissingArgument(&'static str),

    /// Value could not be parsed
    #[error("invalid value for {name}: {value}")]
    InvalidArgument { name: &'static str, value: String },
}

/// Result type for player operations
pub type Result<T> = std::result::Result<T, PlayerError>;

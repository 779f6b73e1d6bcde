//! Player session
//!
//! Wires the playlist ring and the play history to a playback engine: the
//! shuffle flag and play/pause state live here, not in the data structures.

use std::path::Path;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::browser;
use crate::config::PlayerConfig;
use crate::entry::Entry;
use crate::error::{PlayerError, Result};
use crate::history::PlayHistory;
use crate::playlist::CircularPlaylist;

/// Seam to whatever actually decodes and plays audio
pub trait Playback {
    /// Start playing `location` from the beginning
    fn play(&mut self, location: &str) -> Result<()>;
    fn pause(&mut self);
    fn resume(&mut self);
    fn stop(&mut self);
    /// Whether a track is still loaded and playing or paused
    fn is_busy(&self) -> bool;
}

/// How the next track is picked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::Display)]
pub enum PlaybackMode {
    #[default]
    #[strum(serialize = "Sequential Mode")]
    Sequential,
    #[strum(serialize = "Shuffle Mode")]
    Shuffle,
}

impl PlaybackMode {
    pub fn toggled(self) -> Self {
        match self {
            PlaybackMode::Sequential => PlaybackMode::Shuffle,
            PlaybackMode::Shuffle => PlaybackMode::Sequential,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::Display)]
pub enum PlayState {
    #[default]
    Stopped,
    Playing,
    Paused,
}

pub struct PlayerSession<P: Playback> {
    playlist: CircularPlaylist,
    history: PlayHistory,
    mode: PlaybackMode,
    state: PlayState,
    extensions: Vec<String>,
    engine: P,
    rng: StdRng,
}

impl<P: Playback> PlayerSession<P> {
    pub fn new(config: &PlayerConfig, engine: P) -> Self {
        Self {
            playlist: CircularPlaylist::new(),
            history: PlayHistory::new(config.history_capacity),
            mode: if config.shuffle {
                PlaybackMode::Shuffle
            } else {
                PlaybackMode::Sequential
            },
            state: PlayState::Stopped,
            extensions: config.extensions.clone(),
            engine,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Replace the shuffle generator with a seeded one
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn playlist(&self) -> &CircularPlaylist {
        &self.playlist
    }

    pub fn history(&self) -> &PlayHistory {
        &self.history
    }

    pub fn mode(&self) -> PlaybackMode {
        self.mode
    }

    pub fn state(&self) -> PlayState {
        self.state
    }

    pub fn engine(&self) -> &P {
        &self.engine
    }

    /// Stop playback and replace the playlist with the files found in `dir`.
    ///
    /// The old playlist is dropped first, so a failed load leaves an empty one.
    /// History is kept.
    pub fn load_folder(&mut self, dir: &Path) -> Result<usize> {
        self.stop();
        self.playlist = CircularPlaylist::new();
        self.playlist = browser::load_playlist(dir, &self.extensions)?;
        Ok(self.playlist.len())
    }

    /// Pause when playing, resume when paused, otherwise play the current entry
    pub fn toggle_play_pause(&mut self) -> Result<PlayState> {
        if self.playlist.is_empty() {
            return Err(PlayerError::EmptyPlaylist);
        }

        match self.state {
            PlayState::Playing => {
                self.engine.pause();
                self.state = PlayState::Paused;
            }
            PlayState::Paused => {
                self.engine.resume();
                self.state = PlayState::Playing;
            }
            PlayState::Stopped => {
                let entry = self.playlist.current().cloned().ok_or(PlayerError::EmptyPlaylist)?;
                self.play_entry(entry)?;
            }
        }
        Ok(self.state)
    }

    /// Play the successor, or a random entry in shuffle mode
    pub fn play_next(&mut self) -> Result<Option<Entry>> {
        let entry = match self.mode {
            PlaybackMode::Sequential => self.playlist.advance().cloned(),
            PlaybackMode::Shuffle => self.playlist.random_jump_with(&mut self.rng).cloned(),
        };
        self.play_optional(entry)
    }

    /// Play the predecessor. Shuffle mode does not apply going back.
    pub fn play_previous(&mut self) -> Result<Option<Entry>> {
        let entry = self.playlist.retreat().cloned();
        self.play_optional(entry)
    }

    /// Move to the first entry named `name` and play it
    pub fn select(&mut self, name: &str) -> Result<Option<Entry>> {
        let entry = self.playlist.find_by_name(name).cloned();
        if entry.is_none() {
            log::warn!("No track named {:?}", name);
        }
        self.play_optional(entry)
    }

    /// Remove the first entry named `name`; playback is not interrupted
    pub fn remove(&mut self, name: &str) -> bool {
        self.playlist.remove(name)
    }

    pub fn stop(&mut self) {
        self.engine.stop();
        self.state = PlayState::Stopped;
    }

    pub fn toggle_shuffle(&mut self) -> PlaybackMode {
        self.mode = self.mode.toggled();
        log::info!("{}", self.mode);
        self.mode
    }

    /// Poll the engine; when the playing track has ended, move on to the next one
    pub fn tick(&mut self) -> Result<Option<Entry>> {
        if self.state == PlayState::Playing && !self.engine.is_busy() {
            log::debug!("Track finished, advancing");
            return self.play_next();
        }
        Ok(None)
    }

    fn play_optional(&mut self, entry: Option<Entry>) -> Result<Option<Entry>> {
        match entry {
            Some(entry) => {
                self.play_entry(entry.clone())?;
                Ok(Some(entry))
            }
            None => Ok(None),
        }
    }

    fn play_entry(&mut self, entry: Entry) -> Result<()> {
        if let Err(e) = self.engine.play(&entry.location) {
            log::error!("{}", e);
            self.stop();
            return Err(e);
        }
        log::info!("Now playing: {}", entry.name);
        self.state = PlayState::Playing;
        self.history.push(entry);
        Ok(())
    }
}

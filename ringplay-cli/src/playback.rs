use std::path::Path;

use ringplay_core::error::{PlayerError, Result};
use ringplay_core::session::Playback;

/// Stand-in engine: checks the file is there and reports what would play.
///
/// Decoding is not done here, so a "playing" track never finishes on its own.
#[derive(Debug, Default)]
pub struct ConsolePlayback {
    loaded: Option<String>,
    paused: bool,
}

impl Playback for ConsolePlayback {
    fn play(&mut self, location: &str) -> Result<()> {
        if !Path::new(location).is_file() {
            return Err(PlayerError::Playback {
                location: location.to_string(),
                reason: "file not found".to_string(),
            });
        }
        log::debug!("Loading {}", location);
        self.loaded = Some(location.to_string());
        self.paused = false;
        Ok(())
    }

    fn pause(&mut self) {
        self.paused = true;
    }

    fn resume(&mut self) {
        self.paused = false;
    }

    fn stop(&mut self) {
        self.loaded = None;
        self.paused = false;
    }

    fn is_busy(&self) -> bool {
        self.loaded.is_some()
    }
}

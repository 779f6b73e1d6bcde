use std::fs;
use std::path::{Path, PathBuf};

use crate::entry::Entry;
use crate::error::{PlayerError, Result};
use crate::playlist::CircularPlaylist;

/// Extensions accepted when no others are configured
pub const DEFAULT_EXTENSIONS: &[&str] = &["mp3"];

/// Check a path against a list of extensions, ignoring case.
pub fn has_supported_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| extensions.iter().any(|allowed| allowed.eq_ignore_ascii_case(ext)))
        .unwrap_or(false)
}

/// List the audio files directly inside `dir`, sorted by file name.
///
/// The entry name is the file stem and the location is the full path.
/// Subdirectories are not descended into.
pub fn scan_folder(dir: &Path, extensions: &[String]) -> Result<Vec<Entry>> {
    let read_dir = fs::read_dir(dir).map_err(|source| PlayerError::ReadFolder {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files: Vec<PathBuf> = Vec::new();
    for entry_result in read_dir {
        let entry = match entry_result {
            Ok(entry) => entry,
            Err(e) => {
                log::warn!("Skipping unreadable entry in {:?}: {}", dir, e);
                continue;
            }
        };
        let path = entry.path();
        if path.is_file() && has_supported_extension(&path, extensions) {
            files.push(path);
        }
    }

    files.sort_by_key(|path| {
        path.file_name()
            .map(|n| n.to_string_lossy().to_lowercase())
            .unwrap_or_default()
    });

    let entries = files
        .into_iter()
        .map(|path| {
            let name = path
                .file_stem()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_else(|| "Unknown".to_string());
            Entry::new(name, path.to_string_lossy().to_string())
        })
        .collect();

    Ok(entries)
}

/// Build a fresh playlist from the audio files in `dir`.
///
/// Fails with [`PlayerError::NoTracks`] when nothing matched.
pub fn load_playlist(dir: &Path, extensions: &[String]) -> Result<CircularPlaylist> {
    let entries = scan_folder(dir, extensions)?;
    if entries.is_empty() {
        return Err(PlayerError::NoTracks(dir.to_path_buf()));
    }

    let mut playlist = CircularPlaylist::new();
    for entry in entries {
        playlist.add(entry.name, entry.location);
    }
    log::info!("Loaded {} tracks from {:?}", playlist.len(), dir);
    Ok(playlist)
}

use std::io::{self, Write};

use ringplay_core::session::{PlayState, Playback, PlayerSession};

/// Print the playlist with the current track marked
pub fn draw_playlist<P: Playback>(out: &mut impl Write, session: &PlayerSession<P>) -> io::Result<()> {
    let playlist = session.playlist();
    writeln!(out, "Playlist ({} songs)", playlist.len())?;
    if playlist.is_empty() {
        writeln!(out, "  Playlist is empty. Use `load <folder>`.")?;
        return Ok(());
    }

    let current = playlist.current_position();
    for (i, entry) in playlist.iter().enumerate() {
        let prefix = if current == Some(i) {
            "▶ "
        } else {
            "  "
        };
        writeln!(out, "{}{:>3}. {}", prefix, i + 1, entry.name)?;
    }
    Ok(())
}

/// Print recently played tracks, newest first
pub fn draw_recent<P: Playback>(out: &mut impl Write, session: &PlayerSession<P>) -> io::Result<()> {
    writeln!(out, "Recently Played")?;
    let records = session.history().to_list();
    if records.is_empty() {
        writeln!(out, "  No recently played songs")?;
    }
    for (i, record) in records.iter().enumerate() {
        writeln!(out, "  {}. {}", i + 1, record.name)?;
    }
    Ok(())
}

/// One-line summary of what is playing and how the next track is chosen
pub fn draw_status<P: Playback>(out: &mut impl Write, session: &PlayerSession<P>) -> io::Result<()> {
    let title = match (session.state(), session.playlist().current()) {
        (_, None) => "No Song Selected".to_string(),
        (PlayState::Stopped, Some(entry)) => entry.name.clone(),
        (state, Some(entry)) => format!("{} ({})", entry.name, state),
    };
    writeln!(
        out,
        "{} | {} | Songs in Playlist: {}",
        title,
        session.mode(),
        session.playlist().len()
    )
}

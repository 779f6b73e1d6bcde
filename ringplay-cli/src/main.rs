use std::io::{self, BufRead, Write};

use ringplay_core::{
    commands::{self, Command},
    config::PlayerConfig,
    session::PlayerSession,
};

mod playback;
mod view;

use playback::ConsolePlayback;

/// The console engine does not decode audio, so a track never ends by itself
const NO_AUTO_ADVANCE: &str = "Note: tracks do not finish on their own here; use `next` to move on.";

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut config = PlayerConfig::default();
    config.apply_env()?;
    if !config.apply_args(std::env::args().skip(1).collect())? {
        print_help();
        return Ok(());
    }

    log::info!("Starting ringplay");
    let mut session = PlayerSession::new(&config, ConsolePlayback::default());

    if let Some(folder) = config.folder.clone() {
        match session.load_folder(&folder) {
            Ok(count) => println!("Loaded {} songs", count),
            Err(e) => eprintln!("{}", e),
        }
    }

    run_shell(&mut session)
}

fn run_shell(session: &mut PlayerSession<ConsolePlayback>) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    view::draw_status(&mut stdout, session)?;
    prompt(&mut stdout)?;

    for line in stdin.lock().lines() {
        let line = line?;
        if !line.trim().is_empty() {
            match line.parse::<Command>() {
                Ok(Command::Quit) => break,
                Ok(command) => {
                    if let Err(e) = handle_command(command, session, &mut stdout) {
                        eprintln!("{}", e);
                    }
                }
                Err(e) => eprintln!("{}", e),
            }
        }

        // Auto-advance when the engine reports the track has ended
        match session.tick() {
            Ok(Some(entry)) => println!("Now playing: {}", entry.name),
            Ok(None) => {}
            Err(e) => eprintln!("{}", e),
        }
        prompt(&mut stdout)?;
    }

    session.stop();
    log::info!("Exiting ringplay");
    Ok(())
}

/// Run one command against the session and print its outcome
fn handle_command(
    command: Command,
    session: &mut PlayerSession<ConsolePlayback>,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    match command {
        Command::Load(folder) => {
            let count = session.load_folder(&folder)?;
            writeln!(out, "Loaded {} songs", count)?;
            view::draw_status(out, session)?;
        }
        Command::PlayPause => {
            session.toggle_play_pause()?;
            view::draw_status(out, session)?;
        }
        Command::Next => report_played(out, session.play_next()?.map(|e| e.name))?,
        Command::Previous => report_played(out, session.play_previous()?.map(|e| e.name))?,
        Command::Stop => {
            session.stop();
            view::draw_status(out, session)?;
        }
        Command::Shuffle => {
            let mode = session.toggle_shuffle();
            writeln!(out, "{}", mode)?;
        }
        Command::Select(name) => match session.select(&name)? {
            Some(entry) => writeln!(out, "Now playing: {}", entry.name)?,
            None => writeln!(out, "No song named {:?}", name)?,
        },
        Command::Remove(name) => {
            if session.remove(&name) {
                writeln!(out, "Removed {:?}", name)?;
                writeln!(out, "Songs in Playlist: {}", session.playlist().len())?;
            } else {
                writeln!(out, "No song named {:?}", name)?;
            }
        }
        Command::List => view::draw_playlist(out, session)?,
        Command::Recent => view::draw_recent(out, session)?,
        Command::Status => view::draw_status(out, session)?,
        Command::Help => {
            writeln!(out, "{}", commands::help_text())?;
            writeln!(out, "{}", NO_AUTO_ADVANCE)?;
        }
        Command::Quit => {}
    }
    Ok(())
}

fn report_played(out: &mut impl Write, name: Option<String>) -> io::Result<()> {
    match name {
        Some(name) => writeln!(out, "Now playing: {}", name),
        None => writeln!(out, "Playlist is empty. Use `load <folder>`."),
    }
}

fn prompt(out: &mut impl Write) -> io::Result<()> {
    write!(out, "> ")?;
    out.flush()
}

fn print_help() {
    println!("ringplay [OPTIONS] [FOLDER]");
    println!("  --shuffle         start in shuffle mode");
    println!("  --history N       number of recently played songs to keep (default 10)");
    println!("  --ext a,b         audio file extensions to load (default mp3)");
    println!();
    println!("Commands:");
    println!("{}", commands::help_text());
    println!();
    println!("{}", NO_AUTO_ADVANCE);
}

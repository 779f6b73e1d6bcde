use std::path::PathBuf;
use std::str::FromStr;

use strum::{EnumIter, IntoEnumIterator};

use crate::error::PlayerError;

/// Commands read by the shell, one per input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replace the playlist with the audio files of a folder
    Load(PathBuf),
    /// Play, pause or resume
    PlayPause,
    /// Skip forward (random entry in shuffle mode)
    Next,
    /// Skip back
    Previous,
    /// Stop playback
    Stop,
    /// Toggle shuffle mode
    Shuffle,
    /// Play the first entry with this name
    Select(String),
    /// Delete the first entry with this name
    Remove(String),
    /// Show the playlist
    List,
    /// Show recently played tracks
    Recent,
    /// Show the current track and mode
    Status,
    /// Show the command summary
    Help,
    /// Leave the shell
    Quit,
}

/// Command words with their help text, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum CommandWord {
    Load,
    Play,
    Next,
    Prev,
    Stop,
    Shuffle,
    Select,
    Remove,
    List,
    Recent,
    Status,
    Help,
    Quit,
}

impl CommandWord {
    pub fn usage(&self) -> &'static str {
        match self {
            CommandWord::Load => "load <folder>   load the audio files of a folder",
            CommandWord::Play => "play            play / pause / resume",
            CommandWord::Next => "next            next track (random in shuffle mode)",
            CommandWord::Prev => "prev            previous track",
            CommandWord::Stop => "stop            stop playback",
            CommandWord::Shuffle => "shuffle         toggle shuffle mode",
            CommandWord::Select => "select <name>   play a track by name",
            CommandWord::Remove => "remove <name>   remove a track by name",
            CommandWord::List => "list            show the playlist",
            CommandWord::Recent => "recent          show recently played tracks",
            CommandWord::Status => "status          show the current track",
            CommandWord::Help => "help            show this help",
            CommandWord::Quit => "quit            exit",
        }
    }
}

/// Help text listing every command
pub fn help_text() -> String {
    CommandWord::iter()
        .map(|word| format!("  {}", word.usage()))
        .collect::<Vec<_>>()
        .join("\n")
}

impl FromStr for Command {
    type Err = PlayerError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let required = |name: &'static str| {
            if rest.is_empty() {
                Err(PlayerError::MissingArgument(name))
            } else {
                Ok(rest.to_string())
            }
        };

        let command = match word.to_lowercase().as_str() {
            "load" | "open" => Command::Load(PathBuf::from(required("load")?)),
            "play" | "pause" | "p" => Command::PlayPause,
            "next" | "n" => Command::Next,
            "prev" | "previous" | "b" => Command::Previous,
            "stop" | "s" => Command::Stop,
            "shuffle" => Command::Shuffle,
            "select" => Command::Select(required("select")?),
            "remove" | "rm" => Command::Remove(required("remove")?),
            "list" | "ls" => Command::List,
            "recent" | "history" => Command::Recent,
            "status" => Command::Status,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            _ => return Err(PlayerError::UnknownCommand(word.to_string())),
        };
        Ok(command)
    }
}

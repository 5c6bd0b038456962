//! Slash-command parsing for the interactive loop.

use std::path::PathBuf;

/// Help text printed by `/help`.
pub const HELP_TEXT: &str = concat!(
    "Commands:\n",
    "  /reset              Clear chat history (keeps system prompt)\n",
    "  /save <file>        Save transcript to a text file\n",
    "  /help               Show this help\n",
    "  /exit               Quit",
);

/// A parsed line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Reset,
    /// Save the full transcript, to the default path when `None`.
    Save(Option<PathBuf>),
    Exit,
    /// Anything else, including unknown slash-prefixed text.
    Message(String),
}

impl Command {
    /// Parse one input line. Blank lines yield `None` and never start a turn.
    ///
    /// Command tokens are case-insensitive. `/help`, `/reset`, `/exit` and
    /// `/quit` must stand alone on the line; `/save` takes the rest of the
    /// line as an optional path.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let (token, rest) = match line.split_once(char::is_whitespace) {
            Some((token, rest)) => (token, rest.trim()),
            None => (line, ""),
        };

        let command = match (token.to_lowercase().as_str(), rest.is_empty()) {
            ("/help", true) => Self::Help,
            ("/reset", true) => Self::Reset,
            ("/exit" | "/quit", true) => Self::Exit,
            ("/save", true) => Self::Save(None),
            ("/save", false) => Self::Save(Some(PathBuf::from(rest))),
            _ => Self::Message(line.to_string()),
        };
        Some(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines_are_ignored() {
        assert_eq!(Command::parse(""), None);
        assert_eq!(Command::parse("   \t "), None);
    }

    #[test]
    fn command_tokens_are_case_insensitive() {
        assert_eq!(Command::parse("/HELP"), Some(Command::Help));
        assert_eq!(Command::parse("/Reset"), Some(Command::Reset));
        assert_eq!(Command::parse("/EXIT"), Some(Command::Exit));
        assert_eq!(Command::parse("/quit"), Some(Command::Exit));
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        assert_eq!(Command::parse("  /save  "), Some(Command::Save(None)));
        assert_eq!(
            Command::parse("  hello there  "),
            Some(Command::Message("hello there".into()))
        );
    }

    #[test]
    fn save_takes_rest_of_line_as_path() {
        assert_eq!(
            Command::parse("/save notes/my chat.txt"),
            Some(Command::Save(Some(PathBuf::from("notes/my chat.txt"))))
        );
        assert_eq!(
            Command::parse("/SAVE   out.txt"),
            Some(Command::Save(Some(PathBuf::from("out.txt"))))
        );
    }

    #[test]
    fn unknown_slash_text_is_sent_as_message() {
        assert_eq!(
            Command::parse("/foo bar"),
            Some(Command::Message("/foo bar".into()))
        );
        assert_eq!(
            Command::parse("/savefile"),
            Some(Command::Message("/savefile".into()))
        );
    }

    #[test]
    fn argumentless_commands_with_arguments_are_messages() {
        assert_eq!(
            Command::parse("/exit now"),
            Some(Command::Message("/exit now".into()))
        );
        assert_eq!(
            Command::parse("/help me"),
            Some(Command::Message("/help me".into()))
        );
    }
}

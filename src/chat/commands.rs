//! Slash command parsing for the chat application.
//!
//! This module handles parsing of special commands that start with `/`,
//! allowing users to edit session fields and fire shortcuts without typing a
//! message.

/// A parsed chat command.
#[derive(Debug, Clone, PartialEq)]
pub enum ChatCommand {
    /// Set the business idea, or show it when `None`.
    Idea(Option<String>),

    /// Fire the quick action at a 1-based position, or list them when `None`.
    Quick(Option<usize>),

    /// Pick the n-th (1-based) selectable item of the latest reply.
    Pick(usize),

    /// Re-render the whole conversation.
    History,

    /// Display session status.
    Status,

    /// Probe the backend's health endpoint.
    Health,

    /// Display help information.
    Help,

    /// Exit the chat application.
    Quit,

    /// Report a parsing error back to the caller.
    Invalid(String),
}

/// Parses user input for slash commands.
///
/// Returns `Some(ChatCommand)` if the input is a command, or `None` if it
/// should be treated as a regular message.
///
/// # Examples
///
/// ```
/// # use bizchat::chat::{ChatCommand, parse_command};
/// assert_eq!(parse_command("/quit"), Some(ChatCommand::Quit));
/// assert_eq!(parse_command("/quick 2"), Some(ChatCommand::Quick(Some(2))));
/// assert!(parse_command("Suggest names for my bakery").is_none());
/// ```
pub fn parse_command(input: &str) -> Option<ChatCommand> {
    let input = input.trim();

    let rest = input.strip_prefix('/')?;
    let mut parts = rest.splitn(2, ' ');
    let command = parts.next()?.to_lowercase();
    let argument = parts.next().map(|s| s.trim()).filter(|s| !s.is_empty());

    let result = match command.as_str() {
        "idea" => ChatCommand::Idea(argument.map(|s| s.to_string())),
        "quick" => match argument {
            None => ChatCommand::Quick(None),
            Some(arg) => match parse_position(arg) {
                Some(position) => ChatCommand::Quick(Some(position)),
                None => ChatCommand::Invalid("/quick expects a number from 1 to 5".to_string()),
            },
        },
        "pick" => match argument.and_then(parse_position) {
            Some(position) => ChatCommand::Pick(position),
            None => ChatCommand::Invalid("/pick expects a positive number".to_string()),
        },
        "history" => ChatCommand::History,
        "status" | "stats" => ChatCommand::Status,
        "health" => ChatCommand::Health,
        "help" | "?" => ChatCommand::Help,
        "quit" | "exit" | "q" => ChatCommand::Quit,
        _ => ChatCommand::Invalid(format!("Unknown command: /{}", command)),
    };

    Some(result)
}

fn parse_position(value: &str) -> Option<usize> {
    value.parse::<usize>().ok().filter(|position| *position > 0)
}

/// Returns help text describing available commands.
pub fn help_text() -> &'static str {
    r#"Available commands:
  /idea [text]           Set your business idea (no argument shows it)
  /quick [n]             List quick actions, or send quick action n
  /pick <n>              Choose suggested name n from the latest reply
  /history               Show the whole conversation again
  /status                Show session status
  /health                Check that the assistant backend is up
  /help                  Show this help message
  /quit                  Exit the chat
Anything else is sent to the assistant."#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_quit_commands() {
        assert_eq!(parse_command("/quit"), Some(ChatCommand::Quit));
        assert_eq!(parse_command("/exit"), Some(ChatCommand::Quit));
        assert_eq!(parse_command("/q"), Some(ChatCommand::Quit));
        assert_eq!(parse_command("  /quit  "), Some(ChatCommand::Quit));
    }

    #[test]
    fn parse_idea() {
        assert_eq!(
            parse_command("/idea  handmade jewelry  "),
            Some(ChatCommand::Idea(Some("handmade jewelry".to_string())))
        );
        assert_eq!(parse_command("/idea"), Some(ChatCommand::Idea(None)));
        assert_eq!(parse_command("/IDEA"), Some(ChatCommand::Idea(None)));
    }

    #[test]
    fn parse_quick() {
        assert_eq!(parse_command("/quick"), Some(ChatCommand::Quick(None)));
        assert_eq!(parse_command("/quick 5"), Some(ChatCommand::Quick(Some(5))));
        assert!(matches!(
            parse_command("/quick zero"),
            Some(ChatCommand::Invalid(msg)) if msg.contains("expects")
        ));
        assert!(matches!(
            parse_command("/quick 0"),
            Some(ChatCommand::Invalid(_))
        ));
    }

    #[test]
    fn parse_pick() {
        assert_eq!(parse_command("/pick 2"), Some(ChatCommand::Pick(2)));
        assert!(matches!(
            parse_command("/pick"),
            Some(ChatCommand::Invalid(msg)) if msg.contains("/pick")
        ));
        assert!(matches!(
            parse_command("/pick -1"),
            Some(ChatCommand::Invalid(_))
        ));
    }

    #[test]
    fn parse_simple_commands() {
        assert_eq!(parse_command("/history"), Some(ChatCommand::History));
        assert_eq!(parse_command("/status"), Some(ChatCommand::Status));
        assert_eq!(parse_command("/stats"), Some(ChatCommand::Status));
        assert_eq!(parse_command("/health"), Some(ChatCommand::Health));
        assert_eq!(parse_command("/?"), Some(ChatCommand::Help));
    }

    #[test]
    fn unknown_command() {
        assert_eq!(
            parse_command("/logo"),
            Some(ChatCommand::Invalid("Unknown command: /logo".to_string()))
        );
    }

    #[test]
    fn non_commands() {
        assert_eq!(parse_command("Give me innovative ideas"), None);
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("  "), None);
    }

    #[test]
    fn help_text_not_empty() {
        let help = help_text();
        assert!(help.contains("/idea"));
        assert!(help.contains("/quick"));
        assert!(help.contains("/pick"));
        assert!(help.contains("/quit"));
    }
}

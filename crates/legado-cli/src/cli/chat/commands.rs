//! Slash command parsing for the chat loop.
//!
//! Commands start with `/` and replace the sidebar and title controls of
//! the web client: listing, switching, creating, renaming, and deleting
//! chats. `/1`..`/4` submit the suggestion chips.

use console::style;

/// Canned queries shown in the banner, submitted via `/1`..`/4`.
pub const SUGGESTIONS: [&str; 4] = [
    "¿Cómo se distribuye una herencia sin testamento?",
    "¿Qué documentos necesito para un proceso de herencia?",
    "¿Cuáles son los derechos de los herederos forzosos?",
    "¿Cuánto tiempo toma un proceso de sucesión?",
];

/// Available slash commands in the chat loop.
#[derive(Debug, PartialEq)]
pub enum ChatCommand {
    /// Show available commands.
    Help,
    /// List chats with their positions.
    Chats,
    /// Create a chat, optionally named.
    New(Option<String>),
    /// Switch to the chat at a 1-based position.
    Switch(usize),
    /// Rename the current chat.
    Rename(String),
    /// Delete the chat at a 1-based position, or the current one.
    Delete(Option<usize>),
    /// Submit a suggestion chip (1-based).
    Suggest(usize),
    /// Clear the terminal screen.
    Clear,
    /// Exit the chat.
    Exit,
    /// Unknown command, with a hint for the user.
    Unknown(String),
}

/// Parse user input as a slash command.
///
/// Returns `None` if the input doesn't start with `/`; it is then sent
/// as a message.
pub fn parse(input: &str) -> Option<ChatCommand> {
    let trimmed = input.trim();
    if !trimmed.starts_with('/') {
        return None;
    }

    let parts: Vec<&str> = trimmed.splitn(2, ' ').collect();
    let cmd = parts[0].to_lowercase();
    let arg = parts.get(1).map(|s| s.trim().to_string());

    // Suggestion chips: /1 .. /4
    if let Ok(n) = cmd[1..].parse::<usize>() {
        if (1..=SUGGESTIONS.len()).contains(&n) {
            return Some(ChatCommand::Suggest(n));
        }
        return Some(ChatCommand::Unknown(cmd));
    }

    match cmd.as_str() {
        "/help" | "/h" | "/?" => Some(ChatCommand::Help),
        "/chats" | "/ls" => Some(ChatCommand::Chats),
        "/new" | "/nuevo" => Some(ChatCommand::New(arg.filter(|a| !a.is_empty()))),
        "/switch" | "/cambiar" => match arg.and_then(|a| a.parse().ok()) {
            Some(n) => Some(ChatCommand::Switch(n)),
            None => Some(ChatCommand::Unknown(
                "/switch necesita un número, por ejemplo /switch 2".to_string(),
            )),
        },
        "/rename" | "/renombrar" => match arg.filter(|a| !a.is_empty()) {
            Some(name) => Some(ChatCommand::Rename(name)),
            None => Some(ChatCommand::Unknown(
                "/rename necesita el nuevo nombre".to_string(),
            )),
        },
        "/delete" | "/borrar" => Some(ChatCommand::Delete(arg.and_then(|a| a.parse().ok()))),
        "/clear" | "/cls" => Some(ChatCommand::Clear),
        "/exit" | "/quit" | "/q" | "/salir" => Some(ChatCommand::Exit),
        other => Some(ChatCommand::Unknown(other.to_string())),
    }
}

/// Print the help text listing all available commands.
pub fn print_help() {
    println!();
    println!("  {}", style("Comandos disponibles:").bold());
    println!();
    println!("  {}      {}", style("/help").cyan(), "Muestra esta ayuda");
    println!("  {}     {}", style("/chats").cyan(), "Lista tus chats");
    println!(
        "  {}  {}",
        style("/new [nom]").cyan(),
        "Crea un chat nuevo"
    );
    println!(
        "  {} {}",
        style("/switch <n>").cyan(),
        "Cambia al chat n"
    );
    println!(
        "  {} {}",
        style("/rename <x>").cyan(),
        "Renombra el chat actual"
    );
    println!(
        "  {} {}",
        style("/delete [n]").cyan(),
        "Borra el chat n (o el actual)"
    );
    println!(
        "  {}   {}",
        style("/1../4").cyan(),
        "Envía una consulta sugerida"
    );
    println!("  {}     {}", style("/clear").cyan(), "Limpia la pantalla");
    println!("  {}      {}", style("/exit").cyan(), "Termina la sesión");
    println!();
    println!("  {}", style("Ctrl+D para salir").dim());
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_help() {
        assert_eq!(parse("/help"), Some(ChatCommand::Help));
        assert_eq!(parse("/h"), Some(ChatCommand::Help));
        assert_eq!(parse("/?"), Some(ChatCommand::Help));
    }

    #[test]
    fn test_parse_new_with_and_without_name() {
        assert_eq!(parse("/new"), Some(ChatCommand::New(None)));
        assert_eq!(
            parse("/nuevo Consulta testamento"),
            Some(ChatCommand::New(Some("Consulta testamento".to_string())))
        );
    }

    #[test]
    fn test_parse_switch() {
        assert_eq!(parse("/switch 2"), Some(ChatCommand::Switch(2)));
        assert!(matches!(parse("/switch dos"), Some(ChatCommand::Unknown(_))));
        assert!(matches!(parse("/switch"), Some(ChatCommand::Unknown(_))));
    }

    #[test]
    fn test_parse_rename() {
        assert_eq!(
            parse("/rename Sucesión intestada"),
            Some(ChatCommand::Rename("Sucesión intestada".to_string()))
        );
        assert!(matches!(parse("/rename"), Some(ChatCommand::Unknown(_))));
        assert!(matches!(parse("/rename   "), Some(ChatCommand::Unknown(_))));
    }

    #[test]
    fn test_parse_delete_defaults_to_current() {
        assert_eq!(parse("/delete"), Some(ChatCommand::Delete(None)));
        assert_eq!(parse("/borrar 3"), Some(ChatCommand::Delete(Some(3))));
    }

    #[test]
    fn test_parse_suggestions() {
        assert_eq!(parse("/1"), Some(ChatCommand::Suggest(1)));
        assert_eq!(parse("/4"), Some(ChatCommand::Suggest(4)));
        assert!(matches!(parse("/5"), Some(ChatCommand::Unknown(_))));
        assert!(matches!(parse("/0"), Some(ChatCommand::Unknown(_))));
    }

    #[test]
    fn test_parse_not_command() {
        assert_eq!(parse("hola"), None);
        assert_eq!(parse("  ¿qué es la legítima?"), None);
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            parse("/foo"),
            Some(ChatCommand::Unknown("/foo".to_string()))
        );
    }
}

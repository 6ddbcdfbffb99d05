//! Welcome banner for the chat loop.

use console::style;

use super::commands::SUGGESTIONS;

/// Print the banner shown when the chat starts: service identity, the
/// backend in use, the current chat, and the suggestion chips.
pub fn print_welcome_banner(api_base: &str, chat_name: Option<&str>) {
    println!();
    println!("  ⚖️ {}", style("Chatbot Legal Especializado").cyan().bold());
    println!(
        "  {}",
        style("Respuestas sobre herencia, sucesiones y derecho civil en Perú.").dim()
    );
    println!();
    println!(
        "  {}  {}",
        style("Servidor:").bold(),
        style(api_base).dim()
    );
    if let Some(name) = chat_name {
        println!("  {}      {}", style("Chat:").bold(), style(name).cyan());
    }
    println!();
    println!("  {}", style("Consultas sugeridas:").bold());
    for (i, suggestion) in SUGGESTIONS.iter().enumerate() {
        println!(
            "    {} {}",
            style(format!("/{}", i + 1)).cyan(),
            style(suggestion).dim()
        );
    }
    println!();
    println!(
        "  {}",
        style("Escribe /help para ver los comandos, Ctrl+D para salir").dim()
    );
    println!("  {}", style("---").dim());
    println!();
}

//! Terminal rendering of chat bubbles.
//!
//! Assistant replies are markdown and render through `termimad`; user
//! echoes and local error bubbles print as plain styled lines. Each
//! bubble carries a time stamp like the web client's message rows.

use chrono::Local;
use console::style;
use legado_types::message::{Message, Sender};
use termimad::MadSkin;

/// Terminal renderer for conversation transcripts.
pub struct ChatRenderer {
    skin: MadSkin,
}

impl ChatRenderer {
    pub fn new() -> Self {
        let mut skin = MadSkin::default_dark();
        skin.inline_code
            .set_fg(termimad::crossterm::style::Color::Yellow);
        Self { skin }
    }

    /// Print one message as a labeled bubble.
    pub fn print_message(&self, message: &Message) {
        let time = message
            .sent_at
            .with_timezone(&Local)
            .format("%H:%M")
            .to_string();

        match message.sender {
            Sender::User => {
                println!(
                    "  {} {}  {}",
                    style("🧑 Tú").green().bold(),
                    message.text,
                    style(time).dim()
                );
            }
            Sender::Assistant => {
                println!(
                    "  {}  {}",
                    style("⚖️ Asistente").cyan().bold(),
                    style(time).dim()
                );
                let rendered = self.skin.term_text(&message.text);
                for line in rendered.to_string().lines() {
                    println!("  {line}");
                }
            }
            Sender::System => {
                for line in message.text.lines() {
                    println!("  {}", style(line).yellow());
                }
            }
        }
        println!();
    }

    /// Print a whole transcript, oldest first.
    pub fn print_transcript(&self, messages: &[Message]) {
        for message in messages {
            self.print_message(message);
        }
    }
}

impl Default for ChatRenderer {
    fn default() -> Self {
        Self::new()
    }
}

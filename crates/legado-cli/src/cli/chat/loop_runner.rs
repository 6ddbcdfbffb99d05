//! Main chat loop orchestration.
//!
//! Drives the complete session lifecycle: bootstrap against the backend,
//! welcome banner, transcript replay, input loop with slash commands, and
//! the send round trip with its local echo and error bubbles.

use std::time::Duration;

use console::style;
use tracing::info;

use legado_core::controller::DEFAULT_CHAT_NAME;
use legado_types::message::Sender;

use crate::state::{AppState, ConcreteController};

use super::banner::print_welcome_banner;
use super::commands::{self, ChatCommand, SUGGESTIONS};
use super::input::{ChatInput, InputEvent};
use super::renderer::ChatRenderer;

fn spinner(message: &'static str) -> indicatif::ProgressBar {
    let pb = indicatif::ProgressBar::new_spinner();
    pb.set_style(
        indicatif::ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

/// Print the messages appended by the last controller call, skipping user
/// echoes the terminal already shows. A shrunk list means the transcript
/// was replaced wholesale, so replay it from the top.
fn render_outcome(controller: &ConcreteController, renderer: &ChatRenderer, before: usize) {
    let messages = controller.messages();
    println!();
    if messages.len() < before {
        renderer.print_transcript(messages);
        return;
    }
    for message in &messages[before..] {
        if message.sender != Sender::User {
            renderer.print_message(message);
        }
    }
}

/// Replay the current chat from the top, under a small header.
fn render_current(controller: &ConcreteController, renderer: &ChatRenderer) {
    println!();
    if let Some(current) = controller.current_chat() {
        println!("  {} {}", style("Chat:").bold(), style(&current.name).cyan());
        println!("  {}", style("---").dim());
        println!();
    }
    renderer.print_transcript(controller.messages());
}

async fn send_and_render(
    controller: &mut ConcreteController,
    renderer: &ChatRenderer,
    text: &str,
) {
    let before = controller.messages().len();
    let thinking = spinner("consultando...");
    controller.send_message(text).await;
    thinking.finish_and_clear();
    render_outcome(controller, renderer, before);
}

/// List chats with their 1-based positions, marking the current one.
fn print_chat_list(controller: &ConcreteController) {
    println!();
    if controller.chats().is_empty() {
        println!("  {}", style("No tienes chats todavía.").dim());
        println!();
        return;
    }
    for (i, chat) in controller.chats().iter().enumerate() {
        let is_current = controller
            .current_chat()
            .is_some_and(|current| current.id == chat.id);
        let marker = if is_current { "›" } else { " " };
        println!(
            "  {} {} {}",
            style(marker).cyan().bold(),
            style(format!("{}.", i + 1)).dim(),
            chat.name
        );
    }
    println!();
}

/// Ask for confirmation on the readline, accepting "si" variants.
async fn confirm(chat_input: &mut ChatInput, question: &str) -> bool {
    println!(
        "  {} {}",
        style(question).yellow(),
        style("(si/no)").dim()
    );
    match chat_input.read_line().await {
        InputEvent::Line(answer) => {
            matches!(answer.to_lowercase().as_str(), "si" | "sí" | "s")
        }
        _ => false,
    }
}

/// Run the interactive chat session.
pub async fn run_chat(state: &AppState) -> anyhow::Result<()> {
    let mut controller = state.controller();

    let connecting = spinner("Conectando con el servidor...");
    controller.bootstrap().await;
    connecting.finish_and_clear();

    info!(
        user_id = ?controller.user_id().map(|id| id.as_str()),
        chats = controller.chats().len(),
        "session bootstrapped"
    );

    print_welcome_banner(
        &state.config.api_base,
        controller.current_chat().map(|c| c.name.as_str()),
    );

    let renderer = ChatRenderer::new();
    renderer.print_transcript(controller.messages());

    let prompt = format!("  {} ", style("Tú >").green().bold());
    let (mut chat_input, _writer) = ChatInput::new(prompt)
        .map_err(|e| anyhow::anyhow!("no se pudo inicializar la entrada: {e}"))?;

    loop {
        let event = chat_input.read_line().await;
        let text = match event {
            InputEvent::Eof => {
                println!("\n  {}", style("Sesión terminada.").dim());
                break;
            }
            InputEvent::Interrupted => {
                println!(
                    "\n  {}",
                    style("Ctrl+D para salir, o sigue escribiendo.").dim()
                );
                continue;
            }
            InputEvent::Line(text) => text,
        };
        if text.is_empty() {
            continue;
        }

        let Some(command) = commands::parse(&text) else {
            send_and_render(&mut controller, &renderer, &text).await;
            continue;
        };

        match command {
            ChatCommand::Help => commands::print_help(),
            ChatCommand::Chats => print_chat_list(&controller),
            ChatCommand::New(name) => {
                let name = name.as_deref().unwrap_or(DEFAULT_CHAT_NAME);
                let creating = spinner("Creando chat...");
                let created = controller.create_chat(name).await;
                creating.finish_and_clear();
                match created {
                    Some(id) => {
                        info!(chat_id = %id, "chat created");
                        render_current(&controller, &renderer);
                    }
                    None => {
                        println!(
                            "\n  {}\n",
                            style("No pude crear el chat. Intenta de nuevo.").yellow()
                        );
                    }
                }
            }
            ChatCommand::Switch(n) => {
                let Some(chat) = n
                    .checked_sub(1)
                    .and_then(|i| controller.chats().get(i))
                    .cloned()
                else {
                    println!(
                        "\n  {}\n",
                        style(format!("No hay un chat en la posición {n}.")).yellow()
                    );
                    continue;
                };
                let loading = spinner("Cargando mensajes...");
                controller.select_chat(chat.id, chat.name).await;
                loading.finish_and_clear();
                render_current(&controller, &renderer);
            }
            ChatCommand::Rename(name) => {
                if controller.current_chat().is_none() {
                    println!(
                        "\n  {}\n",
                        style("No hay un chat activo para renombrar.").yellow()
                    );
                    continue;
                }
                controller.begin_rename();
                controller.set_rename_draft(name.clone());
                controller.commit_rename().await;
                let renamed = controller
                    .current_chat()
                    .is_some_and(|current| current.name == name.trim());
                if renamed {
                    println!(
                        "\n  {} {}\n",
                        style("Chat renombrado a").dim(),
                        style(name.trim()).cyan()
                    );
                } else {
                    println!(
                        "\n  {}\n",
                        style("No pude renombrar el chat.").yellow()
                    );
                }
            }
            ChatCommand::Delete(position) => {
                let target = match position {
                    Some(n) => n
                        .checked_sub(1)
                        .and_then(|i| controller.chats().get(i))
                        .map(|chat| (chat.id.clone(), chat.name.clone())),
                    None => controller
                        .current_chat()
                        .map(|current| (current.id.clone(), current.name.clone())),
                };
                let Some((id, name)) = target else {
                    println!("\n  {}\n", style("No hay un chat que borrar.").yellow());
                    continue;
                };
                if !confirm(&mut chat_input, &format!("¿Borrar \"{name}\"?")).await {
                    println!("\n  {}\n", style("Cancelado.").dim());
                    continue;
                }
                if controller.delete_chat(&id).await {
                    info!(chat_id = %id, "chat deleted");
                    println!("\n  {} {}\n", style("Borrado:").dim(), name);
                    render_current(&controller, &renderer);
                } else {
                    println!(
                        "\n  {}\n",
                        style("No pude borrar el chat. Intenta de nuevo.").yellow()
                    );
                }
            }
            ChatCommand::Suggest(n) => {
                let suggestion = SUGGESTIONS[n - 1];
                println!("  {} {}", style("🧑 Tú").green().bold(), suggestion);
                send_and_render(&mut controller, &renderer, suggestion).await;
            }
            ChatCommand::Clear => chat_input.clear(),
            ChatCommand::Exit => {
                println!("\n  {}", style("Sesión terminada.").dim());
                break;
            }
            ChatCommand::Unknown(hint) => {
                println!(
                    "\n  {} {}\n",
                    style("?").yellow().bold(),
                    style(format!("{hint}. Escribe /help para ver los comandos.")).dim()
                );
            }
        }
    }

    Ok(())
}

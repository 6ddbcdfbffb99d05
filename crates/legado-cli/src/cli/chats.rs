//! Chat management commands: list and delete.
//!
//! Mirrors the sidebar of the web client: a table of chats with creation
//! dates, and deletion with a confirmation prompt.

use anyhow::{Context, Result};
use comfy_table::{presets, Cell, Color, ContentArrangement, Table};
use console::style;
use dialoguer::Confirm;

use legado_core::store::{ChatStore, IdentityStore};
use legado_types::chat::{ChatSummary, UserId};

use crate::state::AppState;

/// List chats for the cached user.
///
/// # Examples
///
/// ```bash
/// legado chats
/// legado chats --json
/// ```
pub async fn list_chats(state: &AppState, json: bool) -> Result<()> {
    let Some(user_id) = stored_user(state).await? else {
        print_no_user_hint(json);
        return Ok(());
    };

    let chats = state
        .store()
        .list_chats(&user_id)
        .await
        .context("No pude cargar tus chats")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&chats)?);
        return Ok(());
    }

    if chats.is_empty() {
        println!();
        println!(
            "  {} No tienes chats todavía. Empieza uno con: {}",
            style("i").blue().bold(),
            style("legado chat").yellow()
        );
        println!();
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("#").fg(Color::White),
        Cell::new("Nombre").fg(Color::White),
        Cell::new("Creado").fg(Color::White),
        Cell::new("Id").fg(Color::White),
    ]);

    for (position, chat) in chats.iter().enumerate() {
        let name = if chat.name.is_empty() {
            "(sin nombre)".to_string()
        } else {
            chat.name.clone()
        };

        let created = chat
            .created_at
            .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_default();

        table.add_row(vec![
            Cell::new((position + 1).to_string()).fg(Color::DarkGrey),
            Cell::new(name).fg(Color::Cyan),
            Cell::new(created).fg(Color::White),
            Cell::new(chat.id.as_str()).fg(Color::DarkGrey),
        ]);
    }

    println!();
    println!("{table}");
    println!();
    println!(
        "  {} chat{}",
        style(chats.len()).bold(),
        if chats.len() == 1 { "" } else { "s" }
    );
    println!();

    Ok(())
}

/// Delete a chat by its 1-based position, with confirmation.
///
/// # Examples
///
/// ```bash
/// legado delete 2
/// legado delete 2 --force
/// ```
pub async fn delete_chat(state: &AppState, index: usize, force: bool, json: bool) -> Result<()> {
    let Some(user_id) = stored_user(state).await? else {
        print_no_user_hint(json);
        return Ok(());
    };

    let store = state.store();
    let chats = store
        .list_chats(&user_id)
        .await
        .context("No pude cargar tus chats")?;

    let chat: &ChatSummary = index
        .checked_sub(1)
        .and_then(|i| chats.get(i))
        .with_context(|| format!("No existe el chat #{index} (tienes {})", chats.len()))?;

    if !force && !json {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "¿Seguro que quieres borrar el chat '{}'?",
                style(&chat.name).red().bold()
            ))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("  Cancelado.");
            return Ok(());
        }
    }

    store
        .delete_chat(&chat.id)
        .await
        .with_context(|| format!("No pude borrar el chat '{}'", chat.name))?;

    if json {
        println!(
            "{}",
            serde_json::json!({"deleted": true, "chat_id": chat.id.as_str()})
        );
    } else {
        println!(
            "  {} Chat '{}' borrado.",
            style("x").red().bold(),
            chat.name
        );
    }

    Ok(())
}

async fn stored_user(state: &AppState) -> Result<Option<UserId>> {
    let identity = state.identity();
    let user = identity
        .load()
        .await
        .context("No pude leer el identificador de usuario")?;
    Ok(user)
}

fn print_no_user_hint(json: bool) {
    if json {
        println!("{}", serde_json::json!({"chats": []}));
    } else {
        println!();
        println!(
            "  {} Aún no tienes usuario. Ejecuta {} para empezar.",
            style("i").blue().bold(),
            style("legado chat").yellow()
        );
        println!();
    }
}

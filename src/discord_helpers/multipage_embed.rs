/*
 * Embeds posted as reaction menus. A menu lives inside the interaction handler that
 * created it and ends when its message is deleted or nobody touched it for a while,
 * at which point the reactions are cleared so the message stops looking interactive.
 * Nothing is stored, so a restart simply leaves old menus inert.
 */

use std::time::Duration;

use serenity::all::{CommandInteraction, Context, CreateEmbed};

use crate::{
    discord_helpers::{command_response, InteractionSurface},
    menu::{DeletableMenu, MenuOutcome, PageMenu},
    nay, say,
};

/// Posts the first page and flips through the rest on ◀️ / ▶️.
pub async fn post_pages(
    ctx: &Context,
    cmd: &CommandInteraction,
    pages: Vec<CreateEmbed>,
    timeout: Duration,
) {
    let surface = InteractionSurface::new(ctx, cmd);
    let mut menu = match PageMenu::open(surface, cmd.user.id, pages, timeout).await {
        Ok(menu) => menu,
        Err(e) => {
            nay!("Failed to send message: {}", e);
            command_response(ctx, cmd, format!("Failed to send message: {}", e)).await;
            return;
        }
    };

    log_outcome("Page menu", menu.run().await);
}

/// Posts every embed and lets the caller remove them again with 🗑️.
pub async fn post_deletable(
    ctx: &Context,
    cmd: &CommandInteraction,
    embeds: Vec<CreateEmbed>,
    timeout: Duration,
) {
    let surface = InteractionSurface::new(ctx, cmd);
    let mut menu = match DeletableMenu::open(surface, cmd.user.id, &embeds, timeout).await {
        Ok(menu) => menu,
        Err(e) => {
            nay!("Failed to send message: {}", e);
            command_response(ctx, cmd, format!("Failed to send message: {}", e)).await;
            return;
        }
    };

    log_outcome("Deletable post", menu.run().await);
}

fn log_outcome(kind: &str, outcome: MenuOutcome) {
    match outcome {
        MenuOutcome::Deleted => say!("{} deleted by its author", kind),
        MenuOutcome::TimedOut => say!("{} timed out", kind),
        MenuOutcome::Failed => nay!("{} closed after an error", kind),
    }
}

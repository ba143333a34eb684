use serenity::all::{Command, CommandInteraction, Context, CreateCommand};
use serenity::builder::{CreateInteractionResponse, CreateInteractionResponseMessage};

use crate::nay;

mod interaction_surface;
pub mod multipage_embed;

pub use interaction_surface::InteractionSurface;

pub async fn command_response<S: Into<String>>(
    ctx: &Context,
    command: &CommandInteraction,
    msg: S,
) {
    let data = CreateInteractionResponseMessage::new().content(msg.into());
    let builder = CreateInteractionResponse::Message(data);
    if let Err(err) = command.create_response(&ctx.http, builder).await {
        nay!("Failed to respond to command: {}", err)
    }
}

pub async fn register_command(ctx: &Context, cmd: CreateCommand) {
    if let Err(e) = Command::create_global_command(&ctx.http, cmd).await {
        nay!("Failed to register a command: {}", e);
    }
}

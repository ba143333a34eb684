use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use serenity::all::{
    CommandInteraction, Context, CreateEmbed, CreateInteractionResponse,
    CreateInteractionResponseFollowup, CreateInteractionResponseMessage, EditMessage, MessageId,
    ReactionCollector, ReactionType, UserId,
};
use serenity::async_trait;
use serenity::http::HttpError;
use serenity::model::ModelError;

use crate::menu::{MenuSurface, ReactionEvent, SurfaceError};

const FORBIDDEN: u16 = 403;

/// Menu surface for the channel a slash command was used in.
///
/// The first message sent answers the command, later ones are follow-ups.
pub struct InteractionSurface<'a> {
    ctx: &'a Context,
    cmd: &'a CommandInteraction,
    responded: AtomicBool,
}

impl<'a> InteractionSurface<'a> {
    pub fn new(ctx: &'a Context, cmd: &'a CommandInteraction) -> Self {
        Self {
            ctx,
            cmd,
            responded: AtomicBool::new(false),
        }
    }
}

fn classify(err: serenity::Error) -> SurfaceError {
    let forbidden = match &err {
        serenity::Error::Http(HttpError::UnsuccessfulRequest(response)) => {
            response.status_code.as_u16() == FORBIDDEN
        }
        serenity::Error::Model(ModelError::InvalidPermissions { .. }) => true,
        _ => false,
    };
    if forbidden {
        SurfaceError::Forbidden(err.to_string())
    } else {
        SurfaceError::Failed(err.to_string())
    }
}

fn reaction(symbol: &str) -> ReactionType {
    ReactionType::Unicode(symbol.to_string())
}

#[async_trait]
impl MenuSurface for InteractionSurface<'_> {
    type Page = CreateEmbed;

    async fn send(&self, page: &CreateEmbed) -> Result<MessageId, SurfaceError> {
        if !self.responded.swap(true, Ordering::SeqCst) {
            let builder = CreateInteractionResponse::Message(
                CreateInteractionResponseMessage::new().embed(page.clone()),
            );
            self.cmd
                .create_response(&self.ctx.http, builder)
                .await
                .map_err(classify)?;
            // the response itself carries no message, it has to be fetched
            let message = self
                .cmd
                .get_response(&self.ctx.http)
                .await
                .map_err(classify)?;
            return Ok(message.id);
        }

        let builder = CreateInteractionResponseFollowup::new().embed(page.clone());
        let message = self
            .cmd
            .create_followup(&self.ctx.http, builder)
            .await
            .map_err(classify)?;
        Ok(message.id)
    }

    async fn edit(&self, message: MessageId, page: &CreateEmbed) -> Result<(), SurfaceError> {
        self.cmd
            .channel_id
            .edit_message(&self.ctx.http, message, EditMessage::new().embed(page.clone()))
            .await
            .map(|_| ())
            .map_err(classify)
    }

    async fn delete(&self, message: MessageId) -> Result<(), SurfaceError> {
        self.cmd
            .channel_id
            .delete_message(&self.ctx.http, message)
            .await
            .map_err(classify)
    }

    async fn add_marker(&self, message: MessageId, symbol: &str) -> Result<(), SurfaceError> {
        self.cmd
            .channel_id
            .create_reaction(&self.ctx.http, message, reaction(symbol))
            .await
            .map_err(classify)
    }

    async fn remove_marker(
        &self,
        message: MessageId,
        symbol: &str,
        user: Option<UserId>,
    ) -> Result<(), SurfaceError> {
        self.cmd
            .channel_id
            .delete_reaction(&self.ctx.http, message, user, reaction(symbol))
            .await
            .map_err(classify)
    }

    async fn clear_markers(&self, message: MessageId) -> Result<(), SurfaceError> {
        self.cmd
            .channel_id
            .delete_reactions(&self.ctx.http, message)
            .await
            .map_err(classify)
    }

    async fn await_reaction(&self, message: MessageId, timeout: Duration) -> Option<ReactionEvent> {
        let reaction = ReactionCollector::new(&self.ctx.shard)
            .message_id(message)
            .timeout(timeout)
            .await?;

        let emoji = match &reaction.emoji {
            ReactionType::Unicode(symbol) => symbol.clone(),
            other => other.to_string(),
        };
        Some(ReactionEvent {
            message: reaction.message_id,
            user: reaction.user_id,
            emoji,
        })
    }
}

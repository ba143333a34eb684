use std::sync::Arc;

use serenity::{
    all::{ActivityData, Context, EventHandler, Interaction, OnlineStatus, Ready, ResumedEvent},
    async_trait,
};

use crate::{
    commands,
    config::ConfigSettings,
    discord_helpers::{command_response, register_command},
    hey,
    library::Library,
    say, yay,
};

pub(crate) struct Handler {
    pub library: Arc<Library>,
    pub config: Arc<ConfigSettings>,
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        register_command(&ctx, commands::meditations::register()).await;
        register_command(&ctx, commands::enchiridion::register()).await;
        register_command(&ctx, commands::letters::register()).await;
        register_command(&ctx, commands::happylife::register()).await;
        register_command(&ctx, commands::shortness::register()).await;
        register_command(&ctx, commands::discourses::register()).await;
        register_command(&ctx, commands::anger::register()).await;
        register_command(&ctx, commands::toc::register()).await;
        register_command(&ctx, commands::random::register()).await;

        yay!("{} is connected!", ready.user.name);

        ctx.set_presence(
            Some(ActivityData::custom("Reading the Stoics")),
            OnlineStatus::Online,
        );
    }

    async fn resume(&self, _: Context, _: ResumedEvent) {
        hey!("Resumed");
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let Interaction::Command(command) = interaction else {
            return;
        };

        let command_name = command.data.name.as_str();
        let command_options = &command.data.options();
        let library = self.library.as_ref();
        let config = self.config.as_ref();
        say!("/{} from {}", command_name, command.user.name);

        match command_name {
            "meditations" => {
                commands::meditations::run(command_options, &ctx, &command, library, config).await;
            }
            "enchiridion" => {
                commands::enchiridion::run(command_options, &ctx, &command, library, config).await;
            }
            "letters" => {
                commands::letters::run(command_options, &ctx, &command, library, config).await;
            }
            "happylife" => {
                commands::happylife::run(command_options, &ctx, &command, library, config).await;
            }
            "shortness" => {
                commands::shortness::run(command_options, &ctx, &command, library, config).await;
            }
            "discourses" => {
                commands::discourses::run(command_options, &ctx, &command, library, config).await;
            }
            "anger" => {
                commands::anger::run(command_options, &ctx, &command, library, config).await;
            }
            "toc" => {
                commands::toc::run(command_options, &ctx, &command, library, config).await;
            }
            "random" => {
                commands::random::run(&ctx, &command, library, config).await;
            }
            _ => {
                command_response(&ctx, &command, "Unknown command!").await;
            }
        }
    }
}

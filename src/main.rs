use serenity::all::GatewayIntents;
use serenity::Client;
use std::env;
use std::sync::Arc;

use crate::config::ConfigSettings;
use crate::discord_handler::Handler;
use crate::library::Library;

pub mod chunker;
pub mod config;
pub mod library;
pub mod logging;
pub mod menu;
pub mod reference;

mod commands;
mod discord_handler;
mod discord_helpers;
mod helpers;

#[tokio::main]
async fn main() {
    yay!("Stoa Librarian is starting up!");

    if let Err(e) = dotenv::dotenv() {
        hey!("No .env file loaded ({}), reading the environment only", e);
    }

    let Ok(token) = env::var("DISCORD_TOKEN") else {
        nay!("DISCORD_TOKEN not found in environment");
        return;
    };

    let config = ConfigSettings::get();

    say!("Loading books from {}...", config.books_path().display());
    let library = match Library::load(config.books_path()) {
        Ok(library) => library,
        Err(e) => {
            nay!("Failed to load books: {}", e);
            return;
        }
    };
    say!("Books loaded!");

    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGE_REACTIONS
        | GatewayIntents::DIRECT_MESSAGE_REACTIONS;

    let Ok(mut client) = Client::builder(token, intents)
        .event_handler(Handler {
            library: Arc::new(library),
            config: Arc::new(config),
        })
        .await
    else {
        nay!("Error creating client");
        return;
    };

    let shard_manager = client.shard_manager.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            say!("Shutting down...");
            shard_manager.shutdown_all().await;
        }
    });

    if let Err(err) = client.start().await {
        nay!("Client error: {}", err);
    }
}

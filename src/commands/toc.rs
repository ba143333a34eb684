use serenity::all::{
    Colour, CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    CreateEmbed, CreateEmbedAuthor, Mentionable, ResolvedOption,
};

use crate::chunker::split_within;
use crate::commands::{argument, string_option, LookupError};
use crate::config::ConfigSettings;
use crate::discord_helpers::{command_response, multipage_embed};
use crate::helpers::number_pages;
use crate::library::Library;

pub async fn run(
    options: &[ResolvedOption<'_>],
    ctx: &Context,
    cmd: &CommandInteraction,
    library: &Library,
    config: &ConfigSettings,
) {
    let title = argument(string_option(options, "title")).unwrap_or_default();
    show(&title.to_lowercase(), ctx, cmd, library, config).await;
}

pub async fn show(
    title: &str,
    ctx: &Context,
    cmd: &CommandInteraction,
    library: &Library,
    config: &ConfigSettings,
) {
    let pages = match pages(library, title, config.max_embed_length()) {
        Ok(pages) => pages,
        Err(e) => {
            command_response(ctx, cmd, format!("{}, {}", cmd.user.mention(), e)).await;
            return;
        }
    };
    let Some(toc) = library.toc.get(title) else {
        return;
    };

    let mut embed = CreateEmbed::new()
        .title(format!("Table of Contents - {}", toc.name))
        .url(library.work_url(&toc.author, title))
        .color(Colour::ORANGE);
    if let Some(author) = library.author(&toc.author) {
        embed = embed.author(
            CreateEmbedAuthor::new(&author.name)
                .url(&author.url)
                .icon_url(&author.icon),
        );
    }

    let embeds = pages
        .iter()
        .map(|page| embed.clone().description(page))
        .collect();
    multipage_embed::post_pages(ctx, cmd, number_pages(embeds), config.multipage_timeout()).await;
}

/// One page per volume, each headed by the description. A volume too long for one
/// page continues on the next.
pub fn pages(library: &Library, title: &str, max_len: usize) -> Result<Vec<String>, LookupError> {
    let Some(toc) = library.toc.get(title) else {
        return Err(LookupError::NoTableOfContents(title.to_string()));
    };

    let mut pages = Vec::new();
    for (volume, chapters) in toc.volumes() {
        let page = format!(
            "{}\n\n__**{}**__\n{}",
            toc.description,
            volume,
            chapters.join("\n")
        );
        pages.extend(split_within(&page, max_len, &["\n"], true));
    }

    if pages.is_empty() {
        pages.push(toc.description.clone());
    }
    Ok(pages)
}

pub fn register() -> CreateCommand {
    CreateCommand::new("toc")
        .description("Table of contents of a book")
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, "title", "Which book")
                .required(true)
                .add_string_choice("Moral letters to Lucilius", "letters")
                .add_string_choice("The Discourses", "discourses"),
        )
        .dm_permission(true)
}

use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    ResolvedOption,
};

use crate::commands::{argument, respond_with, string_option, Layout, LookupError, Passage, PARAGRAPHS};
use crate::config::ConfigSettings;
use crate::library::{random_key, Library};
use crate::reference::normalize_key;

pub async fn run(
    options: &[ResolvedOption<'_>],
    ctx: &Context,
    cmd: &CommandInteraction,
    library: &Library,
    config: &ConfigSettings,
) {
    let looked_up = resolve(library, string_option(options, "chapter"));
    respond_with(looked_up, ctx, cmd, library, config).await;
}

pub fn resolve(library: &Library, chapter: Option<&str>) -> Result<Passage, LookupError> {
    let chapter = match argument(chapter) {
        Some(raw) => normalize_key(raw),
        None => random_key(&library.enchiridion).ok_or(LookupError::Empty("The Enchiridion"))?,
    };
    let Some(text) = library.enchiridion.get(&chapter) else {
        return Err(LookupError::NoChapter {
            chapter,
            title: "The Enchiridion",
        });
    };

    Ok(Passage {
        title: format!("Enchiridion {}", chapter),
        text: format!(
            "{}\n\n[Compare translations](https://enchiridion.tasuki.org/display:Code:ec,twh,pem,sw/section:{})",
            text.trim_end(),
            chapter
        ),
        url: library.work_url("epictetus", "enchiridion"),
        author: "epictetus",
        color: 0x00FF00,
        thumbnail: true,
        delimiters: PARAGRAPHS,
        layout: Layout::Stacked,
    })
}

pub fn register() -> CreateCommand {
    CreateCommand::new("enchiridion")
        .description("The Enchiridion by Epictetus (Oldfather's translation)")
        .add_option(CreateCommandOption::new(
            CommandOptionType::String,
            "chapter",
            "Chapter number, e.g. 34. Leave empty for a random chapter",
        ))
        .dm_permission(true)
}

use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    ResolvedOption,
};

use crate::commands::{argument, respond_with, string_option, Layout, LookupError, Passage, SENTENCES};
use crate::config::ConfigSettings;
use crate::library::{random_key, Library};
use crate::reference::{key_to_roman, normalize_key};

const TITLE: &str = "`Of a Happy Life`";

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
        None => random_key(&library.happylife).ok_or(LookupError::Empty(TITLE))?,
    };
    let Some(text) = library.happylife.get(&chapter) else {
        return Err(LookupError::NoChapter { chapter, title: TITLE });
    };

    let roman = key_to_roman(&chapter);
    Ok(Passage {
        title: format!("Of a Happy Life: Book {}", roman),
        text: text.clone(),
        url: format!("{}/Book_{}", library.work_url("seneca", "happylife"), roman),
        author: "seneca",
        color: 0x00FFFF,
        thumbnail: false,
        delimiters: SENTENCES,
        layout: Layout::Stacked,
    })
}

pub fn register() -> CreateCommand {
    CreateCommand::new("happylife")
        .description("Of a Happy Life by Seneca (Stewart's translation)")
        .add_option(CreateCommandOption::new(
            CommandOptionType::String,
            "chapter",
            "Chapter number, e.g. 12. Leave empty for a random chapter",
        ))
        .dm_permission(true)
}

use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    ResolvedOption,
};

use crate::commands::{argument, respond_with, string_option, Layout, LookupError, Passage, PARAGRAPHS};
use crate::config::ConfigSettings;
use crate::library::{random_chapter, Library};
use crate::reference::{key_to_roman, split_reference};

const TITLE: &str = "*Of Anger*";

pub async fn run(
    options: &[ResolvedOption<'_>],
    ctx: &Context,
    cmd: &CommandInteraction,
    library: &Library,
    config: &ConfigSettings,
) {
    let looked_up = resolve(library, string_option(options, "reference"));
    respond_with(looked_up, ctx, cmd, library, config).await;
}

pub fn resolve(library: &Library, reference: Option<&str>) -> Result<Passage, LookupError> {
    let (book, chapter) = match argument(reference) {
        Some(raw) => split_reference(raw).ok_or(LookupError::Malformed {
            example: "`2:10` for Book 2, Chapter 10",
        })?,
        None => random_chapter(&library.anger).ok_or(LookupError::Empty(TITLE))?,
    };

    let Some(chapters) = library.anger.get(&book) else {
        return Err(LookupError::NoBook { book, title: TITLE });
    };
    let Some(text) = chapters.get(&chapter) else {
        return Err(LookupError::NoChapterInBook {
            chapter,
            book,
            title: TITLE,
        });
    };

    let roman = key_to_roman(&book);
    Ok(Passage {
        title: format!("Of Anger: Book {} Chapter {}", roman, chapter),
        text: text.clone(),
        url: format!(
            "{}/Book_{}#{}.",
            library.work_url("seneca", "anger"),
            roman,
            key_to_roman(&chapter)
        ),
        author: "seneca",
        color: 0x00FFFF,
        thumbnail: false,
        delimiters: PARAGRAPHS,
        layout: Layout::Stacked,
    })
}

pub fn register() -> CreateCommand {
    CreateCommand::new("anger")
        .description("Of Anger by Seneca (Stewart's translation)")
        .add_option(CreateCommandOption::new(
            CommandOptionType::String,
            "reference",
            "Book and chapter, e.g. 2:10. Leave empty for a random chapter",
        ))
        .dm_permission(true)
}

use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    ResolvedOption,
};

use crate::commands::{argument, respond_with, string_option, Layout, LookupError, Passage, PARAGRAPHS};
use crate::config::ConfigSettings;
use crate::library::{random_chapter, Library};
use crate::reference::split_reference;

const TITLE: &str = "Meditations";

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
            example: "`5:23` for Book 5, Chapter 23",
        })?,
        None => random_chapter(&library.meditations).ok_or(LookupError::Empty(TITLE))?,
    };

    let Some(chapters) = library.meditations.get(&book) else {
        return Err(LookupError::NoBook { book, title: TITLE });
    };
    let Some(text) = chapters.get(&chapter) else {
        return Err(LookupError::NoChapterInBook {
            chapter,
            book,
            title: TITLE,
        });
    };

    let numbered = chapter
        .parse::<u32>()
        .map(|n| format!("{:02}", n))
        .unwrap_or_else(|_| chapter.clone());

    Ok(Passage {
        title: format!("Meditations {}.{}", book, chapter),
        text: format!(
            "{}\n\n[Other translations](https://www.stoicsource.com/aurelius/meditations/{}.{}/farquharson)",
            text.trim_end(),
            book,
            numbered
        ),
        url: format!("{}/Book_{}", library.work_url("aurelius", "meditations"), book),
        author: "aurelius",
        color: 0xFF0000,
        thumbnail: true,
        delimiters: PARAGRAPHS,
        layout: Layout::Stacked,
    })
}

pub fn register() -> CreateCommand {
    CreateCommand::new("meditations")
        .description("The Meditations by Marcus Aurelius (Farquharson's translation)")
        .add_option(CreateCommandOption::new(
            CommandOptionType::String,
            "reference",
            "Book and chapter, e.g. 5:23. Leave empty for a random chapter",
        ))
        .dm_permission(true)
}

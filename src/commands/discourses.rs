use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    ResolvedOption,
};

use crate::commands::{
    argument, respond_with, string_option, toc, Layout, LookupError, Passage, PARAGRAPHS,
};
use crate::config::ConfigSettings;
use crate::library::{random_chapter, Library};
use crate::reference::{key_to_roman, split_reference};

const TITLE: &str = "*The Discourses*";

pub async fn run(
    options: &[ResolvedOption<'_>],
    ctx: &Context,
    cmd: &CommandInteraction,
    library: &Library,
    config: &ConfigSettings,
) {
    let reference = string_option(options, "reference");
    if argument(reference) == Some("toc") {
        toc::show("discourses", ctx, cmd, library, config).await;
        return;
    }
    respond_with(resolve(library, reference), ctx, cmd, library, config).await;
}

pub fn resolve(library: &Library, reference: Option<&str>) -> Result<Passage, LookupError> {
    let (book, chapter) = match argument(reference) {
        Some(raw) => split_reference(raw).ok_or(LookupError::Malformed {
            example: "`1:21` for Book 1, Chapter 21",
        })?,
        None => random_chapter(&library.discourses).ok_or(LookupError::Empty(TITLE))?,
    };

    let Some(chapters) = library.discourses.get(&book) else {
        // only four of the eight books survived
        return Err(LookupError::NoBook { book, title: TITLE });
    };
    let Some(stored) = chapters.get(&chapter) else {
        return Err(LookupError::NoChapterInBook {
            chapter,
            book,
            title: TITLE,
        });
    };

    let (heading, body) = stored.split_once('\n').unwrap_or((stored.as_str(), ""));

    Ok(Passage {
        title: format!(
            "The Discourses \u{2013} Book {}, Chapter {}\n{}",
            key_to_roman(&book),
            chapter,
            heading.trim()
        ),
        text: body.trim_start().to_string(),
        url: format!(
            "{}/Book_{}/Chapter_{}",
            library.work_url("epictetus", "discourses"),
            book,
            chapter
        ),
        author: "epictetus",
        color: 0x00FF00,
        thumbnail: true,
        delimiters: PARAGRAPHS,
        layout: Layout::PagedWhenLong,
    })
}

pub fn register() -> CreateCommand {
    CreateCommand::new("discourses")
        .description("The Discourses by Epictetus (Oldfather's translation)")
        .add_option(CreateCommandOption::new(
            CommandOptionType::String,
            "reference",
            "Book and chapter, e.g. 1:21, or `toc` for the contents. Empty for a random chapter",
        ))
        .dm_permission(true)
}

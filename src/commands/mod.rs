use serenity::all::{CommandInteraction, Context, Mentionable, ResolvedOption, ResolvedValue};
use thiserror::Error;

use crate::{
    chunker::split_within,
    config::ConfigSettings,
    discord_helpers::{command_response, multipage_embed},
    helpers::{paged_embeds, stacked_embeds},
    library::Library,
    nay,
};

pub(crate) mod anger;
pub(crate) mod discourses;
pub(crate) mod enchiridion;
pub(crate) mod happylife;
pub(crate) mod letters;
pub(crate) mod meditations;
pub(crate) mod random;
pub(crate) mod shortness;
pub(crate) mod toc;

/// Paragraphs first, then sentences.
pub const PARAGRAPHS: &[&str] = &["\n", ". "];
pub const SENTENCES: &[&str] = &[". "];

/// Wrong input from the user. The message is shown to them as is.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LookupError {
    #[error("invalid formatting. The correct syntax is `<BOOK>:<CHAPTER>`, e.g., {example}.")]
    Malformed { example: &'static str },
    #[error("there is no Book `{book}` of {title}.")]
    NoBook { book: String, title: &'static str },
    #[error("there is no chapter `{chapter}` in Book `{book}` of {title}.")]
    NoChapterInBook {
        chapter: String,
        book: String,
        title: &'static str,
    },
    #[error("there is no chapter `{chapter}` in {title}.")]
    NoChapter { chapter: String, title: &'static str },
    #[error("there is no letter `{0}` of the Moral letters.")]
    NoLetter(String),
    #[error("there is no paragraph `{section}` in letter `{letter}` of the Moral letters.")]
    NoSection { section: String, letter: String },
    #[error("`{0}` is not a valid range.")]
    InvalidRange(String),
    #[error("no table of contents was found for `{0}`.")]
    NoTableOfContents(String),
    #[error("{0} has nothing to quote from right now.")]
    Empty(&'static str),
}

/// How a passage is laid out once it has been chunked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Every chunk is posted, the header goes on the first one.
    Stacked,
    /// Long passages become a page-flipping menu, short ones are stacked.
    PagedWhenLong,
}

/// A looked-up passage, ready to be chunked and rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Passage {
    pub title: String,
    pub text: String,
    pub url: String,
    pub author: &'static str,
    pub color: u32,
    pub thumbnail: bool,
    pub delimiters: &'static [&'static str],
    pub layout: Layout,
}

pub type Resolver = fn(&Library, Option<&str>) -> Result<Passage, LookupError>;

pub fn string_option<'a>(options: &'a [ResolvedOption<'a>], name: &str) -> Option<&'a str> {
    options.iter().find_map(|option| match option {
        ResolvedOption {
            name: option_name,
            value: ResolvedValue::String(value),
            ..
        } if *option_name == name => Some(*value),
        _ => None,
    })
}

pub fn bool_option(options: &[ResolvedOption<'_>], name: &str) -> bool {
    options.iter().any(|option| {
        matches!(
            option,
            ResolvedOption {
                name: option_name,
                value: ResolvedValue::Boolean(true),
                ..
            } if *option_name == name
        )
    })
}

/// Blank arguments count as no argument.
pub fn argument(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|r| !r.is_empty())
}

pub async fn respond_with(
    looked_up: Result<Passage, LookupError>,
    ctx: &Context,
    cmd: &CommandInteraction,
    library: &Library,
    config: &ConfigSettings,
) {
    match looked_up {
        Ok(passage) => send_passage(passage, ctx, cmd, library, config).await,
        Err(e) => command_response(ctx, cmd, format!("{}, {}", cmd.user.mention(), e)).await,
    }
}

pub async fn send_passage(
    passage: Passage,
    ctx: &Context,
    cmd: &CommandInteraction,
    library: &Library,
    config: &ConfigSettings,
) {
    let Some(author) = library.author(passage.author) else {
        nay!("No author data for {}", passage.author);
        command_response(ctx, cmd, "I could not find who wrote that, sorry!").await;
        return;
    };

    let chunks = split_within(
        &passage.text,
        config.max_embed_length(),
        passage.delimiters,
        true,
    );

    if passage.layout == Layout::PagedWhenLong && chunks.len() > 1 {
        let embeds = paged_embeds(&passage, author, &chunks);
        multipage_embed::post_pages(ctx, cmd, embeds, config.multipage_timeout()).await;
    } else {
        let embeds = stacked_embeds(&passage, author, &chunks);
        multipage_embed::post_deletable(ctx, cmd, embeds, config.deletable_timeout()).await;
    }
}

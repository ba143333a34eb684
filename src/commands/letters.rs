use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    ResolvedOption,
};

use crate::commands::{
    argument, bool_option, respond_with, string_option, toc, Layout, LookupError, Passage,
    PARAGRAPHS,
};
use crate::config::ConfigSettings;
use crate::library::{ordered_sections, random_volume, Library, Sections};
use crate::reference::{normalize_key, parse_range, split_reference};

pub async fn run(
    options: &[ResolvedOption<'_>],
    ctx: &Context,
    cmd: &CommandInteraction,
    library: &Library,
    config: &ConfigSettings,
) {
    let reference = string_option(options, "reference");
    if argument(reference) == Some("toc") {
        toc::show("letters", ctx, cmd, library, config).await;
        return;
    }
    let looked_up = resolve(library, reference, bool_option(options, "all"));
    respond_with(looked_up, ctx, cmd, library, config).await;
}

/// `99` is the whole letter, `99:3` one section and `99:3-6` a run of sections.
///
/// A whole letter that does not fit one embed is paged, unless `all` asks for every
/// part to be posted at once.
pub fn resolve(library: &Library, reference: Option<&str>, all: bool) -> Result<Passage, LookupError> {
    let (letter, section) = match argument(reference) {
        Some(raw) => match split_reference(raw) {
            Some((letter, section)) => (letter, Some(section)),
            None => (normalize_key(raw), None),
        },
        None => (
            random_volume(&library.letters).ok_or(LookupError::Empty("The Moral letters"))?,
            None,
        ),
    };

    let Some(sections) = library.letters.get(&letter) else {
        return Err(LookupError::NoLetter(letter));
    };

    let mut title = format!("Moral letters to Lucilius: Letter {}", letter);
    let (text, layout) = match &section {
        Some(section) => {
            title.push_str(&format!(", \u{a7}{}", section));
            (section_text(sections, &letter, section)?, Layout::Stacked)
        }
        None => {
            if let Some(name) = sections.get("0") {
                title.push_str(&format!("\n{}", name));
            }
            let text: String = ordered_sections(sections)
                .into_iter()
                .filter(|(key, _)| *key != "0")
                .map(|(_, text)| text)
                .collect();
            let layout = if all { Layout::Stacked } else { Layout::PagedWhenLong };
            (text, layout)
        }
    };

    Ok(Passage {
        title,
        text,
        url: format!("{}/Letter_{}", library.work_url("seneca", "letters"), letter),
        author: "seneca",
        color: 0x0000FF,
        thumbnail: false,
        delimiters: PARAGRAPHS,
        layout,
    })
}

fn section_text(sections: &Sections, letter: &str, section: &str) -> Result<String, LookupError> {
    if section.contains('-') {
        let valid = parse_range(section).filter(|(start, end)| {
            0 < *start
                && start < end
                && sections.contains_key(&start.to_string())
                && sections.contains_key(&end.to_string())
        });
        let Some((start, end)) = valid else {
            return Err(LookupError::InvalidRange(section.to_string()));
        };
        let joined = (start..=end)
            .filter_map(|n| sections.get(&n.to_string()))
            .map(String::as_str)
            .collect::<Vec<&str>>()
            .join(" ");
        return Ok(joined.trim_end().to_string());
    }

    let key = normalize_key(section);
    match sections.get(&key) {
        Some(text) if key != "0" => Ok(text.trim_end().to_string()),
        _ => Err(LookupError::NoSection {
            section: section.to_string(),
            letter: letter.to_string(),
        }),
    }
}

pub fn register() -> CreateCommand {
    CreateCommand::new("letters")
        .description("Moral letters to Lucilius by Seneca (Gummere's translation)")
        .add_option(CreateCommandOption::new(
            CommandOptionType::String,
            "reference",
            "Letter, section or range, e.g. 19, 99:3 or 99:3-6, or `toc` for the contents",
        ))
        .add_option(CreateCommandOption::new(
            CommandOptionType::Boolean,
            "all",
            "Post every page of a long letter at once instead of flipping through them",
        ))
        .dm_permission(true)
}

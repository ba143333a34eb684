use serenity::all::{Colour, CreateEmbed, CreateEmbedAuthor, CreateEmbedFooter};

use crate::commands::Passage;
use crate::library::Author;

pub fn craft_passage_embed(passage: &Passage, author: &Author, text: &str) -> CreateEmbed {
    CreateEmbed::new()
        .title(&passage.title)
        .description(text)
        .url(&passage.url)
        .color(Colour::new(passage.color))
        .author(
            CreateEmbedAuthor::new(&author.name)
                .url(&author.url)
                .icon_url(&author.icon),
        )
}

/// Header on the first chunk, continuation embeds carry only the text.
pub fn stacked_embeds(passage: &Passage, author: &Author, chunks: &[String]) -> Vec<CreateEmbed> {
    let mut embeds = Vec::with_capacity(chunks.len());
    for (i, chunk) in chunks.iter().enumerate() {
        if i == 0 {
            let mut embed = craft_passage_embed(passage, author, chunk);
            if passage.thumbnail {
                if let Some(thumbnail) = &author.thumbnail {
                    embed = embed.thumbnail(thumbnail);
                }
            }
            embeds.push(embed);
        } else {
            embeds.push(
                CreateEmbed::new()
                    .description(chunk)
                    .color(Colour::new(passage.color)),
            );
        }
    }
    embeds
}

/// Every page carries the full header and its page number.
pub fn paged_embeds(passage: &Passage, author: &Author, chunks: &[String]) -> Vec<CreateEmbed> {
    number_pages(
        chunks
            .iter()
            .map(|chunk| craft_passage_embed(passage, author, chunk))
            .collect(),
    )
}

pub fn number_pages(embeds: Vec<CreateEmbed>) -> Vec<CreateEmbed> {
    let pages = embeds.len();
    embeds
        .into_iter()
        .enumerate()
        .map(|(i, embed)| embed.footer(CreateEmbedFooter::new(page_footer(i, pages))))
        .collect()
}

pub fn page_footer(index: usize, pages: usize) -> String {
    format!("Page {} of {}", index + 1, pages)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footers_count_from_one() {
        assert_eq!(page_footer(0, 3), "Page 1 of 3");
        assert_eq!(page_footer(2, 3), "Page 3 of 3");
    }

    #[test]
    fn one_embed_per_chunk() {
        let library = crate::library::tests::fixture();
        let passage = crate::commands::enchiridion::resolve(&library, Some("5")).expect("chapter 5 exists");
        let author = library.author(passage.author).expect("epictetus exists");
        let chunks = vec!["one".to_string(), "two".to_string(), "three".to_string()];

        assert_eq!(stacked_embeds(&passage, author, &chunks).len(), 3);
        assert_eq!(paged_embeds(&passage, author, &chunks).len(), 3);
    }
}

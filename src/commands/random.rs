use rand::prelude::SliceRandom;
use serenity::all::{CommandInteraction, Context, CreateCommand};

use crate::commands::{
    anger, discourses, enchiridion, happylife, letters, meditations, respond_with, shortness,
    LookupError, Passage, Resolver,
};
use crate::config::ConfigSettings;
use crate::library::Library;
use crate::say;

static BOOKS: [(&str, Resolver); 7] = [
    ("the Meditations", meditations::resolve),
    ("the Enchiridion", enchiridion::resolve),
    ("the Moral letters", whole_letter),
    ("Of a Happy Life", happylife::resolve),
    ("On the shortness of life", shortness::resolve),
    ("the Discourses", discourses::resolve),
    ("Of Anger", anger::resolve),
];

fn whole_letter(library: &Library, reference: Option<&str>) -> Result<Passage, LookupError> {
    letters::resolve(library, reference, false)
}

pub async fn run(ctx: &Context, cmd: &CommandInteraction, library: &Library, config: &ConfigSettings) {
    let Some((name, resolve)) = BOOKS.choose(&mut rand::thread_rng()) else {
        return;
    };
    say!("Choosing a random passage from {}", name);
    respond_with(resolve(library, None), ctx, cmd, library, config).await;
}

pub fn register() -> CreateCommand {
    CreateCommand::new("random")
        .description("A random passage from a random book")
        .dm_permission(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::tests::fixture;

    #[test]
    fn every_book_has_something_to_quote() {
        let library = fixture();
        for (name, resolve) in BOOKS {
            let passage = resolve(&library, None).unwrap_or_else(|e| panic!("{}: {}", name, e));
            assert!(!passage.text.is_empty(), "{}", name);
        }
    }
}

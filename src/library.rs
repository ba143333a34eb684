use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use rand::prelude::SliceRandom;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

/// Chapter (or section) key -> text
pub type Sections = HashMap<String, String>;
/// Book key -> chapters
pub type Volumes = HashMap<String, Sections>;

#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("media.json has no entry for author `{0}`")]
    MissingAuthor(&'static str),
}

/// Author header data plus the source link of each of their works.
#[derive(Debug, Clone, Deserialize)]
pub struct Author {
    pub name: String,
    pub url: String,
    pub icon: String,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(flatten)]
    pub works: HashMap<String, String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TableOfContents {
    pub author: String,
    pub name: String,
    pub description: String,
    /// Volume -> chapter titles, in file order
    contents: serde_json::Map<String, serde_json::Value>,
}

impl TableOfContents {
    pub fn volumes(&self) -> Vec<(&str, Vec<&str>)> {
        self.contents
            .iter()
            .map(|(volume, chapters)| {
                let chapters = chapters
                    .as_array()
                    .map(|list| list.iter().filter_map(|c| c.as_str()).collect())
                    .unwrap_or_default();
                (volume.as_str(), chapters)
            })
            .collect()
    }
}

/// Every book the bot can quote from. Loaded once at startup and shared read-only.
#[derive(Debug, Clone)]
pub struct Library {
    pub meditations: Volumes,
    pub enchiridion: Sections,
    /// Section `0` of each letter holds its title
    pub letters: Volumes,
    pub happylife: Sections,
    pub shortness: Sections,
    /// The first line of each chapter is its title
    pub discourses: Volumes,
    pub anger: Volumes,
    pub media: HashMap<String, Author>,
    pub toc: HashMap<String, TableOfContents>,
}

pub const AUTHORS: [&str; 3] = ["aurelius", "epictetus", "seneca"];

impl Library {
    pub fn load(dir: &Path) -> Result<Self, LibraryError> {
        let library = Self {
            meditations: read_book(dir, "meditations")?,
            enchiridion: read_book(dir, "enchiridion")?,
            letters: read_book(dir, "letters")?,
            happylife: read_book(dir, "happylife")?,
            shortness: read_book(dir, "shortness")?,
            discourses: read_book(dir, "discourses")?,
            anger: read_book(dir, "anger")?,
            media: read_book(dir, "media")?,
            toc: read_book(dir, "toc")?,
        };

        if let Some(missing) = AUTHORS.iter().find(|a| !library.media.contains_key(**a)) {
            return Err(LibraryError::MissingAuthor(*missing));
        }

        Ok(library)
    }

    pub fn author(&self, key: &str) -> Option<&Author> {
        self.media.get(key)
    }

    /// Source link of one work, or the author's page when the work has none.
    pub fn work_url(&self, author: &str, work: &str) -> String {
        self.media
            .get(author)
            .map(|a| a.works.get(work).unwrap_or(&a.url).clone())
            .unwrap_or_default()
    }
}

fn read_book<T: DeserializeOwned>(dir: &Path, name: &str) -> Result<T, LibraryError> {
    let path = dir.join(format!("{}.json", name));
    let data = fs::read_to_string(&path).map_err(|source| LibraryError::Io {
        path: path.clone(),
        source,
    })?;
    serde_json::from_str(&data).map_err(|source| LibraryError::Json { path, source })
}

pub fn random_key(sections: &Sections) -> Option<String> {
    let keys: Vec<&String> = sections.keys().collect();
    keys.choose(&mut rand::thread_rng()).map(|k| k.to_string())
}

pub fn random_volume(volumes: &Volumes) -> Option<String> {
    let keys: Vec<&String> = volumes.keys().collect();
    keys.choose(&mut rand::thread_rng()).map(|k| k.to_string())
}

/// Every chapter of every book is equally likely.
pub fn random_chapter(volumes: &Volumes) -> Option<(String, String)> {
    let chapters: Vec<(&String, &String)> = volumes
        .iter()
        .flat_map(|(book, sections)| sections.keys().map(move |chapter| (book, chapter)))
        .collect();
    chapters
        .choose(&mut rand::thread_rng())
        .map(|(book, chapter)| (book.to_string(), chapter.to_string()))
}

/// Sections ordered by their number, non-numeric keys last.
pub fn ordered_sections(sections: &Sections) -> Vec<(&str, &str)> {
    let mut ordered: Vec<(&str, &str)> = sections
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();
    ordered.sort_by_key(|(k, _)| (k.parse::<u32>().unwrap_or(u32::MAX), k.to_string()));
    ordered
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use serde_json::json;

    fn from<T: DeserializeOwned>(value: serde_json::Value) -> T {
        serde_json::from_value(value).expect("fixture parses")
    }

    /// Small library shared by the command tests.
    pub(crate) fn fixture() -> Library {
        Library {
            meditations: from(json!({
                "2": { "1": "Begin the morning by saying to thyself.   ", "17": "Of human life the time is a point." },
                "5": { "23": "Often think of the rapidity with which things pass by." }
            })),
            enchiridion: from(json!({
                "1": "Some things are in our control and others not.",
                "5": "Men are disturbed not by things, but by the principles and notions which they form concerning things."
            })),
            letters: from(json!({
                "1": { "0": "On saving time", "1": "Continue to act thus. ", "2": "Hold every hour in your grasp. ", "3": "Nothing is ours, except time." },
                "99": { "0": "On consolation to the bereaved", "1": "One. ", "2": "Two. ", "3": "Three. ", "4": "Four. ", "5": "Five. ", "6": "Six." }
            })),
            happylife: from(json!({ "12": "All men wish to live happily." })),
            shortness: from(json!({ "13": "It would be tedious to mention all the men." })),
            discourses: from(json!({
                "1": { "21": "To those who wish to be admired\n\n  When a man holds his proper station in life." }
            })),
            anger: from(json!({ "2": { "10": "Anger is a short madness." } })),
            media: from(json!({
                "aurelius": {
                    "name": "Marcus Aurelius",
                    "url": "https://en.wikipedia.org/wiki/Marcus_Aurelius",
                    "icon": "https://example.org/aurelius.png",
                    "thumbnail": "https://example.org/aurelius-thumb.png",
                    "meditations": "https://en.wikisource.org/wiki/The_Meditations"
                },
                "epictetus": {
                    "name": "Epictetus",
                    "url": "https://en.wikipedia.org/wiki/Epictetus",
                    "icon": "https://example.org/epictetus.png",
                    "enchiridion": "https://en.wikisource.org/wiki/Manual",
                    "discourses": "https://en.wikisource.org/wiki/Discourses"
                },
                "seneca": {
                    "name": "Seneca",
                    "url": "https://en.wikipedia.org/wiki/Seneca_the_Younger",
                    "icon": "https://example.org/seneca.png",
                    "letters": "https://en.wikisource.org/wiki/Moral_letters_to_Lucilius",
                    "happylife": "https://en.wikisource.org/wiki/Of_a_Happy_Life",
                    "shortness": "https://en.wikisource.org/wiki/On_the_shortness_of_life",
                    "anger": "https://en.wikisource.org/wiki/Of_Anger"
                }
            })),
            toc: from(json!({
                "letters": {
                    "author": "seneca",
                    "name": "Moral letters to Lucilius",
                    "description": "Letters written by Seneca.",
                    "contents": {
                        "Volume I": ["1. On saving time", "2. On discursiveness in reading"],
                        "Volume II": ["66. On various aspects of virtue"],
                        "Volume III": ["93. On the quality, as contrasted with the length, of life"]
                    }
                }
            })),
        }
    }

    #[test]
    fn author_works_are_collected() {
        let library = fixture();
        let seneca = library.author("seneca").expect("seneca exists");
        assert_eq!(seneca.name, "Seneca");
        assert!(seneca.thumbnail.is_none());
        assert_eq!(
            library.work_url("seneca", "anger"),
            "https://en.wikisource.org/wiki/Of_Anger"
        );
        // no dedicated page, falls back to the author
        assert_eq!(
            library.work_url("aurelius", "letters"),
            "https://en.wikipedia.org/wiki/Marcus_Aurelius"
        );
        assert_eq!(library.work_url("plato", "republic"), "");
    }

    #[test]
    fn table_of_contents_keeps_file_order() {
        let library = fixture();
        let volumes = library.toc["letters"].volumes();
        let names: Vec<&str> = volumes.iter().map(|(v, _)| *v).collect();
        assert_eq!(names, vec!["Volume I", "Volume II", "Volume III"]);
        assert_eq!(volumes[0].1.len(), 2);
    }

    #[test]
    fn sections_are_ordered_numerically() {
        let sections: Sections = from(json!({ "10": "c", "2": "b", "0": "t", "1": "a" }));
        let keys: Vec<&str> = ordered_sections(&sections).iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["0", "1", "2", "10"]);
    }

    #[test]
    fn random_picks_come_from_the_book() {
        let library = fixture();
        for _ in 0..20 {
            let (book, chapter) = random_chapter(&library.meditations).expect("has chapters");
            assert!(library.meditations[&book].contains_key(&chapter));
            let key = random_key(&library.enchiridion).expect("has chapters");
            assert!(library.enchiridion.contains_key(&key));
        }
        assert!(random_chapter(&Volumes::new()).is_none());
        let letter = random_volume(&library.letters).expect("has letters");
        assert!(library.letters.contains_key(&letter));
    }

    #[test]
    fn loading_a_missing_directory_fails() {
        let err = Library::load(Path::new("./definitely/not/here")).expect_err("nothing to load");
        assert!(matches!(err, LibraryError::Io { .. }));
    }
}

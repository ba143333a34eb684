use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
    time::Duration,
};

use serde::{Deserialize, Serialize};

use crate::hey;

const CONFIG_PATH: &str = "./config.json";

fn default_books_path() -> PathBuf {
    PathBuf::from("books")
}

fn default_max_embed_length() -> usize {
    4096
}

fn default_multipage_timeout_secs() -> u64 {
    900
}

fn default_deletable_timeout_secs() -> u64 {
    60
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ConfigSettings {
    /// Directory holding the book json files
    #[serde(default = "default_books_path")]
    books_path: PathBuf,
    /// Longest description a single embed may carry
    #[serde(default = "default_max_embed_length")]
    max_embed_length: usize,
    /// Idle window of a page-flipping menu
    #[serde(default = "default_multipage_timeout_secs")]
    multipage_timeout_secs: u64,
    /// Idle window of a deletable post
    #[serde(default = "default_deletable_timeout_secs")]
    deletable_timeout_secs: u64,
}

impl Default for ConfigSettings {
    fn default() -> Self {
        Self {
            books_path: default_books_path(),
            max_embed_length: default_max_embed_length(),
            multipage_timeout_secs: default_multipage_timeout_secs(),
            deletable_timeout_secs: default_deletable_timeout_secs(),
        }
    }
}

impl ConfigSettings {
    pub fn get() -> Self {
        let path = Path::new(CONFIG_PATH);

        if !path.exists() {
            Self::generate(path);
            return Self::default();
        }

        let Ok(data) = fs::read_to_string(path) else {
            hey!("Failed to read {}, using defaults.", CONFIG_PATH);
            return Self::default();
        };

        Self::parse(&data)
    }

    /// Falls back to the defaults when the data is not valid config json.
    pub fn parse(data: &str) -> Self {
        match serde_json::from_str(data) {
            Ok(cfg) => cfg,
            Err(e) => {
                hey!("Failed to deserialize config data ({}), using defaults.", e);
                Self::default()
            }
        }
    }

    fn generate(path: &Path) {
        let Ok(mut file) = OpenOptions::new()
            .read(false)
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
        else {
            hey!("Failed to get file for config file.");
            return;
        };

        let Ok(data) = serde_json::to_string_pretty(&Self::default()) else {
            hey!("Failed to serialize config data.");
            return;
        };

        if let Err(e) = write!(file, "{}", data) {
            hey!("Failed to write to file for config: {}", e);
        }
    }

    pub fn books_path(&self) -> &Path {
        &self.books_path
    }

    pub fn max_embed_length(&self) -> usize {
        self.max_embed_length.max(1)
    }

    pub fn multipage_timeout(&self) -> Duration {
        Duration::from_secs(self.multipage_timeout_secs)
    }

    pub fn deletable_timeout(&self) -> Duration {
        Duration::from_secs(self.deletable_timeout_secs)
    }
}

use std::fs::{File, read};
use std::io::Write;
use std::path::Path;
use log::info;
use serde::{Deserialize, Serialize};

pub const TAGS_FILE: &str = "tags.json";

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct TagList {
    pub tags: Vec<String>,
}

impl TagList {
    /// Loads `tags.json`, creating it with an empty list when absent.
    pub fn load_or_init<T: AsRef<Path>>(file_path: T) -> anyhow::Result<Self> {
        if !file_path.as_ref().is_file() {
            let tags = Self::default();
            tags.save_to(&file_path)?;
            return Ok(tags);
        }

        let bytes = read(file_path)?;
        let tags = serde_json::from_slice(&bytes)?;

        Ok(tags)
    }

    pub fn save_to<T: AsRef<Path>>(&self, file_path: T) -> anyhow::Result<()> {
        let bytes = serde_json::to_vec_pretty(&self)?;
        let mut file = File::create(file_path)?;
        file.write_all(&bytes)?;

        Ok(())
    }

    pub fn add(&mut self, tag: &str) -> bool {
        if self.tags.iter().any(|entry| entry == tag) {
            return false;
        }

        self.tags.push(String::from(tag));

        true
    }
}

pub fn handle_tags(add: Option<String>) -> anyhow::Result<()> {
    let mut tags = TagList::load_or_init(TAGS_FILE)?;

    if let Some(tag) = add {
        if tags.add(&tag) {
            tags.save_to(TAGS_FILE)?;
            info!("Tag '{0}' added.", tag);
        } else {
            info!("Tag '{0}' already exists.", tag);
        }
    }

    for tag in &tags.tags {
        println!("{0}", tag);
    }

    Ok(())
}

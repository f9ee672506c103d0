use std::fs::{File, read};
use std::io::Write;
use std::path::Path;
use serde::{Deserialize, Serialize};

pub const HISTORY_FILE: &str = "history.json";
const MAX_ENTRIES: usize = 10;

/// Most-recently-used values for the three job inputs, kept beside the
/// program in `history.json`. Each list is front-loaded, deduplicated and
/// capped at ten entries.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct History {
    pub file_list: Vec<String>,
    pub source_folder: Vec<String>,
    pub destination_folder: Vec<String>,
}

impl History {
    pub fn load_default() -> Self {
        Self::load_from(HISTORY_FILE)
    }

    pub fn save_default(&self) -> anyhow::Result<()> {
        self.save_to(HISTORY_FILE)
    }

    pub fn load_from<T: AsRef<Path>>(file_path: T) -> Self {
        if !file_path.as_ref().is_file() {
            return Self::default();
        }

        read(file_path)
            .ok()
            .and_then(|bytes| serde_json::from_slice(&bytes).ok())
            .unwrap_or_default()
    }

    pub fn save_to<T: AsRef<Path>>(&self, file_path: T) -> anyhow::Result<()> {
        let bytes = serde_json::to_vec_pretty(&self)?;
        let mut file = File::create(file_path)?;
        file.write_all(&bytes)?;

        Ok(())
    }

    pub fn record_file_list(&mut self, value: &str) {
        record(&mut self.file_list, value);
    }

    pub fn record_source_folder(&mut self, value: &str) {
        record(&mut self.source_folder, value);
    }

    pub fn record_destination_folder(&mut self, value: &str) {
        record(&mut self.destination_folder, value);
    }
}

fn record(entries: &mut Vec<String>, value: &str) {
    entries.retain(|entry| entry != value);
    entries.insert(0, String::from(value));
    entries.truncate(MAX_ENTRIES);
}

pub fn handle_history() -> anyhow::Result<()> {
    let history = History::load_default();

    println!("File lists:");
    for entry in &history.file_list {
        println!("  {0}", entry);
    }
    println!("Source folders:");
    for entry in &history.source_folder {
        println!("  {0}", entry);
    }
    println!("Destination folders:");
    for entry in &history.destination_folder {
        println!("  {0}", entry);
    }

    Ok(())
}

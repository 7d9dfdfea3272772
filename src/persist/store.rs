//! JSON file store for plays and the scoreboard
//!
//! One directory holds `play-<date>.json` per day plus `scoreboard.json`.
//! Writes go through a temp file and an atomic rename; missing or corrupt
//! files read as empty, matching the reference's tolerant loads.

use super::records::{LeaderboardEntry, PlayRecord};
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

const SCOREBOARD_FILE: &str = "scoreboard.json";

/// Directory-backed store for persisted puzzle state
#[derive(Debug, Clone)]
pub struct Store {
    dir: PathBuf,
}

impl Store {
    /// Create a store rooted at a directory (created lazily on first write)
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The store's root directory
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn play_path(&self, date_key: &str) -> PathBuf {
        self.dir.join(format!("play-{date_key}.json"))
    }

    /// Load the saved play for a date, `None` if absent or unreadable JSON
    ///
    /// # Errors
    /// Returns an I/O error for filesystem failures other than the file not
    /// existing.
    pub fn load_play(&self, date_key: &str) -> io::Result<Option<PlayRecord>> {
        read_json(&self.play_path(date_key))
    }

    /// Save the play for a date, replacing any previous record
    ///
    /// # Errors
    /// Returns an I/O error if the directory or file cannot be written.
    pub fn save_play(&self, date_key: &str, record: &PlayRecord) -> io::Result<()> {
        self.write_json(&self.play_path(date_key), record)
    }

    /// Load the full scoreboard list, empty if absent or unreadable JSON
    ///
    /// # Errors
    /// Returns an I/O error for filesystem failures other than the file not
    /// existing.
    pub fn load_scoreboard(&self) -> io::Result<Vec<LeaderboardEntry>> {
        Ok(read_json(&self.dir.join(SCOREBOARD_FILE))?.unwrap_or_default())
    }

    /// Append one entry to the scoreboard
    ///
    /// The list is append-only; deduplication happens in the standings view.
    ///
    /// # Errors
    /// Returns an I/O error if the scoreboard cannot be read or written.
    pub fn append_entry(&self, entry: LeaderboardEntry) -> io::Result<Vec<LeaderboardEntry>> {
        let mut entries = self.load_scoreboard()?;
        entries.push(entry);
        self.write_json(&self.dir.join(SCOREBOARD_FILE), &entries)?;
        Ok(entries)
    }

    fn write_json<T: serde::Serialize>(&self, path: &Path, value: &T) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        let temp = NamedTempFile::new_in(&self.dir)?;
        let writer = BufWriter::new(&temp);
        serde_json::to_writer_pretty(writer, value).map_err(io::Error::other)?;
        temp.persist(path).map_err(|e| e.error)?;
        Ok(())
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> io::Result<Option<T>> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e),
    };
    // Corrupt JSON reads as absent rather than failing the command
    Ok(serde_json::from_reader(BufReader::new(file)).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn store() -> (tempfile::TempDir, Store) {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path().join("data"));
        (dir, store)
    }

    #[test]
    fn play_round_trips() {
        let (_dir, store) = store();
        let record = PlayRecord::new("GIG", 7, &['G', 'I', 'G']);

        store.save_play("2024-01-01", &record).unwrap();
        assert_eq!(store.load_play("2024-01-01").unwrap(), Some(record));
    }

    #[test]
    fn missing_play_reads_as_none() {
        let (_dir, store) = store();
        assert_eq!(store.load_play("2024-01-01").unwrap(), None);
    }

    #[test]
    fn plays_are_keyed_by_date() {
        let (_dir, store) = store();
        let record = PlayRecord::new("GIG", 7, &['G']);
        store.save_play("2024-01-01", &record).unwrap();
        assert_eq!(store.load_play("2024-01-02").unwrap(), None);
    }

    #[test]
    fn save_replaces_previous_play() {
        let (_dir, store) = store();
        store
            .save_play("2024-01-01", &PlayRecord::new("GIG", 7, &['G']))
            .unwrap();
        let better = PlayRecord::new("AX", 11, &['A']);
        store.save_play("2024-01-01", &better).unwrap();
        assert_eq!(store.load_play("2024-01-01").unwrap(), Some(better));
    }

    #[test]
    fn scoreboard_starts_empty_and_appends() {
        let (_dir, store) = store();
        assert!(store.load_scoreboard().unwrap().is_empty());

        let entry = LeaderboardEntry {
            name: "Anna".into(),
            word: "GIG".into(),
            score: 7,
            date: "2024-01-01".into(),
            avatar: None,
            ts: 1,
        };
        let after = store.append_entry(entry.clone()).unwrap();
        assert_eq!(after, vec![entry.clone()]);

        let mut second = entry;
        second.ts = 2;
        let after = store.append_entry(second).unwrap();
        assert_eq!(after.len(), 2);
        assert_eq!(store.load_scoreboard().unwrap().len(), 2);
    }

    #[test]
    fn corrupt_files_read_as_empty() {
        let (_dir, store) = store();
        fs::create_dir_all(store.dir()).unwrap();
        let mut f = File::create(store.dir().join(SCOREBOARD_FILE)).unwrap();
        f.write_all(b"{ not json").unwrap();
        let mut f = File::create(store.dir().join("play-2024-01-01.json")).unwrap();
        f.write_all(b"[oops").unwrap();

        assert!(store.load_scoreboard().unwrap().is_empty());
        assert_eq!(store.load_play("2024-01-01").unwrap(), None);
    }
}

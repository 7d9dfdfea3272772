//! Dictionary loading utilities
//!
//! Line-oriented word list files, one word per line, blanks skipped.

use super::Dictionary;
use std::fs;
use std::io;
use std::path::Path;

/// Load a dictionary from a word list file
///
/// Lines are trimmed and normalized; empty lines are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use daily_rack::dictionary::loader::load_from_file;
///
/// let dict = load_from_file("data/words_is.txt").unwrap();
/// println!("Loaded {} words", dict.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Dictionary> {
    let content = fs::read_to_string(path)?;
    Ok(Dictionary::new(
        content.lines().filter(|line| !line.trim().is_empty()),
    ))
}

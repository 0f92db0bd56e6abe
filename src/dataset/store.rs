use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::dataset::lexicon::Lexicon;

/// Marker that opens a language section in the dataset file.
const LANGUAGE_HEADER_PREFIX: &str = "Language,";

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("dataset i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("no language data loaded from the dataset")]
    EmptyDataset,
    #[error("language '{0}' was not found in the dataset")]
    LanguageNotFound(String),
    #[error("language '{0}' has no word line to append to")]
    MissingWordLine(String),
    #[error("language selection {0} is out of range")]
    LanguageIndexOutOfRange(usize),
}

/// Loads and persists the per-language word lists.
///
/// The dataset is a flat UTF-8 text file. A line starting with `Language,`
/// opens a section for the named language; the non-empty lines that follow,
/// up to the next header, hold that language's words as comma-separated
/// tokens. In practice each section is a single word line directly below its
/// header, and that is the line `append_word` extends.
pub struct DatasetStore {
    path: PathBuf,
}

impl DatasetStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parses the whole dataset into a [`Lexicon`].
    ///
    /// Words are trimmed, lower-cased and deduplicated per language; empty
    /// tokens are discarded. Fails when the file cannot be read or when
    /// parsing yields zero languages.
    pub fn load(&self) -> Result<Lexicon, DatasetError> {
        let content = fs::read_to_string(&self.path)?;
        let mut lexicon = Lexicon::new();
        let mut current_language: Option<usize> = None;

        for line in content.lines() {
            if line.starts_with(LANGUAGE_HEADER_PREFIX) {
                let name = line.split(',').nth(1).unwrap_or("").trim();
                current_language = Some(lexicon.begin_language(name));
            } else if let Some(index) = current_language {
                if line.trim().is_empty() {
                    continue;
                }
                for token in line.split(',') {
                    let word = token.trim();
                    if !word.is_empty() {
                        lexicon.add_word(index, &word.to_lowercase());
                    }
                }
            }
        }

        if lexicon.is_empty() {
            return Err(DatasetError::EmptyDataset);
        }
        Ok(lexicon)
    }

    /// Appends `,<word>` to the word line directly below the header of
    /// `language` and rewrites the dataset.
    ///
    /// No duplicate check is performed: appending the same word twice leaves
    /// two copies of it on the line. `load` collapses them again through set
    /// semantics, so the duplication is only visible in the file itself.
    pub fn append_word(&self, word: &str, language: &str) -> Result<(), DatasetError> {
        let content = fs::read_to_string(&self.path)?;
        let mut lines: Vec<String> = content.lines().map(str::to_string).collect();

        let header = format!("{LANGUAGE_HEADER_PREFIX}{language}");
        let header_index = lines
            .iter()
            .position(|line| line.starts_with(&header))
            .ok_or_else(|| DatasetError::LanguageNotFound(language.to_string()))?;

        let word_line = lines
            .get_mut(header_index + 1)
            .ok_or_else(|| DatasetError::MissingWordLine(language.to_string()))?;
        *word_line = format!("{},{}", word_line.trim(), word);

        let mut output = lines.join("\n");
        if content.ends_with('\n') {
            output.push('\n');
        }
        self.rewrite(&output)
    }

    /// Replaces the dataset contents via a temporary file in the same
    /// directory, so a failed write never truncates the dataset.
    fn rewrite(&self, content: &str) -> Result<(), DatasetError> {
        let parent = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        let mut temp_file = NamedTempFile::new_in(parent)?;
        temp_file.write_all(content.as_bytes())?;
        temp_file
            .persist(&self.path)
            .map_err(|e| DatasetError::Io(e.error))?;
        Ok(())
    }
}

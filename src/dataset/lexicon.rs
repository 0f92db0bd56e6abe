use rustc_hash::FxHashSet;

/// One language section of the dataset: the language name plus the set of
/// lowercase words known to belong to it.
#[derive(Debug, Clone)]
pub struct LanguageEntry {
    pub name: String,
    pub words: FxHashSet<String>,
}

/// The in-memory word lists for every known language.
///
/// Entries keep the order in which languages were first encountered while
/// parsing the dataset, so match statistics and tie reporting are stable
/// across runs. A word is allowed to belong to more than one language.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: Vec<LanguageEntry>,
}

impl Lexicon {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[LanguageEntry] {
        &self.entries
    }

    pub fn language_names(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.name.clone()).collect()
    }

    pub fn find_language(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.name == name)
    }

    /// Starts a new section for `name`, returning its index.
    ///
    /// If the language already exists its word set is cleared and its
    /// position kept, so a dataset with a repeated header never produces a
    /// duplicate key.
    pub fn begin_language(&mut self, name: &str) -> usize {
        if let Some(idx) = self.find_language(name) {
            self.entries[idx].words.clear();
            idx
        } else {
            self.entries.push(LanguageEntry {
                name: name.to_string(),
                words: FxHashSet::default(),
            });
            self.entries.len() - 1
        }
    }

    /// Adds a word to the language at `index`. Returns false when the index
    /// is out of range.
    pub fn add_word(&mut self, index: usize, word: &str) -> bool {
        match self.entries.get_mut(index) {
            Some(entry) => {
                entry.words.insert(word.to_string());
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, index: usize, word: &str) -> bool {
        self.entries
            .get(index)
            .is_some_and(|e| e.words.contains(word))
    }
}

use crate::dataset::lexicon::Lexicon;
use crate::dataset::store::{DatasetError, DatasetStore};
use crate::detector::prediction::{self, Prediction};
use crate::detector::scorer::{self, ScoreBoard};

/// Scoring output for one sentence.
pub struct Detection {
    pub score_board: ScoreBoard,
    pub unmatched_words: Vec<String>,
}

/// Ties the loaded lexicon to the dataset it came from.
///
/// Owning both the store and the lexicon keeps a single writer for the word
/// lists: every in-memory mutation goes through `classify_unmatched`, which
/// also drives the on-disk append.
pub struct LanguageDetector {
    store: DatasetStore,
    lexicon: Lexicon,
}

impl LanguageDetector {
    pub fn from_store(store: DatasetStore) -> Result<Self, DatasetError> {
        let lexicon = store.load()?;
        Ok(Self { store, lexicon })
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn language_names(&self) -> Vec<String> {
        self.lexicon.language_names()
    }

    pub fn detect(&self, sentence: &str) -> Detection {
        let (score_board, unmatched_words) = scorer::score(&self.lexicon, sentence);
        Detection {
            score_board,
            unmatched_words,
        }
    }

    pub fn predict(&self, score_board: &ScoreBoard) -> Prediction {
        prediction::predict(score_board)
    }

    /// Assigns an unmatched word to the language at `language_index`.
    ///
    /// The in-memory lexicon gains the word first, then the dataset append
    /// runs. A persistence failure is returned to the caller but the word
    /// stays known for the rest of the run; the file catches up the next
    /// time the append succeeds or the dataset is fixed by hand.
    pub fn classify_unmatched(
        &mut self,
        word: &str,
        language_index: usize,
    ) -> Result<(), DatasetError> {
        let language = match self.lexicon.entries().get(language_index) {
            Some(entry) => entry.name.clone(),
            None => return Err(DatasetError::LanguageIndexOutOfRange(language_index)),
        };
        self.lexicon.add_word(language_index, word);
        self.store.append_word(word, &language)
    }
}

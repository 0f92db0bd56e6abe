use crate::dataset::lexicon::Lexicon;
use crate::detector::normalizer::normalize;

/// Per-language match count for a single sentence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageScore {
    pub language: String,
    pub matches: u32,
}

/// Match counts for one detection request, one entry per known language in
/// lexicon order, rebuilt from scratch for every sentence.
#[derive(Debug, Clone, Default)]
pub struct ScoreBoard {
    pub scores: Vec<LanguageScore>,
}

impl ScoreBoard {
    pub fn max_matches(&self) -> u32 {
        self.scores.iter().map(|s| s.matches).max().unwrap_or(0)
    }
}

/// Scores `sentence` against every language in the lexicon.
///
/// Each normalized word increments the count of every language whose word set
/// contains it, so a word shared by several languages counts toward all of
/// them. Words found nowhere are returned as unmatched, in encounter order,
/// duplicates preserved.
pub fn score(lexicon: &Lexicon, sentence: &str) -> (ScoreBoard, Vec<String>) {
    let mut score_board = ScoreBoard {
        scores: lexicon
            .entries()
            .iter()
            .map(|entry| LanguageScore {
                language: entry.name.clone(),
                matches: 0,
            })
            .collect(),
    };
    let mut unmatched_words = Vec::new();

    let normalized = normalize(sentence);
    for word in normalized.split_whitespace() {
        let mut word_matched = false;
        for (index, entry) in lexicon.entries().iter().enumerate() {
            if entry.words.contains(word) {
                score_board.scores[index].matches += 1;
                word_matched = true;
            }
        }
        if !word_matched {
            unmatched_words.push(word.to_string());
        }
    }

    (score_board, unmatched_words)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_lexicon() -> Lexicon {
        let mut lexicon = Lexicon::new();
        let english = lexicon.begin_language("English");
        lexicon.add_word(english, "hello");
        let french = lexicon.begin_language("French");
        lexicon.add_word(french, "bonjour");
        lexicon
    }

    #[test]
    fn test_score_counts_repeated_matches() {
        let lexicon = test_lexicon();

        let (score_board, unmatched) = score(&lexicon, "hello hello bonjour");

        assert_eq!(score_board.scores.len(), 2);
        assert_eq!(score_board.scores[0].language, "English");
        assert_eq!(score_board.scores[0].matches, 2);
        assert_eq!(score_board.scores[1].language, "French");
        assert_eq!(score_board.scores[1].matches, 1);
        assert!(unmatched.is_empty());
    }

    #[test]
    fn test_score_normalizes_before_matching() {
        let lexicon = test_lexicon();

        let (score_board, unmatched) = score(&lexicon, "Hello! BONJOUR...");

        assert_eq!(score_board.scores[0].matches, 1);
        assert_eq!(score_board.scores[1].matches, 1);
        assert!(unmatched.is_empty());
    }

    #[test]
    fn test_score_shared_word_counts_for_every_language() {
        let mut lexicon = Lexicon::new();
        let english = lexicon.begin_language("English");
        lexicon.add_word(english, "a");
        let french = lexicon.begin_language("French");
        lexicon.add_word(french, "a");

        let (score_board, unmatched) = score(&lexicon, "a");

        assert_eq!(score_board.scores[0].matches, 1);
        assert_eq!(score_board.scores[1].matches, 1);
        assert!(unmatched.is_empty());
    }

    #[test]
    fn test_score_unknown_sentence_reports_tokens_in_order_with_duplicates() {
        let lexicon = test_lexicon();

        let (score_board, unmatched) = score(&lexicon, "Foo bar foo");

        assert_eq!(score_board.max_matches(), 0);
        assert_eq!(unmatched, vec!["foo", "bar", "foo"]);
    }

    #[test]
    fn test_score_empty_lexicon_leaves_everything_unmatched() {
        let lexicon = Lexicon::new();

        let (score_board, unmatched) = score(&lexicon, "hello");

        assert!(score_board.scores.is_empty());
        assert_eq!(score_board.max_matches(), 0);
        assert_eq!(unmatched, vec!["hello"]);
    }
}

use std::fmt;

use crate::detector::scorer::ScoreBoard;

/// Outcome of a detection request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prediction {
    /// Every count was zero, including the degenerate empty-lexicon case.
    NoMatch,
    /// Exactly one language attained the maximum count.
    Single { language: String, matches: u32 },
    /// Two or more languages tied at the maximum; `languages` follows lexicon
    /// insertion order, no further tie-break is applied.
    Tie {
        languages: Vec<String>,
        matches: u32,
    },
}

/// Picks the language(s) with the highest match count from `score_board`.
pub fn predict(score_board: &ScoreBoard) -> Prediction {
    let max_matches = score_board.max_matches();
    if max_matches == 0 {
        return Prediction::NoMatch;
    }

    let mut top_languages: Vec<String> = score_board
        .scores
        .iter()
        .filter(|s| s.matches == max_matches)
        .map(|s| s.language.clone())
        .collect();

    if top_languages.len() == 1 {
        Prediction::Single {
            language: top_languages.remove(0),
            matches: max_matches,
        }
    } else {
        Prediction::Tie {
            languages: top_languages,
            matches: max_matches,
        }
    }
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Prediction::NoMatch => {
                write!(f, "Language detection unavailable - no matches found")
            }
            Prediction::Single { language, matches } => {
                write!(f, "Detected language: {language} ({matches} words matched)")
            }
            Prediction::Tie { languages, matches } => {
                write!(
                    f,
                    "Multiple possible languages detected: {} ({matches} words matched in each)",
                    languages.join(", ")
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detector::scorer::LanguageScore;

    fn board(counts: &[(&str, u32)]) -> ScoreBoard {
        ScoreBoard {
            scores: counts
                .iter()
                .map(|(language, matches)| LanguageScore {
                    language: language.to_string(),
                    matches: *matches,
                })
                .collect(),
        }
    }

    #[test]
    fn test_predict_all_zero_counts_is_no_match() {
        assert_eq!(predict(&board(&[("English", 0), ("French", 0)])), Prediction::NoMatch);
    }

    #[test]
    fn test_predict_empty_board_is_no_match() {
        assert_eq!(predict(&board(&[])), Prediction::NoMatch);
    }

    #[test]
    fn test_predict_single_winner() {
        let prediction = predict(&board(&[("English", 2), ("French", 1)]));

        assert_eq!(
            prediction,
            Prediction::Single {
                language: "English".to_string(),
                matches: 2
            }
        );
    }

    #[test]
    fn test_predict_tie_reports_all_in_lexicon_order() {
        let prediction = predict(&board(&[("English", 1), ("French", 1), ("Spanish", 0)]));

        assert_eq!(
            prediction,
            Prediction::Tie {
                languages: vec!["English".to_string(), "French".to_string()],
                matches: 1
            }
        );
    }

    #[test]
    fn test_prediction_display_strings() {
        assert_eq!(
            predict(&board(&[("English", 0)])).to_string(),
            "Language detection unavailable - no matches found"
        );
        assert_eq!(
            predict(&board(&[("English", 2), ("French", 1)])).to_string(),
            "Detected language: English (2 words matched)"
        );
        assert_eq!(
            predict(&board(&[("English", 1), ("French", 1)])).to_string(),
            "Multiple possible languages detected: English, French (1 words matched in each)"
        );
    }
}

/// Lower-cases `text` and strips ASCII punctuation, keeping apostrophes so
/// contractions like "don't" survive as a single token. Pure function; the
/// caller splits the result on whitespace to get the word list.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|&c| !c.is_ascii_punctuation() || c == '\'')
        .collect()
}

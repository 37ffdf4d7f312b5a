/// Split text into words on the ASCII space character.
///
/// Runs of spaces never yield empty words. Tabs, newlines and other
/// whitespace are ordinary word characters; no case folding or
/// punctuation stripping is applied.
pub fn split_into_words(text: &str) -> Vec<&str> {
    text.split(' ').filter(|w| !w.is_empty()).collect()
}

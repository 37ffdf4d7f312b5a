use crate::tokenizer::split_into_words;
use std::collections::HashSet;

/// Terms dropped from both documents and queries before any other processing.
#[derive(Debug, Clone, Default)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    pub fn new() -> Self { Self::default() }

    pub fn from_text(text: &str) -> Self {
        let mut stop_words = Self::new();
        stop_words.extend_from_text(text);
        stop_words
    }

    /// Add every word of `text` to the set. Repeated calls union.
    pub fn extend_from_text(&mut self, text: &str) {
        for word in split_into_words(text) {
            if !self.words.contains(word) {
                self.words.insert(word.to_string());
            }
        }
    }

    pub fn contains(&self, word: &str) -> bool { self.words.contains(word) }

    pub fn len(&self) -> usize { self.words.len() }

    pub fn is_empty(&self) -> bool { self.words.is_empty() }

    /// Keep only the tokens that are not stop words, preserving order.
    pub fn filter<'a, I>(&self, tokens: I) -> Vec<&'a str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        tokens.into_iter().filter(|w| !self.contains(w)).collect()
    }

    pub fn split_into_words_no_stop<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.filter(split_into_words(text))
    }
}

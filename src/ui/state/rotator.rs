// SPDX-License-Identifier: MPL-2.0
//! Rotating headline state.
//!
//! Exactly one word is current at a time; every tick advances to the next
//! word, wrapping at the end. The tick itself comes from a `time::every`
//! subscription owned by the app, so dropping the state (or replacing the
//! word list) is all the cleanup there is.

use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordRotator {
    words: Vec<String>,
    index: usize,
    interval: Duration,
}

impl WordRotator {
    /// Starts at the first word. An empty list yields no current word and
    /// ticks are no-ops; callers that need a guarantee validate upstream.
    #[must_use]
    pub fn new(words: Vec<String>, interval: Duration) -> Self {
        Self {
            words,
            index: 0,
            interval,
        }
    }

    /// The word currently displayed.
    #[must_use]
    pub fn current(&self) -> Option<&str> {
        self.words.get(self.index).map(String::as_str)
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Advances to the next word, wrapping at the end of the list.
    pub fn advance(&mut self) {
        if !self.words.is_empty() {
            self.index = (self.index + 1) % self.words.len();
        }
    }

    /// Replaces the word list and restarts from the first word.
    pub fn set_words(&mut self, words: Vec<String>) {
        self.words = words;
        self.index = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rotator(words: &[&str]) -> WordRotator {
        WordRotator::new(
            words.iter().map(|w| w.to_string()).collect(),
            Duration::from_millis(2_500),
        )
    }

    #[test]
    fn starts_at_first_word() {
        let rotator = rotator(&["a", "b", "c"]);
        assert_eq!(rotator.current(), Some("a"));
        assert_eq!(rotator.index(), 0);
    }

    #[test]
    fn k_ticks_land_on_k_mod_n() {
        for n in 1..=5 {
            let words: Vec<String> = (0..n).map(|i| format!("w{i}")).collect();
            for k in 0..17 {
                let mut rotator = WordRotator::new(words.clone(), Duration::from_secs(1));
                for _ in 0..k {
                    rotator.advance();
                }
                assert_eq!(rotator.index(), k % n, "n={n} k={k}");
            }
        }
    }

    #[test]
    fn advance_wraps_around() {
        let mut rotator = rotator(&["a", "b"]);
        rotator.advance();
        assert_eq!(rotator.current(), Some("b"));
        rotator.advance();
        assert_eq!(rotator.current(), Some("a"));
    }

    #[test]
    fn empty_list_is_inert() {
        let mut rotator = rotator(&[]);
        assert_eq!(rotator.current(), None);
        rotator.advance();
        assert_eq!(rotator.current(), None);
    }

    #[test]
    fn set_words_restarts_from_zero() {
        let mut rotator = rotator(&["a", "b", "c"]);
        rotator.advance();
        rotator.advance();
        rotator.set_words(vec!["x".into(), "y".into()]);
        assert_eq!(rotator.current(), Some("x"));
    }
}

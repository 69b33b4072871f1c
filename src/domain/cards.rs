//! Click-to-reveal content cards

use std::collections::BTreeSet;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardState {
    Hidden,
    Revealed,
}

impl fmt::Display for CardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardState::Hidden => f.write_str("hidden"),
            CardState::Revealed => f.write_str("revealed"),
        }
    }
}

/// Reveal state of the cards present on a page. Cards start hidden.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevealCards {
    known: BTreeSet<String>,
    revealed: BTreeSet<String>,
}

impl RevealCards {
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            known: ids.into_iter().map(Into::into).collect(),
            revealed: BTreeSet::new(),
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.known.contains(id)
    }

    /// Flip a card and return its new state.
    ///
    /// Returns `None` and changes nothing when no card has this id.
    pub fn toggle(&mut self, id: &str) -> Option<CardState> {
        if !self.known.contains(id) {
            return None;
        }
        if self.revealed.remove(id) {
            Some(CardState::Hidden)
        } else {
            self.revealed.insert(id.to_string());
            Some(CardState::Revealed)
        }
    }

    pub fn state(&self, id: &str) -> CardState {
        if self.revealed.contains(id) {
            CardState::Revealed
        } else {
            CardState::Hidden
        }
    }

    pub fn is_revealed(&self, id: &str) -> bool {
        self.revealed.contains(id)
    }

    /// Ids of revealed cards in sorted order.
    pub fn revealed(&self) -> impl Iterator<Item = &str> {
        self.revealed.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_state() {
        let mut cards = RevealCards::new(["bubble-sort"]);
        assert_eq!(cards.state("bubble-sort"), CardState::Hidden);
        assert_eq!(cards.toggle("bubble-sort"), Some(CardState::Revealed));
        assert!(cards.is_revealed("bubble-sort"));
        assert_eq!(cards.toggle("bubble-sort"), Some(CardState::Hidden));
        assert!(!cards.is_revealed("bubble-sort"));
    }

    #[test]
    fn test_cards_are_independent() {
        let mut cards = RevealCards::new(["a", "b", "c"]);
        cards.toggle("b");
        cards.toggle("a");
        cards.toggle("c");
        cards.toggle("c");
        assert_eq!(cards.revealed().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn test_unknown_card_is_ignored() {
        let mut cards = RevealCards::new(["a"]);
        assert_eq!(cards.toggle("missing"), None);
        assert!(!cards.is_revealed("missing"));
        assert!(!cards.contains("missing"));
        assert_eq!(cards.revealed().count(), 0);
    }
}

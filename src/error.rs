//! Error types for the Solitaire library.

use thiserror::Error;

use crate::card::Card;

/// The structural reason a candidate deck was rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckDefect {
    /// The deck does not hold exactly 28 cards.
    #[error("expected {expected} cards, got {actual}")]
    WrongSize {
        /// Required number of cards
        expected: usize,
        /// Number of cards offered
        actual: usize,
    },
    /// A value lies outside 1..=28.
    #[error("card value {0} is outside 1..=28")]
    OutOfRange(u32),
    /// One of the two jokers is absent.
    #[error("joker {0} is missing")]
    MissingJoker(Card),
    /// A value appears more than once.
    #[error("card {0} appears more than once")]
    Duplicate(Card),
}

/// Errors produced by the Solitaire library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolitaireError {
    /// The deck violates the 28-card structural invariant.
    #[error("malformed deck: {0}")]
    MalformedDeck(DeckDefect),

    /// No cards were supplied.
    #[error("deck is empty")]
    EmptyDeck,

    /// A single card has no bottom-minus-one segment to cut.
    #[error("deck holds a single card")]
    SingletonDeck,

    /// A deck source contained something other than an integer.
    #[error("invalid deck token: {0:?}")]
    InvalidToken(String),

    /// Reading a deck source failed (message kept for comparability).
    #[error("failed to read deck: {0}")]
    Io(String),

    /// A keystream value outside 1..=26 was handed to the letter codec.
    #[error("keystream value {0} is outside 1..=26")]
    InvalidKey(u8),

    /// The letter codec was handed a non-alphabetic character.
    #[error("{0:?} is not an ASCII letter")]
    NotALetter(char),
}

impl From<std::io::Error> for SolitaireError {
    fn from(err: std::io::Error) -> Self {
        SolitaireError::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_wrong_size() {
        let err = SolitaireError::MalformedDeck(DeckDefect::WrongSize {
            expected: 28,
            actual: 27,
        });
        assert_eq!(format!("{}", err), "malformed deck: expected 28 cards, got 27");
    }

    #[test]
    fn test_display_missing_joker() {
        let err = SolitaireError::MalformedDeck(DeckDefect::MissingJoker(Card::JOKER_B));
        assert_eq!(format!("{}", err), "malformed deck: joker 28 is missing");
    }

    #[test]
    fn test_display_out_of_range() {
        let err = SolitaireError::MalformedDeck(DeckDefect::OutOfRange(29));
        assert_eq!(
            format!("{}", err),
            "malformed deck: card value 29 is outside 1..=28"
        );
    }

    #[test]
    fn test_display_deck_defect() {
        let defect = DeckDefect::Duplicate(Card::new(5).unwrap());
        assert_eq!(format!("{}", defect), "card 5 appears more than once");
        let err: &dyn std::error::Error = &defect;
        assert!(err.source().is_none());
    }

    #[test]
    fn test_display_small_decks() {
        assert_eq!(format!("{}", SolitaireError::EmptyDeck), "deck is empty");
        assert_eq!(
            format!("{}", SolitaireError::SingletonDeck),
            "deck holds a single card"
        );
    }

    #[test]
    fn test_display_codec_errors() {
        assert_eq!(
            format!("{}", SolitaireError::InvalidKey(27)),
            "keystream value 27 is outside 1..=26"
        );
        assert_eq!(
            format!("{}", SolitaireError::NotALetter('7')),
            "'7' is not an ASCII letter"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "truncated");
        let err: SolitaireError = io.into();
        assert_eq!(err, SolitaireError::Io("truncated".to_string()));
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(SolitaireError::EmptyDeck, SolitaireError::EmptyDeck);
        assert_ne!(SolitaireError::EmptyDeck, SolitaireError::SingletonDeck);
    }
}

//! Card values of the 28-card Solitaire deck.
//!
//! Values 1..=26 are the numbered cards (one per letter of the alphabet),
//! 27 is Joker A and 28 is Joker B.

use std::fmt;

/// Number of cards in a deck.
pub const DECK_SIZE: usize = 28;

/// Number of letters (and numbered cards).
pub const ALPHABET_LEN: u8 = 26;

/// A single card, holding a value in 1..=28.
///
/// Cards are only created through [`Card::new`] or the joker constants, so a
/// `Card` never holds an out-of-range value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Card(pub(crate) u8);

impl Card {
    /// Joker A (value 27). Moves one position per cycle.
    pub const JOKER_A: Card = Card(27);

    /// Joker B (value 28). Moves two positions per cycle.
    pub const JOKER_B: Card = Card(28);

    /// Returns the card with the given value, or `None` outside 1..=28.
    ///
    /// # Examples
    ///
    /// ```
    /// use solitaire::Card;
    ///
    /// assert_eq!(Card::new(28), Some(Card::JOKER_B));
    /// assert_eq!(Card::new(0), None);
    /// ```
    pub const fn new(value: u8) -> Option<Card> {
        if value >= 1 && value as usize <= DECK_SIZE {
            Some(Card(value))
        } else {
            None
        }
    }

    /// Raw face value, 1..=28.
    pub const fn value(self) -> u8 {
        self.0
    }

    /// True for either joker.
    pub const fn is_joker(self) -> bool {
        self.0 > ALPHABET_LEN
    }

    /// The value used when counting down the deck: both jokers count as 27.
    ///
    /// # Examples
    ///
    /// ```
    /// use solitaire::Card;
    ///
    /// assert_eq!(Card::JOKER_A.count_value(), 27);
    /// assert_eq!(Card::JOKER_B.count_value(), 27);
    /// assert_eq!(Card::new(5).unwrap().count_value(), 5);
    /// ```
    pub const fn count_value(self) -> usize {
        if self.0 == Card::JOKER_B.0 {
            Card::JOKER_A.0 as usize
        } else {
            self.0 as usize
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

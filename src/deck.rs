//! Deck: the 28-card circular sequence driving the keystream.
//!
//! The deck is held in a fixed array rather than as linked nodes. Slot 0 is
//! the top card and slot 27 is the bottom card (the rear, or anchor); the
//! successor of slot `i` is slot `(i + 1) % 28`. Every rearrangement is an
//! in-place slice rotation, so no card is ever created or destroyed after
//! construction.
//!
//! A [`Deck`] can only be obtained through a validating constructor, which
//! makes a structurally invalid deck unrepresentable.

use std::fmt;
use std::io::Read;
use std::str::FromStr;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::card::{Card, DECK_SIZE};
use crate::error::{DeckDefect, SolitaireError};

/// Index of the bottom (anchor) slot.
pub(crate) const BOTTOM: usize = DECK_SIZE - 1;

/// A well-formed 28-card deck: every value in 1..=28 exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Deck {
    pub(crate) cards: [Card; DECK_SIZE],
}

impl Default for Deck {
    fn default() -> Self {
        Self::ordered()
    }
}

impl Deck {
    /// Creates the unshuffled deck `1, 2, ..., 26, 27, 28` (jokers last).
    ///
    /// # Examples
    ///
    /// ```
    /// use solitaire::{Card, Deck};
    ///
    /// let deck = Deck::ordered();
    /// assert_eq!(deck.top().value(), 1);
    /// assert_eq!(deck.bottom(), Card::JOKER_B);
    /// ```
    pub fn ordered() -> Self {
        let mut cards = [Card::JOKER_A; DECK_SIZE];
        for (slot, value) in cards.iter_mut().zip(1u8..) {
            *slot = Card(value);
        }
        Deck { cards }
    }

    /// Builds a deck from values listed top to bottom.
    ///
    /// # Parameters
    /// - `values`: Card values, first element is the top card.
    ///
    /// # Errors
    /// - [`SolitaireError::EmptyDeck`] / [`SolitaireError::SingletonDeck`]
    ///   for zero or one value.
    /// - [`SolitaireError::MalformedDeck`] if the values are not exactly a
    ///   permutation of 1..=28.
    ///
    /// # Examples
    ///
    /// ```
    /// use solitaire::{Deck, SolitaireError};
    ///
    /// let values: Vec<u32> = (1..=28).rev().collect();
    /// let deck = Deck::from_values(&values).unwrap();
    /// assert_eq!(deck.top().value(), 28);
    ///
    /// assert_eq!(Deck::from_values(&[]), Err(SolitaireError::EmptyDeck));
    /// ```
    pub fn from_values(values: &[u32]) -> Result<Self, SolitaireError> {
        match values.len() {
            0 => return Err(SolitaireError::EmptyDeck),
            1 => return Err(SolitaireError::SingletonDeck),
            n if n != DECK_SIZE => {
                return Err(reject(DeckDefect::WrongSize {
                    expected: DECK_SIZE,
                    actual: n,
                }))
            }
            _ => {}
        }

        let mut cards = [Card::JOKER_A; DECK_SIZE];
        for (slot, &value) in cards.iter_mut().zip(values) {
            *slot = u8::try_from(value)
                .ok()
                .and_then(Card::new)
                .ok_or_else(|| reject(DeckDefect::OutOfRange(value)))?;
        }

        let mut seen = [0u8; DECK_SIZE + 1];
        for card in &cards {
            seen[card.value() as usize] += 1;
        }
        for joker in [Card::JOKER_A, Card::JOKER_B] {
            if seen[joker.value() as usize] == 0 {
                return Err(reject(DeckDefect::MissingJoker(joker)));
            }
        }
        if let Some(card) = cards.iter().find(|c| seen[c.value() as usize] > 1) {
            return Err(reject(DeckDefect::Duplicate(*card)));
        }

        Ok(Deck { cards })
    }

    /// Builds a uniformly shuffled deck from the given random source.
    ///
    /// The source is passed in explicitly so that a seeded generator yields
    /// a reproducible deck.
    ///
    /// # Examples
    ///
    /// ```
    /// use rand::rngs::StdRng;
    /// use rand::SeedableRng;
    /// use solitaire::Deck;
    ///
    /// let a = Deck::shuffled(&mut StdRng::seed_from_u64(9));
    /// let b = Deck::shuffled(&mut StdRng::seed_from_u64(9));
    /// assert_eq!(a, b);
    /// ```
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::ordered();
        deck.cards.shuffle(rng);
        deck
    }

    /// Reads a deck from whitespace separated integers (the deck-file format).
    ///
    /// # Errors
    /// [`SolitaireError::Io`] if reading fails, plus every error of
    /// [`Deck::from_str`](FromStr::from_str).
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, SolitaireError> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        text.parse()
    }

    /// The top card (slot 0).
    pub fn top(&self) -> Card {
        self.cards[0]
    }

    /// The bottom card (the anchor, slot 27).
    pub fn bottom(&self) -> Card {
        self.cards[BOTTOM]
    }

    /// The cards from top to bottom.
    pub fn cards(&self) -> &[Card; DECK_SIZE] {
        &self.cards
    }

    /// The card values from top to bottom.
    pub fn values(&self) -> [u8; DECK_SIZE] {
        self.cards.map(Card::value)
    }

    /// Position of `card` counted from the top (0-based).
    pub fn position(&self, card: Card) -> usize {
        self.cards
            .iter()
            .position(|&c| c == card)
            .expect("well-formed deck holds every card")
    }

    /// The card `m` positions below the top, where `m` is the top card's
    /// count value. This is the keystream candidate.
    pub fn candidate(&self) -> Card {
        self.cards[self.top().count_value()]
    }

    /// Checks the structural invariant: every value 1..=28 exactly once.
    pub fn is_well_formed(&self) -> bool {
        let mut seen = [false; DECK_SIZE + 1];
        for card in &self.cards {
            let value = card.value() as usize;
            if value == 0 || value > DECK_SIZE || seen[value] {
                return false;
            }
            seen[value] = true;
        }
        true
    }
}

fn reject(defect: DeckDefect) -> SolitaireError {
    tracing::debug!(%defect, "rejected deck");
    SolitaireError::MalformedDeck(defect)
}

impl FromStr for Deck {
    type Err = SolitaireError;

    /// Parses whitespace separated integers, top card first.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split_whitespace()
            .map(|token| {
                token
                    .parse::<u32>()
                    .map_err(|_| SolitaireError::InvalidToken(token.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Deck::from_values(&values)
    }
}

impl fmt::Display for Deck {
    /// Renders the deck top to bottom as comma separated values.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

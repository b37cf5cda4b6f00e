//! Keystream generator: drives the deck cycle and extracts one key per call.
//!
//! Each key is produced by running the full four-move cycle and reading the
//! candidate card. A joker candidate sends the generator back through the
//! whole cycle; a numbered candidate is emitted.

use crate::card::ALPHABET_LEN;
use crate::deck::Deck;

/// Stateful, deterministic source of keystream values in 1..=26.
///
/// The generator owns its deck and mutates it on every call, so two
/// generators built from equal decks yield equal sequences.
#[derive(Debug, Clone)]
pub struct Keystream {
    deck: Deck,
    cycles: u64,
    emitted: u64,
}

impl Keystream {
    /// Creates a generator that starts from `deck`.
    pub fn new(deck: Deck) -> Self {
        Keystream {
            deck,
            cycles: 0,
            emitted: 0,
        }
    }

    /// Produces the next keystream value.
    ///
    /// Runs as many full cycles as it takes for the candidate card to be a
    /// numbered card.
    ///
    /// # Returns
    /// A value in 1..=26.
    ///
    /// # Examples
    ///
    /// ```
    /// use solitaire::{Deck, Keystream};
    ///
    /// let mut keys = Keystream::new(Deck::ordered());
    /// assert_eq!(keys.next_key(), 4);
    /// assert_eq!(keys.next_key(), 23);
    /// ```
    pub fn next_key(&mut self) -> u8 {
        loop {
            self.deck.cycle();
            self.cycles += 1;

            let candidate = self.deck.candidate();
            if candidate.is_joker() {
                tracing::trace!(
                    cycle = self.cycles,
                    %candidate,
                    "joker candidate, rerunning cycle"
                );
                continue;
            }

            self.emitted += 1;
            debug_assert!((1..=ALPHABET_LEN).contains(&candidate.value()));
            return candidate.value();
        }
    }

    /// The deck in its current state.
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Total cycles run, including those whose candidate was a joker.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Number of keys emitted so far.
    pub fn emitted(&self) -> u64 {
        self.emitted
    }

    /// Consumes the generator and returns its deck.
    pub fn into_deck(self) -> Deck {
        self.deck
    }
}

impl From<Deck> for Keystream {
    fn from(deck: Deck) -> Self {
        Keystream::new(deck)
    }
}

/// An endless keystream.
impl Iterator for Keystream {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        Some(self.next_key())
    }
}

//! Solitaire deck-of-cards stream cipher.
//!
//! A keystream generator driven by a 28-card deck (26 numbered cards plus
//! two jokers), and a letter codec that adds or subtracts keystream values
//! modulo 26. This reproduces the classical manual algorithm; it is not a
//! secure cipher.
//!
//! # Architecture
//!
//! ```text
//! Card        (value 1..=28, 27 = Joker A, 28 = Joker B)
//!     ↓ 28 in a fixed array
//! Deck        (validated permutation; slot 0 = top, slot 27 = bottom)
//!     ↓ move_joker_a → move_joker_b → triple_cut → count_cut
//! Keystream   (cycle, read candidate, rerun the cycle on a joker)
//!     ↓ one key per letter
//! Solitaire   (strip non-letters, add/subtract keys mod 26)
//! ```
//!
//! # Examples
//!
//! Encrypt and decrypt with the same initial deck:
//!
//! ```
//! use solitaire::{Deck, Solitaire};
//!
//! let deck = Deck::ordered();
//!
//! let ciphertext = Solitaire::new(deck.clone()).encrypt("Hello, world!");
//! assert_eq!(ciphertext, "LBVZKEZAJW");
//!
//! let plaintext = Solitaire::new(deck).decrypt(&ciphertext);
//! assert_eq!(plaintext, "HELLOWORLD");
//! ```
//!
//! Draw raw keystream values from a seeded, shuffled deck:
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use solitaire::{Deck, Keystream};
//!
//! let deck = Deck::shuffled(&mut StdRng::seed_from_u64(2024));
//! let keys: Vec<u8> = Keystream::new(deck).take(8).collect();
//! assert!(keys.iter().all(|k| (1..=26).contains(k)));
//! ```

#![deny(clippy::all)]

pub mod error;

mod card;
mod codec;
mod deck;
mod keystream;
mod transform;

pub use card::{Card, ALPHABET_LEN, DECK_SIZE};
pub use codec::{decrypt_letter, encrypt_letter, letters_only, Solitaire};
pub use deck::Deck;
pub use error::{DeckDefect, SolitaireError};
pub use keystream::Keystream;

//! Letter codec and the message-level cipher session.
//!
//! Letters are numbered A=1 through Z=26. Encryption adds a keystream value
//! and decryption subtracts it, both wrapping within 1..=26. Anything that is
//! not an ASCII letter is dropped from the message before it is processed,
//! and the output is always uppercase.

use crate::card::ALPHABET_LEN;
use crate::deck::Deck;
use crate::error::SolitaireError;
use crate::keystream::Keystream;

/// Keeps only ASCII letters of `text`, uppercased.
///
/// # Examples
///
/// ```
/// assert_eq!(solitaire::letters_only("Hello, World! 42"), "HELLOWORLD");
/// ```
pub fn letters_only(text: &str) -> String {
    text.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Encrypts one letter with a keystream value.
///
/// # Errors
/// - [`SolitaireError::NotALetter`] if `letter` is not an ASCII letter.
/// - [`SolitaireError::InvalidKey`] if `key` is outside 1..=26.
///
/// # Examples
///
/// ```
/// use solitaire::encrypt_letter;
///
/// assert_eq!(encrypt_letter('H', 4), Ok('L'));
/// assert_eq!(encrypt_letter('z', 1), Ok('A'));
/// ```
pub fn encrypt_letter(letter: char, key: u8) -> Result<char, SolitaireError> {
    let index = letter_index(letter)?;
    let key = check_key(key)?;
    Ok(index_letter(shift_up(index, key)))
}

/// Decrypts one letter with a keystream value.
///
/// # Errors
/// Same as [`encrypt_letter`].
pub fn decrypt_letter(letter: char, key: u8) -> Result<char, SolitaireError> {
    let index = letter_index(letter)?;
    let key = check_key(key)?;
    Ok(index_letter(shift_down(index, key)))
}

fn shift_up(index: u8, key: u8) -> u8 {
    let sum = index + key;
    if sum > ALPHABET_LEN {
        sum - ALPHABET_LEN
    } else {
        sum
    }
}

fn shift_down(index: u8, key: u8) -> u8 {
    if index > key {
        index - key
    } else {
        index + ALPHABET_LEN - key
    }
}

/// A=1 .. Z=26, case-insensitive.
fn letter_index(letter: char) -> Result<u8, SolitaireError> {
    if letter.is_ascii_alphabetic() {
        Ok(letter.to_ascii_uppercase() as u8 - b'A' + 1)
    } else {
        Err(SolitaireError::NotALetter(letter))
    }
}

fn index_letter(index: u8) -> char {
    (b'A' + index - 1) as char
}

fn check_key(key: u8) -> Result<u8, SolitaireError> {
    if (1..=ALPHABET_LEN).contains(&key) {
        Ok(key)
    } else {
        Err(SolitaireError::InvalidKey(key))
    }
}

/// A cipher session: a keystream plus the message codec.
///
/// A session consumes one keystream value per letter, so decrypting a
/// message requires a fresh session built from the same initial deck that
/// encrypted it.
///
/// # Examples
///
/// ```
/// use solitaire::{Deck, Solitaire};
///
/// let ciphertext = Solitaire::new(Deck::ordered()).encrypt("Hello");
/// assert_eq!(ciphertext, "LBVZK");
///
/// let plaintext = Solitaire::new(Deck::ordered()).decrypt(&ciphertext);
/// assert_eq!(plaintext, "HELLO");
/// ```
#[derive(Debug, Clone)]
pub struct Solitaire {
    keystream: Keystream,
}

impl Solitaire {
    /// Starts a session from the given initial deck.
    pub fn new(deck: Deck) -> Self {
        Solitaire {
            keystream: Keystream::new(deck),
        }
    }

    /// Encrypts `message`, ignoring every character but ASCII letters.
    ///
    /// # Returns
    /// Uppercase letters only, one per retained input letter.
    pub fn encrypt(&mut self, message: &str) -> String {
        self.apply(message, shift_up)
    }

    /// Decrypts `message`, ignoring every character but ASCII letters.
    pub fn decrypt(&mut self, message: &str) -> String {
        self.apply(message, shift_down)
    }

    /// The underlying keystream.
    pub fn keystream(&self) -> &Keystream {
        &self.keystream
    }

    /// Ends the session, returning its keystream.
    pub fn into_keystream(self) -> Keystream {
        self.keystream
    }

    fn apply(&mut self, message: &str, combine: fn(u8, u8) -> u8) -> String {
        let letters = letters_only(message);
        let mut out = String::with_capacity(letters.len());
        for letter in letters.bytes() {
            let key = self.keystream.next_key();
            out.push(index_letter(combine(letter - b'A' + 1, key)));
        }
        tracing::debug!(
            letters = out.len(),
            cycles = self.keystream.cycles(),
            "processed message"
        );
        out
    }
}

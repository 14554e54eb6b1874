//! The 26-letter alphabet every component of the machine operates over.
//!
//! Letters are carried as [`Letter`] values holding their alphabet index,
//! so rotor arithmetic never has to round-trip through `char`.

use std::fmt;

/// Number of letters on every rotor, the reflector, and the plugboard.
pub const ALPHABET_LEN: usize = 26;

/// The fixed ordered alphabet.
pub const ALPHABET: &[u8; ALPHABET_LEN] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// An uppercase letter `A`..=`Z`, stored as its alphabet index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

impl Letter {
    /// Returns the letter for an uppercase ASCII character, or `None` for
    /// anything outside `A`..=`Z` (lowercase included).
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::alphabet::Letter;
    ///
    /// assert_eq!(Letter::from_char('C').map(Letter::index), Some(2));
    /// assert!(Letter::from_char('c').is_none());
    /// assert!(Letter::from_char(' ').is_none());
    /// ```
    pub fn from_char(c: char) -> Option<Self> {
        if c.is_ascii_uppercase() {
            Some(Letter(c as u8 - b'A'))
        } else {
            None
        }
    }

    /// Returns the letter at `index`, reduced modulo 26.
    pub fn from_index(index: usize) -> Self {
        Letter((index % ALPHABET_LEN) as u8)
    }

    /// Returns the letter whose ASCII byte is `byte`.
    ///
    /// Only used on the constant wiring tables, which are all uppercase.
    pub(crate) const fn from_ascii(byte: u8) -> Self {
        Letter(byte - b'A')
    }

    /// Alphabet index in `0..26`.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Uppercase character for this letter.
    pub fn to_char(self) -> char {
        ALPHABET[self.index()] as char
    }

    /// Returns the letter `offset` places along the alphabet, wrapping in
    /// both directions.
    pub fn shift(self, offset: i32) -> Self {
        Letter(modulo(self.0 as i32 + offset) as u8)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Reduces `n` into `0..26`, normalizing negative values.
pub fn modulo(n: i32) -> usize {
    n.rem_euclid(ALPHABET_LEN as i32) as usize
}

/// Iterates over every letter in alphabet order.
pub fn letters() -> impl Iterator<Item = Letter> {
    (0..ALPHABET_LEN as u8).map(Letter)
}

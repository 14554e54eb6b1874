//! Plugboard: user-configured letter swaps applied on both sides of the
//! rotor stack.
//!
//! Stored as a full 26-entry involution so a swap is a single lookup.

use crate::alphabet::{letters, Letter, ALPHABET_LEN};
use crate::error::PlugboardConflict;

/// Validated set of letter pairs. Every letter is in at most one pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plugboard {
    mapping: [u8; ALPHABET_LEN],
    pairs: Vec<(Letter, Letter)>,
}

impl Default for Plugboard {
    fn default() -> Self {
        Self::empty()
    }
}

impl Plugboard {
    /// A plugboard with no cables: every letter maps to itself.
    pub fn empty() -> Self {
        let mut mapping = [0u8; ALPHABET_LEN];
        for (i, slot) in mapping.iter_mut().enumerate() {
            *slot = i as u8;
        }
        Plugboard {
            mapping,
            pairs: Vec::new(),
        }
    }

    /// Builds a plugboard from letter pairs, checked in order.
    ///
    /// # Errors
    /// Returns [`PlugboardConflict::SelfPaired`] for a pair like `(A, A)` and
    /// [`PlugboardConflict::AlreadyUsed`] for the first letter that appears
    /// in two pairs.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::alphabet::Letter;
    /// use enigma::plugboard::Plugboard;
    ///
    /// let a = Letter::from_char('A').unwrap();
    /// let b = Letter::from_char('B').unwrap();
    /// let board = Plugboard::new(&[(a, b)]).unwrap();
    /// assert_eq!(board.swap(a), b);
    /// assert_eq!(board.swap(b), a);
    ///
    /// assert!(Plugboard::new(&[(a, a)]).is_err());
    /// ```
    pub fn new(pairs: &[(Letter, Letter)]) -> Result<Self, PlugboardConflict> {
        let mut board = Self::empty();
        let mut used = [false; ALPHABET_LEN];

        for &(a, b) in pairs {
            if a == b {
                return Err(PlugboardConflict::SelfPaired(a.to_char()));
            }
            if used[a.index()] || used[b.index()] {
                let letter = if used[a.index()] { a } else { b };
                return Err(PlugboardConflict::AlreadyUsed(letter.to_char()));
            }
            used[a.index()] = true;
            used[b.index()] = true;
            board.mapping[a.index()] = b.index() as u8;
            board.mapping[b.index()] = a.index() as u8;
            board.pairs.push((a, b));
        }

        Ok(board)
    }

    /// Returns the partner of `letter`, or `letter` itself if unplugged.
    pub fn swap(&self, letter: Letter) -> Letter {
        Letter::from_index(self.mapping[letter.index()] as usize)
    }

    /// Pairs in the order they were given.
    pub fn pairs(&self) -> &[(Letter, Letter)] {
        &self.pairs
    }

    /// Number of cables plugged in.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// True when no cables are plugged in.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// True when `letter` maps to itself.
    fn is_unplugged(&self, letter: Letter) -> bool {
        self.swap(letter) == letter
    }

    /// Letters in alphabet order that carry a cable.
    pub fn plugged_letters(&self) -> impl Iterator<Item = Letter> + '_ {
        letters().filter(move |&l| !self.is_unplugged(l))
    }
}

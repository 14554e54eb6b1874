//! Constant wiring tables for the three rotors and the reflector.
//!
//! Each wiring is a permutation of the alphabet written as 26 letters: the
//! letter at index `i` is the substitution for the `i`-th plain letter.

use crate::alphabet::{Letter, ALPHABET_LEN};

/// Immutable description of one rotor model: its wiring and notch letter.
#[derive(Debug, PartialEq, Eq)]
pub struct RotorSpec {
    /// Historical name of the wheel ("I", "II", "III").
    pub name: &'static str,
    /// Substitution table, one letter per alphabet index.
    pub wiring: &'static [u8; ALPHABET_LEN],
    /// Letter showing in the window when the wheel carries its neighbor.
    pub notch: u8,
}

impl RotorSpec {
    /// Returns the built-in spec at `index` (0 = I, 1 = II, 2 = III).
    pub fn by_index(index: usize) -> Option<&'static RotorSpec> {
        ROTOR_SPECS.get(index)
    }

    /// Returns the wired letter for the plain letter at `index`.
    pub(crate) fn wired(&self, index: usize) -> Letter {
        Letter::from_ascii(self.wiring[index])
    }

    /// Notch letter as a [`Letter`].
    pub fn notch_letter(&self) -> Letter {
        Letter::from_ascii(self.notch)
    }
}

/// Rotor I.
pub const ROTOR_I: RotorSpec = RotorSpec {
    name: "I",
    wiring: b"EKMFLGDQVZNTOWYHXUSPAIBRCJ",
    notch: b'Q',
};

/// Rotor II.
pub const ROTOR_II: RotorSpec = RotorSpec {
    name: "II",
    wiring: b"AJDKSIRUXBLHWTMCQGZNPYFVOE",
    notch: b'E',
};

/// Rotor III.
pub const ROTOR_III: RotorSpec = RotorSpec {
    name: "III",
    wiring: b"BDFHJLCPRTXVZNYEIWGAKMUSQO",
    notch: b'V',
};

/// All rotor models, indexed the way configuration selects them.
pub static ROTOR_SPECS: [RotorSpec; 3] = [ROTOR_I, ROTOR_II, ROTOR_III];

/// Rotor order used when the caller does not choose one: I, II, III.
pub const DEFAULT_ROTOR_ORDER: [usize; 3] = [0, 1, 2];

/// Fixed, non-rotating reflector that folds the signal back through the rotors.
#[derive(Debug, PartialEq, Eq)]
pub struct Reflector {
    wiring: &'static [u8; ALPHABET_LEN],
}

impl Reflector {
    /// Substitutes `letter` through the reflector wiring.
    pub fn reflect(&self, letter: Letter) -> Letter {
        Letter::from_ascii(self.wiring[letter.index()])
    }
}

/// The machine's only reflector (wide reflector B).
pub static REFLECTOR: Reflector = Reflector {
    wiring: b"YRUHQSLDPXNGOKMIEBFZCWVJAT",
};

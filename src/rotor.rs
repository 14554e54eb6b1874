//! Rotor: one permutation wheel and its rotational state.
//!
//! The wheel's contacts are offset from the alphabet by its current
//! position, and its wiring core is offset from the letter ring by the ring
//! setting. [`Rotor::forward`] models current heading toward the reflector,
//! [`Rotor::backward`] the return path through the inverse permutation.

use crate::alphabet::{Letter, ALPHABET_LEN};
use crate::wiring::RotorSpec;

/// A rotor installed in a machine slot.
///
/// Only [`step`](Self::step) mutates a rotor; the owning machine is the
/// single place that calls it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rotor {
    spec: &'static RotorSpec,
    inverse: [u8; ALPHABET_LEN],
    ring_setting: u8,
    position: u8,
}

impl Rotor {
    /// Builds a rotor from a spec, ring setting and initial position.
    ///
    /// # Panics
    /// Panics if `ring_setting` or `position` is not in `0..26`. Callers
    /// hand in values that already passed settings validation.
    pub fn new(spec: &'static RotorSpec, ring_setting: u8, position: u8) -> Self {
        assert!(
            (ring_setting as usize) < ALPHABET_LEN,
            "ring setting {ring_setting} out of range"
        );
        assert!(
            (position as usize) < ALPHABET_LEN,
            "rotor position {position} out of range"
        );

        let mut inverse = [0u8; ALPHABET_LEN];
        for i in 0..ALPHABET_LEN {
            inverse[spec.wired(i).index()] = i as u8;
        }

        Rotor {
            spec,
            inverse,
            ring_setting,
            position,
        }
    }

    /// Advances the rotor one position, wrapping from 25 to 0.
    pub fn step(&mut self) {
        self.position = ((self.position as usize + 1) % ALPHABET_LEN) as u8;
    }

    /// Returns a copy of this rotor advanced one position.
    pub fn stepped(mut self) -> Self {
        self.step();
        self
    }

    /// True when the letter at the current position is the notch letter.
    pub fn at_notch(&self) -> bool {
        Letter::from_index(self.position as usize) == self.notch()
    }

    /// Passes `letter` through the wiring toward the reflector.
    pub fn forward(&self, letter: Letter) -> Letter {
        let wired = self.spec.wired(self.entry(letter).index());
        self.exit(wired)
    }

    /// Passes `letter` back through the inverse wiring, away from the reflector.
    pub fn backward(&self, letter: Letter) -> Letter {
        let wired = Letter::from_index(self.inverse[self.entry(letter).index()] as usize);
        self.exit(wired)
    }

    /// Current position in `0..26`.
    pub fn position(&self) -> u8 {
        self.position
    }

    /// Ring setting in `0..26`.
    pub fn ring_setting(&self) -> u8 {
        self.ring_setting
    }

    /// Notch letter.
    pub fn notch(&self) -> Letter {
        self.spec.notch_letter()
    }

    /// Spec this rotor was built from.
    pub fn spec(&self) -> &'static RotorSpec {
        self.spec
    }

    fn offset(&self) -> i32 {
        self.position as i32 - self.ring_setting as i32
    }

    fn entry(&self, letter: Letter) -> Letter {
        letter.shift(self.offset())
    }

    fn exit(&self, wired: Letter) -> Letter {
        wired.shift(-self.offset())
    }
}

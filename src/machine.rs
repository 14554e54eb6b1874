//! Machine: three rotors, the reflector and a plugboard composed into a
//! reciprocal substitution cipher.
//!
//! Each key press first steps the rotors, then sends the letter through the
//! plugboard, right-to-left through the rotors, off the reflector, back
//! left-to-right, and through the plugboard again. Running a second machine
//! built with identical settings over the ciphertext restores the plaintext.

use tracing::{debug, trace};

use crate::alphabet::Letter;
use crate::plugboard::Plugboard;
use crate::rotor::Rotor;
use crate::wiring::{RotorSpec, DEFAULT_ROTOR_ORDER, REFLECTOR, ROTOR_SPECS};

/// Number of rotor slots.
pub const NUM_ROTORS: usize = 3;

const LEFT: usize = 0;
const MIDDLE: usize = 1;
const RIGHT: usize = 2;

/// Three-rotor cipher machine.
///
/// Rotors are held left, middle, right. State advances with every letter
/// processed, so a machine is single-use per message: decrypting needs a
/// fresh machine built from the same settings.
#[derive(Debug, Clone)]
pub struct Machine {
    rotors: [Rotor; NUM_ROTORS],
    plugboard: Plugboard,
}

impl Machine {
    /// Builds a machine from three rotor specs (left, middle, right), their
    /// initial positions and ring settings, and a plugboard.
    ///
    /// Spec `i` is paired with `positions[i]` and `ring_settings[i]`.
    ///
    /// # Panics
    /// Panics if any position or ring setting is not in `0..26`.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::machine::Machine;
    /// use enigma::plugboard::Plugboard;
    /// use enigma::wiring::ROTOR_SPECS;
    ///
    /// let specs = [&ROTOR_SPECS[0], &ROTOR_SPECS[1], &ROTOR_SPECS[2]];
    /// let mut machine = Machine::new(specs, [0, 0, 0], [0, 0, 0], Plugboard::empty());
    /// assert_eq!(machine.process("HELLOWORLD"), "ILBDAAMTAZ");
    /// ```
    pub fn new(
        specs: [&'static RotorSpec; NUM_ROTORS],
        positions: [u8; NUM_ROTORS],
        ring_settings: [u8; NUM_ROTORS],
        plugboard: Plugboard,
    ) -> Self {
        let rotors = [LEFT, MIDDLE, RIGHT]
            .map(|slot| Rotor::new(specs[slot], ring_settings[slot], positions[slot]));

        debug!(
            rotors = ?specs.map(|s| s.name),
            ?positions,
            ?ring_settings,
            plug_pairs = plugboard.len(),
            plugged = %plugboard.plugged_letters().map(Letter::to_char).collect::<String>(),
            "machine assembled"
        );

        Machine { rotors, plugboard }
    }

    /// Builds a machine with rotors I, II, III in the left, middle and right slots.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::machine::Machine;
    /// use enigma::plugboard::Plugboard;
    ///
    /// let mut encoder = Machine::with_default_rotors([1, 2, 3], [1, 2, 3], Plugboard::empty());
    /// let mut decoder = Machine::with_default_rotors([1, 2, 3], [1, 2, 3], Plugboard::empty());
    ///
    /// let ciphertext = encoder.process("attack at dawn");
    /// assert_eq!(decoder.process(&ciphertext), "ATTACK AT DAWN");
    /// ```
    pub fn with_default_rotors(
        positions: [u8; NUM_ROTORS],
        ring_settings: [u8; NUM_ROTORS],
        plugboard: Plugboard,
    ) -> Self {
        let specs = DEFAULT_ROTOR_ORDER.map(|i| &ROTOR_SPECS[i]);
        Self::new(specs, positions, ring_settings, plugboard)
    }

    /// Advances the rotors for one key press.
    ///
    /// Both notch checks read the state from before this call, so a middle
    /// rotor resting on its notch steps together with the left rotor
    /// (double-stepping).
    pub fn step_rotors(&mut self) {
        let middle_at_notch = self.rotors[MIDDLE].at_notch();
        let right_at_notch = self.rotors[RIGHT].at_notch();

        if middle_at_notch {
            self.rotors[LEFT].step();
            trace!(positions = ?self.positions(), "double step");
        }
        if right_at_notch || middle_at_notch {
            self.rotors[MIDDLE].step();
        }
        self.rotors[RIGHT].step();
    }

    /// Enciphers one character.
    ///
    /// Anything other than `A`..=`Z` is returned unchanged without stepping
    /// the rotors.
    pub fn encrypt_char(&mut self, c: char) -> char {
        match Letter::from_char(c) {
            Some(letter) => self.encrypt_letter(letter).to_char(),
            None => c,
        }
    }

    /// Enciphers one letter, stepping the rotors first.
    pub fn encrypt_letter(&mut self, letter: Letter) -> Letter {
        self.step_rotors();

        let mut signal = self.plugboard.swap(letter);
        for rotor in self.rotors.iter().rev() {
            signal = rotor.forward(signal);
        }
        signal = REFLECTOR.reflect(signal);
        for rotor in self.rotors.iter() {
            signal = rotor.backward(signal);
        }
        self.plugboard.swap(signal)
    }

    /// Uppercases `text` and enciphers it character by character.
    ///
    /// Spaces, digits and punctuation pass through untouched. Rotor state
    /// carries over between calls on the same machine.
    pub fn process(&mut self, text: &str) -> String {
        let output: String = text
            .to_uppercase()
            .chars()
            .map(|c| self.encrypt_char(c))
            .collect();

        debug!(
            chars = output.chars().count(),
            positions = ?self.positions(),
            "message processed"
        );
        output
    }

    /// Current rotor positions, left to right.
    pub fn positions(&self) -> [u8; NUM_ROTORS] {
        self.rotors.map(|r| r.position())
    }

    /// Rotors, left to right.
    pub fn rotors(&self) -> &[Rotor; NUM_ROTORS] {
        &self.rotors
    }

    /// The plugboard this machine was built with.
    pub fn plugboard(&self) -> &Plugboard {
        &self.plugboard
    }
}

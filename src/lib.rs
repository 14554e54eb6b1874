//! Enigma rotor cipher machine engine.
//!
//! Simulates a three-rotor machine: a plugboard, three stepping rotors with
//! ring settings and notches, and a fixed reflector. Encryption and
//! decryption are the same operation, so a second machine built with the
//! same settings turns ciphertext back into plaintext.
//!
//! # Architecture
//!
//! ```text
//! Letter / wiring tables   (alphabet index arithmetic, rotor I-III, reflector B)
//!     ↓
//! Rotor                    (position + ring setting + notch; forward / backward)
//!     ↓ three in a row, stepped with the double-step anomaly
//! Machine                  (plugboard → R → M → L → reflector → L → M → R → plugboard)
//!     ↑
//! settings / MachineConfig (validated text or JSON settings)
//! ```
//!
//! # Examples
//!
//! Encrypt and decrypt with identical settings:
//!
//! ```
//! use enigma::config::MachineConfig;
//!
//! let config = MachineConfig::from_text("0 1 2", "0 1 2", "QW ER").unwrap();
//!
//! let mut encoder = config.build().unwrap();
//! let ciphertext = encoder.process("HELLO WORLD");
//! assert_eq!(ciphertext, "ICBDA FMYAZ");
//!
//! let mut decoder = config.build().unwrap();
//! assert_eq!(decoder.process(&ciphertext), "HELLO WORLD");
//! ```
//!
//! Build a machine directly from validated parts:
//!
//! ```
//! use enigma::machine::Machine;
//! use enigma::settings::parse_plugboard;
//!
//! let plugboard = parse_plugboard("AB").unwrap();
//! let mut machine = Machine::with_default_rotors([0, 0, 0], [0, 0, 0], plugboard);
//! assert_eq!(machine.process("A"), "B");
//! ```

#![deny(clippy::all)]

pub mod alphabet;
pub mod config;
pub mod error;
pub mod machine;
pub mod plugboard;
pub mod rotor;
pub mod settings;
pub mod wiring;

pub use config::MachineConfig;
pub use error::EnigmaError;
pub use machine::Machine;

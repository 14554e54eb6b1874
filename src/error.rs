//! Error types for the Enigma library.
//!
//! Only configuration parsing and validation fail. The rotor and machine
//! operations are total over validated input and never return errors.

use std::fmt;

use thiserror::Error;

/// Which textual setting an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Setting {
    /// Three rotor positions, `0..=25`.
    RotorPositions,
    /// Three ring settings, `0..=25`.
    RingSettings,
    /// Three rotor model indices, `0..=2`.
    RotorOrder,
    /// Plugboard letter pairs.
    Plugboard,
}

impl Setting {
    /// Singular noun for one slot of this setting.
    pub fn slot_noun(self) -> &'static str {
        match self {
            Setting::RotorPositions => "position",
            Setting::RingSettings => "setting",
            Setting::RotorOrder => "rotor",
            Setting::Plugboard => "pair",
        }
    }
}

impl fmt::Display for Setting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Setting::RotorPositions => "rotor positions",
            Setting::RingSettings => "ring settings",
            Setting::RotorOrder => "rotor order",
            Setting::Plugboard => "plugboard pairs",
        };
        f.write_str(name)
    }
}

/// One value outside its allowed range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutOfRange {
    /// 1-based slot number within the setting.
    pub slot: usize,
    /// The token as the user typed it.
    pub token: String,
}

/// Reasons a plugboard pair violates the one-cable-per-letter rule.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlugboardConflict {
    /// Both ends of the cable on the same letter.
    #[error("Invalid plugboard pair: {0}{0} - cannot connect a letter to itself")]
    SelfPaired(char),
    /// The letter already carries a cable from an earlier pair.
    #[error("Invalid plugboard pair: letter {0} is already used in another pair")]
    AlreadyUsed(char),
}

/// Errors produced by the Enigma library.
#[derive(Error, Debug)]
pub enum EnigmaError {
    /// Input does not have the expected shape.
    #[error("Invalid {setting} {input:?}: {expected}")]
    Format {
        setting: Setting,
        input: String,
        expected: &'static str,
    },

    /// One or more values fall outside the allowed range.
    #[error(
        "Invalid {setting}: {} must be between 0 and {max}",
        describe_offenders(.setting, .offenders)
    )]
    Range {
        setting: Setting,
        offenders: Vec<OutOfRange>,
        max: usize,
    },

    /// Plugboard pairs reuse a letter or connect a letter to itself.
    #[error(transparent)]
    PlugboardConflict(#[from] PlugboardConflict),

    /// Machine configuration JSON could not be parsed.
    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),

    /// Machine configuration file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for Enigma operations.
pub type Result<T> = std::result::Result<T, EnigmaError>;

fn describe_offenders(setting: &Setting, offenders: &[OutOfRange]) -> String {
    offenders
        .iter()
        .map(|o| format!("{} {} ({})", setting.slot_noun(), o.slot, o.token))
        .collect::<Vec<_>>()
        .join(", ")
}

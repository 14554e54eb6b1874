//! Parsing and validation of the textual machine settings.
//!
//! These are the strings an operator types: three rotor positions, three
//! ring settings, and plugboard pairs such as `AB CD`. Everything returned
//! from here is range-checked and safe to hand to the machine.

use std::sync::LazyLock;

use regex::Regex;

use crate::alphabet::{Letter, ALPHABET_LEN};
use crate::error::{EnigmaError, OutOfRange, Result, Setting};
use crate::machine::NUM_ROTORS;
use crate::plugboard::Plugboard;
use crate::wiring::ROTOR_SPECS;

static THREE_NUMBERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\s+[0-9]+\s+[0-9]+$").expect("valid regex"));

static PLUG_PAIRS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Z]{2}\s*)+$").expect("valid regex"));

static PLUG_PAIR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Z]{2}").expect("valid regex"));

/// Parses three whitespace-separated rotor positions in `0..=25`.
///
/// # Errors
/// [`EnigmaError::Format`] for empty input or anything other than three
/// numbers; [`EnigmaError::Range`] naming every value above 25.
///
/// # Examples
///
/// ```
/// use enigma::settings::parse_rotor_positions;
///
/// assert_eq!(parse_rotor_positions("0 12 25").unwrap(), [0, 12, 25]);
/// assert!(parse_rotor_positions("0 0").is_err());
/// assert!(parse_rotor_positions("0 0 26").is_err());
/// ```
pub fn parse_rotor_positions(input: &str) -> Result<[u8; NUM_ROTORS]> {
    parse_triple(input, Setting::RotorPositions, ALPHABET_LEN - 1)
}

/// Parses three whitespace-separated ring settings in `0..=25`.
///
/// # Errors
/// Same as [`parse_rotor_positions`].
pub fn parse_ring_settings(input: &str) -> Result<[u8; NUM_ROTORS]> {
    parse_triple(input, Setting::RingSettings, ALPHABET_LEN - 1)
}

/// Parses three whitespace-separated rotor model indices (0 = I, 1 = II,
/// 2 = III), left to right.
///
/// # Errors
/// Same as [`parse_rotor_positions`], with an upper bound of 2.
pub fn parse_rotor_order(input: &str) -> Result<[usize; NUM_ROTORS]> {
    let order = parse_triple(input, Setting::RotorOrder, ROTOR_SPECS.len() - 1)?;
    Ok(order.map(usize::from))
}

/// Parses plugboard pairs such as `AB CD` (case-insensitive).
///
/// Blank input means no cables. Pairs may also be run together (`ABCD`).
///
/// # Errors
/// [`EnigmaError::Format`] if the text is not made of letter pairs;
/// [`EnigmaError::PlugboardConflict`] if a letter is paired with itself or
/// used twice.
///
/// # Examples
///
/// ```
/// use enigma::settings::parse_plugboard;
///
/// assert_eq!(parse_plugboard("").unwrap().len(), 0);
/// assert_eq!(parse_plugboard("ab cd").unwrap().len(), 2);
/// assert!(parse_plugboard("AB AC").is_err());
/// ```
pub fn parse_plugboard(input: &str) -> Result<Plugboard> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(Plugboard::empty());
    }

    let upper = trimmed.to_uppercase();
    if !PLUG_PAIRS.is_match(&upper) {
        return Err(EnigmaError::Format {
            setting: Setting::Plugboard,
            input: input.to_string(),
            expected: "pairs of letters separated by spaces (e.g. AB CD)",
        });
    }

    let pairs: Vec<(Letter, Letter)> = PLUG_PAIR
        .find_iter(&upper)
        .filter_map(|m| {
            let mut chars = m.as_str().chars().filter_map(Letter::from_char);
            Some((chars.next()?, chars.next()?))
        })
        .collect();

    Ok(Plugboard::new(&pairs)?)
}

fn parse_triple(input: &str, setting: Setting, max: usize) -> Result<[u8; NUM_ROTORS]> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(EnigmaError::Format {
            setting,
            input: input.to_string(),
            expected: "three values are required (e.g. 0 0 0)",
        });
    }
    if !THREE_NUMBERS.is_match(trimmed) {
        return Err(EnigmaError::Format {
            setting,
            input: input.to_string(),
            expected: "exactly three numbers separated by spaces (e.g. 0 0 0)",
        });
    }

    let mut values = [0u8; NUM_ROTORS];
    let mut offenders = Vec::new();
    for (slot, token) in trimmed.split_whitespace().enumerate() {
        match token.parse::<usize>() {
            Ok(value) if value <= max => values[slot] = value as u8,
            _ => offenders.push(OutOfRange {
                slot: slot + 1,
                token: token.to_string(),
            }),
        }
    }

    if !offenders.is_empty() {
        return Err(EnigmaError::Range {
            setting,
            offenders,
            max,
        });
    }
    Ok(values)
}

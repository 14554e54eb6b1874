//! Machine configuration: the full set of daily settings as one value.
//!
//! A [`MachineConfig`] can be loaded from JSON or assembled from the three
//! text settings an operator types, then validated and turned into a
//! [`Machine`]. Rotor positions and ring settings must always be given;
//! the rotor order and plugboard fall back to I-II-III and no cables.
//!
//! ```json
//! {
//!   "rotors": [0, 1, 2],
//!   "positions": [0, 0, 0],
//!   "ring_settings": [0, 0, 0],
//!   "plugboard": "AB CD"
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::alphabet::ALPHABET_LEN;
use crate::error::{EnigmaError, OutOfRange, Result, Setting};
use crate::machine::{Machine, NUM_ROTORS};
use crate::plugboard::Plugboard;
use crate::settings::{parse_plugboard, parse_ring_settings, parse_rotor_positions};
use crate::wiring::{DEFAULT_ROTOR_ORDER, ROTOR_SPECS};

/// Settings for one machine.
///
/// Numeric fields are read as signed integers so that negative or oversized
/// values in a JSON file are reported as range errors by [`validate`](Self::validate)
/// rather than rejected by the deserializer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineConfig {
    /// Rotor model indices, left to right (0 = I, 1 = II, 2 = III).
    #[serde(default = "default_rotor_order")]
    pub rotors: [i64; NUM_ROTORS],
    /// Initial rotor positions, left to right.
    pub positions: [i64; NUM_ROTORS],
    /// Ring settings, left to right.
    pub ring_settings: [i64; NUM_ROTORS],
    /// Plugboard pairs in text form, e.g. `"AB CD"`.
    #[serde(default)]
    pub plugboard: String,
}

fn default_rotor_order() -> [i64; NUM_ROTORS] {
    DEFAULT_ROTOR_ORDER.map(|i| i as i64)
}

/// A config whose every field passed validation.
struct Checked {
    rotors: [usize; NUM_ROTORS],
    positions: [u8; NUM_ROTORS],
    ring_settings: [u8; NUM_ROTORS],
    plugboard: Plugboard,
}

impl MachineConfig {
    /// Assembles a config from already-parsed settings.
    pub fn new(
        rotors: [usize; NUM_ROTORS],
        positions: [u8; NUM_ROTORS],
        ring_settings: [u8; NUM_ROTORS],
        plugboard: &str,
    ) -> Self {
        MachineConfig {
            rotors: rotors.map(|i| i as i64),
            positions: positions.map(i64::from),
            ring_settings: ring_settings.map(i64::from),
            plugboard: plugboard.trim().to_string(),
        }
    }

    /// Assembles a config from the typed rotor positions, ring settings and
    /// plugboard pairs, using the default rotor order.
    ///
    /// # Errors
    /// Any error from [`parse_rotor_positions`], [`parse_ring_settings`] or
    /// [`parse_plugboard`].
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::config::MachineConfig;
    ///
    /// let config = MachineConfig::from_text("0 0 0", "0 0 0", "AB").unwrap();
    /// let mut machine = config.build().unwrap();
    /// assert_eq!(machine.process("A"), "B");
    /// ```
    pub fn from_text(positions: &str, ring_settings: &str, plugboard: &str) -> Result<Self> {
        let positions = parse_rotor_positions(positions)?;
        let ring_settings = parse_ring_settings(ring_settings)?;
        parse_plugboard(plugboard)?;
        Ok(Self::new(
            DEFAULT_ROTOR_ORDER,
            positions,
            ring_settings,
            plugboard,
        ))
    }

    /// Parses a config from a JSON string. Does not validate ranges.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON config file. Does not validate ranges.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        debug!(path = %path.display(), "loaded machine config");
        Self::from_json_str(&content)
    }

    /// Serializes the config as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks every field without building a machine.
    ///
    /// # Errors
    /// [`EnigmaError::Range`] for a rotor index outside `0..=2` or a position
    /// or ring setting outside `0..=25`; plugboard errors as in
    /// [`parse_plugboard`].
    pub fn validate(&self) -> Result<()> {
        self.check().map(|_| ())
    }

    /// Validates the config and builds a machine from it.
    pub fn build(&self) -> Result<Machine> {
        let checked = self.check()?;
        let specs = checked.rotors.map(|i| &ROTOR_SPECS[i]);
        Ok(Machine::new(
            specs,
            checked.positions,
            checked.ring_settings,
            checked.plugboard,
        ))
    }

    fn check(&self) -> Result<Checked> {
        let rotors = check_range(Setting::RotorOrder, self.rotors, ROTOR_SPECS.len() - 1)?;
        let positions = check_range(Setting::RotorPositions, self.positions, ALPHABET_LEN - 1)?;
        let ring_settings =
            check_range(Setting::RingSettings, self.ring_settings, ALPHABET_LEN - 1)?;
        let plugboard = parse_plugboard(&self.plugboard)?;
        Ok(Checked {
            rotors: rotors.map(usize::from),
            positions,
            ring_settings,
            plugboard,
        })
    }
}

/// Narrows `values` to `u8`, reporting every slot outside `0..=max`.
fn check_range(
    setting: Setting,
    values: [i64; NUM_ROTORS],
    max: usize,
) -> Result<[u8; NUM_ROTORS]> {
    let offenders: Vec<OutOfRange> = values
        .iter()
        .enumerate()
        .filter(|&(_, &v)| !(0..=max as i64).contains(&v))
        .map(|(i, v)| OutOfRange {
            slot: i + 1,
            token: v.to_string(),
        })
        .collect();

    if !offenders.is_empty() {
        return Err(EnigmaError::Range {
            setting,
            offenders,
            max,
        });
    }
    Ok(values.map(|v| v as u8))
}

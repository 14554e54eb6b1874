//! Regression tests for the public API.
//!
//! Expected ciphertexts are frozen snapshots: any change in output means the
//! stepping order, the signal path, or a wiring table changed.
//!
//! Coverage:
//! - `machine::Machine` (known vectors, stepping, passthrough)
//! - `rotor::Rotor`
//! - `plugboard::Plugboard`
//! - `settings` parsers
//! - `config::MachineConfig`
//! - `error::EnigmaError`

use enigma::alphabet::{letters, Letter};
use enigma::config::MachineConfig;
use enigma::error::{EnigmaError, PlugboardConflict, Setting};
use enigma::machine::Machine;
use enigma::plugboard::Plugboard;
use enigma::rotor::Rotor;
use enigma::settings::{parse_plugboard, parse_ring_settings, parse_rotor_positions};
use enigma::wiring::{RotorSpec, REFLECTOR, ROTOR_SPECS};

/// Frozen (positions, rings, plugboard, plaintext, ciphertext) vectors.
const VECTORS: [([u8; 3], [u8; 3], &str, &str, &str); 4] = [
    ([0, 0, 0], [0, 0, 0], "", "HELLOWORLD", "ILBDAAMTAZ"),
    ([0, 0, 0], [0, 0, 0], "", "HELLO WORLD", "ILBDA AMTAZ"),
    ([0, 1, 2], [0, 1, 2], "QW ER", "HELLOWORLD", "ICBDAFMYAZ"),
    ([1, 2, 3], [1, 2, 3], "AB CD", "HELLO WORLD", "ILACB BMTBE"),
];

fn default_machine() -> Machine {
    Machine::with_default_rotors([0, 0, 0], [0, 0, 0], Plugboard::empty())
}

fn build(positions: [u8; 3], rings: [u8; 3], plugboard: &str) -> Machine {
    Machine::with_default_rotors(positions, rings, parse_plugboard(plugboard).unwrap())
}

// ═══════════════════════════════════════════════════════════════════════
// Machine: frozen ciphertexts
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn machine_frozen_vectors() {
    for (positions, rings, plugboard, plaintext, ciphertext) in VECTORS {
        let mut machine = build(positions, rings, plugboard);
        assert_eq!(
            machine.process(plaintext),
            ciphertext,
            "encrypt mismatch for {positions:?}/{rings:?}/{plugboard:?}"
        );
    }
}

#[test]
fn machine_frozen_vectors_decrypt() {
    for (positions, rings, plugboard, plaintext, ciphertext) in VECTORS {
        let mut machine = build(positions, rings, plugboard);
        assert_eq!(machine.process(ciphertext), plaintext);
    }
}

#[test]
fn machine_plugboard_single_letter() {
    let mut machine = build([0, 0, 0], [0, 0, 0], "AB");
    assert_eq!(machine.process("A"), "B");
}

#[test]
fn machine_repeated_letter_stream() {
    let mut machine = default_machine();
    assert_eq!(machine.process("AAAAA"), "BDZGO");
}

#[test]
fn machine_extreme_settings_roundtrip() {
    let plaintext = "THE QUICK BROWN FOX";
    let mut encoder = build([25, 25, 25], [25, 25, 25], "AZ BY");
    let ciphertext = encoder.process(plaintext);
    assert_eq!(ciphertext, "OPC ILLZA GXLQT DNL");

    let mut decoder = build([25, 25, 25], [25, 25, 25], "AZ BY");
    assert_eq!(decoder.process(&ciphertext), plaintext);
}

#[test]
fn machine_reversed_rotor_order() {
    let specs = [&ROTOR_SPECS[2], &ROTOR_SPECS[1], &ROTOR_SPECS[0]];
    let mut machine = Machine::new(specs, [0, 0, 0], [0, 0, 0], Plugboard::empty());
    assert_eq!(machine.process("HELLOWORLD"), "MFNCZBBFZM");
}

// ═══════════════════════════════════════════════════════════════════════
// Machine: stepping
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn stepping_right_rotor_full_revolution() {
    let mut machine = default_machine();
    machine.process(&"A".repeat(26));
    assert_eq!(machine.rotors()[2].position(), 0);
}

#[test]
fn stepping_middle_rotor_double_steps_by_52() {
    let mut machine = default_machine();
    machine.process(&"A".repeat(26));
    machine.process(&"A".repeat(26));
    assert_eq!(machine.rotors()[1].position(), 2);
}

#[test]
fn stepping_left_rotor_carried_by_middle_notch() {
    let mut machine = Machine::with_default_rotors([0, 4, 21], [0, 0, 0], Plugboard::empty());
    machine.process("AAA");
    assert_eq!(machine.positions(), [1, 5, 24]);
}

#[test]
fn stepping_ignores_non_letters() {
    let mut machine = default_machine();
    let text = "12 34, 56! ?";
    assert_eq!(machine.process(text), text);
    assert_eq!(machine.positions(), [0, 0, 0]);
}

#[test]
fn stepping_fresh_machines_are_independent() {
    let mut first = default_machine();
    first.process("SOME TRAFFIC TO ADVANCE THE ROTORS");
    let mut second = default_machine();
    assert_eq!(second.process("HELLOWORLD"), "ILBDAAMTAZ");
}

// ═══════════════════════════════════════════════════════════════════════
// Rotor, reflector, plugboard
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn rotor_inverse_for_every_state() {
    for spec in &ROTOR_SPECS {
        for ring in 0..26u8 {
            for pos in 0..26u8 {
                let rotor = Rotor::new(spec, ring, pos);
                for c in letters() {
                    assert_eq!(rotor.backward(rotor.forward(c)), c);
                }
            }
        }
    }
}

#[test]
fn rotor_spec_lookup() {
    let names: Vec<&str> = (0..3)
        .filter_map(RotorSpec::by_index)
        .map(|s| s.name)
        .collect();
    assert_eq!(names, ["I", "II", "III"]);
}

#[test]
fn reflector_has_no_fixed_points() {
    for c in letters() {
        assert_ne!(REFLECTOR.reflect(c), c);
    }
}

#[test]
fn plugboard_symmetry() {
    let board = parse_plugboard("AB").unwrap();
    let a = Letter::from_char('A').unwrap();
    let b = Letter::from_char('B').unwrap();
    assert_eq!(board.swap(a), b);
    assert_eq!(board.swap(b), a);
}

// ═══════════════════════════════════════════════════════════════════════
// Settings validation
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn settings_valid_inputs() {
    assert_eq!(parse_rotor_positions("0 0 0").unwrap(), [0, 0, 0]);
    assert_eq!(parse_ring_settings("0 0 0").unwrap(), [0, 0, 0]);
    assert_eq!(parse_plugboard("AB CD").unwrap().len(), 2);
}

#[test]
fn settings_too_few_positions() {
    assert!(matches!(
        parse_rotor_positions("0 0"),
        Err(EnigmaError::Format { .. })
    ));
}

#[test]
fn settings_out_of_range() {
    assert!(matches!(
        parse_rotor_positions("0 0 26"),
        Err(EnigmaError::Range {
            setting: Setting::RotorPositions,
            ..
        })
    ));
    assert!(matches!(
        parse_ring_settings("0 0 26"),
        Err(EnigmaError::Range {
            setting: Setting::RingSettings,
            ..
        })
    ));
}

#[test]
fn settings_plugboard_conflicts() {
    assert!(matches!(
        parse_plugboard("AB AC"),
        Err(EnigmaError::PlugboardConflict(PlugboardConflict::AlreadyUsed('A')))
    ));
    assert!(matches!(
        parse_plugboard("AA"),
        Err(EnigmaError::PlugboardConflict(PlugboardConflict::SelfPaired('A')))
    ));
}

#[test]
fn settings_non_ascii_digits_are_format_errors() {
    assert!(matches!(
        parse_rotor_positions("0 0 \u{0663}"),
        Err(EnigmaError::Format {
            setting: Setting::RotorPositions,
            ..
        })
    ));
}

#[test]
fn settings_empty_asymmetry() {
    assert!(parse_plugboard("").is_ok());
    assert!(parse_rotor_positions("").is_err());
    assert!(parse_ring_settings("").is_err());
}

#[test]
fn settings_error_messages_name_tokens() {
    let err = parse_rotor_positions("30 0 40").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid rotor positions: position 1 (30), position 3 (40) must be between 0 and 25"
    );
    let err = parse_plugboard("AB BC").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid plugboard pair: letter B is already used in another pair"
    );
}

// ═══════════════════════════════════════════════════════════════════════
// MachineConfig
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn config_file_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("machine.json");
    std::fs::write(
        &path,
        r#"{ "positions": [0, 1, 2], "ring_settings": [0, 1, 2], "plugboard": "QW ER" }"#,
    )
    .unwrap();

    let config = MachineConfig::load_from_file(&path).unwrap();
    let mut machine = config.build().unwrap();
    assert_eq!(machine.process("HELLOWORLD"), "ICBDAFMYAZ");
}

#[test]
fn config_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = MachineConfig::load_from_file(&dir.path().join("absent.json"));
    assert!(matches!(result, Err(EnigmaError::Io(_))));
}

#[test]
fn config_out_of_byte_range_is_range_error() {
    let config = MachineConfig::from_json_str(
        r#"{ "positions": [0, 0, 300], "ring_settings": [0, 0, 0] }"#,
    )
    .unwrap();
    assert!(matches!(
        config.validate(),
        Err(EnigmaError::Range {
            setting: Setting::RotorPositions,
            ..
        })
    ));
}

use enigma_core::settings::defaults::default_settings;
use enigma_core::settings::key_line::{
    format_key_line, format_plugboard, parse_key_line, parse_plugboard, parse_rotor, parse_rotors,
};
use enigma_core::{EnigmaError, RotorSettings};

#[test]
fn default_key_formats_as_expected() {
    assert_eq!(
        format_key_line(&default_settings()),
        "III:18:Y IV:22:T II:25:R | GK DL IY AQ FH WB TX PS OM ZU"
    );
}

#[test]
fn formatted_key_parses_back() {
    let s = default_settings();
    assert_eq!(parse_key_line(&format_key_line(&s)).unwrap(), s);
}

#[test]
fn rotor_tokens_accept_numerals_and_displayed_numbers() {
    assert_eq!(parse_rotor("III:12:B").unwrap(), RotorSettings::new(3, 12, 1));
    assert_eq!(parse_rotor("iv:3:26").unwrap(), RotorSettings::new(4, 3, 25));
    assert_eq!(parse_rotor("2:04:1").unwrap(), RotorSettings::new(2, 4, 0));
}

#[test]
fn rotor_list_is_right_middle_left() {
    let r = parse_rotors("III:12:B, II:4:H,I:1:F").unwrap();
    assert_eq!(r[0].design, 3);
    assert_eq!(r[1].design, 2);
    assert_eq!(r[2].design, 1);
    assert_eq!(r[1].position, 7);
}

#[test]
fn malformed_rotor_tokens_are_rejected() {
    for bad in ["III:12", "VI:1:A", "III:x:A", "III:1:27", "III:1:0", "III:1:AB"] {
        assert!(
            matches!(parse_rotor(bad), Err(EnigmaError::KeyLine(_))),
            "accepted {bad}"
        );
    }
    assert!(matches!(parse_rotors("I:1:A II:1:A"), Err(EnigmaError::KeyLine(_))));
}

#[test]
fn plugboard_text_parses_pairs() {
    assert_eq!(parse_plugboard("GK dl,IY").unwrap(), vec![(6, 10), (3, 11), (8, 24)]);
    assert!(parse_plugboard("").unwrap().is_empty());
    assert!(parse_plugboard(" - ").unwrap().is_empty());
    assert!(matches!(parse_plugboard("GKD"), Err(EnigmaError::KeyLine(_))));
    assert!(matches!(parse_plugboard("G1"), Err(EnigmaError::KeyLine(_))));
    assert_eq!(format_plugboard(&[]), "-");
}

#[test]
fn key_line_is_validated() {
    assert!(matches!(
        parse_key_line("III:1:A III:1:A I:1:A | -"),
        Err(EnigmaError::DuplicateRotor { id: 3 })
    ));
    assert!(matches!(
        parse_key_line("III:1:A II:1:A I:1:A | GA GB"),
        Err(EnigmaError::PlugboardDuplicateLetter { letter: 6 })
    ));
    assert!(matches!(
        parse_key_line("III:0:A II:1:A I:1:A"),
        Err(EnigmaError::RotorSetting { design: 3, ring: 0 })
    ));
}

#[test]
fn key_line_without_bar_has_no_cables() {
    let s = parse_key_line("III:12:B II:4:H I:1:F").unwrap();
    assert!(s.plugboard.is_empty());
}

use enigma_core::{EnigmaError, Rotor, RotorBank};

#[test]
fn ring_setting_is_stored_zero_based() {
    let r = Rotor::new(1, 1, 0).unwrap();
    assert_eq!(r.ring(), 0);
    let r = Rotor::new(1, 26, 25).unwrap();
    assert_eq!(r.ring(), 25);
    assert_eq!(r.position(), 25);
}

#[test]
fn construction_rejects_bad_design() {
    assert!(matches!(
        Rotor::new(6, 1, 0),
        Err(EnigmaError::RotorSelection { id: 6 })
    ));
}

#[test]
fn construction_rejects_bad_ring() {
    assert!(matches!(
        Rotor::new(2, 0, 0),
        Err(EnigmaError::RotorSetting { design: 2, ring: 0 })
    ));
    assert!(matches!(
        Rotor::new(2, 27, 0),
        Err(EnigmaError::RotorSetting { design: 2, ring: 27 })
    ));
}

#[test]
fn construction_rejects_bad_position() {
    assert!(matches!(
        Rotor::new(4, 1, 26),
        Err(EnigmaError::RotorPosition { design: 4, position: 26 })
    ));
}

#[test]
fn forward_pass_offsets_wires_then_shifts() {
    // Rotor I, no ring shift, home position: straight wiring lookup.
    let r = Rotor::new(1, 1, 0).unwrap();
    assert_eq!(r.forward_pass(0), 4);
    assert_eq!(r.forward_pass(25), 9);

    // Position 1 reads wiring[1] = 10, ring 2 adds 1.
    let r = Rotor::new(1, 2, 1).unwrap();
    assert_eq!(r.forward_pass(0), 11);

    // Wraps: (25 + 1) -> wiring[0] = 4, +25 -> 29 mod 26 = 3.
    let r = Rotor::new(1, 26, 1).unwrap();
    assert_eq!(r.forward_pass(25), 3);
}

#[test]
fn backward_pass_inverts_forward_pass_everywhere() {
    for design in 1..=5u8 {
        for ring in 1..=26u8 {
            for position in 0..26u8 {
                let r = Rotor::new(design, ring, position).unwrap();
                for x in 0..26u8 {
                    assert_eq!(
                        r.backward_pass(r.forward_pass(x)),
                        x,
                        "design={design} ring={ring} pos={position} x={x}"
                    );
                }
            }
        }
    }
}

#[test]
fn advance_position_wraps() {
    let mut r = Rotor::new(5, 1, 25).unwrap();
    r.advance_position();
    assert_eq!(r.position(), 0);
    r.advance_position();
    assert_eq!(r.position(), 1);
}

#[test]
fn at_notch_tracks_position() {
    let mut r = Rotor::new(3, 1, 2).unwrap();
    assert!(!r.at_notch());
    r.advance_position();
    assert!(r.at_notch());
}

#[test]
fn bank_rejects_a_design_repeated_in_any_two_slots() {
    let r = |id| Rotor::new(id, 1, 0).unwrap();

    // right == middle
    assert!(matches!(
        RotorBank::new(r(2), r(2), r(3)),
        Err(EnigmaError::DuplicateRotor { id: 2 })
    ));
    // right == left
    assert!(matches!(
        RotorBank::new(r(1), r(3), r(1)),
        Err(EnigmaError::DuplicateRotor { id: 1 })
    ));
    // middle == left
    assert!(matches!(
        RotorBank::new(r(3), r(1), r(1)),
        Err(EnigmaError::DuplicateRotor { id: 1 })
    ));
    assert!(RotorBank::new(r(3), r(2), r(1)).is_ok());
}

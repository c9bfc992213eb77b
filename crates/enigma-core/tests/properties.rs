use enigma_core::{encipher, MachineSettings, Plugboard, RotorSettings};
use proptest::prelude::*;

fn rotor_triple() -> impl Strategy<Value = [RotorSettings; 3]> {
    (
        proptest::sample::subsequence(vec![1u8, 2, 3, 4, 5], 3).prop_shuffle(),
        proptest::array::uniform3(1u8..=26),
        proptest::array::uniform3(0u8..26),
    )
        .prop_map(|(ids, rings, positions)| {
            [0, 1, 2].map(|i| RotorSettings::new(ids[i], rings[i], positions[i]))
        })
}

fn plug_pairs() -> impl Strategy<Value = Vec<(u8, u8)>> {
    proptest::sample::subsequence((0u8..26).collect::<Vec<_>>(), 0..=26)
        .prop_shuffle()
        .prop_map(|letters| letters.chunks_exact(2).map(|c| (c[0], c[1])).collect())
}

fn settings() -> impl Strategy<Value = MachineSettings> {
    (rotor_triple(), plug_pairs()).prop_map(|(rotors, plugboard)| MachineSettings {
        rotors,
        plugboard,
    })
}

proptest! {
    #[test]
    fn prop_process_twice_is_identity(s in settings(), plain in "[A-Z]{0,200}") {
        let cipher = encipher(&plain, &s).unwrap();
        prop_assert_eq!(cipher.len(), plain.len());
        prop_assert_eq!(encipher(&cipher, &s).unwrap(), plain);
    }

    #[test]
    fn prop_non_letters_pass_through_in_place(s in settings(), text in "[a-zA-Z0-9 ,.;:!?'\\-]{0,120}") {
        let out = encipher(&text, &s).unwrap();
        prop_assert_eq!(out.chars().count(), text.chars().count());
        for (a, b) in text.chars().zip(out.chars()) {
            if a.is_ascii_alphabetic() {
                prop_assert!(b.is_ascii_uppercase());
                prop_assert_ne!(a.to_ascii_uppercase(), b);
            } else {
                prop_assert_eq!(a, b);
            }
        }
    }

    #[test]
    fn prop_non_letters_do_not_affect_letters(s in settings(), plain in "[A-Z]{1,80}", noise in "[0-9 .,]{1,40}") {
        // Interleave noise after the first letter; the letter stream must match.
        let (head, tail) = plain.split_at(1);
        let noisy = format!("{head}{noise}{tail}");
        let clean = encipher(&plain, &s).unwrap();
        let dirty = encipher(&noisy, &s).unwrap();
        let letters: String = dirty.chars().filter(|c| c.is_ascii_alphabetic()).collect();
        prop_assert_eq!(letters, clean);
    }

    #[test]
    fn prop_plugboard_is_involution(pairs in plug_pairs()) {
        let pb = Plugboard::build(&pairs).unwrap();
        for l in 0..26u8 {
            prop_assert_eq!(pb.apply(pb.apply(l)), l);
        }
    }
}

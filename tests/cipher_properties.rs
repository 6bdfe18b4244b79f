//! Property tests over letters, rotor positions and machine settings.

use enigma::plugboard::Plugboard;
use enigma::reflector::Reflector;
use enigma::rotor::{Direction, Rotor, RotorId};
use enigma::Enigma;
use proptest::prelude::*;

fn rotor_id() -> impl Strategy<Value = RotorId> {
    prop::sample::select(RotorId::ALL.to_vec())
}

fn letter() -> impl Strategy<Value = char> {
    (0u8..26).prop_map(|i| (b'A' + i) as char)
}

fn key() -> impl Strategy<Value = String> {
    "[A-Z]{3}"
}

/// Up to six disjoint cables drawn from a shuffled alphabet.
fn plugs() -> impl Strategy<Value = Vec<String>> {
    (Just(('A'..='Z').collect::<Vec<char>>()).prop_shuffle(), 0usize..=6).prop_map(
        |(letters, count)| {
            letters
                .chunks(2)
                .take(count)
                .map(|pair| pair.iter().collect::<String>())
                .collect()
        },
    )
}

fn machine(key: &str, plugs: &[String], order: [RotorId; 3]) -> Enigma {
    let plugs: Vec<&str> = plugs.iter().map(String::as_str).collect();
    let order: Vec<String> = order.iter().map(RotorId::to_string).collect();
    let order: Vec<&str> = order.iter().map(String::as_str).collect();
    Enigma::with_config(key, &plugs, &order).unwrap()
}

proptest! {
    #[test]
    fn rotor_backward_inverts_forward(id in rotor_id(), window in letter(), input in letter()) {
        let rotor = Rotor::new(id, window).unwrap();
        let out = rotor.encode_letter(input, Direction::Forward).unwrap();
        prop_assert_eq!(rotor.encode_letter(out, Direction::Backward).unwrap(), input);
    }

    #[test]
    fn reflector_is_self_inverse(input in letter()) {
        let reflector = Reflector::new();
        let out = reflector.reflect(input).unwrap();
        prop_assert_ne!(out, input);
        prop_assert_eq!(reflector.reflect(out).unwrap(), input);
    }

    #[test]
    fn plugboard_is_symmetric(pairs in plugs(), probe in letter()) {
        let board = Plugboard::new(&pairs).unwrap();
        for pair in &pairs {
            let mut chars = pair.chars();
            let (a, b) = (chars.next().unwrap(), chars.next().unwrap());
            prop_assert_eq!(board.encode(a).unwrap(), b);
            prop_assert_eq!(board.encode(b).unwrap(), a);
        }
        if !pairs.iter().any(|p| p.contains(probe)) {
            prop_assert_eq!(board.encode(probe).unwrap(), probe);
        }
    }

    #[test]
    fn two_machines_round_trip(
        key in key(),
        pairs in plugs(),
        order in prop::array::uniform3(rotor_id()),
        message in "[A-Z]{0,80}",
    ) {
        let mut sender = machine(&key, &pairs, order);
        let mut receiver = machine(&key, &pairs, order);
        let ciphertext = sender.encipher(&message).unwrap();
        prop_assert_eq!(ciphertext.len(), message.len());
        prop_assert_eq!(receiver.decipher(&ciphertext).unwrap(), message);
        prop_assert_eq!(sender.windows(), receiver.windows());
    }

    #[test]
    fn no_letter_enciphers_to_itself(
        key in key(),
        pairs in plugs(),
        message in "[A-Z]{1,60}",
    ) {
        let mut m = machine(&key, &pairs, [RotorId::I, RotorId::II, RotorId::III]);
        let ciphertext = m.encipher(&message).unwrap();
        for (p, c) in message.chars().zip(ciphertext.chars()) {
            prop_assert_ne!(p, c);
        }
    }

    #[test]
    fn messages_with_digits_are_rejected(
        head in "[A-Z ]{0,10}",
        digit in "[0-9]",
        tail in "[A-Z ]{0,10}",
    ) {
        let mut m = Enigma::new();
        let message = format!("{}{}{}", head, digit, tail);
        prop_assert!(m.encipher(&message).is_err());
        prop_assert_eq!(m.windows(), "AAA");
    }

    #[test]
    fn bad_keys_never_change_position(bad in "[A-Z]{0,2}|[A-Z]{4,6}") {
        let mut m = Enigma::with_config::<&str>("QEV", &[], &["I", "II", "III"]).unwrap();
        prop_assert!(!m.set_rotor_position(&bad, false).is_applied());
        prop_assert!(Enigma::with_config::<&str>(&bad, &[], &["I", "II", "III"]).is_err());
        prop_assert_eq!(m.windows(), "QEV");
    }
}

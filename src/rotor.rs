//! Rotor: a single rotating wiring wheel.
//!
//! Each rotor carries a fixed permutation of the 26 contacts, its inverse
//! for the return path, a window letter that records the wheel's rotation,
//! and a notch letter at which it engages its left neighbour.
//!
//! A rotor only knows about itself. Propagating a step to neighbours is
//! done by [`RotorBank`](crate::rotor_bank::RotorBank), which keeps the
//! double-step rule in one place.

use std::fmt;
use std::str::FromStr;

use crate::error::EnigmaError;
use crate::utils::alphabet::{index_to_letter, letter_to_index, Contact, ALPHABET_LEN};

/// Historical rotor wirings supported by the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotorId {
    I,
    II,
    III,
    V,
}

impl RotorId {
    /// All supported rotors, in catalogue order.
    pub const ALL: [RotorId; 4] = [RotorId::I, RotorId::II, RotorId::III, RotorId::V];

    /// Returns the forward wiring as the letters contacts `A..Z` map to.
    pub fn wiring(self) -> &'static str {
        match self {
            RotorId::I => "EKMFLGDQVZNTOWYHXUSPAIBRCJ",
            RotorId::II => "AJDKSIRUXBLHWTMCQGZNPYFVOE",
            RotorId::III => "BDFHJLCPRTXVZNYEIWGAKMUSQO",
            RotorId::V => "VZBRGITYUPSDNHLXAWMJQOFECK",
        }
    }

    /// Returns the window letter at which this rotor engages its neighbour.
    pub fn notch(self) -> char {
        match self {
            RotorId::I => 'Q',
            RotorId::II => 'E',
            RotorId::III => 'V',
            RotorId::V => 'Z',
        }
    }

    /// Returns the roman-numeral name of this rotor.
    pub fn name(self) -> &'static str {
        match self {
            RotorId::I => "I",
            RotorId::II => "II",
            RotorId::III => "III",
            RotorId::V => "V",
        }
    }
}

impl FromStr for RotorId {
    type Err = EnigmaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RotorId::ALL
            .iter()
            .copied()
            .find(|id| id.name() == s)
            .ok_or_else(|| EnigmaError::UnknownRotor(s.to_string()))
    }
}

impl fmt::Display for RotorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Direction a signal travels through a rotor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Keyboard towards the reflector (uses the forward table).
    Forward,
    /// Reflector back towards the lampboard (uses the backward table).
    Backward,
}

/// A single rotating wiring wheel.
///
/// The window letter is derived from `offset`, so the two can never
/// disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotor {
    id: RotorId,
    forward: [usize; ALPHABET_LEN],
    backward: [usize; ALPHABET_LEN],
    notch: usize,
    offset: usize,
}

impl Rotor {
    /// Creates a rotor with the given wiring and initial window letter.
    ///
    /// # Parameters
    /// - `id`: Which historical wiring to load.
    /// - `window`: Letter initially visible in the window (either case).
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidWindow`] if `window` is not a letter.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::rotor::{Rotor, RotorId};
    ///
    /// let rotor = Rotor::new(RotorId::I, 'A').unwrap();
    /// assert_eq!(rotor.window(), 'A');
    /// assert!(Rotor::new(RotorId::I, '3').is_err());
    /// ```
    pub fn new(id: RotorId, window: char) -> Result<Self, EnigmaError> {
        Ok(Self::at_offset(id, window_index(window)?))
    }

    /// Creates a rotor at an already validated offset.
    pub(crate) fn at_offset(id: RotorId, offset: usize) -> Self {
        let mut forward = [0usize; ALPHABET_LEN];
        let mut backward = [0usize; ALPHABET_LEN];
        for (i, letter) in id.wiring().chars().enumerate() {
            // Wiring tables are fixed ASCII upper-case strings.
            let target = (letter as u8 - b'A') as usize;
            forward[i] = target;
            backward[target] = i;
        }
        Rotor {
            id,
            forward,
            backward,
            notch: (id.notch() as u8 - b'A') as usize,
            offset: offset % ALPHABET_LEN,
        }
    }

    /// Creates a rotor from its roman-numeral name.
    ///
    /// # Errors
    /// Returns [`EnigmaError::UnknownRotor`] for an unsupported name and
    /// [`EnigmaError::InvalidWindow`] for a bad window letter.
    pub fn from_name(name: &str, window: char) -> Result<Self, EnigmaError> {
        Rotor::new(name.parse()?, window)
    }

    /// Returns which wiring this rotor carries.
    pub fn id(&self) -> RotorId {
        self.id
    }

    /// Returns the letter currently visible in the window.
    pub fn window(&self) -> char {
        index_to_letter(self.offset)
    }

    /// Returns the rotational displacement (`A = 0`).
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the notch letter of this rotor.
    pub fn notch_letter(&self) -> char {
        index_to_letter(self.notch)
    }

    /// Turns the wheel so `letter` shows in the window.
    ///
    /// Independent of stepping; neighbours are not affected.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidWindow`] if `letter` is not a letter.
    pub fn change_setting(&mut self, letter: char) -> Result<(), EnigmaError> {
        self.offset = window_index(letter)?;
        Ok(())
    }

    /// Sets the offset directly. Callers pass an already validated index.
    pub(crate) fn set_offset(&mut self, offset: usize) {
        self.offset = offset % ALPHABET_LEN;
    }

    /// Advances the wheel by one position (Z wraps to A).
    pub fn step(&mut self) {
        self.offset = (self.offset + 1) % ALPHABET_LEN;
    }

    /// Returns `true` if the window shows this rotor's notch letter.
    pub fn is_at_notch(&self) -> bool {
        self.offset == self.notch
    }

    /// Passes a contact index through the wheel at its current offset.
    ///
    /// `out = (table[(in + offset) mod 26] - offset) mod 26`
    pub(crate) fn encode_index(&self, input: usize, direction: Direction) -> usize {
        let table = match direction {
            Direction::Forward => &self.forward,
            Direction::Backward => &self.backward,
        };
        let wired = table[(input + self.offset) % ALPHABET_LEN];
        (wired + ALPHABET_LEN - self.offset) % ALPHABET_LEN
    }

    /// Passes one signal through this rotor alone.
    ///
    /// # Parameters
    /// - `input`: A letter (`char` or one-letter `&str`) or a contact index.
    /// - `direction`: Which table to use.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidLetter`] or
    /// [`EnigmaError::InvalidContact`] for malformed input.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::rotor::{Direction, Rotor, RotorId};
    ///
    /// let rotor = Rotor::new(RotorId::I, 'A').unwrap();
    /// assert_eq!(rotor.encode_letter('A', Direction::Forward).unwrap(), 'E');
    /// assert_eq!(rotor.encode_letter('E', Direction::Backward).unwrap(), 'A');
    /// ```
    pub fn encode_letter<C: Contact>(
        &self,
        input: C,
        direction: Direction,
    ) -> Result<char, EnigmaError> {
        let index = input.contact()?;
        Ok(index_to_letter(self.encode_index(index, direction)))
    }

    fn table_letters(table: &[usize; ALPHABET_LEN]) -> String {
        table.iter().map(|&i| index_to_letter(i)).collect()
    }
}

fn window_index(letter: char) -> Result<usize, EnigmaError> {
    letter_to_index(letter).ok_or_else(|| EnigmaError::InvalidWindow(letter.to_string()))
}

impl fmt::Display for Rotor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Wiring:\n{{'forward': '{}', 'backward': '{}'}}\nWindow: {}",
            Self::table_letters(&self.forward),
            Self::table_letters(&self.backward),
            self.window()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid() {
        let rotor = Rotor::new(RotorId::I, 'A').unwrap();
        assert_eq!(rotor.id(), RotorId::I);
        assert_eq!(rotor.window(), 'A');
        assert_eq!(rotor.offset(), 0);
        assert_eq!(rotor.notch_letter(), 'Q');
    }

    #[test]
    fn test_new_lowercase_window() {
        let rotor = Rotor::new(RotorId::III, 'k').unwrap();
        assert_eq!(rotor.window(), 'K');
        assert_eq!(rotor.offset(), 10);
    }

    #[test]
    fn test_from_name_rejects_unsupported() {
        for name in ["X", "IV", "VI", "", "i"] {
            assert_eq!(
                Rotor::from_name(name, 'A'),
                Err(EnigmaError::UnknownRotor(name.to_string()))
            );
        }
    }

    #[test]
    fn test_new_rejects_bad_window() {
        assert_eq!(
            Rotor::new(RotorId::II, '!'),
            Err(EnigmaError::InvalidWindow("!".to_string()))
        );
    }

    #[test]
    fn test_repr_rotor_ii() {
        let rotor = Rotor::from_name("II", 'B').unwrap();
        assert_eq!(
            rotor.to_string(),
            "Wiring:\n{'forward': 'AJDKSIRUXBLHWTMCQGZNPYFVOE', \
             'backward': 'AJPCZWRLFBDKOTYUQGENHXMIVS'}\nWindow: B"
        );
    }

    #[test]
    fn test_tables_are_inverse() {
        for id in RotorId::ALL {
            let rotor = Rotor::new(id, 'A').unwrap();
            for (i, &wired) in rotor.forward.iter().enumerate() {
                assert_eq!(rotor.backward[wired], i, "rotor {}", id);
            }
        }
    }

    #[test]
    fn test_step() {
        let mut rotor = Rotor::new(RotorId::I, 'A').unwrap();
        rotor.step();
        assert_eq!(rotor.window(), 'B');
        assert_eq!(rotor.offset(), 1);
    }

    #[test]
    fn test_step_wraps_z_to_a() {
        let mut rotor = Rotor::new(RotorId::II, 'Z').unwrap();
        rotor.step();
        assert_eq!(rotor.window(), 'A');
        assert_eq!(rotor.offset(), 0);
    }

    #[test]
    fn test_is_at_notch() {
        let mut rotor = Rotor::new(RotorId::I, 'P').unwrap();
        assert!(!rotor.is_at_notch());
        rotor.step();
        assert!(rotor.is_at_notch());
        rotor.step();
        assert_eq!(rotor.window(), 'R');
        assert!(!rotor.is_at_notch());
    }

    #[test]
    fn test_change_setting() {
        let mut rotor = Rotor::new(RotorId::I, 'A').unwrap();
        rotor.change_setting('Z').unwrap();
        assert_eq!(rotor.window(), 'Z');
        assert_eq!(rotor.offset(), 25);
        assert!(rotor.change_setting('5').is_err());
        assert_eq!(rotor.window(), 'Z');
    }

    #[test]
    fn test_encode_forward_and_backward() {
        let rotor = Rotor::new(RotorId::I, 'A').unwrap();
        assert_eq!(rotor.encode_letter('A', Direction::Forward).unwrap(), 'E');
        assert_eq!(rotor.encode_letter("E", Direction::Backward).unwrap(), 'A');
    }

    #[test]
    fn test_encode_with_offset() {
        // Rotor I at B: contact A enters wire B -> K, shifted back by one -> J.
        let rotor = Rotor::new(RotorId::I, 'B').unwrap();
        assert_eq!(rotor.encode_letter(0usize, Direction::Forward).unwrap(), 'J');
        assert_eq!(rotor.encode_letter('J', Direction::Backward).unwrap(), 'A');
    }

    #[test]
    fn test_encode_rejects_bad_input() {
        let rotor = Rotor::new(RotorId::I, 'A').unwrap();
        assert_eq!(
            rotor.encode_letter("AB", Direction::Forward),
            Err(EnigmaError::InvalidLetter("AB".to_string()))
        );
        assert_eq!(
            rotor.encode_letter(26usize, Direction::Forward),
            Err(EnigmaError::InvalidContact(26))
        );
    }

    #[test]
    fn test_backward_inverts_forward_every_offset() {
        for id in RotorId::ALL {
            let mut rotor = Rotor::new(id, 'A').unwrap();
            for _ in 0..ALPHABET_LEN {
                for i in 0..ALPHABET_LEN {
                    let out = rotor.encode_index(i, Direction::Forward);
                    assert_eq!(rotor.encode_index(out, Direction::Backward), i);
                }
                rotor.step();
            }
        }
    }

    #[test]
    fn test_rotor_id_round_trip_names() {
        for id in RotorId::ALL {
            assert_eq!(id.to_string().parse::<RotorId>().unwrap(), id);
        }
    }
}

//! Enigma: the three-rotor cipher machine.
//!
//! Owns the rotor bank, the reflector and the plugboard, together with the
//! key schedule (rotor order, starting key, plug cables). Every keystroke
//! steps the bank and then sends the signal through
//! plugboard → right → middle → left → reflector → left → middle → right →
//! plugboard.
//!
//! The cipher is reciprocal: a machine set to the same starting key turns
//! ciphertext back into plaintext.

use std::fmt;

use tracing::{debug, info, warn};

use crate::config::MachineSettings;
use crate::error::EnigmaError;
use crate::notice::Notice;
use crate::plugboard::{Cable, Plugboard};
use crate::reflector::Reflector;
use crate::rotor::RotorId;
use crate::rotor_bank::{RotorBank, BANK_SIZE};
use crate::utils::alphabet::{index_to_letter, letter_to_index, parse_key, Keystroke};

/// Three-rotor Enigma machine.
///
/// # Architecture
///
/// The machine keeps the configured starting key separately from the
/// current rotor windows. Typing moves the windows but not the key, so
/// [`reset`](Self::reset) can bring the rotors back for decryption.
///
/// Every encoding call mutates the rotor positions; share one machine
/// between threads only behind a lock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enigma {
    key: [usize; BANK_SIZE],
    bank: RotorBank,
    reflector: Reflector,
    plugboard: Plugboard,
}

impl Default for Enigma {
    fn default() -> Self {
        Self::new()
    }
}

impl Enigma {
    /// Creates a machine with key `AAA`, no plugs and rotors I, II, III.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::Enigma;
    ///
    /// let mut machine = Enigma::new();
    /// assert_eq!(machine.encipher("HELLO WORLD").unwrap(), "ILBDAAMTAZ");
    /// ```
    pub fn new() -> Self {
        let key = [0; BANK_SIZE];
        Enigma {
            key,
            bank: Self::build_bank([RotorId::I, RotorId::II, RotorId::III], key),
            reflector: Reflector::new(),
            plugboard: Plugboard::default(),
        }
    }

    /// Creates a machine from an explicit key, plug cables and rotor order.
    ///
    /// # Parameters
    /// - `key`: Three window letters, left to right.
    /// - `swaps`: Plug cables (at most 6), as two-letter strings or as
    ///   `(char, char)` tuples.
    /// - `rotor_order`: Three rotor names, left to right.
    ///
    /// # Errors
    /// - [`EnigmaError::InvalidKey`] if `key` is not three letters.
    /// - [`EnigmaError::InvalidRotorCount`] / [`EnigmaError::UnknownRotor`]
    ///   for a bad rotor order.
    /// - Any plugboard error from [`Plugboard::new`].
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::Enigma;
    ///
    /// let machine = Enigma::with_config("XYZ", &["AB"], &["III", "I", "II"]).unwrap();
    /// assert_eq!(machine.rotor_order(), vec!["III", "I", "II"]);
    ///
    /// let tuples = Enigma::with_config("XYZ", &[('A', 'B')], &["III", "I", "II"]).unwrap();
    /// assert_eq!(tuples, machine);
    ///
    /// assert!(Enigma::with_config::<&str>("XY", &[], &["I", "II", "III"]).is_err());
    /// assert!(Enigma::with_config::<&str>("XYZ", &[], &["I", "II", "IV"]).is_err());
    /// ```
    pub fn with_config<C: Cable>(
        key: &str,
        swaps: &[C],
        rotor_order: &[&str],
    ) -> Result<Self, EnigmaError> {
        let key = parse_key(key)?;
        let ids = parse_rotor_order(rotor_order)?;
        let plugboard = Plugboard::new(swaps)?;
        let machine = Enigma {
            key,
            bank: Self::build_bank(ids, key),
            reflector: Reflector::new(),
            plugboard,
        };
        debug!(machine = %machine, plugs = machine.plugboard.len(), "machine configured");
        Ok(machine)
    }

    /// Creates a machine from a [`MachineSettings`] key sheet.
    ///
    /// # Errors
    /// Same as [`with_config`](Self::with_config).
    pub fn from_settings(settings: &MachineSettings) -> Result<Self, EnigmaError> {
        let order: Vec<&str> = settings.rotor_order.iter().map(String::as_str).collect();
        Self::with_config(&settings.key, &settings.swaps, &order)
    }

    /// Returns the current configuration as a key sheet.
    ///
    /// The key is the configured starting key, not the current windows.
    pub fn settings(&self) -> MachineSettings {
        MachineSettings {
            key: self.key(),
            swaps: self.plugboard.pair_strings(),
            rotor_order: self.rotor_order(),
        }
    }

    fn build_bank(ids: [RotorId; BANK_SIZE], key: [usize; BANK_SIZE]) -> RotorBank {
        RotorBank::with_offsets(ids, key)
    }

    /// Replaces the three rotors, keeping the key letters by position.
    ///
    /// The new rotors start at the configured key, not at the current
    /// windows.
    ///
    /// # Errors
    /// [`EnigmaError::InvalidRotorCount`] or [`EnigmaError::UnknownRotor`];
    /// the machine is unchanged.
    pub fn set_rotor_order(&mut self, order: &[&str]) -> Result<(), EnigmaError> {
        let ids = parse_rotor_order(order)?;
        self.bank = Self::build_bank(ids, self.key);
        debug!(order = ?order, "rotor order changed");
        Ok(())
    }

    /// Sets a new starting key and turns every rotor to it.
    ///
    /// Unlike the constructor this never fails: a malformed key leaves the
    /// machine unchanged and comes back as [`Notice::Ignored`].
    ///
    /// # Parameters
    /// - `key`: Three window letters, left to right.
    /// - `announce`: Attach a confirmation message to the notice.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::Enigma;
    ///
    /// let mut machine = Enigma::new();
    /// assert!(machine.set_rotor_position("QEV", false).is_applied());
    /// assert!(!machine.set_rotor_position("QE", false).is_applied());
    /// assert_eq!(machine.key(), "QEV");
    /// ```
    pub fn set_rotor_position(&mut self, key: &str, announce: bool) -> Notice {
        let key = match parse_key(key) {
            Ok(key) => key,
            Err(err) => {
                let reason = format!("Rotor position unchanged: {}", err);
                warn!("{}", reason);
                return Notice::ignored(reason);
            }
        };
        self.key = key;
        self.bank.set_offsets(key);
        if announce {
            let message = format!(
                "Rotor position successfully updated. Now using {}.",
                self.key()
            );
            info!("{}", message);
            return Notice::announced(message);
        }
        Notice::applied()
    }

    /// Adds plug cables, or replaces them all when `replace` is set.
    ///
    /// Cables may be two-letter strings or `(char, char)` tuples.
    ///
    /// # Returns
    /// The plugboard's [`Notice`]. With `announce`, an applied notice
    /// carries the resulting cable list.
    ///
    /// # Errors
    /// [`EnigmaError::InvalidPlugPair`] or [`EnigmaError::PlugConflict`];
    /// the plugboard is unchanged.
    pub fn set_plugs<C: Cable>(
        &mut self,
        pairs: &[C],
        replace: bool,
        announce: bool,
    ) -> Result<Notice, EnigmaError> {
        let notice = self.plugboard.update_swaps(pairs, replace)?;
        if announce && notice.is_applied() {
            let message = format!(
                "Plugboard successfully updated. New swaps are:\n{}",
                self.plugboard
            );
            info!("{}", message);
            return Ok(Notice::announced(message));
        }
        Ok(notice)
    }

    /// Turns the rotors back to the configured starting key.
    ///
    /// After a reset the same machine deciphers what it enciphered since the
    /// key was set.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::Enigma;
    ///
    /// let mut machine = Enigma::new();
    /// let ciphertext = machine.encipher("ATTACKATDAWN").unwrap();
    /// machine.reset();
    /// assert_eq!(machine.decipher(&ciphertext).unwrap(), "ATTACKATDAWN");
    /// ```
    pub fn reset(&mut self) {
        self.bank.set_offsets(self.key);
    }

    /// Encodes (or decodes) one letter, stepping the rotors first.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidLetter`] if `letter` is not exactly one
    /// letter. The rotors do not move in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::Enigma;
    ///
    /// let mut machine = Enigma::new();
    /// let first = machine.encode_decode_letter('A').unwrap();
    /// let second = machine.encode_decode_letter("A").unwrap();
    /// assert_ne!(first, second);
    /// assert!(machine.encode_decode_letter("AB").is_err());
    /// ```
    pub fn encode_decode_letter<K: Keystroke>(
        &mut self,
        letter: K,
    ) -> Result<char, EnigmaError> {
        let index = letter.keystroke()?;
        Ok(index_to_letter(self.press(index)))
    }

    /// Enciphers a message.
    ///
    /// Spaces are dropped and letters upper-cased. Anything else is
    /// rejected before the rotors move.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidMessage`] naming the first bad character.
    pub fn encipher(&mut self, message: &str) -> Result<String, EnigmaError> {
        let indices = prepare_message(message)?;
        Ok(indices
            .into_iter()
            .map(|index| index_to_letter(self.press(index)))
            .collect())
    }

    /// Deciphers a message.
    ///
    /// Same machinery as [`encipher`](Self::encipher). The rotors must be at
    /// the starting key used for encryption; see [`reset`](Self::reset).
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidMessage`] naming the first bad character.
    pub fn decipher(&mut self, message: &str) -> Result<String, EnigmaError> {
        self.encipher(message)
    }

    /// One keystroke on a validated contact index.
    fn press(&mut self, input: usize) -> usize {
        self.bank.step();
        let signal = self.plugboard.encode_index(input);
        let signal = self.bank.forward(signal);
        let signal = self.reflector.reflect_index(signal);
        let signal = self.bank.backward(signal);
        self.plugboard.encode_index(signal)
    }

    /// Returns the configured starting key.
    pub fn key(&self) -> String {
        self.key.iter().map(|&i| index_to_letter(i)).collect()
    }

    /// Returns the letters currently showing in the windows.
    pub fn windows(&self) -> String {
        self.bank.windows()
    }

    /// Returns the rotor names, left to right.
    pub fn rotor_order(&self) -> Vec<String> {
        self.bank.ids().iter().map(RotorId::to_string).collect()
    }

    /// Returns the rotor bank.
    pub fn rotors(&self) -> &RotorBank {
        &self.bank
    }

    /// Returns the reflector.
    pub fn reflector(&self) -> &Reflector {
        &self.reflector
    }

    /// Returns the plugboard.
    pub fn plugboard(&self) -> &Plugboard {
        &self.plugboard
    }
}

fn parse_rotor_order(order: &[&str]) -> Result<[RotorId; BANK_SIZE], EnigmaError> {
    if order.len() != BANK_SIZE {
        return Err(EnigmaError::InvalidRotorCount(order.len()));
    }
    Ok([order[0].parse()?, order[1].parse()?, order[2].parse()?])
}

fn prepare_message(message: &str) -> Result<Vec<usize>, EnigmaError> {
    message
        .chars()
        .filter(|c| *c != ' ')
        .map(|c| letter_to_index(c).ok_or(EnigmaError::InvalidMessage(c)))
        .collect()
}

impl fmt::Display for Enigma {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [left, middle, right] = self.bank.ids();
        write!(
            f,
            "Keyboard <-> Plugboard <->  Rotor {} <-> Rotor  {} <-> Rotor  {} <-> Reflector \nKey:  + {}",
            left,
            middle,
            right,
            self.key()
        )
    }
}

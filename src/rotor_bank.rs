//! RotorBank: the three rotors in machine order.
//!
//! The bank stores its rotors in a fixed array (left, middle, right) and
//! walks it by index: right to left on the way in, left to right on the
//! way back. It also owns the stepping rule, including the double-step of
//! the middle rotor.

use crate::error::EnigmaError;
use crate::rotor::{Direction, Rotor, RotorId};

/// Number of rotors in the bank.
pub const BANK_SIZE: usize = 3;

/// Position of a rotor in the bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotorSlot {
    Left = 0,
    Middle = 1,
    Right = 2,
}

/// Three rotors in a fixed left / middle / right order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotorBank {
    rotors: [Rotor; BANK_SIZE],
}

impl RotorBank {
    /// Builds a bank from rotor ids and window letters, both left to right.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidWindow`] if any window is not a letter.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::rotor::RotorId;
    /// use enigma::rotor_bank::RotorBank;
    ///
    /// let bank = RotorBank::new(
    ///     [RotorId::I, RotorId::II, RotorId::III],
    ///     ['A', 'D', 'U'],
    /// ).unwrap();
    /// assert_eq!(bank.windows(), "ADU");
    /// ```
    pub fn new(
        ids: [RotorId; BANK_SIZE],
        windows: [char; BANK_SIZE],
    ) -> Result<Self, EnigmaError> {
        Ok(RotorBank {
            rotors: [
                Rotor::new(ids[0], windows[0])?,
                Rotor::new(ids[1], windows[1])?,
                Rotor::new(ids[2], windows[2])?,
            ],
        })
    }

    /// Builds a bank at already validated offsets, left to right.
    pub(crate) fn with_offsets(
        ids: [RotorId; BANK_SIZE],
        offsets: [usize; BANK_SIZE],
    ) -> Self {
        RotorBank {
            rotors: [
                Rotor::at_offset(ids[0], offsets[0]),
                Rotor::at_offset(ids[1], offsets[1]),
                Rotor::at_offset(ids[2], offsets[2]),
            ],
        }
    }

    /// Returns the rotor in the given slot.
    pub fn rotor(&self, slot: RotorSlot) -> &Rotor {
        &self.rotors[slot as usize]
    }

    /// Returns the rotor ids, left to right.
    pub fn ids(&self) -> [RotorId; BANK_SIZE] {
        [self.rotors[0].id(), self.rotors[1].id(), self.rotors[2].id()]
    }

    /// Returns the three window letters, left to right.
    pub fn windows(&self) -> String {
        self.rotors.iter().map(Rotor::window).collect()
    }

    /// Turns every rotor to the given offsets, left to right.
    pub(crate) fn set_offsets(&mut self, offsets: [usize; BANK_SIZE]) {
        for (rotor, offset) in self.rotors.iter_mut().zip(offsets) {
            rotor.set_offset(offset);
        }
    }

    /// Advances the bank by one keystroke.
    ///
    /// Notch positions are sampled before anything moves:
    /// 1. The right rotor always steps.
    /// 2. The middle rotor steps if the right or the middle rotor sat on
    ///    its notch.
    /// 3. The left rotor steps if the middle rotor sat on its notch.
    ///
    /// Rule 2 makes a middle rotor parked on its notch step on two
    /// consecutive keystrokes (the double-step anomaly).
    pub fn step(&mut self) {
        let right_at_notch = self.rotors[RotorSlot::Right as usize].is_at_notch();
        let middle_at_notch = self.rotors[RotorSlot::Middle as usize].is_at_notch();

        self.rotors[RotorSlot::Right as usize].step();
        if right_at_notch || middle_at_notch {
            self.rotors[RotorSlot::Middle as usize].step();
        }
        if middle_at_notch {
            self.rotors[RotorSlot::Left as usize].step();
        }
    }

    /// Passes a contact right, middle, left (towards the reflector).
    pub(crate) fn forward(&self, input: usize) -> usize {
        self.rotors
            .iter()
            .rev()
            .fold(input, |signal, rotor| rotor.encode_index(signal, Direction::Forward))
    }

    /// Passes a contact left, middle, right (back from the reflector).
    pub(crate) fn backward(&self, input: usize) -> usize {
        self.rotors
            .iter()
            .fold(input, |signal, rotor| rotor.encode_index(signal, Direction::Backward))
    }
}

//! Reflector: the fixed wheel that turns the signal around.

use std::fmt;

use crate::error::EnigmaError;
use crate::utils::alphabet::{index_to_letter, Contact, ALPHABET_LEN};

/// Reflector B (UKW-B) wiring.
const WIRING: &str = "YRUHQSLDPXNGOKMIEBFZCWVJAT";

/// Fixed self-inverse permutation at the far end of the rotor bank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reflector {
    wiring: [usize; ALPHABET_LEN],
}

impl Default for Reflector {
    fn default() -> Self {
        Self::new()
    }
}

impl Reflector {
    /// Loads the hardwired reflector.
    pub fn new() -> Self {
        let mut wiring = [0usize; ALPHABET_LEN];
        for (i, letter) in WIRING.bytes().enumerate() {
            wiring[i] = (letter - b'A') as usize;
        }
        Reflector { wiring }
    }

    /// Reflects a contact index.
    pub(crate) fn reflect_index(&self, input: usize) -> usize {
        self.wiring[input % ALPHABET_LEN]
    }

    /// Reflects a letter or contact index.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidLetter`] or
    /// [`EnigmaError::InvalidContact`] for malformed input.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::reflector::Reflector;
    ///
    /// let reflector = Reflector::new();
    /// assert_eq!(reflector.reflect('A').unwrap(), 'Y');
    /// assert_eq!(reflector.reflect(24usize).unwrap(), 'A');
    /// ```
    pub fn reflect<C: Contact>(&self, input: C) -> Result<char, EnigmaError> {
        Ok(index_to_letter(self.reflect_index(input.contact()?)))
    }
}

impl fmt::Display for Reflector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Reflector wiring: \n{")?;
        for (i, &target) in self.wiring.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "'{}': '{}'", index_to_letter(i), index_to_letter(target))?;
        }
        f.write_str("}")
    }
}

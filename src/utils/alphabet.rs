//! Letter-to-contact conversion utilities.
//!
//! Every wheel in the machine works on contact indices `0..26` where
//! `A = 0`. These helpers convert between letters and indices and validate
//! caller input on the way in.

use crate::error::EnigmaError;

/// Number of letters (and contacts) on every wheel.
pub const ALPHABET_LEN: usize = 26;

/// Converts a contact index (`0..26`) to its upper-case letter.
///
/// The index is reduced modulo 26 so wrapped arithmetic results can be
/// passed straight in.
pub fn index_to_letter(index: usize) -> char {
    (b'A' + (index % ALPHABET_LEN) as u8) as char
}

/// Converts an ASCII letter of either case to its contact index.
///
/// # Returns
/// `Some(index)` for `A..=Z` / `a..=z`, `None` for anything else.
pub fn letter_to_index(letter: char) -> Option<usize> {
    if letter.is_ascii_alphabetic() {
        Some((letter.to_ascii_uppercase() as u8 - b'A') as usize)
    } else {
        None
    }
}

/// Parses a string that must hold exactly one ASCII letter.
pub(crate) fn single_letter(text: &str) -> Option<usize> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => letter_to_index(c),
        _ => None,
    }
}

/// Parses a three-letter key into contact indices, left to right.
///
/// # Errors
/// Returns [`EnigmaError::InvalidKey`] unless `key` is exactly three ASCII
/// letters.
pub(crate) fn parse_key(key: &str) -> Result<[usize; 3], EnigmaError> {
    let indices: Vec<usize> = key.chars().filter_map(letter_to_index).collect();
    if key.chars().count() != 3 || indices.len() != 3 {
        return Err(EnigmaError::InvalidKey(key.to_string()));
    }
    Ok([indices[0], indices[1], indices[2]])
}

/// A keyboard input: something that names exactly one letter.
///
/// Implemented for `char` and `&str`. Only letters are accepted, in either
/// case.
pub trait Keystroke {
    /// Returns the contact index of this keystroke.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidLetter`] if this is not a single letter.
    fn keystroke(&self) -> Result<usize, EnigmaError>;
}

impl Keystroke for char {
    fn keystroke(&self) -> Result<usize, EnigmaError> {
        letter_to_index(*self).ok_or_else(|| EnigmaError::InvalidLetter(self.to_string()))
    }
}

impl Keystroke for &str {
    fn keystroke(&self) -> Result<usize, EnigmaError> {
        single_letter(self).ok_or_else(|| EnigmaError::InvalidLetter(self.to_string()))
    }
}

/// A signal entering a wheel: a letter or a raw contact index.
///
/// Implemented for `char`, `&str` and `usize` (`0..26`).
pub trait Contact {
    /// Returns the contact index of this signal.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidLetter`] for a malformed letter and
    /// [`EnigmaError::InvalidContact`] for an index outside `0..26`.
    fn contact(&self) -> Result<usize, EnigmaError>;
}

impl Contact for char {
    fn contact(&self) -> Result<usize, EnigmaError> {
        self.keystroke()
    }
}

impl Contact for &str {
    fn contact(&self) -> Result<usize, EnigmaError> {
        self.keystroke()
    }
}

impl Contact for usize {
    fn contact(&self) -> Result<usize, EnigmaError> {
        if *self < ALPHABET_LEN {
            Ok(*self)
        } else {
            Err(EnigmaError::InvalidContact(*self))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_to_letter_wraps() {
        assert_eq!(index_to_letter(0), 'A');
        assert_eq!(index_to_letter(25), 'Z');
        assert_eq!(index_to_letter(26), 'A');
    }

    #[test]
    fn test_letter_to_index_cases() {
        assert_eq!(letter_to_index('A'), Some(0));
        assert_eq!(letter_to_index('z'), Some(25));
        assert_eq!(letter_to_index('1'), None);
        assert_eq!(letter_to_index('é'), None);
    }

    #[test]
    fn test_parse_key() {
        assert_eq!(parse_key("AbZ").unwrap(), [0, 1, 25]);
        assert_eq!(
            parse_key("AB"),
            Err(EnigmaError::InvalidKey("AB".to_string()))
        );
        assert!(parse_key("ABCD").is_err());
        assert!(parse_key("A1C").is_err());
        assert!(parse_key("").is_err());
    }

    #[test]
    fn test_keystroke_str() {
        assert_eq!("q".keystroke().unwrap(), 16);
        assert_eq!(
            "AB".keystroke(),
            Err(EnigmaError::InvalidLetter("AB".to_string()))
        );
        assert!("".keystroke().is_err());
    }

    #[test]
    fn test_contact_index_bounds() {
        assert_eq!(25usize.contact().unwrap(), 25);
        assert_eq!(26usize.contact(), Err(EnigmaError::InvalidContact(26)));
        assert_eq!('C'.contact().unwrap(), 2);
    }
}

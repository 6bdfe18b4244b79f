//! Plugboard: symmetric letter swaps at the machine's input and output.
//!
//! Holds up to [`MAX_PAIRS`] disjoint letter pairs. Letters without a
//! cable pass through unchanged.

use std::fmt;
use std::str::FromStr;

use tracing::warn;

use crate::error::EnigmaError;
use crate::notice::Notice;
use crate::utils::alphabet::{index_to_letter, letter_to_index, Keystroke, ALPHABET_LEN};

/// Maximum number of cables on the board.
pub const MAX_PAIRS: usize = 6;

/// One plug cable joining two distinct letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlugPair {
    a: usize,
    b: usize,
}

impl PlugPair {
    /// Returns the two letters of the cable, in the order given.
    pub fn letters(&self) -> (char, char) {
        (index_to_letter(self.a), index_to_letter(self.b))
    }

    fn same_cable(&self, other: &PlugPair) -> bool {
        (self.a == other.a && self.b == other.b) || (self.a == other.b && self.b == other.a)
    }

    fn touches(&self, index: usize) -> bool {
        self.a == index || self.b == index
    }
}

impl FromStr for PlugPair {
    type Err = EnigmaError;

    /// Parses a two-letter pair such as `"AB"` (either case).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || EnigmaError::InvalidPlugPair(s.to_string());
        let letters: Vec<char> = s.chars().collect();
        if letters.len() != 2 {
            return Err(invalid());
        }
        PlugPair::try_from((letters[0], letters[1])).map_err(|_| invalid())
    }
}

impl TryFrom<&str> for PlugPair {
    type Error = EnigmaError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl TryFrom<(char, char)> for PlugPair {
    type Error = EnigmaError;

    fn try_from((first, second): (char, char)) -> Result<Self, Self::Error> {
        let invalid = || EnigmaError::InvalidPlugPair(format!("{}{}", first, second));
        let a = letter_to_index(first).ok_or_else(invalid)?;
        let b = letter_to_index(second).ok_or_else(invalid)?;
        if a == b {
            return Err(invalid());
        }
        Ok(PlugPair { a, b })
    }
}

/// A plug cable as handed to the board: two letters, in string or tuple form.
///
/// Implemented for `&str` and `String` (`"AB"`), `(char, char)`
/// (`('A', 'B')`) and [`PlugPair`] itself.
pub trait Cable {
    /// Parses this cable into a [`PlugPair`].
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidPlugPair`] unless this names two
    /// distinct letters.
    fn cable(&self) -> Result<PlugPair, EnigmaError>;
}

impl Cable for &str {
    fn cable(&self) -> Result<PlugPair, EnigmaError> {
        PlugPair::try_from(*self)
    }
}

impl Cable for String {
    fn cable(&self) -> Result<PlugPair, EnigmaError> {
        self.parse()
    }
}

impl Cable for (char, char) {
    fn cable(&self) -> Result<PlugPair, EnigmaError> {
        PlugPair::try_from(*self)
    }
}

impl Cable for PlugPair {
    fn cable(&self) -> Result<PlugPair, EnigmaError> {
        Ok(*self)
    }
}

/// Symmetric partial permutation applied before and after the rotors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plugboard {
    table: [usize; ALPHABET_LEN],
    pairs: Vec<PlugPair>,
}

impl Default for Plugboard {
    fn default() -> Self {
        Plugboard {
            table: identity(),
            pairs: Vec::new(),
        }
    }
}

impl Plugboard {
    /// Creates a plugboard from cables such as `["AB", "CD"]` or
    /// `[('A', 'B'), ('C', 'D')]`.
    ///
    /// An empty slice gives a board with no cables.
    ///
    /// # Errors
    /// - [`EnigmaError::InvalidPlugPair`] if a pair is not two distinct letters.
    /// - [`EnigmaError::PlugConflict`] if a letter appears in two pairs.
    /// - [`EnigmaError::TooManyPlugPairs`] for more than [`MAX_PAIRS`] pairs.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::plugboard::Plugboard;
    ///
    /// let board = Plugboard::new(&["AB", "CD"]).unwrap();
    /// assert_eq!(board.encode('A').unwrap(), 'B');
    /// assert_eq!(board.encode('D').unwrap(), 'C');
    /// assert_eq!(board.encode('Z').unwrap(), 'Z');
    ///
    /// let tuples = Plugboard::new(&[('A', 'B'), ('C', 'D')]).unwrap();
    /// assert_eq!(tuples, board);
    /// ```
    pub fn new<C: Cable>(pairs: &[C]) -> Result<Self, EnigmaError> {
        Self::from_pairs(&parse_pairs(pairs)?)
    }

    /// Creates a plugboard from already parsed cables.
    ///
    /// # Errors
    /// Same as [`new`](Self::new), minus pair parsing.
    pub fn from_pairs(pairs: &[PlugPair]) -> Result<Self, EnigmaError> {
        let staged = stage(Vec::new(), pairs)?;
        if staged.len() > MAX_PAIRS {
            return Err(EnigmaError::TooManyPlugPairs(staged.len()));
        }
        let mut board = Plugboard::default();
        board.commit(staged);
        Ok(board)
    }

    /// Adds cables, or replaces every cable when `replace` is set.
    ///
    /// The update is all-or-nothing. Re-plugging an existing cable is a
    /// no-op.
    ///
    /// # Returns
    /// [`Notice::Applied`] when the board changed, or [`Notice::Ignored`]
    /// when the result would hold more than [`MAX_PAIRS`] cables. In the
    /// second case the board keeps its previous cables.
    ///
    /// # Errors
    /// [`EnigmaError::InvalidPlugPair`] or [`EnigmaError::PlugConflict`];
    /// the board is left untouched.
    pub fn update_swaps<C: Cable>(
        &mut self,
        pairs: &[C],
        replace: bool,
    ) -> Result<Notice, EnigmaError> {
        let parsed = parse_pairs(pairs)?;
        let base = if replace { Vec::new() } else { self.pairs.clone() };
        let staged = stage(base, &parsed)?;
        if staged.len() > MAX_PAIRS {
            let reason = format!(
                "Plugboard holds at most {} pairs; update to {} pairs ignored",
                MAX_PAIRS,
                staged.len()
            );
            warn!(requested = staged.len(), current = self.pairs.len(), "{}", reason);
            return Ok(Notice::ignored(reason));
        }
        self.commit(staged);
        Ok(Notice::applied())
    }

    /// Removes every cable.
    pub fn clear(&mut self) {
        self.commit(Vec::new());
    }

    /// Swaps a letter through the board.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidLetter`] if `letter` is not a letter.
    pub fn encode<K: Keystroke>(&self, letter: K) -> Result<char, EnigmaError> {
        Ok(index_to_letter(self.encode_index(letter.keystroke()?)))
    }

    pub(crate) fn encode_index(&self, input: usize) -> usize {
        self.table[input % ALPHABET_LEN]
    }

    /// Returns the cables in insertion order.
    pub fn pairs(&self) -> &[PlugPair] {
        &self.pairs
    }

    /// Returns the cables as two-letter strings, in insertion order.
    pub fn pair_strings(&self) -> Vec<String> {
        self.pairs
            .iter()
            .map(|p| {
                let (a, b) = p.letters();
                format!("{}{}", a, b)
            })
            .collect()
    }

    /// Returns the number of cables.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns `true` if no cables are plugged.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    fn commit(&mut self, pairs: Vec<PlugPair>) {
        self.table = identity();
        for pair in &pairs {
            self.table[pair.a] = pair.b;
            self.table[pair.b] = pair.a;
        }
        self.pairs = pairs;
    }
}

fn identity() -> [usize; ALPHABET_LEN] {
    let mut table = [0usize; ALPHABET_LEN];
    for (i, slot) in table.iter_mut().enumerate() {
        *slot = i;
    }
    table
}

fn parse_pairs<C: Cable>(pairs: &[C]) -> Result<Vec<PlugPair>, EnigmaError> {
    pairs.iter().map(Cable::cable).collect()
}

/// Appends `incoming` to `base`, skipping repeats and rejecting conflicts.
fn stage(mut base: Vec<PlugPair>, incoming: &[PlugPair]) -> Result<Vec<PlugPair>, EnigmaError> {
    for pair in incoming {
        if base.iter().any(|p| p.same_cable(pair)) {
            continue;
        }
        for index in [pair.a, pair.b] {
            if base.iter().any(|p| p.touches(index)) {
                return Err(EnigmaError::PlugConflict(index_to_letter(index)));
            }
        }
        base.push(*pair);
    }
    Ok(base)
}

impl fmt::Display for Plugboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, pair) in self.pairs.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            let (a, b) = pair.letters();
            write!(f, "{} <-> {}", a, b)?;
        }
        Ok(())
    }
}

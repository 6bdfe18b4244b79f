//! Optional five-letter grouping for ciphertext display.
//!
//! The machine itself always produces unspaced output. Operators
//! traditionally transmitted text in fixed-size groups; these helpers apply
//! and strip that layout without touching the cipher core.

/// Traditional group size for transmitted ciphertext.
pub const DEFAULT_GROUP: usize = 5;

/// Splits `text` into space-separated groups of `size` characters.
///
/// Any existing spaces are dropped first. A `size` of zero returns the
/// text unspaced.
///
/// # Examples
///
/// ```
/// use enigma::utils::grouping::group;
///
/// assert_eq!(group("ILBDAAMTAZ", 5), "ILBDA AMTAZ");
/// assert_eq!(group("ILBDAAMT", 3), "ILB DAA MT");
/// ```
pub fn group(text: &str, size: usize) -> String {
    let letters: Vec<char> = text.chars().filter(|c| *c != ' ').collect();
    if size == 0 {
        return letters.into_iter().collect();
    }
    letters
        .chunks(size)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Removes grouping spaces from `text`.
pub fn ungroup(text: &str) -> String {
    text.chars().filter(|c| *c != ' ').collect()
}

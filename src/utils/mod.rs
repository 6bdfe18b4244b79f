//! Letter conversion and text layout helpers.

pub mod alphabet;
pub mod grouping;

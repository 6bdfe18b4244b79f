//! Three-rotor Enigma cipher machine.
//!
//! Emulates the electromechanical rotor cipher: three rotating wiring
//! wheels, a fixed reflector and a plugboard, stepped once per keystroke
//! with the historical notch carry and middle-rotor double step. Output is
//! letter-for-letter identical to the wartime Enigma I with reflector B and
//! ring settings at `A`.
//!
//! The machine is a reciprocal cipher: the same settings that encipher a
//! message also decipher it. It offers no security and is provided for
//! compatibility and study.
//!
//! # Architecture
//!
//! ```text
//! Rotor      (one wheel: wiring, window, notch)
//!     × 3 in a fixed left / middle / right array
//! RotorBank  (stepping rule + forward / backward traversal)
//!     + Reflector + Plugboard
//! Enigma     (key schedule + signal path)
//! ```
//!
//! # Examples
//!
//! Encipher with one machine, decipher with another set the same way:
//!
//! ```
//! use enigma::Enigma;
//!
//! let mut sender = Enigma::with_config("MCK", &["AB", "CD"], &["II", "V", "I"]).unwrap();
//! let mut receiver = Enigma::with_config("MCK", &["AB", "CD"], &["II", "V", "I"]).unwrap();
//!
//! let ciphertext = sender.encipher("WEATHER REPORT").unwrap();
//! assert_ne!(ciphertext, "WEATHERREPORT");
//! assert_eq!(receiver.decipher(&ciphertext).unwrap(), "WEATHERREPORT");
//! ```
//!
//! Lenient settings report instead of failing:
//!
//! ```
//! use enigma::Enigma;
//!
//! let mut machine = Enigma::new();
//! let notice = machine.set_rotor_position("AB", false);
//! assert!(!notice.is_applied());
//! assert_eq!(machine.key(), "AAA");
//! ```

#![deny(clippy::all)]

pub mod config;
pub mod error;
pub mod notice;
pub mod plugboard;
pub mod reflector;
pub mod rotor;
pub mod rotor_bank;
pub mod utils;

mod enigma;

pub use enigma::Enigma;

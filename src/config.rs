//! Machine settings: the key sheet for one cipher session.
//!
//! [`MachineSettings`] is the serializable form of everything an operator
//! sets before typing: the rotor order, the starting key and the plug
//! cables. Storing or exchanging it is left to the caller.

use serde::{Deserialize, Serialize};

/// Default starting key.
pub const DEFAULT_KEY: &str = "AAA";

/// Default rotor order, left to right.
pub const DEFAULT_ROTOR_ORDER: [&str; 3] = ["I", "II", "III"];

/// Rotor order, key and plug cables for one machine.
///
/// # Examples
///
/// ```
/// use enigma::config::MachineSettings;
/// use enigma::Enigma;
///
/// let settings = MachineSettings::default()
///     .with_key("XYZ")
///     .with_swaps(["AB", "CD"])
///     .with_rotor_order(["III", "I", "II"]);
/// let machine = Enigma::from_settings(&settings).unwrap();
/// assert_eq!(machine.key(), "XYZ");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineSettings {
    /// Three window letters, left to right.
    pub key: String,
    /// Plug cables as two-letter strings.
    pub swaps: Vec<String>,
    /// Three rotor names, left to right.
    pub rotor_order: Vec<String>,
}

impl Default for MachineSettings {
    fn default() -> Self {
        MachineSettings {
            key: DEFAULT_KEY.to_string(),
            swaps: Vec::new(),
            rotor_order: DEFAULT_ROTOR_ORDER.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl MachineSettings {
    /// Replaces the starting key.
    pub fn with_key(mut self, key: &str) -> Self {
        self.key = key.to_string();
        self
    }

    /// Replaces the plug cables.
    pub fn with_swaps<I, S>(mut self, swaps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.swaps = swaps.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the rotor order.
    pub fn with_rotor_order<I, S>(mut self, order: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rotor_order = order.into_iter().map(Into::into).collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = MachineSettings::default();
        assert_eq!(settings.key, "AAA");
        assert!(settings.swaps.is_empty());
        assert_eq!(settings.rotor_order, vec!["I", "II", "III"]);
    }

    #[test]
    fn test_builders() {
        let settings = MachineSettings::default()
            .with_key("QEV")
            .with_swaps(vec!["AZ".to_string()])
            .with_rotor_order(["V", "I", "II"]);
        assert_eq!(settings.key, "QEV");
        assert_eq!(settings.swaps, vec!["AZ"]);
        assert_eq!(settings.rotor_order, vec!["V", "I", "II"]);
    }
}

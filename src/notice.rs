//! Outcome of a lenient configuration call.
//!
//! Some settings (the rotor position and plugboard updates past the pair
//! limit) are not errors when malformed: the call leaves the machine as it
//! was and reports why. [`Notice`] carries that report back to the caller,
//! alongside the `tracing` event emitted at the same time.

/// Result of a configuration call that degrades instead of failing.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// The setting took effect. `message` holds the confirmation text when
    /// the caller asked for an announcement.
    Applied { message: Option<String> },
    /// The setting was refused and the machine is unchanged.
    Ignored { reason: String },
}

impl Notice {
    pub(crate) fn applied() -> Self {
        Notice::Applied { message: None }
    }

    pub(crate) fn announced(message: String) -> Self {
        Notice::Applied {
            message: Some(message),
        }
    }

    pub(crate) fn ignored(reason: String) -> Self {
        Notice::Ignored { reason }
    }

    /// Returns `true` if the setting took effect.
    pub fn is_applied(&self) -> bool {
        matches!(self, Notice::Applied { .. })
    }

    /// Returns the confirmation or diagnostic text, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            Notice::Applied { message } => message.as_deref(),
            Notice::Ignored { reason } => Some(reason),
        }
    }
}

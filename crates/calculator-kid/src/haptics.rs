//! Haptic feedback hook
//!
//! Fire-and-forget: implementations swallow a missing capability and never
//! report back to the caller.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::core::Action;

/// A vibration pattern in milliseconds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HapticPattern {
    /// Single vibration
    Pulse(u32),
    /// Alternating vibrate/pause durations, starting with vibrate
    Sequence(Vec<u32>),
}

impl HapticPattern {
    /// Pulse for digit and decimal keys
    pub const KEY_MS: u32 = 5;
    /// Pulse for operator keys
    pub const OPERATOR_MS: u32 = 10;
    /// Pulse for the clear key
    pub const CLEAR_MS: u32 = 15;
    /// Vibrate/pause/vibrate for the equals key
    pub const EQUALS_SEQUENCE: [u32; 3] = [10, 30, 10];

    /// Feedback for a keypad action.
    ///
    /// Equals vibrates even when nothing is pending.
    #[must_use]
    pub fn for_action(action: Action) -> Self {
        match action {
            Action::Digit(_) | Action::Decimal => Self::Pulse(Self::KEY_MS),
            Action::Operator(_) => Self::Pulse(Self::OPERATOR_MS),
            Action::Clear => Self::Pulse(Self::CLEAR_MS),
            Action::Equals => Self::Sequence(Self::EQUALS_SEQUENCE.to_vec()),
        }
    }

    /// Feedback for the info button
    #[must_use]
    pub fn info_button() -> Self {
        Self::Pulse(Self::KEY_MS)
    }

    /// Durations as a slice
    #[must_use]
    pub fn durations(&self) -> &[u32] {
        match self {
            Self::Pulse(ms) => std::slice::from_ref(ms),
            Self::Sequence(seq) => seq,
        }
    }

    /// Total time the pattern occupies, pauses included
    #[must_use]
    pub fn total_ms(&self) -> u32 {
        self.durations().iter().sum()
    }
}

/// Device feedback sink
pub trait Haptics: fmt::Debug {
    /// Best-effort vibration; never blocks, never fails
    fn vibrate(&self, pattern: &HapticPattern);
}

/// Haptics for platforms without a vibration motor
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHaptics;

impl Haptics for NoHaptics {
    fn vibrate(&self, pattern: &HapticPattern) {
        tracing::trace!(?pattern, "haptics unavailable");
    }
}

/// Haptics that remembers every pattern; clones share the log
#[derive(Debug, Clone, Default)]
pub struct RecordingHaptics {
    log: Rc<RefCell<Vec<HapticPattern>>>,
}

impl RecordingHaptics {
    /// Creates an empty recorder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Patterns received so far, oldest first
    #[must_use]
    pub fn patterns(&self) -> Vec<HapticPattern> {
        self.log.borrow().clone()
    }

    /// Number of patterns received
    #[must_use]
    pub fn len(&self) -> usize {
        self.log.borrow().len()
    }

    /// Returns true if nothing was received
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.log.borrow().is_empty()
    }

    /// Forgets all patterns
    pub fn clear(&self) {
        self.log.borrow_mut().clear();
    }
}

impl Haptics for RecordingHaptics {
    fn vibrate(&self, pattern: &HapticPattern) {
        self.log.borrow_mut().push(pattern.clone());
    }
}

//! Form state — a stand-in for the host form framework's per-field
//! validity bookkeeping.
//!
//! The host framework owns the dirty/invalid flags; the controller flips
//! individual validity keys and reads the aggregate flags back.

use std::collections::HashMap;

/// Field-level validity keys the controller sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidityKey {
    /// Name does not collide (case-insensitively) with an existing service.
    UniqueServiceName,
    /// Service-level start/end times are in order.
    TimeSequence,
    /// Max-appointments limit respects its minimum.
    MinLoad,
}

impl ValidityKey {
    /// The key string used by the host form framework.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::UniqueServiceName => "uniqueServiceName",
            Self::TimeSequence => "timeSequence",
            Self::MinLoad => "min",
        }
    }
}

/// Aggregate form state plus the validity keys set so far.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    /// Whether any field was modified since load.
    pub dirty: bool,
    /// Whether the enclosing form currently reports invalid.
    pub invalid: bool,
    validity: HashMap<ValidityKey, bool>,
}

impl FormState {
    /// Record a field-level validity verdict.
    pub fn set_validity(&mut self, key: ValidityKey, valid: bool) {
        self.validity.insert(key, valid);
    }

    /// The last verdict recorded for a key, if any.
    #[must_use]
    pub fn validity(&self, key: ValidityKey) -> Option<bool> {
        self.validity.get(&key).copied()
    }
}

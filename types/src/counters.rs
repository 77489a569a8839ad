//! Match and mismatch counters for verification attempts.

/// Counts how often an encrypted code matched the authorised code.
///
/// Both counters are monotonically non-decreasing for the life of the
/// process and are never reset. Exactly one of them is incremented per
/// completed encrypt-and-verify operation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MatchCounters {
    matches: u64,
    mismatches: u64,
}

impl MatchCounters {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            matches: 0,
            mismatches: 0,
        }
    }

    /// Record the outcome of one completed verification.
    pub fn record(&mut self, matched: bool) {
        if matched {
            self.matches = self.matches.saturating_add(1);
        } else {
            self.mismatches = self.mismatches.saturating_add(1);
        }
    }

    /// How many verifications matched the authorised code.
    #[must_use]
    pub const fn matches(&self) -> u64 {
        self.matches
    }

    /// How many verifications did not match the authorised code.
    #[must_use]
    pub const fn mismatches(&self) -> u64 {
        self.mismatches
    }
}

//! The authentication session: one entered code travelling through the
//! transform cycle, plus the process-lifetime match counters.

use pinlock_types::{Code, CodeError, MatchCounters};
use thiserror::Error;

use crate::transform;

/// Errors for operations requested in a phase that does not permit them.
///
/// All of these are recovered locally: the session is left unchanged and
/// control returns to the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Encrypt or decrypt was requested before any valid entry.
    #[error("no code has been entered yet")]
    NoCodeEntered,
    /// Encrypt was requested while the code is already encrypted.
    #[error("the entered code is already encrypted, decrypt it first")]
    AlreadyEncrypted,
    /// Decrypt was requested while the code is already decrypted.
    #[error("the entered code is already decrypted, encrypt it first")]
    AlreadyDecrypted,
}

/// Where the entered code currently sits in the transform cycle.
///
/// # State Machine
/// ```text
/// ┌────────┐  enter_code    ┌───────────┐  encrypt_and_verify   ┌───────────┐
/// │ NoCode │ ─────────────> │ Decrypted │ ────────────────────> │ Encrypted │
/// └────────┘                └───────────┘ <──────────────────── └───────────┘
///                                 ^              decrypt              │
///                                 └── enter_code resets here from any state
/// ```
///
/// The code travels with its phase, so "entered but empty" and "both
/// encrypted and decrypted" are unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState<const LEN: usize> {
    /// No valid code has been entered.
    NoCode,
    /// A code is held in raw (decrypted) form.
    Decrypted(Code<LEN>),
    /// A code is held in transformed (encrypted) form.
    Encrypted(Code<LEN>),
}

impl<const LEN: usize> SessionState<LEN> {
    /// The held code, in whichever phase (available unless `NoCode`).
    #[must_use]
    pub const fn code(&self) -> Option<&Code<LEN>> {
        match self {
            SessionState::NoCode => None,
            SessionState::Decrypted(code) | SessionState::Encrypted(code) => Some(code),
        }
    }
}

/// Result of a completed encrypt-and-verify operation.
///
/// Both variants are successful operations that leave the session in the
/// encrypted phase; they differ only in whether the encrypted code matched
/// the authorised one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyOutcome<const LEN: usize> {
    /// The encrypted code matches the authorised access code.
    Granted { encrypted: Code<LEN> },
    /// The encrypted code does not match the authorised access code.
    Denied { encrypted: Code<LEN> },
}

impl<const LEN: usize> VerifyOutcome<LEN> {
    #[must_use]
    pub const fn matched(&self) -> bool {
        matches!(self, VerifyOutcome::Granted { .. })
    }

    /// The encrypted code (available in both outcomes).
    #[must_use]
    pub const fn encrypted(&self) -> &Code<LEN> {
        match self {
            VerifyOutcome::Granted { encrypted } | VerifyOutcome::Denied { encrypted } => encrypted,
        }
    }
}

/// One authentication session: the authorised code, the current entry and
/// its phase, and the match counters.
///
/// Single-threaded by design; every operation runs to completion before the
/// next menu prompt and none of this is safe to share across threads
/// without revisiting that assumption.
#[derive(Debug)]
pub struct Session<const LEN: usize> {
    authorised: Code<LEN>,
    state: SessionState<LEN>,
    counters: MatchCounters,
}

impl<const LEN: usize> Session<LEN> {
    #[must_use]
    pub fn new(authorised: Code<LEN>) -> Self {
        Self {
            authorised,
            state: SessionState::NoCode,
            counters: MatchCounters::new(),
        }
    }

    /// Replace the current code with a freshly entered one.
    ///
    /// Every character of `input` is validated; the first non-digit aborts
    /// the whole entry. An aborted entry discards any previously held code
    /// as well: the session lands at [`SessionState::NoCode`]. Counters are
    /// untouched either way.
    pub fn enter_code(&mut self, input: &str) -> Result<Code<LEN>, CodeError> {
        match input.parse::<Code<LEN>>() {
            Ok(code) => {
                tracing::debug!(%code, "code entered, session reset to decrypted");
                self.state = SessionState::Decrypted(code);
                Ok(code)
            }
            Err(err) => {
                tracing::warn!(%err, "code entry aborted");
                self.state = SessionState::NoCode;
                Err(err)
            }
        }
    }

    /// Encrypt the entered code in place and compare it to the authorised
    /// code.
    ///
    /// Exactly one counter is incremented per completed call. Both match
    /// outcomes are successes; only the wrong phase is an error, and an
    /// error mutates nothing.
    pub fn encrypt_and_verify(&mut self) -> Result<VerifyOutcome<LEN>, AuthError> {
        let code = match &self.state {
            SessionState::NoCode => {
                tracing::warn!("encrypt requested before any code was entered");
                return Err(AuthError::NoCodeEntered);
            }
            SessionState::Encrypted(_) => {
                tracing::warn!("encrypt requested but the code is already encrypted");
                return Err(AuthError::AlreadyEncrypted);
            }
            SessionState::Decrypted(code) => code,
        };

        let encrypted = transform::forward(code);
        let matched = encrypted == self.authorised;
        self.counters.record(matched);
        self.state = SessionState::Encrypted(encrypted);
        tracing::info!(matched, "code encrypted and verified");

        if matched {
            Ok(VerifyOutcome::Granted { encrypted })
        } else {
            Ok(VerifyOutcome::Denied { encrypted })
        }
    }

    /// Decrypt the encrypted code back to its entered form and return it.
    ///
    /// No counter is touched. An error mutates nothing.
    pub fn decrypt(&mut self) -> Result<Code<LEN>, AuthError> {
        let code = match &self.state {
            SessionState::NoCode => {
                tracing::warn!("decrypt requested before any code was entered");
                return Err(AuthError::NoCodeEntered);
            }
            SessionState::Decrypted(_) => {
                tracing::warn!("decrypt requested but the code is already decrypted");
                return Err(AuthError::AlreadyDecrypted);
            }
            SessionState::Encrypted(code) => code,
        };

        let decrypted = transform::inverse(code);
        self.state = SessionState::Decrypted(decrypted);
        tracing::debug!(%decrypted, "code decrypted");
        Ok(decrypted)
    }

    /// Snapshot of the match counters; never resets them.
    #[must_use]
    pub const fn counters(&self) -> MatchCounters {
        self.counters
    }

    #[must_use]
    pub const fn state(&self) -> &SessionState<LEN> {
        &self.state
    }
}

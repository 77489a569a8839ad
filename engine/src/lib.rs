//! Session state machine and orchestration for Pinlock.
//!
//! # Architecture
//!
//! ```text
//! MenuAction   (parsed selection)
//!      |
//!      v
//! Session      (state machine: NoCode -> Decrypted <-> Encrypted)
//!      |
//!      +-- transform::forward / transform::inverse   (pure digit transforms)
//!      +-- MatchCounters                             (verification tally)
//! ```
//!
//! The console collaborator lives in the `pinlock` binary crate; everything
//! here is synchronous and free of I/O apart from tracing.

pub mod menu;
pub mod session;
pub mod transform;

pub use menu::{MENU, MenuAction, MenuEntry, SelectionError};
pub use session::{AuthError, Session, SessionState, VerifyOutcome};

/// Number of digits in a PIN code.
pub const PIN_LENGTH: usize = 4;

/// The authorised access code every encrypted entry is compared against.
///
/// Fixed at compile time, same length as [`PIN_LENGTH`].
pub const ACCESS_CODE: &str = "4523";

/// A code of the configured PIN length.
pub type PinCode = pinlock_types::Code<PIN_LENGTH>;

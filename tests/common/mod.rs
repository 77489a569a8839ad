//! Shared test utilities and fixtures
//!
//! Common infrastructure for integration tests.

#![allow(dead_code)]

use std::io::Cursor;

use pinlock::console::{Console, LoopEnd};
use pinlock_engine::{ACCESS_CODE, PIN_LENGTH, PinCode, Session};

/// A session against the default authorised code.
pub fn default_session() -> Session<PIN_LENGTH> {
    Session::new(ACCESS_CODE.parse::<PinCode>().unwrap())
}

/// Drive the console loop with scripted input and capture the transcript.
pub fn run_transcript(input: &str) -> (String, LoopEnd, Session<PIN_LENGTH>) {
    let mut session = default_session();
    let mut output = Vec::new();
    let end = Console::new(Cursor::new(input.as_bytes()), &mut output)
        .run(&mut session)
        .expect("in-memory console never fails");
    let transcript = String::from_utf8(output).expect("transcript is UTF-8");
    (transcript, end, session)
}

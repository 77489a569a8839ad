//! Scripted end-to-end menu transcripts.
//!
//! Each test feeds a whole interactive session through the console loop and
//! checks the transcript the user would have seen.

use insta::assert_snapshot;

use pinlock::console::LoopEnd;
use pinlock_engine::SessionState;

use crate::common::run_transcript;

#[test]
fn exit_immediately() {
    let (transcript, end, _) = run_transcript("5\ny\n");
    assert_eq!(end, LoopEnd::Confirmed);
    assert_snapshot!(transcript.trim(), @r"
    Security Authentication
    Enter your selection:
      1. Enter any code
      2. Encrypt the entered code and verify it against the authorised code
      3. Decrypt the code
      4. Display successful and unsuccessful match counts
      5. Exit the program

    Are you sure you want to exit the program? (y/n)

    The program has exited successfully
    ");
}

#[test]
fn invalid_selection_reprompts() {
    let (transcript, end, _) = run_transcript("9\n5\ny\n");
    assert_eq!(end, LoopEnd::Confirmed);
    assert_snapshot!(transcript.trim(), @r"
    Security Authentication
    Enter your selection:
      1. Enter any code
      2. Encrypt the entered code and verify it against the authorised code
      3. Decrypt the code
      4. Display successful and unsuccessful match counts
      5. Exit the program

    ERROR: please input whole numbers only between 1 and 5 inclusive

    Security Authentication
    Enter your selection:
      1. Enter any code
      2. Encrypt the entered code and verify it against the authorised code
      3. Decrypt the code
      4. Display successful and unsuccessful match counts
      5. Exit the program

    Are you sure you want to exit the program? (y/n)

    The program has exited successfully
    ");
}

#[test]
fn denied_flow_reports_each_step() {
    let (transcript, end, session) = run_transcript("1\n3452\n2\n3\n4\n5\ny\n");
    assert_eq!(end, LoopEnd::Confirmed);
    assert!(transcript.contains("Input your 4-digit code:"));
    assert!(transcript.contains(
        "Access denied. The encrypted code does not match the authorised access code."
    ));
    assert!(transcript.contains("Code decrypted: 3452"));
    assert!(transcript.contains(
        "The encrypted code matched the authorised access code 0 times and unmatched 1 times"
    ));
    assert_eq!(session.counters().mismatches(), 1);
}

#[test]
fn granted_flow_counts_the_match() {
    let (transcript, end, session) = run_transcript("1\n1234\n2\n4\n5\ny\n");
    assert_eq!(end, LoopEnd::Confirmed);
    assert!(
        transcript
            .contains("Access granted. The encrypted code matches the authorised access code.")
    );
    assert!(transcript.contains(
        "The encrypted code matched the authorised access code 1 times and unmatched 0 times"
    ));
    assert_eq!(session.counters().matches(), 1);
    assert_eq!(session.counters().mismatches(), 0);
}

#[test]
fn code_entry_accepts_whitespace_between_digits() {
    let (transcript, _, session) = run_transcript("1\n4 5 2 3\n2\n5\ny\n");
    assert!(transcript.contains("Access denied."));
    assert_eq!(session.counters().mismatches(), 1);
}

#[test]
fn transform_requests_without_a_code_are_reported() {
    let (transcript, _, _) = run_transcript("2\n3\n5\ny\n");
    assert_eq!(
        transcript
            .matches("ERROR: no code has been entered yet")
            .count(),
        2
    );
}

#[test]
fn aborted_entry_reports_the_offending_character() {
    let (transcript, end, session) = run_transcript("1\n12a3\n5\ny\n");
    assert_eq!(end, LoopEnd::Confirmed);
    assert!(transcript.contains(
        "ERROR: invalid digit 'a' at position 2, only numbers 0 through 9 are accepted. \
         Returning to the menu."
    ));
    // The rest of the aborted line is discarded, so the "3" after the abort
    // point never becomes a menu selection.
    assert!(!transcript.contains("ERROR: no code has been entered yet"));
    assert_eq!(*session.state(), SessionState::NoCode);
}

#[test]
fn short_entry_line_reports_missing_digits() {
    // EOF right after two digits: the entry is rejected as incomplete.
    let (transcript, end, _) = run_transcript("1\n45");
    assert_eq!(end, LoopEnd::Eof);
    assert!(transcript.contains("ERROR: expected exactly 4 digits, got 2. Returning to the menu."));
}

#[test]
fn wrong_phase_transforms_are_reported() {
    let (transcript, _, _) = run_transcript("1\n3452\n2\n2\n5\ny\n");
    assert!(transcript.contains("ERROR: the entered code is already encrypted, decrypt it first"));

    let (transcript, _, _) = run_transcript("1\n3452\n3\n5\ny\n");
    assert!(transcript.contains("ERROR: the entered code is already decrypted, encrypt it first"));
}

#[test]
fn exit_confirmation_insists_on_a_single_character() {
    let (transcript, end, session) = run_transcript("5\nyes\nn\n1\n1234\n5\nY\n");
    assert_eq!(end, LoopEnd::Confirmed);
    // First prompt, re-prompt after "yes", and the prompt of the second exit.
    assert_eq!(
        transcript
            .matches("Are you sure you want to exit the program? (y/n)")
            .count(),
        3
    );
    assert!(matches!(*session.state(), SessionState::Decrypted(_)));
}

#[test]
fn end_of_input_ends_the_loop_cleanly() {
    let (transcript, end, _) = run_transcript("");
    assert_eq!(end, LoopEnd::Eof);
    assert!(transcript.contains("The program has exited successfully"));

    let (_, end, _) = run_transcript("5\n");
    assert_eq!(end, LoopEnd::Eof);
}

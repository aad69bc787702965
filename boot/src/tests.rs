/// Unit tests for the boot support modules — diagnostic record, phase flag.
///
/// These tests exercise pure in-memory logic without any hardware I/O.
/// Run with: cargo test --target x86_64-unknown-linux-gnu --lib
use crate::diag::{DiagRecord, MSG_CAP};
use crate::phase::{Phase, PhaseFlag};

// ---- DiagRecord: capture semantics ----

#[test]
fn capture_preserves_message() {
    let mut rec = DiagRecord::new();
    rec.capture(format_args!("divide by zero at module X, line 12"), None);

    assert!(rec.is_captured());
    assert_eq!(rec.message(), "divide by zero at module X, line 12");
    assert!(!rec.is_truncated());
}

#[test]
fn capture_formats_arguments() {
    let mut rec = DiagRecord::new();
    let lba = 42u64;
    rec.capture(format_args!("read failed at LBA {:#x}", lba), None);

    assert_eq!(rec.message(), "read failed at LBA 0x2a");
}

#[test]
fn capture_empty_message() {
    let mut rec = DiagRecord::new();
    rec.capture(format_args!(""), None);

    assert!(rec.is_captured());
    assert_eq!(rec.message(), "");
    assert!(!rec.is_truncated());
}

#[test]
fn capture_records_location() {
    let mut rec = DiagRecord::new();
    let loc = core::panic::Location::caller();
    rec.capture(format_args!("boom"), Some(loc));

    let (file, line, column) = rec.location().unwrap();
    assert_eq!(file, loc.file());
    assert_eq!(line, loc.line());
    assert_eq!(column, loc.column());
}

#[test]
fn capture_without_location() {
    let mut rec = DiagRecord::new();
    rec.capture(format_args!("no location"), None);

    assert!(rec.location().is_none());
}

#[test]
fn capture_overwrites_previous() {
    let mut rec = DiagRecord::new();
    let loc = core::panic::Location::caller();
    rec.capture(format_args!("first"), Some(loc));
    rec.capture(format_args!("second"), None);

    // Latest report wins, including the dropped location.
    assert_eq!(rec.message(), "second");
    assert!(rec.location().is_none());
}

#[test]
fn fresh_record_is_empty() {
    let rec = DiagRecord::new();

    assert!(!rec.is_captured());
    assert_eq!(rec.message(), "");
    assert!(rec.location().is_none());
    assert!(!rec.is_truncated());
}

// ---- DiagRecord: truncation ----

#[test]
fn long_message_truncates_and_flags() {
    let mut rec = DiagRecord::new();
    let long = "a".repeat(MSG_CAP + 50);
    rec.capture(format_args!("{}", long), None);

    assert!(rec.is_truncated());
    assert_eq!(rec.message().len(), MSG_CAP);
    assert_eq!(rec.message(), &long[..MSG_CAP]);
}

#[test]
fn truncation_respects_char_boundary() {
    let mut rec = DiagRecord::new();
    // 3-byte chars; MSG_CAP is not a multiple of 3, so a naive byte cut
    // would split a character.
    let long = "\u{65e5}".repeat(MSG_CAP);
    rec.capture(format_args!("{}", long), None);

    assert!(rec.is_truncated());
    assert!(rec.message().len() <= MSG_CAP);
    assert!(rec.message().chars().all(|c| c == '\u{65e5}'));
}

#[test]
fn clear_resets_truncation() {
    let mut rec = DiagRecord::new();
    let long = "b".repeat(MSG_CAP * 2);
    rec.capture(format_args!("{}", long), None);
    assert!(rec.is_truncated());

    rec.capture(format_args!("short"), None);
    assert_eq!(rec.message(), "short");
    assert!(!rec.is_truncated());
}

// ---- PhaseFlag: one-way transition ----

#[test]
fn phase_starts_running() {
    let flag = PhaseFlag::new();
    assert_eq!(flag.current(), Phase::Running);
}

#[test]
fn halt_transitions_once() {
    let flag = PhaseFlag::new();

    assert!(flag.halt());
    assert_eq!(flag.current(), Phase::Halted);

    // Repeated halts are no-ops: still halted, no new transition.
    assert!(!flag.halt());
    assert!(!flag.halt());
    assert_eq!(flag.current(), Phase::Halted);
}

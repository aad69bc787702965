/// Panic diagnostic record — the last fatal-error report, captured without
/// allocation.
///
/// The panic handler is a terminal state: once it runs, nothing resumes.
/// The record exists so that whatever inspects the halted machine (a
/// debugger, a post-mortem over serial, a host-target test) can read the
/// message and source location that brought the boot down.
use core::fmt::{self, Write};
use core::panic::{Location, PanicInfo};

use spin::Mutex;

/// Capacity of the message and file-path buffers.
pub const MSG_CAP: usize = 256;

// Typical panic messages plus a source path must fit untruncated.
static_assertions::const_assert!(MSG_CAP >= 128);

/// The last panic captured, if any. Written once by the panic handler.
pub static LAST_PANIC: Mutex<DiagRecord> = Mutex::new(DiagRecord::new());

/// Capture a panic report into the global record.
///
/// Safe to call from the panic handler: if the record is already locked,
/// the panic originated inside the capture path itself, so skip rather
/// than spin forever.
pub fn record(info: &PanicInfo<'_>) {
    if let Some(mut rec) = LAST_PANIC.try_lock() {
        rec.capture(format_args!("{}", info.message()), info.location());
    }
}

/// Fixed-capacity UTF-8 string buffer implementing `fmt::Write`.
///
/// Overflowing writes keep the longest prefix that ends on a character
/// boundary and set the truncated flag; they never report a formatting
/// error, so the rest of the format arguments still run.
struct MsgBuf {
    buf: [u8; MSG_CAP],
    len: usize,
    truncated: bool,
}

impl MsgBuf {
    const fn new() -> Self {
        Self {
            buf: [0; MSG_CAP],
            len: 0,
            truncated: false,
        }
    }

    fn clear(&mut self) {
        self.len = 0;
        self.truncated = false;
    }

    fn as_str(&self) -> &str {
        // Only ever filled through write_str with boundary-respecting cuts.
        core::str::from_utf8(&self.buf[..self.len]).unwrap_or("")
    }
}

impl fmt::Write for MsgBuf {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let avail = MSG_CAP - self.len;
        if s.len() <= avail {
            self.buf[self.len..self.len + s.len()].copy_from_slice(s.as_bytes());
            self.len += s.len();
        } else {
            let mut cut = avail;
            while cut > 0 && !s.is_char_boundary(cut) {
                cut -= 1;
            }
            self.buf[self.len..self.len + cut].copy_from_slice(&s.as_bytes()[..cut]);
            self.len += cut;
            self.truncated = true;
        }
        Ok(())
    }
}

/// Snapshot of one fatal-error report: message text plus optional source
/// location. Fixed size, no allocation, suitable for a static.
pub struct DiagRecord {
    msg: MsgBuf,
    file: MsgBuf,
    line: u32,
    column: u32,
    has_location: bool,
    captured: bool,
}

impl DiagRecord {
    pub const fn new() -> Self {
        Self {
            msg: MsgBuf::new(),
            file: MsgBuf::new(),
            line: 0,
            column: 0,
            has_location: false,
            captured: false,
        }
    }

    /// Record a report, replacing any previous one.
    pub fn capture(&mut self, msg: fmt::Arguments<'_>, location: Option<&Location<'_>>) {
        self.clear();
        let _ = self.msg.write_fmt(msg);
        if let Some(loc) = location {
            let _ = self.file.write_str(loc.file());
            self.line = loc.line();
            self.column = loc.column();
            self.has_location = true;
        }
        self.captured = true;
    }

    pub fn clear(&mut self) {
        self.msg.clear();
        self.file.clear();
        self.line = 0;
        self.column = 0;
        self.has_location = false;
        self.captured = false;
    }

    /// Whether a report has been captured since the last clear.
    pub fn is_captured(&self) -> bool {
        self.captured
    }

    /// The captured message text (empty if nothing captured).
    pub fn message(&self) -> &str {
        self.msg.as_str()
    }

    /// The captured source location as (file, line, column), if any.
    pub fn location(&self) -> Option<(&str, u32, u32)> {
        if self.has_location {
            Some((self.file.as_str(), self.line, self.column))
        } else {
            None
        }
    }

    /// True if the message or file path did not fit the buffers.
    pub fn is_truncated(&self) -> bool {
        self.msg.truncated || self.file.truncated
    }
}

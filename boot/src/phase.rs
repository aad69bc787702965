/// Boot phase tracking — RUNNING to HALTED, one way.
///
/// The shim has exactly two states: running (firmware handed control over
/// and the entry path is executing) and halted (a fatal error fired, or
/// the milestone finished its work). There is no transition back; the
/// halt loop never yields.
use core::sync::atomic::{AtomicU8, Ordering};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Phase {
    Running,
    Halted,
}

const RUNNING: u8 = 0;
const HALTED: u8 = 1;

/// One-way phase flag. Constructed in `Running`.
pub struct PhaseFlag(AtomicU8);

impl PhaseFlag {
    pub const fn new() -> Self {
        Self(AtomicU8::new(RUNNING))
    }

    pub fn current(&self) -> Phase {
        match self.0.load(Ordering::Acquire) {
            RUNNING => Phase::Running,
            _ => Phase::Halted,
        }
    }

    /// Transition to `Halted`. Returns true only for the call that made
    /// the transition; repeated calls are no-ops.
    pub fn halt(&self) -> bool {
        self.0.swap(HALTED, Ordering::AcqRel) == RUNNING
    }
}

/// Global phase of the boot shim.
pub static BOOT_PHASE: PhaseFlag = PhaseFlag::new();

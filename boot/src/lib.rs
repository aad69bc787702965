//! EmberOS boot support library.
//!
//! The binary target (`main.rs`) is the UEFI entry shim; this library holds
//! everything the shim needs that can also be exercised on the host: the
//! panic diagnostic record and the boot phase flag. Hardware access (port
//! I/O, serial console) only compiles for the boot target.
#![no_std]
#![allow(dead_code)]

// Host-target tests run with std available; alloc backs the test fixtures.
#[cfg(test)]
extern crate alloc;

// Hardware-dependent modules — only compiled for the boot target, not host-target tests
#[cfg(not(test))]
pub mod arch;

pub mod diag;
pub mod phase;

#[cfg(test)]
mod tests;

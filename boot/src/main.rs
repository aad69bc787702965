//! EmberOS boot shim — UEFI entry point.
//!
//! First milestone of the EmberOS bootloader: a freestanding PE image the
//! firmware can load and transfer control to. Build with
//! `cargo build --target x86_64-unknown-uefi`. Later milestones read the
//! UEFI memory map, load the kernel image, exit boot services, and jump
//! to kmain.
#![no_std]
#![no_main]

use core::panic::PanicInfo;

use emberos_boot::arch::x86_64::{self, serial};
use emberos_boot::diag;
use emberos_boot::phase;
use emberos_boot::serial_println;

/// UEFI entry point — firmware jumps here after loading the image.
///
/// The symbol must be exactly `efi_main` (the entry the
/// x86_64-unknown-uefi target records in the PE header) and must use the
/// efiapi calling convention, because firmware calls it directly with no
/// trampoline. The image handle and system-table pointer are not taken
/// yet; efiapi passes them in registers we ignore, so adding them in the
/// next milestone is not an ABI change.
#[no_mangle]
pub extern "efiapi" fn efi_main() -> ! {
    serial::SERIAL.lock().init();
    serial_println!("EmberOS boot v0.1.0 — firmware handoff OK");

    // Nothing more to do at this milestone: no services taken, no memory
    // touched beyond our own stack and statics.
    serial_println!("[boot] idle");
    phase::BOOT_PHASE.halt();
    x86_64::idle_forever()
}

// Entry signature pinned: a drift in calling convention or return type is
// a build failure, not undefined behavior at handoff.
const _: extern "efiapi" fn() -> ! = efi_main;

#[panic_handler]
fn panic(info: &PanicInfo) -> ! {
    diag::record(info);
    phase::BOOT_PHASE.halt();
    serial_println!("!!! BOOT PANIC !!!");
    serial_println!("{}", info);
    x86_64::idle_forever()
}

/// x86_64 architecture support for the boot shim.
///
/// This module provides:
/// - Port I/O (in/out instructions)
/// - Serial console (COM1) for debug output
/// - The terminal idle loop
pub mod serial;

/// Halt the CPU until the next interrupt.
#[inline(always)]
pub fn hlt() {
    unsafe { core::arch::asm!("hlt", options(nostack, nomem)); }
}

/// Disable interrupts.
#[inline(always)]
pub fn cli() {
    unsafe { core::arch::asm!("cli", options(nostack, nomem)); }
}

/// Stop making forward progress, forever.
///
/// With no OS there is nothing to exit to and no caller context it is safe
/// to return into; a masked hlt loop is the only terminal action at this
/// layer. Later milestones may replace this with a firmware reset call.
pub fn idle_forever() -> ! {
    cli();
    loop {
        hlt();
    }
}

/// Write a byte to an I/O port.
#[inline(always)]
pub fn outb(port: u16, val: u8) {
    unsafe {
        core::arch::asm!(
            "out dx, al",
            in("dx") port,
            in("al") val,
            options(nostack, preserves_flags),
        );
    }
}

/// Read a byte from an I/O port.
#[inline(always)]
pub fn inb(port: u16) -> u8 {
    let val: u8;
    unsafe {
        core::arch::asm!(
            "in al, dx",
            in("dx") port,
            out("al") val,
            options(nostack, preserves_flags),
        );
    }
    val
}

//! Interrupt sources, IME handling and dispatch.

mod ime;
mod poll;
mod service;

use crate::bus::Bus;
use crate::error::Result;
use crate::{IF_ADDR, INTERRUPT_MASK};

/// The five interrupt sources, in priority order (VBlank first).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Interrupt {
    VBlank,
    LcdStat,
    Timer,
    Serial,
    Joypad,
}

impl Interrupt {
    pub const ALL: [Interrupt; 5] = [
        Interrupt::VBlank,
        Interrupt::LcdStat,
        Interrupt::Timer,
        Interrupt::Serial,
        Interrupt::Joypad,
    ];

    /// Bit position in IE/IF.
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    #[inline]
    pub const fn mask(self) -> u8 {
        1 << self.index()
    }

    /// Handler address the CPU jumps to on dispatch.
    #[inline]
    pub const fn vector(self) -> u16 {
        0x0040 + (self.index() as u16) * 8
    }

    /// Highest-priority source among the set bits of `pending`.
    pub fn highest_priority(pending: u8) -> Option<Interrupt> {
        let pending = pending & INTERRUPT_MASK;
        if pending == 0 {
            return None;
        }
        Self::ALL.get(pending.trailing_zeros() as usize).copied()
    }

    /// Raise `irq` by setting its bit in IF. Other bits are kept.
    pub fn request<B: Bus + ?Sized>(bus: &mut B, irq: Interrupt) -> Result<()> {
        let iflags = bus.read8(IF_ADDR)?;
        bus.write8(IF_ADDR, iflags | irq.mask())
    }
}

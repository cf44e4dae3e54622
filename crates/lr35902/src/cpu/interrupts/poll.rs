use crate::error::Result;
use crate::{IE_ADDR, IF_ADDR, INTERRUPT_MASK};

use super::super::{Bus, Cpu};
use super::Interrupt;

impl<B: Bus> Cpu<B> {
    /// `IE & IF`, restricted to the five interrupt sources. Read fresh from
    /// the bus every time; peripherals write IF between steps.
    #[inline]
    pub(in crate::cpu) fn pending_interrupts(&mut self) -> Result<u8> {
        let ie = self.bus.read8(IE_ADDR)?;
        let iflags = self.bus.read8(IF_ADDR)?;
        Ok(ie & iflags & INTERRUPT_MASK)
    }

    /// Decide whether an interrupt should be dispatched this step.
    ///
    /// A halted CPU with a pending interrupt always wakes up; with IME off it
    /// then carries on with the next instruction instead of dispatching.
    pub(in crate::cpu) fn poll_pending_interrupt(&mut self) -> Result<Option<Interrupt>> {
        let pending = self.pending_interrupts()?;
        if pending == 0 {
            return Ok(None);
        }

        if self.halted && !self.ime {
            log::debug!(
                "CPU woke from HALT without dispatch: pending=0x{:02X} pc=0x{:04X}",
                pending,
                self.regs.pc
            );
            self.halted = false;
            return Ok(None);
        }

        if !self.ime {
            return Ok(None);
        }

        Ok(Interrupt::highest_priority(pending))
    }
}

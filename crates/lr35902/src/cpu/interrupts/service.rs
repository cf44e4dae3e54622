use crate::error::Result;
use crate::IF_ADDR;

use super::super::{Bus, Cpu};

impl<B: Bus> Cpu<B> {
    /// Dispatch the highest-priority pending interrupt if IME is set.
    ///
    /// Returns `Some(cycles)` if an interrupt was taken, or `None` otherwise.
    pub(in crate::cpu) fn handle_interrupts(&mut self) -> Result<Option<u32>> {
        let Some(irq) = self.poll_pending_interrupt()? else {
            return Ok(None);
        };

        let iflags = self.bus.read8(IF_ADDR)?;
        self.bus.write8(IF_ADDR, iflags & !irq.mask())?;

        // A halt bug still armed here came from `EI; HALT`. The handler has
        // to return to the HALT itself, which sits one byte behind PC.
        let mut pc = self.regs.pc;
        if self.halt_bug {
            self.halt_bug = false;
            pc = pc.wrapping_sub(1);
        }

        self.push_u16(pc)?;
        self.regs.pc = irq.vector();
        self.ime = false;
        self.halted = false;

        log::debug!(
            "CPU interrupt: {:?} idx={} vector=0x{:04X} pc=0x{:04X} sp=0x{:04X} IF=0x{:02X}",
            irq,
            irq.index(),
            irq.vector(),
            pc,
            self.regs.sp,
            iflags,
        );

        Ok(Some(5))
    }
}

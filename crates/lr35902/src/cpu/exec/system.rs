use log::debug;

use crate::cpu::{Bus, Cpu};
use crate::error::Result;

impl<B: Bus> Cpu<B> {
    /// `HALT`.
    ///
    /// With an interrupt pending and IME off the CPU does not halt. Instead
    /// the next opcode fetch fails to advance PC (the halt bug).
    pub(super) fn exec_halt(&mut self) -> Result<u32> {
        let pending = self.pending_interrupts()?;
        if pending != 0 && !self.ime_for_halt() {
            debug!(
                "HALT bug armed at pc=0x{:04X} (pending=0x{:02X})",
                self.regs.pc, pending
            );
            self.halt_bug = true;
        } else {
            debug!("CPU halted at pc=0x{:04X}", self.regs.pc);
            self.halted = true;
        }
        Ok(1)
    }

    /// `STOP` swallows its padding byte and otherwise behaves like `HALT`
    /// without the bug: the CPU sleeps until an interrupt is pending.
    pub(super) fn exec_stop(&mut self) -> Result<u32> {
        self.fetch8()?;
        debug!("CPU stopped at pc=0x{:04X}", self.regs.pc);
        self.halted = true;
        Ok(1)
    }

    /// `DI` takes effect immediately and also drops an `EI` that has not
    /// fired yet.
    pub(super) fn exec_di(&mut self) -> u32 {
        self.ime = false;
        self.ime_enable_pending = None;
        1
    }

    pub(super) fn exec_ei(&mut self) -> u32 {
        self.ime_enable_pending = Some(());
        1
    }
}

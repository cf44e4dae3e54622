use log::trace;

use super::super::{Bus, Cpu};

impl<B: Bus> Cpu<B> {
    /// Apply the IME enable requested by a preceding `EI`.
    ///
    /// Called after the opcode fetch and before execution, so the
    /// instruction following `EI` always runs with interrupts still masked
    /// at its start.
    #[inline]
    pub(in crate::cpu) fn apply_ime_delay(&mut self) {
        if self.ime_enable_pending.take().is_some() {
            trace!("IME enabled (deferred EI)");
            self.ime = true;
            self.ime_enabled_this_step = true;
        }
    }

    /// IME as seen by `HALT`: an enable that fired in this very step does
    /// not count yet.
    #[inline]
    pub(in crate::cpu) fn ime_for_halt(&self) -> bool {
        self.ime && !self.ime_enabled_this_step
    }
}

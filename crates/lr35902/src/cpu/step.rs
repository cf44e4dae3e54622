use log::{error, trace};

use crate::decode::decode;
use crate::error::{Error, Result};

use super::{Bus, Cpu};

impl<B: Bus> Cpu<B> {
    /// Advance by one unit of work: an interrupt dispatch, one idle cycle
    /// while halted, or one instruction.
    ///
    /// Returns the M-cycles consumed, which the host forwards to its
    /// peripherals. On error the CPU is left where the failure happened and
    /// the cycles of the failed step are not counted.
    pub fn step(&mut self) -> Result<u64> {
        self.ime_enabled_this_step = false;
        let cycles = u64::from(self.step_instruction()?);
        self.ticks += cycles;
        Ok(cycles)
    }

    fn step_instruction(&mut self) -> Result<u32> {
        if let Some(cycles) = self.handle_interrupts()? {
            return Ok(cycles);
        }

        if self.halted {
            return Ok(1);
        }

        let address = self.regs.pc;
        let opcode = self.fetch_opcode()?;
        self.apply_ime_delay();

        let Some(instruction) = decode(opcode) else {
            let r = &self.regs;
            error!(
                "invalid opcode 0x{:02X} at 0x{:04X} (AF={:04X} BC={:04X} DE={:04X} HL={:04X} SP={:04X})",
                opcode,
                address,
                r.af(),
                r.bc(),
                r.de(),
                r.hl(),
                r.sp,
            );
            return Err(Error::InvalidOpcode { opcode, address });
        };

        trace!("0x{:04X}: {}", address, instruction);
        self.execute(instruction)
    }
}

//! The LR35902 execution engine.
//!
//! [`Cpu`] owns its bus and advances in units of one instruction, one
//! interrupt dispatch or one idle halted cycle per [`Cpu::step`] call. All
//! timings are in M-cycles (`NOP` costs 1).

mod alu;
mod cb;
mod exec;
mod helpers;
mod init;
mod interrupts;
mod regs;
mod step;


use typed_builder::TypedBuilder;

pub use interrupts::Interrupt;
pub use regs::{Flags, Registers};

use crate::bus::Bus;

pub struct Cpu<B> {
    regs: Registers,
    /// Interrupt master enable.
    ime: bool,
    halted: bool,
    /// Armed by `EI`; turns IME on right after the next opcode fetch.
    ime_enable_pending: Option<()>,
    /// Set for the remainder of a step in which the deferred `EI` fired.
    /// `HALT` executed in that step still sees the old IME.
    ime_enabled_this_step: bool,
    /// Suppress the PC increment of the next opcode fetch.
    halt_bug: bool,
    ticks: u64,
    bus: B,
}

/// Register and control state, used both to seed a CPU and to snapshot it.
///
/// Unset fields keep their power-on value.
///
/// ```
/// use lr35902::{Cpu, FlatBus, RegisterState};
///
/// let state = RegisterState::builder().bc(0x1234).ime(true).build();
/// let cpu = Cpu::with_state(FlatBus::new(), state);
/// assert_eq!(cpu.register_state().bc, 0x1234);
/// assert_eq!(cpu.register_state().pc, 0x0100);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, TypedBuilder)]
pub struct RegisterState {
    #[builder(default)]
    pub af: u16,
    #[builder(default)]
    pub bc: u16,
    #[builder(default)]
    pub de: u16,
    #[builder(default)]
    pub hl: u16,
    #[builder(default)]
    pub sp: u16,
    #[builder(default = 0x0100)]
    pub pc: u16,
    #[builder(default)]
    pub ime: bool,
    #[builder(default)]
    pub halted: bool,
}

impl Default for RegisterState {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl<B: Bus> Cpu<B> {
    /// Total M-cycles consumed since construction.
    #[inline]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    #[inline]
    pub fn is_halted(&self) -> bool {
        self.halted
    }

    #[inline]
    pub fn ime(&self) -> bool {
        self.ime
    }

    /// True between an `EI` and the fetch of the instruction after it.
    #[inline]
    pub fn ime_enable_pending(&self) -> bool {
        self.ime_enable_pending.is_some()
    }

    /// True when the next opcode fetch will not advance PC.
    #[inline]
    pub fn halt_bug_armed(&self) -> bool {
        self.halt_bug
    }

    #[inline]
    pub fn registers(&self) -> &Registers {
        &self.regs
    }

    #[inline]
    pub fn registers_mut(&mut self) -> &mut Registers {
        &mut self.regs
    }

    pub fn register_state(&self) -> RegisterState {
        RegisterState {
            af: self.regs.af(),
            bc: self.regs.bc(),
            de: self.regs.de(),
            hl: self.regs.hl(),
            sp: self.regs.sp,
            pc: self.regs.pc,
            ime: self.ime,
            halted: self.halted,
        }
    }

    #[inline]
    pub fn bus(&self) -> &B {
        &self.bus
    }

    #[inline]
    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    pub fn into_bus(self) -> B {
        self.bus
    }

    #[inline]
    pub(crate) fn flag(&self, flag: Flags) -> bool {
        self.regs.f.contains(flag)
    }

    #[inline]
    pub(crate) fn set_flag(&mut self, flag: Flags, value: bool) {
        self.regs.f.set(flag, value);
    }

    #[inline]
    pub(crate) fn clear_flags(&mut self) {
        self.regs.f = Flags::empty();
    }
}

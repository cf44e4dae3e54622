//! Instruction-level emulation of the Sharp LR35902, the CPU inside the
//! original Game Boy.
//!
//! The crate covers the decode/execute engine and the interrupt/halt state
//! machine. Memory routing, timers and the pixel pipeline live behind the
//! [`Bus`] trait and are driven by the host with the cycle count returned
//! from [`Cpu::step`].
//!
//! ```
//! use lr35902::{Cpu, FlatBus};
//!
//! // 0x0100: LD B, 0x2A
//! let bus = FlatBus::with_program(&[0x06, 0x2A]);
//! let mut cpu = Cpu::new(bus);
//! let cycles = cpu.step().unwrap();
//! assert_eq!(cycles, 2);
//! assert_eq!(cpu.registers().b, 0x2A);
//! ```

pub mod bits;
pub mod bus;
pub mod cpu;
pub mod decode;
mod error;
pub mod instruction;

pub use bus::{Bus, FlatBus};
pub use cpu::{Cpu, Flags, Interrupt, RegisterState, Registers};
pub use decode::{decode, decode_prefixed, RESERVED_OPCODES};
pub use error::{Access, Error, Result};
pub use instruction::{Instruction, PrefixedInstruction};

/// Address of the interrupt-pending register (IF).
pub const IF_ADDR: u16 = 0xFF0F;
/// Address of the interrupt-enable register (IE).
pub const IE_ADDR: u16 = 0xFFFF;
/// Only the low five bits of IE/IF select interrupt sources.
pub const INTERRUPT_MASK: u8 = 0x1F;

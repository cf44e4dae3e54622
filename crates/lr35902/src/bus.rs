use crate::error::{Access, Error, Result};

/// Abstraction over the Game Boy memory bus.
///
/// The CPU only ever talks to memory through this trait. Address routing,
/// cartridge banking and IO registers are the implementor's business; the
/// CPU itself only relies on IF (`0xFF0F`) and IE (`0xFFFF`) being readable
/// and writable.
pub trait Bus {
    fn read8(&mut self, addr: u16) -> Result<u8>;
    fn write8(&mut self, addr: u16, value: u8) -> Result<()>;
}

impl<B: Bus + ?Sized> Bus for &mut B {
    #[inline]
    fn read8(&mut self, addr: u16) -> Result<u8> {
        (**self).read8(addr)
    }

    #[inline]
    fn write8(&mut self, addr: u16, value: u8) -> Result<()> {
        (**self).write8(addr, value)
    }
}

/// Total addressable memory (64 KiB).
const MEMORY_SIZE: usize = 0x10000;

/// A flat, growable byte array mapped from address 0.
///
/// Any address at or beyond the current length is unmapped and fails with
/// [`Error::OutOfRange`]. This makes it a convenient bus for tests and for
/// running raw program images; real machines plug in their own [`Bus`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FlatBus {
    memory: Vec<u8>,
}

impl FlatBus {
    /// Address execution starts from after power-on.
    pub const PROGRAM_START: u16 = 0x0100;

    pub fn new() -> Self {
        Self::default()
    }

    /// A fully mapped, zeroed 64 KiB address space.
    pub fn full() -> Self {
        Self {
            memory: vec![0; MEMORY_SIZE],
        }
    }

    /// Map `bytes` starting at address 0. Anything past the end is unmapped.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        let mut memory = bytes.into();
        memory.truncate(MEMORY_SIZE);
        Self { memory }
    }

    /// Zeroed 64 KiB with `program` at 0x0100, where the CPU starts
    /// executing. The boot ROM area below it stays zero.
    pub fn with_program(program: &[u8]) -> Self {
        let mut bus = Self::full();
        bus.load(Self::PROGRAM_START, program);
        bus
    }

    /// Copy `bytes` to `addr`, growing the mapped area as needed.
    pub fn load(&mut self, addr: u16, bytes: &[u8]) {
        let start = addr as usize;
        let end = (start + bytes.len()).min(MEMORY_SIZE);
        self.ensure_size(end);
        self.memory[start..end].copy_from_slice(&bytes[..end - start]);
    }

    /// Grow the mapped area with zeros so that it covers `size` bytes.
    pub fn ensure_size(&mut self, size: usize) {
        let size = size.min(MEMORY_SIZE);
        if self.memory.len() < size {
            self.memory.resize(size, 0);
        }
    }

    pub fn len(&self) -> usize {
        self.memory.len()
    }

    pub fn is_empty(&self) -> bool {
        self.memory.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.memory
    }
}

impl Bus for FlatBus {
    fn read8(&mut self, addr: u16) -> Result<u8> {
        self.memory
            .get(addr as usize)
            .copied()
            .ok_or(Error::OutOfRange {
                address: addr,
                access: Access::Read,
            })
    }

    fn write8(&mut self, addr: u16, value: u8) -> Result<()> {
        match self.memory.get_mut(addr as usize) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(Error::OutOfRange {
                address: addr,
                access: Access::Write,
            }),
        }
    }
}

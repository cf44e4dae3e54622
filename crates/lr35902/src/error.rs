use std::fmt;

use thiserror::Error;

/// Direction of a failed bus access.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Access {
    Read,
    Write,
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Access::Read => f.write_str("read"),
            Access::Write => f.write_str("write"),
        }
    }
}

/// Fatal conditions raised while stepping the CPU. Neither is recovered
/// locally; the host is expected to stop the run and report.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// A bare opcode with no instruction (one of the opcode holes) was
    /// fetched. `address` is where the opcode byte was read from.
    #[error("invalid opcode 0x{opcode:02X} at 0x{address:04X}")]
    InvalidOpcode { opcode: u8, address: u16 },
    /// The bus has nothing mapped at `address`.
    #[error("bus {access} out of range at 0x{address:04X}")]
    OutOfRange { address: u16, access: Access },
}

pub type Result<T> = std::result::Result<T, Error>;

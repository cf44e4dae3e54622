//! Decoded instruction values.
//!
//! Every operand set is a small closed enum, so the executor can match the
//! whole instruction space exhaustively. Operand enums are ordered by their
//! encoding, which lets the decoder turn a bit field straight into a value.

use std::fmt;

use crate::bits::slice;

/// 8-bit operand. Code 6 addresses memory at HL instead of a register.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Reg8 {
    B,
    C,
    D,
    E,
    H,
    L,
    HlPtr,
    A,
}

impl Reg8 {
    pub const fn from_code(code: u8) -> Self {
        match code & 0x07 {
            0 => Reg8::B,
            1 => Reg8::C,
            2 => Reg8::D,
            3 => Reg8::E,
            4 => Reg8::H,
            5 => Reg8::L,
            6 => Reg8::HlPtr,
            _ => Reg8::A,
        }
    }

    /// True for the `[HL]` operand, which costs an extra bus round-trip.
    pub const fn is_memory(self) -> bool {
        matches!(self, Reg8::HlPtr)
    }
}

/// 16-bit operand of `LD rr,d16`, `INC rr`, `DEC rr` and `ADD HL,rr`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Reg16 {
    BC,
    DE,
    HL,
    SP,
}

impl Reg16 {
    pub const fn from_code(code: u8) -> Self {
        match code & 0x03 {
            0 => Reg16::BC,
            1 => Reg16::DE,
            2 => Reg16::HL,
            _ => Reg16::SP,
        }
    }
}

/// 16-bit operand of `PUSH`/`POP`; AF takes the place of SP.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Reg16Stack {
    BC,
    DE,
    HL,
    AF,
}

impl Reg16Stack {
    pub const fn from_code(code: u8) -> Self {
        match code & 0x03 {
            0 => Reg16Stack::BC,
            1 => Reg16Stack::DE,
            2 => Reg16Stack::HL,
            _ => Reg16Stack::AF,
        }
    }
}

/// Indirect operand of `LD [rr],A` / `LD A,[rr]`. The HL forms adjust HL
/// after the access.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Reg16Mem {
    BC,
    DE,
    HLInc,
    HLDec,
}

impl Reg16Mem {
    pub const fn from_code(code: u8) -> Self {
        match code & 0x03 {
            0 => Reg16Mem::BC,
            1 => Reg16Mem::DE,
            2 => Reg16Mem::HLInc,
            _ => Reg16Mem::HLDec,
        }
    }
}

/// Branch condition, tested against the flags register.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Condition {
    NZ,
    Z,
    NC,
    C,
}

impl Condition {
    pub const fn from_code(code: u8) -> Self {
        match code & 0x03 {
            0 => Condition::NZ,
            1 => Condition::Z,
            2 => Condition::NC,
            _ => Condition::C,
        }
    }
}

/// 3-bit field: a bit index for `BIT`/`RES`/`SET` or a restart slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct U3(u8);

impl U3 {
    pub const fn new(value: u8) -> Self {
        U3(value & 0x07)
    }

    pub const fn get(self) -> u8 {
        self.0
    }
}

/// The eight accumulator operations sharing the `10xxxyyy` / `11xxx110`
/// encodings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AluOp {
    Add,
    Adc,
    Sub,
    Sbc,
    And,
    Xor,
    Or,
    Cp,
}

impl AluOp {
    pub const fn from_code(code: u8) -> Self {
        match code & 0x07 {
            0 => AluOp::Add,
            1 => AluOp::Adc,
            2 => AluOp::Sub,
            3 => AluOp::Sbc,
            4 => AluOp::And,
            5 => AluOp::Xor,
            6 => AluOp::Or,
            _ => AluOp::Cp,
        }
    }
}

/// Rotates, shifts and SWAP from the `CB 00xxxyyy` block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RotateOp {
    Rlc,
    Rrc,
    Rl,
    Rr,
    Sla,
    Sra,
    Swap,
    Srl,
}

impl RotateOp {
    pub const fn from_code(code: u8) -> Self {
        match code & 0x07 {
            0 => RotateOp::Rlc,
            1 => RotateOp::Rrc,
            2 => RotateOp::Rl,
            3 => RotateOp::Rr,
            4 => RotateOp::Sla,
            5 => RotateOp::Sra,
            6 => RotateOp::Swap,
            _ => RotateOp::Srl,
        }
    }
}

/// A bare (non-prefixed) instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Instruction {
    Nop,
    Stop,
    Halt,
    Di,
    Ei,
    Daa,
    Cpl,
    Scf,
    Ccf,
    Rlca,
    Rrca,
    Rla,
    Rra,

    LdR8D8(Reg8),
    LdR8R8 { dst: Reg8, src: Reg8 },
    LdR16D16(Reg16),
    LdMemA(Reg16Mem),
    LdAMem(Reg16Mem),
    LdA16A,
    LdAA16,
    LdhA8A,
    LdhAA8,
    LdhCA,
    LdhAC,
    LdA16Sp,
    LdHlSpE8,
    LdSpHl,

    IncR8(Reg8),
    DecR8(Reg8),
    IncR16(Reg16),
    DecR16(Reg16),
    AddHlR16(Reg16),
    AddSpE8,
    Alu { op: AluOp, src: Reg8 },
    AluD8(AluOp),

    Jr,
    JrCc(Condition),
    Jp,
    JpCc(Condition),
    JpHl,
    Call,
    CallCc(Condition),
    Ret,
    RetCc(Condition),
    Reti,
    Rst(U3),
    Push(Reg16Stack),
    Pop(Reg16Stack),

    /// The 0xCB prefix; the following byte selects a [`PrefixedInstruction`].
    Prefix,
}

impl Instruction {
    /// Encoded length in bytes, opcode included.
    pub const fn length(self) -> u8 {
        use Instruction::*;
        match self {
            LdR16D16(_) | LdA16A | LdAA16 | LdA16Sp | Jp | JpCc(_) | Call | CallCc(_) => 3,
            Stop | LdR8D8(_) | LdhA8A | LdhAA8 | LdHlSpE8 | AddSpE8 | AluD8(_) | Jr | JrCc(_)
            | Prefix => 2,
            _ => 1,
        }
    }
}

/// An instruction from the 0xCB-prefixed table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PrefixedInstruction {
    Rotate { op: RotateOp, target: Reg8 },
    Bit { bit: U3, target: Reg8 },
    Res { bit: U3, target: Reg8 },
    Set { bit: U3, target: Reg8 },
}

impl PrefixedInstruction {
    /// Every prefixed opcode is `xx yyy zzz`: group, bit/op, operand.
    pub const fn from_opcode(opcode: u8) -> Self {
        let target = Reg8::from_code(slice(opcode, 0, 3));
        let y = slice(opcode, 3, 3);
        match slice(opcode, 6, 2) {
            0 => PrefixedInstruction::Rotate {
                op: RotateOp::from_code(y),
                target,
            },
            1 => PrefixedInstruction::Bit {
                bit: U3::new(y),
                target,
            },
            2 => PrefixedInstruction::Res {
                bit: U3::new(y),
                target,
            },
            _ => PrefixedInstruction::Set {
                bit: U3::new(y),
                target,
            },
        }
    }

    pub const fn target(self) -> Reg8 {
        match self {
            PrefixedInstruction::Rotate { target, .. }
            | PrefixedInstruction::Bit { target, .. }
            | PrefixedInstruction::Res { target, .. }
            | PrefixedInstruction::Set { target, .. } => target,
        }
    }
}

impl fmt::Display for Reg8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Reg8::B => "B",
            Reg8::C => "C",
            Reg8::D => "D",
            Reg8::E => "E",
            Reg8::H => "H",
            Reg8::L => "L",
            Reg8::HlPtr => "[HL]",
            Reg8::A => "A",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Reg16 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Reg16::BC => "BC",
            Reg16::DE => "DE",
            Reg16::HL => "HL",
            Reg16::SP => "SP",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Reg16Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Reg16Stack::BC => "BC",
            Reg16Stack::DE => "DE",
            Reg16Stack::HL => "HL",
            Reg16Stack::AF => "AF",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Reg16Mem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Reg16Mem::BC => "[BC]",
            Reg16Mem::DE => "[DE]",
            Reg16Mem::HLInc => "[HL+]",
            Reg16Mem::HLDec => "[HL-]",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Condition::NZ => "NZ",
            Condition::Z => "Z",
            Condition::NC => "NC",
            Condition::C => "C",
        };
        f.write_str(name)
    }
}

impl fmt::Display for AluOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AluOp::Add => "ADD",
            AluOp::Adc => "ADC",
            AluOp::Sub => "SUB",
            AluOp::Sbc => "SBC",
            AluOp::And => "AND",
            AluOp::Xor => "XOR",
            AluOp::Or => "OR",
            AluOp::Cp => "CP",
        };
        f.write_str(name)
    }
}

impl fmt::Display for RotateOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RotateOp::Rlc => "RLC",
            RotateOp::Rrc => "RRC",
            RotateOp::Rl => "RL",
            RotateOp::Rr => "RR",
            RotateOp::Sla => "SLA",
            RotateOp::Sra => "SRA",
            RotateOp::Swap => "SWAP",
            RotateOp::Srl => "SRL",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Instruction::*;
        match *self {
            Nop => f.write_str("NOP"),
            Stop => f.write_str("STOP"),
            Halt => f.write_str("HALT"),
            Di => f.write_str("DI"),
            Ei => f.write_str("EI"),
            Daa => f.write_str("DAA"),
            Cpl => f.write_str("CPL"),
            Scf => f.write_str("SCF"),
            Ccf => f.write_str("CCF"),
            Rlca => f.write_str("RLCA"),
            Rrca => f.write_str("RRCA"),
            Rla => f.write_str("RLA"),
            Rra => f.write_str("RRA"),
            LdR8D8(r) => write!(f, "LD {r},d8"),
            LdR8R8 { dst, src } => write!(f, "LD {dst},{src}"),
            LdR16D16(rr) => write!(f, "LD {rr},d16"),
            LdMemA(mem) => write!(f, "LD {mem},A"),
            LdAMem(mem) => write!(f, "LD A,{mem}"),
            LdA16A => f.write_str("LD [a16],A"),
            LdAA16 => f.write_str("LD A,[a16]"),
            LdhA8A => f.write_str("LDH [a8],A"),
            LdhAA8 => f.write_str("LDH A,[a8]"),
            LdhCA => f.write_str("LDH [C],A"),
            LdhAC => f.write_str("LDH A,[C]"),
            LdA16Sp => f.write_str("LD [a16],SP"),
            LdHlSpE8 => f.write_str("LD HL,SP+r8"),
            LdSpHl => f.write_str("LD SP,HL"),
            IncR8(r) => write!(f, "INC {r}"),
            DecR8(r) => write!(f, "DEC {r}"),
            IncR16(rr) => write!(f, "INC {rr}"),
            DecR16(rr) => write!(f, "DEC {rr}"),
            AddHlR16(rr) => write!(f, "ADD HL,{rr}"),
            AddSpE8 => f.write_str("ADD SP,r8"),
            Alu { op, src } => write!(f, "{op} A,{src}"),
            AluD8(op) => write!(f, "{op} A,d8"),
            Jr => f.write_str("JR r8"),
            JrCc(cc) => write!(f, "JR {cc},r8"),
            Jp => f.write_str("JP a16"),
            JpCc(cc) => write!(f, "JP {cc},a16"),
            JpHl => f.write_str("JP HL"),
            Call => f.write_str("CALL a16"),
            CallCc(cc) => write!(f, "CALL {cc},a16"),
            Ret => f.write_str("RET"),
            RetCc(cc) => write!(f, "RET {cc}"),
            Reti => f.write_str("RETI"),
            Rst(slot) => write!(f, "RST {:02X}H", slot.get() * 8),
            Push(rr) => write!(f, "PUSH {rr}"),
            Pop(rr) => write!(f, "POP {rr}"),
            Prefix => f.write_str("PREFIX CB"),
        }
    }
}

impl fmt::Display for PrefixedInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            PrefixedInstruction::Rotate { op, target } => write!(f, "{op} {target}"),
            PrefixedInstruction::Bit { bit, target } => write!(f, "BIT {},{target}", bit.get()),
            PrefixedInstruction::Res { bit, target } => write!(f, "RES {},{target}", bit.get()),
            PrefixedInstruction::Set { bit, target } => write!(f, "SET {},{target}", bit.get()),
        }
    }
}

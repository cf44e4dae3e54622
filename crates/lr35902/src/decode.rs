//! Opcode decoding.
//!
//! Both tables are built once from bit-pattern rules and then only read.
//! Rules are tried top to bottom, so single-opcode rules that overlap a
//! wider block (HALT inside `LD r,r`) have to come first.

use lazy_static::lazy_static;

use crate::bits::slice;
use crate::instruction::{
    AluOp, Condition, Instruction, PrefixedInstruction, Reg16, Reg16Mem, Reg16Stack, Reg8, U3,
};

/// Bare opcodes that have no instruction. Executing one is fatal.
pub const RESERVED_OPCODES: [u8; 11] = [
    0xD3, 0xDB, 0xDD, 0xE3, 0xE4, 0xEB, 0xEC, 0xED, 0xF4, 0xFC, 0xFD,
];

lazy_static! {
    static ref TABLE: [Option<Instruction>; 256] =
        std::array::from_fn(|opcode| classify(opcode as u8));
    static ref PREFIXED_TABLE: [PrefixedInstruction; 256] =
        std::array::from_fn(|opcode| PrefixedInstruction::from_opcode(opcode as u8));
}

/// Decode a bare opcode. `None` for the reserved holes.
#[inline]
pub fn decode(opcode: u8) -> Option<Instruction> {
    TABLE[opcode as usize]
}

/// Decode the byte following a 0xCB prefix. Every value is an instruction.
#[inline]
pub fn decode_prefixed(opcode: u8) -> PrefixedInstruction {
    PREFIXED_TABLE[opcode as usize]
}

fn classify(opcode: u8) -> Option<Instruction> {
    use Instruction::*;

    let r8 = |offset| Reg8::from_code(slice(opcode, offset, 3));
    let r16 = || Reg16::from_code(slice(opcode, 4, 2));
    let r16stk = || Reg16Stack::from_code(slice(opcode, 4, 2));
    let r16mem = || Reg16Mem::from_code(slice(opcode, 4, 2));
    let cond = || Condition::from_code(slice(opcode, 3, 2));
    let alu = || AluOp::from_code(slice(opcode, 3, 3));

    let instruction = match opcode {
        0x00 => Nop,
        0x10 => Stop,
        0x76 => Halt,
        0xF3 => Di,
        0xFB => Ei,
        0x27 => Daa,
        0x2F => Cpl,
        0x37 => Scf,
        0x3F => Ccf,
        0x07 => Rlca,
        0x0F => Rrca,
        0x17 => Rla,
        0x1F => Rra,

        0x08 => LdA16Sp,
        0xEA => LdA16A,
        0xFA => LdAA16,
        0xE0 => LdhA8A,
        0xF0 => LdhAA8,
        0xE2 => LdhCA,
        0xF2 => LdhAC,
        0xF8 => LdHlSpE8,
        0xF9 => LdSpHl,
        0xE8 => AddSpE8,

        0x18 => Jr,
        0xC3 => Jp,
        0xE9 => JpHl,
        0xCD => Call,
        0xC9 => Ret,
        0xD9 => Reti,
        0xCB => Prefix,

        x if x & 0b1100_0111 == 0b0000_0110 => LdR8D8(r8(3)),
        x if x & 0b1100_0000 == 0b0100_0000 => LdR8R8 {
            dst: r8(3),
            src: r8(0),
        },
        x if x & 0b1100_1111 == 0b0000_0001 => LdR16D16(r16()),
        x if x & 0b1100_1111 == 0b0000_0010 => LdMemA(r16mem()),
        x if x & 0b1100_1111 == 0b0000_1010 => LdAMem(r16mem()),

        x if x & 0b1100_0111 == 0b0000_0100 => IncR8(r8(3)),
        x if x & 0b1100_0111 == 0b0000_0101 => DecR8(r8(3)),
        x if x & 0b1100_1111 == 0b0000_0011 => IncR16(r16()),
        x if x & 0b1100_1111 == 0b0000_1011 => DecR16(r16()),
        x if x & 0b1100_1111 == 0b0000_1001 => AddHlR16(r16()),
        x if x & 0b1100_0000 == 0b1000_0000 => Alu {
            op: alu(),
            src: r8(0),
        },
        x if x & 0b1100_0111 == 0b1100_0110 => AluD8(alu()),

        x if x & 0b1110_0111 == 0b0010_0000 => JrCc(cond()),
        x if x & 0b1110_0111 == 0b1100_0010 => JpCc(cond()),
        x if x & 0b1110_0111 == 0b1100_0100 => CallCc(cond()),
        x if x & 0b1110_0111 == 0b1100_0000 => RetCc(cond()),
        x if x & 0b1100_0111 == 0b1100_0111 => Rst(U3::new(slice(x, 3, 3))),
        x if x & 0b1100_1111 == 0b1100_0101 => Push(r16stk()),
        x if x & 0b1100_1111 == 0b1100_0001 => Pop(r16stk()),

        _ => return None,
    };
    Some(instruction)
}

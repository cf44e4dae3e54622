#![allow(dead_code)]

use lr35902::{Bus, Cpu, FlatBus, RegisterState};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Register state with IME off and the CPU running.
pub fn regs(af: u16, bc: u16, de: u16, hl: u16, sp: u16, pc: u16) -> RegisterState {
    RegisterState {
        af,
        bc,
        de,
        hl,
        sp,
        pc,
        ime: false,
        halted: false,
    }
}

/// Program at 0x0100 on a zeroed 64 KiB bus.
pub fn power_on(program: &[u8]) -> Cpu<FlatBus> {
    init_logging();
    Cpu::new(FlatBus::with_program(program))
}

pub fn cpu_with(program: &[u8], state: RegisterState) -> Cpu<FlatBus> {
    init_logging();
    Cpu::with_state(FlatBus::with_program(program), state)
}

pub fn step<B: Bus>(cpu: &mut Cpu<B>, amount: usize) -> u64 {
    (0..amount)
        .map(|_| cpu.step().expect("step failed"))
        .sum()
}

#[track_caller]
pub fn assert_cpu<B: Bus>(cpu: &Cpu<B>, ticks: u64, expected: RegisterState) {
    assert_eq!(cpu.ticks(), ticks, "ticks");
    assert_eq!(cpu.register_state(), expected);
}

pub fn read<B: Bus>(cpu: &mut Cpu<B>, addr: u16) -> u8 {
    cpu.bus_mut().read8(addr).expect("read failed")
}

pub fn write<B: Bus>(cpu: &mut Cpu<B>, addr: u16, value: u8) {
    cpu.bus_mut().write8(addr, value).expect("write failed")
}

use super::{Bus, Cpu, RegisterState, Registers};

impl<B: Bus> Cpu<B> {
    /// Power-on state: every register zero, PC at 0x0100, IME off.
    pub fn new(bus: B) -> Self {
        Self::with_state(bus, RegisterState::default())
    }

    /// Seed the register file and control flags directly.
    pub fn with_state(bus: B, state: RegisterState) -> Self {
        let mut cpu = Self {
            regs: Registers::default(),
            ime: false,
            halted: false,
            ime_enable_pending: None,
            ime_enabled_this_step: false,
            halt_bug: false,
            ticks: 0,
            bus,
        };
        cpu.load_state(state);
        cpu
    }

    /// Overwrite registers and control flags. Pending `EI`, the halt bug and
    /// the tick counter are reset.
    pub fn load_state(&mut self, state: RegisterState) {
        self.regs.set_af(state.af);
        self.regs.set_bc(state.bc);
        self.regs.set_de(state.de);
        self.regs.set_hl(state.hl);
        self.regs.sp = state.sp;
        self.regs.pc = state.pc;
        self.ime = state.ime;
        self.halted = state.halted;
        self.ime_enable_pending = None;
        self.ime_enabled_this_step = false;
        self.halt_bug = false;
        self.ticks = 0;
    }
}

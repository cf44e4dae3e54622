use anyhow::{bail, Context};
use lr35902::{Cpu, FlatBus};

const DEFAULT_MAX_STEPS: u64 = 1_000_000;

fn parse_number(text: &str) -> anyhow::Result<u64> {
    let value = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => text.parse(),
    };
    value.with_context(|| format!("'{}' is not a number", text))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let Some(rom_path) = args.next() else {
        eprintln!(
            "Usage: lr35902_run <rom-path> [max-steps] [load-address]\n\
             Example: lr35902_run program.bin 10000 0x0100"
        );
        std::process::exit(1);
    };
    let max_steps = match args.next() {
        Some(text) => parse_number(&text).context("invalid max-steps")?,
        None => DEFAULT_MAX_STEPS,
    };
    let load_address = match args.next() {
        Some(text) => {
            let value = parse_number(&text).context("invalid load-address")?;
            u16::try_from(value)
                .with_context(|| format!("load address {:#X} is past 0xFFFF", value))?
        }
        None => FlatBus::PROGRAM_START,
    };

    let image =
        std::fs::read(&rom_path).with_context(|| format!("failed to read '{}'", rom_path))?;
    if usize::from(load_address) + image.len() > 0x10000 {
        bail!(
            "image of {} bytes does not fit at {:#06X}",
            image.len(),
            load_address
        );
    }
    log::info!(
        "Loaded '{}' ({} bytes) at {:#06X}",
        rom_path,
        image.len(),
        load_address
    );

    let mut bus = FlatBus::full();
    bus.load(load_address, &image);
    let mut cpu = Cpu::new(bus);
    cpu.registers_mut().pc = load_address;

    for index in 0..max_steps {
        let state = cpu.register_state();
        if let Err(err) = cpu.step() {
            return Err(err)
                .with_context(|| format!("step {} failed, registers: {:04X?}", index, state));
        }
        log::debug!("{:04X?}", cpu.register_state());
    }

    log::info!(
        "Stopped after {} steps, {} cycles: {:04X?}",
        max_steps,
        cpu.ticks(),
        cpu.register_state()
    );
    Ok(())
}

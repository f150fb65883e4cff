use std::fmt;

use anyhow::{Context, Result};
use gbmu_core::{Cpu, Registers};

/// Step budget used when none is given on the command line.
pub const DEFAULT_MAX_STEPS: u64 = 1_000_000;

/// Why a run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    StepLimit,
    Halted,
    Stopped,
}

#[derive(Clone, Debug)]
pub struct RunSummary {
    pub title: String,
    pub steps: u64,
    pub cycles: u64,
    pub reason: StopReason,
    pub regs: Registers,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = &self.regs;
        write!(
            f,
            "\"{}\": {:?} after {} steps / {} cycles | AF={:04X} BC={:04X} DE={:04X} HL={:04X} SP={:04X} PC={:04X}",
            self.title,
            self.reason,
            self.steps,
            self.cycles,
            r.af(),
            r.bc(),
            r.de(),
            r.hl(),
            r.sp,
            r.pc
        )
    }
}

/// Load `rom_data` and step it until it halts, stops or `max_steps` runs out.
///
/// An illegal opcode ends the run with an error.
pub fn run(rom_data: &[u8], max_steps: u64) -> Result<RunSummary> {
    let mut cpu = Cpu::new();
    cpu.load_cartridge(rom_data)
        .context("failed to load cartridge")?;

    let title = cpu.cartridge().map(|c| c.title()).unwrap_or_default();
    let mut steps = 0;
    let mut reason = StopReason::StepLimit;

    while steps < max_steps {
        if cpu.halted() {
            reason = StopReason::Halted;
            break;
        }
        if cpu.stopped() {
            reason = StopReason::Stopped;
            break;
        }
        let pc = cpu.regs().pc;
        cpu.step().with_context(|| {
            format!("CPU fault after {steps} steps ({})", cpu.disassemble(pc))
        })?;
        steps += 1;
    }

    let summary = RunSummary {
        title,
        steps,
        cycles: cpu.cycles(),
        reason,
        regs: *cpu.regs(),
    };
    log::info!("{summary}");
    Ok(summary)
}

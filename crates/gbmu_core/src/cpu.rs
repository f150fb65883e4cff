use crate::cartridge::{Cartridge, ConsoleVariant, ROM_WINDOW};
use crate::instructions::{self, Disassembly, Outcome};
use crate::memory::Memory;
use crate::regs::Registers;
use crate::{Error, Result};

/// Cycles reported for a `step()` while HALT or STOP is in effect.
pub const IDLE_CYCLES: u32 = 4;

/// LR35902 core: register file, flat memory and the loaded cartridge.
///
/// A `Cpu` owns everything it touches. Several instances can coexist and
/// never share state.
#[derive(Clone, Debug)]
pub struct Cpu {
    regs: Registers,
    memory: Memory,
    cartridge: Option<Cartridge>,
    variant: ConsoleVariant,
    ime: bool,
    halted: bool,
    /// Left by STOP; cleared only from outside (there is no joypad here).
    stopped: bool,
    /// Set once an opcode hole is executed. Cleared by `reset` and
    /// `load_cartridge`.
    fault: Option<Error>,
    cycles: u64,
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu {
    pub fn new() -> Self {
        Self {
            regs: Registers::new(),
            memory: Memory::new(),
            cartridge: None,
            variant: ConsoleVariant::default(),
            ime: false,
            halted: false,
            stopped: false,
            fault: None,
            cycles: 0,
        }
    }

    /// Power-on state of the loaded machine: registers at their defaults,
    /// no pending HALT/STOP/fault, memory zeroed with the cartridge's ROM
    /// window mapped back at address 0.
    pub fn reset(&mut self) {
        self.regs = Registers::new();
        self.memory.clear();
        if let Some(cartridge) = &self.cartridge {
            self.memory.load(0, cartridge.rom_window());
        }
        self.ime = false;
        self.halted = false;
        self.stopped = false;
        self.fault = None;
        self.cycles = 0;
    }

    /// Parse `bytes` as a cartridge and map it at address 0.
    ///
    /// On failure nothing is changed. On success the Cpu is reset with the
    /// new image mapped, so reloading mid-run starts again from the entry
    /// point.
    pub fn load_cartridge(&mut self, bytes: &[u8]) -> Result<()> {
        let cartridge = Cartridge::load(bytes)?;

        let header = cartridge.header();
        let variant = cartridge.variant_hint();
        log::info!(
            "loaded cartridge \"{}\": {:?}, {:?} (color: {}), {} bytes",
            header.title(),
            header.kind(),
            variant,
            variant.color_capable(),
            cartridge.image().len()
        );
        if cartridge.image().len() > ROM_WINDOW {
            log::warn!(
                "cartridge image is {} bytes; only the first {} are mapped (no bank controller)",
                cartridge.image().len(),
                ROM_WINDOW
            );
        }

        self.variant = variant;
        self.cartridge = Some(cartridge);
        self.reset();
        Ok(())
    }

    /// Execute one instruction and return the cycles it consumed.
    ///
    /// While halted or stopped this idles for [`IDLE_CYCLES`]. After an
    /// illegal opcode every call fails with the same error.
    pub fn step(&mut self) -> Result<u32> {
        if let Some(fault) = &self.fault {
            return Err(fault.clone());
        }
        if self.halted || self.stopped {
            self.cycles += u64::from(IDLE_CYCLES);
            return Ok(IDLE_CYCLES);
        }

        let pc = self.regs.pc;
        let opcode = self.memory.read8(pc);
        if log::log_enabled!(log::Level::Trace) {
            log::trace!(
                "{} | AF={:04X} BC={:04X} DE={:04X} HL={:04X} SP={:04X}",
                instructions::disassemble(&self.memory, pc),
                self.regs.af(),
                self.regs.bc(),
                self.regs.de(),
                self.regs.hl(),
                self.regs.sp
            );
        }

        let executed = match instructions::execute(&mut self.regs, &mut self.memory, opcode) {
            Ok(executed) => executed,
            Err(err) => {
                log::error!(
                    "CPU faulted: {err} (SP=0x{:04X} AF=0x{:04X} BC=0x{:04X} DE=0x{:04X} HL=0x{:04X})",
                    self.regs.sp,
                    self.regs.af(),
                    self.regs.bc(),
                    self.regs.de(),
                    self.regs.hl()
                );
                self.fault = Some(err.clone());
                return Err(err);
            }
        };

        match executed.outcome {
            Outcome::Halt => self.halted = true,
            Outcome::Stop => self.stopped = true,
            Outcome::SetIme(enabled) => self.ime = enabled,
            Outcome::ReturnFromInterrupt => self.ime = true,
            Outcome::Next | Outcome::Jumped | Outcome::Illegal => {}
        }

        self.cycles += u64::from(executed.cycles);
        Ok(executed.cycles)
    }

    pub fn regs(&self) -> &Registers {
        &self.regs
    }

    /// Debugger write path; changes are visible to the next `step()`.
    pub fn regs_mut(&mut self) -> &mut Registers {
        &mut self.regs
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    pub fn memory_mut(&mut self) -> &mut Memory {
        &mut self.memory
    }

    pub fn halted(&self) -> bool {
        self.halted
    }

    pub fn set_halted(&mut self, halted: bool) {
        self.halted = halted;
    }

    pub fn stopped(&self) -> bool {
        self.stopped
    }

    pub fn set_stopped(&mut self, stopped: bool) {
        self.stopped = stopped;
    }

    /// Interrupt master enable as last set by DI, EI or RETI.
    pub fn ime(&self) -> bool {
        self.ime
    }

    pub fn fault(&self) -> Option<&Error> {
        self.fault.as_ref()
    }

    /// Total cycles consumed since the last reset.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    pub fn variant(&self) -> ConsoleVariant {
        self.variant
    }

    pub fn cartridge(&self) -> Option<&Cartridge> {
        self.cartridge.as_ref()
    }

    pub fn disassemble(&self, addr: u16) -> Disassembly {
        instructions::disassemble(&self.memory, addr)
    }
}

use std::path::PathBuf;

use anyhow::{Context, Result};
use dmgboy_core::GameBoy;
use typed_builder::TypedBuilder;

pub const DEFAULT_MAX_INSTRUCTIONS: u64 = 10_000_000;

#[derive(Debug, Clone, TypedBuilder)]
pub struct RunConfig {
    #[builder(setter(into))]
    pub rom_path: PathBuf,
    /// Instruction boundaries to execute before stopping.
    #[builder(default = DEFAULT_MAX_INSTRUCTIONS)]
    pub max_instructions: u64,
    /// Log a register snapshot every N instructions; 0 disables it.
    #[builder(default = 0)]
    pub trace_every: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub instructions: u64,
    pub cycles: u64,
    pub final_pc: u16,
}

/// Load the ROM named by `config` and run it headless.
pub fn run(config: &RunConfig) -> Result<RunSummary> {
    let rom = std::fs::read(&config.rom_path)
        .with_context(|| format!("failed to read ROM file {}", config.rom_path.display()))?;
    log::info!(
        "loaded {} ({} bytes)",
        config.rom_path.display(),
        rom.len()
    );
    run_rom(&rom, config)
}

/// Run an in-memory ROM image for at most `config.max_instructions`
/// instruction boundaries. A CPU fault always ends the run with an error.
pub fn run_rom(rom: &[u8], config: &RunConfig) -> Result<RunSummary> {
    let mut gb = GameBoy::new(rom);
    let mut cycles = 0u64;
    let mut executed = 0u64;

    while executed < config.max_instructions {
        let taken = gb
            .step()
            .with_context(|| format!("emulation stopped after {executed} instructions"))?;
        cycles += u64::from(taken);
        executed += 1;

        if config.trace_every != 0 && executed % config.trace_every == 0 {
            let regs = &gb.cpu.regs;
            log::info!(
                "#{executed} cycles={cycles} AF:{:04X} BC:{:04X} DE:{:04X} HL:{:04X} SP:{:04X} PC:{:04X}",
                regs.af(),
                regs.bc(),
                regs.de(),
                regs.hl,
                regs.sp,
                regs.pc,
            );
        }
    }

    let summary = RunSummary {
        instructions: executed,
        cycles,
        final_pc: gb.cpu.regs.pc,
    };
    log::info!(
        "run finished: {} instructions, {} cycles, PC={:04X}",
        summary.instructions,
        summary.cycles,
        summary.final_pc
    );
    Ok(summary)
}

#[cfg(test)]
mod tests;

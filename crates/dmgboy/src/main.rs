use anyhow::{Context, Result};
use dmgboy::{RunConfig, DEFAULT_MAX_INSTRUCTIONS};

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let Some(rom_path) = args.next() else {
        eprintln!("usage: dmgboy <rom_path> [max_instructions] [trace_every]");
        std::process::exit(1);
    };
    let max_instructions = match args.next() {
        Some(n) => n
            .parse()
            .with_context(|| format!("invalid instruction count '{n}'"))?,
        None => DEFAULT_MAX_INSTRUCTIONS,
    };
    let trace_every = match args.next() {
        Some(n) => n
            .parse()
            .with_context(|| format!("invalid trace interval '{n}'"))?,
        None => 0,
    };

    let config = RunConfig::builder()
        .rom_path(rom_path)
        .max_instructions(max_instructions)
        .trace_every(trace_every)
        .build();

    let summary = dmgboy::run(&config)?;
    println!(
        "{} instructions, {} cycles, PC={:04X}",
        summary.instructions, summary.cycles, summary.final_pc
    );
    Ok(())
}

use super::*;

/// 32 KiB ROM-only image: NOPs everywhere except `program` at 0x0100.
fn rom_with_program(program: &[u8]) -> Vec<u8> {
    let mut rom = vec![0u8; 0x8000];
    rom[0x0100..0x0100 + program.len()].copy_from_slice(program);
    rom
}

#[test]
fn builder_defaults() {
    let config = RunConfig::builder().rom_path("game.gb").build();
    assert_eq!(config.rom_path, PathBuf::from("game.gb"));
    assert_eq!(config.max_instructions, DEFAULT_MAX_INSTRUCTIONS);
    assert_eq!(config.trace_every, 0);
}

#[test]
fn runs_until_instruction_budget() {
    let rom = rom_with_program(&[]);
    let config = RunConfig::builder()
        .rom_path("nops.gb")
        .max_instructions(100)
        .trace_every(10)
        .build();

    let summary = run_rom(&rom, &config).unwrap();
    assert_eq!(summary.instructions, 100);
    assert_eq!(summary.cycles, 400);
    assert_eq!(summary.final_pc, 0x0100 + 100);
}

#[test]
fn unassigned_opcode_stops_the_run() {
    // NOP ; NOP ; <hole>
    let rom = rom_with_program(&[0x00, 0x00, 0xFD]);
    let config = RunConfig::builder()
        .rom_path("bad.gb")
        .max_instructions(1_000)
        .build();

    let err = run_rom(&rom, &config).unwrap_err();
    assert!(err.to_string().contains("after 2 instructions"), "{err:#}");
    let fault = err
        .downcast_ref::<dmgboy_core::CpuFault>()
        .expect("root cause is the CPU fault");
    assert_eq!(
        *fault,
        dmgboy_core::CpuFault::UnassignedOpcode {
            opcode: 0xFD,
            pc: 0x0102
        }
    );
}

#[test]
fn missing_rom_file_is_reported() {
    let config = RunConfig::builder()
        .rom_path("/nonexistent/dmgboy/rom.gb")
        .build();

    let err = run(&config).unwrap_err();
    assert!(err
        .to_string()
        .contains("failed to read ROM file /nonexistent/dmgboy/rom.gb"));
}

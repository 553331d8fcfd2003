use super::*;
use once_cell::sync::OnceCell;

struct TestBus {
    memory: [u8; 0x10000],
}

impl Default for TestBus {
    fn default() -> Self {
        Self {
            memory: [0; 0x10000],
        }
    }
}

impl Bus for TestBus {
    fn read8(&mut self, addr: u16) -> u8 {
        self.memory[addr as usize]
    }

    fn write8(&mut self, addr: u16, value: u8) {
        self.memory[addr as usize] = value;
    }
}

/// Build a CPU at `pc` with `program` placed in a fresh bus.
fn setup(pc: u16, program: &[u8]) -> (Cpu, TestBus) {
    let mut cpu = Cpu::new();
    let mut bus = TestBus::default();
    cpu.regs.pc = pc;
    let start = pc as usize;
    bus.memory[start..start + program.len()].copy_from_slice(program);
    (cpu, bus)
}

#[test]
fn boot_state_matches_dmg_handoff() {
    let cpu = Cpu::new();
    assert_eq!(cpu.regs.a, 0x01);
    assert_eq!(cpu.regs.f, 0xB0);
    assert_eq!(cpu.regs.bc(), 0x0013);
    assert_eq!(cpu.regs.de(), 0x00D8);
    assert_eq!(cpu.regs.hl, 0x014D);
    assert_eq!(cpu.regs.pc, 0x0100);
    assert_eq!(cpu.regs.sp, 0xFFFE);
    assert!(cpu.flags.zero);
    assert!(!cpu.flags.sub);
    assert!(cpu.flags.half_carry);
    assert!(cpu.flags.carry);
    assert!(!cpu.flags.interrupt_master);
    assert_eq!(cpu.flags.to_f(), cpu.regs.f);
}

#[test]
fn composite_registers_pack_and_unpack() {
    let mut regs = Registers::default();
    regs.set_bc(0x1234);
    regs.set_de(0xABCD);
    assert_eq!((regs.b, regs.c), (0x12, 0x34));
    assert_eq!((regs.d, regs.e), (0xAB, 0xCD));
    assert_eq!(regs.bc(), 0x1234);
    assert_eq!(regs.de(), 0xABCD);

    regs.set_af(0x56FF);
    assert_eq!(regs.a, 0x56);
    assert_eq!(regs.f, 0xF0, "lower nibble of F must stay zero");
    assert_eq!(regs.af(), 0x56F0);

    regs.hl = 0xBEEF;
    assert_eq!(regs.h(), 0xBE);
    assert_eq!(regs.l(), 0xEF);
    regs.set_h(0x12);
    regs.set_l(0x34);
    assert_eq!(regs.hl, 0x1234);
}

#[test]
fn compare_sets_flags_for_every_byte_pair() {
    let mut cpu = Cpu::new();
    for x in 0..=255u8 {
        for y in 0..=255u8 {
            cpu.compare(x, y);
            assert_eq!(cpu.flags.zero, x == y);
            assert_eq!(cpu.flags.carry, x > y);
            assert_eq!(cpu.flags.half_carry, (x & 0x0F) > (y & 0x0F));
            assert!(cpu.flags.sub);

            let expected = ((x == y) as u8) << 7
                | 1 << 6
                | (((x & 0x0F) > (y & 0x0F)) as u8) << 5
                | ((x > y) as u8) << 4;
            assert_eq!(cpu.regs.f, expected, "compare({x:#04x}, {y:#04x})");
            assert_eq!(cpu.regs.f & 0x0F, 0);
        }
    }
}

#[test]
fn flag_bits_round_trip_through_f() {
    let mut flags = Flags::default();
    flags.load_f(0xA5);
    assert!(flags.zero);
    assert!(!flags.sub);
    assert!(flags.half_carry);
    assert!(!flags.carry);
    assert_eq!(flags.to_f(), 0xA0);
    assert_eq!(FlagBits::from_bits_truncate(flags.to_f()), FlagBits::Z | FlagBits::H);
}

#[test]
fn fetch_helpers_read_little_endian_operands() {
    let (mut cpu, mut bus) = setup(0xC000, &[0x34, 0x12, 0x7F]);
    assert_eq!(cpu.fetch_imm16(&mut bus), 0x1234);
    assert_eq!(cpu.regs.pc, 0xC002);
    assert_eq!(cpu.fetch_imm8(&mut bus), 0x7F);
    assert_eq!(cpu.regs.pc, 0xC003);
}

#[test]
fn stack_push_pop_round_trip() {
    let mut cpu = Cpu::new();
    let mut bus = TestBus::default();
    cpu.regs.sp = 0xDFF0;

    cpu.push_u16(&mut bus, 0xBEEF);
    assert_eq!(cpu.regs.sp, 0xDFEE);
    assert_eq!(bus.memory[0xDFEF], 0xBE, "high byte at the higher address");
    assert_eq!(bus.memory[0xDFEE], 0xEF, "low byte at SP");

    assert_eq!(cpu.pop_u16(&mut bus), 0xBEEF);
    assert_eq!(cpu.regs.sp, 0xDFF0);
}

#[test]
fn default_table_assigns_everything_but_the_opcode_holes() {
    let holes = [
        0xD3, 0xDB, 0xDD, 0xE3, 0xE4, 0xEB, 0xEC, 0xED, 0xF4, 0xFC, 0xFD,
    ];
    let table = Cpu::new().table();
    for opcode in 0..=255u8 {
        assert_eq!(
            table.entry(opcode).is_assigned(),
            !holes.contains(&opcode),
            "opcode {opcode:#04x}"
        );
    }
    assert_eq!(table.assigned_count(), 256 - holes.len());
}

#[test]
fn cleared_entries_become_unassigned() {
    let mut table = OpcodeTable::dmg();
    assert!(table.entry(0x00).is_assigned());
    table.clear(0x00);
    assert!(!table.entry(0x00).is_assigned());
    assert_eq!(table.entry(0x00).cycles, 0);
    assert_eq!(table.assigned_count(), DMG_OPCODES.assigned_count() - 1);
}

#[test]
fn step_returns_base_plus_extra_cycles() {
    // JR NZ,+2 taken (Z clear), then JR Z,+0 not taken.
    let (mut cpu, mut bus) = setup(0xC000, &[0x20, 0x02, 0x00, 0x00, 0x28, 0x00]);
    cpu.set_flags(false, false, false, false);

    assert_eq!(cpu.step(&mut bus), Ok(12));
    assert_eq!(cpu.regs.pc, 0xC004);
    assert_eq!(cpu.step(&mut bus), Ok(8));
    assert_eq!(cpu.regs.pc, 0xC006);
}

#[test]
fn call_and_ret_use_the_stack() {
    // 0xC000: CALL 0xC010 ; 0xC010: RET
    let (mut cpu, mut bus) = setup(0xC000, &[0xCD, 0x10, 0xC0]);
    bus.memory[0xC010] = 0xC9;
    cpu.regs.sp = 0xFFFE;

    assert_eq!(cpu.step(&mut bus), Ok(24));
    assert_eq!(cpu.regs.pc, 0xC010);
    assert_eq!(cpu.regs.sp, 0xFFFC);
    assert_eq!(bus.memory[0xFFFC], 0x03);
    assert_eq!(bus.memory[0xFFFD], 0xC0);

    assert_eq!(cpu.step(&mut bus), Ok(16));
    assert_eq!(cpu.regs.pc, 0xC003);
    assert_eq!(cpu.regs.sp, 0xFFFE);
}

#[test]
fn conditional_call_and_return_surcharges() {
    // CALL NC,0xC020 (taken) ; at 0xC020: RET C (not taken), RET NC (taken)
    let (mut cpu, mut bus) = setup(0xC000, &[0xD4, 0x20, 0xC0]);
    bus.memory[0xC020] = 0xD8;
    bus.memory[0xC021] = 0xD0;
    cpu.regs.sp = 0xD000;
    cpu.set_flags(false, false, false, false);

    assert_eq!(cpu.step(&mut bus), Ok(24));
    assert_eq!(cpu.step(&mut bus), Ok(8));
    assert_eq!(cpu.regs.pc, 0xC021);
    assert_eq!(cpu.step(&mut bus), Ok(20));
    assert_eq!(cpu.regs.pc, 0xC003);
}

#[test]
fn pop_af_reloads_flags_and_masks_low_nibble() {
    // PUSH BC ; POP AF
    let (mut cpu, mut bus) = setup(0xC000, &[0xC5, 0xF1]);
    cpu.regs.set_bc(0x42FF);
    cpu.regs.sp = 0xD000;

    assert_eq!(cpu.step(&mut bus), Ok(16));
    assert_eq!(cpu.step(&mut bus), Ok(12));
    assert_eq!(cpu.regs.a, 0x42);
    assert_eq!(cpu.regs.f, 0xF0);
    assert!(cpu.flags.zero && cpu.flags.sub && cpu.flags.half_carry && cpu.flags.carry);
}

#[test]
fn cp_sets_carry_when_a_is_smaller() {
    // LD A,0x10 ; CP 0x20 ; CP 0x10 ; CP 0x01
    let (mut cpu, mut bus) = setup(0xC000, &[0x3E, 0x10, 0xFE, 0x20, 0xFE, 0x10, 0xFE, 0x01]);

    cpu.step(&mut bus).unwrap();
    assert_eq!(cpu.step(&mut bus), Ok(8));
    assert!(cpu.flags.carry);
    assert!(!cpu.flags.zero);
    assert!(cpu.flags.sub);

    cpu.step(&mut bus).unwrap();
    assert!(cpu.flags.zero);
    assert!(!cpu.flags.carry);

    cpu.step(&mut bus).unwrap();
    assert!(!cpu.flags.carry);
    assert!(cpu.flags.half_carry, "0x0 - 0x1 borrows from bit 4");
    assert_eq!(cpu.regs.a, 0x10);
}

#[test]
fn alu_ops_serialize_flags_into_f() {
    // LD A,0x0F ; ADD A,0x01 ; XOR A ; SUB 0x01
    let (mut cpu, mut bus) = setup(0xC000, &[0x3E, 0x0F, 0xC6, 0x01, 0xAF, 0xD6, 0x01]);

    cpu.step(&mut bus).unwrap();
    cpu.step(&mut bus).unwrap();
    assert_eq!(cpu.regs.a, 0x10);
    assert_eq!(cpu.regs.f, 0x20, "ADD sets only H");

    assert_eq!(cpu.step(&mut bus), Ok(4));
    assert_eq!(cpu.regs.a, 0x00);
    assert_eq!(cpu.regs.f, 0x80, "XOR A sets only Z");

    cpu.step(&mut bus).unwrap();
    assert_eq!(cpu.regs.a, 0xFF);
    assert_eq!(cpu.regs.f, 0x70, "SUB underflow sets N, H and C");
}

#[test]
fn inc_dec_preserve_carry() {
    // SCF ; LD B,0xFF ; INC B ; DEC B
    let (mut cpu, mut bus) = setup(0xC000, &[0x37, 0x06, 0xFF, 0x04, 0x05]);
    for _ in 0..3 {
        cpu.step(&mut bus).unwrap();
    }
    assert_eq!(cpu.regs.b, 0x00);
    assert!(cpu.flags.zero);
    assert!(cpu.flags.half_carry);
    assert!(cpu.flags.carry);

    cpu.step(&mut bus).unwrap();
    assert_eq!(cpu.regs.b, 0xFF);
    assert!(cpu.flags.sub);
    assert!(cpu.flags.carry);
    assert_eq!(cpu.regs.f, 0x70);
}

#[test]
fn ld_through_hl_uses_derived_h_and_l() {
    // LD HL,0xC100 ; LD (HL),0x5A ; LD A,(HL+) ; LD B,H ; LD C,L
    let (mut cpu, mut bus) = setup(
        0xC000,
        &[0x21, 0x00, 0xC1, 0x36, 0x5A, 0x2A, 0x44, 0x4D],
    );

    assert_eq!(cpu.step(&mut bus), Ok(12));
    assert_eq!(cpu.step(&mut bus), Ok(12));
    assert_eq!(bus.memory[0xC100], 0x5A);
    assert_eq!(cpu.step(&mut bus), Ok(8));
    assert_eq!(cpu.regs.a, 0x5A);
    assert_eq!(cpu.regs.hl, 0xC101);
    assert_eq!(cpu.step(&mut bus), Ok(4));
    assert_eq!(cpu.step(&mut bus), Ok(4));
    assert_eq!(cpu.regs.bc(), 0xC101);
}

#[test]
fn cb_prefix_charges_extended_cost() {
    // SWAP A ; BIT 7,H ; SET 0,(HL)
    let (mut cpu, mut bus) = setup(0xC000, &[0xCB, 0x37, 0xCB, 0x7C, 0xCB, 0xC6]);
    cpu.regs.a = 0xF1;
    cpu.regs.hl = 0xC200;

    assert_eq!(cpu.step(&mut bus), Ok(8));
    assert_eq!(cpu.regs.a, 0x1F);
    assert_eq!(cpu.regs.f, 0x00);

    assert_eq!(cpu.step(&mut bus), Ok(8));
    assert!(!cpu.flags.zero, "bit 7 of H (0xC2) is set");
    assert!(cpu.flags.half_carry);

    assert_eq!(cpu.step(&mut bus), Ok(16));
    assert_eq!(bus.memory[0xC200], 0x01);
}

#[test]
fn di_takes_effect_after_the_next_instruction() {
    // DI ; NOP ; NOP
    let (mut cpu, mut bus) = setup(0xC000, &[0xF3, 0x00, 0x00]);
    cpu.flags.interrupt_master = true;

    assert_eq!(cpu.step(&mut bus), Ok(4));
    assert!(cpu.flags.interrupt_master, "IME unchanged right after DI");
    assert!(cpu.flags.pending_interrupt_disabled);

    cpu.step(&mut bus).unwrap();
    assert!(!cpu.flags.interrupt_master);
    assert!(!cpu.flags.pending_interrupt_disabled);

    cpu.step(&mut bus).unwrap();
    assert!(!cpu.flags.interrupt_master);
}

#[test]
fn ei_takes_effect_after_the_next_instruction() {
    // EI ; NOP
    let (mut cpu, mut bus) = setup(0xC000, &[0xFB, 0x00]);

    cpu.step(&mut bus).unwrap();
    assert!(!cpu.flags.interrupt_master, "IME unchanged right after EI");
    assert!(cpu.flags.pending_interrupt_enabled);

    cpu.step(&mut bus).unwrap();
    assert!(cpu.flags.interrupt_master);
    assert!(!cpu.flags.pending_interrupt_enabled);
}

#[test]
fn di_latency_keys_off_the_opcode_not_operand_bytes() {
    // DI ; LD A,0xF3. The operand equals the DI opcode but must not delay
    // the IME change any further.
    let (mut cpu, mut bus) = setup(0xC000, &[0xF3, 0x3E, 0xF3]);
    cpu.flags.interrupt_master = true;

    cpu.step(&mut bus).unwrap();
    cpu.step(&mut bus).unwrap();
    assert!(!cpu.flags.interrupt_master);
}

#[test]
fn ei_then_di_never_enables_interrupts() {
    let (mut cpu, mut bus) = setup(0xC000, &[0xFB, 0xF3, 0x00]);

    for _ in 0..3 {
        cpu.step(&mut bus).unwrap();
        assert!(!cpu.flags.interrupt_master);
        assert!(!(cpu.flags.pending_interrupt_enabled && cpu.flags.pending_interrupt_disabled));
    }
}

#[test]
fn unassigned_opcode_is_a_latched_fault() {
    let (mut cpu, mut bus) = setup(0xC000, &[0xD3, 0x00]);
    let before_bus = bus.memory;
    let mut expected = cpu.regs;
    expected.pc = 0xC001;

    let fault = CpuFault::UnassignedOpcode {
        opcode: 0xD3,
        pc: 0xC000,
    };
    assert_eq!(cpu.step(&mut bus), Err(fault));
    assert_eq!(cpu.regs, expected, "only the fetch advanced PC");
    assert!(bus.memory == before_bus);
    assert_eq!(cpu.fault(), Some(fault));
    assert_eq!(fault.pc(), 0xC000);
    assert_eq!(
        fault.to_string(),
        "unable to resolve opcode 0xD3 at PC=0xC000"
    );

    // The core stays dead: no further fetches.
    assert_eq!(cpu.step(&mut bus), Err(fault));
    assert_eq!(cpu.regs.pc, 0xC001);

    cpu.reset();
    assert_eq!(cpu.fault(), None);
    assert_eq!(cpu.regs.pc, 0x0100);
}

#[test]
fn faulted_core_refuses_direct_execution() {
    let (mut cpu, mut bus) = setup(0xC000, &[0xD3]);
    let fault = cpu.step(&mut bus).unwrap_err();
    let before = cpu.regs;

    // INC A would otherwise run.
    assert_eq!(cpu.execute_opcode(&mut bus, 0x3C), Err(fault));
    assert_eq!(cpu.regs, before);
    assert_eq!(cpu.fault(), Some(fault));
}

static NOP_ONLY: OnceCell<OpcodeTable> = OnceCell::new();

fn nop_only_table() -> &'static OpcodeTable {
    NOP_ONLY.get_or_init(|| {
        fn nop(_cpu: &mut Cpu, _bus: &mut dyn Bus, _opcode: u8) -> u32 {
            0
        }
        fn slow(_cpu: &mut Cpu, _bus: &mut dyn Bus, _opcode: u8) -> u32 {
            3
        }
        let mut table = OpcodeTable::empty();
        table.set(0x00, "NOP", 4, nop).set(0x01, "SLOW", 4, slow);
        table
    })
}

#[test]
fn custom_table_drives_dispatch() {
    let table = nop_only_table();
    let mut cpu = Cpu::with_table(table);
    let mut bus = TestBus::default();
    bus.memory[0x0101] = 0x01;
    bus.memory[0x0102] = 0x3E;

    assert_eq!(cpu.step(&mut bus), Ok(4));
    assert_eq!(cpu.step(&mut bus), Ok(7));

    // 0x3E (LD A,d8) is a real instruction but missing from this table.
    let err = cpu.step(&mut bus).unwrap_err();
    assert_eq!(
        err,
        CpuFault::UnassignedOpcode {
            opcode: 0x3E,
            pc: 0x0102
        }
    );
    assert_eq!(cpu.regs.a, 0x01);
}

#[test]
fn halt_idles_until_an_enabled_interrupt_is_requested() {
    // HALT ; INC A
    let (mut cpu, mut bus) = setup(0xC000, &[0x76, 0x3C]);
    cpu.regs.a = 0;

    assert_eq!(cpu.step(&mut bus), Ok(4));
    assert!(cpu.halted);
    assert_eq!(cpu.step(&mut bus), Ok(4));
    assert_eq!(cpu.regs.pc, 0xC001);

    // IME is off, so the CPU wakes without servicing the interrupt.
    bus.memory[0xFFFF] = 0x04;
    bus.memory[0xFF0F] = 0x04;
    assert_eq!(cpu.step(&mut bus), Ok(4));
    assert!(!cpu.halted);
    assert_eq!(cpu.regs.a, 1);
}

#[test]
fn interrupt_entry_pushes_pc_and_jumps_to_vector() {
    let mut cpu = Cpu::new();
    let mut bus = TestBus::default();
    cpu.regs.pc = 0x1234;
    cpu.regs.sp = 0xFFFE;
    cpu.flags.interrupt_master = true;
    bus.memory[0xFFFF] = 0x1F;
    bus.memory[0xFF0F] = 0x06; // STAT + Timer

    assert_eq!(cpu.handle_interrupts(&mut bus), Some(20));
    assert_eq!(cpu.regs.pc, 0x0048, "STAT has priority over Timer");
    assert_eq!(cpu.regs.sp, 0xFFFC);
    assert_eq!(bus.memory[0xFFFD], 0x12);
    assert_eq!(bus.memory[0xFFFC], 0x34);
    assert_eq!(bus.memory[0xFF0F], 0x04);
    assert!(!cpu.flags.interrupt_master);

    // IME is now clear, so nothing else is taken.
    assert_eq!(cpu.handle_interrupts(&mut bus), None);
}

#[test]
fn reti_restores_pc_and_enables_ime_immediately() {
    let (mut cpu, mut bus) = setup(0xC000, &[0xD9]);
    cpu.regs.sp = 0xD000;
    cpu.push_u16(&mut bus, 0x4321);

    assert_eq!(cpu.step(&mut bus), Ok(16));
    assert_eq!(cpu.regs.pc, 0x4321);
    assert!(cpu.flags.interrupt_master);
}

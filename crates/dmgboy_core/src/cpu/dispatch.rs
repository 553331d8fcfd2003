use super::{Bus, Cpu, CpuFault, OpcodeEntry, OPCODE_DI, OPCODE_EI};

impl Cpu {
    /// Execute the next instruction and return the T-cycles it used.
    ///
    /// Fetches the opcode at PC, decodes it through the opcode table and
    /// runs the handler. A halted CPU idles for 4 cycles per call until an
    /// enabled interrupt is requested. Decoding an unassigned opcode is a
    /// hard stop: the fault is latched and every later call returns it
    /// without touching the machine.
    pub fn step(&mut self, bus: &mut dyn Bus) -> Result<u32, CpuFault> {
        if let Some(fault) = self.fault {
            return Err(fault);
        }

        if self.halted {
            if self.pending_interrupts(bus) == 0 {
                return Ok(4);
            }
            self.halted = false;
        }

        let opcode = self.fetch_imm8(bus);
        self.execute_opcode(bus, opcode)
    }

    /// Execute an already-fetched opcode; PC must point just past it.
    ///
    /// A latched fault is returned unchanged and nothing executes.
    pub fn execute_opcode(&mut self, bus: &mut dyn Bus, opcode: u8) -> Result<u32, CpuFault> {
        if let Some(fault) = self.fault {
            return Err(fault);
        }

        let entry = *self.table.entry(opcode);
        if !entry.is_assigned() {
            return Err(self.raise_unassigned(opcode));
        }

        if log::log_enabled!(log::Level::Trace) {
            self.trace_instruction(bus, &entry);
        }

        let extra = (entry.handler)(self, bus, opcode);
        self.apply_pending_interrupt_change(opcode);

        Ok(entry.cycles + extra)
    }

    /// Apply a DI/EI request once the instruction after it has executed.
    ///
    /// DI and EI only set their pending flag. The check below is skipped
    /// for the DI/EI instruction itself, so IME changes after exactly one
    /// further instruction.
    fn apply_pending_interrupt_change(&mut self, opcode: u8) {
        if self.flags.pending_interrupt_disabled && opcode != OPCODE_DI {
            self.flags.pending_interrupt_disabled = false;
            self.flags.interrupt_master = false;
        }

        if self.flags.pending_interrupt_enabled && opcode != OPCODE_EI {
            self.flags.pending_interrupt_enabled = false;
            self.flags.interrupt_master = true;
        }
    }

    fn raise_unassigned(&mut self, opcode: u8) -> CpuFault {
        let fault = CpuFault::UnassignedOpcode {
            opcode,
            pc: self.regs.pc.wrapping_sub(1),
        };
        log::error!(
            "{fault} (SP=0x{sp:04X} AF=0x{af:04X} BC=0x{bc:04X} DE=0x{de:04X} HL=0x{hl:04X})",
            sp = self.regs.sp,
            af = self.regs.af(),
            bc = self.regs.bc(),
            de = self.regs.de(),
            hl = self.regs.hl,
        );
        self.fault = Some(fault);
        fault
    }

    fn trace_instruction(&self, bus: &mut dyn Bus, entry: &OpcodeEntry) {
        let lcdc = bus.read8(0xFF40);
        let iflags = bus.read8(0xFF0F);
        let ie = bus.read8(0xFFFF);
        log::trace!(
            "[OP:{}] AF:{:04X} BC:{:04X} DE:{:04X} HL:{:04X} SP:{:04X} PC:{:04X} LCDC:{:02X} IF:{:02X} IE:{:02X} IME:{}",
            entry.mnemonic,
            self.regs.af(),
            self.regs.bc(),
            self.regs.de(),
            self.regs.hl,
            self.regs.sp,
            self.regs.pc.wrapping_sub(1),
            lcdc,
            iflags,
            ie,
            self.flags.interrupt_master,
        );
    }
}

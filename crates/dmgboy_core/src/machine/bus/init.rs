use super::MemoryBus;

/// Highest address (exclusive) populated from the ROM image at power-on.
const ROM_LOAD_LIMIT: usize = 0x8000;

impl MemoryBus {
    /// Copy the fixed cartridge window into the local array.
    pub(super) fn load_rom(&mut self) {
        let len = self.cartridge.rom_len().min(ROM_LOAD_LIMIT);
        for (addr, slot) in self.memory[..len].iter_mut().enumerate() {
            *slot = self.cartridge.read_rom(addr as u16);
        }
        log::info!("loaded {len:#06x} bytes of cartridge ROM");
    }

    /// Initialize I/O registers to match the DMG post-boot state.
    pub(super) fn apply_dmg_initial_io_state(&mut self) {
        // Divider / timer.
        self.memory[0xFF05] = 0x00; // TIMA
        self.memory[0xFF06] = 0x00; // TMA
        self.memory[0xFF07] = 0x00; // TAC
        self.memory[0xFF0F] = 0xE1; // IF

        // Sound registers.
        self.memory[0xFF10] = 0x80;
        self.memory[0xFF11] = 0xBF;
        self.memory[0xFF12] = 0xF3;
        self.memory[0xFF14] = 0xBF;
        self.memory[0xFF16] = 0x3F;
        self.memory[0xFF17] = 0x00;
        self.memory[0xFF19] = 0xBF;
        self.memory[0xFF1A] = 0x7F;
        self.memory[0xFF1B] = 0xFF;
        self.memory[0xFF1C] = 0x9F;
        self.memory[0xFF1E] = 0xBF;
        self.memory[0xFF20] = 0xFF;
        self.memory[0xFF21] = 0x00;
        self.memory[0xFF22] = 0x00;
        self.memory[0xFF23] = 0xBF;
        self.memory[0xFF24] = 0x77;
        self.memory[0xFF25] = 0xF3;
        self.memory[0xFF26] = 0xF1;

        // PPU registers.
        self.memory[0xFF40] = 0x91; // LCDC
        self.memory[0xFF42] = 0x00; // SCY
        self.memory[0xFF43] = 0x00; // SCX
        self.memory[0xFF45] = 0x00; // LYC
        self.memory[0xFF47] = 0xFC; // BGP
        self.memory[0xFF48] = 0xFF; // OBP0
        self.memory[0xFF49] = 0xFF; // OBP1
        self.memory[0xFF4A] = 0x00; // WY
        self.memory[0xFF4B] = 0x00; // WX

        self.memory[0xFFFF] = 0x00; // IE

        log::info!("memory initialised to DMG post-boot state");
    }
}

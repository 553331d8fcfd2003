use super::Cartridge;

const ROM_BANK_SIZE: usize = 0x4000;
const RAM_BANK_SIZE: usize = 0x2000;

/// MBC1 cartridge state.
///
/// ROM banking via the 5-bit bank register plus two high bits, and
/// optional external RAM with bank select in mode 1. Battery persistence
/// is not modelled.
pub struct Mbc1 {
    rom: Vec<u8>,
    ram: Vec<u8>,
    num_rom_banks: u16,
    num_ram_banks: u8,
    rom_bank_low5: u8,
    rom_bank_high2: u8,
    ram_enable: bool,
    banking_mode: u8,
}

impl Mbc1 {
    pub fn new(rom: &[u8]) -> Self {
        let num_rom_banks = (rom.len() / ROM_BANK_SIZE).max(1) as u16;

        // 2 KiB parts are rounded up to one full bank.
        let num_ram_banks = match rom.get(0x149).copied().unwrap_or(0) {
            0x01 | 0x02 => 1,
            0x03 => 4,
            0x04 => 16,
            0x05 => 8,
            _ => 0,
        };

        Self {
            rom: rom.to_vec(),
            ram: vec![0xFF; num_ram_banks as usize * RAM_BANK_SIZE],
            num_rom_banks,
            num_ram_banks,
            rom_bank_low5: 1,
            rom_bank_high2: 0,
            ram_enable: false,
            banking_mode: 0,
        }
    }

    /// Bank visible at 0x4000..0x7FFF.
    pub fn rom_bank(&self) -> u16 {
        let mut bank = (self.rom_bank_low5 & 0x1F) as u16;
        if bank == 0 {
            bank = 1;
        }
        bank |= ((self.rom_bank_high2 & 0x03) as u16) << 5;
        bank % self.num_rom_banks
    }

    /// Bank visible at 0xA000..0xBFFF. Only mode 1 routes the high bits
    /// to RAM.
    pub fn ram_bank(&self) -> u8 {
        if self.banking_mode == 0 {
            return 0;
        }
        (self.rom_bank_high2 & 0x03).min(self.num_ram_banks.saturating_sub(1))
    }

    pub fn ram_enabled(&self) -> bool {
        self.ram_enable
    }

    fn ram_index(&self, addr: u16) -> Option<usize> {
        if !self.ram_enable || self.num_ram_banks == 0 {
            return None;
        }
        let offset = addr.checked_sub(0xA000)? as usize;
        if offset >= RAM_BANK_SIZE {
            return None;
        }
        let index = self.ram_bank() as usize * RAM_BANK_SIZE + offset;
        (index < self.ram.len()).then_some(index)
    }
}

impl Cartridge for Mbc1 {
    fn read_rom(&self, addr: u16) -> u8 {
        self.rom.get(addr as usize).copied().unwrap_or(0xFF)
    }

    fn read_rom_bank(&self, addr: u16) -> u8 {
        match addr {
            0xA000..=0xBFFF => self.ram_index(addr).map_or(0xFF, |i| self.ram[i]),
            0x4000..=0x7FFF => {
                let offset = (addr as usize) & (ROM_BANK_SIZE - 1);
                let index = (self.rom_bank() as usize)
                    .saturating_mul(ROM_BANK_SIZE)
                    .saturating_add(offset);
                self.rom.get(index).copied().unwrap_or(0xFF)
            }
            _ => self.read_rom(addr),
        }
    }

    fn write_banking(&mut self, addr: u16, value: u8) {
        match addr {
            // RAM enable: lower 4 bits must be 0x0A.
            0x0000..=0x1FFF => self.ram_enable = (value & 0x0F) == 0x0A,
            0x2000..=0x3FFF => {
                self.rom_bank_low5 = (value & 0x1F).max(1);
                log::debug!("MBC1 ROM bank -> {}", self.rom_bank());
            }
            // ROM bank high bits / RAM bank index.
            0x4000..=0x5FFF => self.rom_bank_high2 = value & 0x03,
            0x6000..=0x7FFF => self.banking_mode = value & 0x01,
            _ => {}
        }
    }

    fn write_ram_bank(&mut self, addr: u16, value: u8) {
        if let Some(index) = self.ram_index(addr) {
            self.ram[index] = value;
        }
    }

    fn rom_len(&self) -> usize {
        self.rom.len()
    }
}

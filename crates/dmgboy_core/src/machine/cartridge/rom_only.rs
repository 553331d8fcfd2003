use super::Cartridge;

const EXTERNAL_RAM_BASE: u16 = 0xA000;
const EXTERNAL_RAM_SIZE: usize = 0x2000;

/// Cartridge without a mapper: a flat image plus 8 KiB of optional RAM.
pub struct RomOnly {
    rom: Vec<u8>,
    ram: Vec<u8>,
}

impl RomOnly {
    pub fn new(rom: &[u8]) -> Self {
        Self {
            rom: rom.to_vec(),
            ram: vec![0; EXTERNAL_RAM_SIZE],
        }
    }
}

impl Cartridge for RomOnly {
    fn read_rom(&self, addr: u16) -> u8 {
        self.rom.get(addr as usize).copied().unwrap_or(0xFF)
    }

    fn read_rom_bank(&self, addr: u16) -> u8 {
        match addr {
            0xA000..=0xBFFF => self.ram[(addr - EXTERNAL_RAM_BASE) as usize],
            _ => self.read_rom(addr),
        }
    }

    fn write_banking(&mut self, addr: u16, value: u8) {
        log::debug!("banking write {value:#04x} to {addr:#06x} ignored (no mapper)");
    }

    fn write_ram_bank(&mut self, addr: u16, value: u8) {
        if let 0xA000..=0xBFFF = addr {
            self.ram[(addr - EXTERNAL_RAM_BASE) as usize] = value;
        }
    }

    fn rom_len(&self) -> usize {
        self.rom.len()
    }
}

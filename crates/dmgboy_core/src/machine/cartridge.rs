mod mbc1;
mod rom_only;

pub use mbc1::Mbc1;
pub use rom_only::RomOnly;

/// Header byte selecting the mapper.
const CARTRIDGE_TYPE_ADDR: usize = 0x0147;

/// Cartridge as seen by the memory bus.
///
/// The bus copies the fixed window through `read_rom` once at power-on and
/// afterwards only calls into the cartridge for the banked windows and for
/// writes below 0x8000.
pub trait Cartridge {
    /// Raw image byte, used to populate 0x0000..0x7FFF at power-on.
    fn read_rom(&self, addr: u16) -> u8;

    /// Banked read for 0x4000..0x7FFF and 0xA000..0xBFFF.
    ///
    /// The bus sends both windows here; implementations branch on the
    /// address to serve ROM or external RAM.
    fn read_rom_bank(&self, addr: u16) -> u8;

    /// Write below 0x8000, interpreted as mapper control.
    fn write_banking(&mut self, addr: u16, value: u8);

    /// Write into the external RAM window.
    fn write_ram_bank(&mut self, addr: u16, value: u8);

    /// Size of the ROM image in bytes.
    fn rom_len(&self) -> usize;
}

/// Pick a cartridge implementation from the header's type byte.
pub fn load_cartridge(rom: &[u8]) -> Box<dyn Cartridge> {
    let cart_type = rom.get(CARTRIDGE_TYPE_ADDR).copied().unwrap_or(0);

    match cart_type {
        0x01..=0x03 => {
            log::info!("cartridge type {cart_type:#04x}: MBC1");
            Box::new(Mbc1::new(rom))
        }
        0x00 => {
            log::info!("cartridge type 0x00: ROM only");
            Box::new(RomOnly::new(rom))
        }
        other => {
            log::warn!("unsupported cartridge type {other:#04x}; treating as ROM only");
            Box::new(RomOnly::new(rom))
        }
    }
}

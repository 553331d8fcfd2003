/// Register file of the LR35902.
///
/// A..F are kept as independent bytes and AF/BC/DE are composed on demand.
/// HL, SP and PC are stored whole; H and L are derived from `hl`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Registers {
    pub a: u8,
    pub b: u8,
    pub c: u8,
    pub d: u8,
    pub e: u8,
    pub f: u8,
    pub hl: u16,
    pub pc: u16,
    pub sp: u16,
}

impl Registers {
    #[inline]
    pub fn af(&self) -> u16 {
        u16::from_be_bytes([self.a, self.f])
    }

    #[inline]
    pub fn set_af(&mut self, value: u16) {
        let [a, f] = value.to_be_bytes();
        self.a = a;
        // Lower 4 bits of F are always zero.
        self.f = f & 0xF0;
    }

    #[inline]
    pub fn bc(&self) -> u16 {
        u16::from_be_bytes([self.b, self.c])
    }

    #[inline]
    pub fn set_bc(&mut self, value: u16) {
        let [b, c] = value.to_be_bytes();
        self.b = b;
        self.c = c;
    }

    #[inline]
    pub fn de(&self) -> u16 {
        u16::from_be_bytes([self.d, self.e])
    }

    #[inline]
    pub fn set_de(&mut self, value: u16) {
        let [d, e] = value.to_be_bytes();
        self.d = d;
        self.e = e;
    }

    #[inline]
    pub fn h(&self) -> u8 {
        (self.hl >> 8) as u8
    }

    #[inline]
    pub fn l(&self) -> u8 {
        self.hl as u8
    }

    #[inline]
    pub fn set_h(&mut self, value: u8) {
        self.hl = (self.hl & 0x00FF) | ((value as u16) << 8);
    }

    #[inline]
    pub fn set_l(&mut self, value: u8) {
        self.hl = (self.hl & 0xFF00) | value as u16;
    }
}

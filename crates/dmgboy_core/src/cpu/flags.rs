use bitflags::bitflags;

use super::Cpu;

bitflags! {
    /// Flag bits in the F register.
    ///
    /// Only the upper nibble is used; bits 0-3 always read back as zero.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct FlagBits: u8 {
        const Z = 0b1000_0000;
        const N = 0b0100_0000;
        const H = 0b0010_0000;
        const C = 0b0001_0000;
    }
}

/// Condition flags plus the interrupt master enable and its delayed
/// DI/EI requests.
///
/// Z/N/H/C are the source of truth; F is re-derived from them through
/// [`Cpu::sync_f`] after every update.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Flags {
    pub zero: bool,
    pub sub: bool,
    pub half_carry: bool,
    pub carry: bool,
    /// IME. 0 disables all interrupts, 1 enables those selected in IE.
    pub interrupt_master: bool,
    /// DI executed; IME drops after the next instruction.
    pub pending_interrupt_disabled: bool,
    /// EI executed; IME rises after the next instruction.
    pub pending_interrupt_enabled: bool,
}

impl Flags {
    /// Encode Z/N/H/C into bits 7..4 of an F byte.
    pub fn to_f(&self) -> u8 {
        let mut bits = FlagBits::empty();
        bits.set(FlagBits::Z, self.zero);
        bits.set(FlagBits::N, self.sub);
        bits.set(FlagBits::H, self.half_carry);
        bits.set(FlagBits::C, self.carry);
        bits.bits()
    }

    /// Decode Z/N/H/C from an F byte. The lower nibble is ignored.
    pub fn load_f(&mut self, f: u8) {
        let bits = FlagBits::from_bits_truncate(f);
        self.zero = bits.contains(FlagBits::Z);
        self.sub = bits.contains(FlagBits::N);
        self.half_carry = bits.contains(FlagBits::H);
        self.carry = bits.contains(FlagBits::C);
    }
}

impl Cpu {
    /// Re-serialise the four condition flags into F.
    #[inline]
    pub fn sync_f(&mut self) {
        self.regs.f = self.flags.to_f();
    }

    /// Set all four condition flags at once and refresh F.
    #[inline]
    pub fn set_flags(&mut self, zero: bool, sub: bool, half_carry: bool, carry: bool) {
        self.flags.zero = zero;
        self.flags.sub = sub;
        self.flags.half_carry = half_carry;
        self.flags.carry = carry;
        self.sync_f();
    }

    /// Compare two values and set flags.
    ///
    /// Z = (a == b), C = (a > b), H = (a & 0xF) > (b & 0xF), N = 1.
    pub fn compare(&mut self, a: u8, b: u8) {
        self.set_flags(a == b, true, (a & 0x0F) > (b & 0x0F), a > b);
    }

    /// Replace F and reload the boolean flags from it (used by POP AF).
    #[inline]
    pub(super) fn load_af(&mut self, value: u16) {
        self.regs.set_af(value);
        self.flags.load_f(self.regs.f);
    }
}

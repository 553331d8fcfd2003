use super::{Bus, Cpu};

impl Cpu {
    /// Handle CB-prefixed instructions (bit operations, shifts, and rotates).
    ///
    /// The prefix itself is charged 4 T-cycles by the table; the extended
    /// opcode's remaining cost is returned as extra cycles.
    pub(super) fn exec_cb_prefix(&mut self, bus: &mut dyn Bus, _opcode: u8) -> u32 {
        let cb = self.fetch_imm8(bus);
        let x = cb >> 6;
        let y = (cb >> 3) & 0x07;
        let z = cb & 0x07;
        let on_hl = z == 6;

        let cycles = match x {
            0 => {
                // RLC RRC RL RR SLA SRA SWAP SRL
                let value = self.read_reg8(bus, z);
                let (result, carry) = self.alu_shift(y, value);
                self.set_flags(result == 0, false, false, carry);
                self.write_reg8(bus, z, result);
                if on_hl {
                    16
                } else {
                    8
                }
            }
            1 => {
                // BIT b, r: Z = !bit, N = 0, H = 1, C preserved.
                let value = self.read_reg8(bus, z);
                let bit_set = value & (1 << y) != 0;
                self.set_flags(!bit_set, false, true, self.flags.carry);
                if on_hl {
                    12
                } else {
                    8
                }
            }
            2 => {
                // RES b, r
                let value = self.read_reg8(bus, z) & !(1 << y);
                self.write_reg8(bus, z, value);
                if on_hl {
                    16
                } else {
                    8
                }
            }
            _ => {
                // SET b, r
                let value = self.read_reg8(bus, z) | (1 << y);
                self.write_reg8(bus, z, value);
                if on_hl {
                    16
                } else {
                    8
                }
            }
        };

        cycles - 4
    }
}

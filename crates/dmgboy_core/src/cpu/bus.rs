/// Abstraction over the DMG address space as seen by the CPU.
///
/// Opcode handlers only ever touch memory through this trait, so the same
/// handlers run against the full [`MemoryBus`](crate::machine::MemoryBus)
/// and against flat test buses.
pub trait Bus {
    fn read8(&mut self, addr: u16) -> u8;
    fn write8(&mut self, addr: u16, value: u8);

    /// Advance bus-side collaborators by a given number of CPU T-cycles.
    ///
    /// Default implementation does nothing; system buses can override this
    /// to drive their timer scheduler.
    fn tick(&mut self, _cycles: u32) {}

    /// Push a word onto the stack addressed by `sp`.
    ///
    /// The stack grows downward: the high byte lands at SP-1 and the low
    /// byte at SP-2, which becomes the new SP.
    fn stack_push(&mut self, sp: &mut u16, value: u16) {
        let [hi, lo] = value.to_be_bytes();
        *sp = sp.wrapping_sub(1);
        self.write8(*sp, hi);
        *sp = sp.wrapping_sub(1);
        self.write8(*sp, lo);
    }

    /// Pop a word from the stack addressed by `sp`.
    fn stack_pop(&mut self, sp: &mut u16) -> u16 {
        let lo = self.read8(*sp);
        let hi = self.read8(sp.wrapping_add(1));
        *sp = sp.wrapping_add(2);
        u16::from_le_bytes([lo, hi])
    }
}

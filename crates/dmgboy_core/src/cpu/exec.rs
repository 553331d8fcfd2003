//! Opcode handlers referenced by the LR35902 opcode table.
//!
//! Every handler has the [`OpHandler`](super::OpHandler) shape: it receives
//! the CPU, the bus and the opcode byte that selected it, consumes its own
//! operands through `fetch_imm8`/`fetch_imm16`, and returns the cycles it
//! took *beyond* the base cost recorded in the table. Only branches whose
//! condition holds report a non-zero surcharge.

mod alu;
mod control;
mod incdec;
mod ld;
mod stack;
mod system;

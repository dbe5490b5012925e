//! The class IR: untyped virtual registers, a fixed catalog of operations
//! over them, and jump macros that turn a sequence of operation calls into a
//! program.
//!
//! The IR is designed to be:
//! - Zero-overhead: every instruction is an inlined function call on a 32-bit
//!   value, every jump is a native `break`/`continue`. The one exception is
//!   [`divi`], which keeps Rust's zero-divisor check and panics on zero;
//!   [`divi_unchecked`] drops it for callers that guarantee a non-zero divisor
//! - Unchecked: nothing tracks which view of a register is live
//! - Data-free: there is no instruction stream, decoder or dispatch loop
//!
//! A checked variant that tags registers and reports misuse lives in
//! [`checked`], behind its own names.

pub mod checked;
pub mod control;
pub mod opcode;
pub mod ops;
pub mod vreg;

pub use opcode::{Opcode, View};
pub use ops::*;
pub use vreg::{float2vr, int2vr, vr2float, vr2int, VirtualReg};

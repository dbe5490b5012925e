//! The virtual register: one 32-bit cell read either as an `i32` or an `f32`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An untyped virtual register.
///
/// Both views share the same bits. Writing one view and reading the other is a
/// bit reinterpretation, not a value conversion, and nothing records which
/// view was written last. Callers read back the view they wrote.
///
/// `Default` is all-zero bits: integer view `0`, float view `+0.0`.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct VirtualReg(u32);

impl VirtualReg {
    #[inline(always)]
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    #[inline(always)]
    pub const fn to_bits(self) -> u32 {
        self.0
    }

    #[inline(always)]
    pub const fn from_int(i: i32) -> Self {
        Self(i as u32)
    }

    #[inline(always)]
    pub fn from_float(f: f32) -> Self {
        Self(f.to_bits())
    }

    /// Integer view
    #[inline(always)]
    pub const fn i(self) -> i32 {
        self.0 as i32
    }

    /// Float view
    #[inline(always)]
    pub fn f(self) -> f32 {
        f32::from_bits(self.0)
    }
}

impl fmt::Debug for VirtualReg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VirtualReg")
            .field("bits", &format_args!("{:#010x}", self.0))
            .field("i", &self.i())
            .field("f", &self.f())
            .finish()
    }
}

impl From<i32> for VirtualReg {
    #[inline(always)]
    fn from(i: i32) -> Self {
        Self::from_int(i)
    }
}

impl From<f32> for VirtualReg {
    #[inline(always)]
    fn from(f: f32) -> Self {
        Self::from_float(f)
    }
}

/// Build a register whose integer view is `i`
#[inline(always)]
pub const fn int2vr(i: i32) -> VirtualReg {
    VirtualReg::from_int(i)
}

/// Build a register whose float view is `f`
#[inline(always)]
pub fn float2vr(f: f32) -> VirtualReg {
    VirtualReg::from_float(f)
}

/// Read the integer view, whatever was written last
#[inline(always)]
pub const fn vr2int(op1: VirtualReg) -> i32 {
    op1.i()
}

/// Read the float view, whatever was written last
#[inline(always)]
pub fn vr2float(op1: VirtualReg) -> f32 {
    op1.f()
}

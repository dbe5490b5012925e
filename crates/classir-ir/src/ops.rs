//! The operation catalog.
//!
//! Every operation is a pure function from one or two registers to a fresh
//! register, fixed to either the integer or the float view. Nothing here
//! checks which view an operand was written with, and nothing reports errors.
//! Integer arithmetic wraps on overflow; float arithmetic follows IEEE 754, so
//! infinities and NaNs are ordinary results.

use crate::vreg::VirtualReg;

#[inline(always)]
pub fn addi(op1: VirtualReg, op2: VirtualReg) -> VirtualReg {
    VirtualReg::from_int(op1.i().wrapping_add(op2.i()))
}

#[inline(always)]
pub fn addf(op1: VirtualReg, op2: VirtualReg) -> VirtualReg {
    VirtualReg::from_float(op1.f() + op2.f())
}

#[inline(always)]
pub fn subi(op1: VirtualReg, op2: VirtualReg) -> VirtualReg {
    VirtualReg::from_int(op1.i().wrapping_sub(op2.i()))
}

#[inline(always)]
pub fn subf(op1: VirtualReg, op2: VirtualReg) -> VirtualReg {
    VirtualReg::from_float(op1.f() - op2.f())
}

#[inline(always)]
pub fn multi(op1: VirtualReg, op2: VirtualReg) -> VirtualReg {
    VirtualReg::from_int(op1.i().wrapping_mul(op2.i()))
}

#[inline(always)]
pub fn multf(op1: VirtualReg, op2: VirtualReg) -> VirtualReg {
    VirtualReg::from_float(op1.f() * op2.f())
}

/// Integer division, truncating toward zero.
///
/// `i32::MIN / -1` wraps to `i32::MIN`.
///
/// # Panics
///
/// Panics if the divisor's integer view is zero. Use [`divi_unchecked`] where
/// the caller already guarantees a non-zero divisor.
#[inline(always)]
pub fn divi(op1: VirtualReg, op2: VirtualReg) -> VirtualReg {
    VirtualReg::from_int(op1.i().wrapping_div(op2.i()))
}

/// Integer division without the zero-divisor check.
///
/// # Safety
///
/// The integer view of `op2` must not be zero.
#[inline(always)]
pub unsafe fn divi_unchecked(op1: VirtualReg, op2: VirtualReg) -> VirtualReg {
    let divisor = op2.i();
    if divisor == 0 {
        // SAFETY: the caller guarantees a non-zero divisor.
        unsafe { std::hint::unreachable_unchecked() }
    }
    VirtualReg::from_int(op1.i().wrapping_div(divisor))
}

#[inline(always)]
pub fn divf(op1: VirtualReg, op2: VirtualReg) -> VirtualReg {
    VirtualReg::from_float(op1.f() / op2.f())
}

/// `1` in the integer view when the integer views are equal, else `0`
#[inline(always)]
pub fn eqi(op1: VirtualReg, op2: VirtualReg) -> VirtualReg {
    VirtualReg::from_int((op1.i() == op2.i()) as i32)
}

/// `1` in the integer view when the float views are equal, else `0`
#[inline(always)]
pub fn eqf(op1: VirtualReg, op2: VirtualReg) -> VirtualReg {
    VirtualReg::from_int((op1.f() == op2.f()) as i32)
}

#[inline(always)]
pub fn lti(op1: VirtualReg, op2: VirtualReg) -> VirtualReg {
    VirtualReg::from_int((op1.i() < op2.i()) as i32)
}

#[inline(always)]
pub fn ltf(op1: VirtualReg, op2: VirtualReg) -> VirtualReg {
    VirtualReg::from_int((op1.f() < op2.f()) as i32)
}

/// Numeric conversion of the integer view into the float view
#[inline(always)]
pub fn vr_int2float(op1: VirtualReg) -> VirtualReg {
    VirtualReg::from_float(op1.i() as f32)
}

/// Truncating conversion of the float view into the integer view.
///
/// Out-of-range values saturate to `i32::MIN`/`i32::MAX` and NaN becomes `0`.
#[inline(always)]
pub fn vr_float2int(op1: VirtualReg) -> VirtualReg {
    VirtualReg::from_int(op1.f() as i32)
}

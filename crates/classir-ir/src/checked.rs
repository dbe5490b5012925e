//! Opt-in checked variant of the operation catalog.
//!
//! `TaggedReg` carries a discriminant recording which view was written, and
//! every operation here validates its operands against [`Opcode::operand_view`]
//! before computing. The functions share names and results with
//! [`crate::ops`] but return `Result`. Integer divide-by-zero, integer
//! overflow and out-of-range float-to-int casts become errors. IEEE infinities
//! and NaNs from float arithmetic are still ordinary values.

use classir_core::{Error, Result};
use serde::{Deserialize, Serialize};

use crate::opcode::{Opcode, View};
use crate::vreg::VirtualReg;

/// A register that remembers which view it holds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TaggedReg {
    Int(i32),
    Float(f32),
}

impl TaggedReg {
    pub fn view(&self) -> View {
        match self {
            TaggedReg::Int(_) => View::Int,
            TaggedReg::Float(_) => View::Float,
        }
    }

    pub fn as_i32(&self) -> Result<i32> {
        match self {
            TaggedReg::Int(v) => Ok(*v),
            TaggedReg::Float(_) => Err(mismatch("vr2int", View::Int, View::Float)),
        }
    }

    pub fn as_f32(&self) -> Result<f32> {
        match self {
            TaggedReg::Float(v) => Ok(*v),
            TaggedReg::Int(_) => Err(mismatch("vr2float", View::Float, View::Int)),
        }
    }

    /// Attach a tag to raw bits, trusting that `view` is what was written
    pub fn from_raw(reg: VirtualReg, view: View) -> Self {
        match view {
            View::Int => TaggedReg::Int(reg.i()),
            View::Float => TaggedReg::Float(reg.f()),
        }
    }
}

impl From<TaggedReg> for VirtualReg {
    fn from(reg: TaggedReg) -> Self {
        match reg {
            TaggedReg::Int(v) => VirtualReg::from_int(v),
            TaggedReg::Float(v) => VirtualReg::from_float(v),
        }
    }
}

fn mismatch(op: &'static str, expected: View, found: View) -> Error {
    Error::ViewMismatch {
        op,
        expected: expected.name(),
        found: found.name(),
    }
}

fn expect_view(op: Opcode, reg: TaggedReg) -> Result<TaggedReg> {
    let expected = op.operand_view();
    if reg.view() != expected {
        return Err(mismatch(op.mnemonic(), expected, reg.view()));
    }
    Ok(reg)
}

fn int_operands(op: Opcode, op1: TaggedReg, op2: TaggedReg) -> Result<(i32, i32)> {
    Ok((expect_view(op, op1)?.as_i32()?, expect_view(op, op2)?.as_i32()?))
}

fn float_operands(op: Opcode, op1: TaggedReg, op2: TaggedReg) -> Result<(f32, f32)> {
    Ok((expect_view(op, op1)?.as_f32()?, expect_view(op, op2)?.as_f32()?))
}

fn int_result(op: Opcode, value: Option<i32>) -> Result<TaggedReg> {
    value
        .map(TaggedReg::Int)
        .ok_or(Error::Overflow { op: op.mnemonic() })
}

pub fn int2vr(i: i32) -> TaggedReg {
    TaggedReg::Int(i)
}

pub fn float2vr(f: f32) -> TaggedReg {
    TaggedReg::Float(f)
}

pub fn vr2int(op1: TaggedReg) -> Result<i32> {
    op1.as_i32()
}

pub fn vr2float(op1: TaggedReg) -> Result<f32> {
    op1.as_f32()
}

pub fn addi(op1: TaggedReg, op2: TaggedReg) -> Result<TaggedReg> {
    let (a, b) = int_operands(Opcode::AddI, op1, op2)?;
    int_result(Opcode::AddI, a.checked_add(b))
}

pub fn addf(op1: TaggedReg, op2: TaggedReg) -> Result<TaggedReg> {
    let (a, b) = float_operands(Opcode::AddF, op1, op2)?;
    Ok(TaggedReg::Float(a + b))
}

pub fn subi(op1: TaggedReg, op2: TaggedReg) -> Result<TaggedReg> {
    let (a, b) = int_operands(Opcode::SubI, op1, op2)?;
    int_result(Opcode::SubI, a.checked_sub(b))
}

pub fn subf(op1: TaggedReg, op2: TaggedReg) -> Result<TaggedReg> {
    let (a, b) = float_operands(Opcode::SubF, op1, op2)?;
    Ok(TaggedReg::Float(a - b))
}

pub fn multi(op1: TaggedReg, op2: TaggedReg) -> Result<TaggedReg> {
    let (a, b) = int_operands(Opcode::MulI, op1, op2)?;
    int_result(Opcode::MulI, a.checked_mul(b))
}

pub fn multf(op1: TaggedReg, op2: TaggedReg) -> Result<TaggedReg> {
    let (a, b) = float_operands(Opcode::MulF, op1, op2)?;
    Ok(TaggedReg::Float(a * b))
}

pub fn divi(op1: TaggedReg, op2: TaggedReg) -> Result<TaggedReg> {
    let (a, b) = int_operands(Opcode::DivI, op1, op2)?;
    if b == 0 {
        return Err(Error::DivisionByZero {
            op: Opcode::DivI.mnemonic(),
        });
    }
    int_result(Opcode::DivI, a.checked_div(b))
}

pub fn divf(op1: TaggedReg, op2: TaggedReg) -> Result<TaggedReg> {
    let (a, b) = float_operands(Opcode::DivF, op1, op2)?;
    Ok(TaggedReg::Float(a / b))
}

pub fn eqi(op1: TaggedReg, op2: TaggedReg) -> Result<TaggedReg> {
    let (a, b) = int_operands(Opcode::EqI, op1, op2)?;
    Ok(TaggedReg::Int((a == b) as i32))
}

pub fn eqf(op1: TaggedReg, op2: TaggedReg) -> Result<TaggedReg> {
    let (a, b) = float_operands(Opcode::EqF, op1, op2)?;
    Ok(TaggedReg::Int((a == b) as i32))
}

pub fn lti(op1: TaggedReg, op2: TaggedReg) -> Result<TaggedReg> {
    let (a, b) = int_operands(Opcode::LtI, op1, op2)?;
    Ok(TaggedReg::Int((a < b) as i32))
}

pub fn ltf(op1: TaggedReg, op2: TaggedReg) -> Result<TaggedReg> {
    let (a, b) = float_operands(Opcode::LtF, op1, op2)?;
    Ok(TaggedReg::Int((a < b) as i32))
}

pub fn vr_int2float(op1: TaggedReg) -> Result<TaggedReg> {
    let a = expect_view(Opcode::IntToFloat, op1)?.as_i32()?;
    Ok(TaggedReg::Float(a as f32))
}

pub fn vr_float2int(op1: TaggedReg) -> Result<TaggedReg> {
    let a = expect_view(Opcode::FloatToInt, op1)?.as_f32()?;
    // -2^31 and 2^31 are exact in f32
    let (low, high) = (i32::MIN as f32, -(i32::MIN as f32));
    if a.is_nan() || a < low || a >= high {
        return Err(Error::Conversion(format!(
            "{}: {} is not representable as i32",
            Opcode::FloatToInt,
            a
        )));
    }
    Ok(TaggedReg::Int(a as i32))
}

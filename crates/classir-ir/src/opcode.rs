//! Descriptions of the catalog operations.
//!
//! This is metadata about the functions in [`crate::ops`], used by the checked
//! layer and by tooling that lists the catalog. Programs never dispatch on it.

use std::fmt;
use std::str::FromStr;

use classir_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// One of the two readings of a register's bits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    Int,
    Float,
}

impl View {
    pub fn name(&self) -> &'static str {
        match self {
            View::Int => "int",
            View::Float => "float",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Opcode {
    // Arithmetic
    AddI,
    AddF,
    SubI,
    SubF,
    MulI,
    MulF,
    DivI,
    DivF,

    // Comparison
    EqI,
    EqF,
    LtI,
    LtF,

    // Casts
    IntToFloat,
    FloatToInt,
}

impl Opcode {
    pub const ALL: [Opcode; 14] = [
        Opcode::AddI,
        Opcode::AddF,
        Opcode::SubI,
        Opcode::SubF,
        Opcode::MulI,
        Opcode::MulF,
        Opcode::DivI,
        Opcode::DivF,
        Opcode::EqI,
        Opcode::EqF,
        Opcode::LtI,
        Opcode::LtF,
        Opcode::IntToFloat,
        Opcode::FloatToInt,
    ];

    /// Name of the catalog function implementing this operation
    pub fn mnemonic(&self) -> &'static str {
        match self {
            Opcode::AddI => "addi",
            Opcode::AddF => "addf",
            Opcode::SubI => "subi",
            Opcode::SubF => "subf",
            Opcode::MulI => "multi",
            Opcode::MulF => "multf",
            Opcode::DivI => "divi",
            Opcode::DivF => "divf",
            Opcode::EqI => "eqi",
            Opcode::EqF => "eqf",
            Opcode::LtI => "lti",
            Opcode::LtF => "ltf",
            Opcode::IntToFloat => "vr_int2float",
            Opcode::FloatToInt => "vr_float2int",
        }
    }

    /// Returns the number of operands this opcode expects
    pub fn arity(&self) -> usize {
        if self.is_cast() {
            1
        } else {
            2
        }
    }

    /// The view every operand is read through
    pub fn operand_view(&self) -> View {
        match self {
            Opcode::AddI
            | Opcode::SubI
            | Opcode::MulI
            | Opcode::DivI
            | Opcode::EqI
            | Opcode::LtI
            | Opcode::IntToFloat => View::Int,
            Opcode::AddF
            | Opcode::SubF
            | Opcode::MulF
            | Opcode::DivF
            | Opcode::EqF
            | Opcode::LtF
            | Opcode::FloatToInt => View::Float,
        }
    }

    /// The view the result is written through. Comparisons always yield an
    /// integer 0/1, even for float operands.
    pub fn result_view(&self) -> View {
        match self {
            Opcode::IntToFloat => View::Float,
            Opcode::FloatToInt => View::Int,
            op if op.is_comparison() => View::Int,
            op => op.operand_view(),
        }
    }

    pub fn is_comparison(&self) -> bool {
        matches!(self, Opcode::EqI | Opcode::EqF | Opcode::LtI | Opcode::LtF)
    }

    pub fn is_cast(&self) -> bool {
        matches!(self, Opcode::IntToFloat | Opcode::FloatToInt)
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

impl FromStr for Opcode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Opcode::ALL
            .iter()
            .copied()
            .find(|op| op.mnemonic() == s)
            .ok_or_else(|| Error::NotFound(format!("No catalog operation named '{}'", s)))
    }
}

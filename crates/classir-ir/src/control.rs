//! Control-flow primitives.
//!
//! A class IR program is ordinary Rust code: registers are locals, labels are
//! Rust block and loop labels, and a jump is a `break` or `continue` to one of
//! them. There is no program counter and no dispatch loop unless the caller
//! writes one.
//!
//! A jump target takes one of three forms:
//!
//! - `'label` leaves the labeled block or loop (forward jump).
//! - `continue 'label` restarts the labeled loop (backward jump).
//! - `pc => target, 'label` stores `target` into the caller's `pc` variable and
//!   restarts `'label`. This is for programs written as
//!   `'label: loop { match pc { .. } }` when the control-flow graph does not
//!   nest.
//!
//! ```
//! use classir_ir::*;
//!
//! let n = int2vr(10);
//! let one = int2vr(1);
//! let mut i = int2vr(0);
//! let mut acc = int2vr(0);
//! 'done: loop {
//!     beq!(i, n, 'done);
//!     acc = addi(acc, i);
//!     i = addi(i, one);
//! }
//! assert_eq!(vr2int(acc), 45);
//! ```

/// Unconditional jump.
#[macro_export]
macro_rules! branch {
    ($label:lifetime) => {
        break $label
    };
    (continue $label:lifetime) => {
        continue $label
    };
    ($pc:ident => $target:expr, $label:lifetime) => {{
        $pc = $target;
        continue $label;
    }};
}

/// Jump when the integer views of the two registers are equal.
#[macro_export]
macro_rules! beq {
    ($x:expr, $y:expr, $($target:tt)+) => {
        if $crate::vr2int($x) == $crate::vr2int($y) {
            $crate::branch!($($target)+);
        }
    };
}

/// Jump when the integer views of the two registers differ.
#[macro_export]
macro_rules! bneq {
    ($x:expr, $y:expr, $($target:tt)+) => {
        if $crate::vr2int($x) != $crate::vr2int($y) {
            $crate::branch!($($target)+);
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::{addi, int2vr, lti, subi, vr2int, VirtualReg};

    fn taken_if_equal(x: VirtualReg, y: VirtualReg) -> bool {
        let mut taken = true;
        'target: {
            beq!(x, y, 'target);
            taken = false;
        }
        taken
    }

    fn taken_if_not_equal(x: VirtualReg, y: VirtualReg) -> bool {
        let mut taken = true;
        'target: {
            bneq!(x, y, 'target);
            taken = false;
        }
        taken
    }

    #[test]
    fn test_beq_transfers_on_equal() {
        assert!(taken_if_equal(int2vr(0), int2vr(0)));
    }

    #[test]
    fn test_beq_falls_through_on_not_equal() {
        assert!(!taken_if_equal(int2vr(0), int2vr(1)));
    }

    #[test]
    fn test_bneq_is_inverted() {
        assert!(!taken_if_not_equal(int2vr(0), int2vr(0)));
        assert!(taken_if_not_equal(int2vr(0), int2vr(1)));
    }

    #[test]
    fn test_beq_compares_integer_view() {
        // +0.0 and -0.0 are equal as floats but differ in their bits
        assert!(!taken_if_equal(crate::float2vr(0.0), crate::float2vr(-0.0)));
    }

    #[test]
    #[allow(unreachable_code)]
    fn test_unconditional_branch_skips_code() {
        let mut reached = false;
        'skip: {
            branch!('skip);
            reached = true;
        }
        assert!(!reached);
    }

    #[test]
    fn test_backward_branch_loops() {
        let zero = int2vr(0);
        let one = int2vr(1);
        let mut countdown = int2vr(5);
        let mut trips = int2vr(0);
        'top: loop {
            countdown = subi(countdown, one);
            trips = addi(trips, one);
            bneq!(countdown, zero, continue 'top);
            break;
        }
        assert_eq!(vr2int(trips), 5);
    }

    #[test]
    fn test_state_machine_dispatch() {
        #[derive(Clone, Copy)]
        enum Block {
            Head,
            Body,
            Exit,
        }

        let one = int2vr(1);
        let limit = int2vr(4);
        let mut i = int2vr(0);
        let mut visits = 0;
        let mut pc = Block::Head;
        'run: loop {
            match pc {
                Block::Head => {
                    let in_range = lti(i, limit);
                    beq!(in_range, int2vr(0), pc => Block::Exit, 'run);
                    branch!(pc => Block::Body, 'run);
                }
                Block::Body => {
                    visits += 1;
                    i = addi(i, one);
                    branch!(pc => Block::Head, 'run);
                }
                Block::Exit => break 'run,
            }
        }
        assert_eq!(visits, 4);
        assert_eq!(vr2int(i), 4);
    }
}

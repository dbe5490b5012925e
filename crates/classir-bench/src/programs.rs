//! Benchmark programs.
//!
//! Each benchmark is written twice: once as a class IR program built only from
//! registers, catalog operations and jump macros, and once as plain Rust. Both
//! take `(x, y)` by reference and write their results back into them, and both
//! must produce identical outputs for every input in the benchmark's ranges.

use std::fmt;
use std::ops::RangeInclusive;

use classir_core::{Error, Result};
use classir_ir::*;

pub type ProgramFn = fn(&mut i32, &mut i32);

#[derive(Clone)]
pub struct Benchmark {
    pub name: &'static str,
    pub description: &'static str,
    /// Inputs accepted for `x`
    pub x_range: RangeInclusive<i32>,
    /// Inputs accepted for `y`
    pub y_range: RangeInclusive<i32>,
    /// Input used by the timing loop
    pub input: (i32, i32),
    pub ir: ProgramFn,
    pub native: ProgramFn,
}

impl fmt::Debug for Benchmark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Benchmark")
            .field("name", &self.name)
            .field("x_range", &self.x_range)
            .field("y_range", &self.y_range)
            .field("input", &self.input)
            .finish_non_exhaustive()
    }
}

pub static CATALOG: &[Benchmark] = &[
    Benchmark {
        name: "sum_to",
        description: "y = 0 + 1 + ... + (x - 1), counted loop",
        x_range: 0..=10_000,
        y_range: 0..=0,
        input: (10_000, 0),
        ir: sum_to_ir,
        native: sum_to_native,
    },
    Benchmark {
        name: "collatz",
        description: "y = Collatz steps from x to 1, data-dependent branches and division",
        x_range: 1..=50_000,
        y_range: 0..=0,
        input: (27, 0),
        ir: collatz_ir,
        native: collatz_native,
    },
    Benchmark {
        name: "gcd",
        description: "x = y = gcd(x, y) by repeated subtraction",
        x_range: 1..=10_000,
        y_range: 1..=10_000,
        input: (9_240, 1_386),
        ir: gcd_ir,
        native: gcd_native,
    },
    Benchmark {
        name: "horner",
        description: "y = sum of a cubic over x sample points, float arithmetic and casts",
        x_range: 0..=1_000,
        y_range: 0..=0,
        input: (1_000, 0),
        ir: horner_ir,
        native: horner_native,
    },
    Benchmark {
        name: "float_div",
        description: "y = finite reciprocals among x, x = their sum, which is +inf",
        x_range: 1..=2_000,
        y_range: 0..=0,
        input: (2_000, 0),
        ir: float_div_ir,
        native: float_div_native,
    },
    Benchmark {
        name: "state_machine",
        description: "x = decimal digit count, y = digit sum, written as a pc dispatch loop",
        x_range: 0..=i32::MAX,
        y_range: 0..=0,
        input: (1_234_567_890, 0),
        ir: digits_ir,
        native: digits_native,
    },
];

pub fn catalog() -> &'static [Benchmark] {
    CATALOG
}

pub fn find(name: &str) -> Result<&'static Benchmark> {
    CATALOG
        .iter()
        .find(|b| b.name == name)
        .ok_or_else(|| Error::NotFound(format!("No benchmark named '{}'", name)))
}

pub fn sum_to_ir(x: &mut i32, y: &mut i32) {
    let n = int2vr(*x);
    let one = int2vr(1);
    let mut i = int2vr(0);
    let mut acc = int2vr(0);

    'sum: loop {
        beq!(i, n, 'sum);
        acc = addi(acc, i);
        i = addi(i, one);
    }

    *y = vr2int(acc);
}

pub fn sum_to_native(x: &mut i32, y: &mut i32) {
    let mut acc = 0i32;
    for i in 0..*x {
        acc = acc.wrapping_add(i);
    }
    *y = acc;
}

pub fn collatz_ir(x: &mut i32, y: &mut i32) {
    let zero = int2vr(0);
    let one = int2vr(1);
    let two = int2vr(2);
    let three = int2vr(3);
    let mut n = int2vr(*x);
    let mut steps = int2vr(0);

    'done: loop {
        beq!(n, one, 'done);
        let half = divi(n, two);
        let rem = subi(n, multi(half, two));
        'next: {
            'odd: {
                bneq!(rem, zero, 'odd);
                n = half;
                branch!('next);
            }
            n = addi(multi(n, three), one);
        }
        steps = addi(steps, one);
    }

    *y = vr2int(steps);
}

pub fn collatz_native(x: &mut i32, y: &mut i32) {
    let mut n = *x;
    let mut steps = 0;
    while n != 1 {
        n = if n % 2 == 0 { n / 2 } else { 3 * n + 1 };
        steps += 1;
    }
    *y = steps;
}

pub fn gcd_ir(x: &mut i32, y: &mut i32) {
    let zero = int2vr(0);
    let mut a = int2vr(*x);
    let mut b = int2vr(*y);

    'gcd: loop {
        beq!(a, b, 'gcd);
        'a_not_less: {
            beq!(lti(a, b), zero, 'a_not_less);
            b = subi(b, a);
            branch!(continue 'gcd);
        }
        a = subi(a, b);
    }

    *x = vr2int(a);
    *y = vr2int(b);
}

pub fn gcd_native(x: &mut i32, y: &mut i32) {
    let (mut a, mut b) = (*x, *y);
    while a != b {
        if a < b {
            b -= a;
        } else {
            a -= b;
        }
    }
    *x = a;
    *y = b;
}

pub fn horner_ir(x: &mut i32, y: &mut i32) {
    let c3 = float2vr(3.0);
    let c2 = float2vr(-2.0);
    let c1 = float2vr(0.5);
    let c0 = float2vr(1.0);
    let scale = float2vr(100.0);
    let one = int2vr(1);
    let n = int2vr(*x);
    let mut i = int2vr(0);
    let mut acc = float2vr(0.0);

    'sum: loop {
        beq!(i, n, 'sum);
        let t = divf(vr_int2float(i), scale);
        let mut p = c3;
        p = addf(multf(p, t), c2);
        p = addf(multf(p, t), c1);
        p = addf(multf(p, t), c0);
        acc = addf(acc, p);
        i = addi(i, one);
    }

    *y = vr2int(vr_float2int(acc));
}

pub fn horner_native(x: &mut i32, y: &mut i32) {
    let mut acc = 0.0f32;
    for i in 0..*x {
        let t = i as f32 / 100.0;
        let p = ((3.0 * t + -2.0) * t + 0.5) * t + 1.0;
        acc += p;
    }
    *y = acc as i32;
}

pub fn float_div_ir(x: &mut i32, y: &mut i32) {
    let one = int2vr(1);
    let one_f = float2vr(1.0);
    let inf = float2vr(f32::INFINITY);
    let n = int2vr(*x);
    let half = divi(n, int2vr(2));
    let mut i = int2vr(0);
    let mut finite = int2vr(0);
    let mut acc = float2vr(0.0);

    'scan: loop {
        beq!(i, n, 'scan);
        let r = divf(one_f, vr_int2float(subi(i, half)));
        finite = addi(finite, ltf(r, inf));
        acc = addf(acc, r);
        i = addi(i, one);
    }

    *x = vr2int(vr_float2int(acc));
    *y = vr2int(finite);
}

pub fn float_div_native(x: &mut i32, y: &mut i32) {
    let n = *x;
    let half = n / 2;
    let mut finite = 0;
    let mut acc = 0.0f32;
    for i in 0..n {
        let r = 1.0 / (i - half) as f32;
        finite += (r < f32::INFINITY) as i32;
        acc += r;
    }
    *x = acc as i32;
    *y = finite;
}

#[derive(Clone, Copy)]
enum DigitBlock {
    Head,
    Body,
    Exit,
}

pub fn digits_ir(x: &mut i32, y: &mut i32) {
    let zero = int2vr(0);
    let one = int2vr(1);
    let ten = int2vr(10);
    let mut n = int2vr(*x);
    let mut count = int2vr(0);
    let mut sum = int2vr(0);
    let mut pc = DigitBlock::Head;

    'run: loop {
        match pc {
            DigitBlock::Head => {
                beq!(n, zero, pc => DigitBlock::Exit, 'run);
                branch!(pc => DigitBlock::Body, 'run);
            }
            DigitBlock::Body => {
                let rest = divi(n, ten);
                let digit = subi(n, multi(rest, ten));
                sum = addi(sum, digit);
                count = addi(count, one);
                n = rest;
                branch!(pc => DigitBlock::Head, 'run);
            }
            DigitBlock::Exit => break 'run,
        }
    }

    *x = vr2int(count);
    *y = vr2int(sum);
}

pub fn digits_native(x: &mut i32, y: &mut i32) {
    let mut n = *x;
    let mut count = 0;
    let mut sum = 0;
    while n != 0 {
        sum += n % 10;
        count += 1;
        n /= 10;
    }
    *x = count;
    *y = sum;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(program: ProgramFn, x: i32, y: i32) -> (i32, i32) {
        let (mut x, mut y) = (x, y);
        program(&mut x, &mut y);
        (x, y)
    }

    #[test]
    fn test_catalog_names_are_unique() {
        let mut names: Vec<_> = catalog().iter().map(|b| b.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), catalog().len());
    }

    #[test]
    fn test_timing_inputs_are_in_range() {
        for bench in catalog() {
            assert!(bench.x_range.contains(&bench.input.0), "{}", bench.name);
            assert!(bench.y_range.contains(&bench.input.1), "{}", bench.name);
        }
    }

    #[test]
    fn test_find() {
        assert_eq!(find("gcd").unwrap().name, "gcd");
        assert!(matches!(find("missing"), Err(Error::NotFound(_))));
    }

    #[test]
    fn test_sum_to() {
        assert_eq!(run(sum_to_ir, 10, 0).1, 45);
        assert_eq!(run(sum_to_ir, 0, 0).1, 0);
        assert_eq!(run(sum_to_native, 10, 0).1, 45);
    }

    #[test]
    fn test_collatz() {
        assert_eq!(run(collatz_ir, 1, 0).1, 0);
        assert_eq!(run(collatz_ir, 6, 0).1, 8);
        assert_eq!(run(collatz_ir, 27, 0).1, 111);
        assert_eq!(run(collatz_native, 27, 0).1, 111);
    }

    #[test]
    fn test_gcd() {
        assert_eq!(run(gcd_ir, 9_240, 1_386), (462, 462));
        assert_eq!(run(gcd_ir, 7, 7), (7, 7));
        assert_eq!(run(gcd_ir, 13, 1), (1, 1));
        assert_eq!(run(gcd_native, 9_240, 1_386), (462, 462));
    }

    #[test]
    fn test_horner_matches_native() {
        for x in [0, 1, 17, 1_000] {
            assert_eq!(run(horner_ir, x, 0), run(horner_native, x, 0));
        }
        // p(0) = 1, p(0.01) = 1.0048..
        assert_eq!(run(horner_ir, 2, 0).1, 2);
    }

    #[test]
    fn test_float_div_propagates_infinity() {
        let (sum, finite) = run(float_div_ir, 10, 0);
        assert_eq!(finite, 9);
        assert_eq!(sum, i32::MAX);
        assert_eq!(run(float_div_native, 10, 0), (sum, finite));
    }

    #[test]
    fn test_digits() {
        assert_eq!(run(digits_ir, 0, 0), (0, 0));
        assert_eq!(run(digits_ir, 1_234_567_890, 0), (10, 45));
        assert_eq!(run(digits_native, 1_234_567_890, 0), (10, 45));
    }

    #[test]
    fn test_digits_accepts_whole_range() {
        let bench = find("state_machine").unwrap();
        assert!(bench.x_range.contains(&bench.input.0));

        let max = *bench.x_range.end();
        assert_eq!(max, i32::MAX);
        // 2147483647 -> 10 digits summing to 46
        assert_eq!(run(digits_ir, max, 0), (10, 46));
        assert_eq!(run(digits_ir, max, 0), run(digits_native, max, 0));
    }
}

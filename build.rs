//! Generates the 128-bit power-of-ten lookup table consumed by `src/table.rs`.
//!
//! Each `10^exp10` is computed exactly with big integers, then normalized into
//! `[2^127, 2^128)` so the high bit of the high limb is always set. Generating
//! this at build time avoids hand-transcribing ~600 128-bit constants.

use std::{env, fs::File, io::Write, path::Path};

use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Lowest supported `exp10`; matches `src/table.rs::MIN_EXP10`.
const MIN_EXP10: i32 = -307;
/// Highest supported `exp10`; matches `src/table.rs::MAX_EXP10`.
const MAX_EXP10: i32 = 288;

/// Extra bits of headroom so `1 << EXTRA_BITS` safely exceeds any `10^exp10`
/// we compute, even after the division path for negative exponents.
const EXTRA_BITS: u32 = 2048;

fn normalized_10_pow(exp10: i32) -> (u64, u64) {
    let one: BigUint = One::one();
    let mut z = one << EXTRA_BITS;

    if exp10 >= 0 {
        z *= BigUint::from(10u8).pow(exp10 as u32);
    } else {
        let divisor = BigUint::from(10u8).pow((-exp10) as u32);
        assert!(divisor != Zero::zero());
        z /= divisor;
    }

    // Normalize to exactly 128 bits (shift toward [2^127, 2^128)).
    let bits = z.bits();
    if bits > 128 {
        z >>= bits - 128;
    } else if bits < 128 {
        z <<= 128 - bits;
    }
    assert_eq!(z.bits(), 128, "10^{exp10} did not normalize to 128 bits");

    let limbs = z.iter_u64_digits().collect::<Vec<_>>();
    let lo = limbs.first().copied().unwrap_or(0);
    let hi = limbs.get(1).copied().unwrap_or(0);
    assert!(hi & (1 << 63) != 0, "10^{exp10} missing normalized high bit");
    (lo, hi)
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let mut lines = Vec::new();
    lines.push(format!(
        "pub(crate) const MIN_EXP10: i32 = {MIN_EXP10};\npub(crate) const MAX_EXP10: i32 = {MAX_EXP10};\n"
    ));
    lines.push(format!(
        "pub(crate) static POWER_OF_TEN: [(u64, u64); {}] = [",
        (MAX_EXP10 - MIN_EXP10 + 1) as usize
    ));
    for exp10 in MIN_EXP10..=MAX_EXP10 {
        let (lo, hi) = normalized_10_pow(exp10);
        lines.push(format!("    ({lo:#018x}, {hi:#018x}), // 10^{exp10}"));
    }
    lines.push("];".to_string());

    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("power_table.rs");
    let mut f = File::create(dest_path).expect("could not create power_table.rs");
    f.write_all(lines.join("\n").as_bytes()).unwrap();
}

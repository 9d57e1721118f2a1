//! # Chromosome Codec
//!
//! Pure conversion functions between the three representations of a
//! candidate solution:
//!
//! - a fixed-width binary string (the chromosome),
//! - an unsigned integer in `[0, 2^n_bits - 1]`,
//! - a real value in the domain `[l_inf, l_sup]`.
//!
//! The binary encoding is positional with the least significant bit first:
//! character `i` of the chromosome contributes `2^i` to the integer value.
//!
//! The integer-to-real mapping is the affine interpolation with slope
//! `m = (l_sup - l_inf) / v_max`, where `v_max = 2^n_bits - 1`:
//!
//! ```text
//! real = m * (value - v_max) + l_sup
//! ```
//!
//! so integer `0` maps to `l_inf` and `v_max` maps to `l_sup`. The inverse
//! map truncates to an integer, which makes a real-value round trip accurate
//! only to one quantization step of `(l_sup - l_inf) / v_max`.
//!
//! ## Example
//!
//! ```rust
//! use bitga::codec;
//!
//! let chromosome = codec::encode(5, 4).unwrap();
//! assert_eq!(chromosome, "1010");
//! assert_eq!(codec::decode(&chromosome).unwrap(), 5);
//! ```

use crate::error::{GaError, Result};

/// The widest chromosome the codec supports. Integer values are held in a
/// `u64`, and `2^n_bits - 1` must not overflow it.
pub const MAX_BITS: usize = 63;

/// Returns the largest integer representable with `n_bits` bits.
pub fn max_value(n_bits: usize) -> u64 {
    (1u64 << n_bits) - 1
}

/// Encodes an integer as a length-`n_bits` binary string, least significant
/// bit first.
///
/// # Errors
///
/// Returns an error if `n_bits` exceeds [`MAX_BITS`] or `value` does not fit
/// in `n_bits` bits.
pub fn encode(value: u64, n_bits: usize) -> Result<String> {
    if n_bits > MAX_BITS {
        return Err(GaError::Configuration(format!(
            "bit width {} exceeds the supported maximum of {}",
            n_bits, MAX_BITS
        )));
    }
    if value > max_value(n_bits) {
        return Err(GaError::Configuration(format!(
            "integer {} does not fit in {} bits",
            value, n_bits
        )));
    }
    Ok((0..n_bits)
        .map(|i| if value & (1u64 << i) != 0 { '1' } else { '0' })
        .collect())
}

/// Decodes a binary string back into its integer value.
///
/// Exact inverse of [`encode`]: `decode(&encode(x, n)?)? == x` for every `x`
/// that fits in `n` bits, and `encode(decode(c)?, c.len())? == c` for every
/// well-formed chromosome.
///
/// # Errors
///
/// Returns an error if the string is longer than [`MAX_BITS`] or contains a
/// character other than `'0'` or `'1'`.
pub fn decode(chromosome: &str) -> Result<u64> {
    if chromosome.len() > MAX_BITS {
        return Err(GaError::Configuration(format!(
            "chromosome length {} exceeds the supported maximum of {}",
            chromosome.len(),
            MAX_BITS
        )));
    }
    let mut value = 0u64;
    for (locus, symbol) in chromosome.chars().enumerate() {
        match symbol {
            '1' => value |= 1u64 << locus,
            '0' => {}
            _ => return Err(GaError::InvalidChromosomeSymbol { symbol, locus }),
        }
    }
    Ok(value)
}

/// Maps an integer value onto the real domain `[l_inf, l_sup]`.
///
/// Requires `l_inf < l_sup`; bounds are validated at configuration time.
pub fn to_real(value: u64, n_bits: usize, l_inf: f64, l_sup: f64) -> f64 {
    let v_max = max_value(n_bits) as f64;
    let m = (l_sup - l_inf) / v_max;
    m * (value as f64 - v_max) + l_sup
}

/// Maps a real value in `[l_inf, l_sup]` back onto the integer range,
/// truncating the fractional part.
pub fn to_integer(real: f64, n_bits: usize, l_inf: f64, l_sup: f64) -> u64 {
    let v_max = max_value(n_bits) as f64;
    let m = v_max / (l_sup - l_inf);
    (m * (real - l_sup) + v_max) as u64
}

//! # Variable-Point Crossover
//!
//! A generalization of single-point crossover to a variable number of
//! alternating splice points. With probability `1 - rate` the children are
//! verbatim copies of their parents. Otherwise `k` distinct interior cut
//! positions are drawn, with `k` uniform in `[1, floor(sqrt(n_bits))]`, and
//! the `k + 1` resulting segments alternate their source parent: even
//! segments keep the own parent's bits, odd segments take the other's.

use crate::error::{GaError, Result};
use crate::individual::Individual;
use crate::rng::RandomNumberGenerator;

/// Crosses two parents over, producing two newly constructed children with
/// the parents' bounds and bit width.
///
/// Cut positions are sampled from the interior `{1, .., n_bits - 2}`;
/// positions `0` and `n_bits` are implicit segment boundaries and never
/// drawn. When the interior is empty (`n_bits < 3`) no cut is possible and
/// the children are copies regardless of the rate.
///
/// # Errors
///
/// Returns [`GaError::Configuration`] if the parents disagree on bit width.
pub fn crossover(
    parent_a: &Individual,
    parent_b: &Individual,
    rate: f64,
    rng: &mut RandomNumberGenerator,
) -> Result<(Individual, Individual)> {
    let n_bits = parent_a.n_bits();
    if parent_b.n_bits() != n_bits {
        return Err(GaError::Configuration(format!(
            "cannot cross parents of differing bit widths ({} vs {})",
            n_bits,
            parent_b.n_bits()
        )));
    }

    let interior = n_bits.saturating_sub(2);
    if interior == 0 || !rng.flip(rate) {
        return Ok((parent_a.clone(), parent_b.clone()));
    }

    let max_cuts = (n_bits as f64).sqrt().floor() as usize;
    let k = rng.int_in(1, max_cuts as u64) as usize;
    let mut cuts = rng.sample_distinct(1, interior, k);
    cuts.sort_unstable();

    let mut boundaries = Vec::with_capacity(k + 2);
    boundaries.push(0);
    boundaries.extend(cuts);
    boundaries.push(n_bits);

    let genes_a = parent_a.chromosome();
    let genes_b = parent_b.chromosome();
    let mut child_a = String::with_capacity(n_bits);
    let mut child_b = String::with_capacity(n_bits);

    for (segment, window) in boundaries.windows(2).enumerate() {
        let (start, end) = (window[0], window[1]);
        if segment % 2 == 0 {
            child_a.push_str(&genes_a[start..end]);
            child_b.push_str(&genes_b[start..end]);
        } else {
            child_a.push_str(&genes_b[start..end]);
            child_b.push_str(&genes_a[start..end]);
        }
    }

    let (l_inf, l_sup) = parent_a.bounds();
    Ok((
        Individual::from_chromosome(child_a, n_bits, l_inf, l_sup)?,
        Individual::from_chromosome(child_b, n_bits, l_inf, l_sup)?,
    ))
}

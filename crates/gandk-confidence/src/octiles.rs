//! Empirical octiles, the summary statistics fed to likelihood-free samplers

use gandk_core::{Error, Result};

/// Cumulative probabilities of the seven octiles
pub const OCTILE_PROBABILITIES: [f64; 7] = [0.125, 0.25, 0.375, 0.5, 0.625, 0.75, 0.875];

/// Sample quantile of pre-sorted data by linear interpolation between order
/// statistics at position `h = (n - 1)·p`
///
/// # Arguments
/// * `sorted_data` - The data sample, already sorted ascending
/// * `p` - The probability (0.0 to 1.0)
pub fn empirical_quantile_sorted(sorted_data: &[f64], p: f64) -> Result<f64> {
    if sorted_data.is_empty() {
        return Err(Error::empty_input());
    }
    if p.is_nan() || !(0.0..=1.0).contains(&p) {
        return Err(Error::Domain(format!("Probability {p} must be in [0, 1]")));
    }

    let h = (sorted_data.len() - 1) as f64 * p;
    let lo = h.floor() as usize;
    let hi = (lo + 1).min(sorted_data.len() - 1);
    let frac = h - lo as f64;
    Ok(sorted_data[lo] + frac * (sorted_data[hi] - sorted_data[lo]))
}

/// Sample quantile of unsorted data
pub fn empirical_quantile(sample: &[f64], p: f64) -> Result<f64> {
    let sorted = sorted_copy(sample)?;
    empirical_quantile_sorted(&sorted, p)
}

/// The seven empirical octiles of pre-sorted data
pub fn octiles_sorted(sorted_data: &[f64]) -> Result<[f64; 7]> {
    let mut out = [0.0; 7];
    for (slot, &p) in out.iter_mut().zip(OCTILE_PROBABILITIES.iter()) {
        *slot = empirical_quantile_sorted(sorted_data, p)?;
    }
    Ok(out)
}

/// The seven empirical octiles of a sample
pub fn octiles(sample: &[f64]) -> Result<[f64; 7]> {
    let sorted = sorted_copy(sample)?;
    octiles_sorted(&sorted)
}

fn sorted_copy(sample: &[f64]) -> Result<Vec<f64>> {
    if sample.is_empty() {
        return Err(Error::empty_input());
    }
    if sample.iter().any(|x| !x.is_finite()) {
        return Err(Error::non_finite("sample"));
    }
    let mut sorted = sample.to_vec();
    sorted.sort_by(f64::total_cmp);
    Ok(sorted)
}

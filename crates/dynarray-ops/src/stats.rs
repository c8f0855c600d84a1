//! Descriptive statistics over a buffer.
//!
//! Every reducer except [`sum`] needs at least one element and returns
//! [`ArrayError::Empty`] otherwise.

use dynarray_arena::ArrayBuffer;
use dynarray_core::ArrayError;

fn non_empty<'a>(buf: &'a ArrayBuffer, op: &'static str) -> Result<&'a [f64], ArrayError> {
    if buf.is_empty() {
        return Err(ArrayError::Empty { op });
    }
    Ok(buf.as_slice())
}

/// Smallest element. Ties and NaNs keep the earlier value.
pub fn min(buf: &ArrayBuffer) -> Result<f64, ArrayError> {
    let values = non_empty(buf, "min")?;
    Ok(values[1..]
        .iter()
        .fold(values[0], |acc, &v| if v < acc { v } else { acc }))
}

/// Largest element. Ties and NaNs keep the earlier value.
pub fn max(buf: &ArrayBuffer) -> Result<f64, ArrayError> {
    let values = non_empty(buf, "max")?;
    Ok(values[1..]
        .iter()
        .fold(values[0], |acc, &v| if v > acc { v } else { acc }))
}

/// Sum of all elements; `0.0` for an empty buffer.
pub fn sum(buf: &ArrayBuffer) -> f64 {
    // Strict left-to-right from +0.0 so rounding is reproducible.
    buf.iter().fold(0.0, |acc, &v| acc + v)
}

/// Arithmetic mean.
pub fn mean(buf: &ArrayBuffer) -> Result<f64, ArrayError> {
    let values = non_empty(buf, "mean")?;
    Ok(sum(buf) / values.len() as f64)
}

/// Median of a sorted copy; the mean of the two central values for even lengths.
pub fn median(buf: &ArrayBuffer) -> Result<f64, ArrayError> {
    let mut sorted = non_empty(buf, "median")?.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Ok((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Ok(sorted[mid])
    }
}

/// Element at index 0.
pub fn first(buf: &ArrayBuffer) -> Result<f64, ArrayError> {
    Ok(non_empty(buf, "first")?[0])
}

/// Element at index `len - 1`.
pub fn last(buf: &ArrayBuffer) -> Result<f64, ArrayError> {
    let values = non_empty(buf, "last")?;
    Ok(values[values.len() - 1])
}

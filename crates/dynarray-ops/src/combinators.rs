//! Pure combinators: each reads its inputs and returns a new buffer.
//!
//! None of these functions mutate their inputs, and no output ever
//! shares storage with an input.

use dynarray_arena::ArrayBuffer;
use dynarray_core::{
    ArrayError, RANGE_INITIAL_CAPACITY, RANGE_STEP_TOLERANCE, UNIQUE_TOLERANCE,
};

/// A copy of `src` with the same capacity and contents.
pub fn copy(src: &ArrayBuffer) -> Result<ArrayBuffer, ArrayError> {
    ArrayBuffer::from_slice(src.as_slice(), src.capacity())
}

/// Values from `start` toward `end` in increments of `step`.
///
/// Iteration continues while the value has not passed `end` by more
/// than half a step, so the end point is included despite accumulated
/// rounding: `range(0.0, 1.0, 0.1)` has 11 elements. A zero or
/// non-finite argument produces an empty buffer.
pub fn range(start: f64, end: f64, step: f64) -> Result<ArrayBuffer, ArrayError> {
    let mut out = ArrayBuffer::with_capacity(RANGE_INITIAL_CAPACITY)?;
    if step == 0.0 || !(start.is_finite() && end.is_finite() && step.is_finite()) {
        return Ok(out);
    }

    let limit = end + step * RANGE_STEP_TOLERANCE;
    let within = |value: f64| {
        if step > 0.0 {
            value <= limit
        } else {
            value >= limit
        }
    };

    let mut value = start;
    while within(value) {
        out.push(value)?;
        let next = value + step;
        // Step too small to move the value at this magnitude.
        if next == value {
            break;
        }
        value = next;
    }
    Ok(out)
}

/// The elements of `a` followed by the elements of `b`.
pub fn concat(a: &ArrayBuffer, b: &ArrayBuffer) -> Result<ArrayBuffer, ArrayError> {
    let mut out = ArrayBuffer::with_capacity(a.len() + b.len())?;
    out.extend_from_slice(a.as_slice())?;
    out.extend_from_slice(b.as_slice())?;
    Ok(out)
}

/// Exactly `|n|` elements taken from the front (`n > 0`) or back (`n < 0`).
///
/// When `|n|` exceeds the source length the result is zero-padded: after
/// the copied prefix for positive `n`, before the copied suffix for
/// negative `n`.
pub fn take(src: &ArrayBuffer, n: i64) -> Result<ArrayBuffer, ArrayError> {
    let m = usize::try_from(n.unsigned_abs()).map_err(|_| ArrayError::AllocationFailed {
        requested: usize::MAX,
    })?;
    let values = src.as_slice();
    let count = m.min(values.len());
    let padding = m - count;

    let mut out = ArrayBuffer::with_capacity(m)?;
    if n >= 0 {
        out.extend_from_slice(&values[..count])?;
        pad_zeros(&mut out, padding)?;
    } else {
        pad_zeros(&mut out, padding)?;
        out.extend_from_slice(&values[values.len() - count..])?;
    }
    Ok(out)
}

fn pad_zeros(out: &mut ArrayBuffer, count: usize) -> Result<(), ArrayError> {
    for _ in 0..count {
        out.push(0.0)?;
    }
    Ok(())
}

/// The elements of `src` for which `predicate` holds, in order.
pub fn filter<F>(src: &ArrayBuffer, mut predicate: F) -> Result<ArrayBuffer, ArrayError>
where
    F: FnMut(f64) -> bool,
{
    let mut out = ArrayBuffer::with_capacity(src.len())?;
    for &value in src {
        if predicate(value) {
            out.push(value)?;
        }
    }
    Ok(out)
}

/// Each distinct value of `src` once, in order of first occurrence.
///
/// Values closer than [`UNIQUE_TOLERANCE`] count as the same value and
/// the first one seen is kept. Comparison is against every accepted
/// value, so the cost is quadratic in the number of distinct values.
pub fn unique(src: &ArrayBuffer) -> Result<ArrayBuffer, ArrayError> {
    let mut out = ArrayBuffer::with_capacity(src.len())?;
    for &value in src {
        let seen = out
            .iter()
            .any(|&accepted| (accepted - value).abs() < UNIQUE_TOLERANCE);
        if !seen {
            out.push(value)?;
        }
    }
    Ok(out)
}

/// `src` divided into exactly `n_chunks` contiguous chunks.
///
/// With `base = len / n_chunks` and `rem = len % n_chunks`, the first
/// `rem` chunks hold `base + 1` elements and the rest hold `base`. A
/// non-positive chunk count or an empty source yields no chunks.
pub fn split(src: &ArrayBuffer, n_chunks: i64) -> Result<Vec<ArrayBuffer>, ArrayError> {
    if n_chunks <= 0 || src.is_empty() {
        return Ok(Vec::new());
    }
    let n = usize::try_from(n_chunks).map_err(|_| ArrayError::AllocationFailed {
        requested: usize::MAX,
    })?;
    let base = src.len() / n;
    let remainder = src.len() % n;

    let mut chunks = Vec::new();
    chunks
        .try_reserve_exact(n)
        .map_err(|_| ArrayError::AllocationFailed { requested: n })?;

    let mut rest = src.as_slice();
    for i in 0..n {
        let size = base + usize::from(i < remainder);
        let (head, tail) = rest.split_at(size);
        chunks.push(ArrayBuffer::from_slice(head, size)?);
        rest = tail;
    }
    Ok(chunks)
}

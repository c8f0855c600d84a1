//! Registry-level combinators.
//!
//! [`Derive`] runs a [`combinators`](crate::combinators) function against
//! arrays held by a [`Registry`] and registers the result under a new
//! handle. Derived arrays are independent of their sources: destroying a
//! source never affects a derived array, and vice versa.

use smallvec::SmallVec;
use tracing::debug;

use dynarray_arena::Registry;
use dynarray_core::{ArrayError, ArrayId};

use crate::combinators;

/// Handles of the chunks produced by [`Derive::split`], in source order.
///
/// Stays inline for up to eight chunks.
pub type ChunkIds = SmallVec<[ArrayId; 8]>;

/// Combinators that register their output with the receiver.
pub trait Derive {
    /// Register a copy of `src`.
    fn copy(&mut self, src: ArrayId) -> Result<ArrayId, ArrayError>;

    /// Register `range(start, end, step)`.
    fn range(&mut self, start: f64, end: f64, step: f64) -> Result<ArrayId, ArrayError>;

    /// Register `a` followed by `b`.
    fn concat(&mut self, a: ArrayId, b: ArrayId) -> Result<ArrayId, ArrayError>;

    /// Register `|n|` elements from the front or back of `src`, zero-padded.
    fn take(&mut self, src: ArrayId, n: i64) -> Result<ArrayId, ArrayError>;

    /// Register the elements of `src` for which `predicate` holds.
    fn filter<F>(&mut self, src: ArrayId, predicate: F) -> Result<ArrayId, ArrayError>
    where
        F: FnMut(f64) -> bool;

    /// Register the distinct values of `src` in first-occurrence order.
    fn unique(&mut self, src: ArrayId) -> Result<ArrayId, ArrayError>;

    /// Register each of `n_chunks` contiguous chunks of `src`.
    ///
    /// Either every chunk is registered or none is.
    fn split(&mut self, src: ArrayId, n_chunks: i64) -> Result<ChunkIds, ArrayError>;
}

impl Derive for Registry {
    fn copy(&mut self, src: ArrayId) -> Result<ArrayId, ArrayError> {
        let out = combinators::copy(self.get(src)?)?;
        self.insert(out)
    }

    fn range(&mut self, start: f64, end: f64, step: f64) -> Result<ArrayId, ArrayError> {
        let out = combinators::range(start, end, step)?;
        self.insert(out)
    }

    fn concat(&mut self, a: ArrayId, b: ArrayId) -> Result<ArrayId, ArrayError> {
        let out = combinators::concat(self.get(a)?, self.get(b)?)?;
        self.insert(out)
    }

    fn take(&mut self, src: ArrayId, n: i64) -> Result<ArrayId, ArrayError> {
        let out = combinators::take(self.get(src)?, n)?;
        self.insert(out)
    }

    fn filter<F>(&mut self, src: ArrayId, predicate: F) -> Result<ArrayId, ArrayError>
    where
        F: FnMut(f64) -> bool,
    {
        let out = combinators::filter(self.get(src)?, predicate)?;
        self.insert(out)
    }

    fn unique(&mut self, src: ArrayId) -> Result<ArrayId, ArrayError> {
        let out = combinators::unique(self.get(src)?)?;
        self.insert(out)
    }

    fn split(&mut self, src: ArrayId, n_chunks: i64) -> Result<ChunkIds, ArrayError> {
        let chunks = combinators::split(self.get(src)?, n_chunks)?;
        debug!(%src, chunks = chunks.len(), "split array");

        let mut ids = ChunkIds::with_capacity(chunks.len());
        for chunk in chunks {
            match self.insert(chunk) {
                Ok(id) => ids.push(id),
                Err(err) => {
                    for id in ids {
                        self.destroy(id);
                    }
                    return Err(err);
                }
            }
        }
        Ok(ids)
    }
}

//! Combinators and descriptive statistics over dynarray buffers.
//!
//! [`combinators`] and [`stats`] are pure functions over
//! [`ArrayBuffer`](dynarray_arena::ArrayBuffer)s: they never mutate their
//! inputs and every combinator copies into freshly owned storage.
//! [`Derive`] lifts the combinators onto a
//! [`Registry`](dynarray_arena::Registry), registering each output under
//! its own handle.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod combinators;
pub mod derive;
pub mod stats;

pub use derive::{ChunkIds, Derive};

//! dynarray: growable `f64` arrays with a generational registry.
//!
//! This is the facade crate that re-exports the public API of the
//! dynarray sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use dynarray::prelude::*;
//!
//! let mut reg = Registry::new();
//! let a = reg.create(4).unwrap();
//! for v in [5.0, 2.0, 8.0, 1.0, 9.0] {
//!     reg.append(a, v).unwrap();
//! }
//! assert_eq!(stats::median(reg.get(a).unwrap()), Ok(5.0));
//!
//! let positives = reg.filter(a, |x| x > 4.0).unwrap();
//! assert_eq!(reg.size(positives), Ok(3));
//!
//! assert_eq!(reg.count(), 2);
//! reg.destroy_all();
//! assert!(!reg.is_valid(a));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `dynarray-core` | `ArrayId`, `ArrayError`, tolerance constants |
//! | [`arena`] | `dynarray-arena` | `ArrayBuffer`, `Registry`, `RegistryConfig` |
//! | [`ops`] | `dynarray-ops` | Combinators, statistics, the `Derive` trait |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Handles, errors, and frozen tolerances (`dynarray-core`).
pub use dynarray_core as types;

/// Buffers and the registry that owns them (`dynarray-arena`).
pub use dynarray_arena as arena;

/// Combinators and statistics (`dynarray-ops`).
///
/// [`ops::combinators`] and [`ops::stats`] work on bare buffers;
/// [`ops::Derive`] runs the combinators against a registry.
pub use dynarray_ops as ops;

/// Common imports for typical dynarray usage.
///
/// ```rust
/// use dynarray::prelude::*;
/// ```
pub mod prelude {
    pub use dynarray_arena::{ArrayBuffer, Registry, RegistryConfig};
    pub use dynarray_core::{ArrayError, ArrayId};
    pub use dynarray_ops::{combinators, stats, ChunkIds, Derive};
}

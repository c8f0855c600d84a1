//! Growable `f64` buffers and the registry that owns them.
//!
//! # Architecture
//!
//! ```text
//! Registry (explicit context object, one per caller or test)
//! ├── Slot[] (generation + Option<ArrayBuffer>)
//! ├── free list (slot indices ready for reuse)
//! └── live set (IndexSet<ArrayId>, swap-removed on destroy)
//! ```
//!
//! Every array lives in exactly one slot and is addressed by an
//! [`ArrayId`](dynarray_core::ArrayId). Destroying an array bumps the
//! slot generation, so stale handles are detected in O(1) without a
//! lookup table and can never alias a newer array in the same slot.
//!
//! # Growth policy
//!
//! [`ArrayBuffer`] tracks a logical capacity separate from its length.
//! Appending to a full buffer doubles the capacity, giving amortized
//! O(1) appends. Capacity never shrinks.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod buffer;
pub mod config;
pub mod registry;

pub use buffer::ArrayBuffer;
pub use config::{ConfigError, RegistryConfig};
pub use registry::Registry;

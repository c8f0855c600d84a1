//! Generational array handles.

use std::fmt;

/// Stable handle to an array owned by a `Registry`.
///
/// The `index` names a registry slot; the `generation` is the slot's
/// generation at the time the array was registered. Destroying an array
/// bumps its slot's generation, so every outstanding copy of the handle
/// becomes stale, even after the slot is reused for a new array.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArrayId {
    index: u32,
    generation: u32,
}

impl ArrayId {
    /// Create a handle from its raw parts.
    pub fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    /// Slot index within the owning registry.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Slot generation this handle was issued for.
    pub fn generation(&self) -> u32 {
        self.generation
    }
}

impl fmt::Display for ArrayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.index, self.generation)
    }
}

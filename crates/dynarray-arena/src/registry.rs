//! Generational registry of live arrays.
//!
//! The [`Registry`] owns every array it hands out a handle for. It tracks
//! the live set for leak diagnostics ([`count`](Registry::count)) and
//! bulk teardown ([`destroy_all`](Registry::destroy_all)).
//!
//! The iteration order of [`ids`](Registry::ids) is unspecified: removal
//! swap-removes from the live set, so the order changes as arrays are
//! destroyed. Callers must not depend on it.

use indexmap::IndexSet;
use tracing::{debug, trace, warn};

use dynarray_core::{ArrayError, ArrayId};

use crate::buffer::ArrayBuffer;
use crate::config::{ConfigError, RegistryConfig};

/// A registry slot: the current generation and the array it holds, if any.
#[derive(Debug)]
struct Slot {
    generation: u32,
    buffer: Option<ArrayBuffer>,
}

impl Slot {
    /// Free the slot's storage and invalidate handles issued for it.
    ///
    /// Returns `false` when the generation counter is exhausted; such a
    /// slot is retired for good instead of going back on the free list,
    /// so a handle can never match a newer array.
    fn release(&mut self) -> bool {
        self.buffer = None;
        match self.generation.checked_add(1) {
            Some(next) => {
                self.generation = next;
                true
            }
            None => false,
        }
    }
}

/// Owner of all arrays created through it.
///
/// Every array that has been created and not yet destroyed appears in
/// the live set exactly once. A handle that is not in the live set is
/// invalid: every accessor returns [`ArrayError::Destroyed`] for it and
/// [`destroy`](Self::destroy) ignores it.
#[derive(Debug)]
pub struct Registry {
    slots: Vec<Slot>,
    /// Indices of empty slots available for reuse.
    free_list: Vec<u32>,
    live: IndexSet<ArrayId>,
    config: RegistryConfig,
}

impl Registry {
    /// Create an empty registry with the default configuration.
    pub fn new() -> Self {
        let config = RegistryConfig::new();
        Self {
            slots: Vec::with_capacity(config.initial_slots),
            free_list: Vec::new(),
            live: IndexSet::with_capacity(config.initial_slots),
            config,
        }
    }

    /// Create an empty registry with a validated configuration.
    ///
    /// The `initial_slots` reservation is fallible: an allocation the
    /// system refuses is reported as [`ConfigError::ReservationFailed`].
    pub fn with_config(config: RegistryConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let reservation_failed = ConfigError::ReservationFailed {
            initial_slots: config.initial_slots,
        };
        let mut slots = Vec::new();
        slots
            .try_reserve_exact(config.initial_slots)
            .map_err(|_| reservation_failed.clone())?;
        let mut live = IndexSet::new();
        live.try_reserve_exact(config.initial_slots)
            .map_err(|_| reservation_failed)?;
        Ok(Self {
            slots,
            free_list: Vec::new(),
            live,
            config,
        })
    }

    /// Construct a new empty array and register it.
    ///
    /// The array's capacity is `max(initial_capacity, 1)`.
    pub fn create(&mut self, initial_capacity: usize) -> Result<ArrayId, ArrayError> {
        // Fail before allocating the buffer; `insert` checks again.
        self.ensure_room()?;
        let buffer = ArrayBuffer::with_capacity(initial_capacity)?;
        self.insert(buffer)
    }

    /// Take ownership of `buffer` and register it under a fresh handle.
    pub fn insert(&mut self, buffer: ArrayBuffer) -> Result<ArrayId, ArrayError> {
        self.ensure_room()?;
        let id = match self.free_list.pop() {
            Some(index) => {
                let slot = &mut self.slots[index as usize];
                slot.buffer = Some(buffer);
                ArrayId::new(index, slot.generation)
            }
            None => {
                let index = u32::try_from(self.slots.len()).map_err(|_| {
                    ArrayError::RegistryFull {
                        limit: self.config.max_live,
                    }
                })?;
                self.slots.push(Slot {
                    generation: 0,
                    buffer: Some(buffer),
                });
                ArrayId::new(index, 0)
            }
        };
        self.live.insert(id);
        trace!(%id, live = self.live.len(), "registered array");
        Ok(id)
    }

    /// Free an array's storage and invalidate its handle.
    ///
    /// Returns `false`, doing nothing, if the handle is already stale.
    pub fn destroy(&mut self, id: ArrayId) -> bool {
        if !self.live.swap_remove(&id) {
            return false;
        }
        if self.slots[id.index() as usize].release() {
            self.free_list.push(id.index());
        }
        trace!(%id, live = self.live.len(), "destroyed array");
        true
    }

    /// Free every live array and clear the live set.
    ///
    /// All outstanding handles become invalid; destroying them later is a
    /// no-op. Returns the number of arrays freed.
    pub fn destroy_all(&mut self) -> usize {
        let freed = self.live.len();
        for id in self.live.drain(..) {
            if self.slots[id.index() as usize].release() {
                self.free_list.push(id.index());
            }
        }
        debug!(freed, "destroyed all arrays");
        freed
    }

    /// Whether `id` refers to a live array.
    pub fn is_valid(&self, id: ArrayId) -> bool {
        self.live.contains(&id)
    }

    /// Number of live arrays.
    pub fn count(&self) -> usize {
        self.live.len()
    }

    /// Handles of all live arrays, in unspecified order.
    pub fn ids(&self) -> impl Iterator<Item = ArrayId> + '_ {
        self.live.iter().copied()
    }

    /// Borrow a live array.
    pub fn get(&self, id: ArrayId) -> Result<&ArrayBuffer, ArrayError> {
        self.slots
            .get(id.index() as usize)
            .filter(|slot| slot.generation == id.generation())
            .and_then(|slot| slot.buffer.as_ref())
            .ok_or(ArrayError::Destroyed { id })
    }

    /// Mutably borrow a live array.
    pub fn get_mut(&mut self, id: ArrayId) -> Result<&mut ArrayBuffer, ArrayError> {
        self.slots
            .get_mut(id.index() as usize)
            .filter(|slot| slot.generation == id.generation())
            .and_then(|slot| slot.buffer.as_mut())
            .ok_or(ArrayError::Destroyed { id })
    }

    /// Append `value` to the array behind `id`.
    pub fn append(&mut self, id: ArrayId, value: f64) -> Result<(), ArrayError> {
        self.get_mut(id)?.push(value)
    }

    /// Read element `index` of the array behind `id`.
    pub fn value(&self, id: ArrayId, index: usize) -> Result<f64, ArrayError> {
        self.get(id)?.get(index)
    }

    /// Overwrite element `index` of the array behind `id`.
    pub fn set(&mut self, id: ArrayId, index: usize, value: f64) -> Result<(), ArrayError> {
        self.get_mut(id)?.set(index, value)
    }

    /// Logical length of the array behind `id`.
    pub fn size(&self, id: ArrayId) -> Result<usize, ArrayError> {
        Ok(self.get(id)?.len())
    }

    /// Bytes reserved by all live arrays.
    pub fn memory_bytes(&self) -> usize {
        self.slots
            .iter()
            .filter_map(|slot| slot.buffer.as_ref())
            .map(ArrayBuffer::memory_bytes)
            .sum()
    }

    /// The configuration this registry was built with.
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    fn ensure_room(&self) -> Result<(), ArrayError> {
        if self.live.len() >= self.config.max_live {
            return Err(ArrayError::RegistryFull {
                limit: self.config.max_live,
            });
        }
        Ok(())
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Registry {
    fn drop(&mut self) {
        if !self.live.is_empty() {
            warn!(live = self.live.len(), "registry dropped with live arrays");
        }
    }
}

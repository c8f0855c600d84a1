//! Error types shared by every dynarray crate.

use std::error::Error;
use std::fmt;

use crate::ArrayId;

/// Errors that can occur while creating, accessing, or reducing arrays.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// Backing storage could not be allocated or grown.
    AllocationFailed {
        /// Number of `f64` slots requested.
        requested: usize,
    },
    /// Checked access past the logical length of an array.
    OutOfBounds {
        /// The offending index.
        index: usize,
        /// Logical length of the array at the time of access.
        len: usize,
    },
    /// A reducer that needs at least one element was called on an empty array.
    Empty {
        /// Name of the reducer.
        op: &'static str,
    },
    /// The handle refers to an array that has been destroyed.
    Destroyed {
        /// The stale handle.
        id: ArrayId,
    },
    /// The registry already holds its configured maximum of live arrays.
    RegistryFull {
        /// The configured live-array limit.
        limit: usize,
    },
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocationFailed { requested } => {
                write!(f, "allocation failed: requested {requested} slots")
            }
            Self::OutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for length {len}")
            }
            Self::Empty { op } => write!(f, "{op} requires a non-empty array"),
            Self::Destroyed { id } => write!(f, "array {id} has been destroyed"),
            Self::RegistryFull { limit } => {
                write!(f, "registry full: {limit} live arrays")
            }
        }
    }
}

impl Error for ArrayError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            ArrayError::OutOfBounds { index: 5, len: 3 }.to_string(),
            "index 5 out of bounds for length 3"
        );
        assert_eq!(
            ArrayError::Empty { op: "median" }.to_string(),
            "median requires a non-empty array"
        );
        assert_eq!(
            ArrayError::Destroyed {
                id: ArrayId::new(1, 2)
            }
            .to_string(),
            "array 1@2 has been destroyed"
        );
    }
}

//! Seed values accepted by the engine.
//!
//! A seed is either a single 32-bit integer or an ordered list of them. The
//! list form lets callers reproduce engine states that a single integer
//! cannot reach.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Seed applied to an [`Engine`](crate::Engine).
///
/// Seeds serialize untagged, so `42` and `[1, 2, 3]` are both valid JSON
/// representations.
///
/// # Example
///
/// ```
/// use synthetic_data::Seed;
///
/// assert_eq!(Seed::from(42_u32), Seed::Single(42));
/// assert_eq!(Seed::from(vec![1_u32, 2, 3]), Seed::Sequence(vec![1, 2, 3]));
/// assert_eq!(Seed::from([1_u32, 2, 3]).to_string(), "[1, 2, 3]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Seed {
    /// A single 32-bit seed value.
    Single(u32),
    /// An ordered list of seed values. Must not be empty when applied.
    Sequence(Vec<u32>),
}

impl From<u32> for Seed {
    fn from(value: u32) -> Self {
        Self::Single(value)
    }
}

impl From<Vec<u32>> for Seed {
    fn from(values: Vec<u32>) -> Self {
        Self::Sequence(values)
    }
}

impl From<&[u32]> for Seed {
    fn from(values: &[u32]) -> Self {
        Self::Sequence(values.to_vec())
    }
}

impl<const N: usize> From<[u32; N]> for Seed {
    fn from(values: [u32; N]) -> Self {
        Self::Sequence(values.to_vec())
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(value) => write!(f, "{value}"),
            Self::Sequence(values) => {
                f.write_str("[")?;
                for (position, value) in values.iter().enumerate() {
                    if position > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{value}")?;
                }
                f.write_str("]")
            }
        }
    }
}

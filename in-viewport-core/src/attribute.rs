//! Attribute names and value vocabulary maintained on watched elements.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// Names of the two `data-*` attributes written onto each watched element.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AttributeNames {
    /// Records which side of the viewport the element most recently entered
    /// from. Only present while the element is intersecting.
    pub direction: SmolStr,
    /// Records the element's coarse location relative to the viewport.
    pub position: SmolStr,
}

impl Default for AttributeNames {
    fn default() -> Self {
        Self {
            direction: SmolStr::new_static("data-in-viewport-direction"),
            position: SmolStr::new_static("data-in-viewport-position"),
        }
    }
}

/// Tokens written into the position attribute, and composed into the
/// direction attribute as `from-<token>`.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vocabulary {
    /// The element overlaps the viewport.
    pub intersecting: SmolStr,
    /// The element sits entirely above the viewport.
    pub above: SmolStr,
    /// The element sits entirely below the viewport.
    pub below: SmolStr,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            intersecting: SmolStr::new_static("intersecting"),
            above: SmolStr::new_static("above"),
            below: SmolStr::new_static("below"),
        }
    }
}

/// An element's current attribute values, read before any write for an
/// observation. [`None`] means the attribute is absent.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct AttributeSnapshot {
    pub direction: Option<SmolStr>,
    pub position: Option<SmolStr>,
}

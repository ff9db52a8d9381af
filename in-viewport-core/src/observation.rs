//! The distilled view of one intersection notification.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What the derivation consumes from a single firing for a single target.
///
/// The platform entry carries much more (intersection ratio, timestamps, the
/// root bounds); only these two fields drive the attributes.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Observation {
    /// Whether the configured threshold of the target is inside the root.
    pub is_intersecting: bool,
    /// Vertical offset of the target's bounding rectangle relative to the
    /// viewport, in CSS pixels. Negative when the target has scrolled past
    /// the top edge.
    pub top: f64,
}

//! Derivation of the next attribute values from one observation.

use smol_str::{format_smolstr, SmolStr};
use tracing::warn;

use crate::attribute::{AttributeSnapshot, Vocabulary};
use crate::observation::Observation;

/// Pending write for the direction attribute.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DirectionUpdate {
    /// Remove the attribute. The direction is only ever present while the
    /// element is intersecting.
    Clear,
    /// Set the attribute to a `from-<token>` value.
    Set(SmolStr),
}

/// Pending write for the position attribute.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PositionUpdate {
    Set(SmolStr),
    /// The bounding rectangle sat exactly on the viewport edge while not
    /// intersecting. The attribute is still written, but its value is left
    /// unset rather than guessing a side.
    Indeterminate,
}

/// Both attribute writes derived from one observation, applied direction
/// first.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Update {
    pub direction: DirectionUpdate,
    pub position: PositionUpdate,
}

/// Derives the attribute writes for one target from one observation.
///
/// The snapshot must hold the attribute values as they were *before* this
/// observation; the direction is seeded from the position recorded by the
/// previous firing.
pub fn derive(
    snapshot: &AttributeSnapshot,
    observation: &Observation,
    vocabulary: &Vocabulary,
) -> Update {
    let direction = if observation.is_intersecting {
        match &snapshot.position {
            Some(position) if *position != vocabulary.intersecting => {
                DirectionUpdate::Set(format_smolstr!("from-{position}"))
            },
            // Re-fires while already intersecting (multiple thresholds) keep
            // the recorded entry side; the very first firing has no prior
            // position and defaults to entering from below.
            _ => DirectionUpdate::Set(snapshot.direction.clone().unwrap_or_else(|| {
                format_smolstr!("from-{}", vocabulary.below)
            })),
        }
    } else {
        DirectionUpdate::Clear
    };

    let position = if observation.is_intersecting {
        PositionUpdate::Set(vocabulary.intersecting.clone())
    } else if observation.top < 0. {
        PositionUpdate::Set(vocabulary.above.clone())
    } else if observation.top > 0. {
        PositionUpdate::Set(vocabulary.below.clone())
    } else {
        warn!("bounding rectangle top is exactly zero, position value left unset");
        PositionUpdate::Indeterminate
    };

    Update { direction, position }
}

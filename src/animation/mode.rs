use std::f64::consts::TAU;

use crate::animation::schedule::{
    FLIP_CYCLE_SECS, NOMINAL_TICK_HZ, ROTATION_STEP_RAD, WAVE_CYCLE_SECS,
};

/// Active animation. Modes are mutually exclusive; selecting one replaces the previous.
///
/// Serialized as the short names used by saved creations (`"cw"`, `"wave-ccw"`, ...). The
/// "no animation" state is modelled as `Option<AnimationMode>::None` at the serde boundary and
/// as [`AnimationMode::None`] inside the engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum AnimationMode {
    /// Static front face.
    #[default]
    #[serde(skip)]
    None,
    /// Continuous clockwise rotation.
    #[serde(rename = "cw")]
    RotateCw,
    /// Continuous counter-clockwise rotation.
    #[serde(rename = "ccw")]
    RotateCcw,
    /// Wedge-by-wedge flip cascade starting at wedge 0.
    #[serde(rename = "wave")]
    WaveForward,
    /// Wedge-by-wedge flip cascade starting at wedge 7.
    #[serde(rename = "wave-ccw")]
    WaveReverse,
    /// Whole-shape coin flip.
    #[serde(rename = "flip")]
    Flip,
}

impl AnimationMode {
    /// Signed per-tick rotation step for the rotation modes, `None` otherwise.
    pub fn rotation_step(self) -> Option<f64> {
        match self {
            Self::RotateCw => Some(ROTATION_STEP_RAD),
            Self::RotateCcw => Some(-ROTATION_STEP_RAD),
            _ => None,
        }
    }

    /// Natural loop length in seconds, used to sample exports.
    ///
    /// Rotation has no time-based cycle; one full turn is expressed at the nominal tick rate.
    pub fn cycle_secs(self) -> Option<f64> {
        match self {
            Self::None => None,
            Self::RotateCw | Self::RotateCcw => Some(TAU / (ROTATION_STEP_RAD * NOMINAL_TICK_HZ)),
            Self::WaveForward | Self::WaveReverse => Some(WAVE_CYCLE_SECS),
            Self::Flip => Some(FLIP_CYCLE_SECS),
        }
    }

    /// Convert from the nullable boundary representation.
    pub fn from_option(v: Option<Self>) -> Self {
        v.unwrap_or(Self::None)
    }

    /// Convert to the nullable boundary representation.
    pub fn to_option(self) -> Option<Self> {
        match self {
            Self::None => None,
            other => Some(other),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/mode.rs"]
mod tests;

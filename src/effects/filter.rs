use crate::effects::neon::{NeonParams, neon};
use crate::foundation::error::{PizzaError, PizzaResult};
use crate::foundation::math::{clamp_u8, luminance};
use crate::render::backend::FrameRGBA;

/// Whole-frame filter. At most one is active.
///
/// Serialized as `"mono"`, `"neon"` or `"negative"`; no filter is `null` at the boundary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    /// Leave the frame untouched.
    #[default]
    #[serde(skip)]
    None,
    /// Luminance grayscale.
    Mono,
    /// Edge-lit glow colored by the zone map.
    Neon,
    /// Color inversion.
    Negative,
}

impl FilterMode {
    /// Whether this filter needs a zone map rendered alongside the frame.
    pub fn needs_zone_map(self) -> bool {
        self == Self::Neon
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

/// Replace each pixel's color with its rounded luminance. Alpha is kept.
pub fn monochrome(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let y = clamp_u8(luminance(px[0], px[1], px[2]));
        px[..3].fill(y);
    }
}

/// Invert each color channel. Alpha is kept.
pub fn invert(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        for c in &mut px[..3] {
            *c = 255 - *c;
        }
    }
}

/// Apply `mode` to `frame`. Neon requires the matching zone map.
#[tracing::instrument(level = "debug", skip(frame, zone, params), fields(w = frame.width, h = frame.height))]
pub fn apply_filter(
    mode: FilterMode,
    frame: &mut FrameRGBA,
    zone: Option<&FrameRGBA>,
    params: &NeonParams,
) -> PizzaResult<()> {
    match mode {
        FilterMode::None => Ok(()),
        FilterMode::Mono => {
            monochrome(&mut frame.data);
            Ok(())
        }
        FilterMode::Negative => {
            invert(&mut frame.data);
            Ok(())
        }
        FilterMode::Neon => {
            let zone = zone.ok_or_else(|| PizzaError::render("neon filter needs a zone map"))?;
            neon(frame, zone, params)
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/filter.rs"]
mod tests;

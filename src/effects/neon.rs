//! Edge-lit "neon" look.
//!
//! Edges are found on the styled frame's luminance and colored from a zone map that was
//! rendered with the same pose, so each outline glows in the color of the region it bounds.

use crate::effects::blur::blur_rgba8_premul;
use crate::effects::composite::{BlendMode, blend_in_place};
use crate::foundation::error::{PizzaError, PizzaResult};
use crate::foundation::math::{
    clamp_u8, luminance, premultiply_rgba8_in_place, unpremultiply_rgba8_in_place,
};
use crate::render::backend::FrameRGBA;

/// Largest accepted bloom blur radius, in pixels.
pub const MAX_BLOOM_RADIUS: u32 = 64;
/// Largest accepted local glow radius, in pixels.
pub const MAX_GLOW_RADIUS: u32 = 16;

/// Tunables for the neon pipeline.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct NeonParams {
    /// Color where there is no edge, and neon color outside any zone.
    pub background: [u8; 3],
    /// Normalized edge strength at which local glow kicks in.
    pub edge_threshold: f32,
    /// Half-size of the local glow box.
    pub glow_radius: u32,
    /// Weight of the local glow average.
    pub glow_strength: f32,
    /// Gaussian sigma of the bloom layer, in pixels.
    pub bloom_sigma: f32,
    /// Gaussian radius of the bloom layer, in pixels.
    pub bloom_radius: u32,
    /// Opacity of the blurred screen-blended bloom.
    pub bloom_screen_opacity: f32,
    /// Opacity of the unblurred additive bloom.
    pub bloom_lighter_opacity: f32,
}

impl Default for NeonParams {
    fn default() -> Self {
        Self {
            background: [8, 5, 20],
            edge_threshold: 0.15,
            glow_radius: 3,
            glow_strength: 0.18,
            bloom_sigma: 6.0,
            bloom_radius: 18,
            bloom_screen_opacity: 0.45,
            bloom_lighter_opacity: 0.3,
        }
    }
}

impl NeonParams {
    /// Reject values that would fail or blow up at render time.
    pub fn validate(&self) -> PizzaResult<()> {
        if !self.bloom_sigma.is_finite() || self.bloom_sigma <= 0.0 {
            return Err(PizzaError::validation(format!(
                "neon bloom_sigma must be finite and > 0, got {}",
                self.bloom_sigma
            )));
        }
        if self.bloom_radius > MAX_BLOOM_RADIUS {
            return Err(PizzaError::validation(format!(
                "neon bloom_radius must be <= {MAX_BLOOM_RADIUS}, got {}",
                self.bloom_radius
            )));
        }
        if self.glow_radius > MAX_GLOW_RADIUS {
            return Err(PizzaError::validation(format!(
                "neon glow_radius must be <= {MAX_GLOW_RADIUS}, got {}",
                self.glow_radius
            )));
        }
        for (name, v) in [
            ("edge_threshold", self.edge_threshold),
            ("glow_strength", self.glow_strength),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(PizzaError::validation(format!(
                    "neon {name} must be finite and >= 0, got {v}"
                )));
            }
        }
        for (name, v) in [
            ("bloom_screen_opacity", self.bloom_screen_opacity),
            ("bloom_lighter_opacity", self.bloom_lighter_opacity),
        ] {
            if !(0.0..=1.0).contains(&v) {
                return Err(PizzaError::validation(format!(
                    "neon {name} must be in [0, 1], got {v}"
                )));
            }
        }
        Ok(())
    }
}

/// Per-pixel luminance of a straight RGBA8 buffer.
pub fn luminance_map(rgba: &[u8]) -> Vec<f32> {
    rgba.chunks_exact(4)
        .map(|px| luminance(px[0], px[1], px[2]))
        .collect()
}

/// Sobel gradient magnitude of a `width` x `height` scalar field. Border pixels are 0.
pub fn sobel_magnitude(lum: &[f32], width: usize, height: usize) -> Vec<f32> {
    let mut out = vec![0.0f32; lum.len()];
    if width < 3 || height < 3 {
        return out;
    }
    let at = |x: usize, y: usize| lum[y * width + x];
    for y in 1..height - 1 {
        for x in 1..width - 1 {
            // Each side is summed before the difference, so flat input gives exactly 0.
            let right = at(x + 1, y - 1) + 2.0 * at(x + 1, y) + at(x + 1, y + 1);
            let left = at(x - 1, y - 1) + 2.0 * at(x - 1, y) + at(x - 1, y + 1);
            let below = at(x - 1, y + 1) + 2.0 * at(x, y + 1) + at(x + 1, y + 1);
            let above = at(x - 1, y - 1) + 2.0 * at(x, y - 1) + at(x + 1, y - 1);
            let gx = right - left;
            let gy = below - above;
            out[y * width + x] = (gx * gx + gy * gy).sqrt();
        }
    }
    out
}

/// Scale `mag` in place so its maximum becomes 1. An all-zero field stays zero.
pub fn normalize(mag: &mut [f32]) {
    let max = mag.iter().copied().fold(0.0f32, f32::max);
    let k = if max > 0.0 { 1.0 / max } else { 0.0 };
    for m in mag {
        *m *= k;
    }
}

/// Apply the neon look to `frame` using `zone` for edge colors.
pub fn neon(frame: &mut FrameRGBA, zone: &FrameRGBA, params: &NeonParams) -> PizzaResult<()> {
    if frame.width != zone.width || frame.height != zone.height {
        return Err(PizzaError::render(format!(
            "zone map is {}x{}, frame is {}x{}",
            zone.width, zone.height, frame.width, frame.height
        )));
    }
    let (w, h) = (frame.width as usize, frame.height as usize);

    let mut edges = sobel_magnitude(&luminance_map(&frame.data), w, h);
    normalize(&mut edges);

    colorize(&mut frame.data, &zone.data, &edges, params);
    glow(&mut frame.data, &edges, w, h, params);
    bloom(frame, params)
}

fn colorize(out: &mut [u8], zone: &[u8], edges: &[f32], params: &NeonParams) {
    let bg = params.background.map(f32::from);
    for ((px, z), &e) in out
        .chunks_exact_mut(4)
        .zip(zone.chunks_exact(4))
        .zip(edges)
    {
        let neon = if z[3] != 0 {
            [f32::from(z[0]), f32::from(z[1]), f32::from(z[2])]
        } else {
            bg
        };
        let e2 = e * e;
        for c in 0..3 {
            px[c] = clamp_u8(bg[c] + e2 * neon[c]);
        }
    }
}

/// Local glow: strong edges pick up a box average of what has been written so far.
///
/// Runs in place and in raster order, so earlier glow feeds into later pixels.
fn glow(out: &mut [u8], edges: &[f32], w: usize, h: usize, params: &NeonParams) {
    let r = params.glow_radius as usize;
    if w <= 2 * r || h <= 2 * r {
        return;
    }
    let taps = ((2 * r + 1) * (2 * r + 1)) as f32;
    for y in r..h - r {
        for x in r..w - r {
            let i = y * w + x;
            if edges[i] < params.edge_threshold {
                continue;
            }
            let mut sum = [0.0f32; 3];
            for yy in y - r..=y + r {
                for xx in x - r..=x + r {
                    let j = (yy * w + xx) * 4;
                    for c in 0..3 {
                        sum[c] += f32::from(out[j + c]);
                    }
                }
            }
            for c in 0..3 {
                let v = f32::from(out[i * 4 + c]) + params.glow_strength * sum[c] / taps;
                out[i * 4 + c] = clamp_u8(v);
            }
        }
    }
}

fn bloom(frame: &mut FrameRGBA, params: &NeonParams) -> PizzaResult<()> {
    let mut base = frame.data.clone();
    premultiply_rgba8_in_place(&mut base);
    let snapshot = base.clone();

    let blurred = blur_rgba8_premul(
        &snapshot,
        frame.width,
        frame.height,
        params.bloom_radius,
        params.bloom_sigma,
    )?;
    blend_in_place(
        &mut base,
        &blurred,
        BlendMode::Screen,
        params.bloom_screen_opacity,
    )?;
    blend_in_place(
        &mut base,
        &snapshot,
        BlendMode::Lighter,
        params.bloom_lighter_opacity,
    )?;

    unpremultiply_rgba8_in_place(&mut base);
    frame.data = base;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/effects/neon.rs"]
mod tests;

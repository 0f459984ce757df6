use crate::foundation::error::{PizzaError, PizzaResult};
use crate::foundation::math::mul_div255_u16;

/// One premultiplied RGBA8 pixel.
pub type PremulRgba8 = [u8; 4];

/// Separable blend used to lay a bloom layer back over the frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlendMode {
    /// `s + d - s*d`, applied to color and alpha.
    Screen,
    /// Additive, saturating at 255.
    Lighter,
}

fn opacity_u16(opacity: f32) -> u16 {
    ((opacity.clamp(0.0, 1.0) * 255.0).round() as i32).clamp(0, 255) as u16
}

/// Blend `src` scaled by `opacity` onto `dst`.
pub fn blend(dst: PremulRgba8, src: PremulRgba8, mode: BlendMode, opacity: f32) -> PremulRgba8 {
    let op = opacity_u16(opacity);
    if op == 0 || src == [0; 4] {
        return dst;
    }

    let mut out = [0u8; 4];
    for i in 0..4 {
        let s = mul_div255_u16(u16::from(src[i]), op);
        let d = u16::from(dst[i]);
        out[i] = match mode {
            BlendMode::Screen => (s + d - mul_div255_u16(s, d)).min(255) as u8,
            BlendMode::Lighter => (s + d).min(255) as u8,
        };
    }
    out
}

/// Blend every pixel of `src` onto `dst`. Both buffers are premultiplied RGBA8.
pub fn blend_in_place(dst: &mut [u8], src: &[u8], mode: BlendMode, opacity: f32) -> PizzaResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(PizzaError::render(format!(
            "blend expects equal-length rgba8 buffers, got {} and {}",
            dst.len(),
            src.len()
        )));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let out = blend([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]], mode, opacity);
        d.copy_from_slice(&out);
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/effects/composite.rs"]
mod tests;

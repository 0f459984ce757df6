use crate::foundation::error::{PizzaError, PizzaResult};

const Q16_ONE: u32 = 1 << 16;

/// Normalized 1-D Gaussian kernel in Q16 fixed point. Weights sum to exactly `1 << 16`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GaussianKernel {
    weights: Vec<u32>,
}

impl GaussianKernel {
    /// Build a kernel spanning `2 * radius + 1` taps.
    pub fn new(radius: u32, sigma: f32) -> PizzaResult<Self> {
        if radius == 0 {
            return Ok(Self {
                weights: vec![Q16_ONE],
            });
        }
        if !sigma.is_finite() || sigma <= 0.0 {
            return Err(PizzaError::validation(format!(
                "blur sigma must be finite and > 0, got {sigma}"
            )));
        }

        let r = i64::from(radius);
        let two_sigma_sq = 2.0 * f64::from(sigma) * f64::from(sigma);
        let raw: Vec<f64> = (-r..=r)
            .map(|i| {
                let x = i as f64;
                (-x * x / two_sigma_sq).exp()
            })
            .collect();
        let sum: f64 = raw.iter().sum();
        if sum <= 0.0 || !sum.is_finite() {
            return Err(PizzaError::render("gaussian kernel does not normalize"));
        }

        let mut weights: Vec<u32> = raw
            .iter()
            .map(|w| ((w / sum) * f64::from(Q16_ONE)).round().clamp(0.0, f64::from(Q16_ONE)) as u32)
            .collect();
        // Push rounding drift into the center tap so the kernel preserves flat regions.
        let total: i64 = weights.iter().map(|&w| i64::from(w)).sum();
        let mid = weights.len() / 2;
        let fixed = (i64::from(weights[mid]) + i64::from(Q16_ONE) - total).clamp(0, i64::from(Q16_ONE));
        weights[mid] = fixed as u32;

        Ok(Self { weights })
    }

    /// Taps on each side of the center.
    pub fn radius(&self) -> usize {
        self.weights.len() / 2
    }

    /// Q16 weights, center tap in the middle.
    pub fn weights(&self) -> &[u32] {
        &self.weights
    }
}

/// Separable Gaussian blur of a premultiplied RGBA8 buffer. Edges clamp to the border pixel.
pub fn blur_rgba8_premul(
    src: &[u8],
    width: u32,
    height: u32,
    radius: u32,
    sigma: f32,
) -> PizzaResult<Vec<u8>> {
    let expected = (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(4))
        .ok_or_else(|| PizzaError::render("blur buffer size overflow"))?;
    if src.len() != expected {
        return Err(PizzaError::render(format!(
            "blur expects {expected} bytes for {width}x{height}, got {}",
            src.len()
        )));
    }
    if radius == 0 || expected == 0 {
        return Ok(src.to_vec());
    }

    let kernel = GaussianKernel::new(radius, sigma)?;
    let (w, h) = (width as usize, height as usize);
    let mut rows = vec![0u8; expected];
    let mut out = vec![0u8; expected];
    convolve(src, &mut rows, w, h, &kernel, Axis::Horizontal);
    convolve(&rows, &mut out, w, h, &kernel, Axis::Vertical);
    Ok(out)
}

#[derive(Clone, Copy)]
enum Axis {
    Horizontal,
    Vertical,
}

fn convolve(src: &[u8], dst: &mut [u8], w: usize, h: usize, kernel: &GaussianKernel, axis: Axis) {
    let r = kernel.radius() as isize;
    let (w_i, h_i) = (w as isize, h as isize);
    for y in 0..h_i {
        for x in 0..w_i {
            let mut acc = [0u64; 4];
            for (tap, &weight) in kernel.weights().iter().enumerate() {
                let d = tap as isize - r;
                let (sx, sy) = match axis {
                    Axis::Horizontal => ((x + d).clamp(0, w_i - 1), y),
                    Axis::Vertical => (x, (y + d).clamp(0, h_i - 1)),
                };
                let at = (sy * w_i + sx) as usize * 4;
                for (c, slot) in acc.iter_mut().enumerate() {
                    *slot += u64::from(weight) * u64::from(src[at + c]);
                }
            }
            let at = (y * w_i + x) as usize * 4;
            for (c, v) in acc.into_iter().enumerate() {
                dst[at + c] = ((v + 0x8000) >> 16).min(255) as u8;
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/blur.rs"]
mod tests;

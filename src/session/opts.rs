use std::path::Path;

use crate::effects::neon::NeonParams;
use crate::foundation::core::Canvas;
use crate::foundation::error::{PizzaError, PizzaResult};
use crate::render::cpu::RenderSettings;

/// Environment variable that overrides the canvas to a square of this many pixels.
pub const CANVAS_PX_ENV: &str = "PIZZAIOLO_CANVAS_PX";

/// Configuration for a [`FrameDriver`](crate::session::driver::FrameDriver).
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DriverOpts {
    /// Output size.
    pub canvas: Canvas,
    /// Rasterizer settings for the styled frame.
    pub render: RenderSettings,
    /// Neon filter tunables.
    pub neon: NeonParams,
}

impl DriverOpts {
    /// Load options from a JSON file, then apply environment overrides.
    pub fn from_path(path: impl AsRef<Path>) -> PizzaResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| PizzaError::validation(format!("read '{}': {e}", path.display())))?;
        let opts: Self = serde_json::from_str(&text)
            .map_err(|e| PizzaError::serde(format!("parse '{}': {e}", path.display())))?;
        opts.with_env_overrides()
    }

    /// Defaults plus environment overrides.
    pub fn from_env() -> PizzaResult<Self> {
        Self::default().with_env_overrides()
    }

    /// Apply `PIZZAIOLO_CANVAS_PX` if it is set to a positive integer.
    pub fn with_env_overrides(mut self) -> PizzaResult<Self> {
        if let Some(side) = std::env::var(CANVAS_PX_ENV)
            .ok()
            .and_then(|v| v.trim().parse::<u32>().ok())
            .filter(|&n| n > 0)
        {
            self.canvas = Canvas::square(side)?;
        }
        self.validate()?;
        Ok(self)
    }

    /// Check the canvas fits the rasterizer and the neon tunables are usable.
    pub fn validate(&self) -> PizzaResult<()> {
        Canvas::new(self.canvas.width, self.canvas.height)?;
        self.neon.validate()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/opts.rs"]
mod tests;

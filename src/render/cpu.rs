use crate::foundation::core::{Affine, BezPath, Canvas, Rgba8};
use crate::foundation::error::{PizzaError, PizzaResult};
use crate::foundation::math::unpremultiply_rgba8_in_place;
use crate::render::backend::FrameRGBA;
use crate::render::painter::{DisplayList, DrawOp};

/// Backend-agnostic raster settings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RenderSettings {
    /// If set, the target is cleared to this straight RGBA8 color before drawing; otherwise it
    /// starts fully transparent.
    #[serde(default)]
    pub clear_rgba: Option<[u8; 4]>,
}

/// CPU raster backend powered by `vello_cpu`.
///
/// The render context and target pixmap are reused across frames of the same size, so a
/// long-running driver does not reallocate per tick.
pub struct CpuBackend {
    settings: RenderSettings,
    ctx: Option<vello_cpu::RenderContext>,
    pixmap: Option<vello_cpu::Pixmap>,
}

impl CpuBackend {
    /// Create a backend with the given settings.
    pub fn new(settings: RenderSettings) -> Self {
        Self {
            settings,
            ctx: None,
            pixmap: None,
        }
    }

    /// Settings this backend was created with.
    pub fn settings(&self) -> RenderSettings {
        self.settings
    }

    /// Rasterize a display list into a straight-alpha frame of `canvas` size.
    pub fn render(&mut self, list: &DisplayList, canvas: Canvas) -> PizzaResult<FrameRGBA> {
        let width: u16 = canvas
            .width
            .try_into()
            .map_err(|_| PizzaError::render("canvas width exceeds u16"))?;
        let height: u16 = canvas
            .height
            .try_into()
            .map_err(|_| PizzaError::render("canvas height exceeds u16"))?;
        if width == 0 || height == 0 {
            return Err(PizzaError::render("canvas dimensions must be > 0"));
        }

        let mut ctx = match self.ctx.take() {
            Some(ctx) if ctx.width() == width && ctx.height() == height => ctx,
            _ => vello_cpu::RenderContext::new(width, height),
        };
        let mut pixmap = match self.pixmap.take() {
            Some(p) if p.width() == width && p.height() == height => p,
            _ => vello_cpu::Pixmap::new(width, height),
        };
        ctx.reset();
        pixmap.data_as_u8_slice_mut().fill(0);

        let res = self.record(&mut ctx, list, canvas);
        if res.is_ok() {
            ctx.flush();
            ctx.render_to_pixmap(&mut pixmap);
        }

        let mut data = pixmap.data_as_u8_slice().to_vec();
        self.ctx = Some(ctx);
        self.pixmap = Some(pixmap);
        res?;

        unpremultiply_rgba8_in_place(&mut data);
        FrameRGBA::from_straight(canvas.width, canvas.height, data)
    }

    fn record(
        &self,
        ctx: &mut vello_cpu::RenderContext,
        list: &DisplayList,
        canvas: Canvas,
    ) -> PizzaResult<()> {
        if let Some([r, g, b, a]) = self.settings.clear_rgba {
            ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
            ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                0.0,
                0.0,
                f64::from(canvas.width),
                f64::from(canvas.height),
            ));
        }

        let mut depth = 0usize;
        for op in list.ops() {
            match op {
                DrawOp::Fill {
                    path,
                    color,
                    transform,
                } => {
                    ctx.set_transform(affine_to_cpu(*transform));
                    ctx.set_paint(color_to_cpu(*color));
                    ctx.fill_path(&bezpath_to_cpu(path));
                }
                DrawOp::Stroke {
                    path,
                    color,
                    width,
                    transform,
                } => {
                    ctx.set_transform(affine_to_cpu(*transform));
                    ctx.set_paint(color_to_cpu(*color));
                    ctx.set_stroke(
                        vello_cpu::kurbo::Stroke::new(*width)
                            .with_caps(vello_cpu::kurbo::Cap::Round)
                            .with_join(vello_cpu::kurbo::Join::Round),
                    );
                    ctx.stroke_path(&bezpath_to_cpu(path));
                }
                DrawOp::PushClip { path, transform } => {
                    ctx.set_transform(affine_to_cpu(*transform));
                    ctx.push_clip_layer(&bezpath_to_cpu(path));
                    depth += 1;
                }
                DrawOp::PopClip => {
                    if depth == 0 {
                        return Err(PizzaError::render("clip stack underflow in display list"));
                    }
                    ctx.pop_layer();
                    depth -= 1;
                }
            }
        }
        if depth != 0 {
            return Err(PizzaError::render("unbalanced clip stack in display list"));
        }
        Ok(())
    }
}

fn color_to_cpu(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::LineTo(p) => out.line_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::QuadTo(p1, p2) => out.quad_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
            ),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
                vello_cpu::kurbo::Point::new(p3.x, p3.y),
            ),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;

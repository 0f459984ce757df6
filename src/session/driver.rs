use std::f64::consts::TAU;

use crate::animation::mode::AnimationMode;
use crate::animation::schedule::{NOMINAL_TICK_HZ, flip_angle, wave_offsets};
use crate::compose::face::{FaceLayout, FaceStyle, face_layout};
use crate::compose::geometry::ShapeGeometry;
use crate::compose::transform::{Pose, compose_pose};
use crate::decor::registry::DecorationId;
use crate::effects::filter::{FilterMode, apply_filter};
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::Canvas;
use crate::foundation::error::{PizzaError, PizzaResult};
use crate::render::backend::FrameRGBA;
use crate::render::cpu::{CpuBackend, RenderSettings};
use crate::render::painter::{DisplayList, Painter};
use crate::scene::Scene;
use crate::scene::creation::SavedCreation;
use crate::scene::selection::{SelectionTarget, Topology};
use crate::session::opts::DriverOpts;

/// Frame delay used when exporting a scene with no animation.
const STILL_FRAME_DELAY_MS: u32 = 100;

/// Per-tick orchestrator: owns the scene, the rotation accumulator and the rasterizers.
pub struct FrameDriver {
    opts: DriverOpts,
    geometry: ShapeGeometry,
    scene: Scene,
    rotation: f64,
    backend: CpuBackend,
    zone_backend: CpuBackend,
    live: Option<FrameRGBA>,
}

impl FrameDriver {
    /// Create a driver with an empty scene.
    pub fn new(opts: DriverOpts) -> PizzaResult<Self> {
        opts.validate()?;
        Ok(Self {
            geometry: ShapeGeometry::fit(opts.canvas),
            backend: CpuBackend::new(opts.render),
            // Zone maps always start transparent so uncovered pixels read as "no zone".
            zone_backend: CpuBackend::new(RenderSettings::default()),
            opts,
            scene: Scene::default(),
            rotation: 0.0,
            live: None,
        })
    }

    /// Options this driver was built with.
    pub fn opts(&self) -> &DriverOpts {
        &self.opts
    }

    /// Output canvas.
    pub fn canvas(&self) -> Canvas {
        self.opts.canvas
    }

    /// Current scene.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Accumulated rotation in radians.
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Last frame produced by [`FrameDriver::render_frame`].
    pub fn live_frame(&self) -> Option<&FrameRGBA> {
        self.live.as_ref()
    }

    /// Toggle `id` in the targeted selection set. Returns whether it is now selected.
    pub fn toggle_decoration(&mut self, target: SelectionTarget, id: DecorationId) -> bool {
        self.scene.selection.toggle(target, id)
    }

    /// Switch topology, keeping all selection sets.
    pub fn set_topology(&mut self, topology: Topology) {
        self.scene.selection.topology = topology;
    }

    /// Replace the active animation. Clearing it resets the rotation.
    pub fn set_animation(&mut self, mode: AnimationMode) {
        self.scene.animation = mode;
        if mode == AnimationMode::None {
            self.rotation = 0.0;
        }
    }

    /// Replace the active filter.
    pub fn set_filter(&mut self, filter: FilterMode) {
        self.scene.filter = filter;
    }

    /// Replace the scene with a saved creation. On error the current scene is kept.
    pub fn load_creation(&mut self, creation: &SavedCreation) -> PizzaResult<()> {
        let scene = Scene::from_creation(creation)?;
        self.load_scene(scene);
        Ok(())
    }

    /// Replace the whole scene.
    pub fn load_scene(&mut self, scene: Scene) {
        let animation = scene.animation;
        self.scene = scene;
        self.set_animation(animation);
    }

    /// Advance the rotation accumulator by `ticks` without rendering.
    ///
    /// Lets a host catch up after skipped frames. Does nothing unless a rotation mode is active.
    pub fn advance_ticks(&mut self, ticks: u32) {
        if let Some(step) = self.scene.animation.rotation_step() {
            self.rotation = (self.rotation + step * f64::from(ticks)).rem_euclid(TAU);
        }
    }

    /// Pose at `elapsed` seconds for a given rotation.
    fn pose_at(&self, elapsed: f64, rotation: f64) -> Pose {
        match self.scene.animation {
            AnimationMode::None => Pose::Still,
            AnimationMode::RotateCw | AnimationMode::RotateCcw => Pose::Rotate(rotation),
            AnimationMode::WaveForward => Pose::Wave(wave_offsets(elapsed, false)),
            AnimationMode::WaveReverse => Pose::Wave(wave_offsets(elapsed, true)),
            AnimationMode::Flip => Pose::Flip(flip_angle(elapsed)),
        }
    }

    /// Advance one tick and render the frame at `elapsed` seconds.
    #[tracing::instrument(
        level = "debug",
        skip(self),
        fields(animation = ?self.scene.animation, filter = ?self.scene.filter)
    )]
    pub fn render_frame(&mut self, elapsed: f64) -> PizzaResult<FrameRGBA> {
        if let Some(step) = self.scene.animation.rotation_step() {
            self.rotation = (self.rotation + step).rem_euclid(TAU);
        }
        let pose = self.pose_at(elapsed, self.rotation);
        tracing::debug!(?pose, "rendering live frame");
        let frame = self.render_pose(pose)?;
        self.live = Some(frame.clone());
        Ok(frame)
    }

    /// Render the frame a host ticking at the nominal rate would show at `elapsed` seconds.
    ///
    /// The rotation accumulator is set to `round(elapsed * 60)` steps from zero, so
    /// `elapsed = 0` renders the unrotated shape. Used for one-off renders such as the CLI.
    #[tracing::instrument(level = "debug", skip(self), fields(animation = ?self.scene.animation))]
    pub fn render_at(&mut self, elapsed: f64) -> PizzaResult<FrameRGBA> {
        let ticks = (elapsed.max(0.0) * NOMINAL_TICK_HZ).round();
        self.rotation = 0.0;
        self.advance_ticks(ticks.min(f64::from(u32::MAX)) as u32);
        let pose = self.pose_at(elapsed, self.rotation);
        let frame = self.render_pose(pose)?;
        self.live = Some(frame.clone());
        Ok(frame)
    }

    fn render_pose(&mut self, pose: Pose) -> PizzaResult<FrameRGBA> {
        let layout = face_layout(&self.scene.selection);
        let canvas = self.opts.canvas;

        let styled = self.record(pose, &layout, FaceStyle::Styled);
        let mut frame = self.backend.render(&styled, canvas)?;

        let zone = if self.scene.filter.needs_zone_map() {
            let list = self.record(pose, &layout, FaceStyle::ZoneMap);
            Some(self.zone_backend.render(&list, canvas)?)
        } else {
            None
        };
        apply_filter(self.scene.filter, &mut frame, zone.as_ref(), &self.opts.neon)?;
        Ok(frame)
    }

    fn record(&self, pose: Pose, layout: &FaceLayout, style: FaceStyle) -> DisplayList {
        let mut painter = Painter::default();
        compose_pose(&mut painter, self.geometry, pose, layout, style);
        painter.finish()
    }

    /// Render the zone map for the pose at `elapsed`, without filters or side effects.
    pub fn render_zone_map(&mut self, elapsed: f64) -> PizzaResult<FrameRGBA> {
        let pose = self.pose_at(elapsed, self.rotation);
        let layout = face_layout(&self.scene.selection);
        let list = self.record(pose, &layout, FaceStyle::ZoneMap);
        self.zone_backend.render(&list, self.opts.canvas)
    }

    /// Poses sampled evenly across one natural cycle of the current animation.
    fn cycle_poses(&self, frames: u32) -> Vec<Pose> {
        let n = f64::from(frames);
        (0..frames)
            .map(|i| {
                let t = f64::from(i) / n;
                match self.scene.animation.rotation_step() {
                    Some(step) => Pose::Rotate(self.rotation + step.signum() * TAU * t),
                    None => {
                        let cycle = self.scene.animation.cycle_secs().unwrap_or(0.0);
                        self.pose_at(cycle * t, self.rotation)
                    }
                }
            })
            .collect()
    }

    /// Display time per exported frame.
    fn frame_delay_ms(&self, frames: u32) -> u32 {
        match self.scene.animation.cycle_secs() {
            Some(cycle) => ((cycle * 1000.0 / f64::from(frames)).round() as u32).max(1),
            None => STILL_FRAME_DELAY_MS,
        }
    }

    fn with_rotation_restored<R>(
        &mut self,
        f: impl FnOnce(&mut Self) -> PizzaResult<R>,
    ) -> PizzaResult<R> {
        let saved = self.rotation;
        let out = f(self);
        self.rotation = saved;
        out
    }

    /// Render `frames` frames evenly spaced over one animation cycle.
    ///
    /// The rotation accumulator and the live frame are left as they were.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn capture_cycle(&mut self, frames: u32) -> PizzaResult<Vec<FrameRGBA>> {
        if frames == 0 {
            return Err(PizzaError::validation("capture needs at least one frame"));
        }
        self.with_rotation_restored(|d| {
            d.cycle_poses(frames)
                .into_iter()
                .map(|pose| d.render_pose(pose))
                .collect()
        })
    }

    /// Stream one animation cycle of `frames` frames into `sink`.
    ///
    /// The rotation accumulator and the live frame are left as they were, including on error.
    #[tracing::instrument(
        level = "info",
        skip(self, sink),
        fields(animation = ?self.scene.animation)
    )]
    pub fn export_cycle(&mut self, frames: u32, sink: &mut dyn FrameSink) -> PizzaResult<()> {
        if frames == 0 {
            return Err(PizzaError::validation("export needs at least one frame"));
        }
        let cfg = SinkConfig {
            width: self.opts.canvas.width,
            height: self.opts.canvas.height,
            frame_delay_ms: self.frame_delay_ms(frames),
            frame_count: frames,
        };
        self.with_rotation_restored(|d| {
            sink.begin(cfg)?;
            for (idx, pose) in (0u32..).zip(d.cycle_poses(frames)) {
                let frame = d.render_pose(pose)?;
                sink.push_frame(idx, &frame)
                    .map_err(|e| PizzaError::encode(format!("export frame {idx}: {e}")))?;
            }
            sink.end()
        })?;
        tracing::info!(frames, delay_ms = cfg.frame_delay_ms, "export finished");
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/driver.rs"]
mod tests;

//! Pizzaiolo renders a procedural pizza, divided into eight wedges, onto a CPU raster.
//!
//! The public API is driver-oriented:
//!
//! - Build a [`FrameDriver`] from [`DriverOpts`]
//! - Change the [`Scene`] through its mutators, or load a [`SavedCreation`]
//! - Call [`FrameDriver::render_frame`] once per tick, or export a whole animation cycle into a
//!   [`FrameSink`]
//!
//! Drawing is recorded into a display list by [`render::painter::Painter`] and rasterized with
//! `vello_cpu`. Filters then run on straight-alpha RGBA8 buffers.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Easing and time scheduling for the animations.
pub mod animation;
/// Face composition and pose transforms.
pub mod compose;
/// Decoration catalog and placement.
pub mod decor;
/// Pixel filters.
pub mod effects;
/// Export sinks.
pub mod encode;
/// Recording painter and CPU rasterizer.
pub mod render;
/// Scene state, saved creations and storage.
pub mod scene;
/// Frame driver.
pub mod session;

pub use crate::foundation::core::{
    Affine, BezPath, Canvas, Point, Rect, Rgb8, Rgba8, Vec2, WEDGE_ANGLE, WEDGE_COUNT,
};
pub use crate::foundation::error::{PizzaError, PizzaResult};

pub use crate::animation::mode::AnimationMode;
pub use crate::decor::registry::{Decoration, DecorationId, DecorationKind};
pub use crate::effects::filter::FilterMode;
pub use crate::effects::neon::NeonParams;
pub use crate::encode::gif::GifSink;
pub use crate::encode::sink::{FrameSink, InMemorySink, SinkConfig};
pub use crate::render::backend::FrameRGBA;
pub use crate::render::cpu::{CpuBackend, RenderSettings};
pub use crate::scene::Scene;
pub use crate::scene::creation::{CreationDraft, CreationId, SavedCreation, UserId};
pub use crate::scene::selection::{SelectionSet, SelectionState, SelectionTarget, Topology};
pub use crate::scene::store::{CreationStore, InMemoryCreationStore};
pub use crate::session::driver::FrameDriver;
pub use crate::session::opts::DriverOpts;

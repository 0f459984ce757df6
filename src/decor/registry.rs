use crate::decor::primitives;
use crate::foundation::core::{BezPath, Point, Rgb8};
use crate::render::painter::Painter;

/// Fill used for a decoration's zone-map region when it has no registered color.
pub const DEFAULT_ZONE_RGB: Rgb8 = Rgb8::new(255, 230, 0);

/// Stable identifier of a catalog decoration.
///
/// Serialized as snake_case (`"pepperoni"`, `"green_pepper"`, ...).
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum DecorationId {
    /// Round red sausage slices.
    Pepperoni,
    /// Sliced mushroom caps.
    Mushroom,
    /// Black olive rings.
    Olive,
    /// Green bell pepper strips.
    GreenPepper,
    /// Red onion rings.
    Onion,
    /// Basil leaves.
    Basil,
    /// Pineapple chunks.
    Pineapple,
    /// Ham squares.
    Ham,
    /// Jalapeño slices.
    Jalapeno,
    /// Crumbled sausage.
    Sausage,
    /// Tomato slices.
    Tomato,
    /// Zig-zag hot honey drizzle across each wedge.
    HotHoney,
    /// Wavy pesto swirl across each wedge.
    Pesto,
    /// Extra cheese band across each wedge.
    ExtraCheese,
}

impl DecorationId {
    /// Every catalog entry in display order.
    pub const ALL: [DecorationId; 14] = [
        Self::Pepperoni,
        Self::Mushroom,
        Self::Olive,
        Self::GreenPepper,
        Self::Onion,
        Self::Basil,
        Self::Pineapple,
        Self::Ham,
        Self::Jalapeno,
        Self::Sausage,
        Self::Tomato,
        Self::HotHoney,
        Self::Pesto,
        Self::ExtraCheese,
    ];

    /// Catalog entry for this id.
    pub fn decoration(self) -> &'static Decoration {
        lookup(self)
    }
}

/// Angular span of one wedge plus the radial band a zone decoration may occupy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoneSpan {
    /// Shape center.
    pub center: Point,
    /// Wedge start angle in radians.
    pub start: f64,
    /// Wedge angular width in radians.
    pub sweep: f64,
    /// Inner radius of the band.
    pub inner: f64,
    /// Outer radius of the band.
    pub outer: f64,
}

impl ZoneSpan {
    /// Point at `angle` and `radius` around the span's center.
    pub fn polar(&self, angle: f64, radius: f64) -> Point {
        Point::new(
            self.center.x + radius * angle.cos(),
            self.center.y + radius * angle.sin(),
        )
    }
}

/// Draw procedure for a point decoration.
pub type PointDrawFn = fn(&mut Painter, Point);
/// Draw procedure for a zone decoration.
pub type ZoneDrawFn = fn(&mut Painter, &ZoneSpan);
/// Center-line geometry of a zone decoration, used for its flat zone-map stroke.
pub type ZoneTraceFn = fn(&ZoneSpan) -> BezPath;

/// The two shapes a decoration can take.
#[derive(Clone, Copy, Debug)]
pub enum DecorationKind {
    /// Drawn at individual slot positions.
    Point {
        /// Styled draw.
        draw: PointDrawFn,
        /// Radius of the flat disc that represents it in the zone map.
        footprint: f64,
    },
    /// Drawn once per wedge across its angular span.
    Zone {
        /// Styled draw.
        draw: ZoneDrawFn,
        /// Center line stroked flat in the zone map.
        trace: ZoneTraceFn,
    },
}

/// Immutable catalog entry.
#[derive(Clone, Copy, Debug)]
pub struct Decoration {
    /// Identifier.
    pub id: DecorationId,
    /// Human-readable name.
    pub label: &'static str,
    /// Flat zone-map color, if registered.
    pub zone_rgb: Option<Rgb8>,
    /// Draw variant.
    pub kind: DecorationKind,
}

impl Decoration {
    /// Whether this decoration uses the slot table.
    pub fn is_point(&self) -> bool {
        matches!(self.kind, DecorationKind::Point { .. })
    }

    /// Zone-map color, falling back to [`DEFAULT_ZONE_RGB`].
    pub fn zone_color(&self) -> Rgb8 {
        self.zone_rgb.unwrap_or(DEFAULT_ZONE_RGB)
    }
}

const fn point(
    id: DecorationId,
    label: &'static str,
    zone_rgb: Option<Rgb8>,
    draw: PointDrawFn,
    footprint: f64,
) -> Decoration {
    Decoration {
        id,
        label,
        zone_rgb,
        kind: DecorationKind::Point { draw, footprint },
    }
}

const fn zone(
    id: DecorationId,
    label: &'static str,
    zone_rgb: Option<Rgb8>,
    draw: ZoneDrawFn,
    trace: ZoneTraceFn,
) -> Decoration {
    Decoration {
        id,
        label,
        zone_rgb,
        kind: DecorationKind::Zone { draw, trace },
    }
}

static CATALOG: [Decoration; 14] = [
    point(
        DecorationId::Pepperoni,
        "Pepperoni",
        Some(Rgb8::new(255, 0, 0)),
        primitives::pepperoni,
        13.0,
    ),
    point(
        DecorationId::Mushroom,
        "Mushroom",
        Some(Rgb8::new(190, 150, 255)),
        primitives::mushroom,
        11.0,
    ),
    point(
        DecorationId::Olive,
        "Black olive",
        Some(Rgb8::new(0, 80, 255)),
        primitives::olive,
        8.0,
    ),
    point(
        DecorationId::GreenPepper,
        "Green pepper",
        Some(Rgb8::new(0, 255, 0)),
        primitives::green_pepper,
        10.0,
    ),
    point(
        DecorationId::Onion,
        "Red onion",
        Some(Rgb8::new(255, 0, 255)),
        primitives::onion,
        10.0,
    ),
    point(
        DecorationId::Basil,
        "Basil",
        Some(Rgb8::new(0, 255, 140)),
        primitives::basil,
        10.0,
    ),
    point(
        DecorationId::Pineapple,
        "Pineapple",
        Some(Rgb8::new(255, 170, 0)),
        primitives::pineapple,
        8.0,
    ),
    point(
        DecorationId::Ham,
        "Ham",
        Some(Rgb8::new(255, 105, 180)),
        primitives::ham,
        9.0,
    ),
    point(
        DecorationId::Jalapeno,
        "Jalapeño",
        Some(Rgb8::new(140, 255, 0)),
        primitives::jalapeno,
        8.0,
    ),
    point(
        DecorationId::Sausage,
        "Sausage",
        Some(Rgb8::new(255, 120, 40)),
        primitives::sausage,
        10.0,
    ),
    point(
        DecorationId::Tomato,
        "Tomato",
        Some(Rgb8::new(255, 40, 90)),
        primitives::tomato,
        11.0,
    ),
    zone(
        DecorationId::HotHoney,
        "Hot honey drizzle",
        Some(Rgb8::new(255, 200, 0)),
        primitives::hot_honey,
        primitives::hot_honey_trace,
    ),
    zone(
        DecorationId::Pesto,
        "Pesto swirl",
        Some(Rgb8::new(40, 255, 220)),
        primitives::pesto,
        primitives::pesto_trace,
    ),
    zone(
        DecorationId::ExtraCheese,
        "Extra cheese",
        None,
        primitives::extra_cheese,
        primitives::extra_cheese_trace,
    ),
];

/// The full catalog in display order.
pub fn catalog() -> &'static [Decoration] {
    &CATALOG
}

/// Catalog entry for `id`.
pub fn lookup(id: DecorationId) -> &'static Decoration {
    // CATALOG is declared in the same order as `DecorationId`.
    &CATALOG[id as usize]
}

#[cfg(test)]
#[path = "../../tests/unit/decor/registry.rs"]
mod tests;

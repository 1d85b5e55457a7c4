use kurbo::{Point, Rect};

/// Parallax rate applied to the slow decorative layer; the second layer uses
/// the negated rate so the two drift apart as the viewer scrolls.
pub const PARALLAX_RATE: f64 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Pointer position normalized to a container, in percent.
///
/// Both axes are kept inside `[0, 100]` and are never NaN; the host feeds the
/// field straight into its radial-gradient focus point.
pub struct PointerField {
    /// Horizontal position in `[0, 100]`.
    pub x_percent: f64,
    /// Vertical position in `[0, 100]`.
    pub y_percent: f64,
}

impl Default for PointerField {
    fn default() -> Self {
        Self::centered()
    }
}

impl PointerField {
    /// Field at the container midpoint `(50, 50)`.
    pub fn centered() -> Self {
        Self {
            x_percent: 50.0,
            y_percent: 50.0,
        }
    }

    /// Recompute from a pointer position and the container bounding box.
    ///
    /// Returns `false` without touching the field when the box has degenerate
    /// size (not laid out yet) or any input coordinate is non-finite; a frame
    /// with stale coordinates beats a frame with invalid ones.
    pub fn update(&mut self, client: Point, bounds: Rect) -> bool {
        let width = bounds.width();
        let height = bounds.height();
        if !(width > 0.0) || !(height > 0.0) {
            return false;
        }
        if !client.x.is_finite() || !client.y.is_finite() {
            return false;
        }
        if !bounds.x0.is_finite() || !bounds.y0.is_finite() {
            return false;
        }

        self.x_percent = ((client.x - bounds.x0) / width * 100.0).clamp(0.0, 100.0);
        self.y_percent = ((client.y - bounds.y0) / height * 100.0).clamp(0.0, 100.0);
        true
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// Scroll-proportional offset for decorative background layers.
pub struct Parallax {
    scroll_offset: f64,
}

impl Parallax {
    /// Latest scroll offset fed by the host.
    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    /// Record a new scroll offset. Non-finite offsets are ignored.
    pub fn on_scroll(&mut self, offset: f64) {
        if offset.is_finite() {
            self.scroll_offset = offset;
        }
    }

    /// Vertical shift for a layer drifting at `rate` (e.g. [`PARALLAX_RATE`]
    /// or its negation).
    pub fn layer_shift(&self, rate: f64) -> f64 {
        self.scroll_offset * rate
    }
}

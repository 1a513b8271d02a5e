use crate::math::{point::Point, vector::Vector, FloatNum};

/// Axis-aligned rectangle with a lazily recomputed vertex loop.
///
/// The vertex loop is LOCAL space: computed from the extents alone,
/// centered on the origin, never offset by the center point. Order is
/// bottom-left, bottom-right, top-right, top-left (counter clockwise).
/// Consumers that need world space translate by `center_point`.
#[derive(Clone, Debug)]
pub struct RectShape {
    center_point: Point,
    width: FloatNum,
    height: FloatNum,
    vertices: [Point; 4],
    prev_center_point: Point,
    prev_width: FloatNum,
    prev_height: FloatNum,
}

impl RectShape {
    pub fn new(center_point: impl Into<Point>, width: FloatNum, height: FloatNum) -> Self {
        // negative extents are accepted and normalized
        let width = width.abs();
        let height = height.abs();

        let center_point = center_point.into();

        Self {
            center_point,
            width,
            height,
            vertices: Default::default(),
            prev_center_point: center_point,
            prev_width: width,
            prev_height: height,
        }
    }

    #[inline]
    pub fn center_point(&self) -> Point {
        self.center_point
    }

    #[inline]
    pub fn width(&self) -> FloatNum {
        self.width
    }

    #[inline]
    pub fn height(&self) -> FloatNum {
        self.height
    }

    #[inline]
    pub fn vertices(&self) -> &[Point; 4] {
        &self.vertices
    }

    pub fn translate(&mut self, vector: &Vector) {
        self.center_point += vector;
    }

    pub fn set_width(&mut self, width_reducer: impl FnOnce(FloatNum) -> FloatNum) {
        self.width = width_reducer(self.width).abs();
    }

    pub fn set_height(&mut self, height_reducer: impl FnOnce(FloatNum) -> FloatNum) {
        self.height = height_reducer(self.height).abs();
    }

    pub fn compute_surface_size(&self) -> FloatNum {
        self.width * self.height
    }

    /// Recompute the vertex loop only when center point or extents
    /// changed since the last sync; otherwise a no-op.
    pub fn sync_vertices(&mut self) {
        if self.center_point == self.prev_center_point
            && self.width == self.prev_width
            && self.height == self.prev_height
        {
            return;
        }
        self.force_sync_vertices();
    }

    /// Unconditional recompute, used for first time population.
    pub fn force_sync_vertices(&mut self) {
        let half_width = self.width * 0.5;
        let half_height = self.height * 0.5;

        self.vertices = [
            (-half_width, -half_height).into(),
            (half_width, -half_height).into(),
            (half_width, half_height).into(),
            (-half_width, half_height).into(),
        ];

        self.prev_center_point = self.center_point;
        self.prev_width = self.width;
        self.prev_height = self.height;
    }
}

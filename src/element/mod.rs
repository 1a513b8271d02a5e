use std::time::Duration;

use log::debug;

use crate::{
    collision::polygon_overlap,
    math::{point::Point, vector::Vector, FloatNum},
    meta::{Mass, MassPolicy, Meta},
    shape::rect::RectShape,
};

/// Capability contract every simulate-able body satisfies; the only
/// integration point the scene consumes.
///
/// `vertices` describe the occupied boundary in LOCAL space, centered
/// on `center_point`. The provided `intersects` translates both loops
/// to world space before clipping, so additional shape variants plug
/// in without touching the overlap algorithm.
pub trait GameObject {
    fn is_active(&self) -> bool;

    /// A scene should exempt the object from force integration;
    /// purely informational here.
    fn is_static(&self) -> bool;

    fn speed(&self) -> FloatNum;

    fn velocity(&self) -> Vector;

    fn center_point(&self) -> Point;

    fn vertices(&self) -> &[Point];

    /// Refresh cached geometry when needed; no-op while inactive or
    /// when nothing changed since the last call.
    fn update(&mut self);

    fn mass(&self) -> Mass;

    /// Silently ignored for automatic mass mode objects.
    fn set_mass(&mut self, mass: Mass);

    /// Euler-explicit, single step: move the center by velocity over
    /// the elapsed time, then refresh geometry like `update`.
    fn integrate_position(&mut self, delta_time: Duration);

    /// True iff progressively clipping `other`'s world space loop
    /// against every edge half plane of this object's loop produces a
    /// crossing on one of this object's edge segments. An `other`
    /// lying strictly inside this object's boundary produces no
    /// crossing and is NOT reported as intersecting.
    fn intersects(&self, other: &dyn GameObject) -> bool {
        let self_translation = self.center_point().to_vector();
        let self_loop: Vec<Point> = self
            .vertices()
            .iter()
            .map(|&vertex| vertex + self_translation)
            .collect();

        let other_translation = other.center_point().to_vector();
        let other_loop: Vec<Point> = other
            .vertices()
            .iter()
            .map(|&vertex| vertex + other_translation)
            .collect();

        polygon_overlap(&self_loop, &other_loop)
    }
}

/// The one concrete body: an axis-aligned rectangle with position,
/// extents, velocity and a mass policy.
pub struct Square {
    is_active: bool,
    shape: RectShape,
    meta: Meta,
}

impl Square {
    /// Constructed inactive; call `enable` before the first frame.
    pub fn new(
        center_point: impl Into<Point>,
        width: FloatNum,
        height: FloatNum,
        meta: impl Into<Meta>,
    ) -> Self {
        Self {
            is_active: false,
            shape: RectShape::new(center_point, width, height),
            meta: meta.into(),
        }
    }

    #[inline]
    pub fn shape(&self) -> &RectShape {
        &self.shape
    }

    #[inline]
    pub fn shape_mut(&mut self) -> &mut RectShape {
        &mut self.shape
    }

    #[inline]
    pub fn meta(&self) -> &Meta {
        &self.meta
    }

    #[inline]
    pub fn meta_mut(&mut self) -> &mut Meta {
        &mut self.meta
    }

    /// Force one geometry population, then join the update loop.
    pub fn enable(&mut self) {
        self.shape.force_sync_vertices();
        self.is_active = true;
        debug!("square enabled at {:?}", self.shape.center_point());
    }

    /// Cached geometry stays readable (stale) while disabled.
    pub fn disable(&mut self) {
        self.is_active = false;
        debug!("square disabled at {:?}", self.shape.center_point());
    }
}

impl GameObject for Square {
    fn is_active(&self) -> bool {
        self.is_active
    }

    fn is_static(&self) -> bool {
        self.meta.is_static()
    }

    fn speed(&self) -> FloatNum {
        self.meta.speed()
    }

    fn velocity(&self) -> Vector {
        self.meta.velocity()
    }

    fn center_point(&self) -> Point {
        self.shape.center_point()
    }

    fn vertices(&self) -> &[Point] {
        self.shape.vertices()
    }

    fn update(&mut self) {
        if !self.is_active {
            return;
        }
        self.shape.sync_vertices();
    }

    fn mass(&self) -> Mass {
        match self.meta.mass_policy() {
            MassPolicy::Fixed(mass) => mass,
            MassPolicy::Automatic => self.shape.compute_surface_size(),
        }
    }

    fn set_mass(&mut self, mass: Mass) {
        self.meta.set_mass(|_| mass);
    }

    fn integrate_position(&mut self, delta_time: Duration) {
        let path = self.meta.velocity() * delta_time.as_secs_f32();
        self.shape.translate(&path);
        self.update();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meta::MetaBuilder;
    use rand::prelude::*;

    fn active_square(center: (FloatNum, FloatNum), width: FloatNum, height: FloatNum) -> Square {
        let mut square = Square::new(center, width, height, MetaBuilder::new(0.));
        square.enable();
        square
    }

    #[test]
    fn test_vertex_shape_law() {
        // local space vertices, regardless of the center point
        for center in [(0., 0.), (100., -40.)] {
            let square = active_square(center, 2., 2.);
            let expected: [Point; 4] = [
                (-1., -1.).into(),
                (1., -1.).into(),
                (1., 1.).into(),
                (-1., 1.).into(),
            ];
            assert_eq!(square.vertices(), &expected);
        }
    }

    #[test]
    fn test_update_is_a_no_op_while_inactive() {
        let mut square = Square::new((0., 0.), 2., 2., MetaBuilder::new(0.));
        square.update();
        assert!(square.vertices().iter().all(|v| *v == (0., 0.).into()));

        square.enable();
        assert_eq!(square.vertices()[2], (1., 1.).into());
    }

    #[test]
    fn test_repeated_update_leaves_vertices_bit_identical() {
        let mut square = active_square((3., 3.), 2., 4.);
        square.update();
        let before: Vec<u32> = square
            .vertices()
            .iter()
            .flat_map(|v| [v.x().to_bits(), v.y().to_bits()])
            .collect();
        square.update();
        let after: Vec<u32> = square
            .vertices()
            .iter()
            .flat_map(|v| [v.x().to_bits(), v.y().to_bits()])
            .collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_disable_keeps_stale_geometry_readable() {
        let mut square = active_square((0., 0.), 2., 2.);
        square.disable();
        assert!(!square.is_active());
        assert_eq!(square.vertices()[0], (-1., -1.).into());

        // updates stop while disabled
        square.shape_mut().set_width(|_| 10.);
        square.update();
        assert_eq!(square.vertices()[0], (-1., -1.).into());
    }

    #[test]
    fn test_automatic_mass_ignores_setter() {
        let mut square = active_square((0., 0.), 2., 2.);
        square.set_mass(99.);
        assert_eq!(square.mass(), 4.);

        // automatic mass follows the current surface size
        square.shape_mut().set_width(|_| 3.);
        assert_eq!(square.mass(), 6.);
    }

    #[test]
    fn test_fixed_mass_respects_setter() {
        let mut square = Square::new((0., 0.), 2., 2., MetaBuilder::new(5.));
        assert_eq!(square.mass(), 5.);
        square.set_mass(10.);
        assert_eq!(square.mass(), 10.);
    }

    #[test]
    fn test_kinematic_integration() {
        let mut square = Square::new(
            (0., 0.),
            2.,
            2.,
            MetaBuilder::new(1.).velocity((1., 0.)),
        );
        square.enable();
        square.integrate_position(Duration::from_secs(2));
        assert_eq!(square.center_point(), (2., 0.).into());
        assert_eq!(square.speed(), 1.);
    }

    #[test]
    fn test_identical_bodies_intersect() {
        let a = active_square((0., 0.), 2., 2.);
        let b = active_square((0., 0.), 2., 2.);
        assert!(a.intersects(&b));
    }

    #[test]
    fn test_overlap_respects_position() {
        let a = active_square((0., 0.), 2., 2.);
        let b = active_square((1.5, 0.), 2., 2.);
        let c = active_square((10., 10.), 2., 2.);
        assert!(a.intersects(&b));
        assert!(!a.intersects(&c));
        assert!(!c.intersects(&a));
    }

    #[test]
    fn test_contained_body_is_not_reported() {
        let outer = active_square((0., 0.), 20., 20.);
        let inner = active_square((0., 0.), 2., 2.);
        assert!(!outer.intersects(&inner));
        // clipping the containing loop crosses the inner corners
        assert!(inner.intersects(&outer));
    }

    #[test]
    fn test_disjoint_pairs_never_intersect() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let x = rng.gen_range(10.0..100.0);
            let y = rng.gen_range(10.0..100.0);
            let a = active_square((0., 0.), 2., 2.);
            let b = active_square((x, y), 2., 2.);
            assert!(!a.intersects(&b), "({x}, {y}) should be disjoint");
        }
    }

    #[test]
    fn test_moving_body_starts_intersecting() {
        let wall = active_square((4., 0.), 2., 2.);
        let mut ball = Square::new(
            (0., 0.),
            2.,
            2.,
            MetaBuilder::new(1.).velocity((1., 0.)),
        );
        ball.enable();
        assert!(!ball.intersects(&wall));
        for _ in 0..3 {
            ball.integrate_position(Duration::from_secs(1));
        }
        assert!(ball.intersects(&wall));
    }
}

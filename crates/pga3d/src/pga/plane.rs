use std::ops::Neg;

use cgmath::InnerSpace;
#[cfg(feature = "rayon")]
use rayon::prelude::*;

use super::{Axes, Line, Point, Term};
use crate::{Float, Vec3};

/// Oriented plane `x e234 + y e314 + z e124 + w e321`, which contains the
/// points satisfying `x*px + y*py + z*pz + w*pw = 0`.
///
/// `(x, y, z)` is the normal vector and need not be unit length. Metric
/// queries divide by its length.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Plane {
    x: Float,
    y: Float,
    z: Float,
    w: Float,
}

impl_coefficients!(Plane[4] {
    x: "Returns the coefficient on `e234`." => Term::unit(Axes::Y.union(Axes::Z).union(Axes::W)),
    y: "Returns the coefficient on `e314`." => Term::neg_unit(Axes::X.union(Axes::Z).union(Axes::W)),
    z: "Returns the coefficient on `e124`." => Term::unit(Axes::X.union(Axes::Y).union(Axes::W)),
    w: "Returns the coefficient on `e321`." => Term::neg_unit(Axes::X.union(Axes::Y).union(Axes::Z)),
});

impl Neg for Plane {
    type Output = Plane;

    /// Returns the same plane facing the other way.
    fn neg(self) -> Self::Output {
        Self::from_coords(-self.x, -self.y, -self.z, -self.w)
    }
}

impl Plane {
    /// Constructs a plane from its normal `(x, y, z)` and offset `w`.
    pub const fn from_coords(x: Float, y: Float, z: Float, w: Float) -> Self {
        Self { x, y, z, w }
    }

    /// Returns the plane containing `line` and `point`.
    ///
    /// The result is zero if `point` lies on `line`.
    pub fn from_line_and_point(line: Line, point: Point) -> Self {
        let [vx, vy, vz, mx, my, mz] = line.to_array();
        let [px, py, pz, pw] = point.to_array();
        Self {
            x: vy * pz - vz * py + mx * pw,
            y: vz * px - vx * pz + my * pw,
            z: vx * py - vy * px + mz * pw,
            w: -(mx * px + my * py + mz * pz),
        }
    }

    /// Returns the plane through `point` perpendicular to `line`.
    ///
    /// The normal of the result points opposite the direction of `line`, scaled
    /// by the weight of `point`.
    pub fn perpendicular_to_line_contains_point(line: Line, point: Point) -> Self {
        let [vx, vy, vz, ..] = line.to_array();
        let [px, py, pz, pw] = point.to_array();
        Self {
            x: -vx * pw,
            y: -vy * pw,
            z: -vz * pw,
            w: vx * px + vy * py + vz * pz,
        }
    }

    /// Returns the unit normal vector of the plane.
    ///
    /// The result is NaN if the normal is zero. See also
    /// [`Self::try_normal()`].
    pub fn normal(self) -> Vec3 {
        self.normal_unnormalized().normalize()
    }
    /// Returns the unit normal vector of the plane, or `None` if it is zero.
    pub fn try_normal(self) -> Option<Vec3> {
        let n = self.normal_unnormalized();
        crate::util::try_div(n, n.magnitude())
    }
    fn normal_unnormalized(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    fn dot_point(self, p: Point) -> Float {
        self.x * p.x() + self.y * p.y() + self.z * p.z() + self.w * p.w()
    }

    /// Returns the Euclidean distance from the plane to `p`.
    ///
    /// The result is infinite or NaN if the plane's normal is zero or `p` is a
    /// point at infinity.
    pub fn distance_from_point(self, p: Point) -> Float {
        self.dot_point(p).abs() / (self.normal_unnormalized().magnitude() * p.w().abs())
    }
    /// Returns the signed Euclidean distance from the plane to `p`, which is
    /// positive on the side the normal points toward.
    ///
    /// The sign is flipped for points with negative weight.
    pub fn signed_distance_from_point(self, p: Point) -> Float {
        self.dot_point(p) / (self.normal_unnormalized().magnitude() * p.w())
    }

    /// Returns the distance from the plane to each point, in the same order.
    pub fn distances_from_points(self, points: &[Point]) -> Vec<Float> {
        points
            .iter()
            .map(|&p| self.distance_from_point(p))
            .collect()
    }
    /// Returns the signed distance from the plane to each point, in the same
    /// order.
    pub fn signed_distances_from_points(self, points: &[Point]) -> Vec<Float> {
        points
            .iter()
            .map(|&p| self.signed_distance_from_point(p))
            .collect()
    }

    /// Parallel version of [`Self::distances_from_points()`].
    #[cfg(feature = "rayon")]
    pub fn par_distances_from_points(self, points: &[Point]) -> Vec<Float> {
        points
            .par_iter()
            .map(|&p| self.distance_from_point(p))
            .collect()
    }
    /// Parallel version of [`Self::signed_distances_from_points()`].
    #[cfg(feature = "rayon")]
    pub fn par_signed_distances_from_points(self, points: &[Point]) -> Vec<Float> {
        points
            .par_iter()
            .map(|&p| self.signed_distance_from_point(p))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn point(x: Float, y: Float, z: Float) -> Point {
        Point::from_vec3(Vec3::new(x, y, z))
    }

    #[test]
    fn test_plane_through_three_points() {
        let p0 = point(0.0, 0.0, 1.0);
        let p1 = point(1.0, 0.0, 1.0);
        let p2 = point(1.0, 0.0, 0.0);
        let p3 = point(0.0, 1.0, 0.0);

        let plane = Plane::from_line_and_point(Line::from_two_points(p0, p1), p2);
        assert_eq!(plane.normal(), Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(
            plane.signed_distances_from_points(&[p0, p1, p2, p3]),
            vec![0.0, 0.0, 0.0, 1.0],
        );
        assert_eq!(
            (-plane).signed_distances_from_points(&[p0, p1, p2, p3]),
            vec![0.0, 0.0, 0.0, -1.0],
        );
    }

    #[test]
    fn test_perpendicular_plane() {
        let p0 = point(0.0, 0.0, 0.0);
        let p1 = point(0.0, 1.0, 0.0);
        let p2 = Point::from_coords(1.0, 1.0, 1.0, 1.0);

        let plane = Plane::perpendicular_to_line_contains_point(Line::from_two_points(p0, p1), p2);
        assert_eq!(plane, Plane::from_coords(0.0, -1.0, 0.0, 1.0));
        assert_eq!(plane.distances_from_points(&[p0, p1, p2]), vec![1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_distance_ignores_scale() {
        // The plane x = 2, with a non-unit normal and a heavy point.
        let plane = Plane::from_coords(3.0, 0.0, 0.0, -6.0);
        let p = Point::from_coords(10.0, 4.0, -2.0, 2.0);
        assert_eq!(plane.distance_from_point(p), 3.0);
        assert_eq!(plane.signed_distance_from_point(p), 3.0);
        assert_eq!(plane.signed_distance_from_point(point(-1.0, 0.0, 0.0)), -3.0);
        assert_eq!(plane.distance_from_point(point(-1.0, 0.0, 0.0)), 3.0);
    }

    #[test]
    fn test_degenerate_distances() {
        let plane = Plane::from_coords(0.0, 0.0, 1.0, 0.0);
        let at_infinity = Point::from_direction(Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(plane.distance_from_point(at_infinity), Float::INFINITY);

        let zero = Plane::default();
        assert!(zero.distance_from_point(point(1.0, 2.0, 3.0)).is_nan());
        assert!(zero.normal().x.is_nan());
        assert_eq!(zero.try_normal(), None);
    }

    #[test]
    fn test_normal() {
        let plane = Plane::from_coords(0.0, 3.0, 4.0, 7.0);
        let n = plane.normal();
        assert_eq!(n.x, 0.0);
        assert_approx_eq!(n.y, 0.6);
        assert_approx_eq!(n.z, 0.8);
        assert_eq!(plane.try_normal(), Some(plane.normal()));
    }

    #[cfg(feature = "rayon")]
    #[test]
    fn test_par_distances_match_serial() {
        let plane = Plane::from_coords(1.0, -2.0, 0.5, 3.0);
        let points: Vec<Point> = (0..1000)
            .map(|i| point(i as Float, (i % 7) as Float, -(i as Float) / 3.0))
            .collect();
        assert_eq!(
            plane.par_distances_from_points(&points),
            plane.distances_from_points(&points),
        );
        assert_eq!(
            plane.par_signed_distances_from_points(&points),
            plane.signed_distances_from_points(&points),
        );
    }
}

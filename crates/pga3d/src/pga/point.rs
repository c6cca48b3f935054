use super::{Axes, Line, Plane, Term};
use crate::{Float, Vec3};

/// Homogeneous point `x e1 + y e2 + z e3 + w e4`.
///
/// The Euclidean position is `(x, y, z) / w`. A point with `w = 0` is a point
/// at infinity, which represents a direction.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Point {
    x: Float,
    y: Float,
    z: Float,
    w: Float,
}

impl_coefficients!(Point[4] {
    x: "Returns the coefficient on `e1`." => Term::unit(Axes::X),
    y: "Returns the coefficient on `e2`." => Term::unit(Axes::Y),
    z: "Returns the coefficient on `e3`." => Term::unit(Axes::Z),
    w: "Returns the coefficient on `e4`." => Term::unit(Axes::W),
});

impl Point {
    /// Point at the origin.
    pub const ORIGIN: Self = Self::from_coords(0.0, 0.0, 0.0, 1.0);

    /// Constructs a point from raw homogeneous coordinates.
    pub const fn from_coords(x: Float, y: Float, z: Float, w: Float) -> Self {
        Self { x, y, z, w }
    }
    /// Constructs a finite point at a Euclidean position.
    pub fn from_vec3(v: Vec3) -> Self {
        Self::from_coords(v.x, v.y, v.z, 1.0)
    }
    /// Constructs a point at infinity in the direction `v`.
    pub fn from_direction(v: Vec3) -> Self {
        Self::from_coords(v.x, v.y, v.z, 0.0)
    }

    /// Returns the point where `line` passes through `plane`.
    ///
    /// If `line` is parallel to `plane` then the result is a point at
    /// infinity. If `line` lies in `plane` then the result is zero.
    pub fn from_plane_and_line(plane: Plane, line: Line) -> Self {
        let [px, py, pz, pw] = plane.to_array();
        let [vx, vy, vz, mx, my, mz] = line.to_array();
        Self {
            x: my * pz - mz * py + vx * pw,
            y: mz * px - mx * pz + vy * pw,
            z: mx * py - my * px + vz * pw,
            w: -(vx * px + vy * py + vz * pz),
        }
    }

    /// Returns the Euclidean position of the point.
    ///
    /// The result is infinite or NaN for a point at infinity. See also
    /// [`Self::try_to_vec3()`].
    pub fn to_vec3(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z) / self.w
    }
    /// Returns the Euclidean position of the point, or `None` if it is a
    /// point at infinity.
    pub fn try_to_vec3(self) -> Option<Vec3> {
        crate::util::try_div(Vec3::new(self.x, self.y, self.z), self.w)
    }

    /// Returns the weight of the point, which is zero for points at infinity.
    pub fn weight(self) -> Float {
        self.w
    }

    /// Returns the orthogonal projection of the point onto `plane`.
    ///
    /// `plane` does not need to be normalized. The result is scaled by the
    /// squared length of the plane's normal.
    #[must_use]
    pub fn project_to_plane(self, plane: Plane) -> Self {
        let [px, py, pz, pw] = plane.to_array();
        let s0 = px * px + py * py + pz * pz;
        let s1 = -(px * self.x + py * self.y + pz * self.z + pw * self.w);
        Self {
            x: s0 * self.x + s1 * px,
            y: s0 * self.y + s1 * py,
            z: s0 * self.z + s1 * pz,
            w: s0 * self.w,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_vec3() {
        let v = Vec3::new(1.0, -2.0, 3.5);
        assert_eq!(Point::from_vec3(v).to_vec3(), v);
        assert_eq!(Point::from_coords(2.0, 4.0, -6.0, 2.0).to_vec3(), Vec3::new(1.0, 2.0, -3.0));
        assert_eq!(Point::ORIGIN.to_vec3(), Vec3::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_point_at_infinity() {
        let p = Point::from_direction(Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(p.weight(), 0.0);
        assert_eq!(p.try_to_vec3(), None);

        let v = p.to_vec3();
        assert!(v.x.is_infinite());
        assert!(v.y.is_nan());
    }

    #[test]
    fn test_plane_and_line_meet() {
        // The plane z=1 and the z axis.
        let plane = Plane::from_coords(0.0, 0.0, 1.0, -1.0);
        let line = Line::from_two_points(Point::ORIGIN, Point::from_coords(0.0, 0.0, 2.0, 1.0));
        let p = Point::from_plane_and_line(plane, line);
        assert_eq!(p.to_vec3(), Vec3::new(0.0, 0.0, 1.0));

        // A line parallel to the plane meets it at infinity.
        let line = Line::from_two_points(Point::ORIGIN, Point::from_coords(1.0, 0.0, 0.0, 1.0));
        assert_eq!(Point::from_plane_and_line(plane, line).weight(), 0.0);
    }

    #[test]
    fn test_project_to_plane() {
        let plane = Plane::from_coords(0.0, 0.0, 2.0, -2.0);
        let p = Point::from_coords(1.0, 2.0, 3.0, 1.0).project_to_plane(plane);
        assert_eq!(p, Point::from_coords(4.0, 8.0, 4.0, 4.0));
        assert_eq!(p.to_vec3(), Vec3::new(1.0, 2.0, 1.0));
    }

    #[test]
    fn test_display() {
        assert_eq!(Point::from_coords(1.0, 0.0, -2.5, 1.0).to_string(), "1*e1 - 2.5*e3 + 1*e4");
    }
}

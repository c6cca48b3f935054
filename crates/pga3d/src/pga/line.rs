use std::ops::Neg;

use super::{Axes, Plane, Point, Term};
use crate::{Float, Vec3};

/// Line in 3D space, stored as the bivector
/// `vx e41 + vy e42 + vz e43 + mx e23 + my e31 + mz e12`.
///
/// `(vx, vy, vz)` is the direction of the line and `(mx, my, mz)` is its
/// moment about the origin. These are Plücker coordinates, and the direction is
/// always perpendicular to the moment for a line built from points or planes.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Line {
    vx: Float,
    vy: Float,
    vz: Float,
    mx: Float,
    my: Float,
    mz: Float,
}

impl_coefficients!(Line[6] {
    vx: "Returns the coefficient on `e41`." => Term::neg_unit(Axes::X.union(Axes::W)),
    vy: "Returns the coefficient on `e42`." => Term::neg_unit(Axes::Y.union(Axes::W)),
    vz: "Returns the coefficient on `e43`." => Term::neg_unit(Axes::Z.union(Axes::W)),
    mx: "Returns the coefficient on `e23`." => Term::unit(Axes::Y.union(Axes::Z)),
    my: "Returns the coefficient on `e31`." => Term::neg_unit(Axes::X.union(Axes::Z)),
    mz: "Returns the coefficient on `e12`." => Term::unit(Axes::X.union(Axes::Y)),
});

impl Neg for Line {
    type Output = Line;

    /// Returns the same line with the opposite orientation.
    fn neg(self) -> Self::Output {
        Self::from_array(self.to_array().map(|x| -x))
    }
}

impl Line {
    /// Constructs a line from its direction and its moment about the origin.
    pub fn from_direction_and_moment(direction: Vec3, moment: Vec3) -> Self {
        Self {
            vx: direction.x,
            vy: direction.y,
            vz: direction.z,
            mx: moment.x,
            my: moment.y,
            mz: moment.z,
        }
    }

    /// Returns the line through `p` and `q`, oriented from `p` to `q`.
    ///
    /// The result is zero if the points coincide.
    pub fn from_two_points(p: Point, q: Point) -> Self {
        let [px, py, pz, pw] = p.to_array();
        let [qx, qy, qz, qw] = q.to_array();
        Self {
            vx: qx * pw - px * qw,
            vy: qy * pw - py * qw,
            vz: qz * pw - pz * qw,
            mx: py * qz - pz * qy,
            my: pz * qx - px * qz,
            mz: px * qy - py * qx,
        }
    }

    /// Returns the line where planes `f` and `g` intersect.
    ///
    /// The direction of the result is `f.normal × g.normal`, so it is zero if
    /// the planes are parallel.
    pub fn from_intersection_of_two_planes(f: Plane, g: Plane) -> Self {
        let [fx, fy, fz, fw] = f.to_array();
        let [gx, gy, gz, gw] = g.to_array();
        Self {
            vx: fy * gz - fz * gy,
            vy: fz * gx - fx * gz,
            vz: fx * gy - fy * gx,
            mx: gx * fw - fx * gw,
            my: gy * fw - fy * gw,
            mz: gz * fw - fz * gw,
        }
    }

    /// Returns the direction of the line, which is not normalized.
    pub fn direction(self) -> Vec3 {
        Vec3::new(self.vx, self.vy, self.vz)
    }
    /// Returns the moment of the line about the origin.
    pub fn moment(self) -> Vec3 {
        Vec3::new(self.mx, self.my, self.mz)
    }
}

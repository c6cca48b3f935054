use std::ops::{Mul, MulAssign, Neg};

use cgmath::InnerSpace;

use super::{Axes, Flector, Line, Point, Term};
use crate::{APPROX, Float, Vec3};

/// Rigid motion (screw motion) `rx e41 + ry e42 + rz e43 + rw e1234 + ux e23 +
/// uy e31 + uz e12 + uw`, equivalent to a dual quaternion.
///
/// `(rx, ry, rz, rw)` is the rotational part and `(ux, uy, uz, uw)` is the
/// translational part. A motor built from an angle and a unit axis has
/// `rx² + ry² + rz² + rw² = 1`. No operation renormalizes, so composing many
/// motors may drift from this; see [`Self::rotor_norm2()`].
///
/// Motors are applied and composed with the geometric antiproduct `⟇`. The
/// motor `a ⟇ b` applies `b` first and then `a`.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Motor {
    rx: Float,
    ry: Float,
    rz: Float,
    rw: Float,
    ux: Float,
    uy: Float,
    uz: Float,
    uw: Float,
}

impl_coefficients!(Motor[8] {
    rx: "Returns the coefficient on `e41`." => Line::BASIS[0],
    ry: "Returns the coefficient on `e42`." => Line::BASIS[1],
    rz: "Returns the coefficient on `e43`." => Line::BASIS[2],
    rw: "Returns the coefficient on `e1234`." => Term::unit(Axes::ANTISCALAR),
    ux: "Returns the coefficient on `e23`." => Line::BASIS[3],
    uy: "Returns the coefficient on `e31`." => Line::BASIS[4],
    uz: "Returns the coefficient on `e12`." => Line::BASIS[5],
    uw: "Returns the scalar coefficient." => Term::scalar(1.0),
});

impl Motor {
    /// Identity motion.
    pub const IDENT: Self = Self::from_values(0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0);

    /// Constructs a motor from raw coefficients.
    pub const fn from_values(
        rx: Float,
        ry: Float,
        rz: Float,
        rw: Float,
        ux: Float,
        uy: Float,
        uz: Float,
        uw: Float,
    ) -> Self {
        Self {
            rx,
            ry,
            rz,
            rw,
            ux,
            uy,
            uz,
            uw,
        }
    }

    /// Constructs a translation by `t`.
    pub fn from_translation(t: Vec3) -> Self {
        Self::from_values(0.0, 0.0, 0.0, 1.0, t.x / 2.0, t.y / 2.0, t.z / 2.0, 0.0)
    }

    /// Constructs a rotation by `angle` radians about `axis`, which passes
    /// through the origin.
    ///
    /// `axis` must be unit length. It is not normalized; if it isn't unit
    /// length then a warning is logged and the result is not a rigid motion.
    /// See also [`Self::try_from_angle_axis()`].
    pub fn from_angle_axis(axis: Vec3, angle: Float) -> Self {
        if !APPROX.eq(axis.magnitude2(), 1.0) {
            log::warn!(
                "rotation axis {axis:?} has length {}, not 1",
                axis.magnitude(),
            );
        }
        Self::rotation(axis, angle)
    }
    /// Constructs a rotation by `angle` radians about `axis` after normalizing
    /// `axis`, or returns `None` if `axis` is zero.
    pub fn try_from_angle_axis(axis: Vec3, angle: Float) -> Option<Self> {
        let axis = crate::util::try_div(axis, axis.magnitude())?;
        Some(Self::rotation(axis, angle))
    }
    fn rotation(axis: Vec3, angle: Float) -> Self {
        let (sin, cos) = (angle / 2.0).sin_cos();
        Self::from_values(axis.x * sin, axis.y * sin, axis.z * sin, cos, 0.0, 0.0, 0.0, 0.0)
    }

    /// Returns `rx² + ry² + rz² + rw²`, which is 1 for a motor built from an
    /// angle and a unit axis.
    pub fn rotor_norm2(self) -> Float {
        self.rx * self.rx + self.ry * self.ry + self.rz * self.rz + self.rw * self.rw
    }

    /// Returns `p ⟇ self`.
    pub fn inv_geometric_antiprod_with_point(self, p: Point) -> Flector {
        let Self {
            rx,
            ry,
            rz,
            rw,
            ux,
            uy,
            uz,
            uw,
        } = self;
        let [px, py, pz, pw] = p.to_array();
        Flector::from_values(
            -ry * pz + rz * py + rw * px - ux * pw,
            rx * pz - rz * px + rw * py - uy * pw,
            -rx * py + ry * px + rw * pz - uz * pw,
            rw * pw,
            rx * pw,
            ry * pw,
            rz * pw,
            -rx * px - ry * py - rz * pz - uw * pw,
        )
    }

    /// Returns `self ⟇ p`.
    ///
    /// This differs from [`Self::inv_geometric_antiprod_with_point()`] in the
    /// sign of the terms that mix the two parts of the motor with the point.
    pub fn geometric_antiprod_with_point(self, p: Point) -> Flector {
        let Self {
            rx,
            ry,
            rz,
            rw,
            ux,
            uy,
            uz,
            uw,
        } = self;
        let [px, py, pz, pw] = p.to_array();
        Flector::from_values(
            ry * pz - rz * py + rw * px + ux * pw,
            -rx * pz + rz * px + rw * py + uy * pw,
            rx * py - ry * px + rw * pz + uz * pw,
            rw * pw,
            rx * pw,
            ry * pw,
            rz * pw,
            -rx * px - ry * py - rz * pz + uw * pw,
        )
    }

    /// Returns `self ⟇ f`.
    pub fn geometric_antiprod_with_flector(self, f: Flector) -> Flector {
        let Self {
            rx,
            ry,
            rz,
            rw,
            ux,
            uy,
            uz,
            uw,
        } = self;
        let [sx, sy, sz, sw, hx, hy, hz, hw] = f.to_array();
        Flector::from_values(
            rx * hw + ry * sz - rz * sy + rw * sx + ux * sw + uy * hz - uz * hy + uw * hx,
            -rx * sz + ry * hw + rz * sx + rw * sy - ux * hz + uy * sw + uz * hx + uw * hy,
            rx * sy - ry * sx + rz * hw + rw * sz + ux * hy - uy * hx + uz * sw + uw * hz,
            -rx * hx - ry * hy - rz * hz + rw * sw,
            rx * sw + ry * hz - rz * hy + rw * hx,
            -rx * hz + ry * sw + rz * hx + rw * hy,
            rx * hy - ry * hx + rz * sw + rw * hz,
            -rx * sx - ry * sy - rz * sz + rw * hw - ux * hx - uy * hy - uz * hz + uw * sw,
        )
    }

    /// Returns `self ⟇ q`, the motion that applies `q` and then `self`.
    #[must_use]
    pub fn geometric_antiproduct_with_motor(self, q: Motor) -> Motor {
        let Self {
            rx,
            ry,
            rz,
            rw,
            ux,
            uy,
            uz,
            uw,
        } = self;
        Motor {
            rx: rx * q.rw + ry * q.rz - rz * q.ry + rw * q.rx,
            ry: -rx * q.rz + ry * q.rw + rz * q.rx + rw * q.ry,
            rz: rx * q.ry - ry * q.rx + rz * q.rw + rw * q.rz,
            rw: -rx * q.rx - ry * q.ry - rz * q.rz + rw * q.rw,
            ux: rx * q.uw + ry * q.uz - rz * q.uy + rw * q.ux + ux * q.rw + uy * q.rz
                - uz * q.ry
                + uw * q.rx,
            uy: -rx * q.uz + ry * q.uw + rz * q.ux + rw * q.uy - ux * q.rz
                + uy * q.rw
                + uz * q.rx
                + uw * q.ry,
            uz: rx * q.uy - ry * q.ux + rz * q.uw + rw * q.uz + ux * q.ry - uy * q.rx
                + uz * q.rw
                + uw * q.rz,
            uw: -rx * q.ux - ry * q.uy - rz * q.uz + rw * q.uw - ux * q.rx - uy * q.ry
                - uz * q.rz
                + uw * q.rw,
        }
    }

    /// Returns the geometric product `self q`, computed as the complement of
    /// the antiproduct of complements.
    #[must_use]
    pub fn geometric_product_with_motor(self, q: Motor) -> Motor {
        self.left_complement()
            .geometric_antiproduct_with_motor(q.left_complement())
            .right_complement()
    }

    /// Returns the left complement of the motor, which swaps the rotational
    /// and translational parts.
    ///
    /// On even elements of 3D PGA the left and right complements coincide and
    /// are involutions.
    #[must_use]
    pub fn left_complement(self) -> Motor {
        Motor {
            rx: -self.ux,
            ry: -self.uy,
            rz: -self.uz,
            rw: self.uw,
            ux: -self.rx,
            uy: -self.ry,
            uz: -self.rz,
            uw: self.rw,
        }
    }
    /// Returns the right complement of the motor, which is the same as the
    /// left complement.
    #[must_use]
    pub fn right_complement(self) -> Motor {
        self.left_complement()
    }

    /// Returns the antireverse of the motor, which is the inverse motion for
    /// a unit motor.
    #[must_use]
    pub fn antireverse(self) -> Motor {
        Motor {
            rx: -self.rx,
            ry: -self.ry,
            rz: -self.rz,
            rw: self.rw,
            ux: -self.ux,
            uy: -self.uy,
            uz: -self.uz,
            uw: self.uw,
        }
    }

    /// Applies the motion to a point, computing the sandwich
    /// `self ⟇ p ⟇ antireverse(self)` as two bilinear products.
    pub fn apply_to_point(self, p: Point) -> Point {
        let right = self.antireverse().inv_geometric_antiprod_with_point(p);
        self.geometric_antiprod_with_flector(right).point_part()
    }

    /// Transforms an object using the motor.
    pub fn transform<T: TransformByMotor>(&self, obj: &T) -> T {
        obj.transform_by(self)
    }
}

impl Mul<&Motor> for &Motor {
    type Output = Motor;

    /// Composes two motions. `a * b` applies `b` and then `a`.
    fn mul(self, rhs: &Motor) -> Self::Output {
        self.geometric_antiproduct_with_motor(*rhs)
    }
}

impl_forward_bin_ops_to_ref! {
    impl Mul for Motor { fn mul() }
}

impl MulAssign<Motor> for Motor {
    fn mul_assign(&mut self, rhs: Self) {
        *self = &*self * rhs;
    }
}
impl MulAssign<&Motor> for Motor {
    fn mul_assign(&mut self, rhs: &Self) {
        *self = &*self * rhs;
    }
}

impl Neg for Motor {
    type Output = Motor;

    /// Negates the coefficients of the motor. It still represents the same
    /// transformation.
    fn neg(self) -> Self::Output {
        Self::from_array(self.to_array().map(|x| -x))
    }
}

/// Trait for things that can be transformed by a [`Motor`].
pub trait TransformByMotor {
    /// Transform the object by the motor `m`.
    fn transform_by(&self, m: &Motor) -> Self;
}

impl TransformByMotor for Point {
    fn transform_by(&self, m: &Motor) -> Self {
        m.apply_to_point(*self)
    }
}

impl<T: TransformByMotor> TransformByMotor for Vec<T> {
    fn transform_by(&self, m: &Motor) -> Self {
        self.iter().map(|obj| m.transform(obj)).collect()
    }
}

impl<T: TransformByMotor> TransformByMotor for Option<T> {
    fn transform_by(&self, m: &Motor) -> Self {
        self.as_ref().map(|inner| inner.transform_by(m))
    }
}

impl<T: TransformByMotor, const N: usize> TransformByMotor for [T; N] {
    fn transform_by(&self, m: &Motor) -> Self {
        std::array::from_fn(|i| self[i].transform_by(m))
    }
}

macro_rules! impl_transform_by_motor_for_tuple {
    ($($generic_param:ident),+; $($index:tt),+) => {
        impl<$($generic_param: TransformByMotor,)+> TransformByMotor for ($($generic_param,)+) {
            fn transform_by(&self, m: &Motor) -> Self {
                ($(self.$index.transform_by(m),)+)
            }
        }
    };
}
impl_for_tuples!(impl_transform_by_motor_for_tuple);

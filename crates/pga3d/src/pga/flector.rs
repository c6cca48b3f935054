use std::ops::Neg;

use super::{Plane, Point};
use crate::Float;

/// Odd-grade element `sx e1 + sy e2 + sz e3 + sw e4 + hx e234 + hy e314 +
/// hz e124 + hw e321`: the sum of a point part and a plane part.
///
/// Flectors are what motors produce when applied to points. The point part of
/// a sandwich product is the transformed point.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Flector {
    sx: Float,
    sy: Float,
    sz: Float,
    sw: Float,
    hx: Float,
    hy: Float,
    hz: Float,
    hw: Float,
}

impl_coefficients!(Flector[8] {
    sx: "Returns the coefficient on `e1`." => Point::BASIS[0],
    sy: "Returns the coefficient on `e2`." => Point::BASIS[1],
    sz: "Returns the coefficient on `e3`." => Point::BASIS[2],
    sw: "Returns the coefficient on `e4`." => Point::BASIS[3],
    hx: "Returns the coefficient on `e234`." => Plane::BASIS[0],
    hy: "Returns the coefficient on `e314`." => Plane::BASIS[1],
    hz: "Returns the coefficient on `e124`." => Plane::BASIS[2],
    hw: "Returns the coefficient on `e321`." => Plane::BASIS[3],
});

impl Neg for Flector {
    type Output = Flector;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl Flector {
    /// Constructs a flector from raw coefficients.
    pub const fn from_values(
        sx: Float,
        sy: Float,
        sz: Float,
        sw: Float,
        hx: Float,
        hy: Float,
        hz: Float,
        hw: Float,
    ) -> Self {
        Self {
            sx,
            sy,
            sz,
            sw,
            hx,
            hy,
            hz,
            hw,
        }
    }

    /// Returns the flector with every coefficient negated.
    #[must_use]
    pub fn negate(self) -> Self {
        Self::from_array(self.to_array().map(|x| -x))
    }

    /// Returns the point part `(sx, sy, sz, sw)`.
    pub fn point_part(self) -> Point {
        Point::from_coords(self.sx, self.sy, self.sz, self.sw)
    }
    /// Returns the plane part `(hx, hy, hz, hw)`.
    pub fn plane_part(self) -> Plane {
        Plane::from_coords(self.hx, self.hy, self.hz, self.hw)
    }
}

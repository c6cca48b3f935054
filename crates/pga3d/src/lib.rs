//! Closed-form 3D projective geometric algebra: points, lines, planes, motors
//! (rigid motions), and flectors.
//!
//! Conventions follow [Rigid Geometric Algebra]: the Euclidean basis vectors
//! `e1`, `e2`, `e3` square to `+1`, the projective basis vector `e4` squares to
//! `0`, and rigid motions are applied with the geometric antiproduct `⟇`.
//!
//! [Rigid Geometric Algebra]: https://rigidgeometricalgebra.org/

pub use {approx_collections, cgmath};

use approx_collections::Precision;

/// Floating-point type used for geometry.
pub type Float = f64;

/// Euclidean 3D vector type used at the boundary of the algebra.
pub type Vec3 = cgmath::Vector3<Float>;

/// Precision used for approximate comparisons.
pub const APPROX: Precision = Precision::DEFAULT;

/// Asserts that both arguments are approximately equal, using [`APPROX`].
#[macro_export]
macro_rules! assert_approx_eq {
    ($a:expr, $b:expr $(,)?) => {
        match (&$a, &$b) {
            (a, b) => assert!(
                $crate::approx_collections::ApproxEq::approx_eq(a, b, $crate::APPROX),
                "assertion failed: `(left ≈ right)`\n  left: `{a:?}`\n right: `{b:?}`",
            ),
        }
    };
}

macro_rules! debug_panic {
    ($($tok:tt)*) => {
        match cfg!(debug_assertions) {
            true => panic!($($tok)*),
            false => log::error!($($tok)*),
        }
    };
}

#[macro_use]
mod impl_macros;

pub mod pga;
pub mod sign;
pub mod util;

pub use sign::Sign;

/// Structs, traits, and constants.
pub mod prelude {
    pub use crate::pga::{
        Axes, Flector, Line, Motor, Multivector, Plane, Point, Term, TransformByMotor,
    };
    pub use crate::sign::Sign;
    pub use crate::traits::*;
    pub use crate::{APPROX, Float, Vec3};
}
pub use prelude::*;

/// Traits only.
pub mod traits {
    pub use approx_collections::{ApproxEq, ApproxEqZero};
    pub use cgmath::InnerSpace;

    pub use crate::pga::{AsMultivector, TransformByMotor};
}

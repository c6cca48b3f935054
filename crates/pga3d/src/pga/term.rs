use std::fmt;
use std::ops::{Mul, MulAssign, Neg};

use approx_collections::{ApproxEq, ApproxEqZero, Precision};

use super::Axes;
use crate::Float;

/// Term in the projective geometric algebra, consisting of a real coefficient
/// and a bitmask representing the bases.
///
/// This struct isn't stored anywhere; it's mostly just constructed
/// temporarily for iteration over the terms of a multivector.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Term {
    /// Coefficient.
    pub coef: Float,
    /// Bitset of basis blades.
    pub axes: Axes,
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.coef, f)?;
        if !self.axes.is_empty() {
            write!(f, "*{}", self.axes)?;
        }
        Ok(())
    }
}

impl ApproxEq for Term {
    fn approx_eq(&self, other: &Self, prec: Precision) -> bool {
        self.axes == other.axes && prec.eq(self.coef, other.coef)
    }
}
impl ApproxEqZero for Term {
    fn approx_eq_zero(&self, prec: Precision) -> bool {
        prec.eq_zero(self.coef)
    }
}

impl Neg for Term {
    type Output = Term;

    fn neg(mut self) -> Self::Output {
        self.coef = -self.coef;
        self
    }
}

/// Scaling a term by a number.
impl Mul<Float> for Term {
    type Output = Term;

    fn mul(mut self, rhs: Float) -> Self::Output {
        self *= rhs;
        self
    }
}
impl MulAssign<Float> for Term {
    fn mul_assign(&mut self, rhs: Float) {
        self.coef *= rhs;
    }
}

impl Term {
    /// Constructs a scalar term.
    pub const fn scalar(x: Float) -> Self {
        Term {
            coef: x,
            axes: Axes::SCALAR,
        }
    }
    /// Constructs a unit term.
    pub const fn unit(axes: Axes) -> Self {
        Term { coef: 1.0, axes }
    }
    /// Constructs a negated unit term, for blades whose conventional name
    /// lists their axes in an odd permutation (such as `e31 = -e13`).
    pub const fn neg_unit(axes: Axes) -> Self {
        Term { coef: -1.0, axes }
    }

    /// Returns the grade of the term.
    pub const fn grade(self) -> u8 {
        self.axes.grade()
    }

    /// Returns the reverse term.
    #[must_use]
    pub fn reverse(mut self) -> Self {
        self.coef *= self.axes.sign_of_reverse();
        self
    }
    /// Returns the antireverse term.
    #[must_use]
    pub fn antireverse(mut self) -> Self {
        self.coef *= self.axes.sign_of_antireverse();
        self
    }

    /// Returns the [geometric product] between `lhs` and `rhs`, or `None` if
    /// the result is zero.
    ///
    /// [geometric product]:
    ///     https://rigidgeometricalgebra.org/wiki/index.php?title=Geometric_products
    #[must_use]
    pub fn geometric_product(lhs: Self, rhs: Self) -> Option<Self> {
        let sign = Axes::sign_of_geometric_product(lhs.axes, rhs.axes)?;
        Some(Term {
            coef: lhs.coef * rhs.coef * sign,
            axes: Axes::unsigned_geometric_product(lhs.axes, rhs.axes),
        })
    }
    /// Returns the [geometric antiproduct] between `lhs` and `rhs`, or `None`
    /// if the result is zero.
    ///
    /// [geometric antiproduct]:
    ///     https://rigidgeometricalgebra.org/wiki/index.php?title=Geometric_products
    #[must_use]
    pub fn geometric_antiproduct(lhs: Self, rhs: Self) -> Option<Self> {
        let sign = Axes::sign_of_geometric_antiproduct(lhs.axes, rhs.axes)?;
        Some(Term {
            coef: lhs.coef * rhs.coef * sign,
            axes: Axes::unsigned_geometric_antiproduct(lhs.axes, rhs.axes),
        })
    }
    /// Returns the [exterior product] between `lhs` and `rhs`, or `None` if the
    /// result is zero.
    ///
    /// [exterior product]:
    ///     https://rigidgeometricalgebra.org/wiki/index.php?title=Exterior_products#Exterior_Product
    #[must_use]
    pub fn wedge(lhs: Self, rhs: Self) -> Option<Self> {
        let sign = Axes::sign_of_wedge(lhs.axes, rhs.axes)?;
        Some(Term {
            coef: lhs.coef * rhs.coef * sign,
            axes: lhs.axes | rhs.axes,
        })
    }
    /// Returns the [exterior antiproduct] between `lhs` and `rhs`, or `None`
    /// if the result is zero.
    ///
    /// [exterior antiproduct]:
    ///     https://rigidgeometricalgebra.org/wiki/index.php?title=Exterior_products#Exterior_Antiproduct
    #[must_use]
    pub fn antiwedge(lhs: Self, rhs: Self) -> Option<Self> {
        Some(Self::wedge(lhs.right_complement(), rhs.right_complement())?.left_complement())
    }

    /// Returns the [right complement] of the term.
    ///
    /// [right complement]:
    ///     https://rigidgeometricalgebra.org/wiki/index.php?title=Complements
    #[must_use]
    pub fn right_complement(self) -> Term {
        Term {
            coef: self.coef * self.axes.sign_of_right_complement(),
            axes: self.axes.unsigned_complement(),
        }
    }
    /// Returns the [left complement] of the term.
    ///
    /// [left complement]:
    ///     https://rigidgeometricalgebra.org/wiki/index.php?title=Complements
    #[must_use]
    pub fn left_complement(self) -> Term {
        Term {
            coef: self.coef * self.axes.sign_of_left_complement(),
            axes: self.axes.unsigned_complement(),
        }
    }
}

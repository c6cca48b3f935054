use std::fmt;
use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use approx_collections::{ApproxEq, ApproxEqZero, Precision};
use itertools::iproduct;

use super::{Axes, Flector, Line, Motor, Plane, Point, Term};
use crate::Float;

/// General element of the 3D projective geometric algebra, stored densely as
/// one coefficient per basis blade.
///
/// This is the slow, table-driven counterpart of the closed-form entity types.
/// Every product is computed term by term from the sign rules on [`Axes`].
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Multivector([Float; Axes::COUNT]);

impl fmt::Display for Multivector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        super::display_terms(f, self.terms())
    }
}

impl ApproxEq for Multivector {
    fn approx_eq(&self, other: &Self, prec: Precision) -> bool {
        std::iter::zip(self.0, other.0).all(|(l, r)| prec.eq(l, r))
    }
}
impl ApproxEqZero for Multivector {
    fn approx_eq_zero(&self, prec: Precision) -> bool {
        self.0.iter().all(|x| prec.eq_zero(x))
    }
}

impl Index<Axes> for Multivector {
    type Output = Float;

    fn index(&self, index: Axes) -> &Self::Output {
        &self.0[index.bits() as usize]
    }
}
impl IndexMut<Axes> for Multivector {
    fn index_mut(&mut self, index: Axes) -> &mut Self::Output {
        &mut self.0[index.bits() as usize]
    }
}

impl Multivector {
    /// Zero multivector.
    pub const ZERO: Self = Self([0.0; Axes::COUNT]);

    /// Constructs a multivector with only a scalar component.
    pub fn scalar(x: Float) -> Self {
        Self::from_term(Term::scalar(x))
    }
    /// Constructs a multivector from a single term.
    pub fn from_term(term: Term) -> Self {
        let mut ret = Self::ZERO;
        ret += term;
        ret
    }
    /// Constructs a multivector by summing terms.
    pub fn from_terms(terms: impl IntoIterator<Item = Term>) -> Self {
        let mut ret = Self::ZERO;
        for term in terms {
            ret += term;
        }
        ret
    }
    /// Constructs a multivector from coefficients on a list of signed basis
    /// blades.
    pub fn from_basis<const N: usize>(basis: &[Term; N], coefs: [Float; N]) -> Self {
        Self::from_terms(std::iter::zip(basis, coefs).map(|(&b, coef)| b * coef))
    }
    /// Returns the coefficient on each signed basis blade in `basis`.
    ///
    /// Components not covered by `basis` are ignored.
    fn coefs_on_basis<const N: usize>(&self, basis: &[Term; N]) -> [Float; N] {
        basis.map(|b| self[b.axes] * b.coef)
    }

    /// Returns an iterator over all 16 terms, including zero ones.
    pub fn terms(&self) -> impl '_ + Clone + Iterator<Item = Term> {
        Axes::iter_all().map(|axes| Term {
            coef: self[axes],
            axes,
        })
    }
    /// Returns an iterator over the nonzero terms.
    pub fn nonzero_terms(&self) -> impl '_ + Clone + Iterator<Item = Term> {
        self.terms().filter(|t| t.coef != 0.0)
    }

    fn map_terms(&self, f: impl Fn(Term) -> Term) -> Self {
        Self::from_terms(self.nonzero_terms().map(f))
    }
    fn product(lhs: &Self, rhs: &Self, f: impl Fn(Term, Term) -> Option<Term>) -> Self {
        let mut ret = Self::ZERO;
        for (l, r) in iproduct!(lhs.nonzero_terms(), rhs.nonzero_terms()) {
            ret += f(l, r);
        }
        ret
    }

    /// Returns the [geometric product] between `lhs` and `rhs`.
    ///
    /// [geometric product]:
    ///     https://rigidgeometricalgebra.org/wiki/index.php?title=Geometric_products
    #[must_use]
    pub fn geometric_product(lhs: &Self, rhs: &Self) -> Self {
        Self::product(lhs, rhs, Term::geometric_product)
    }
    /// Returns the [geometric antiproduct] between `lhs` and `rhs`.
    ///
    /// [geometric antiproduct]:
    ///     https://rigidgeometricalgebra.org/wiki/index.php?title=Geometric_products
    #[must_use]
    pub fn geometric_antiproduct(lhs: &Self, rhs: &Self) -> Self {
        Self::product(lhs, rhs, Term::geometric_antiproduct)
    }
    /// Returns the [exterior product] (join) between `lhs` and `rhs`.
    ///
    /// [exterior product]:
    ///     https://rigidgeometricalgebra.org/wiki/index.php?title=Exterior_products
    #[must_use]
    pub fn wedge(lhs: &Self, rhs: &Self) -> Self {
        Self::product(lhs, rhs, Term::wedge)
    }
    /// Returns the [exterior antiproduct] (meet) between `lhs` and `rhs`.
    ///
    /// [exterior antiproduct]:
    ///     https://rigidgeometricalgebra.org/wiki/index.php?title=Exterior_products
    #[must_use]
    pub fn antiwedge(lhs: &Self, rhs: &Self) -> Self {
        Self::product(lhs, rhs, Term::antiwedge)
    }

    /// Returns the right complement of the multivector.
    #[must_use]
    pub fn right_complement(&self) -> Self {
        self.map_terms(Term::right_complement)
    }
    /// Returns the left complement of the multivector.
    #[must_use]
    pub fn left_complement(&self) -> Self {
        self.map_terms(Term::left_complement)
    }
    /// Returns the reverse of the multivector.
    #[must_use]
    pub fn reverse(&self) -> Self {
        self.map_terms(Term::reverse)
    }
    /// Returns the antireverse of the multivector.
    #[must_use]
    pub fn antireverse(&self) -> Self {
        self.map_terms(Term::antireverse)
    }
    /// Returns the component of the multivector with grade `grade`.
    #[must_use]
    pub fn grade_project(&self, grade: u8) -> Self {
        Self::from_terms(self.nonzero_terms().filter(|t| t.grade() == grade))
    }

    /// Returns the grade-1 part of the multivector as a point.
    pub fn to_point(&self) -> Point {
        Point::from_array(self.coefs_on_basis(&Point::BASIS))
    }
    /// Returns the grade-2 part of the multivector as a line.
    pub fn to_line(&self) -> Line {
        Line::from_array(self.coefs_on_basis(&Line::BASIS))
    }
    /// Returns the grade-3 part of the multivector as a plane.
    pub fn to_plane(&self) -> Plane {
        Plane::from_array(self.coefs_on_basis(&Plane::BASIS))
    }
    /// Returns the odd part of the multivector as a flector.
    pub fn to_flector(&self) -> Flector {
        Flector::from_array(self.coefs_on_basis(&Flector::BASIS))
    }
    /// Returns the even part of the multivector as a motor.
    pub fn to_motor(&self) -> Motor {
        Motor::from_array(self.coefs_on_basis(&Motor::BASIS))
    }
}

impl AddAssign<Term> for Multivector {
    fn add_assign(&mut self, rhs: Term) {
        self[rhs.axes] += rhs.coef;
    }
}
impl AddAssign<Option<Term>> for Multivector {
    fn add_assign(&mut self, rhs: Option<Term>) {
        if let Some(r) = rhs {
            *self += r;
        }
    }
}
impl AddAssign for Multivector {
    fn add_assign(&mut self, rhs: Self) {
        for (l, r) in std::iter::zip(&mut self.0, rhs.0) {
            *l += r;
        }
    }
}
impl SubAssign for Multivector {
    fn sub_assign(&mut self, rhs: Self) {
        *self += -rhs;
    }
}
impl MulAssign<Float> for Multivector {
    fn mul_assign(&mut self, rhs: Float) {
        for coef in &mut self.0 {
            *coef *= rhs;
        }
    }
}

impl<T> Add<T> for Multivector
where
    Multivector: AddAssign<T>,
{
    type Output = Multivector;

    fn add(mut self, rhs: T) -> Self::Output {
        self += rhs;
        self
    }
}
impl Sub for Multivector {
    type Output = Multivector;

    fn sub(mut self, rhs: Self) -> Self::Output {
        self -= rhs;
        self
    }
}
impl Mul<Float> for Multivector {
    type Output = Multivector;

    fn mul(mut self, rhs: Float) -> Self::Output {
        self *= rhs;
        self
    }
}
impl Neg for Multivector {
    type Output = Multivector;

    fn neg(self) -> Self::Output {
        self * -1.0
    }
}
